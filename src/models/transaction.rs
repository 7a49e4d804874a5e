use serde::{Deserialize, Serialize};

/// Upstream transaction dataset: `{"transactions": [...]}`.
#[derive(Debug, Deserialize)]
pub struct TransactionDataset {
    pub transactions: Vec<TransactionRecord>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TransactionRecord {
    #[serde(rename = "transactionID")]
    pub transaction_id: String,
    pub from: String,
    pub to: String,
    pub coin: String,
    pub value: f64,
    pub fee: f64,
    pub timestamp: String,
}

/// Highest-value transaction for the requested coin, as returned to the
/// client. The fee is not part of the response payload.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct MaxTransaction {
    #[serde(rename = "transactionID")]
    pub transaction_id: String,
    pub from: String,
    pub to: String,
    pub coin: String,
    pub value: f64,
    pub timestamp: String,
}
