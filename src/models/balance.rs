use serde::{Deserialize, Serialize};

use crate::models::transaction::MaxTransaction;

/// Upstream balance dataset: `{"initial_state": [...]}`.
#[derive(Debug, Deserialize)]
pub struct BalanceDataset {
    pub initial_state: Vec<BalanceRecord>,
}

/// One entry of the upstream balance dataset. The `balance` field is a free-form
/// string whose first whitespace-delimited token is the numeric amount
/// (e.g. "3.0 BTC").
#[derive(Debug, Deserialize, Clone)]
pub struct BalanceRecord {
    pub address: String,
    pub coin: String,
    pub balance: String,
}

/// Response body for GET /balances.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct BalanceLookupResponse {
    pub message: String,
    pub balance: f64,
    #[serde(rename = "maxTransaction")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_transaction: Option<MaxTransaction>,
}
