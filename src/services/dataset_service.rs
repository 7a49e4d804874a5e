use serde::de::DeserializeOwned;
use std::env;

use crate::models::{BalanceDataset, TransactionDataset};
use crate::utils::error::FetchError;

// Public demo datasets; override via BALANCE_DATA_URL / TRANSACTION_DATA_URL.
const DEFAULT_BALANCE_DATA_URL: &str = "https://www.jsonkeeper.com/b/ILH9";
const DEFAULT_TRANSACTION_DATA_URL: &str = "https://www.jsonkeeper.com/b/K4PX";

/// Upstream dataset locations, resolved once at startup and shared with
/// handlers through `web::Data`.
#[derive(Debug, Clone)]
pub struct DatasetSources {
    pub balance_url: String,
    pub transaction_url: String,
}

impl DatasetSources {
    pub fn from_env() -> Self {
        DatasetSources {
            balance_url: env::var("BALANCE_DATA_URL")
                .unwrap_or_else(|_| DEFAULT_BALANCE_DATA_URL.to_string()),
            transaction_url: env::var("TRANSACTION_DATA_URL")
                .unwrap_or_else(|_| DEFAULT_TRANSACTION_DATA_URL.to_string()),
        }
    }
}

/// Issues an HTTP GET against `url` and decodes the JSON body into `T`.
async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .header("Accept", "application/json")
        .timeout(std::time::Duration::from_secs(10))
        .send()
        .await
        .map_err(|e| FetchError::Network(format!("Failed to fetch {}: {}", url, e)))?;

    if !response.status().is_success() {
        return Err(FetchError::Network(format!(
            "Upstream returned {} for {}",
            response.status(),
            url
        )));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(format!("Failed to parse response from {}: {}", url, e)))
}

pub async fn fetch_balance_dataset(url: &str) -> Result<BalanceDataset, FetchError> {
    log::info!("🌐 Fetching balance dataset from {}", url);

    let dataset: BalanceDataset = fetch_json(url).await?;

    log::info!("✅ Got {} balance records", dataset.initial_state.len());

    Ok(dataset)
}

pub async fn fetch_transaction_dataset(url: &str) -> Result<TransactionDataset, FetchError> {
    log::info!("🌐 Fetching transaction dataset from {}", url);

    let dataset: TransactionDataset = fetch_json(url).await?;

    log::info!("✅ Got {} transactions", dataset.transactions.len());

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_dataset_decodes_upstream_shape() {
        let raw = r#"{
            "initial_state": [
                {"address": "addr-1", "coin": "BTC", "balance": "3.0 BTC"},
                {"address": "addr-2", "coin": "doge", "balance": "120"}
            ]
        }"#;

        let dataset: BalanceDataset = serde_json::from_str(raw).unwrap();
        assert_eq!(dataset.initial_state.len(), 2);
        assert_eq!(dataset.initial_state[0].address, "addr-1");
        assert_eq!(dataset.initial_state[0].balance, "3.0 BTC");
    }

    #[test]
    fn test_transaction_dataset_decodes_upstream_shape() {
        let raw = r#"{
            "transactions": [
                {
                    "transactionID": "tx-1",
                    "from": "addr-1",
                    "to": "addr-2",
                    "coin": "ton",
                    "value": 42.5,
                    "fee": 0.01,
                    "timestamp": "2024-03-01T12:00:00Z"
                }
            ]
        }"#;

        let dataset: TransactionDataset = serde_json::from_str(raw).unwrap();
        assert_eq!(dataset.transactions.len(), 1);
        assert_eq!(dataset.transactions[0].transaction_id, "tx-1");
        assert_eq!(dataset.transactions[0].value, 42.5);
        assert_eq!(dataset.transactions[0].fee, 0.01);
    }

    #[actix_rt::test]
    async fn test_fetch_unreachable_host_is_network_error() {
        // Port 9 (discard) is not listening on loopback
        let result = fetch_balance_dataset("http://127.0.0.1:9/balances").await;
        assert!(matches!(result, Err(FetchError::Network(_))));
    }
}
