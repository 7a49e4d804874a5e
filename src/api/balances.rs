use actix_web::{web, HttpResponse};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::metrics;
use crate::models::BalanceLookupResponse;
use crate::services::dataset_service::{self, DatasetSources};
use crate::services::{balance_service, transaction_service};

#[derive(Debug, Deserialize, IntoParams)]
pub struct BalanceQuery {
    /// Wallet address, matched exactly
    #[serde(default)]
    pub address: String,
    /// Coin symbol, matched case-insensitively
    #[serde(default)]
    pub coin: String,
}

// GET /balances?address=xxx&coin=btc - Aggregate balance + max transaction.
// Both datasets are fetched fresh on every request; the two fetches are
// independent and may observe different upstream states.
#[utoipa::path(
    get,
    path = "/balances",
    tag = "Balances",
    params(BalanceQuery),
    responses(
        (status = 200, description = "Aggregate balance and highest-value transaction for the coin", body = BalanceLookupResponse),
        (status = 400, description = "Missing address or coin query parameter"),
        (status = 500, description = "Upstream dataset fetch failed")
    )
)]
pub async fn get_balances(
    query: web::Query<BalanceQuery>,
    sources: web::Data<DatasetSources>,
) -> HttpResponse {
    log::info!(
        "📊 GET /balances - address: {}, coin: {}",
        query.address,
        query.coin
    );

    if query.address.is_empty() || query.coin.is_empty() {
        return HttpResponse::BadRequest().body("address or coin is required");
    }

    let balances = match dataset_service::fetch_balance_dataset(&sources.balance_url).await {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("❌ Failed to fetch balance dataset: {}", e);
            metrics::increment_upstream_failure_count();
            return HttpResponse::InternalServerError().body("Failed to fetch balance data");
        }
    };

    let balance =
        balance_service::aggregate_balance(&balances.initial_state, &query.address, &query.coin);

    let transactions =
        match dataset_service::fetch_transaction_dataset(&sources.transaction_url).await {
            Ok(dataset) => dataset,
            Err(e) => {
                log::error!("❌ Failed to fetch transaction dataset: {}", e);
                metrics::increment_upstream_failure_count();
                return HttpResponse::InternalServerError().body("Failed to fetch transaction data");
            }
        };

    let max_transaction =
        transaction_service::find_max_transaction(&transactions.transactions, &query.coin);

    log::info!(
        "✅ Balance {} for {} ({}), max transaction: {}",
        balance,
        query.address,
        query.coin,
        max_transaction
            .as_ref()
            .map(|t| t.transaction_id.as_str())
            .unwrap_or("none")
    );

    HttpResponse::Ok().json(BalanceLookupResponse {
        message: "Data fetched successfully".to_string(),
        balance,
        max_transaction,
    })
}
