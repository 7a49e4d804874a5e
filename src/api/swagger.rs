use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Balance Tracker Service API",
        version = "1.0.0",
        description = "API documentation for the Balance Tracker Service.\n\n**Features:**\n- Aggregate balance lookup per address and coin\n- Highest-value transaction per coin\n- Health monitoring and metrics\n\nBoth upstream datasets are re-fetched on every request; responses reflect the upstream state at request time.",
        contact(
            name = "Balance Tracker Team",
            email = "support@balance-tracker.com"
        )
    ),
    paths(
        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,

        // Balances
        crate::api::balances::get_balances,
    ),
    components(
        schemas(
            // Health & Metrics
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,

            // Balances
            crate::models::balance::BalanceLookupResponse,
            crate::models::transaction::MaxTransaction,
        )
    ),
    tags(
        (name = "Health", description = "Health check and system metrics endpoints for monitoring service status."),
        (name = "Balances", description = "Balance lookup endpoints. Aggregate an address's holdings per coin and find the highest-value transaction for that coin."),
    )
)]
pub struct ApiDoc;
