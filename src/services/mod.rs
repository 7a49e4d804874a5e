pub mod balance_service;
pub mod dataset_service;
pub mod transaction_service;

pub use balance_service::*;
pub use dataset_service::*;
pub use transaction_service::*;
