pub mod balance;
pub mod transaction;

pub use balance::*;
pub use transaction::*;
