use crate::models::{MaxTransaction, TransactionRecord};

/// Finds the transaction with the strictly greatest value among records whose
/// coin matches `coin` case-insensitively. The scan is left-to-right with a
/// strict `>` comparison, so the earliest maximum wins ties. Returns `None`
/// when no record matches. The coin in the result is normalized to lowercase.
pub fn find_max_transaction(records: &[TransactionRecord], coin: &str) -> Option<MaxTransaction> {
    let coin = coin.to_lowercase();
    let mut max: Option<&TransactionRecord> = None;

    for transaction in records {
        if transaction.coin.to_lowercase() != coin {
            continue;
        }
        match max {
            Some(current) if transaction.value <= current.value => {}
            _ => max = Some(transaction),
        }
    }

    max.map(|transaction| MaxTransaction {
        transaction_id: transaction.transaction_id.clone(),
        from: transaction.from.clone(),
        to: transaction.to.clone(),
        coin: transaction.coin.to_lowercase(),
        value: transaction.value,
        timestamp: transaction.timestamp.clone(),
    })
}
