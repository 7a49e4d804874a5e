use crate::models::BalanceRecord;

/// Sums the balance of every record matching `address` (exact) and `coin`
/// (case-insensitive). Only the first whitespace-delimited token of the
/// balance string is parsed; tokens that fail to parse contribute 0.
/// Returns 0.0 when nothing matches, so an unknown address is
/// indistinguishable from a true zero balance.
pub fn aggregate_balance(records: &[BalanceRecord], address: &str, coin: &str) -> f64 {
    let coin = coin.to_lowercase();
    let mut total = 0.0;

    for record in records {
        if record.address == address && record.coin.to_lowercase() == coin {
            let amount = record
                .balance
                .split_whitespace()
                .next()
                .and_then(|token| token.parse::<f64>().ok())
                .unwrap_or(0.0);
            total += amount;
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(address: &str, coin: &str, balance: &str) -> BalanceRecord {
        BalanceRecord {
            address: address.to_string(),
            coin: coin.to_string(),
            balance: balance.to_string(),
        }
    }

    #[test]
    fn test_sums_matching_records() {
        let records = vec![
            record("addr-1", "btc", "3.0 BTC"),
            record("addr-1", "BTC", "2.0"),
            record("addr-1", "doge", "50"),
            record("addr-2", "btc", "9.9"),
        ];

        let total = aggregate_balance(&records, "addr-1", "btc");
        assert_eq!(total, 5.0);
    }

    #[test]
    fn test_coin_match_is_case_insensitive() {
        let records = vec![
            record("addr-1", "btc", "1.0"),
            record("addr-1", "Btc", "2.0"),
        ];

        assert_eq!(aggregate_balance(&records, "addr-1", "BTC"), 3.0);
    }

    #[test]
    fn test_address_match_is_exact() {
        let records = vec![record("addr-1", "btc", "1.0")];

        assert_eq!(aggregate_balance(&records, "ADDR-1", "btc"), 0.0);
    }

    #[test]
    fn test_unparsable_balance_contributes_zero() {
        let records = vec![
            record("addr-1", "ton", "not-a-number TON"),
            record("addr-1", "ton", "4.5 TON"),
        ];

        assert_eq!(aggregate_balance(&records, "addr-1", "ton"), 4.5);
    }

    #[test]
    fn test_no_matches_returns_zero() {
        let records = vec![record("addr-1", "btc", "1.0")];

        assert_eq!(aggregate_balance(&records, "addr-9", "btc"), 0.0);
        assert_eq!(aggregate_balance(&[], "addr-1", "btc"), 0.0);
    }
}
