//! Compact string encoding of the transaction list.
//!
//! Records are joined by `;` and each record is `amount,timestamp` where the
//! timestamp is epoch milliseconds.

use chrono::{TimeZone, Utc};

use crate::ledger::Transaction;

const RECORD_SEPARATOR: char = ';';
const FIELD_SEPARATOR: char = ',';

pub fn encode_transactions(transactions: &[Transaction]) -> String {
    transactions
        .iter()
        .map(|txn| {
            format!(
                "{}{}{}",
                txn.amount,
                FIELD_SEPARATOR,
                txn.timestamp_millis()
            )
        })
        .collect::<Vec<_>>()
        .join(&RECORD_SEPARATOR.to_string())
}

/// Decodes an encoded list. Records that do not parse are dropped.
pub fn decode_transactions(data: &str) -> Vec<Transaction> {
    if data.is_empty() {
        return Vec::new();
    }
    data.split(RECORD_SEPARATOR)
        .filter_map(|record| {
            let parsed = decode_record(record);
            if parsed.is_none() {
                tracing::debug!(record, "dropping malformed transaction record");
            }
            parsed
        })
        .collect()
}

fn decode_record(record: &str) -> Option<Transaction> {
    let mut fields = record.split(FIELD_SEPARATOR);
    let (amount, millis) = match (fields.next(), fields.next(), fields.next()) {
        (Some(amount), Some(millis), None) => (amount, millis),
        _ => return None,
    };
    let amount = amount
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)?;
    let millis = millis.trim().parse::<i64>().ok()?;
    let timestamp = Utc.timestamp_millis_opt(millis).single()?;
    Some(Transaction::new(amount, timestamp))
}
