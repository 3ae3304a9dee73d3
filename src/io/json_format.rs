//! JSON Lines format handling for stored transactions
//!
//! The transaction store is a plain text file with one JSON object per
//! line. This module centralizes the line codec, providing:
//! - Decoding a single store line into a [`Transaction`]
//! - Encoding a [`Transaction`] into a single store line
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{PosError, Transaction};

/// Decode one store line into a transaction
///
/// # Arguments
///
/// * `line` - One line of the store file, without the trailing newline
/// * `line_number` - One-based line number, used for error reporting
///
/// # Errors
///
/// Returns `PosError::CorruptRecord` carrying `line_number` if the line
/// is not a well-formed transaction object. Missing fields, wrong types,
/// negative amounts, and unknown payment methods are all corrupt.
pub fn parse_line(line: &str, line_number: usize) -> Result<Transaction, PosError> {
    serde_json::from_str(line).map_err(|e| PosError::corrupt_record(line_number, e.to_string()))
}

/// Encode a transaction as one store line
///
/// The output is a single line with no trailing newline. Field names and
/// order are fixed by the record shape, so encoding is deterministic.
///
/// # Errors
///
/// Returns `PosError::Io` if encoding fails.
pub fn to_line(transaction: &Transaction) -> Result<String, PosError> {
    serde_json::to_string(transaction)
        .map_err(|e| PosError::io(format!("Failed to encode transaction record: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LineItem, PaymentMethod};
    use rstest::rstest;
    use uuid::Uuid;

    fn sample_transaction() -> Transaction {
        Transaction {
            receipt_id: Uuid::nil(),
            datetime: "2026-01-05 10:00:00".to_string(),
            items: vec![LineItem {
                name: "Logo".to_string(),
                qty: 2,
                price: 50,
                total: 100,
            }],
            total: 100,
            method: PaymentMethod::Cash,
            cash: 150,
            change: 50,
        }
    }

    #[test]
    fn test_to_line_exact_wire_shape() {
        let line = to_line(&sample_transaction()).unwrap();
        assert_eq!(
            line,
            r#"{"receipt_id":"00000000-0000-0000-0000-000000000000","datetime":"2026-01-05 10:00:00","items":[{"name":"Logo","qty":2,"price":50,"total":100}],"total":100,"method":"cash","cash":150,"change":50}"#
        );
    }

    #[test]
    fn test_to_line_is_single_line() {
        let line = to_line(&sample_transaction()).unwrap();
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_parse_line_valid_record() {
        let line = r#"{"receipt_id":"11111111-1111-1111-1111-111111111111","datetime":"2026-01-05 10:00:00","items":[{"name":"ID Lace","qty":1,"price":75,"total":75}],"total":75,"method":"card","cash":75,"change":0}"#;

        let transaction = parse_line(line, 1).unwrap();
        assert_eq!(
            transaction.receipt_id,
            "11111111-1111-1111-1111-111111111111".parse::<Uuid>().unwrap()
        );
        assert_eq!(transaction.datetime, "2026-01-05 10:00:00");
        assert_eq!(transaction.items.len(), 1);
        assert_eq!(transaction.items[0].name, "ID Lace");
        assert_eq!(transaction.items[0].qty, 1);
        assert_eq!(transaction.total, 75);
        assert_eq!(transaction.method, PaymentMethod::Card);
        assert_eq!(transaction.cash, 75);
        assert_eq!(transaction.change, 0);
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let original = sample_transaction();
        let line = to_line(&original).unwrap();
        let decoded = parse_line(&line, 1).unwrap();
        assert_eq!(decoded, original);
    }

    #[rstest]
    #[case::not_json("not json at all")]
    #[case::truncated(r#"{"receipt_id":"00000000-0000-0000-0000-000000000000","datetime":"#)]
    #[case::missing_total(
        r#"{"receipt_id":"00000000-0000-0000-0000-000000000000","datetime":"2026-01-05 10:00:00","items":[],"method":"cash","cash":0,"change":0}"#
    )]
    #[case::bad_receipt_id(
        r#"{"receipt_id":"not-a-uuid","datetime":"2026-01-05 10:00:00","items":[],"total":0,"method":"cash","cash":0,"change":0}"#
    )]
    #[case::unknown_method(
        r#"{"receipt_id":"00000000-0000-0000-0000-000000000000","datetime":"2026-01-05 10:00:00","items":[],"total":0,"method":"cheque","cash":0,"change":0}"#
    )]
    #[case::negative_total(
        r#"{"receipt_id":"00000000-0000-0000-0000-000000000000","datetime":"2026-01-05 10:00:00","items":[],"total":-5,"method":"cash","cash":0,"change":0}"#
    )]
    #[case::string_total(
        r#"{"receipt_id":"00000000-0000-0000-0000-000000000000","datetime":"2026-01-05 10:00:00","items":[],"total":"100","method":"cash","cash":0,"change":0}"#
    )]
    fn test_parse_line_corrupt_records(#[case] line: &str) {
        let error = parse_line(line, 7).unwrap_err();
        assert!(matches!(error, PosError::CorruptRecord { line: 7, .. }));
    }

    #[test]
    fn test_parse_line_reports_given_line_number() {
        let error = parse_line("{", 42).unwrap_err();
        match error {
            PosError::CorruptRecord { line, .. } => assert_eq!(line, 42),
            other => panic!("expected CorruptRecord, got {:?}", other),
        }
    }
}
