//! Traits for the record source boundary and record validation

use async_trait::async_trait;

use crate::types::*;

/// Source of statement and receipt snapshots
///
/// The figure functions never fetch anything. Whatever loads records for the
/// back office (an HTTP client, a database, fixtures) implements this trait.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Get a statement by ID
    async fn get_statement(&self, statement_id: &str) -> FiguresResult<Option<StatementRecord>>;

    /// Get a receipt by ID
    async fn get_receipt(&self, receipt_id: &str) -> FiguresResult<Option<ReceiptRecord>>;

    /// List statements, optionally only those of one merchant
    async fn list_statements(&self, merchant_id: Option<&str>) -> FiguresResult<Vec<StatementRecord>>;
}

/// Trait for implementing structural checks on loaded records
///
/// A disagreement between an asserted net amount and `volume - commission` is
/// never a validation failure; it is resolved by reconciliation.
pub trait RecordValidator: Send + Sync {
    fn validate_statement(&self, statement: &StatementRecord) -> FiguresResult<()>;

    fn validate_receipt(&self, receipt: &ReceiptRecord) -> FiguresResult<()>;
}

/// Default validator: identifiers must be present
pub struct DefaultRecordValidator;

impl RecordValidator for DefaultRecordValidator {
    fn validate_statement(&self, statement: &StatementRecord) -> FiguresResult<()> {
        if statement.id.trim().is_empty() {
            return Err(FiguresError::Validation(
                "Statement ID cannot be empty".to_string(),
            ));
        }

        if statement.merchant.id.trim().is_empty() {
            return Err(FiguresError::Validation(
                "Merchant ID cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_receipt(&self, receipt: &ReceiptRecord) -> FiguresResult<()> {
        if receipt.id.trim().is_empty() {
            return Err(FiguresError::Validation(
                "Receipt ID cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
