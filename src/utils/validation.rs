//! Validation utilities

use bigdecimal::BigDecimal;

use crate::traits::*;
use crate::types::*;

/// Validate that refunds are a subset of the sales they reverse
pub fn validate_refund_subset(
    sales: &TransactionAggregate,
    refunds: &RefundAggregate,
) -> FiguresResult<()> {
    if refunds.refund_count > sales.count {
        return Err(FiguresError::Validation(format!(
            "Refund count {} exceeds transaction count {}",
            refunds.refund_count, sales.count
        )));
    }

    if refunds.refund_volume < BigDecimal::from(0) {
        return Err(FiguresError::Validation(
            "Refund volume cannot be negative".to_string(),
        ));
    }

    if refunds.refund_volume > sales.volume {
        return Err(FiguresError::Validation(format!(
            "Refund volume {} exceeds transaction volume {}",
            refunds.refund_volume, sales.volume
        )));
    }

    Ok(())
}

/// Validate that a reporting subset does not exceed the aggregate it is
/// drawn from
pub fn validate_aggregate_subset(
    whole: &TransactionAggregate,
    subset: &TransactionAggregate,
) -> FiguresResult<()> {
    if subset.count > whole.count {
        return Err(FiguresError::Validation(format!(
            "Subset count {} exceeds aggregate count {}",
            subset.count, whole.count
        )));
    }

    if subset.volume > whole.volume {
        return Err(FiguresError::Validation(format!(
            "Subset volume {} exceeds aggregate volume {}",
            subset.volume, whole.volume
        )));
    }

    Ok(())
}

/// Strict validator that also checks the subset relationships between
/// aggregates
pub struct StrictRecordValidator;

impl RecordValidator for StrictRecordValidator {
    fn validate_statement(&self, statement: &StatementRecord) -> FiguresResult<()> {
        DefaultRecordValidator.validate_statement(statement)?;

        let stored_card = &statement.stored_card_transactions;
        validate_refund_subset(&stored_card.sales, &stored_card.refunds)?;

        if statement.bsmv_amount < BigDecimal::from(0) {
            return Err(FiguresError::Validation(
                "BSMV amount cannot be negative".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_receipt(&self, receipt: &ReceiptRecord) -> FiguresResult<()> {
        DefaultRecordValidator.validate_receipt(receipt)?;
        validate_aggregate_subset(&receipt.wallet_transactions, &receipt.credit_transactions)
    }
}
