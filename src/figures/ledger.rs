//! Transaction-level ledger rows shown on a statement

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::Serialize;

use crate::types::{TransactionDetail, TransactionType};

/// Keep stored-card transactions and refunds, in their original order.
///
/// Wallet-only and credit-only rows are dropped. The returned iterator is
/// lazy and cloneable; calling again re-filters the same slice.
pub fn filter_ledger_rows(
    details: &[TransactionDetail],
) -> impl Iterator<Item = &TransactionDetail> + Clone + '_ {
    details.iter().filter(|detail| is_ledger_row(detail))
}

fn is_ledger_row(detail: &TransactionDetail) -> bool {
    detail.transaction_type == TransactionType::StoredCard || detail.is_refunded()
}

/// How a ledger row is labelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LedgerRowKind {
    StoredCard,
    Refund,
}

/// Display projection of one filtered transaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerRow<'a> {
    pub id: &'a str,
    pub date: Option<NaiveDate>,
    pub kind: LedgerRowKind,
    /// Amount with refunds shown as negative
    pub amount: BigDecimal,
    pub commission: &'a BigDecimal,
    pub bsmv: BigDecimal,
    pub net_amount: &'a BigDecimal,
}

impl<'a> LedgerRow<'a> {
    pub fn from_detail(detail: &'a TransactionDetail) -> Self {
        let (kind, amount) = if detail.is_refunded() {
            (LedgerRowKind::Refund, -detail.amount.clone())
        } else {
            (LedgerRowKind::StoredCard, detail.amount.clone())
        };

        Self {
            id: &detail.id,
            date: detail.date,
            kind,
            amount,
            commission: &detail.commission,
            bsmv: detail.bsmv.clone().unwrap_or_else(|| BigDecimal::from(0)),
            net_amount: &detail.net_amount,
        }
    }
}

/// Ledger rows projected for display
pub fn ledger_rows(details: &[TransactionDetail]) -> impl Iterator<Item = LedgerRow<'_>> + Clone {
    filter_ledger_rows(details).map(LedgerRow::from_detail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TransactionStatus;

    fn detail(id: &str, transaction_type: TransactionType, status: TransactionStatus) -> TransactionDetail {
        TransactionDetail {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 12),
            transaction_type,
            status,
            amount: BigDecimal::from(100),
            commission: BigDecimal::from(2),
            net_amount: BigDecimal::from(98),
            bsmv: None,
        }
    }

    fn mixed_details() -> Vec<TransactionDetail> {
        use TransactionStatus::*;
        use TransactionType::*;
        vec![
            detail("t1", StoredCard, Completed),
            detail("t2", Credit, Completed),
            detail("t3", Wallet, Refunded),
            detail("t4", StoredCard, Completed),
            detail("t5", StoredCard, Refunded),
            detail("t6", Credit, Completed),
            detail("t7", StoredCard, Completed),
            detail("t8", Wallet, Refunded),
            detail("t9", StoredCard, Completed),
            detail("t10", StoredCard, Pending),
        ]
    }

    #[test]
    fn test_filter_keeps_stored_card_and_refunds_in_order() {
        let details = mixed_details();
        let ids: Vec<&str> = filter_ledger_rows(&details).map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t3", "t4", "t5", "t7", "t8", "t9", "t10"]);
    }

    #[test]
    fn test_filter_is_restartable() {
        let details = mixed_details();
        let rows = filter_ledger_rows(&details);
        assert_eq!(rows.clone().count(), 8);
        assert_eq!(rows.count(), 8);
        assert_eq!(filter_ledger_rows(&details).count(), 8);
        assert_eq!(details.len(), 10);
    }

    #[test]
    fn test_filter_of_empty_ledger() {
        assert_eq!(filter_ledger_rows(&[]).count(), 0);
    }

    #[test]
    fn test_refund_rows_are_negated() {
        let mut refund = detail("r1", TransactionType::Wallet, TransactionStatus::Refunded);
        refund.bsmv = Some(BigDecimal::from(1));
        let row = LedgerRow::from_detail(&refund);

        assert_eq!(row.kind, LedgerRowKind::Refund);
        assert_eq!(row.amount, BigDecimal::from(-100));
        assert_eq!(row.bsmv, BigDecimal::from(1));
        assert_eq!(*row.net_amount, BigDecimal::from(98));
    }

    #[test]
    fn test_missing_bsmv_defaults_to_zero() {
        let sale = detail("s1", TransactionType::StoredCard, TransactionStatus::Completed);
        let row = LedgerRow::from_detail(&sale);

        assert_eq!(row.kind, LedgerRowKind::StoredCard);
        assert_eq!(row.amount, BigDecimal::from(100));
        assert_eq!(row.bsmv, BigDecimal::from(0));
    }
}
