//! Figures for the payment receipt detail panel

use bigdecimal::BigDecimal;
use serde::Serialize;

use crate::figures::{reconcile_net_amount, ReconciledAmount};
use crate::types::{ReceiptRecord, ReceiptStatus};

/// Everything the receipt panel displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptFigures {
    pub wallet: ReconciledAmount,
    /// Shopping-credit subset, reconciled on its own
    pub credit: ReconciledAmount,
    pub total_volume: BigDecimal,
    pub total_commission: BigDecimal,
    /// Net amount paid to the merchant
    pub grand_total: BigDecimal,
    /// The wallet net amount was recalculated and needs a footnote
    pub recalculated: bool,
    pub completed: bool,
}

/// Net amount paid out for a receipt.
///
/// Only the wallet aggregate counts; credit transactions are already part of
/// it and are never added again.
pub fn compute_grand_total(record: &ReceiptRecord) -> BigDecimal {
    &record.wallet_transactions.volume - &record.wallet_transactions.commission
}

/// Read-only view over a receipt record
#[derive(Debug, Clone, Copy)]
pub struct ReceiptPanel<'a> {
    record: &'a ReceiptRecord,
}

impl<'a> ReceiptPanel<'a> {
    pub fn new(record: &'a ReceiptRecord) -> Self {
        Self { record }
    }

    pub fn record(&self) -> &'a ReceiptRecord {
        self.record
    }

    pub fn figures(&self) -> ReceiptFigures {
        let wallet = reconcile_net_amount(&self.record.wallet_transactions);
        let credit = reconcile_net_amount(&self.record.credit_transactions);
        let recalculated = wallet.discrepancy;

        ReceiptFigures {
            total_volume: self.record.wallet_transactions.volume.clone(),
            total_commission: self.record.wallet_transactions.commission.clone(),
            grand_total: compute_grand_total(self.record),
            wallet,
            credit,
            recalculated,
            completed: self.record.status == ReceiptStatus::Completed,
        }
    }
}
