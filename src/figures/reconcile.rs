//! Net-amount reconciliation

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::TransactionAggregate;

/// Net amount to display for an aggregate, with the discrepancy annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciledAmount {
    /// Value to display; always `volume - commission`
    pub value: BigDecimal,
    /// Net amount the data source asserted, if any
    pub asserted: Option<BigDecimal>,
    /// Set when the asserted value disagrees with `value`. The caller owes
    /// the reader a footnote saying the figure was recalculated.
    pub discrepancy: bool,
}

impl ReconciledAmount {
    /// Aggregate whose asserted net amount is this reconciled value
    pub fn as_asserted(&self, aggregate: &TransactionAggregate) -> TransactionAggregate {
        aggregate.clone().with_net_amount(self.value.clone())
    }
}

/// Reconcile the asserted net amount of an aggregate against its arithmetic.
///
/// The calculated `volume - commission` always wins. Each aggregate is
/// reconciled on its own; nothing is carried between aggregates.
pub fn reconcile_net_amount(aggregate: &TransactionAggregate) -> ReconciledAmount {
    let calculated = &aggregate.volume - &aggregate.commission;

    let discrepancy = match &aggregate.net_amount {
        Some(asserted) => *asserted != calculated,
        None => false,
    };

    if discrepancy {
        debug!(
            asserted = ?aggregate.net_amount,
            calculated = %calculated,
            "asserted net amount disagrees with volume - commission, using calculated value"
        );
    }

    ReconciledAmount {
        value: calculated,
        asserted: aggregate.net_amount.clone(),
        discrepancy,
    }
}
