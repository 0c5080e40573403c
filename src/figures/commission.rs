//! Refund-adjusted commission and the stored-card summary table

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::types::{RefundAggregate, TransactionAggregate};

/// Commission owed for a statement after refunds, plus tax and fee lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionDue {
    /// Commission reversed for refunded volume
    pub refund_commission: BigDecimal,
    /// Commission charged minus the refund reversal
    pub net_commission: BigDecimal,
    /// Statement-level BSMV line, unaffected by refunds
    pub bsmv_amount: BigDecimal,
    /// Other fees, zero when the statement carries none
    pub other_fees: BigDecimal,
    /// `net_commission + bsmv_amount + other_fees`
    pub total_due: BigDecimal,
}

/// Compute the total commission due on a statement.
///
/// `rate` is the merchant's commission ratio and only drives the refund
/// reversal. BSMV is additive and rate independent.
pub fn total_commission_due(
    aggregate: &TransactionAggregate,
    refunds: &RefundAggregate,
    rate: &BigDecimal,
    bsmv_amount: &BigDecimal,
    other_fees: Option<&BigDecimal>,
) -> CommissionDue {
    let refund_commission = &refunds.refund_volume * rate;
    let net_commission = &aggregate.commission - &refund_commission;
    let other_fees = other_fees.cloned().unwrap_or_else(|| BigDecimal::from(0));
    let total_due = &net_commission + bsmv_amount + &other_fees;

    CommissionDue {
        refund_commission,
        net_commission,
        bsmv_amount: bsmv_amount.clone(),
        other_fees,
        total_due,
    }
}

/// One row of the stored-card summary table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub count: i64,
    pub volume: BigDecimal,
    pub commission: BigDecimal,
    pub tax: BigDecimal,
    pub net: BigDecimal,
}

/// Sales, refund and total rows of the stored-card summary table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketBreakdown {
    pub primary: SummaryRow,
    /// Refund row with monetary values negated for display. The count stays
    /// positive.
    pub refund: SummaryRow,
    pub total: SummaryRow,
}

impl BucketBreakdown {
    /// Commission and tax columns of the total row plus other fees. Matches
    /// `CommissionDue::total_due` for the same inputs.
    pub fn total_charges(&self, other_fees: Option<&BigDecimal>) -> BigDecimal {
        let other_fees = other_fees.cloned().unwrap_or_else(|| BigDecimal::from(0));
        &self.total.commission + &self.total.tax + other_fees
    }
}

/// Net of an amount after its commission and the tax on that commission
fn net_after_commission(amount: &BigDecimal, commission: &BigDecimal, tax: &BigDecimal) -> BigDecimal {
    amount - commission - tax
}

/// Build the three summary-table rows.
///
/// The primary and refund rows carry a computed tax of
/// `commission * bsmv_rate_on_commission`. The total row's tax column is the
/// statement-level `bsmv_amount` instead, and its net subtracts the full
/// commission and that BSMV amount. The two tax figures are not derived from
/// each other.
pub fn bucket_breakdown(
    aggregate: &TransactionAggregate,
    refunds: &RefundAggregate,
    rate: &BigDecimal,
    bsmv_amount: &BigDecimal,
    bsmv_rate_on_commission: &BigDecimal,
) -> BucketBreakdown {
    let tax = &aggregate.commission * bsmv_rate_on_commission;
    let primary = SummaryRow {
        count: count_as_signed(aggregate.count),
        volume: aggregate.volume.clone(),
        commission: aggregate.commission.clone(),
        net: net_after_commission(&aggregate.volume, &aggregate.commission, &tax),
        tax,
    };

    let refund_commission = &refunds.refund_volume * rate;
    let refund_tax = &refund_commission * bsmv_rate_on_commission;
    let refund_net = net_after_commission(&refunds.refund_volume, &refund_commission, &refund_tax);
    let refund = SummaryRow {
        count: count_as_signed(refunds.refund_count),
        volume: -refunds.refund_volume.clone(),
        commission: -refund_commission.clone(),
        tax: -refund_tax,
        net: -refund_net,
    };

    let total = SummaryRow {
        count: count_as_signed(aggregate.count) - count_as_signed(refunds.refund_count),
        volume: &aggregate.volume - &refunds.refund_volume,
        commission: &aggregate.commission - &refund_commission,
        tax: bsmv_amount.clone(),
        net: &aggregate.volume - &refunds.refund_volume - &aggregate.commission - bsmv_amount,
    };

    BucketBreakdown {
        primary,
        refund,
        total,
    }
}

/// Average transaction amount, treating a zero count as one
pub fn average_basket(volume: &BigDecimal, count: u64) -> BigDecimal {
    volume.clone() / BigDecimal::from(count.max(1))
}

fn count_as_signed(count: u64) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(text: &str) -> BigDecimal {
        BigDecimal::from_str(text).unwrap()
    }

    fn scenario() -> (TransactionAggregate, RefundAggregate) {
        (
            TransactionAggregate::new(100, dec("10000"), dec("250")),
            RefundAggregate::new(2, dec("200")),
        )
    }

    #[test]
    fn test_total_commission_due() {
        let (sales, refunds) = scenario();
        let due = total_commission_due(&sales, &refunds, &dec("0.025"), &dec("12.5"), Some(&dec("0")));

        assert_eq!(due.refund_commission, dec("5"));
        assert_eq!(due.net_commission, dec("245"));
        assert_eq!(due.bsmv_amount, dec("12.5"));
        assert_eq!(due.total_due, dec("257.5"));
    }

    #[test]
    fn test_missing_other_fees_default_to_zero() {
        let (sales, refunds) = scenario();
        let due = total_commission_due(&sales, &refunds, &dec("0.025"), &dec("12.5"), None);
        assert_eq!(due.other_fees, dec("0"));
        assert_eq!(due.total_due, dec("257.5"));

        let with_fees =
            total_commission_due(&sales, &refunds, &dec("0.025"), &dec("12.5"), Some(&dec("40")));
        assert_eq!(with_fees.total_due, dec("297.5"));
    }

    #[test]
    fn test_refunds_never_reduce_bsmv() {
        let sales = TransactionAggregate::new(10, dec("1000"), dec("20"));
        let small = total_commission_due(&sales, &RefundAggregate::new(1, dec("10")), &dec("0.02"), &dec("7"), None);
        let large = total_commission_due(&sales, &RefundAggregate::new(5, dec("900")), &dec("0.02"), &dec("7"), None);

        assert_eq!(small.bsmv_amount, dec("7"));
        assert_eq!(large.bsmv_amount, dec("7"));
        assert!(large.net_commission < small.net_commission);
    }

    #[test]
    fn test_breakdown_rows() {
        let (sales, refunds) = scenario();
        let breakdown = bucket_breakdown(&sales, &refunds, &dec("0.025"), &dec("12.5"), &dec("0.05"));

        assert_eq!(breakdown.primary.count, 100);
        assert_eq!(breakdown.primary.tax, dec("12.5"));
        assert_eq!(breakdown.primary.net, dec("9737.5"));

        assert_eq!(breakdown.refund.count, 2);
        assert_eq!(breakdown.refund.volume, dec("-200"));
        assert_eq!(breakdown.refund.commission, dec("-5"));
        assert_eq!(breakdown.refund.tax, dec("-0.25"));
        assert_eq!(breakdown.refund.net, dec("-194.75"));

        assert_eq!(breakdown.total.count, 98);
        assert_eq!(breakdown.total.volume, dec("9800"));
        assert_eq!(breakdown.total.commission, dec("245"));
        assert_eq!(breakdown.total.tax, dec("12.5"));
        assert_eq!(breakdown.total.net, dec("9537.5"));
    }

    #[test]
    fn test_total_row_tax_is_statement_bsmv() {
        let (sales, refunds) = scenario();
        let breakdown = bucket_breakdown(&sales, &refunds, &dec("0.025"), &dec("99"), &dec("0.05"));

        let computed_tax = &breakdown.primary.tax + &breakdown.refund.tax;
        assert_eq!(breakdown.total.tax, dec("99"));
        assert_ne!(breakdown.total.tax, computed_tax);
    }

    #[test]
    fn test_total_charges_match_commission_due() {
        let (sales, refunds) = scenario();
        let fees = dec("3.75");
        let breakdown = bucket_breakdown(&sales, &refunds, &dec("0.025"), &dec("12.5"), &dec("0.05"));
        let due = total_commission_due(&sales, &refunds, &dec("0.025"), &dec("12.5"), Some(&fees));

        assert_eq!(breakdown.total_charges(Some(&fees)), due.total_due);
    }

    #[test]
    fn test_refund_row_mirrors_primary_formula() {
        let bsmv_rate = dec("0.05");
        for (volume, rate) in [("0", "0"), ("200", "0.025"), ("1234.56", "0.019"), ("50", "1")] {
            let r = dec(volume);
            let p = dec(rate);
            let breakdown = bucket_breakdown(
                &TransactionAggregate::default(),
                &RefundAggregate::new(1, r.clone()),
                &p,
                &dec("0"),
                &bsmv_rate,
            );

            let rp = &r * &p;
            let expected = -(&r - &rp - &rp * &bsmv_rate);
            assert_eq!(breakdown.refund.net, expected);

            let mirrored = bucket_breakdown(
                &TransactionAggregate::new(1, r.clone(), rp.clone()),
                &RefundAggregate::default(),
                &p,
                &dec("0"),
                &bsmv_rate,
            );
            assert_eq!(breakdown.refund.net, -mirrored.primary.net);
        }
    }

    #[test]
    fn test_zero_valued_aggregate() {
        let breakdown = bucket_breakdown(
            &TransactionAggregate::default(),
            &RefundAggregate::default(),
            &dec("0.025"),
            &dec("0"),
            &dec("0.05"),
        );
        assert_eq!(breakdown.total.count, 0);
        assert_eq!(breakdown.total.net, dec("0"));
    }

    #[test]
    fn test_average_basket_guards_zero_count() {
        assert_eq!(average_basket(&dec("10000"), 100), dec("100"));
        assert_eq!(average_basket(&dec("250"), 0), dec("250"));
        assert_eq!(average_basket(&dec("0"), 0), dec("0"));
    }
}
