//! Figures for the merchant statement detail panel

use bigdecimal::BigDecimal;
use serde::Serialize;
use tracing::debug;

use crate::config::FiguresConfig;
use crate::figures::*;
use crate::panel::export::LedgerExport;
use crate::types::*;

/// Settlement status and whether the statement can still be paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentStatus {
    pub status: StatementStatus,
    pub payable: bool,
}

/// General summary block of a statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub gmv: BigDecimal,
    pub order_count: u64,
    pub user_count: Option<u64>,
    pub frequency: Option<BigDecimal>,
    pub average_basket: BigDecimal,
}

/// Stored-card share of all Hepsipay product transactions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HpProductFigures {
    pub total_gmv: BigDecimal,
    pub stored_card_gmv: BigDecimal,
    pub total_count: u64,
    pub stored_card_count: u64,
}

/// Every figure that depends on the merchant's commission rate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommissionFigures {
    pub rate: BigDecimal,
    pub due: CommissionDue,
    pub breakdown: BucketBreakdown,
    /// Stored-card volume minus the total commission due
    pub net_payout: BigDecimal,
    pub show_other_fees: bool,
}

/// First rows of the filtered ledger
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerPreview<'a> {
    pub rows: Vec<LedgerRow<'a>>,
    /// Matching rows not shown in the preview
    pub remaining: usize,
}

impl LedgerPreview<'_> {
    /// No rows at all, shown or hidden
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.remaining == 0
    }
}

/// Everything the statement panel displays
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementSummary<'a> {
    pub payment_status: PaymentStatus,
    pub overview: Overview,
    pub card_form: CardFormTransactions,
    pub hp_products: HpProductFigures,
    pub commission: CommissionFigures,
    pub ledger_preview: LedgerPreview<'a>,
}

/// Read-only view over a statement record
#[derive(Debug, Clone)]
pub struct StatementPanel<'a> {
    record: &'a StatementRecord,
    config: &'a FiguresConfig,
}

impl<'a> StatementPanel<'a> {
    pub fn new(record: &'a StatementRecord, config: &'a FiguresConfig) -> Self {
        Self { record, config }
    }

    pub fn record(&self) -> &'a StatementRecord {
        self.record
    }

    pub fn payment_status(&self) -> PaymentStatus {
        PaymentStatus {
            status: self.record.status,
            payable: self.record.status.is_payable(),
        }
    }

    pub fn overview(&self) -> Overview {
        let sales = &self.record.stored_card_transactions.sales;
        Overview {
            gmv: sales.volume.clone(),
            order_count: sales.count,
            user_count: self.record.user_count,
            frequency: self.record.frequency.clone(),
            average_basket: average_basket(&sales.volume, sales.count),
        }
    }

    /// Card-form transactions, all zero when the statement has none
    pub fn card_form(&self) -> CardFormTransactions {
        match &self.record.card_form_transactions {
            Some(card_form) => card_form.clone(),
            None => {
                debug!(statement = %self.record.id, "no card-form transactions, using zeros");
                CardFormTransactions::default()
            }
        }
    }

    pub fn hp_products(&self) -> HpProductFigures {
        let sales = &self.record.stored_card_transactions.sales;
        let hp = match &self.record.hp_product_transactions {
            Some(hp) => hp.clone(),
            None => {
                debug!(statement = %self.record.id, "no HP product transactions, using zeros");
                HpProductTransactions::default()
            }
        };

        HpProductFigures {
            total_gmv: hp.total_gmv,
            stored_card_gmv: sales.volume.clone(),
            total_count: hp.total_count,
            stored_card_count: sales.count,
        }
    }

    /// Commission figures. Fails when the merchant's rate text cannot be
    /// parsed; no figure is computed with a guessed rate.
    pub fn commission_figures(&self) -> FiguresResult<CommissionFigures> {
        let rate = effective_commission_rate(&self.record.merchant.stored_card_commission)?;
        let stored_card = &self.record.stored_card_transactions;
        let other_fees = self.record.other_fees.as_ref();

        let due = total_commission_due(
            &stored_card.sales,
            &stored_card.refunds,
            &rate,
            &self.record.bsmv_amount,
            other_fees,
        );
        let breakdown = bucket_breakdown(
            &stored_card.sales,
            &stored_card.refunds,
            &rate,
            &self.record.bsmv_amount,
            &self.config.bsmv_rate_on_commission,
        );
        let net_payout = &stored_card.sales.volume - &due.total_due;
        let show_other_fees = due.other_fees > BigDecimal::from(0);

        Ok(CommissionFigures {
            rate,
            due,
            breakdown,
            net_payout,
            show_other_fees,
        })
    }

    pub fn ledger_rows(&self) -> impl Iterator<Item = LedgerRow<'a>> + Clone {
        ledger_rows(&self.record.transaction_details)
    }

    pub fn ledger_preview(&self) -> LedgerPreview<'a> {
        let limit = self.config.ledger_preview_limit;
        let total = filter_ledger_rows(&self.record.transaction_details).count();

        LedgerPreview {
            rows: self.ledger_rows().take(limit).collect(),
            remaining: total.saturating_sub(limit),
        }
    }

    pub fn ledger_export(&self) -> LedgerExport<'a> {
        LedgerExport::paginate(
            self.record,
            self.ledger_rows(),
            self.config.export_rows_per_page,
        )
    }

    /// All panel figures at once
    pub fn summarize(&self) -> FiguresResult<StatementSummary<'a>> {
        Ok(StatementSummary {
            payment_status: self.payment_status(),
            overview: self.overview(),
            card_form: self.card_form(),
            hp_products: self.hp_products(),
            commission: self.commission_figures()?,
            ledger_preview: self.ledger_preview(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(text: &str) -> BigDecimal {
        BigDecimal::from_str(text).unwrap()
    }

    fn statement(rate: &str, details: usize) -> StatementRecord {
        StatementRecord {
            id: "EKS-2024-03".to_string(),
            period: "Mart 2024".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 4, 15).unwrap(),
            status: StatementStatus::Pending,
            merchant: Merchant {
                id: "M-1001".to_string(),
                name: "Örnek Mağaza".to_string(),
                iban: "TR00 0000 0000 0000 0000 0000 00".to_string(),
                stored_card_commission: rate.to_string(),
                payment_term: "T+1".to_string(),
                package: "Standart".to_string(),
            },
            stored_card_transactions: StoredCardTransactions::new(
                TransactionAggregate::new(100, dec("10000"), dec("250")),
                RefundAggregate::new(2, dec("200")),
            ),
            card_form_transactions: None,
            hp_product_transactions: None,
            bsmv_amount: dec("12.5"),
            other_fees: None,
            user_count: None,
            frequency: None,
            transaction_details: (0..details)
                .map(|i| TransactionDetail {
                    id: format!("TX-{i}"),
                    date: NaiveDate::from_ymd_opt(2024, 3, 1),
                    transaction_type: TransactionType::StoredCard,
                    status: TransactionStatus::Completed,
                    amount: dec("100"),
                    commission: dec("2.5"),
                    net_amount: dec("97.5"),
                    bsmv: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_commission_figures() {
        let record = statement("2,50%", 0);
        let config = FiguresConfig::default();
        let figures = StatementPanel::new(&record, &config).commission_figures().unwrap();

        assert_eq!(figures.rate, dec("0.025"));
        assert_eq!(figures.due.total_due, dec("257.5"));
        assert_eq!(figures.breakdown.total.net, dec("9537.5"));
        assert_eq!(figures.net_payout, dec("9742.5"));
        assert!(!figures.show_other_fees);
    }

    #[test]
    fn test_malformed_rate_is_surfaced() {
        let record = statement("yok", 3);
        let config = FiguresConfig::default();
        let panel = StatementPanel::new(&record, &config);

        assert!(matches!(panel.commission_figures(), Err(FiguresError::Rate(_))));
        assert!(matches!(panel.summarize(), Err(FiguresError::Rate(_))));
        // Rate-independent figures are still available
        assert_eq!(panel.overview().gmv, dec("10000"));
        assert_eq!(panel.ledger_preview().rows.len(), 3);
    }

    #[test]
    fn test_overview_and_optional_blocks() {
        let record = statement("2,50%", 0);
        let config = FiguresConfig::default();
        let panel = StatementPanel::new(&record, &config);

        let overview = panel.overview();
        assert_eq!(overview.average_basket, dec("100"));
        assert_eq!(overview.user_count, None);

        assert_eq!(panel.card_form(), CardFormTransactions::default());
        let hp = panel.hp_products();
        assert_eq!(hp.total_gmv, dec("0"));
        assert_eq!(hp.stored_card_count, 100);
    }

    #[test]
    fn test_payment_status() {
        let mut record = statement("2,50%", 0);
        let config = FiguresConfig::default();
        assert!(StatementPanel::new(&record, &config).payment_status().payable);

        record.status = StatementStatus::Paid;
        assert!(!StatementPanel::new(&record, &config).payment_status().payable);
    }

    #[test]
    fn test_ledger_preview_limits_rows() {
        let record = statement("2,50%", 14);
        let config = FiguresConfig::default();
        let preview = StatementPanel::new(&record, &config).ledger_preview();

        assert_eq!(preview.rows.len(), 10);
        assert_eq!(preview.remaining, 4);
        assert_eq!(preview.rows[0].id, "TX-0");

        let empty = statement("2,50%", 0);
        let preview = StatementPanel::new(&empty, &config).ledger_preview();
        assert!(preview.is_empty());
        assert_eq!(preview.remaining, 0);
    }

    #[test]
    fn test_zero_preview_limit_hides_rows_but_is_not_empty() {
        let record = statement("2,50%", 3);
        let config = FiguresConfig::default().with_ledger_preview_limit(0);
        let preview = StatementPanel::new(&record, &config).ledger_preview();

        assert!(preview.rows.is_empty());
        assert_eq!(preview.remaining, 3);
        assert!(!preview.is_empty());
    }

    #[test]
    fn test_other_fees_shown_when_positive() {
        let mut record = statement("2,50%", 0);
        record.other_fees = Some(dec("15"));
        let config = FiguresConfig::default();
        let figures = StatementPanel::new(&record, &config).commission_figures().unwrap();

        assert!(figures.show_other_fees);
        assert_eq!(figures.due.total_due, dec("272.5"));
    }
}
