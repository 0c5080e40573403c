//! Core record types supplied by the upstream data source

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::figures::rate::RateParseError;

/// Deserialization of decimal amounts from upstream JSON.
///
/// JSON numbers with a fraction arrive as `f64`; they are read back through
/// their shortest round-trip text so `1250.75` stays `1250.75` instead of the
/// exact binary expansion. Strings and integers are taken as they are.
mod amount {
    use bigdecimal::BigDecimal;
    use serde::de::{self, Deserializer, Visitor};
    use serde::Deserialize;
    use std::fmt;
    use std::str::FromStr;

    struct Amount(BigDecimal);

    struct AmountVisitor;

    impl<'de> Visitor<'de> for AmountVisitor {
        type Value = Amount;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            formatter.write_str("a decimal amount as a number or string")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Amount, E> {
            Ok(Amount(BigDecimal::from(value)))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Amount, E> {
            Ok(Amount(BigDecimal::from(value)))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Amount, E> {
            if !value.is_finite() {
                return Err(E::custom(format!("amount {value} is not finite")));
            }
            BigDecimal::from_str(&value.to_string())
                .map(Amount)
                .map_err(|error| E::custom(format!("invalid amount {value}: {error}")))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Amount, E> {
            BigDecimal::from_str(value.trim())
                .map(Amount)
                .map_err(|error| E::custom(format!("invalid amount '{value}': {error}")))
        }
    }

    impl<'de> Deserialize<'de> for Amount {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(AmountVisitor)
        }
    }

    /// Required amount field
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigDecimal, D::Error> {
        Amount::deserialize(deserializer).map(|amount| amount.0)
    }

    /// Optional amount field; `null` and absent both give `None`
    pub fn optional<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<BigDecimal>, D::Error> {
        Option::<Amount>::deserialize(deserializer).map(|amount| amount.map(|amount| amount.0))
    }
}

/// Count, volume and commission of one bucket of transactions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionAggregate {
    /// Number of transactions
    pub count: u64,
    /// Sum of transaction amounts
    #[serde(deserialize_with = "amount::deserialize")]
    pub volume: BigDecimal,
    /// Commission charged against `volume`
    #[serde(deserialize_with = "amount::deserialize")]
    pub commission: BigDecimal,
    /// Net amount as asserted by the data source (`volume - commission`),
    /// which may disagree with the arithmetic
    #[serde(
        default,
        deserialize_with = "amount::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub net_amount: Option<BigDecimal>,
}

impl TransactionAggregate {
    /// Create an aggregate without an asserted net amount
    pub fn new(count: u64, volume: BigDecimal, commission: BigDecimal) -> Self {
        Self {
            count,
            volume,
            commission,
            net_amount: None,
        }
    }

    /// Attach the net amount the data source asserts
    pub fn with_net_amount(mut self, net_amount: BigDecimal) -> Self {
        self.net_amount = Some(net_amount);
        self
    }
}

/// Transactions reversed within the period. Always a subset of the primary
/// aggregate, never added to totals on its own.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundAggregate {
    #[serde(default)]
    pub refund_count: u64,
    #[serde(default, deserialize_with = "amount::deserialize")]
    pub refund_volume: BigDecimal,
}

impl RefundAggregate {
    pub fn new(refund_count: u64, refund_volume: BigDecimal) -> Self {
        Self {
            refund_count,
            refund_volume,
        }
    }
}

/// Stored-card bucket of a statement: sales plus the refunds among them
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StoredCardTransactions {
    #[serde(flatten)]
    pub sales: TransactionAggregate,
    #[serde(flatten)]
    pub refunds: RefundAggregate,
}

impl StoredCardTransactions {
    pub fn new(sales: TransactionAggregate, refunds: RefundAggregate) -> Self {
        Self { sales, refunds }
    }
}

/// Card-form checkout volume split by Hepsipay membership
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CardFormTransactions {
    #[serde(rename = "totalGMV", default, deserialize_with = "amount::deserialize")]
    pub total_gmv: BigDecimal,
    #[serde(rename = "hpGMV", default, deserialize_with = "amount::deserialize")]
    pub hp_gmv: BigDecimal,
    #[serde(rename = "nonHpGMV", default, deserialize_with = "amount::deserialize")]
    pub non_hp_gmv: BigDecimal,
    #[serde(rename = "totalCount", default)]
    pub total_count: u64,
    #[serde(rename = "hpCount", default)]
    pub hp_count: u64,
    #[serde(rename = "nonHpCount", default)]
    pub non_hp_count: u64,
}

/// Volume of all Hepsipay product transactions in the period
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HpProductTransactions {
    #[serde(rename = "totalGMV", default, deserialize_with = "amount::deserialize")]
    pub total_gmv: BigDecimal,
    #[serde(rename = "totalCount", default)]
    pub total_count: u64,
}

/// Merchant the statement is issued to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    pub id: String,
    pub name: String,
    pub iban: String,
    /// Stored-card commission rate as display text, e.g. `"2,50%"`
    pub stored_card_commission: String,
    #[serde(default)]
    pub payment_term: String,
    #[serde(default)]
    pub package: String,
}

/// Settlement status of a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatementStatus {
    Paid,
    Pending,
    #[serde(alias = "late")]
    Overdue,
}

impl StatementStatus {
    /// Pending and overdue statements can still be paid
    pub fn is_payable(&self) -> bool {
        matches!(self, StatementStatus::Pending | StatementStatus::Overdue)
    }
}

/// Kind of an individual ledger transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionType {
    StoredCard,
    Wallet,
    Credit,
    #[serde(other)]
    Other,
}

/// Processing status of an individual ledger transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionStatus {
    Completed,
    Refunded,
    Pending,
    #[serde(other)]
    Other,
}

/// Single transaction listed on a statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetail {
    pub id: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub status: TransactionStatus,
    #[serde(deserialize_with = "amount::deserialize")]
    pub amount: BigDecimal,
    #[serde(deserialize_with = "amount::deserialize")]
    pub commission: BigDecimal,
    #[serde(deserialize_with = "amount::deserialize")]
    pub net_amount: BigDecimal,
    #[serde(
        default,
        deserialize_with = "amount::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub bsmv: Option<BigDecimal>,
}

impl TransactionDetail {
    pub fn is_refunded(&self) -> bool {
        self.status == TransactionStatus::Refunded
    }
}

/// Merchant statement for one settlement period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementRecord {
    pub id: String,
    /// Period identifier, e.g. `"Mart 2024"`
    pub period: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: StatementStatus,
    pub merchant: Merchant,
    pub stored_card_transactions: StoredCardTransactions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_form_transactions: Option<CardFormTransactions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp_product_transactions: Option<HpProductTransactions>,
    /// Statement-level BSMV tax line
    #[serde(deserialize_with = "amount::deserialize")]
    pub bsmv_amount: BigDecimal,
    #[serde(
        default,
        deserialize_with = "amount::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub other_fees: Option<BigDecimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_count: Option<u64>,
    #[serde(
        default,
        deserialize_with = "amount::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub frequency: Option<BigDecimal>,
    #[serde(default)]
    pub transaction_details: Vec<TransactionDetail>,
}

/// Settlement status of a payment receipt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReceiptStatus {
    Completed,
    Pending,
    #[serde(other)]
    Other,
}

/// Payment receipt for wallet transactions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRecord {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    pub status: ReceiptStatus,
    pub wallet_transactions: TransactionAggregate,
    /// Shopping-credit transactions. A reporting subset of the wallet
    /// transactions; never added to wallet totals.
    pub credit_transactions: TransactionAggregate,
}

/// Errors that can occur while deriving or loading figures
#[derive(Debug, thiserror::Error)]
pub enum FiguresError {
    #[error("Commission rate unavailable: {0}")]
    Rate(#[from] RateParseError),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Record not found: {0}")]
    RecordNotFound(String),
    #[error("Record source error: {0}")]
    Source(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for figure operations
pub type FiguresResult<T> = Result<T, FiguresError>;
