//! Back-office desk that opens statement and receipt panels

use tracing::info;

use crate::config::FiguresConfig;
use crate::panel::{ReceiptFigures, ReceiptPanel, StatementPanel};
use crate::traits::*;
use crate::types::*;

/// A statement loaded for display, owning its snapshot
#[derive(Debug, Clone)]
pub struct OpenedStatement {
    record: StatementRecord,
    config: FiguresConfig,
}

impl OpenedStatement {
    pub fn record(&self) -> &StatementRecord {
        &self.record
    }

    /// Panel over the loaded snapshot
    pub fn panel(&self) -> StatementPanel<'_> {
        StatementPanel::new(&self.record, &self.config)
    }
}

/// A receipt loaded for display with its figures
#[derive(Debug, Clone)]
pub struct OpenedReceipt {
    pub record: ReceiptRecord,
    pub figures: ReceiptFigures,
}

/// Loads records from a source, validates them and hands out panels
pub struct PanelDesk<S: RecordSource> {
    source: S,
    validator: Box<dyn RecordValidator>,
    config: FiguresConfig,
}

impl<S: RecordSource> PanelDesk<S> {
    /// Create a desk with the default validator and settings
    pub fn new(source: S) -> Self {
        Self {
            source,
            validator: Box::new(DefaultRecordValidator),
            config: FiguresConfig::default(),
        }
    }

    /// Create a desk with a custom validator
    pub fn with_validator(source: S, validator: Box<dyn RecordValidator>) -> Self {
        Self {
            source,
            validator,
            config: FiguresConfig::default(),
        }
    }

    /// Replace the settings after validating them
    pub fn with_config(mut self, config: FiguresConfig) -> FiguresResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &FiguresConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load and validate a statement
    pub async fn open_statement(&self, statement_id: &str) -> FiguresResult<OpenedStatement> {
        let record = self
            .source
            .get_statement(statement_id)
            .await?
            .ok_or_else(|| FiguresError::RecordNotFound(statement_id.to_string()))?;

        self.validator.validate_statement(&record)?;
        info!(
            statement = %record.id,
            merchant = %record.merchant.id,
            details = record.transaction_details.len(),
            "statement opened"
        );

        Ok(OpenedStatement {
            record,
            config: self.config.clone(),
        })
    }

    /// Load and validate a receipt, and compute its figures
    pub async fn open_receipt(&self, receipt_id: &str) -> FiguresResult<OpenedReceipt> {
        let record = self
            .source
            .get_receipt(receipt_id)
            .await?
            .ok_or_else(|| FiguresError::RecordNotFound(receipt_id.to_string()))?;

        self.validator.validate_receipt(&record)?;
        let figures = ReceiptPanel::new(&record).figures();
        info!(receipt = %record.id, recalculated = figures.recalculated, "receipt opened");

        Ok(OpenedReceipt { record, figures })
    }

    /// Statements of a merchant, newest first
    pub async fn merchant_statements(&self, merchant_id: &str) -> FiguresResult<Vec<StatementRecord>> {
        self.source.list_statements(Some(merchant_id)).await
    }
}
