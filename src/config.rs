//! Tunable constants for figure derivation and ledger presentation

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::types::{FiguresError, FiguresResult};

/// Settings shared by the statement and receipt panels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FiguresConfig {
    /// BSMV rate applied to commission in the sales and refund summary rows
    pub bsmv_rate_on_commission: BigDecimal,
    /// Number of ledger rows shown before the "and N more" line
    pub ledger_preview_limit: usize,
    /// Ledger rows per page of the exported document
    pub export_rows_per_page: usize,
}

impl Default for FiguresConfig {
    fn default() -> Self {
        Self {
            // 5%
            bsmv_rate_on_commission: BigDecimal::new(5.into(), 2),
            ledger_preview_limit: 10,
            export_rows_per_page: 25,
        }
    }
}

impl FiguresConfig {
    pub fn with_bsmv_rate_on_commission(mut self, rate: BigDecimal) -> Self {
        self.bsmv_rate_on_commission = rate;
        self
    }

    pub fn with_ledger_preview_limit(mut self, limit: usize) -> Self {
        self.ledger_preview_limit = limit;
        self
    }

    pub fn with_export_rows_per_page(mut self, rows: usize) -> Self {
        self.export_rows_per_page = rows;
        self
    }

    /// Validate the settings
    pub fn validate(&self) -> FiguresResult<()> {
        if self.bsmv_rate_on_commission < BigDecimal::from(0)
            || self.bsmv_rate_on_commission > BigDecimal::from(1)
        {
            return Err(FiguresError::Config(format!(
                "BSMV rate on commission must be between 0 and 1, got {}",
                self.bsmv_rate_on_commission
            )));
        }

        if self.export_rows_per_page == 0 {
            return Err(FiguresError::Config(
                "Export page size must be at least one row".to_string(),
            ));
        }

        Ok(())
    }
}
