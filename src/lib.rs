//! # Statement Figures
//!
//! Derivation of the monetary figures shown on merchant payment statements
//! and payment receipts of a payment-processing back office.
//!
//! ## Features
//!
//! - **Net-amount reconciliation**: the calculated `volume - commission` wins
//!   over the data source's asserted net amount, with a discrepancy flag
//! - **Refund-adjusted commission**: refunds reverse commission at the
//!   merchant's rate but never touch the BSMV tax line
//! - **Summary table**: sales, refund and total rows of the stored-card table
//! - **Ledger rows**: stored-card and refund transactions for on-screen
//!   preview and paginated export
//! - **Display formatting**: Turkish lira amounts, counts and dates
//! - **Record source abstraction**: async trait for whatever loads records
//!
//! ## Quick Start
//!
//! ```rust
//! use statement_figures::{effective_commission_rate, total_commission_due};
//! use statement_figures::{RefundAggregate, TransactionAggregate};
//! use bigdecimal::BigDecimal;
//!
//! let sales = TransactionAggregate::new(100, BigDecimal::from(10000), BigDecimal::from(250));
//! let refunds = RefundAggregate::new(2, BigDecimal::from(200));
//! let rate = effective_commission_rate("2,50%").unwrap();
//!
//! let due = total_commission_due(&sales, &refunds, &rate, &"12.5".parse().unwrap(), None);
//! assert_eq!(due.total_due, "257.5".parse::<BigDecimal>().unwrap());
//! ```

pub mod config;
pub mod figures;
pub mod format;
pub mod panel;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use config::FiguresConfig;
pub use figures::*;
pub use panel::*;
pub use traits::*;
pub use types::*;
