//! Statement figure derivation: reconciliation, commission and ledger rows
//!
//! Every function here is a pure, synchronous function of its inputs. Values
//! are returned unformatted; see [`crate::format`] for the display rules.

pub mod commission;
pub mod ledger;
pub mod rate;
pub mod reconcile;

pub use commission::*;
pub use ledger::*;
pub use rate::*;
pub use reconcile::*;
