//! Statement and receipt panels: the boundary read by the rendering layer

pub mod desk;
pub mod export;
pub mod receipt;
pub mod state;
pub mod statement;

pub use desk::*;
pub use export::*;
pub use receipt::*;
pub use state::*;
pub use statement::*;
