//! Terminal module: Showing layout results in a live terminal.

mod output;
mod session;

pub use output::OutputBuffer;
pub use session::{Session, SessionConfig, SessionEvent};
