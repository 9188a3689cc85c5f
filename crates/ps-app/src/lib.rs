//! Application service layer for plantsizer.
//!
//! Owns the session state and everything the CLI needs on top of the
//! calculation crates: the action reducer, the by-value snapshot handed to
//! presentation, quote file loading and quote assembly.

pub mod error;
pub mod project_service;
pub mod quote;
pub mod session;
pub mod snapshot;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use project_service::{load_quote_file, save_quote_file, session_from_file};
pub use quote::{Quote, QuoteTerms, compute_quote_reference};
pub use session::{Action, ClientInfo, Session, reduce};
pub use snapshot::{Snapshot, TankRow};
