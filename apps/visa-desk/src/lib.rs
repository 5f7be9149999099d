//! Visa Desk
//!
//! Terminal front desk around the compliance engine: loads a regulation
//! document, prints the summary panels and tracks which checklist items the
//! agent has already collected.

pub mod config;
pub mod report;
pub mod review;
pub mod session;

pub use config::{DeskConfig, Region};
pub use report::DeskReport;
pub use session::{ChecklistSession, SessionError};
