pub mod types;

pub use types::{Analysis, Finding, UpsellFlags};
