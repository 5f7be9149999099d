//! One module per extracted fact. Each heuristic is a pattern plus a fixed
//! fallback, testable on its own without the engine.

pub mod checklist;
pub mod critical;
pub mod fees;
pub mod insurance;
pub mod upsell;
