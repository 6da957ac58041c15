//! Host-side simulation loop
//!
//! Seeds a board, paces and renders generations, and summarizes the run.

pub mod driver;
pub mod output;

pub use driver::{run_phase, run_session, seed_with_fallback, Frame};
pub use output::{PhaseSummary, RunSummary, SeedKind};
