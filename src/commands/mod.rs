//! Command implementations

pub mod check;
pub mod play;
pub mod simulate;

pub use check::{CheckResult, check_guess};
pub use play::{run_play, run_play_with};
pub use simulate::{GameOutcome, SimulateConfig, SimulationStatistics, run_simulation};
