//! The polling engine: single-cycle orchestration and the interval scheduler.

mod poll_cycle;
mod poller;

pub use poll_cycle::{CycleSummary, PollCycle};
pub use poller::Poller;
