//! Request statistics: recorder, snapshot, duration formatting.
//! Used by: middleware, handlers, state.

pub mod duration;
pub mod recorder;
pub mod snapshot;

pub use recorder::{Scope, Stats, RESET_INTERVAL};
pub use snapshot::StatsSnapshot;
