pub mod aggregator;

mod errors;
pub mod models;

pub use aggregator::{
    apply_stat_event, efficiency_score, percentage, round_one_decimal, shooting_split,
    team_totals,
};
pub use errors::StatsError;
pub use models::*;

/// Fixed values of the scoring model.
pub mod scoring {
    pub const TWO_POINT_VALUE: u32 = 2;
    pub const THREE_POINT_VALUE: u32 = 3;
    pub const FREE_THROW_VALUE: u32 = 1;
    /// Delta used when a stat event is recorded with a single tap.
    pub const DEFAULT_DELTA: i64 = 1;
}
