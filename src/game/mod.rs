// Public API
pub use clock::{ClockError, ClockEvent, ClockRunner, ClockTick, ClockTime};
pub use models::{GameRecord, GameStatus, RosterPlayer, Score, ScoreSide};

pub mod clock;
pub mod models;
