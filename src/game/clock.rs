use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("Malformed clock value: {0} (expected MM:SS)")]
    Malformed(String),
}

/// Time left in a quarter, displayed and persisted as `MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    total_seconds: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockTick {
    Running(ClockTime),
    Expired,
}

impl ClockTime {
    pub const ZERO: ClockTime = ClockTime { total_seconds: 0 };

    /// `99:59`, the longest value the `MM:SS` form can show.
    pub const MAX: ClockTime = ClockTime {
        total_seconds: 99 * 60 + 59,
    };

    /// Builds a clock from a second count, clamped to [`ClockTime::MAX`].
    pub const fn from_seconds(total_seconds: u32) -> Self {
        if total_seconds > Self::MAX.total_seconds {
            return Self::MAX;
        }
        Self { total_seconds }
    }

    pub fn new(minutes: u32, seconds: u32) -> Result<Self, ClockError> {
        if seconds >= 60 || minutes > 99 {
            return Err(ClockError::Malformed(format!("{minutes}:{seconds}")));
        }
        Ok(Self {
            total_seconds: minutes * 60 + seconds,
        })
    }

    pub fn minutes(&self) -> u32 {
        self.total_seconds / 60
    }

    pub fn seconds(&self) -> u32 {
        self.total_seconds % 60
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds == 0
    }

    /// One countdown step. At `00:00` the clock expires and the value is
    /// left untouched; the quarter is never advanced here.
    pub fn tick(&mut self) -> ClockTick {
        if self.total_seconds == 0 {
            return ClockTick::Expired;
        }
        self.total_seconds -= 1;
        ClockTick::Running(*self)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes(), self.seconds())
    }
}

impl FromStr for ClockTime {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ClockError::Malformed(s.to_string());
        let (minutes, seconds) = s.trim().split_once(':').ok_or_else(malformed)?;
        let minutes: u32 = minutes.parse().map_err(|_| malformed())?;
        let seconds: u32 = seconds.parse().map_err(|_| malformed())?;
        ClockTime::new(minutes, seconds).map_err(|_| malformed())
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ClockError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockEvent {
    Tick(ClockTime),
    Expired,
}

/// Counts a quarter down on the tokio runtime, one step per `period`.
///
/// Ticks are delivered over a channel so the owner of the game store stays
/// the only writer. The runner stops itself once the clock expires; `stop`
/// cancels it immediately.
pub struct ClockRunner {
    handle: Option<JoinHandle<()>>,
}

impl ClockRunner {
    pub const PERIOD: Duration = Duration::from_secs(1);

    pub fn start(from: ClockTime) -> (Self, mpsc::UnboundedReceiver<ClockEvent>) {
        Self::start_with_period(from, Self::PERIOD)
    }

    pub fn start_with_period(
        from: ClockTime,
        period: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<ClockEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        info!(clock = %from, "Starting game clock");

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick of a tokio interval completes immediately.
            interval.tick().await;

            let mut time = from;
            loop {
                interval.tick().await;
                match time.tick() {
                    ClockTick::Running(now) => {
                        if tx.send(ClockEvent::Tick(now)).is_err() {
                            debug!("Clock receiver dropped, stopping");
                            break;
                        }
                    }
                    ClockTick::Expired => {
                        info!("Game clock expired");
                        let _ = tx.send(ClockEvent::Expired);
                        break;
                    }
                }
            }
        });

        (
            Self {
                handle: Some(handle),
            },
            rx,
        )
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!("Stopping game clock");
            handle.abort();
        }
    }
}

impl Drop for ClockRunner {
    fn drop(&mut self) {
        self.stop();
    }
}
