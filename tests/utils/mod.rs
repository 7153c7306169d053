pub mod roster_builders;
pub mod setup;

// Re-export main utilities for use by test files
pub use roster_builders::RosterBuilder;
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder};
