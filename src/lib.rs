pub mod error;
pub mod model;
pub mod simulator;
pub mod spec;

pub use error::{ChartSpecError, Result};
pub use spec::{ChartKind, ChartSpec};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
