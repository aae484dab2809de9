//! Bounded synthetic dataset generation, one operation per chart archetype.
//!
//! Every generator takes its parameters by reference plus an explicit
//! random source. There is no shared generator and no state between calls:
//! seeding a [`rand::rngs::StdRng`] and passing it in makes any call
//! reproducible, and concurrent callers each own their source.

mod comparison;
mod flow;
mod gauge;
mod matrix;
mod network;
mod series;

pub use comparison::{PlatformProfile, default_platforms, generate_comparison};
pub use flow::{FlowData, FlowRoute, FlowTopology, RouteWeight, generate_flow};
pub use gauge::{GaugeParams, generate_gauge};
pub use matrix::{MatrixParams, generate_matrix};
pub use network::{NetworkData, NetworkParams, generate_network};
pub use series::{DEFAULT_SERIES_LENGTH, SeriesProfile, default_series_profiles, generate_series};
