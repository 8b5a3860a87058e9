pub mod detector;
pub mod graph;
pub mod types;

pub use detector::{grand_trines, t_squares, PatternDetector, DEFAULT_STELLIUM_MIN};
pub use graph::AspectGraph;
pub use types::{ChartPattern, StelliumKey};
