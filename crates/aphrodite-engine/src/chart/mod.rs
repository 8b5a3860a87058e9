pub mod analysis;
pub mod settings;

pub use analysis::{ChartAnalysis, ChartEngine, ChartInput};
pub use settings::EngineSettings;
