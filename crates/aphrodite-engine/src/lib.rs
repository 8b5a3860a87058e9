//! Chart analysis engine.
//!
//! Turns body longitudes and house cusps into aspects, aspect patterns,
//! element / modality dominance and house-triad phases. Ephemeris math,
//! persistence and narrative text belong to the caller.
//!
//! ```
//! use aphrodite_engine::{Body, ChartEngine, ChartInput, HouseCusps, RawPosition};
//!
//! let input = ChartInput::new(
//!     vec![
//!         RawPosition::new(Body::Sun, 10.0, 0.98),
//!         RawPosition::new(Body::Moon, 130.0, 13.2),
//!         RawPosition::new(Body::Jupiter, 250.0, 0.08),
//!     ],
//!     HouseCusps::equal(0.0)?,
//! );
//! let analysis = ChartEngine::default().analyze(&input)?;
//! assert_eq!(analysis.aspects.len(), 3);
//! assert_eq!(analysis.patterns.len(), 1);
//! # Ok::<(), aphrodite_engine::ChartError>(())
//! ```

pub mod aspects;
pub mod cache;
pub mod chart;
pub mod dominance;
pub mod ephemeris;
pub mod error;
pub mod geometry;
pub mod houses;
pub mod patterns;
pub mod phases;
pub mod western;

pub use aspects::{Aspect, AspectCalculator, AspectKind, AspectSettings, OrbSettings};
pub use cache::ChartCache;
pub use chart::{ChartAnalysis, ChartEngine, ChartInput, EngineSettings};
pub use dominance::{BodyWeights, DominanceProfile};
pub use ephemeris::{BodyPosition, PositionProvider, RawPosition, StaticPositions};
pub use error::{ChartError, Result};
pub use houses::HouseCusps;
pub use patterns::{ChartPattern, PatternDetector, StelliumKey};
pub use phases::PhaseMapping;
pub use western::{Body, Element, Modality, Sign};
