pub mod provider;
pub mod types;

pub use provider::{PositionProvider, StaticPositions};
pub use types::{BodyPosition, RawPosition};
