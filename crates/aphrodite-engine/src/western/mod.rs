pub mod bodies;
pub mod signs;

pub use bodies::{Body, UnknownBody};
pub use signs::{Element, Modality, Sign};
