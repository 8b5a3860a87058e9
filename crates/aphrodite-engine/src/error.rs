use crate::western::Body;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while analyzing a chart
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid longitude for {body}: {value}. Longitudes must be finite and within [0, 360)")]
    InvalidLongitude { body: Body, value: f64 },
    #[error("Invalid speed for {body}: {value}. Speeds must be finite")]
    InvalidSpeed { body: Body, value: f64 },
    #[error("Body {body} appears more than once in the chart input")]
    DuplicateBody { body: Body },
    #[error("Chart has no bodies to analyze")]
    EmptyChart,
    #[error("Expected 12 house cusps, found {found}")]
    CuspCount { found: usize },
    #[error("Invalid cusp for house {house}: {value}. Cusps must be finite and within [0, 360)")]
    InvalidCusp { house: u8, value: f64 },
    #[error("House cusps are not in increasing order around the circle at house {house}")]
    CuspOrder { house: u8 },
    #[error("No house span contains {body} at {longitude}; cusp data is inconsistent")]
    HouseNotFound { body: Body, longitude: f64 },
    #[error("Body weights sum to zero; dominance cannot be normalized")]
    ZeroWeight,
    #[error("Invalid engine settings: {message}")]
    InvalidSettings { message: String },
    #[error("Failed to read settings file {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse settings: {message}")]
    ConfigParse {
        path: Option<PathBuf>,
        message: String,
    },
    #[error("Position provider failed: {message}")]
    Provider { message: String },
}

pub type Result<T> = std::result::Result<T, ChartError>;
