use crate::aspects::{AspectKind, AspectSettings, OrbSettings};
use crate::dominance::BodyWeights;
use crate::error::{ChartError, Result};
use crate::patterns::DEFAULT_STELLIUM_MIN;
use crate::western::Body;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunable thresholds for a chart computation.
///
/// Any key missing from a settings file keeps its default.
///
/// ```toml
/// exact_threshold = 1.0
/// stellium_min_members = 3
/// normalization_total = 100.0
///
/// [orbs]
/// conjunction = 8.0
/// sextile = 6.0
///
/// [weights]
/// sun = 4.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    pub orbs: OrbSettings,
    pub exact_threshold: f64,
    pub stellium_min_members: usize,
    pub normalization_total: f64,
    pub weights: BodyWeights,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            orbs: OrbSettings::default(),
            exact_threshold: 1.0,
            stellium_min_members: DEFAULT_STELLIUM_MIN,
            normalization_total: 100.0,
            weights: BodyWeights::default(),
        }
    }
}

impl EngineSettings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: EngineSettings =
            toml::from_str(content).map_err(|e| ChartError::ConfigParse {
                path: None,
                message: e.to_string(),
            })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ChartError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            ChartError::ConfigParse { message, .. } => ChartError::ConfigParse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }

    /// Load settings if the file exists, defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("Settings file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    pub fn validate(&self) -> Result<()> {
        for kind in AspectKind::PRIORITY {
            let orb = self.orbs.get(kind);
            if !orb.is_finite() || orb < 0.0 {
                return Err(invalid(format!(
                    "orb for {} must be a non-negative number, got {}",
                    kind, orb
                )));
            }
        }
        if !self.exact_threshold.is_finite() || self.exact_threshold < 0.0 {
            return Err(invalid(format!(
                "exact_threshold must be a non-negative number, got {}",
                self.exact_threshold
            )));
        }
        if self.stellium_min_members < 2 {
            return Err(invalid(format!(
                "stellium_min_members must be at least 2, got {}",
                self.stellium_min_members
            )));
        }
        if !self.normalization_total.is_finite() || self.normalization_total <= 0.0 {
            return Err(invalid(format!(
                "normalization_total must be positive, got {}",
                self.normalization_total
            )));
        }
        for body in Body::ALL {
            let weight = self.weights.get(body);
            if !weight.is_finite() || weight < 0.0 {
                return Err(invalid(format!(
                    "weight for {} must be a non-negative number, got {}",
                    body, weight
                )));
            }
        }
        Ok(())
    }

    pub fn aspect_settings(&self) -> AspectSettings {
        AspectSettings {
            orbs: self.orbs,
            exact_threshold: self.exact_threshold,
        }
    }
}

fn invalid(message: String) -> ChartError {
    ChartError::InvalidSettings { message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let settings = EngineSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.orbs.sextile, 6.0);
        assert_eq!(settings.exact_threshold, 1.0);
        assert_eq!(settings.weights.get(Body::Moon), 4.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings = EngineSettings::from_toml_str(
            r#"
            exact_threshold = 0.5

            [orbs]
            trine = 6.0

            [weights]
            north_node = 0.0
            "#,
        )
        .unwrap();
        assert_eq!(settings.exact_threshold, 0.5);
        assert_eq!(settings.orbs.trine, 6.0);
        assert_eq!(settings.orbs.conjunction, 8.0);
        assert_eq!(settings.weights.north_node, 0.0);
        assert_eq!(settings.weights.sun, 4.0);
        assert_eq!(settings.stellium_min_members, 3);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            EngineSettings::from_toml_str("[orbs]\nsquare = -1.0"),
            Err(ChartError::InvalidSettings { .. })
        ));
        assert!(matches!(
            EngineSettings::from_toml_str("stellium_min_members = 1"),
            Err(ChartError::InvalidSettings { .. })
        ));
        assert!(matches!(
            EngineSettings::from_toml_str("normalization_total = 0.0"),
            Err(ChartError::InvalidSettings { .. })
        ));
        assert!(matches!(
            EngineSettings::from_toml_str("exact_threshold = \"tight\""),
            Err(ChartError::ConfigParse { path: None, .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "normalization_total = 1.0").unwrap();
        let settings = EngineSettings::load_from_file(file.path()).unwrap();
        assert_eq!(settings.normalization_total, 1.0);

        let mut broken = tempfile::NamedTempFile::new().unwrap();
        writeln!(broken, "orbs = 3").unwrap();
        match EngineSettings::load_from_file(broken.path()) {
            Err(ChartError::ConfigParse { path, .. }) => {
                assert_eq!(path.as_deref(), Some(broken.path()))
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            EngineSettings::load_from_file(&path),
            Err(ChartError::ConfigIo { .. })
        ));
        assert_eq!(EngineSettings::load_or_default(&path).unwrap(), EngineSettings::default());
    }
}
