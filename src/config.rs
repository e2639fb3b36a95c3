//! Analysis configuration.
//!
//! Supports YAML configuration files; the CLI layers its flags on top of a
//! loaded file, which in turn layers on top of the defaults.

use crate::analysis::LineErrorMetric;
use crate::error::{Error, Result};
use crate::raster::{CircleAlgorithm, LineAlgorithm, RoundingMode};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_version() -> u32 {
    1
}
fn default_line_algorithms() -> Vec<LineAlgorithm> {
    LineAlgorithm::ALL.to_vec()
}
fn default_circle_algorithms() -> Vec<CircleAlgorithm> {
    CircleAlgorithm::ALL.to_vec()
}
fn default_timing_runs() -> u32 {
    1
}

/// Settings for an [`Analyzer`](crate::analysis::Analyzer) run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Line strategies to run.
    #[serde(default = "default_line_algorithms")]
    pub line_algorithms: Vec<LineAlgorithm>,

    /// Circle strategies to run.
    #[serde(default = "default_circle_algorithms")]
    pub circle_algorithms: Vec<CircleAlgorithm>,

    /// DDA tie rule.
    #[serde(default)]
    pub rounding: RoundingMode,

    /// How line pixels are scored.
    #[serde(default)]
    pub line_metric: LineErrorMetric,

    /// Rasterizations per strategy; the fastest is reported.
    #[serde(default = "default_timing_runs")]
    pub timing_runs: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            line_algorithms: default_line_algorithms(),
            circle_algorithms: default_circle_algorithms(),
            rounding: RoundingMode::default(),
            line_metric: LineErrorMetric::default(),
            timing_runs: default_timing_runs(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or a validation
    /// error for out-of-range values.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse { line, message: e.to_string() }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the offending key.
    pub fn validate(&self) -> Result<()> {
        if self.timing_runs == 0 {
            return Err(Error::ConfigInvalid {
                key: "timing_runs".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.line_algorithms.is_empty() {
            return Err(Error::ConfigInvalid {
                key: "line_algorithms".to_string(),
                message: "at least one algorithm is required".to_string(),
            });
        }
        if self.circle_algorithms.is_empty() {
            return Err(Error::ConfigInvalid {
                key: "circle_algorithms".to_string(),
                message: "at least one algorithm is required".to_string(),
            });
        }
        Ok(())
    }

    /// Set the line strategies.
    #[must_use]
    pub fn line_algorithms(mut self, algorithms: Vec<LineAlgorithm>) -> Self {
        self.line_algorithms = algorithms;
        self
    }

    /// Set the circle strategies.
    #[must_use]
    pub fn circle_algorithms(mut self, algorithms: Vec<CircleAlgorithm>) -> Self {
        self.circle_algorithms = algorithms;
        self
    }

    /// Set the DDA tie rule.
    #[must_use]
    pub fn rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Set the line error metric.
    #[must_use]
    pub fn line_metric(mut self, metric: LineErrorMetric) -> Self {
        self.line_metric = metric;
        self
    }

    /// Set the number of timing runs (clamped to at least 1).
    #[must_use]
    pub fn timing_runs(mut self, runs: u32) -> Self {
        self.timing_runs = runs.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = AnalysisConfig::new();

        assert_eq!(config.version, 1);
        assert_eq!(config.line_algorithms, LineAlgorithm::ALL.to_vec());
        assert_eq!(config.circle_algorithms, CircleAlgorithm::ALL.to_vec());
        assert_eq!(config.rounding, RoundingMode::HalfToEven);
        assert_eq!(config.line_metric, LineErrorMetric::MinorAxis);
        assert_eq!(config.timing_runs, 1);
    }

    #[test]
    fn test_config_parse_minimal() {
        let config = AnalysisConfig::parse("version: 1").unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_config_parse_full() {
        let yaml = r"
version: 1
line_algorithms: [bresenham, midpoint]
circle_algorithms: [midpoint]
rounding: half_away_from_zero
line_metric: perpendicular
timing_runs: 5
";

        let config = AnalysisConfig::parse(yaml).unwrap();

        assert_eq!(config.line_algorithms, vec![LineAlgorithm::Bresenham, LineAlgorithm::Midpoint]);
        assert_eq!(config.circle_algorithms, vec![CircleAlgorithm::Midpoint]);
        assert_eq!(config.rounding, RoundingMode::HalfAwayFromZero);
        assert_eq!(config.line_metric, LineErrorMetric::Perpendicular);
        assert_eq!(config.timing_runs, 5);
    }

    #[test]
    fn test_config_parse_error_has_line() {
        let yaml = "version: 1\nrounding: [unclosed\n";
        match AnalysisConfig::parse(yaml) {
            Err(Error::ConfigParse { line, .. }) => assert!(line >= 2),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_config_unknown_algorithm() {
        let err = AnalysisConfig::parse("line_algorithms: [wu]").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn test_config_rejects_zero_runs() {
        let err = AnalysisConfig::parse("timing_runs: 0").unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { ref key, .. } if key == "timing_runs"));
    }

    #[test]
    fn test_config_rejects_empty_algorithms() {
        assert!(AnalysisConfig::parse("line_algorithms: []").is_err());
        assert!(AnalysisConfig::parse("circle_algorithms: []").is_err());
    }

    #[test]
    fn test_config_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timing_runs: 3").unwrap();

        let config = AnalysisConfig::load(file.path()).unwrap();
        assert_eq!(config.timing_runs, 3);
    }

    #[test]
    fn test_config_load_missing() {
        let err = AnalysisConfig::load("/nonexistent/raster.yaml").unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(_)));
    }

    #[test]
    fn test_config_load_or_default() {
        let config = AnalysisConfig::load_or_default("/nonexistent/path");
        assert_eq!(config.version, 1);
    }

    #[test]
    fn test_builder_clamps_runs() {
        assert_eq!(AnalysisConfig::new().timing_runs(0).timing_runs, 1);
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = AnalysisConfig::new().line_metric(LineErrorMetric::Vertical);
        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        assert!(yaml.contains("line_metric: vertical"));
    }
}
