// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{AnalysisError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub data: DataConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    pub issues_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default = "default_max_excerpt_chars")]
    pub max_excerpt_chars: usize,
    #[serde(default = "default_snippet_radius")]
    pub snippet_radius: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub results_path: PathBuf,
    #[serde(default)]
    pub json_path: Option<PathBuf>,
    #[serde(default = "default_chart_label_chars")]
    pub chart_label_chars: usize,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    #[serde(default = "default_show_chart")]
    pub show_chart: bool,
}

fn default_max_excerpt_chars() -> usize {
    250
}

fn default_snippet_radius() -> usize {
    80
}

fn default_chart_label_chars() -> usize {
    60
}

fn default_chart_width() -> usize {
    50
}

fn default_show_chart() -> bool {
    true
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("ISSUE_KEYWORDS")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| AnalysisError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| AnalysisError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            data: DataConfig {
                issues_path: PathBuf::from("data/issues.json"),
            },
            analysis: AnalysisConfig {
                keyword: None,
                max_excerpt_chars: default_max_excerpt_chars(),
                snippet_radius: default_snippet_radius(),
            },
            output: OutputConfig {
                results_path: PathBuf::from("keyword_results.txt"),
                json_path: None,
                chart_label_chars: default_chart_label_chars(),
                chart_width: default_chart_width(),
                show_chart: default_show_chart(),
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.analysis.max_excerpt_chars == 0 {
            return Err(AnalysisError::Config(
                "max_excerpt_chars must be greater than 0".to_string(),
            ));
        }

        if self.analysis.snippet_radius == 0 {
            return Err(AnalysisError::Config(
                "snippet_radius must be greater than 0".to_string(),
            ));
        }

        if self.output.chart_label_chars == 0 {
            return Err(AnalysisError::Config(
                "chart_label_chars must be greater than 0".to_string(),
            ));
        }

        if self.output.chart_width == 0 {
            return Err(AnalysisError::Config(
                "chart_width must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.analysis.max_excerpt_chars, 250);
        assert_eq!(config.analysis.snippet_radius, 80);
        assert!(config.analysis.keyword.is_none());
    }

    #[test]
    fn test_load_from_file_applies_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(
            &path,
            "[data]\nissues_path = \"issues.json\"\n\n[analysis]\nkeyword = \"timeout\"\n\n[output]\nresults_path = \"out.txt\"\n",
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.data.issues_path, PathBuf::from("issues.json"));
        assert_eq!(config.analysis.keyword.as_deref(), Some("timeout"));
        assert_eq!(config.analysis.max_excerpt_chars, 250);
        assert_eq!(config.output.chart_label_chars, 60);
        assert!(config.output.show_chart);
        assert!(config.output.json_path.is_none());
    }

    #[test]
    fn test_zero_limits_rejected() {
        let mut config = Config::default_config();
        config.analysis.max_excerpt_chars = 0;
        assert!(matches!(config.validate(), Err(AnalysisError::Config(_))));

        let mut config = Config::default_config();
        config.output.chart_width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_snippet_radius_rejected() {
        let mut config = Config::default_config();
        config.analysis.snippet_radius = 0;
        assert!(matches!(config.validate(), Err(AnalysisError::Config(_))));
    }
}
