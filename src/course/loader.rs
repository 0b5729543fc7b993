//! Load course, team and advisor settings from TOML

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::config::AdvisoryConfig;
use crate::core::error::{CaddieError, Result};
use crate::course::{Course, Team};

/// Everything the caddie reads at startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaddieConfig {
    pub course: Course,
    pub team: Team,
    #[serde(default)]
    pub advisor: AdvisoryConfig,
}

impl CaddieConfig {
    /// Parse and validate a config document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CaddieConfig =
            toml::from_str(content).map_err(|e| CaddieError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if let Err(course_errors) = self.course.validate() {
            errors.extend(course_errors);
        }
        if let Err(team_errors) = self.team.validate() {
            errors.extend(team_errors);
        }
        if !errors.is_empty() {
            return Err(CaddieError::InvalidCourse(errors));
        }
        self.advisor.validate().map_err(CaddieError::InvalidConfig)
    }
}

/// Load the caddie config from a TOML file
pub fn load_caddie_config(path: &Path) -> Result<CaddieConfig> {
    let content = fs::read_to_string(path)?;
    let config = CaddieConfig::from_toml_str(&content).map_err(|e| match e {
        CaddieError::ConfigParse(msg) => {
            CaddieError::ConfigParse(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })?;
    tracing::info!(
        "Loaded {} for {} and {} from {}",
        config.course.name,
        config.team.a.name,
        config.team.b.name,
        path.display()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn shipped_config_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/caddie.toml")
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let config = load_caddie_config(&shipped_config_path()).expect("Should load caddie.toml");
        assert_eq!(config, CaddieConfig::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_caddie_config(Path::new("data/does_not_exist.toml"));
        assert!(matches!(result, Err(CaddieError::Io(_))));
    }

    #[test]
    fn test_bad_toml_reports_parse_error() {
        let result = CaddieConfig::from_toml_str("course = 12");
        assert!(matches!(result, Err(CaddieError::ConfigParse(_))));
    }

    #[test]
    fn test_invalid_course_reported() {
        let mut config = CaddieConfig::default();
        config.course.holes[0].rating = 9;
        let text = toml::to_string(&config).unwrap();
        match CaddieConfig::from_toml_str(&text) {
            Err(CaddieError::InvalidCourse(errors)) => {
                assert!(errors.iter().any(|e| e.contains("rating 9 used twice")));
            }
            other => panic!("expected InvalidCourse, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_advisor_reported() {
        let mut config = CaddieConfig::default();
        config.advisor.safe_threshold = 2;
        let text = toml::to_string(&config).unwrap();
        assert!(matches!(
            CaddieConfig::from_toml_str(&text),
            Err(CaddieError::InvalidConfig(_))
        ));
    }
}
