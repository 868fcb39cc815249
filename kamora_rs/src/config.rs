//! Site configuration.
//!
//! Optional `kamora.toml`. Every key has a default, so an empty or partial
//! file is valid.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub carousel: CarouselConfig,
    pub contact: ContactConfig,
    pub header: HeaderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Auto-advance period.
    pub interval_ms: u64,
    /// Minimum swipe power (`|offset| * velocity`) that counts as a swipe.
    pub swipe_confidence: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: 5_000,
            swipe_confidence: 10_000.0,
        }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Delay of the simulated submission.
    pub submit_delay_ms: u64,
    /// Upper bound on any submission; 0 disables the bound.
    pub submit_timeout_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2_000,
            submit_timeout_ms: 10_000,
        }
    }
}

impl ContactConfig {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn submit_timeout(&self) -> Option<Duration> {
        (self.submit_timeout_ms > 0).then(|| Duration::from_millis(self.submit_timeout_ms))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Page scroll (px) after which the header switches to its solid style.
    pub scroll_threshold_px: f64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 50.0,
        }
    }
}

impl SiteConfig {
    /// Parse config text. `origin` is only used in error messages.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Strict load: a missing file yields defaults, anything else wrong is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text, path)
    }

    /// Lenient load: problems are logged and the defaults are used.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; falling back to default config");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "carousel.interval_ms must be greater than 0".into(),
            ));
        }
        if !self.carousel.swipe_confidence.is_finite() || self.carousel.swipe_confidence < 0.0 {
            return Err(ConfigError::Invalid(
                "carousel.swipe_confidence must be a non-negative number".into(),
            ));
        }
        if !self.header.scroll_threshold_px.is_finite() {
            return Err(ConfigError::Invalid(
                "header.scroll_threshold_px must be a number".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.carousel.interval(), Duration::from_secs(5));
        assert_eq!(config.carousel.swipe_confidence, 10_000.0);
        assert_eq!(config.contact.submit_delay(), Duration::from_millis(2_000));
        assert_eq!(
            config.contact.submit_timeout(),
            Some(Duration::from_millis(10_000))
        );
        assert_eq!(config.header.scroll_threshold_px, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load(&temp.path().join("kamora.toml")).expect("defaults");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("kamora.toml");
        let mut file = std::fs::File::create(&path).expect("create config");
        writeln!(
            file,
            r#"
[carousel]
interval_ms = 8000

[contact]
submit_timeout_ms = 0
"#
        )
        .expect("write config");

        let config = SiteConfig::load(&path).expect("valid config");
        assert_eq!(config.carousel.interval_ms, 8_000);
        assert_eq!(config.carousel.swipe_confidence, 10_000.0);
        assert_eq!(config.contact.submit_delay_ms, 2_000);
        assert_eq!(config.contact.submit_timeout(), None);
    }

    #[test]
    fn test_load_empty_config() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("kamora.toml");
        std::fs::File::create(&path).expect("create empty config");
        assert_eq!(SiteConfig::load(&path).unwrap(), SiteConfig::default());
    }

    #[test]
    fn test_invalid_config_is_rejected_strictly_and_tolerated_leniently() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("kamora.toml");
        std::fs::write(&path, "[carousel]\ninterval_ms = 0\n").expect("write config");

        assert!(matches!(SiteConfig::load(&path), Err(ConfigError::Invalid(_))));
        assert_eq!(SiteConfig::load_or_default(&path), SiteConfig::default());
    }

    #[test]
    fn test_unparseable_config_names_the_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("kamora.toml");
        std::fs::write(&path, "[carousel\n").expect("write config");
        let err = SiteConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("kamora.toml"));
    }
}
