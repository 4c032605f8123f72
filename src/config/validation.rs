use crate::config::types::{Config, FetchConfig, OutputConfig, SiteConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_fetch_config(&config.fetch)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the site section: root must be an absolute http(s) URL and
/// there must be at least one keyword to filter on
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let root = Url::parse(&config.root)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid site root '{}': {}", config.root, e)))?;

    if root.scheme() != "http" && root.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "Site root must use http or https, got '{}'",
            root.scheme()
        )));
    }

    if root.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "Site root '{}' has no host",
            config.root
        )));
    }

    if config.keywords.is_empty() {
        return Err(ConfigError::Validation(
            "At least one keyword is required".to_string(),
        ));
    }

    if config.keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "Keywords cannot be empty or whitespace".to_string(),
        ));
    }

    Ok(())
}

/// Validates fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.is_empty() {
        return Err(ConfigError::Validation(
            "csv_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::LimitsConfig;

    fn valid_config() -> Config {
        Config {
            site: SiteConfig {
                root: "https://example.com/".to_string(),
                keywords: vec!["policy".to_string(), "regulation".to_string()],
            },
            fetch: FetchConfig {
                request_timeout_secs: 10,
                request_delay_ms: 1000,
                user_agent: "policy-sift/1.0".to_string(),
            },
            limits: LimitsConfig::default(),
            output: OutputConfig {
                csv_path: "./articles.csv".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_rejects_bad_root_url() {
        let mut config = valid_config();
        config.site.root = "not a url".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = valid_config();
        config.site.root = "ftp://example.com/".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_rejects_empty_keywords() {
        let mut config = valid_config();
        config.site.keywords.clear();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_blank_keyword() {
        let mut config = valid_config();
        config.site.keywords.push("   ".to_string());
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = valid_config();
        config.fetch.request_timeout_secs = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_empty_csv_path() {
        let mut config = valid_config();
        config.output.csv_path.clear();
        assert!(validate(&config).is_err());
    }
}
