use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use telegram_card::config::load_config;
///
/// let config = load_config(Path::new("telegram-card.toml")).unwrap();
/// println!("Fetching from: {}", config.fetch.base_url);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;

    validate(&config)?;

    Ok(config)
}

/// Loads the configuration at `path`, or the defaults when no path is given
pub fn load_config_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Theme;
    use crate::config::types::{DEFAULT_BASE_URL, DEFAULT_REDIRECT_URL};
    use crate::output::OutputFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[fetch]
base-url = "http://localhost:9000/"
user-agent = "TestAgent/1.0"

[card]
theme = "dark"
redirect-url = "https://example.com/docs"

[output]
format = "text"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.fetch.base_url, "http://localhost:9000/");
        assert_eq!(config.fetch.user_agent, "TestAgent/1.0");
        assert_eq!(config.card.theme, Theme::Dark);
        assert_eq!(config.card.redirect_url, "https://example.com/docs");
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.fetch.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.card.theme, Theme::Light);
        assert_eq!(config.card.redirect_url, DEFAULT_REDIRECT_URL);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_section_uses_defaults() {
        let config = parse_config("[card]\ntheme = \"dark\"\n").unwrap();
        assert_eq!(config.card.theme, Theme::Dark);
        assert_eq!(config.card.redirect_url, DEFAULT_REDIRECT_URL);
    }

    #[test]
    fn test_unrecognised_theme_is_light() {
        let config = parse_config("[card]\ntheme = \"solarized\"\n").unwrap();
        assert_eq!(config.card.theme, Theme::Light);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let file = create_temp_config("[fetch]\nbase-url = \"ftp://t.me/\"\n");
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_config_or_default() {
        let config = load_config_or_default(None).unwrap();
        assert_eq!(config.fetch.base_url, DEFAULT_BASE_URL);
    }
}
