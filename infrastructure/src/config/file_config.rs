//! Configuration file schema (`tutor.toml`)

use serde::{Deserialize, Serialize};
use tutor_domain::{Language, Track, Verbosity};

/// Gemini API configuration (`[gemini]` section).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended — use the env var instead).
    pub api_key: Option<String>,
    /// Base URL for the Generative Language API.
    pub base_url: String,
    /// Multimodal model identifier.
    pub model: String,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
        }
    }
}

impl FileGeminiConfig {
    /// Resolve the credential: explicit `api_key` field first, then the
    /// env var named by `api_key_env`. `None` means the client stays
    /// uninitialized and every request degrades to the unavailable error.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(ref key) = self.api_key {
            if !key.is_empty() {
                return Some(key.clone());
            }
        }
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|k| !k.is_empty())
    }
}

/// Form option defaults (`[defaults]` section).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDefaultsConfig {
    /// Preselected answer language.
    pub language: Language,
    /// Preselected academic track.
    pub track: Track,
    /// Preselected explanation length.
    pub verbosity: Verbosity,
}

/// Root configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Gemini API settings.
    pub gemini: FileGeminiConfig,
    /// Form option defaults.
    pub defaults: FileDefaultsConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.gemini.model, "gemini-2.5-flash");
        assert!(config.gemini.api_key.is_none());
        assert_eq!(config.defaults.language, Language::FormalArabic);
        assert_eq!(config.defaults.track, Track::SciencesMaths);
        assert_eq!(config.defaults.verbosity, Verbosity::Medium);
    }

    #[test]
    fn test_direct_api_key_wins_over_env() {
        let config = FileGeminiConfig {
            api_key: Some("file-key".to_string()),
            // An env var that will never be set in the test environment
            api_key_env: "BAC_TUTOR_TEST_UNSET_KEY".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("file-key"));
    }

    #[test]
    fn test_env_var_fallback() {
        // SAFETY: test-local env var, unique name to avoid cross-test races
        unsafe { std::env::set_var("BAC_TUTOR_TEST_ENV_KEY", "env-key") };
        let config = FileGeminiConfig {
            api_key: None,
            api_key_env: "BAC_TUTOR_TEST_ENV_KEY".to_string(),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("env-key"));
        unsafe { std::env::remove_var("BAC_TUTOR_TEST_ENV_KEY") };
    }

    #[test]
    fn test_missing_credential_resolves_to_none() {
        let config = FileGeminiConfig {
            api_key: Some(String::new()),
            api_key_env: "BAC_TUTOR_TEST_UNSET_KEY_2".to_string(),
            ..Default::default()
        };
        assert!(config.resolve_api_key().is_none());
    }

    #[test]
    fn test_option_defaults_parse_from_toml() {
        let config: FileConfig = toml_str(
            r#"
            [defaults]
            language = "french"
            track = "sciences-exp"
            verbosity = "detailed"
            "#,
        );
        assert_eq!(config.defaults.language, Language::French);
        assert_eq!(config.defaults.track, Track::SciencesExperimentales);
        assert_eq!(config.defaults.verbosity, Verbosity::VeryDetailed);
    }

    fn toml_str(s: &str) -> FileConfig {
        use figment::Figment;
        use figment::providers::{Format, Serialized, Toml};
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::string(s))
            .extract()
            .unwrap()
    }
}
