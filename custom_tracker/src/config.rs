//! Settings for the two upstream services and the Riot configuration validator.

use crate::riot::callback_url;

/// Default Leaguepedia backend address
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Riot Tournament API settings
#[derive(Debug, Clone, Default)]
pub struct RiotApiSettings {
    /// Key sent as `X-Riot-Token`
    pub api_key: Option<String>,
    /// Publicly reachable base URL of this service, used for the callback URL
    pub public_base_url: Option<String>,
    /// Whether this is a production deployment
    pub production: bool,
    /// Replaces every regional Riot host when set
    pub host_override: Option<String>,
}

/// Outcome of [`RiotApiSettings::validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl RiotApiSettings {
    /// Check the settings the tournament endpoints depend on.
    ///
    /// A missing API key is always an error. A missing public base URL is an
    /// error only in production.
    pub fn validate(&self) -> ConfigValidation {
        let mut errors = Vec::new();

        if self.api_key().is_none() {
            errors.push("RIOT_API_KEY environment variable is required".to_string());
        }

        if self.production && self.public_base_url().is_none() {
            errors.push("NEXT_PUBLIC_BASE_URL should be set for production".to_string());
        }

        ConfigValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// API key, `None` when unset or empty
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }

    pub fn public_base_url(&self) -> Option<&str> {
        self.public_base_url.as_deref().filter(|u| !u.is_empty())
    }

    /// Callback URL registered with Riot, see [`callback_url`]
    pub fn callback_url(&self, override_base: Option<&str>) -> String {
        callback_url(override_base, self.public_base_url())
    }
}

/// Leaguepedia backend settings
#[derive(Debug, Clone)]
pub struct LeaguepediaSettings {
    pub backend_url: String,
}

impl Default for LeaguepediaSettings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(api_key: Option<&str>, base: Option<&str>, production: bool) -> RiotApiSettings {
        RiotApiSettings {
            api_key: api_key.map(str::to_string),
            public_base_url: base.map(str::to_string),
            production,
            host_override: None,
        }
    }

    #[test]
    fn test_validate_ok_with_key() {
        let result = settings(Some("RGAPI-123"), None, false).validate();
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_validate_missing_key_is_always_an_error() {
        for production in [false, true] {
            let result = settings(None, Some("https://tracker.gg"), production).validate();
            assert!(!result.is_valid);
            assert_eq!(
                result.errors,
                vec!["RIOT_API_KEY environment variable is required".to_string()]
            );
        }
    }

    #[test]
    fn test_validate_empty_key_counts_as_missing() {
        let result = settings(Some(""), None, false).validate();
        assert!(!result.is_valid);
    }

    #[test]
    fn test_validate_base_url_only_required_in_production() {
        assert!(settings(Some("k"), None, false).validate().is_valid);

        let result = settings(Some("k"), None, true).validate();
        assert!(!result.is_valid);
        assert_eq!(
            result.errors,
            vec!["NEXT_PUBLIC_BASE_URL should be set for production".to_string()]
        );
    }

    #[test]
    fn test_validate_reports_every_error() {
        let result = settings(None, None, true).validate();
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_callback_url_uses_configured_base() {
        let s = settings(Some("k"), Some("https://tracker.gg"), true);
        assert_eq!(s.callback_url(None), "https://tracker.gg/api/tournament/callback");
        assert_eq!(
            s.callback_url(Some("https://staging.tracker.gg")),
            "https://staging.tracker.gg/api/tournament/callback"
        );
    }

    #[test]
    fn test_default_backend_url() {
        assert_eq!(LeaguepediaSettings::default().backend_url, "http://localhost:8000");
    }
}
