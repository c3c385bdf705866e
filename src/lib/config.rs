//! Build-time configuration for the portal API with an optional runtime
//! override. The runtime config is read from `window.ZIONDOCS_CONFIG` (if
//! present) so static deployments can point at another backend without
//! rebuilding. Configuration values are public; do not store secrets here.

/// Default request timeout (milliseconds) when nothing else is configured.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u32,
    pub log_level: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let api_base_url = option_env!("ZIONDOCS_API_BASE_URL").unwrap_or("");
        let request_timeout_ms = option_env!("ZIONDOCS_REQUEST_TIMEOUT_MS")
            .and_then(parse_timeout)
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        let log_level = option_env!("ZIONDOCS_LOG_LEVEL").unwrap_or(DEFAULT_LOG_LEVEL);

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
            request_timeout_ms,
            log_level: log_level.to_string(),
        };

        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }

        config
    }

    /// Joins the API base URL and a path without doubling slashes. An empty
    /// base keeps the path relative so requests stay same-origin.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.api_base_url.trim().trim_end_matches('/');
        let path = path.trim();

        if base.is_empty() {
            path.to_string()
        } else {
            format!("{}/{}", base, path.trim_start_matches('/'))
        }
    }
}

#[derive(Default)]
struct RuntimeConfig {
    api_base_url: Option<String>,
    request_timeout_ms: Option<String>,
    log_level: Option<String>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.api_base_url {
        config.api_base_url = value;
    }
    if let Some(value) = runtime.request_timeout_ms.as_deref().and_then(parse_timeout) {
        config.request_timeout_ms = value;
    }
    if let Some(value) = runtime.log_level {
        config.log_level = value;
    }
}

/// Accepts positive millisecond values only.
fn parse_timeout(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|ms| *ms > 0)
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("ZIONDOCS_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url"),
        request_timeout_ms: read_runtime_value(&object, "request_timeout_ms"),
        log_level: read_runtime_value(&object, "log_level"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    // Numbers are accepted for the timeout as well as strings.
    let value = value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))?;
    normalize_runtime_value(&value)
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, RuntimeConfig, apply_runtime_overrides, normalize_runtime_value};

    fn defaults() -> AppConfig {
        AppConfig {
            api_base_url: "https://api.default".to_string(),
            request_timeout_ms: 10_000,
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn normalize_runtime_value_trims_and_rejects_empty() {
        assert_eq!(normalize_runtime_value(""), None);
        assert_eq!(normalize_runtime_value("   "), None);
        assert_eq!(
            normalize_runtime_value("  https://api.ziondocs.com.br "),
            Some("https://api.ziondocs.com.br".to_string())
        );
    }

    #[test]
    fn apply_runtime_overrides_ignores_empty_values() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value(""),
            request_timeout_ms: normalize_runtime_value("  "),
            log_level: normalize_runtime_value(""),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.default");
        assert_eq!(config.request_timeout_ms, 10_000);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn apply_runtime_overrides_overwrites_when_present() {
        let mut config = defaults();
        let runtime = RuntimeConfig {
            api_base_url: normalize_runtime_value("https://api.override"),
            request_timeout_ms: normalize_runtime_value("2500"),
            log_level: normalize_runtime_value("debug"),
        };

        apply_runtime_overrides(&mut config, runtime);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.request_timeout_ms, 2_500);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn endpoint_joins_base_and_path() {
        let mut config = defaults();
        assert_eq!(config.endpoint("/users/me"), "https://api.default/users/me");

        config.api_base_url = "https://api.default/v1/".to_string();
        assert_eq!(config.endpoint("documents"), "https://api.default/v1/documents");

        config.api_base_url = "  ".to_string();
        assert_eq!(config.endpoint("/users/me"), "/users/me");
    }

    #[test]
    fn invalid_timeouts_keep_the_default() {
        for value in ["0", "-5", "soon", "1.5"] {
            let mut config = defaults();
            let runtime = RuntimeConfig {
                request_timeout_ms: normalize_runtime_value(value),
                ..RuntimeConfig::default()
            };
            apply_runtime_overrides(&mut config, runtime);
            assert_eq!(config.request_timeout_ms, 10_000, "value {value}");
        }
    }
}
