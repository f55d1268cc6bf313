use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse (no env var is strictly
/// required; the upstream API keys are optional at startup).
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let env = parse_environment(&or_default("HOOKLINE_ENV", "development"));
    let bind_addr = parse_addr("HOOKLINE_BIND_ADDR", "0.0.0.0:8080")?;
    let log_level = or_default("HOOKLINE_LOG_LEVEL", "info");

    // Blank credentials are treated as absent so that `FIRECRAWL_API_KEY=`
    // in a .env file behaves like an unset variable.
    let firecrawl_api_key = lookup("FIRECRAWL_API_KEY")
        .ok()
        .filter(|v| !v.trim().is_empty());
    let gemini_api_key = lookup("GEMINI_API_KEY")
        .ok()
        .filter(|v| !v.trim().is_empty());

    let firecrawl_base_url = or_default("HOOKLINE_FIRECRAWL_BASE_URL", "https://api.firecrawl.dev");
    let gemini_base_url = or_default(
        "HOOKLINE_GEMINI_BASE_URL",
        "https://generativelanguage.googleapis.com",
    );
    let gemini_model = or_default("HOOKLINE_GEMINI_MODEL", "gemini-2.0-flash-exp");

    let upstream_timeout_secs = parse_u64("HOOKLINE_UPSTREAM_TIMEOUT_SECS", "30")?;
    let excerpt_max_chars = parse_usize("HOOKLINE_EXCERPT_MAX_CHARS", "2000")?;
    let max_sources = parse_usize("HOOKLINE_MAX_SOURCES", "15")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        firecrawl_api_key,
        gemini_api_key,
        firecrawl_base_url,
        gemini_base_url,
        gemini_model,
        upstream_timeout_secs,
        excerpt_max_chars,
        max_sources,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("unknown"), Environment::Development);
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("empty env should be valid");
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.firecrawl_api_key.is_none());
        assert!(cfg.gemini_api_key.is_none());
        assert_eq!(cfg.firecrawl_base_url, "https://api.firecrawl.dev");
        assert_eq!(
            cfg.gemini_base_url,
            "https://generativelanguage.googleapis.com"
        );
        assert_eq!(cfg.gemini_model, "gemini-2.0-flash-exp");
        assert_eq!(cfg.upstream_timeout_secs, 30);
        assert_eq!(cfg.excerpt_max_chars, 2000);
        assert_eq!(cfg.max_sources, 15);
    }

    #[test]
    fn build_app_config_reads_api_keys() {
        let mut map = HashMap::new();
        map.insert("FIRECRAWL_API_KEY", "fc-key");
        map.insert("GEMINI_API_KEY", "ai-key");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config");
        assert_eq!(cfg.firecrawl_api_key.as_deref(), Some("fc-key"));
        assert_eq!(cfg.gemini_api_key.as_deref(), Some("ai-key"));
    }

    #[test]
    fn build_app_config_treats_blank_api_key_as_absent() {
        let mut map = HashMap::new();
        map.insert("GEMINI_API_KEY", "   ");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config");
        assert!(cfg.gemini_api_key.is_none());
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map = HashMap::new();
        map.insert("HOOKLINE_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HOOKLINE_BIND_ADDR"),
            "expected InvalidEnvVar(HOOKLINE_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_excerpt_budget() {
        let mut map = HashMap::new();
        map.insert("HOOKLINE_EXCERPT_MAX_CHARS", "plenty");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "HOOKLINE_EXCERPT_MAX_CHARS"),
            "expected InvalidEnvVar(HOOKLINE_EXCERPT_MAX_CHARS), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_honors_overrides() {
        let mut map = HashMap::new();
        map.insert("HOOKLINE_ENV", "production");
        map.insert("HOOKLINE_BIND_ADDR", "127.0.0.1:9000");
        map.insert("HOOKLINE_GEMINI_MODEL", "gemini-2.0-pro");
        map.insert("HOOKLINE_EXCERPT_MAX_CHARS", "15000");
        map.insert("HOOKLINE_MAX_SOURCES", "12");
        let cfg = build_app_config(lookup_from_map(&map)).expect("config");
        assert_eq!(cfg.env, Environment::Production);
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:9000");
        assert_eq!(cfg.gemini_model, "gemini-2.0-pro");
        assert_eq!(cfg.excerpt_max_chars, 15000);
        assert_eq!(cfg.max_sources, 12);
    }
}
