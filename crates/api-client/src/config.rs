use shared_types::DashboardConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<DashboardConfig> = OnceLock::new();

/// `config.toml` from the workspace root, baked in at build time so the
/// wasm bundle needs no file access.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Build-time override for `api.base_url`.
const BASE_URL_OVERRIDE: Option<&str> = option_env!("DASHBOARD_API_BASE_URL");

/// Parse configuration text, falling back to defaults when it is malformed.
pub fn parse_config(contents: &str, base_url_override: Option<&str>) -> DashboardConfig {
    let config = DashboardConfig::from_toml_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse config.toml, using defaults");
        DashboardConfig::default()
    });
    config.with_base_url_override(base_url_override)
}

/// The process-wide configuration. Parsed on first use.
pub fn config() -> &'static DashboardConfig {
    CONFIG.get_or_init(|| {
        let config = parse_config(EMBEDDED_CONFIG, BASE_URL_OVERRIDE);
        tracing::info!(base_url = config.api_base_url(), "dashboard configuration loaded");
        config
    })
}
