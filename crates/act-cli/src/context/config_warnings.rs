use act_config::{ActivityConfig, ENV_PREFIX};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &ActivityConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &ActivityConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.report.is_configured() && has_single_underscore_key(&env_keys, "REPORT") {
        warnings.push(
            "Report config appears default while ACTIVITY_REPORT_* env vars exist. Use double underscores (example: ACTIVITY_REPORT__API_KEY)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "STORE") {
        warnings.push(
            "ACTIVITY_STORE_* env vars are ignored. Use double underscores (example: ACTIVITY_STORE__PATH)."
                .to_string(),
        );
    }

    warnings
}

/// `ACTIVITY_<SECTION>_X` keys never reach `<section>.x`; figment needs `__`.
fn has_single_underscore_key(keys: &[String], section: &str) -> bool {
    let single = format!("{ENV_PREFIX}{section}_");
    let double = format!("{ENV_PREFIX}{section}__");
    keys.iter()
        .any(|key| key.starts_with(&single) && !key.starts_with(&double))
}
