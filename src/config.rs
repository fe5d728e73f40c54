#[cfg(test)]
mod tests;

use std::path::PathBuf;

pub const GLBIND_LOG_CALLS: &str = "GLBIND_LOG_CALLS";
pub const GLBIND_CHECK_ERRORS: &str = "GLBIND_CHECK_ERRORS";
pub const GLBIND_LIBRARY: &str = "GLBIND_LIBRARY";

/// Behavior shared by every command table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GlConfig {
    /// Emit a `trace` record for every native call.
    pub log_calls: bool,
    /// Query the native error state after every checked call.
    pub check_errors: bool,
    /// Load this library instead of the platform default.
    pub library: Option<PathBuf>,
}

impl Default for GlConfig {
    fn default() -> Self {
        Self {
            log_calls: false,
            check_errors: true,
            library: None,
        }
    }
}

impl GlConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env(|name| std::env::var(name).ok());
        config
    }

    pub(crate) fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var(GLBIND_LOG_CALLS) {
            apply_bool(GLBIND_LOG_CALLS, &v, &mut self.log_calls);
        }
        if let Some(v) = var(GLBIND_CHECK_ERRORS) {
            apply_bool(GLBIND_CHECK_ERRORS, &v, &mut self.check_errors);
        }
        if let Some(v) = var(GLBIND_LIBRARY) {
            if v.len() > 0 {
                self.library = Some(v.into());
            }
        }
    }
}

fn apply_bool(name: &str, value: &str, dst: &mut bool) {
    match parse_bool(value) {
        Some(b) => *dst = b,
        _ => log::warn!("Ignoring invalid value of {}: `{}`", name, value),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    let truthy = ["1", "true", "yes", "on"];
    let falsy = ["0", "false", "no", "off"];
    if truthy.iter().any(|t| t.eq_ignore_ascii_case(value)) {
        Some(true)
    } else if falsy.iter().any(|t| t.eq_ignore_ascii_case(value)) {
        Some(false)
    } else {
        None
    }
}
