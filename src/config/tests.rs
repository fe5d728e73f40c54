use {
    crate::config::{GLBIND_CHECK_ERRORS, GLBIND_LIBRARY, GLBIND_LOG_CALLS, GlConfig},
    std::path::PathBuf,
};

fn with_vars(vars: &[(&str, &str)]) -> GlConfig {
    let mut config = GlConfig::default();
    config.apply_env(|name| {
        vars.iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.to_string())
    });
    config
}

#[test]
fn defaults() {
    let config = GlConfig::default();
    assert!(!config.log_calls);
    assert!(config.check_errors);
    assert_eq!(config.library, None);
    assert_eq!(with_vars(&[]), config);
}

#[test]
fn overrides() {
    let config = with_vars(&[
        (GLBIND_LOG_CALLS, "yes"),
        (GLBIND_CHECK_ERRORS, "OFF"),
        (GLBIND_LIBRARY, "/opt/mesa/libGL.so.1"),
    ]);
    assert!(config.log_calls);
    assert!(!config.check_errors);
    assert_eq!(config.library, Some(PathBuf::from("/opt/mesa/libGL.so.1")));
}

#[test]
fn invalid_values_are_ignored() {
    let config = with_vars(&[
        (GLBIND_LOG_CALLS, "sometimes"),
        (GLBIND_CHECK_ERRORS, " 0 "),
        (GLBIND_LIBRARY, ""),
    ]);
    assert!(!config.log_calls);
    assert!(!config.check_errors);
    assert_eq!(config.library, None);
}
