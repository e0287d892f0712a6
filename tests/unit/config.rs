use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr().unwrap().port(), 3000);
}

#[test]
fn reads_all_keys() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("YEARDOTS_HOST", "127.0.0.1"),
        ("YEARDOTS_PORT", " 8080 "),
        ("YEARDOTS_FONT_DIR", "/usr/share/fonts/custom"),
        ("YEARDOTS_MAX_RENDERS", "2"),
    ]))
    .unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.font_dir, Some(PathBuf::from("/usr/share/fonts/custom")));
    assert_eq!(cfg.max_renders, 2);
    assert_eq!(cfg.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
}

#[test]
fn bad_port_and_host_are_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("YEARDOTS_PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(_)));

    let cfg = ServerConfig::from_lookup(lookup(&[("YEARDOTS_HOST", "not a host")])).unwrap();
    assert!(matches!(cfg.socket_addr(), Err(ConfigError::InvalidHost(_))));
}

#[test]
fn max_renders_defaults_and_rejects_zero() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.max_renders, DEFAULT_MAX_RENDERS);

    for bad in ["0", "-1", "many"] {
        let err = ServerConfig::from_lookup(lookup(&[("YEARDOTS_MAX_RENDERS", bad)])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMaxRenders(_)), "{bad}");
    }
}
