use std::io::Write;

use rusty_fork::rusty_fork_test;

use super::*;

#[test]
fn test_from_yaml() {
    let config = ClientConfig::from_yaml([indoc::indoc! {"
        host: 'config.local'
        port: 8888
    "}])
    .unwrap();

    assert_eq!(
        config,
        ClientConfig {
            host: "config.local".to_owned(),
            port: Some(8888),
            secure_port: None,
            accept_invalid_certs: false,
        }
    );
}

#[test]
fn test_from_yaml_later_input_overrides() {
    let base = indoc::indoc! {"
        host: 'config.local'
        port: 8888
    "};
    let overrides = indoc::indoc! {"
        securePort: 8443
        acceptInvalidCerts: true
    "};

    let config = ClientConfig::from_yaml([base, overrides]).unwrap();

    assert_eq!(config.host, "config.local");
    assert_eq!(config.port, Some(8888));
    assert_eq!(config.secure_port, Some(8443));
    assert!(config.accept_invalid_certs);
}

#[test]
fn test_missing_host_fails() {
    let result = ClientConfig::from_yaml(["port: 8888"]);

    assert!(matches!(
        result,
        Err(ConfigParsingError::GeneralParsingError(_))
    ));
}

#[test]
fn test_from_files() {
    let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
    writeln!(file, "host: 'files.local'\nsecurePort: 9443").unwrap();

    let config = ClientConfig::from_files(&[file.path()]).unwrap();

    assert_eq!(config.host, "files.local");
    assert_eq!(config.secure_port, Some(9443));
}

#[test]
fn test_from_files_unsupported_extension() {
    let result = ClientConfig::from_files(&["client.toml"]);

    assert!(matches!(
        result,
        Err(ConfigParsingError::GeneralParsingError(message)) if message.contains("client.toml")
    ));
}

#[cfg(feature = "config_json")]
#[test]
fn test_parse_json() {
    let config = ClientConfig::parse([InputFormat::json_str(
        r#"{"host": "json.local", "port": 80}"#,
    )])
    .unwrap();

    assert_eq!(config.host, "json.local");
    assert_eq!(config.port, Some(80));
}

rusty_fork_test! {
    #[test]
    #[cfg(feature = "config_env")]
    fn test_env_overrides_yaml() {
        unsafe {
            std::env::set_var("CONFIG_CLIENT_securePort", "7443");
        }

        let config = ClientConfig::from_yaml(["host: 'config.local'"]).unwrap();

        assert_eq!(config.secure_port, Some(7443));
    }
}
