//! Integration tests for the controller's public API.
//!
//! Walks through the development-box scenario: one base configuration,
//! several environments, production values declared next to each setting.

use envswitch::controller::Controller;
use envswitch::environ::from_pairs;
use envswitch::provider::{EnvironmentProvider, Settings};
use envswitch::rules::{
    parse_providers, register_providers, DetectRule, EnvironmentSpec, RuleProvider,
};
use envswitch::SettingsError;
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;

struct Machine {
    name: &'static str,
    here: bool,
    trump: bool,
}

impl EnvironmentProvider for Machine {
    fn name(&self) -> &str {
        self.name
    }

    fn detect(&self) -> bool {
        self.here
    }

    fn values(&self) -> Settings {
        Settings::new()
            .with("HOST", "192.168.56.101")
            .with("USER", "dev")
            .with_computed("SECRET", |production| match production {
                Some(Value::String(s)) => json!(s.to_uppercase()),
                _ => Value::Null,
            })
    }

    fn wants_environ_trump(&self) -> bool {
        self.trump
    }
}

fn machine(name: &'static str, here: bool) -> Arc<Machine> {
    Arc::new(Machine {
        name,
        here,
        trump: false,
    })
}

fn database_settings(controller: &Controller) -> envswitch::Result<Vec<Value>> {
    Ok(vec![
        controller.resolve_or("NAME", "bit_bucket")?,
        controller.resolve_or("USER", "prodUser")?,
        controller.resolve_or("HOST", "127.0.0.1")?,
        controller.resolve_or("PORT", "")?,
    ])
}

#[test]
fn production_uses_declared_values() {
    let mut controller = Controller::with_env_lookup(from_pairs::<_, &str, &str>([]));
    controller.register_instance(machine("kristine", false)).unwrap();
    controller.register_instance(machine("lee", false)).unwrap();

    assert_eq!(
        database_settings(&controller).unwrap(),
        vec![json!("bit_bucket"), json!("prodUser"), json!("127.0.0.1"), json!("")]
    );
    assert!(controller.all_values().is_none());
}

#[test]
fn developer_box_overrides_some_values() {
    let mut controller = Controller::with_env_lookup(from_pairs::<_, &str, &str>([]));
    controller.register_instance(machine("kristine", true)).unwrap();
    controller.register_instance(machine("lee", false)).unwrap();

    assert_eq!(
        database_settings(&controller).unwrap(),
        vec![json!("bit_bucket"), json!("dev"), json!("192.168.56.101"), json!("")]
    );
    assert_eq!(controller.resolve_or("SECRET", "abc").unwrap(), json!("ABC"));
}

#[test]
fn two_matching_machines_is_a_startup_error() {
    let mut controller = Controller::new();
    controller.register_instance(machine("kristine", true)).unwrap();
    let err = controller.register_instance(machine("lee", true)).unwrap_err();

    assert!(matches!(err, SettingsError::MultipleMatch { .. }));
    assert_eq!(controller.active_name(), Some("kristine"));
    assert!(controller.did_find_multiple_matches());
}

#[test]
fn same_instance_twice_is_rejected_regardless_of_detection() {
    for here in [true, false] {
        let mut controller = Controller::new();
        let provider = machine("kristine", here);
        controller.register_instance(provider.clone()).unwrap();
        assert!(matches!(
            controller.register_instance(provider),
            Err(SettingsError::DuplicateRegistration { .. })
        ));
    }
}

#[test]
fn required_setting_without_source_fails() {
    let controller = Controller::new();
    assert!(matches!(
        controller.resolve("ADMIN_LOGIN", None),
        Err(SettingsError::NoMatch { .. })
    ));
}

#[test]
fn trump_mode_prefers_environment_variables() {
    let mut controller = Controller::with_env_lookup(from_pairs([("HOST", "10.0.0.9")]));
    controller
        .register_instance(Arc::new(Machine {
            name: "ci",
            here: true,
            trump: true,
        }))
        .unwrap();

    assert_eq!(controller.resolve_or("HOST", "anything").unwrap(), json!("10.0.0.9"));
    assert_eq!(controller.resolve_or("USER", "prodUser").unwrap(), json!("dev"));
    // A computed value yielding null is treated as missing.
    assert!(controller.resolve("SECRET", None).is_err());
}

#[test]
fn reset_behaves_like_fresh_controller() {
    let mut controller = Controller::with_env_lookup(from_pairs([("HOST", "10.0.0.9")]));
    controller.set_environ_trump(true);
    controller.register_instance(machine("kristine", true)).unwrap();

    controller.reset();

    assert!(controller.active_name().is_none());
    assert_eq!(controller.registered_count(), 0);
    assert!(!controller.environ_trump());
    assert_eq!(controller.resolve_or("HOST", "127.0.0.1").unwrap(), json!("127.0.0.1"));
}

#[test]
fn code_and_declarative_providers_mix() {
    let env = from_pairs([("DEPLOY_ENV", "test")]);
    let mut controller = Controller::with_env_lookup(env.clone());
    controller.register_instance(machine("kristine", false)).unwrap();

    let yaml = r#"
environments:
  test-server:
    detect: [{ env: DEPLOY_ENV, value: test }]
    values:
      HOST: 10.1.1.1
"#;
    let file = parse_providers(yaml, Path::new("envswitch.yml")).unwrap();
    register_providers(&mut controller, &file).unwrap();

    assert_eq!(controller.active_name(), Some("test-server"));
    assert_eq!(controller.resolve_or("HOST", "127.0.0.1").unwrap(), json!("10.1.1.1"));

    let late = RuleProvider::from_spec(
        "also-test",
        EnvironmentSpec {
            detect: vec![DetectRule::env("DEPLOY_ENV")],
            ..EnvironmentSpec::default()
        },
    )
    .unwrap()
    .with_env_lookup(env);
    assert!(controller.register_instance(Arc::new(late)).is_err());
}
