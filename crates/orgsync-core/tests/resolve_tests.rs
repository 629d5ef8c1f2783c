//! Tests for layered configuration resolution

use orgsync_core::{
    ConfigBundle, ConfigSource, Resolution, ResolvedConfig, SessionContext, Settings,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn org_bundle() -> ConfigBundle {
    ConfigBundle::from_yaml(
        r#"
restrictedRepos:
  exclude: ["admin", ".*-archive$"]
repository:
  private: true
  has_wiki: false
  topics: [org]
branches:
  - name: main
    protection:
      required_approving_review_count: 1
"#,
    )
    .unwrap()
    .with_suborg_config(
        "backend.yml",
        r#"
suborgrepos: ["api-.*", "db"]
repository:
  has_wiki: true
  topics: [backend]
"#,
    )
    .unwrap()
    .with_suborg_config(
        "security.yml",
        r#"
suborgrepos: ["api-gateway"]
repository:
  delete_branch_on_merge: true
"#,
    )
    .unwrap()
    .with_repo_config(
        "api-gateway.yml",
        r#"
repository:
  name: api-gateway
  config:
    repository:
      description: Edge gateway
      topics: [gateway]
"#,
    )
    .unwrap()
}

fn resolved(resolution: Resolution) -> ResolvedConfig {
    match resolution {
        Resolution::Resolved(config) => config,
        Resolution::Restricted => panic!("repository unexpectedly restricted"),
    }
}

#[test]
fn restricted_repository_short_circuits() {
    let bundle = org_bundle();
    let settings = Settings::new(&bundle, SessionContext::default());

    assert_eq!(settings.resolve("admin").unwrap(), Resolution::Restricted);
    assert_eq!(settings.resolve("old-archive").unwrap(), Resolution::Restricted);
}

#[test]
fn baseline_only_repository() {
    let bundle = org_bundle();
    let settings = Settings::new(&bundle, SessionContext::default());

    let config = resolved(settings.resolve("website").unwrap());
    assert_eq!(config.repository, "website");
    assert_eq!(config.sources, vec![ConfigSource::Baseline]);
    assert_eq!(config.config["repository"]["private"], true);
    assert_eq!(config.config["branches"][0]["name"], "main");
}

#[test]
fn layers_merge_in_order() {
    let bundle = org_bundle();
    let settings = Settings::new(&bundle, SessionContext::default());

    let config = resolved(settings.resolve("api-gateway").unwrap());
    assert_eq!(
        config.sources,
        vec![
            ConfigSource::Baseline,
            ConfigSource::SubOrg {
                file: "backend.yml".into()
            },
            ConfigSource::SubOrg {
                file: "security.yml".into()
            },
            ConfigSource::Repository {
                file: "api-gateway.yml".into()
            },
        ]
    );

    let repository = &config.config["repository"];
    assert_eq!(repository["private"], true);
    assert_eq!(repository["has_wiki"], true);
    assert_eq!(repository["delete_branch_on_merge"], true);
    assert_eq!(repository["description"], "Edge gateway");
    // Sequences are replaced by the later layer, not concatenated.
    assert_eq!(repository["topics"], json!(["gateway"]));
    // The suborgrepos selector is not part of the merged settings.
    assert!(config.config.get("suborgrepos").is_none());
}

#[test]
fn suborg_without_repository_override() {
    let bundle = org_bundle();
    let settings = Settings::new(&bundle, SessionContext::default());

    let config = resolved(settings.resolve("db").unwrap());
    assert_eq!(config.sources.len(), 2);
    assert_eq!(config.config["repository"]["topics"], json!(["backend"]));
}

#[test]
fn null_payload_contributes_nothing() {
    let bundle = org_bundle()
        .with_repo_config("website.yml", "repository:\n  name: website\n")
        .unwrap();
    let settings = Settings::new(&bundle, SessionContext::default());

    let config = resolved(settings.resolve("website").unwrap());
    assert_eq!(config.sources, vec![ConfigSource::Baseline]);
}

#[test]
fn resolve_propagates_gate_errors() {
    let bundle = ConfigBundle::from_yaml("repository:\n  private: true\n").unwrap();
    let settings = Settings::new(&bundle, SessionContext::default());

    assert!(settings.resolve("anything").is_err());
}

#[test]
fn resolution_serializes_to_json() {
    let bundle = org_bundle();
    let settings = Settings::new(&bundle, SessionContext::default());

    let value = serde_json::to_value(settings.resolve("db").unwrap()).unwrap();
    assert_eq!(value["status"], "resolved");
    assert_eq!(value["repository"], "db");
    assert_eq!(value["sources"][1], json!({ "layer": "suborg", "file": "backend.yml" }));
}
