//! Binary-level tests for `vault-get` and `notify-slack`

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CONFIG_VARS: [&str; 4] = ["VAULT_ADDR", "VAULT_TOKEN", "VAULT_BASE", "SLACK_CHANNEL"];

fn bin(name: &str) -> Command {
    let mut cmd = Command::cargo_bin(name).unwrap();
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_vault_get_without_path_prints_usage() {
    bin("vault-get")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_notify_without_message_prints_usage() {
    bin("notify-slack")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_vault_get_without_config_fails_before_network() {
    bin("vault-get")
        .arg("slack/webhook_url")
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("VAULT_ADDR / VAULT_TOKEN missing"));
}

#[test]
fn test_notify_without_config_prints_no_confirmation() {
    bin("notify-slack")
        .args(["hello", "world"])
        .env("SLACK_CHANNEL", "#general")
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("Sent to Slack").not());
}

#[test]
fn test_help_lists_env_backed_flags() {
    bin("notify-slack")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--vault-addr"))
        .stdout(predicate::str::contains("SLACK_CHANNEL"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_token_stops_before_delivery() {
    let vault = MockServer::start().await;
    Mock::given(path("/v1/auth/token/lookup-self"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({ "errors": ["permission denied"] })),
        )
        .mount(&vault)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/secret/data/akari-value/slack/webhook_url"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&vault)
        .await;

    let address = vault.uri();
    let assert = tokio::task::spawn_blocking(move || {
        bin("notify-slack")
            .arg("hello")
            .env("VAULT_ADDR", address)
            .env("VAULT_TOKEN", "s.revoked")
            .env("SLACK_CHANNEL", "#general")
            .assert()
    })
    .await
    .unwrap();

    assert
        .failure()
        .code(2)
        .stdout(predicate::str::contains("Sent to Slack").not())
        .stderr(predicate::str::contains("authentication failed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_vault_get_prints_value_as_stored() {
    let vault = MockServer::start().await;
    Mock::given(path("/v1/auth/token/lookup-self"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "request_id": "6d1e3c52-91c4-4c8e-b4a5-2f7f3f6e2a10",
            "lease_id": "",
            "renewable": false,
            "lease_duration": 0,
            "wrap_info": null,
            "warnings": null,
            "auth": null,
            "data": {
                "accessor": "Xq3dN8vR2mKpT7sLwY5bZ1cA",
                "creation_time": 1_714_554_000,
                "creation_ttl": 0,
                "display_name": "root",
                "entity_id": "",
                "expire_time": null,
                "explicit_max_ttl": 0,
                "id": "root",
                "meta": null,
                "num_uses": 0,
                "orphan": true,
                "path": "auth/token/root",
                "policies": ["root"],
                "ttl": 0,
                "type": "service"
            }
        })))
        .mount(&vault)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/secret/data/akari-value/deploy/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "request_id": "a3b0c1d2-0000-4000-8000-000000000001",
            "lease_id": "",
            "renewable": false,
            "lease_duration": 0,
            "wrap_info": null,
            "warnings": null,
            "auth": null,
            "data": {
                "data": { "retries": 3, "enabled": true, "host": "db.internal" },
                "metadata": {
                    "created_time": "2024-05-01T09:00:00.000000Z",
                    "custom_metadata": null,
                    "deletion_time": "",
                    "destroyed": false,
                    "version": 1
                }
            }
        })))
        .expect(1)
        .mount(&vault)
        .await;

    let address = vault.uri();
    let assert = tokio::task::spawn_blocking(move || {
        bin("vault-get")
            .arg("deploy/settings")
            .env("VAULT_ADDR", address)
            .env("VAULT_TOKEN", "root")
            .assert()
    })
    .await
    .unwrap();

    assert.success().stdout(predicate::str::contains(
        "{\n  \"retries\": 3,\n  \"enabled\": true,\n  \"host\": \"db.internal\"\n}",
    ));
}
