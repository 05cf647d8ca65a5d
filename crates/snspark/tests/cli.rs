use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../tests/fixtures")
        .join(name)
}

/// A command isolated from the caller's environment and any local .env
fn snspark(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("snspark").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("SPARK_TOKEN")
        .env_remove("CHANNEL_MAP")
        .env_remove("DEFAULT_CHANNEL")
        .env_remove("RUST_LOG")
        .env("HOME", dir.path())
        .env("NO_COLOR", "1");
    cmd
}

fn write_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("relay.toml");
    std::fs::write(
        &path,
        r#"
spark_token = "test-token"
default_channel = "room-default"

[channel_map]
production-notices = "room-events"
"#,
    )
    .unwrap();
    path
}

#[test]
fn test_selftest_dry_run_renders_every_example() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    snspark(&dir)
        .args(["--json", "--config"])
        .arg(&config)
        .args(["selftest", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"roomId\": \"room-events\""))
        .stdout(predicate::str::contains("autoscaling_activity"))
        .stdout(predicate::str::contains("database_notification"))
        .stdout(predicate::str::contains("'ALARM' --> OK"))
        .stdout(predicate::str::contains("capacity from 1 to 0"));
}

#[test]
fn test_render_fixture() {
    let dir = TempDir::new().unwrap();

    snspark(&dir)
        .arg("render")
        .arg(fixture("cloudwatch_alarm.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("kind: alarm"))
        .stdout(predicate::str::contains("class=\"danger\""));
}

#[test]
fn test_render_unclassified_from_stdin() {
    let dir = TempDir::new().unwrap();
    let batch = serde_json::json!({
        "Records": [{
            "Sns": {
                "TopicArn": "arn:aws:sns:us-east-1:123456789012:production-notices",
                "Subject": "hello",
                "Message": "{\"foo\":1}"
            }
        }]
    });

    snspark(&dir)
        .args(["--json", "render", "-"])
        .write_stdin(batch.to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"unclassified\""))
        .stdout(predicate::str::contains("\"markdown\": \"\""));
}

#[test]
fn test_render_malformed_batch_fails() {
    let dir = TempDir::new().unwrap();

    snspark(&dir)
        .args(["render", "-"])
        .write_stdin(r#"{"Records": []}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed SNS batch"));
}

#[test]
fn test_send_without_token_fails() {
    let dir = TempDir::new().unwrap();

    snspark(&dir)
        .arg("send")
        .arg(fixture("cloudwatch_ok.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("spark_token is empty"));
}

#[test]
fn test_config_init_and_show() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conf").join("relay.toml");

    snspark(&dir)
        .arg("--config")
        .arg(&path)
        .args([
            "config",
            "init",
            "--token",
            "abcdefghijklmnop",
            "--default-channel",
            "room-default",
            "--map",
            "production-alerts=room-alerts",
        ])
        .assert()
        .success();

    snspark(&dir)
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("abcdefgh...mnop"))
        .stdout(predicate::str::contains("production-alerts -> room-alerts"));
}

#[test]
fn test_encode_channels() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("channels.json");
    std::fs::write(&file, r#"{"a":"b"}"#).unwrap();

    // base64 of {"a":"b"}
    snspark(&dir)
        .args(["config", "encode-channels"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("eyJhIjoiYiJ9"));
}
