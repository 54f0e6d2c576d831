#![allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn confignav(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("confignav").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("CONFIG_ID")
        .env_remove("CONFIGNAV_CONFIG")
        .env_remove("CONFIGNAV_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

// ---------------------------------------------------------------------------
// confignav resolve
// ---------------------------------------------------------------------------

#[test]
fn resolve_rally_points_at_report() {
    let dir = TempDir::new().unwrap();
    confignav(&dir)
        .args(["resolve", "rally", "-i", "42"])
        .assert()
        .success()
        .stdout("/configs/42/rally_report\n");
}

#[test]
fn resolve_empty_tag_is_config_page() {
    let dir = TempDir::new().unwrap();
    confignav(&dir)
        .args(["resolve", "", "--config-id", "7"])
        .assert()
        .success()
        .stdout("/configs/7\n");
}

#[test]
fn resolve_log_matches_empty_tag() {
    let dir = TempDir::new().unwrap();
    confignav(&dir)
        .args(["resolve", "log", "-i", "7"])
        .assert()
        .success()
        .stdout("/configs/7\n");
}

#[test]
fn resolve_string_id_verbatim() {
    let dir = TempDir::new().unwrap();
    confignav(&dir)
        .args(["resolve", "delete", "-i", "abc"])
        .assert()
        .success()
        .stdout("/configs/abc/delete\n");
}

#[test]
fn resolve_accepts_negative_id() {
    let dir = TempDir::new().unwrap();
    confignav(&dir)
        .args(["resolve", "test", "-i", "-1"])
        .assert()
        .success()
        .stdout("/configs/-1/test\n");
}

#[test]
fn resolve_unknown_tag_prints_nothing() {
    let dir = TempDir::new().unwrap();
    confignav(&dir)
        .args(["resolve", "bogus", "-i", "1"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("unknown route tag"));
}

#[test]
fn resolve_unknown_tag_strict_fails() {
    let dir = TempDir::new().unwrap();
    confignav(&dir)
        .args(["--strict", "resolve", "bogus", "-i", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown route tag: 'bogus'"));
}

#[test]
fn resolve_reads_id_from_environment() {
    let dir = TempDir::new().unwrap();
    confignav(&dir)
        .env("CONFIG_ID", "15")
        .args(["resolve", "redeploy"])
        .assert()
        .success()
        .stdout("/configs/15/redeploy\n");
}

#[test]
fn resolve_explicit_id_beats_environment() {
    let dir = TempDir::new().unwrap();
    confignav(&dir)
        .env("CONFIG_ID", "15")
        .args(["resolve", "clean", "-i", "16"])
        .assert()
        .success()
        .stdout("/configs/16/clean\n");
}

#[test]
fn resolve_without_any_id_fails() {
    let dir = TempDir::new().unwrap();
    confignav(&dir)
        .args(["resolve", "destroy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no config id"));
}

#[test]
fn resolve_json_output() {
    let dir = TempDir::new().unwrap();
    let out = confignav(&dir)
        .args(["--json", "resolve", "full_dump", "-i", "3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["tag"], "full_dump");
    assert_eq!(json["url"], "/configs/3/full_dump");
}

// ---------------------------------------------------------------------------
// settings file
// ---------------------------------------------------------------------------

#[test]
fn settings_file_supplies_base_url_and_id_env() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".confignav.yaml"),
        "base_url: http://cloud-lab:5000/\nid_env: DEPLOY_ID\n",
    )
    .unwrap();

    confignav(&dir)
        .env("DEPLOY_ID", "4")
        .args(["resolve", "admin_openrc"])
        .assert()
        .success()
        .stdout("http://cloud-lab:5000/configs/4/admin_openrc\n");
}

#[test]
fn base_url_flag_overrides_settings_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".confignav.yaml"), "base_url: http://file\n").unwrap();

    confignav(&dir)
        .args(["--base-url", "https://flag", "resolve", "test", "-i", "1"])
        .assert()
        .success()
        .stdout("https://flag/configs/1/test\n");
}

#[test]
fn missing_explicit_settings_file_fails() {
    let dir = TempDir::new().unwrap();
    confignav(&dir)
        .args(["--config", "missing.yaml", "resolve", "test", "-i", "1"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("settings file not found: missing.yaml"));
}

#[test]
fn missing_settings_file_from_env_fails() {
    let dir = TempDir::new().unwrap();
    confignav(&dir)
        .env("CONFIGNAV_CONFIG", dir.path().join("typo.yaml"))
        .args(["resolve", "test", "-i", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("settings file not found"));
}

#[test]
fn invalid_settings_file_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".confignav.yaml"), "base_url: lab\n").unwrap();

    confignav(&dir)
        .args(["resolve", "test", "-i", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("base_url"));
}

// ---------------------------------------------------------------------------
// confignav routes / open
// ---------------------------------------------------------------------------

#[test]
fn routes_table_lists_every_tag() {
    let dir = TempDir::new().unwrap();
    confignav(&dir)
        .arg("routes")
        .assert()
        .success()
        .stdout(predicate::str::contains("/configs/{id}/rally_report"))
        .stdout(predicate::str::contains("run_experiment"))
        .stdout(predicate::str::contains("''"));
}

#[test]
fn routes_json_has_eleven_entries() {
    let dir = TempDir::new().unwrap();
    let out = confignav(&dir)
        .args(["routes", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 11);
}

#[test]
fn open_unknown_tag_does_not_navigate() {
    let dir = TempDir::new().unwrap();
    confignav(&dir)
        .args(["open", "bogus", "-i", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Opened").not());
}

#[test]
fn routes_with_id_shows_concrete_urls() {
    let dir = TempDir::new().unwrap();
    confignav(&dir)
        .args(["--base-url", "http://lab", "routes", "-i", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://lab/configs/5/rally_report"))
        .stdout(predicate::str::contains("{id}").not());
}

// ---------------------------------------------------------------------------
// confignav init
// ---------------------------------------------------------------------------

#[test]
fn init_writes_settings_that_later_commands_load() {
    let dir = TempDir::new().unwrap();
    confignav(&dir)
        .args(["--base-url", "http://cloud-lab:5000", "--strict", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote .confignav.yaml"));

    let written = std::fs::read_to_string(dir.path().join(".confignav.yaml")).unwrap();
    assert!(written.contains("http://cloud-lab:5000"));

    confignav(&dir)
        .args(["resolve", "bogus", "-i", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown route tag"));
    confignav(&dir)
        .args(["resolve", "test", "-i", "1"])
        .assert()
        .success()
        .stdout("http://cloud-lab:5000/configs/1/test\n");
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(".confignav.yaml"), "strict: true\n").unwrap();

    confignav(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    confignav(&dir).args(["init", "--force"]).assert().success();

    let written = std::fs::read_to_string(dir.path().join(".confignav.yaml")).unwrap();
    assert!(written.contains("strict: false"));
}

#[test]
fn init_writes_to_explicit_config_path() {
    let dir = TempDir::new().unwrap();
    confignav(&dir)
        .args(["--config", "team.yaml", "init"])
        .assert()
        .success();
    assert!(dir.path().join("team.yaml").is_file());

    confignav(&dir)
        .args(["--config", "team.yaml", "resolve", "clean", "-i", "2"])
        .assert()
        .success()
        .stdout("/configs/2/clean\n");
}
