use assert_cmd::Command;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

// Nothing listens here, so every fetch fails fast
const DEAD_ENDPOINT: &str = "http://127.0.0.1:9/api";

fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fortune").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("FORTUNE_API_URL")
        .env_remove("FORTUNE_CACHE_DIR")
        .arg("--no-color");
    cmd
}

fn run_json(home: &TempDir, args: &[&str]) -> Value {
    let out = cmd(home)
        .arg("--json")
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&out).expect("valid json output")
}

#[test]
fn signs_lists_the_catalog() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .arg("signs")
        .assert()
        .success()
        .stdout(contains("Capricorn"))
        .stdout(contains("12月22日 - 1月19日"));

    let signs = run_json(&home, &["signs"]);
    assert_eq!(signs.as_array().map(Vec::len), Some(12));
}

#[test]
fn invalid_birthdate_is_rejected() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["check", "1990-13-01"])
        .assert()
        .failure()
        .stderr(contains("生年月日の形式が正しくありません。"));
}

#[test]
fn unreachable_api_falls_back() {
    let home = TempDir::new().unwrap();
    let out = run_json(&home, &["check", "1990-04-20", "--endpoint", DEAD_ENDPOINT, "--timeout-ms", "2000"]);

    assert_eq!(out["sign"]["key"], "Taurus");
    assert_eq!(out["origin"], "fallback");
    assert_eq!(out["fortune"]["color"], "フォレストグリーン");
    assert!(out["fortune"]["scores"]["overall"].is_null());
    assert!(out["message"].as_str().unwrap().contains("接続に失敗"));
}

#[test]
fn last_sign_survives_between_runs() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["last"])
        .assert()
        .failure()
        .stderr(contains("No previous sign"));

    run_json(&home, &["sign", "scorpio", "--endpoint", DEAD_ENDPOINT]);
    let restored = run_json(&home, &["last", "--endpoint", DEAD_ENDPOINT]);
    assert_eq!(restored["sign"]["key"], "Scorpio");
}

#[test]
fn clear_cache_accepts_a_sign() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["clear-cache", "--sign", "leo"])
        .assert()
        .success()
        .stdout(contains("獅子座 (Leo)"));
}
