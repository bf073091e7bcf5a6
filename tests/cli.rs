use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread;
use tempfile::tempdir;

const LINK_BASE: &str = "https://example.test/r";

fn rw(cache: &Path, api_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("rw").unwrap();
    cmd.env("RW_CACHE_PATH", cache)
        .env("RW_API_URL", api_url)
        .env("RW_LINK_BASE_URL", LINK_BASE)
        .env_remove("RUST_LOG");
    cmd
}

/// An address with nothing listening, so any fetch attempt fails fast.
fn dead_url() -> String {
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    format!("http://127.0.0.1:{port}/registrations")
}

/// Serve one JSON response on a local port.
fn serve_once(body: Value) -> (String, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/registrations", listener.local_addr().unwrap());
    let body = body.to_string();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 4096];
        let _ = stream.read(&mut buf).unwrap();
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
    });
    (url, handle)
}

fn entry(id: u64, name: &str, menu: u32, label: &str, periods: &[u32]) -> Value {
    json!({
        "id": id,
        "restaurant": { "name": name },
        "menuType": { "id": menu, "label": label },
        "periods": periods.iter().map(|p| json!({ "id": p })).collect::<Vec<_>>(),
    })
}

fn write_cache(path: &Path, entries: Vec<Value>) {
    fs::write(path, json!({ "result": entries }).to_string()).unwrap();
}

#[test]
fn remote_fetch_prints_suggestion_and_writes_cache() {
    let temp = tempdir().unwrap();
    let cache = temp.path().join("cache.json");
    let doc = json!({ "result": [entry(1, "A", 1, "RW", &[1])] });
    let (url, server) = serve_once(doc.clone());

    rw(&cache, &url)
        .assert()
        .success()
        .stdout(predicate::str::contains("Data source: remote"))
        .stdout(predicate::str::contains("1. A - RW [https://example.test/r/1]"));
    server.join().unwrap();

    let written: Value = serde_json::from_str(&fs::read_to_string(&cache).unwrap()).unwrap();
    assert_eq!(written, doc);
}

#[test]
fn existing_cache_is_used_without_network() {
    let temp = tempdir().unwrap();
    let cache = temp.path().join("cache.json");
    write_cache(
        &cache,
        vec![
            entry(1, "Lunch Only", 1, "Menu RW", &[1]),
            entry(2, "Dinner Place", 1, "Menu RW", &[2]),
        ],
    );

    rw(&cache, &dead_url())
        .args(["--meal", "dinner"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Meal: dinner"))
        .stdout(predicate::str::contains("Data source: cache"))
        .stdout(predicate::str::contains("Dinner Place - Menu RW"))
        .stdout(predicate::str::contains("Lunch Only").not());
}

#[test]
fn menu_types_keep_only_valid_ids() {
    let temp = tempdir().unwrap();
    let cache = temp.path().join("cache.json");
    write_cache(
        &cache,
        vec![
            entry(1, "Basic", 1, "Menu RW", &[1, 2]),
            entry(2, "Plus", 2, "Menu +Plus", &[1, 2]),
        ],
    );

    rw(&cache, &dead_url())
        .args(["-t", "9,abc,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Menu types: 2\n"))
        .stdout(predicate::str::contains("Plus - Menu +Plus"))
        .stdout(predicate::str::contains("Basic").not());
}

#[test]
fn count_limits_output() {
    let temp = tempdir().unwrap();
    let cache = temp.path().join("cache.json");
    write_cache(
        &cache,
        (1..=10).map(|i| entry(i, &format!("R{i}"), 1, "Menu RW", &[1])).collect(),
    );

    let assert = rw(&cache, &dead_url()).args(["-c", "3"]).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("3. "));
    assert!(!stdout.contains("4. "));
}

#[test]
fn huge_count_returns_every_match() {
    let temp = tempdir().unwrap();
    let cache = temp.path().join("cache.json");
    write_cache(
        &cache,
        vec![
            entry(1, "One", 1, "Menu RW", &[1]),
            json!({ "id": "slug-2", "restaurant": { "name": "Two" }, "menuType": { "id": 1, "label": "Menu RW" }, "periods": [{ "id": 2 }, { "name": "x" }] }),
        ],
    );

    rw(&cache, &dead_url())
        .args(["--count", "99999999999999999999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2. "))
        .stdout(predicate::str::contains("Two - Menu RW [https://example.test/r/slug-2]"));
}

#[test]
fn zero_count_fails_before_any_io() {
    let temp = tempdir().unwrap();
    let cache = temp.path().join("cache.json");

    rw(&cache, &dead_url())
        .args(["--count", "0"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("positive number"));

    assert!(!cache.exists());
}

#[test]
fn invalid_meal_and_menu_types_exit_with_one() {
    let temp = tempdir().unwrap();
    let cache = temp.path().join("cache.json");

    rw(&cache, &dead_url())
        .args(["--meal", "brunch"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("brunch"));

    rw(&cache, &dead_url())
        .args(["--menu-types", "5,6"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("menu type"));

    assert!(!cache.exists());
}

#[test]
fn unreachable_api_reports_no_results_and_caches_empty_list() {
    let temp = tempdir().unwrap();
    let cache = temp.path().join("cache.json");

    rw(&cache, &dead_url())
        .assert()
        .success()
        .stdout(predicate::str::contains("No restaurants found"))
        .stderr(predicate::str::contains("request failed"));

    let written: Value = serde_json::from_str(&fs::read_to_string(&cache).unwrap()).unwrap();
    assert_eq!(written, json!({ "result": [] }));
}

#[test]
fn help_lists_menu_tiers_and_examples() {
    Command::cargo_bin("rw")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Menu Diamond"))
        .stdout(predicate::str::contains("--force-api"))
        .stdout(predicate::str::contains("Examples:"));
}
