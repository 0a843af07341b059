use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn catalog() -> Value {
    json!([
        {"id": 1, "name": "Luna", "kind": "cat", "weight": 4000, "height": 25, "length": 45,
         "photo_url": "https://example.com/luna.jpg", "description": "Sleeps all day", "number_of_lives": 7},
        {"id": 2, "name": "Rex", "kind": "dog", "weight": 12000, "height": 50, "length": 80,
         "photo_url": "", "description": "Loves sticks"},
        {"id": 3, "name": "Milo", "kind": "cat", "weight": 3000, "height": 22, "length": 40,
         "description": "Down to the last life", "number_of_lives": 1},
        {"id": 4, "name": "Toby", "kind": "dog", "weight": 9000, "height": 40, "length": 70,
         "description": "Fetch champion"},
        {"id": 5, "name": "Nala", "kind": "cat", "weight": 3500, "height": 22, "length": 40,
         "description": "Curious", "number_of_lives": 3},
        {"id": 6, "name": "Ghost", "kind": "cat", "weight": 2000, "height": 20, "length": 35,
         "description": "Lives unknown"}
    ])
}

fn records() -> Vec<Value> {
    catalog().as_array().cloned().expect("catalog is an array")
}

/// Serve one page of the catalog in fixture order; sorting is not emulated
async fn mount_page(
    server: &MockServer,
    page: usize,
    limit: usize,
    sort: (&str, &str),
    times: u64,
) {
    let all = records();
    let slice: Vec<Value> = all.iter().skip((page - 1) * limit).take(limit).cloned().collect();
    Mock::given(method("GET"))
        .and(path("/pets"))
        .and(query_param("_page", page.to_string()))
        .and(query_param("_limit", limit.to_string()))
        .and(query_param("_sort", sort.0))
        .and(query_param("_order", sort.1))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(slice)
                .insert_header("X-Total-Count", all.len().to_string()),
        )
        .expect(times)
        .mount(server)
        .await;
}

async fn mount_all(server: &MockServer, body: Value, times: u64) {
    Mock::given(method("GET"))
        .and(path("/pets"))
        .and(query_param_is_missing("_page"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

async fn mount_pet(server: &MockServer, id: u64) {
    let pet = records()
        .into_iter()
        .find(|p| p["id"] == id)
        .expect("pet in catalog");
    Mock::given(method("GET"))
        .and(path(format!("/pets/{id}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(pet))
        .expect(1)
        .mount(server)
        .await;
}

fn cache_dir(home: &Path) -> PathBuf {
    home.join(".cache").join("fever-pets")
}

fn run_fever_pets(args: &[&str], home: &Path) -> (bool, Vec<u8>, Vec<u8>) {
    let bin = std::env::var("CARGO_BIN_EXE_fever-pets").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("fever-pets.exe");
        } else {
            path.push("fever-pets");
        }
        path.to_string_lossy().into_owned()
    });
    let output = Command::new(bin)
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .output()
        .expect("run fever-pets");
    (output.status.success(), output.stdout, output.stderr)
}

fn run_json(args: &[&str], home: &Path) -> Value {
    let (ok, stdout, stderr) = run_fever_pets(args, home);
    assert!(ok, "command failed: {}", String::from_utf8_lossy(&stderr));
    serde_json::from_slice(&stdout).expect("valid JSON output")
}

#[tokio::test]
async fn list_json_requests_first_page_sorted_by_name() {
    let api = MockServer::start().await;
    mount_page(&api, 1, 2, ("name", "asc"), 1).await;
    let home = tempfile::tempdir().expect("temp home");

    let json = run_json(
        &["list", "--json", "--api-url", &api.uri(), "--page-size", "2"],
        home.path(),
    );

    assert_eq!(json["page"], 1);
    assert_eq!(json["page_size"], 2);
    assert_eq!(json["total_count"], 6);
    assert_eq!(json["total_pages"], 3);
    assert_eq!(json["sort"]["key"], "name");
    assert_eq!(json["sort"]["direction"], "asc");
    assert_eq!(json["pets"].as_array().expect("pets").len(), 2);
    assert_eq!(json["pets"][0]["health"], "healthy");
    assert!(json.get("pet_of_the_day").is_none());
    assert!(cache_dir(home.path()).join("filters.json").exists());
}

#[tokio::test]
async fn filters_persist_between_runs_until_reset() {
    let api = MockServer::start().await;
    mount_page(&api, 1, 2, ("weight", "desc"), 1).await;
    mount_page(&api, 2, 2, ("weight", "desc"), 1).await;
    mount_page(&api, 1, 2, ("name", "asc"), 1).await;
    let home = tempfile::tempdir().expect("temp home");
    let uri = api.uri();
    let base = ["--json", "--api-url", uri.as_str(), "--page-size", "2"];

    let args: Vec<&str> = ["list", "--sort", "weight", "--order", "desc"]
        .into_iter()
        .chain(base)
        .collect();
    let json = run_json(&args, home.path());
    assert_eq!(json["sort"]["key"], "weight");
    assert_eq!(json["page"], 1);

    let args: Vec<&str> = ["list", "--next"].into_iter().chain(base).collect();
    let json = run_json(&args, home.path());
    assert_eq!(json["page"], 2);
    assert_eq!(json["sort"]["key"], "weight");
    assert_eq!(json["sort"]["direction"], "desc");

    let json = run_json(&["reset", "--json"], home.path());
    assert_eq!(json["page"], 1);
    assert_eq!(json["sort"]["key"], "name");

    let args: Vec<&str> = std::iter::once("list").chain(base).collect();
    let json = run_json(&args, home.path());
    assert_eq!(json["page"], 1);
    assert_eq!(json["sort"]["key"], "name");
}

#[tokio::test]
async fn next_past_the_end_stays_on_last_page() {
    let api = MockServer::start().await;
    mount_page(&api, 2, 4, ("name", "asc"), 2).await;
    mount_page(&api, 3, 4, ("name", "asc"), 1).await;
    let home = tempfile::tempdir().expect("temp home");

    let json = run_json(
        &["list", "--json", "--api-url", &api.uri(), "--page-size", "4", "--page", "2"],
        home.path(),
    );
    assert_eq!(json["page"], 2);

    let json = run_json(
        &["list", "--json", "--api-url", &api.uri(), "--page-size", "4", "--next"],
        home.path(),
    );
    assert_eq!(json["page"], 2);
    assert_eq!(json["total_pages"], 2);
}

#[tokio::test]
async fn show_json_includes_health() {
    let api = MockServer::start().await;
    mount_pet(&api, 3).await;
    let home = tempfile::tempdir().expect("temp home");

    let json = run_json(&["show", "3", "--json", "--api-url", &api.uri()], home.path());
    assert_eq!(json["id"], 3);
    assert_eq!(json["name"], "Milo");
    assert_eq!(json["number_of_lives"], 1);
    assert_eq!(json["health"], "unhealthy");
}

#[tokio::test]
async fn show_dog_has_no_photo_when_url_is_empty() {
    let api = MockServer::start().await;
    mount_pet(&api, 2).await;
    let home = tempfile::tempdir().expect("temp home");

    let json = run_json(&["show", "2", "--json", "--api-url", &api.uri()], home.path());
    assert_eq!(json["kind"], "dog");
    assert!(json.get("photo_url").is_none());
    assert!(json.get("number_of_lives").is_none());
}

#[tokio::test]
async fn show_unknown_pet_fails() {
    let api = MockServer::start().await;
    let home = tempfile::tempdir().expect("temp home");

    let (ok, stdout, stderr) =
        run_fever_pets(&["show", "99", "--api-url", &api.uri()], home.path());
    assert!(!ok);
    assert!(stdout.is_empty());
    let stderr = String::from_utf8_lossy(&stderr);
    assert!(stderr.contains("Pet 99 not found"), "stderr: {stderr}");
}

#[tokio::test]
async fn today_picks_by_date_and_skips_invalid_records() {
    let api = MockServer::start().await;
    mount_all(&api, catalog(), 1).await;
    let home = tempfile::tempdir().expect("temp home");

    let (ok, stdout, stderr) = run_fever_pets(
        &["today", "--date", "2025-01-01", "--json", "--api-url", &api.uri()],
        home.path(),
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let json: Value = serde_json::from_slice(&stdout).expect("valid JSON output");

    // 2025 + 1 + 1 = 2027, 2027 mod 5 valid pets = 2
    assert_eq!(json["date"], "2025-01-01");
    assert_eq!(json["pet"]["id"], 3);
    assert!(String::from_utf8_lossy(&stderr).contains("skipping invalid record"));

    let cached: Value = serde_json::from_str(
        &fs::read_to_string(cache_dir(home.path()).join("pet-of-the-day.json"))
            .expect("cache written"),
    )
    .expect("cache is JSON");
    assert_eq!(cached["date"], "2025-01-01");
    assert_eq!(cached["pet"]["id"], 3);
}

#[tokio::test]
async fn today_reuses_cached_pick_without_fetching() {
    let home = tempfile::tempdir().expect("temp home");
    let first = MockServer::start().await;
    mount_all(&first, catalog(), 1).await;
    run_json(
        &["today", "--date", "2025-01-01", "--json", "--api-url", &first.uri()],
        home.path(),
    );

    let second = MockServer::start().await;
    mount_all(&second, json!([]), 0).await;
    let json = run_json(
        &["today", "--date", "2025-01-01", "--json", "--api-url", &second.uri()],
        home.path(),
    );
    assert_eq!(json["pet"]["id"], 3);
}

#[tokio::test]
async fn today_with_empty_catalog_has_no_pet() {
    let api = MockServer::start().await;
    mount_all(&api, json!([]), 1).await;
    let home = tempfile::tempdir().expect("temp home");

    let json = run_json(
        &["today", "--date", "2025-01-01", "--json", "--api-url", &api.uri()],
        home.path(),
    );
    assert!(json["pet"].is_null());
    assert!(!cache_dir(home.path()).join("pet-of-the-day.json").exists());
}

#[tokio::test]
async fn corrupted_cache_is_replaced() {
    let api = MockServer::start().await;
    mount_all(&api, catalog(), 1).await;
    mount_page(&api, 1, 10, ("name", "asc"), 1).await;
    let home = tempfile::tempdir().expect("temp home");
    let cache = cache_dir(home.path());
    fs::create_dir_all(&cache).expect("create cache dir");
    fs::write(cache.join("pet-of-the-day.json"), "{not json").expect("write cache");
    fs::write(cache.join("filters.json"), "[]").expect("write filters");

    let json = run_json(
        &["today", "--date", "2025-01-04", "--json", "--api-url", &api.uri()],
        home.path(),
    );
    // 2025 + 1 + 4 = 2030, 2030 mod 5 = 0
    assert_eq!(json["pet"]["id"], 1);

    let json = run_json(&["list", "--json", "--api-url", &api.uri()], home.path());
    assert_eq!(json["page"], 1);
    assert_eq!(json["sort"]["key"], "name");
}

#[tokio::test]
async fn today_skips_record_missing_a_field() {
    let api = MockServer::start().await;
    let body = json!([
        {"id": 1, "name": "Luna", "kind": "cat", "weight": 4000, "height": 25, "length": 45,
         "number_of_lives": 7},
        {"id": 2, "name": "Rex", "kind": "dog", "weight": 12000, "length": 80},
        {"id": 4, "name": "Toby", "kind": "dog", "weight": 9000, "height": 40, "length": 70}
    ]);
    mount_all(&api, body, 1).await;
    let home = tempfile::tempdir().expect("temp home");

    let (ok, stdout, stderr) = run_fever_pets(
        &["today", "--date", "2025-01-01", "--json", "--api-url", &api.uri()],
        home.path(),
    );
    let stderr = String::from_utf8_lossy(&stderr);
    assert!(ok, "stderr: {stderr}");
    assert!(stderr.contains("skipping invalid record"), "stderr: {stderr}");
    assert!(stderr.contains("pet 2: malformed record"), "stderr: {stderr}");

    // 2027 mod 2 valid pets = 1
    let json: Value = serde_json::from_slice(&stdout).expect("valid JSON output");
    assert_eq!(json["pet"]["name"], "Toby");
}

#[tokio::test]
async fn transient_server_errors_are_retried() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pets"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&api)
        .await;
    mount_all(&api, catalog(), 1).await;
    let home = tempfile::tempdir().expect("temp home");

    let json = run_json(
        &["today", "--date", "2025-01-01", "--json", "--api-url", &api.uri()],
        home.path(),
    );
    assert_eq!(json["pet"]["id"], 3);
    let requests = api.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn persistent_server_errors_fail_after_three_attempts() {
    let api = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pets"))
        .respond_with(ResponseTemplate::new(503))
        .expect(3)
        .mount(&api)
        .await;
    let home = tempfile::tempdir().expect("temp home");

    let (ok, stdout, stderr) = run_fever_pets(
        &["today", "--date", "2025-01-01", "--json", "--api-url", &api.uri()],
        home.path(),
    );
    assert!(!ok);
    assert!(stdout.is_empty());
    let stderr = String::from_utf8_lossy(&stderr);
    assert!(stderr.contains("HTTP 503"), "stderr: {stderr}");
    assert!(!cache_dir(home.path()).join("pet-of-the-day.json").exists());
}

async fn mount_second_page_with_total(server: &MockServer, total: Option<&str>) {
    let slice: Vec<Value> = records().into_iter().skip(2).take(2).collect();
    let mut response = ResponseTemplate::new(200).set_body_json(slice);
    if let Some(total) = total {
        response = response.insert_header("X-Total-Count", total);
    }
    Mock::given(method("GET"))
        .and(path("/pets"))
        .and(query_param("_page", "2"))
        .and(query_param("_limit", "2"))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn missing_total_header_counts_records_seen() {
    for total in [None, Some("many")] {
        let api = MockServer::start().await;
        mount_second_page_with_total(&api, total).await;
        let home = tempfile::tempdir().expect("temp home");

        let json = run_json(
            &["list", "--json", "--api-url", &api.uri(), "--page-size", "2", "--page", "2"],
            home.path(),
        );
        assert_eq!(json["page"], 2, "total header {total:?}");
        assert_eq!(json["total_count"], 4, "total header {total:?}");
        assert_eq!(json["total_pages"], 2, "total header {total:?}");
        assert_eq!(json["pets"].as_array().expect("pets").len(), 2);
    }
}

#[tokio::test]
async fn featured_listing_includes_pet_of_the_day() {
    let api = MockServer::start().await;
    mount_page(&api, 1, 10, ("name", "asc"), 1).await;
    mount_all(&api, catalog(), 1).await;
    let home = tempfile::tempdir().expect("temp home");

    let json = run_json(
        &["list", "--featured", "--json", "--api-url", &api.uri(), "--timezone", "UTC"],
        home.path(),
    );
    assert!(json["pet_of_the_day"]["pet"]["id"].is_u64());
    assert!(json["pet_of_the_day"]["date"].is_string());
    assert_eq!(json["pets"].as_array().expect("pets").len(), 5);
}

#[tokio::test]
async fn table_output_in_spanish() {
    let api = MockServer::start().await;
    mount_page(&api, 1, 10, ("name", "asc"), 1).await;
    let home = tempfile::tempdir().expect("temp home");

    let (ok, stdout, stderr) = run_fever_pets(
        &["list", "--api-url", &api.uri(), "--lang", "es", "--no-color"],
        home.path(),
    );
    assert!(ok, "stderr: {}", String::from_utf8_lossy(&stderr));
    let stdout = String::from_utf8_lossy(&stdout);
    assert!(stdout.contains("Nuestras mascotas"), "stdout: {stdout}");
    assert!(stdout.contains("Luna"));
    assert!(stdout.contains("No saludable"));
}

#[test]
fn unsupported_language_is_rejected() {
    let home = tempfile::tempdir().expect("temp home");
    let (ok, _, stderr) = run_fever_pets(&["reset", "--lang", "fr"], home.path());
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("Unsupported language"));
}

#[test]
fn unreachable_api_reports_error() {
    let home = tempfile::tempdir().expect("temp home");
    let (ok, _, stderr) = run_fever_pets(
        &["show", "1", "--api-url", "http://127.0.0.1:9"],
        home.path(),
    );
    assert!(!ok);
    assert!(String::from_utf8_lossy(&stderr).contains("Error:"));
}

#[test]
fn help_lists_commands() {
    let home = tempfile::tempdir().expect("temp home");
    let (ok, stdout, _) = run_fever_pets(&["--help"], home.path());
    assert!(ok);
    let stdout = String::from_utf8_lossy(&stdout);
    for command in ["list", "show", "today", "reset"] {
        assert!(stdout.contains(command), "missing {command} in help");
    }
}
