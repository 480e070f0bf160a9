//! CLI integration tests against a mock backend.
//!
//! Each test runs the compiled binary in a throwaway HOME so token storage
//! is isolated, with `AFYA_SERVER_URL` pointing at a wiremock server.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CLIENT_UUID: &str = "7bb4a3e0-5a9f-4f7e-9d2a-1c6b8e4f0a11";
const PROGRAM_UUID: &str = "f1e2d3c4-b5a6-4789-8abc-def012345678";

/// Run the CLI binary with an isolated home and a server URL.
fn run_cli_with_env(args: &[&str], home: &Path, server_url: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_afya"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env("AFYA_SERVER_URL", server_url);
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
fn run_cli_with_env_success(args: &[&str], home: &Path, server_url: &str) -> String {
    let output = run_cli_with_env(args, home, server_url);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Mount the sign-in and profile endpoints for the standard test account.
async fn mount_sign_in(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access": "access-1",
            "refresh": "refresh-1"
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/auth/me/"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "email": "admin@example.com",
            "name": "Admin User"
        })))
        .mount(server)
        .await;
}

/// Sign in through the binary so later invocations find stored tokens.
async fn sign_in(server: &MockServer, home: &Path) {
    mount_sign_in(server).await;
    run_cli_with_env_success(
        &[
            "auth",
            "login",
            "--email",
            "admin@example.com",
            "--password",
            "secret",
        ],
        home,
        &server.uri(),
    );
}

fn client_body(uuid: &str) -> serde_json::Value {
    json!({
        "uuid": uuid,
        "first_name": "Jane",
        "last_name": "Doe",
        "dob": "2000-01-15",
        "phone_number": "+254700000000",
        "county": "Nairobi",
        "sub_county": "Westlands",
        "gender": "female",
        "age": 26,
        "programs": [],
        "created_at": "2026-02-10T08:30:00Z",
        "created_by": "admin@example.com"
    })
}

fn program_body(uuid: &str, description: &str) -> serde_json::Value {
    json!({
        "uuid": uuid,
        "name": "Malaria Prevention",
        "description": description,
        "status": "active",
        "created_at": "2026-02-10T08:30:00Z",
        "created_by": "admin@example.com",
        "total_enrolled_clients": null,
        "clients": null
    })
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_login_persists_tokens_and_whoami_reads_them() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    mount_sign_in(&server).await;

    let stdout = run_cli_with_env_success(
        &[
            "auth",
            "login",
            "--email",
            "admin@example.com",
            "--password",
            "secret",
        ],
        home.path(),
        &server.uri(),
    );
    assert!(stdout.contains("Signed in successfully"));
    assert!(stdout.contains("admin@example.com"));

    // A separate invocation reads the persisted tokens
    let stdout = run_cli_with_env_success(&["auth", "whoami"], home.path(), &server.uri());
    assert!(stdout.contains("Admin User"));
    assert!(stdout.contains("admin@example.com"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_login_with_bad_credentials_fails() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "detail": "No active account found with the given credentials"
        })))
        .mount(&server)
        .await;

    let output = run_cli_with_env(
        &[
            "auth",
            "login",
            "--email",
            "wrong@example.com",
            "--password",
            "bad",
        ],
        home.path(),
        &server.uri(),
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to sign in"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_login_rejects_blank_email() {
    let home = TempDir::new().unwrap();

    // Validation fires before any connection is attempted
    let output = run_cli_with_env(
        &["auth", "login", "--email", "   ", "--password", "secret"],
        home.path(),
        "http://127.0.0.1:9",
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("email"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_register_account_joins_the_name() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/register/"))
        .and(body_json(json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "password": "pw123456"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "email": "jane@example.com" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_with_env_success(
        &[
            "auth",
            "register",
            "--first-name",
            "Jane",
            "--last-name",
            "Doe",
            "--email",
            "jane@example.com",
            "--password",
            "pw123456",
        ],
        home.path(),
        &server.uri(),
    );

    assert!(stdout.contains("Account registered"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_logout_clears_the_session() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    sign_in(&server, home.path()).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/logout/"))
        .and(header("authorization", "Bearer access-1"))
        .and(body_json(json!({ "refresh": "refresh-1" })))
        .respond_with(ResponseTemplate::new(205))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_with_env_success(&["auth", "logout"], home.path(), &server.uri());
    assert!(stdout.contains("Signed out"));

    // The stored tokens are gone
    let output = run_cli_with_env(&["auth", "whoami"], home.path(), &server.uri());
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not signed in"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_clients_list_requires_login() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    let output = run_cli_with_env(&["clients", "list"], home.path(), &server.uri());

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not signed in. Run 'afya auth login' first."));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_client_lifecycle() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    sign_in(&server, home.path()).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/clients/create/"))
        .and(header("authorization", "Bearer access-1"))
        .and(body_json(json!({
            "first_name": "Jane",
            "last_name": "Doe",
            "dob": "2000-01-15",
            "phone_number": "+254700000000",
            "county": "Nairobi",
            "sub_county": "Westlands",
            "gender": "female"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(client_body(CLIENT_UUID)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/clients/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([client_body(CLIENT_UUID)])))
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(format!("/api/v1/clients/{}/", CLIENT_UUID)))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_with_env_success(
        &[
            "clients",
            "register",
            "--first-name",
            "Jane",
            "--last-name",
            "Doe",
            "--dob",
            "2000-01-15",
            "--phone-number",
            "+254700000000",
            "--county",
            "Nairobi",
            "--sub-county",
            "Westlands",
            "--gender",
            "female",
        ],
        home.path(),
        &server.uri(),
    );
    assert!(stdout.contains("Client registered"));
    assert!(stdout.contains(CLIENT_UUID));
    assert!(stdout.contains("Jane Doe"));

    let stdout = run_cli_with_env_success(&["clients", "list"], home.path(), &server.uri());
    assert!(stdout.contains("Jane"));
    assert!(stdout.contains(CLIENT_UUID));

    let stdout = run_cli_with_env_success(
        &["clients", "delete", CLIENT_UUID],
        home.path(),
        &server.uri(),
    );
    assert!(stdout.contains("Client deleted"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_program_create_and_update() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    sign_in(&server, home.path()).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/programs/create/"))
        .and(body_json(json!({
            "name": "Malaria Prevention",
            "description": "Bed nets and prophylaxis"
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(program_body(PROGRAM_UUID, "Bed nets and prophylaxis")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PATCH"))
        .and(path(format!("/api/v1/programs/{}/update/", PROGRAM_UUID)))
        .and(body_json(json!({ "description": "Updated scope" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(program_body(PROGRAM_UUID, "Updated scope")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_with_env_success(
        &[
            "programs",
            "create",
            "--name",
            "Malaria Prevention",
            "--description",
            "Bed nets and prophylaxis",
        ],
        home.path(),
        &server.uri(),
    );
    assert!(stdout.contains("Program created"));
    assert!(stdout.contains(PROGRAM_UUID));

    let stdout = run_cli_with_env_success(
        &[
            "programs",
            "update",
            PROGRAM_UUID,
            "--description",
            "Updated scope",
        ],
        home.path(),
        &server.uri(),
    );
    assert!(stdout.contains("Program updated"));
    assert!(stdout.contains("Updated scope"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_enroll_links_client_and_program() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    sign_in(&server, home.path()).await;

    Mock::given(method("POST"))
        .and(path("/api/v1/enrollments/create/"))
        .and(body_json(json!({
            "client": CLIENT_UUID,
            "program": PROGRAM_UUID
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "uuid": "3f2b8c9d-0a1e-4f5b-8c7d-6e5f4a3b2c1d",
            "client": CLIENT_UUID,
            "program": PROGRAM_UUID,
            "status": "enrolled",
            "enrolled_at": "2026-02-11T10:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stdout = run_cli_with_env_success(
        &[
            "enroll",
            "--client",
            CLIENT_UUID,
            "--program",
            PROGRAM_UUID,
        ],
        home.path(),
        &server.uri(),
    );

    assert!(stdout.contains("Client enrolled"));
    assert!(stdout.contains("enrolled"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_analytics_overview_renders_counters() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    sign_in(&server, home.path()).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/analytics/total_clients/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_clients": 128,
            "growth_percentage": 12.5
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/analytics/active_programs/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "active_programs": 6,
            "growth_percentage": 0.0
        })))
        .mount(&server)
        .await;

    // This route alone has no trailing slash on the backend
    Mock::given(method("GET"))
        .and(path("/api/v1/analytics/enrollments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "enrollments": 3,
            "growth_percentage": -25.0
        })))
        .mount(&server)
        .await;

    let stdout =
        run_cli_with_env_success(&["analytics", "overview"], home.path(), &server.uri());

    assert!(stdout.contains("128 (+12.5%)"));
    assert!(stdout.contains("6 (+0.0%)"));
    assert!(stdout.contains("3 (-25.0%)"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_activity_feed_passes_filters() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    sign_in(&server, home.path()).await;

    Mock::given(method("GET"))
        .and(path("/api/v1/activities/"))
        .and(query_param("limit", "2"))
        .and(query_param("entity_type", "client"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [{
                "id": "act-1",
                "type": "registration",
                "title": "New client registered",
                "description": "Jane Doe was registered",
                "timestamp": "2026-02-11T09:00:00Z",
                "user": {
                    "uuid": "u-1",
                    "name": "Admin User",
                    "email": "admin@example.com",
                    "avatar": null
                },
                "entity_type": "client",
                "entity_uuid": CLIENT_UUID,
                "metadata": null
            }],
            "count": 5,
            "next": "http://backend/api/v1/activities/?page=2",
            "previous": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_cli_with_env(
        &["activity", "--limit", "2", "--entity-type", "client"],
        home.path(),
        &server.uri(),
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("New client registered"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Showing 1 of 5 entries."));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_server_flag_overrides_the_environment() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    mount_sign_in(&server).await;

    // The environment points at a dead address; the flag wins
    let flag = server.uri();
    let output = run_cli_with_env(
        &[
            "--server",
            &flag,
            "auth",
            "login",
            "--email",
            "admin@example.com",
            "--password",
            "secret",
        ],
        home.path(),
        "http://127.0.0.1:9",
    );

    assert!(
        output.status.success(),
        "Login failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Signed in successfully"));
}
