use api_client::ApiClient;
use axum::{
    extract::State,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderMap, HeaderName, StatusCode,
    },
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Secret used to sign test tokens. The dashboard never verifies signatures.
const TEST_SECRET: &str = "test-secret";

/// One request as seen by the mock API.
#[derive(Debug, Clone, PartialEq)]
pub struct SeenRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
}

#[derive(Clone)]
struct MockState {
    token: String,
    failures: Arc<HashMap<String, StatusCode>>,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl MockState {
    fn respond(&self, path: &str, headers: &HeaderMap, body: Value) -> Response {
        let header = |name: HeaderName| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let authorization = header(AUTHORIZATION);
        self.seen.lock().unwrap().push(SeenRequest {
            path: path.to_string(),
            authorization: authorization.clone(),
            content_type: header(CONTENT_TYPE),
        });

        if let Some(status) = self.failures.get(path) {
            let body = json!({ "kind": "InternalError", "message": format!("{path} is down") });
            return (*status, Json(body)).into_response();
        }

        if authorization.as_deref() != Some(format!("Bearer {}", self.token).as_str()) {
            let body = json!({ "kind": "Unauthorized", "message": "invalid or missing token" });
            return (StatusCode::UNAUTHORIZED, Json(body)).into_response();
        }

        Json(body).into_response()
    }
}

/// A mock of the downloads API listening on an ephemeral local port.
pub struct MockApi {
    pub base_url: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl MockApi {
    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url)
    }

    pub fn seen(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

/// Start a mock API that accepts `token` and answers every path in
/// `failures` with the paired status.
pub async fn spawn_mock_api(token: &str, failures: &[(&str, StatusCode)]) -> MockApi {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        token: token.to_string(),
        failures: Arc::new(
            failures
                .iter()
                .map(|(path, status)| (path.to_string(), *status))
                .collect(),
        ),
        seen: seen.clone(),
    };

    let router = Router::new()
        .route(
            "/admin/stats",
            get(|State(s): State<MockState>, h: HeaderMap| async move {
                s.respond("/admin/stats", &h, sample_stats())
            }),
        )
        .route(
            "/admin/users",
            get(|State(s): State<MockState>, h: HeaderMap| async move {
                s.respond("/admin/users", &h, sample_users())
            }),
        )
        .route(
            "/dashboard/stats",
            get(|State(s): State<MockState>, h: HeaderMap| async move {
                s.respond("/dashboard/stats", &h, sample_stats())
            }),
        )
        .route(
            "/dashboard/users",
            get(|State(s): State<MockState>, h: HeaderMap| async move {
                s.respond("/dashboard/users", &h, sample_users())
            }),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock API");
    let addr = listener.local_addr().expect("Failed to read mock API address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Mock API stopped");
    });

    MockApi {
        base_url: format!("http://{addr}"),
        seen,
    }
}

pub fn sample_stats() -> Value {
    json!({
        "system": { "total_users": 6, "total_downloads": 120, "active_users": 3 },
        "recent_activity": { "downloads_last_7_days": 14, "new_users_today": 1 }
    })
}

/// Seven users; ids 2, 3 and 5 look like admin accounts and id 7 has
/// nulls where strings and counters are expected.
pub fn sample_users() -> Value {
    json!([
        { "id": 1, "username": "alice", "email": "alice@example.com",
          "created_at": "2024-01-15T09:30:00Z", "total_downloads": 10 },
        { "id": 2, "username": "root", "email": "root@example.com",
          "created_at": "2023-12-01T00:00:00Z", "role": "admin" },
        { "id": 3, "username": "SuperAdmin", "email": "ops@example.com",
          "created_at": "2023-12-02" },
        { "id": 4, "username": "bob", "email": "bob@example.com",
          "created_at": "2024-02-20T14:00:00Z", "stats": { "download_count": 7 } },
        { "id": 5, "username": "carol", "email": "carol@example.com",
          "created_at": "2024-03-01T10:00:00Z", "sub": "admin" },
        { "id": 6, "username": "dave", "email": "dave@example.com",
          "created_at": "2024-03-05T10:00:00Z", "downloads": 3, "plan": "free" },
        { "id": 7, "username": "erin", "email": null,
          "created_at": null, "total_downloads": null }
    ])
}

/// Sign `claims` as an HS256 JWT.
pub fn mint_token(claims: &Value) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("Failed to create test JWT")
}

/// A token for the built-in administrator.
pub fn admin_token() -> String {
    mint_token(&json!({ "sub": "admin", "username": "root", "email": "root@example.com", "role": "admin" }))
}

/// A token for a regular user.
pub fn user_token() -> String {
    mint_token(&json!({ "sub": "alice", "role": "user", "username": "alice", "email": "alice@example.com" }))
}
