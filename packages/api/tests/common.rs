//! Drives the full application in-process, session layer included.

#![allow(dead_code)]

use api::SessionConfig;
use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use store::SqlitePool;
use tokio::task::JoinHandle;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    session_cleanup: JoinHandle<()>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_sessions(SessionConfig::default()).await
    }

    pub async fn with_sessions(config: SessionConfig) -> Self {
        let pool = store::connect_in_memory().await.unwrap();
        let app = api::app(pool.clone(), &config).await.unwrap();
        Self {
            router: app.router,
            pool,
            session_cleanup: app.session_cleanup,
        }
    }

    /// Rows currently in the session table, expired or not.
    pub async fn session_rows(&self) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tower_sessions")
            .fetch_one(&self.pool)
            .await
            .unwrap();
        count
    }

    pub async fn get(&self, path: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::builder().method("GET").uri(path);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.send(request.body(Body::empty()).unwrap()).await
    }

    pub async fn post_form(&self, path: &str, body: &str, cookie: Option<&str>) -> Response<Body> {
        let mut request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }
        self.send(request.body(Body::from(body.to_string())).unwrap())
            .await
    }

    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn register(&self, username: &str, password: &str) -> Response<Body> {
        self.post_form(
            "/app/register",
            &format!("username={username}&password={password}"),
            None,
        )
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> Response<Body> {
        self.post_form(
            "/app/login",
            &format!("username={username}&password={password}"),
            None,
        )
        .await
    }

    /// Register and log in, returning the session cookie.
    pub async fn sign_up(&self, username: &str, password: &str) -> String {
        let response = self.register(username, password).await;
        assert_redirect(&response, "/app/login");
        let response = self.login(username, password).await;
        assert_redirect(&response, "/app/");
        session_cookie(&response).expect("login sets a session cookie")
    }

    pub async fn add_note(&self, cookie: &str, content: &str) -> Response<Body> {
        let body = format!("content={}", content.replace(' ', "+"));
        self.post_form("/app/notes/add", &body, Some(cookie)).await
    }

    pub async fn user_id(&self, username: &str) -> i64 {
        store::User::find_by_username(&self.pool, username)
            .await
            .unwrap()
            .unwrap()
            .id
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.session_cleanup.abort();
    }
}

/// `name=value` part of the `Set-Cookie` header, if any.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    let value = response.headers().get(header::SET_COOKIE)?.to_str().ok()?;
    value.split(';').next().map(|pair| pair.trim().to_string())
}

pub fn assert_redirect(response: &Response<Body>, location: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap().to_str().unwrap(),
        location
    );
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
