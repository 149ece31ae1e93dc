// tests/support/helpers.rs
use std::sync::Arc;

use axum::{
    Router,
    body::{self, Body},
    http::{HeaderValue, Method, Request, StatusCode, header},
};
use bloglist_api::{
    application::{
        ports::security::TokenManager,
        services::{ApplicationServices, ServiceOptions},
    },
    domain::account::{AccountId, UsernameMatching},
    infrastructure::{
        repositories::{InMemoryAccountRepository, InMemoryPostRepository},
        security::token::BiscuitTokenManager,
    },
    presentation::http::{routes::build_router, state::HttpState},
};
use serde_json::{Value, json};
use tower::util::ServiceExt as _;

use super::mocks::{FixedClock, PlainPasswordHasher};

pub struct TestApp {
    pub router: Router,
    pub accounts: Arc<InMemoryAccountRepository>,
    pub posts: Arc<InMemoryPostRepository>,
    pub tokens: Arc<BiscuitTokenManager>,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: String,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text)
            .unwrap_or_else(|err| panic!("expected json body ({err}): {}", self.text))
    }

    /// Asserts the status and the `error` category of an error body.
    pub fn assert_error(&self, status: StatusCode, category: &str) {
        assert_eq!(self.status, status, "body: {}", self.text);
        assert!(
            self.content_type.starts_with("application/json"),
            "unexpected content-type: {}",
            self.content_type
        );
        let body = self.json();
        assert_eq!(body["error"], category, "body: {}", self.text);
        assert!(
            body["message"].as_str().is_some_and(|m| !m.is_empty()),
            "expected a message: {}",
            self.text
        );
    }
}

pub fn test_app() -> TestApp {
    test_app_with(UsernameMatching::CaseSensitive, ServiceOptions::default())
}

pub fn test_app_with(matching: UsernameMatching, options: ServiceOptions) -> TestApp {
    let accounts = Arc::new(InMemoryAccountRepository::new(matching));
    let posts = Arc::new(InMemoryPostRepository::new());
    let tokens = Arc::new(BiscuitTokenManager::ephemeral(None));

    let services = Arc::new(ApplicationServices::new(
        accounts.clone(),
        posts.clone(),
        posts.clone(),
        Arc::new(PlainPasswordHasher),
        tokens.clone(),
        Arc::new(FixedClock::default()),
        options,
    ));

    let origins = [HeaderValue::from_static("http://localhost:3000")];
    let router = build_router(HttpState { services }, &origins);

    TestApp {
        router,
        accounts,
        posts,
        tokens,
    }
}

impl TestApp {
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };

        self.send(builder.body(body).unwrap()).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");

        TestResponse {
            status,
            content_type,
            text: String::from_utf8(bytes.to_vec()).expect("utf-8 body"),
        }
    }

    pub async fn register(&self, username: &str, password: &str) -> Value {
        let response = self
            .request(
                Method::POST,
                "/api/users",
                None,
                Some(json!({ "username": username, "name": "Test User", "password": password })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "body: {}", response.text);
        response.json()
    }

    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                Method::POST,
                "/api/login",
                None,
                Some(json!({ "username": username, "password": password })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "body: {}", response.text);
        response.json()["token"]
            .as_str()
            .expect("token in login response")
            .to_string()
    }

    /// Registers `username` and returns a bearer token for it.
    pub async fn signed_in(&self, username: &str) -> String {
        self.register(username, "sekret").await;
        self.login(username, "sekret").await
    }

    pub async fn create_post(&self, token: &str, payload: Value) -> TestResponse {
        self.request(Method::POST, "/api/blogs", Some(token), Some(payload))
            .await
    }

    /// Token for an account id that was never registered.
    pub async fn token_for_unknown_account(&self) -> String {
        self.tokens.issue(AccountId(9_999)).await.unwrap().token
    }
}

pub fn blog(title: &str, author: &str, likes: i64) -> Value {
    json!({
        "title": title,
        "author": author,
        "url": format!("https://blogs.example.com/{}", title.len()),
        "likes": likes,
    })
}
