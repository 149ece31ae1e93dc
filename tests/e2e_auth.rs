use axum::{
    body::Body,
    http::{Method, Request, StatusCode, header::AUTHORIZATION},
};
use bloglist_api::{
    application::ports::security::TokenManager, domain::account::AccountId,
    infrastructure::security::token::BiscuitTokenManager,
};

mod support;

/// 不正なトークンは公開エンドポイントでも 401 で処理を中断する
#[tokio::test]
async fn e2e_garbage_token_aborts_request() {
    let app = support::test_app();

    app.request(Method::GET, "/api/blogs", Some("garbage"), None)
        .await
        .assert_error(StatusCode::UNAUTHORIZED, "invalid_token");
}

#[tokio::test]
async fn e2e_token_signed_with_another_key_is_rejected() {
    let app = support::test_app();
    app.register("root", "sekret").await;
    let forged = BiscuitTokenManager::ephemeral(None)
        .issue(AccountId(1))
        .await
        .unwrap()
        .token;

    app.create_post(&forged, support::blog("React patterns", "Michael Chan", 7))
        .await
        .assert_error(StatusCode::UNAUTHORIZED, "invalid_token");
}

#[tokio::test]
async fn e2e_non_bearer_scheme_is_rejected() {
    let app = support::test_app();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/blogs")
        .header(AUTHORIZATION, "Basic cm9vdDpzZWtyZXQ=")
        .body(Body::empty())
        .unwrap();

    app.send(request)
        .await
        .assert_error(StatusCode::UNAUTHORIZED, "invalid_token");
}

#[tokio::test]
async fn e2e_lowercase_bearer_scheme_is_accepted() {
    let app = support::test_app();
    let token = app.signed_in("root").await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/blogs")
        .header(AUTHORIZATION, format!("bearer {token}"))
        .header("content-type", "application/json")
        .body(Body::from(
            support::blog("React patterns", "Michael Chan", 7).to_string(),
        ))
        .unwrap();

    assert_eq!(app.send(request).await.status, StatusCode::OK);
}

/// 削除済み (存在しない) アカウントの有効なトークンは「識別なし」として扱う
#[tokio::test]
async fn e2e_valid_token_for_missing_account_is_no_identity() {
    let app = support::test_app();
    let token = app.token_for_unknown_account().await;

    let read = app.request(Method::GET, "/api/blogs", Some(&token), None).await;
    assert_eq!(read.status, StatusCode::OK);

    app.create_post(&token, support::blog("React patterns", "Michael Chan", 7))
        .await
        .assert_error(StatusCode::UNAUTHORIZED, "invalid_token");
}

#[tokio::test]
async fn e2e_create_without_token_is_unauthorized() {
    let app = support::test_app();

    app.request(
        Method::POST,
        "/api/blogs",
        None,
        Some(support::blog("React patterns", "Michael Chan", 7)),
    )
    .await
    .assert_error(StatusCode::UNAUTHORIZED, "invalid_token");
}

#[tokio::test]
async fn e2e_health_and_unknown_endpoint() {
    let app = support::test_app();

    let health = app.request(Method::GET, "/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.json()["status"], "ok");

    app.request(Method::GET, "/api/nothing-here", None, None)
        .await
        .assert_error(StatusCode::NOT_FOUND, "not_found");
}
