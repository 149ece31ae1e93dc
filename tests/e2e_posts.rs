use axum::http::{Method, StatusCode};
use bloglist_api::{
    application::services::ServiceOptions,
    domain::{
        account::{AccountId, AccountRepository, UsernameMatching},
        post::{
            AuthorName, Likes, NewPost, PostContent, PostReadRepository, PostTitle, PostUrl,
            PostWriteRepository,
        },
    },
};
use serde_json::{Value, json};

mod support;

use support::blog;

fn six_blogs() -> Vec<Value> {
    vec![
        blog("React patterns", "Michael Chan", 7),
        blog("Go To Statement Considered Harmful", "Edsger W. Dijkstra", 5),
        blog("Canonical string reduction", "Edsger W. Dijkstra", 12),
        blog("First class tests", "Robert C. Martin", 10),
        blog("TDD harms architecture", "Robert C. Martin", 0),
        blog("Type wars", "Robert C. Martin", 2),
    ]
}

/// likes を省略して作成すると 0 になり、作成者が所有者として設定される
#[tokio::test]
async fn e2e_create_defaults_likes_and_stamps_owner() {
    let app = support::test_app();
    let token = app.signed_in("root").await;

    let response = app
        .create_post(
            &token,
            json!({
                "title": "React rocks",
                "author": "Cem Yeniceli",
                "url": "https://x.example",
                "user": 12345
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{}", response.text);
    let post = response.json();
    assert_eq!(post["likes"], 0);
    assert_eq!(post["user"]["username"], "root");

    let users = app.request(Method::GET, "/api/users", None, None).await.json();
    assert_eq!(users[0]["posts"][0]["title"], "React rocks");

    let account = app
        .accounts
        .find_by_id(AccountId(users[0]["id"].as_i64().unwrap()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(account.owned_post_ids.len(), 1);
}

/// タイトルが短すぎる場合は 400 を返し、何も保存されない
#[tokio::test]
async fn e2e_short_title_persists_nothing() {
    let app = support::test_app();
    let token = app.signed_in("root").await;

    let response = app
        .create_post(
            &token,
            json!({ "title": "Re", "author": "Michael Chan", "url": "https://x.example" }),
        )
        .await;

    response.assert_error(StatusCode::BAD_REQUEST, "validation_error");
    assert_eq!(response.json()["violations"][0]["field"], "title");
    assert_eq!(app.posts.count().await.unwrap(), 0);
}

/// 同じタイトルの投稿は作成・置換のどちらでも 400 になる
#[tokio::test]
async fn e2e_duplicate_title_is_validation_error() {
    let app = support::test_app();
    let alice = app.signed_in("alice").await;
    let bob = app.signed_in("bob").await;
    app.create_post(&alice, blog("React patterns", "Michael Chan", 7)).await;

    app.create_post(&bob, blog("React patterns", "Someone Else", 1))
        .await
        .assert_error(StatusCode::BAD_REQUEST, "validation_error");
    assert_eq!(app.posts.count().await.unwrap(), 1);

    let id = app
        .create_post(&bob, blog("Type wars", "Robert C. Martin", 2))
        .await
        .json()["id"]
        .as_i64()
        .unwrap();
    let response = app
        .request(
            Method::PUT,
            &format!("/api/blogs/{id}"),
            Some(&bob),
            Some(blog("React patterns", "Robert C. Martin", 2)),
        )
        .await;

    response.assert_error(StatusCode::BAD_REQUEST, "validation_error");
    assert_eq!(response.json()["message"], "title must be unique");
}

#[tokio::test]
async fn e2e_missing_fields_are_all_reported() {
    let app = support::test_app();
    let token = app.signed_in("root").await;

    let response = app.create_post(&token, json!({ "likes": 3 })).await;

    response.assert_error(StatusCode::BAD_REQUEST, "validation_error");
    assert_eq!(response.json()["violations"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn e2e_list_and_get_resolve_owner_projection() {
    let app = support::test_app();
    let token = app.signed_in("root").await;
    let created = app
        .create_post(&token, blog("React patterns", "Michael Chan", 7))
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    let listed = app.request(Method::GET, "/api/blogs", None, None).await.json();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["user"]["username"], "root");
    assert!(listed[0]["user"].get("password_hash").is_none());

    let fetched = app
        .request(Method::GET, &format!("/api/blogs/{id}"), None, None)
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json()["title"], "React patterns");
}

#[tokio::test]
async fn e2e_post_with_missing_owner_reads_as_unknown() {
    let app = support::test_app();
    let orphan = app
        .posts
        .insert(NewPost {
            content: PostContent {
                title: PostTitle::new("Orphaned post").unwrap(),
                author: AuthorName::new("Nobody Known").unwrap(),
                url: PostUrl::new("https://gone.example").unwrap(),
                likes: Likes::new(1).unwrap(),
            },
            owner_id: AccountId(77),
        })
        .await
        .unwrap();

    let fetched = app
        .request(Method::GET, &format!("/api/blogs/{}", orphan.id), None, None)
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.json()["user"], "unknown");

    let listed = app.request(Method::GET, "/api/blogs", None, None).await.json();
    assert_eq!(listed[0]["user"], "unknown");
}

#[tokio::test]
async fn e2e_get_post_errors() {
    let app = support::test_app();

    app.request(Method::GET, "/api/blogs/31337", None, None)
        .await
        .assert_error(StatusCode::NOT_FOUND, "not_found");
    app.request(Method::GET, "/api/blogs/5a3d5da59070081a82a3445", None, None)
        .await
        .assert_error(StatusCode::BAD_REQUEST, "malformed_identifier");
}

/// 所有者以外の削除は 403、所有者の削除は 204 で、その後は取得できない
#[tokio::test]
async fn e2e_only_owner_may_delete() {
    let app = support::test_app();
    let owner = app.signed_in("alice").await;
    let other = app.signed_in("bob").await;
    let id = app
        .create_post(&owner, blog("First class tests", "Robert C. Martin", 10))
        .await
        .json()["id"]
        .as_i64()
        .unwrap();
    let uri = format!("/api/blogs/{id}");

    app.request(Method::DELETE, &uri, Some(&other), None)
        .await
        .assert_error(StatusCode::FORBIDDEN, "forbidden");
    app.request(Method::DELETE, &uri, None, None)
        .await
        .assert_error(StatusCode::FORBIDDEN, "forbidden");

    let deleted = app.request(Method::DELETE, &uri, Some(&owner), None).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert!(deleted.text.is_empty());

    app.request(Method::GET, &uri, None, None)
        .await
        .assert_error(StatusCode::NOT_FOUND, "not_found");
}

#[tokio::test]
async fn e2e_delete_missing_post_is_not_found_for_anyone() {
    let app = support::test_app();
    let token = app.signed_in("alice").await;

    for token in [Some(token.as_str()), None] {
        app.request(Method::DELETE, "/api/blogs/4040", token, None)
            .await
            .assert_error(StatusCode::NOT_FOUND, "not_found");
    }
    app.request(Method::DELETE, "/api/blogs/abc", None, None)
        .await
        .assert_error(StatusCode::BAD_REQUEST, "malformed_identifier");
}

#[tokio::test]
async fn e2e_replace_is_full_and_keeps_owner() {
    let app = support::test_app();
    let owner = app.signed_in("alice").await;
    let other = app.signed_in("bob").await;
    let id = app
        .create_post(&owner, blog("Type wars", "Robert C. Martin", 2))
        .await
        .json()["id"]
        .as_i64()
        .unwrap();
    let uri = format!("/api/blogs/{id}");

    // ungated by default: any caller may replace
    let replaced = app
        .request(
            Method::PUT,
            &uri,
            Some(&other),
            Some(json!({
                "title": "Type wars, revisited",
                "author": "Robert C. Martin",
                "url": "http://blog.cleancoder.com/",
                "likes": 9
            })),
        )
        .await;
    assert_eq!(replaced.status, StatusCode::OK, "{}", replaced.text);
    let body = replaced.json();
    assert_eq!(body["likes"], 9);
    assert_eq!(body["title"], "Type wars, revisited");
    assert_eq!(body["user"]["username"], "alice");
}

#[tokio::test]
async fn e2e_replace_requires_every_field() {
    let app = support::test_app();
    let token = app.signed_in("alice").await;
    let id = app
        .create_post(&token, blog("Type wars", "Robert C. Martin", 2))
        .await
        .json()["id"]
        .as_i64()
        .unwrap();

    let response = app
        .request(
            Method::PUT,
            &format!("/api/blogs/{id}"),
            Some(&token),
            Some(json!({
                "title": "Type wars",
                "author": "Robert C. Martin",
                "url": "http://x.example",
            })),
        )
        .await;

    response.assert_error(StatusCode::BAD_REQUEST, "validation_error");
    assert_eq!(response.json()["violations"][0]["field"], "likes");

    app.request(
        Method::PUT,
        "/api/blogs/8080",
        Some(&token),
        Some(blog("Anything at all", "Someone Else", 1)),
    )
    .await
    .assert_error(StatusCode::NOT_FOUND, "not_found");
}

#[tokio::test]
async fn e2e_owner_gated_replace_denies_other_accounts() {
    let app = support::test_app_with(
        UsernameMatching::CaseSensitive,
        ServiceOptions {
            owner_gated_updates: true,
        },
    );
    let owner = app.signed_in("alice").await;
    let other = app.signed_in("bob").await;
    let id = app
        .create_post(&owner, blog("Type wars", "Robert C. Martin", 2))
        .await
        .json()["id"]
        .as_i64()
        .unwrap();
    let uri = format!("/api/blogs/{id}");
    let payload = blog("Type wars", "Robert C. Martin", 3);

    app.request(Method::PUT, &uri, Some(&other), Some(payload.clone()))
        .await
        .assert_error(StatusCode::FORBIDDEN, "forbidden");

    let ok = app.request(Method::PUT, &uri, Some(&owner), Some(payload)).await;
    assert_eq!(ok.status, StatusCode::OK);
}

/// 統計エンドポイントが合計いいね数・お気に入り・最多投稿者・最多いいね著者を返す
#[tokio::test]
async fn e2e_statistics_over_six_blogs() {
    let app = support::test_app();
    let token = app.signed_in("root").await;
    for payload in six_blogs() {
        assert_eq!(app.create_post(&token, payload).await.status, StatusCode::OK);
    }

    let stats = app.request(Method::GET, "/api/blogs/stats", None, None).await;
    assert_eq!(stats.status, StatusCode::OK);
    let body = stats.json();

    assert_eq!(body["total_likes"], 36);
    assert_eq!(body["favorite_post"]["title"], "Canonical string reduction");
    assert_eq!(body["most_posts"], json!({ "author": "Robert C. Martin", "posts": 3 }));
    assert_eq!(body["most_likes"], json!({ "author": "Edsger W. Dijkstra", "likes": 17 }));
}

#[tokio::test]
async fn e2e_statistics_of_empty_collection() {
    let app = support::test_app();

    let body = app.request(Method::GET, "/api/blogs/stats", None, None).await.json();

    assert_eq!(body["total_likes"], 0);
    assert!(body["favorite_post"].is_null());
    assert!(body["most_posts"].is_null());
    assert!(body["most_likes"].is_null());
}

/// 巨大ないいね数でも統計は飽和して 200 を返す
#[tokio::test]
async fn e2e_statistics_saturate_on_huge_like_counts() {
    let app = support::test_app();
    let token = app.signed_in("root").await;
    for title in ["Viral post", "Another viral post"] {
        let response = app
            .create_post(&token, blog(title, "Robert C. Martin", i64::MAX))
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let stats = app.request(Method::GET, "/api/blogs/stats", None, None).await;

    assert_eq!(stats.status, StatusCode::OK);
    let body = stats.json();
    assert_eq!(body["total_likes"], i64::MAX);
    assert_eq!(
        body["most_likes"],
        json!({ "author": "Robert C. Martin", "likes": i64::MAX })
    );
}

#[tokio::test]
async fn e2e_info_page_reports_count() {
    let app = support::test_app();
    let token = app.signed_in("root").await;
    for payload in six_blogs().into_iter().take(2) {
        app.create_post(&token, payload).await;
    }

    let info = app.request(Method::GET, "/api/blogs/info", None, None).await;

    assert_eq!(info.status, StatusCode::OK);
    assert!(info.content_type.starts_with("text/html"));
    assert!(info.text.contains("info for 2 blogs"));
    assert!(info.text.contains("15 Mar 2024"));
}
