//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

/// Register a fresh user and return its tokens
async fn register(server: &TestServer) -> AuthResponse {
    let request = RegisterRequest::unique();
    let response = server.post("/api/v1/users/register", &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

/// Create a post as the given user and return it
async fn create_post(server: &TestServer, token: &str, request: &CreatePostRequest) -> PostResponse {
    let response = server.post_auth("/api/v1/posts", token, request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/users/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(auth.user.email, request.email);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/v1/users/register", &request).await.unwrap();

    // Second registration with same email
    let response = server.post("/api/v1/users/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_rejects_weak_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "alllowercase1".to_string();

    let response = server.post("/api/v1/users/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    server.post("/api/v1/users/register", &register_req).await.unwrap();

    // Login
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/v1/users/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.email, register_req.email);
    assert!(!auth.access_token.is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let register_req = RegisterRequest::unique();
    server.post("/api/v1/users/register", &register_req).await.unwrap();

    let mut login_req = LoginRequest::from_register(&register_req);
    login_req.password = "WrongPass123!".to_string();

    let response = server.post("/api/v1/users/login", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_rotates_tokens() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    // Rotate
    let response = server
        .post("/api/v1/users/token/refresh", &json!({"refresh": auth.refresh_token}))
        .await
        .unwrap();
    let rotated: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!rotated.refresh_token.is_empty());

    // The old refresh token is dead after rotation
    let response = server
        .post("/api/v1/users/token/refresh", &json!({"refresh": auth.refresh_token}))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_blacklists_refresh_token() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    // Logout succeeds with 205
    let response = server
        .post("/api/v1/users/logout", &json!({"refresh": auth.refresh_token}))
        .await
        .unwrap();
    assert_status(response, StatusCode::RESET_CONTENT).await.unwrap();

    // The same token is now invalid: logging out again is a client error
    let response = server
        .post("/api/v1/users/logout", &json!({"refresh": auth.refresh_token}))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    // And it can no longer be used to refresh
    let response = server
        .post("/api/v1/users/token/refresh", &json!({"refresh": auth.refresh_token}))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_garbage_token_is_bad_request() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/users/logout", &json!({"refresh": "not-a-token"}))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// User / Profile Tests
// ============================================================================

#[tokio::test]
async fn test_get_and_update_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server.get_auth("/api/v1/users/me", &auth.access_token).await.unwrap();
    let me: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.id, auth.user.id);

    let new_email = format!("changed{}@example.com", unique_suffix());
    let response = server
        .patch_auth("/api/v1/users/me", &auth.access_token, &json!({"email": new_email}))
        .await
        .unwrap();
    let me: CurrentUserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.email, new_email);
}

#[tokio::test]
async fn test_profile_update_and_counts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    // Profile exists immediately after registration
    let response = server
        .get_auth("/api/v1/users/me/profile", &auth.access_token)
        .await
        .unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.followers_count, 0);
    assert_eq!(profile.following_count, 0);
    assert!(profile.first_name.is_none());

    // Update a few fields
    let response = server
        .put_auth(
            "/api/v1/users/me/profile",
            &auth.access_token,
            &json!({"first_name": "Ada", "city": "London"}),
        )
        .await
        .unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.first_name.as_deref(), Some("Ada"));
    assert_eq!(profile.city.as_deref(), Some("London"));
}

#[tokio::test]
async fn test_list_users_filtered_by_email() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .get_auth(
            &format!("/api/v1/users?email={}", auth.user.email),
            &auth.access_token,
        )
        .await
        .unwrap();
    let users: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, auth.user.id);
}

// ============================================================================
// Follow Tests
// ============================================================================

#[tokio::test]
async fn test_follow_and_unfollow() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server).await;
    let bob = register(&server).await;

    // Follow
    let response = server
        .post_auth_empty(
            &format!("/api/v1/users/{}/follow", bob.user.id),
            &alice.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Bob's followers now include Alice
    let response = server
        .get_auth(
            &format!("/api/v1/users/{}/followers", bob.user.id),
            &alice.access_token,
        )
        .await
        .unwrap();
    let followers: Vec<FollowUserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(followers.iter().any(|f| f.id == alice.user.id));

    // Alice's following list includes Bob
    let response = server
        .get_auth("/api/v1/users/me/following", &alice.access_token)
        .await
        .unwrap();
    let following: Vec<FollowUserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(following.iter().any(|f| f.id == bob.user.id));

    // Unfollow
    let response = server
        .delete_auth(
            &format!("/api/v1/users/{}/follow", bob.user.id),
            &alice.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth("/api/v1/users/me/following", &alice.access_token)
        .await
        .unwrap();
    let following: Vec<FollowUserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!following.iter().any(|f| f.id == bob.user.id));
}

#[tokio::test]
async fn test_cannot_follow_self() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .post_auth_empty(
            &format!("/api/v1/users/{}/follow", auth.user.id),
            &auth.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Post / Feed Tests
// ============================================================================

#[tokio::test]
async fn test_feed_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/posts").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_create_post_and_duplicate_title() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let request = CreatePostRequest::unique();
    let post = create_post(&server, &auth.access_token, &request).await;
    assert_eq!(post.title, request.title);
    assert_eq!(post.user_id, auth.user.id);

    // Titles are globally unique, even across users
    let other = register(&server).await;
    let response = server
        .post_auth("/api/v1/posts", &other.access_token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_feed_without_follows_shows_only_own_posts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server).await;
    let bob = register(&server).await;

    let alice_post = create_post(&server, &alice.access_token, &CreatePostRequest::unique()).await;
    create_post(&server, &bob.access_token, &CreatePostRequest::unique()).await;

    let response = server.get_auth("/api/v1/posts", &alice.access_token).await.unwrap();
    let feed: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(feed.iter().all(|p| p.user_id == alice.user.id));
    assert!(feed.iter().any(|p| p.id == alice_post.id));
}

#[tokio::test]
async fn test_feed_includes_followed_users_newest_first() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register(&server).await;
    let bob = register(&server).await;

    let older = create_post(&server, &bob.access_token, &CreatePostRequest::unique()).await;
    let newer = create_post(&server, &alice.access_token, &CreatePostRequest::unique()).await;

    server
        .post_auth_empty(
            &format!("/api/v1/users/{}/follow", bob.user.id),
            &alice.access_token,
        )
        .await
        .unwrap();

    let response = server.get_auth("/api/v1/posts", &alice.access_token).await.unwrap();
    let feed: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let newer_pos = feed.iter().position(|p| p.id == newer.id).expect("own post in feed");
    let older_pos = feed.iter().position(|p| p.id == older.id).expect("followed post in feed");
    assert!(newer_pos < older_pos, "feed must be newest first");

    // Ordering holds across the whole page
    for window in feed.windows(2) {
        assert!(window[0].created_at >= window[1].created_at);
    }
}

#[tokio::test]
async fn test_feed_title_filter() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let request = CreatePostRequest::unique();
    let post = create_post(&server, &auth.access_token, &request).await;
    create_post(&server, &auth.access_token, &CreatePostRequest::unique()).await;

    // Case-insensitive substring match
    let response = server
        .get_auth(
            &format!("/api/v1/posts?title={}", post.title.to_uppercase()),
            &auth.access_token,
        )
        .await
        .unwrap();
    let feed: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].id, post.id);
}

#[tokio::test]
async fn test_feed_hashtag_filter() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let tag = format!("rustlang{}", unique_suffix());
    let request = CreatePostRequest::with_hashtags(&[&tag]);
    let post = create_post(&server, &auth.access_token, &request).await;
    create_post(&server, &auth.access_token, &CreatePostRequest::unique()).await;

    let response = server
        .get_auth(
            &format!("/api/v1/posts?hashtag={}", tag.to_uppercase()),
            &auth.access_token,
        )
        .await
        .unwrap();
    let feed: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].id, post.id);
    assert_eq!(feed[0].hashtags, vec![tag]);
}

#[tokio::test]
async fn test_feed_malformed_date_is_bad_request() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .get_auth("/api/v1/posts?date=2024-13-40", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_hashtags_collapse_to_one() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let tag = format!("once{}", unique_suffix());
    let request = CreatePostRequest::with_hashtags(&[&tag, &tag]);
    let post = create_post(&server, &auth.access_token, &request).await;
    assert_eq!(post.hashtags, vec![tag.clone()]);

    let response = server
        .get_auth(&format!("/api/v1/posts/{}", post.id), &auth.access_token)
        .await
        .unwrap();
    let detail: PostDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.hashtags, vec![tag]);
}

#[tokio::test]
async fn test_update_post_requires_ownership() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = register(&server).await;
    let intruder = register(&server).await;

    let post = create_post(&server, &owner.access_token, &CreatePostRequest::unique()).await;

    let response = server
        .patch_auth(
            &format!("/api/v1/posts/{}", post.id),
            &intruder.access_token,
            &json!({"content": "hijacked"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The owner may update
    let response = server
        .patch_auth(
            &format!("/api/v1/posts/{}", post.id),
            &owner.access_token,
            &json!({"content": "edited"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_delete_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let post = create_post(&server, &auth.access_token, &CreatePostRequest::unique()).await;

    let response = server
        .delete_auth(&format!("/api/v1/posts/{}", post.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get_auth(&format!("/api/v1/posts/{}", post.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_like_toggle_cycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let post = create_post(&server, &auth.access_token, &CreatePostRequest::unique()).await;
    let like_url = format!("/api/v1/posts/{}/like", post.id);

    // First like: added, 201
    let response = server.post_auth_empty(&like_url, &auth.access_token).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(body, json!({"like": "LIKE added."}));

    // Second like: removed, 200
    let response = server.post_auth_empty(&like_url, &auth.access_token).await.unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({"like": "LIKE removed."}));

    // Post ends with zero reactions
    let response = server
        .get_auth(&format!("/api/v1/posts/{}", post.id), &auth.access_token)
        .await
        .unwrap();
    let detail: PostDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.likes_count, 0);
    assert_eq!(detail.dislikes_count, 0);
}

#[tokio::test]
async fn test_like_then_dislike_changes_reaction() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let post = create_post(&server, &auth.access_token, &CreatePostRequest::unique()).await;

    let response = server
        .post_auth_empty(&format!("/api/v1/posts/{}/like", post.id), &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Flip to dislike: changed, 200
    let response = server
        .post_auth_empty(&format!("/api/v1/posts/{}/dislike", post.id), &auth.access_token)
        .await
        .unwrap();
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body, json!({"dislike": "Changed to DISLIKE."}));

    // Exactly one reaction row remains, now a dislike
    let response = server
        .get_auth(&format!("/api/v1/posts/{}", post.id), &auth.access_token)
        .await
        .unwrap();
    let detail: PostDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(detail.likes_count, 0);
    assert_eq!(detail.dislikes_count, 1);
}

#[tokio::test]
async fn test_reaction_on_missing_post_is_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let response = server
        .post_auth_empty("/api/v1/posts/999999999999/like", &auth.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_liked_posts_listing() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register(&server).await;
    let viewer = register(&server).await;

    let liked = create_post(&server, &author.access_token, &CreatePostRequest::unique()).await;
    let ignored = create_post(&server, &author.access_token, &CreatePostRequest::unique()).await;

    server
        .post_auth_empty(&format!("/api/v1/posts/{}/like", liked.id), &viewer.access_token)
        .await
        .unwrap();

    let response = server
        .get_auth("/api/v1/posts/liked-posts", &viewer.access_token)
        .await
        .unwrap();
    let posts: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(posts.iter().any(|p| p.id == liked.id));
    assert!(!posts.iter().any(|p| p.id == ignored.id));
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_add_comment_to_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register(&server).await;
    let commenter = register(&server).await;

    let post = create_post(&server, &author.access_token, &CreatePostRequest::unique()).await;

    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/add-comment", post.id),
            &commenter.access_token,
            &json!({"content": "great post"}),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(comment.post_id, post.id);
    assert_eq!(comment.user_id, commenter.user.id);

    // The comment shows up in the post detail
    let response = server
        .get_auth(&format!("/api/v1/posts/{}", post.id), &author.access_token)
        .await
        .unwrap();
    let detail: PostDetailResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(detail.comments.iter().any(|c| c.id == comment.id));
}

#[tokio::test]
async fn test_empty_comment_is_rejected_with_field_errors() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;
    let post = create_post(&server, &auth.access_token, &CreatePostRequest::unique()).await;

    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/add-comment", post.id),
            &auth.access_token,
            &json!({"content": ""}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_comment_mutation_requires_authorship() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register(&server).await;
    let intruder = register(&server).await;

    let post = create_post(&server, &author.access_token, &CreatePostRequest::unique()).await;
    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/add-comment", post.id),
            &author.access_token,
            &json!({"content": "mine"}),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Someone else cannot edit or delete it
    let response = server
        .patch_auth(
            &format!("/api/v1/comments/{}", comment.id),
            &intruder.access_token,
            &json!({"content": "hijacked"}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The author can
    let response = server
        .patch_auth(
            &format!("/api/v1/comments/{}", comment.id),
            &author.access_token,
            &json!({"content": "edited"}),
        )
        .await
        .unwrap();
    let updated: CommentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.content, "edited");

    let response = server
        .delete_auth(&format!("/api/v1/comments/{}", comment.id), &author.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_list_own_comments() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = register(&server).await;
    let other = register(&server).await;

    let post = create_post(&server, &author.access_token, &CreatePostRequest::unique()).await;
    server
        .post_auth(
            &format!("/api/v1/posts/{}/add-comment", post.id),
            &author.access_token,
            &json!({"content": "from author"}),
        )
        .await
        .unwrap();
    server
        .post_auth(
            &format!("/api/v1/posts/{}/add-comment", post.id),
            &other.access_token,
            &json!({"content": "from other"}),
        )
        .await
        .unwrap();

    let response = server.get_auth("/api/v1/comments", &author.access_token).await.unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(comments.iter().all(|c| c.user_id == author.user.id));
}

// ============================================================================
// Hashtag Tests
// ============================================================================

#[tokio::test]
async fn test_hashtag_crud() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let auth = register(&server).await;

    let name = format!("topic{}", unique_suffix());
    let response = server
        .post_auth("/api/v1/hashtags", &auth.access_token, &json!({"name": name}))
        .await
        .unwrap();
    let hashtag: HashtagResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(hashtag.name, name);

    let response = server
        .get_auth(&format!("/api/v1/hashtags/{}", hashtag.id), &auth.access_token)
        .await
        .unwrap();
    let fetched: HashtagResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, hashtag.id);

    let renamed = format!("{name}x");
    let response = server
        .patch_auth(
            &format!("/api/v1/hashtags/{}", hashtag.id),
            &auth.access_token,
            &json!({"name": renamed}),
        )
        .await
        .unwrap();
    let updated: HashtagResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name, renamed);
}
