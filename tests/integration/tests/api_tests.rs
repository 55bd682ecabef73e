//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance (migrations are applied at startup)
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Recipe Fetch Tests
// ============================================================================

#[tokio::test]
async fn test_create_then_fetch_recipe() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateRecipeRequest {
        label: "Tacos".to_string(),
        url: Some("http://x".to_string()),
        source: None,
        submitter_id: None,
    };

    let response = server.post("/api/v1/recipes", &request).await.unwrap();
    let created: RecipeResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.label, "Tacos");
    assert_eq!(created.url.as_deref(), Some("http://x"));

    // Immediate fetch-by-id returns the same label and url
    let response = server
        .get(&format!("/api/v1/recipes/{}", created.id))
        .await
        .unwrap();
    let fetched: RecipeResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.label, "Tacos");
    assert_eq!(fetched.url.as_deref(), Some("http://x"));
}

#[tokio::test]
async fn test_fetch_missing_recipe_returns_404() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/recipes/99999").await.unwrap();

    let status = response.status();
    let body = response.text().await.unwrap();
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("not found"), "body was: {body}");
}

#[tokio::test]
async fn test_create_assigns_distinct_ids_and_timestamps() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let first = server
        .post("/api/v1/recipes", &CreateRecipeRequest::unique())
        .await
        .unwrap();
    let first: RecipeResponse = assert_json(first, StatusCode::CREATED).await.unwrap();

    let second = server
        .post("/api/v1/recipes", &CreateRecipeRequest::unique())
        .await
        .unwrap();
    let second: RecipeResponse = assert_json(second, StatusCode::CREATED).await.unwrap();

    assert_ne!(first.id, second.id);
    assert!(!first.created_at.is_empty());
    assert!(!first.updated_at.is_empty());
}

#[tokio::test]
async fn test_create_recipe_rejects_empty_label() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateRecipeRequest::labeled("");
    let response = server.post("/api/v1/recipes", &request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// List Tests
// ============================================================================

#[tokio::test]
async fn test_list_recipes_respects_limit() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    for _ in 0..2 {
        let response = server
            .post("/api/v1/recipes", &CreateRecipeRequest::unique())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = server.get("/api/v1/recipes?limit=1").await.unwrap();
    let page: Vec<RecipeResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.len(), 1);
}

#[tokio::test]
async fn test_list_recipes_limit_zero_returns_empty_page() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/recipes", &CreateRecipeRequest::unique())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = server.get("/api/v1/recipes?limit=0").await.unwrap();
    let page: Vec<RecipeResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn test_list_recipes_oversized_limit_is_trimmed() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // A limit beyond api_limit_max is trimmed instead of rejected
    let response = server.get("/api/v1/recipes?limit=999999").await.unwrap();
    let page: Vec<RecipeResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.len() <= 1000);
}

// ============================================================================
// Search Tests
// ============================================================================

#[tokio::test]
async fn test_search_by_keyword_case_insensitive() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    // Keyword is unique per run so concurrent tests cannot interfere
    let tag = format!("Chk{}", unique_suffix());
    for label in [
        format!("{tag} Soup"),
        "Beef Stew".to_string(),
        format!("{} Curry", tag.to_lowercase()),
    ] {
        let response = server
            .post("/api/v1/recipes", &CreateRecipeRequest::labeled(&label))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = server
        .get(&format!(
            "/api/v1/recipes/search?keyword={}&max_results=1000",
            tag.to_lowercase()
        ))
        .await
        .unwrap();
    let search: RecipeSearchResults = assert_json(response, StatusCode::OK).await.unwrap();

    // Both matches come back, in original order; the beef stew does not
    assert_eq!(search.results.len(), 2);
    assert!(search.results[0].label.ends_with("Soup"));
    assert!(search.results[1].label.ends_with("Curry"));
}

#[tokio::test]
async fn test_search_without_keyword_returns_page() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/recipes", &CreateRecipeRequest::unique())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = server
        .get("/api/v1/recipes/search?max_results=5")
        .await
        .unwrap();
    let search: RecipeSearchResults = assert_json(response, StatusCode::OK).await.unwrap();

    // Unfiltered page, truncated to max_results
    assert!(!search.results.is_empty());
    assert!(search.results.len() <= 5);
}

#[tokio::test]
async fn test_search_filters_after_limiting() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let tag = format!("Pagebound{}", unique_suffix());
    for n in 0..3 {
        let response = server
            .post(
                "/api/v1/recipes",
                &CreateRecipeRequest::labeled(&format!("{tag} {n}")),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // The filter runs over the first max_results rows only, so matches are
    // drawn from that page and never exceed it
    let response = server
        .get(&format!(
            "/api/v1/recipes/search?keyword={}&max_results=1",
            tag.to_lowercase()
        ))
        .await
        .unwrap();
    let search: RecipeSearchResults = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(search.results.len() <= 1);
    for result in &search.results {
        assert!(result.label.starts_with(&tag));
    }
}

#[tokio::test]
async fn test_search_max_results_zero_returns_empty_page() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/recipes", &CreateRecipeRequest::unique())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = server
        .get("/api/v1/recipes/search?max_results=0")
        .await
        .unwrap();
    let search: RecipeSearchResults = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(search.results.is_empty());
}

#[tokio::test]
async fn test_search_rejects_short_keyword() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/recipes/search?keyword=ab").await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Update / Delete Tests
// ============================================================================

#[tokio::test]
async fn test_partial_update_touches_only_supplied_fields() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = CreateRecipeRequest {
        label: "Original Label".to_string(),
        url: Some("http://example.com/original".to_string()),
        source: Some("original source".to_string()),
        submitter_id: None,
    };
    let response = server.post("/api/v1/recipes", &request).await.unwrap();
    let created: RecipeResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let update = UpdateRecipeRequest {
        source: Some("updated source".to_string()),
        ..UpdateRecipeRequest::default()
    };
    let response = server
        .patch(&format!("/api/v1/recipes/{}", created.id), &update)
        .await
        .unwrap();
    let updated: RecipeResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.source.as_deref(), Some("updated source"));
    // All other fields keep their prior values
    assert_eq!(updated.label, "Original Label");
    assert_eq!(updated.url.as_deref(), Some("http://example.com/original"));
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn test_delete_recipe_then_fetch_returns_404() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/recipes", &CreateRecipeRequest::unique())
        .await
        .unwrap();
    let created: RecipeResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete(&format!("/api/v1/recipes/{}", created.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = server
        .get(&format!("/api/v1/recipes/{}", created.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_fetch_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest::unique();

    let response = server.post("/api/v1/users", &request).await.unwrap();
    let created: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.email, request.email);

    let response = server
        .get(&format!("/api/v1/users/{}", created.id))
        .await
        .unwrap();
    let fetched: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.email, request.email);
}

#[tokio::test]
async fn test_create_user_rejects_invalid_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = CreateUserRequest {
        first_name: None,
        surname: None,
        email: "not-an-email".to_string(),
        is_superuser: false,
    };

    let response = server.post("/api/v1/users", &request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_user_cascades_to_recipes() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/v1/users", &CreateUserRequest::unique())
        .await
        .unwrap();
    let user: UserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let recipe_request = CreateRecipeRequest {
        submitter_id: Some(user.id),
        ..CreateRecipeRequest::unique()
    };
    let response = server.post("/api/v1/recipes", &recipe_request).await.unwrap();
    let recipe: RecipeResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Removing the user removes its recipes with it
    let response = server
        .delete(&format!("/api/v1/users/{}", user.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = server
        .get(&format!("/api/v1/recipes/{}", recipe.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = server
        .get(&format!("/api/v1/users/{}", user.id))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
