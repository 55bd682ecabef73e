//! Query-string extractors for the search and list endpoints
//!
//! Both extractors read paging limits from the application configuration,
//! trimming anything a client asks for to `api_limit_max`.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;
use crate::state::AppState;

/// Default page size for the search endpoint
const DEFAULT_MAX_RESULTS: i64 = 10;
/// Minimum keyword length accepted by the search endpoint
const MIN_KEYWORD_LENGTH: usize = 3;

/// Trim a requested page size into `0..=max`.
///
/// Zero is a valid request and yields an empty page; negative values are
/// treated as zero.
fn clamped_limit(requested: Option<i64>, fallback: i64, max: i64) -> i64 {
    requested.unwrap_or(fallback).clamp(0, max)
}

/// Raw search query parameters
#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    keyword: Option<String>,
    #[serde(default)]
    max_results: Option<i64>,
}

/// Validated search query
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Label keyword, at least three characters when present
    pub keyword: Option<String>,
    /// Maximum number of results to load and return
    pub max_results: i64,
}

#[async_trait]
impl FromRequestParts<AppState> for SearchQuery {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<SearchParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        if let Some(keyword) = &params.keyword {
            if keyword.chars().count() < MIN_KEYWORD_LENGTH {
                return Err(ApiError::invalid_query(format!(
                    "Keyword must be at least {MIN_KEYWORD_LENGTH} characters"
                )));
            }
        }

        let max_results = clamped_limit(
            params.max_results,
            DEFAULT_MAX_RESULTS,
            state.config().pagination.api_limit_max,
        );

        Ok(SearchQuery {
            keyword: params.keyword,
            max_results,
        })
    }
}

/// Raw list query parameters
#[derive(Debug, Deserialize)]
struct ListParams {
    #[serde(default)]
    skip: Option<i64>,
    #[serde(default)]
    limit: Option<i64>,
}

/// Validated offset/limit paging query
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub skip: i64,
    pub limit: i64,
}

#[async_trait]
impl FromRequestParts<AppState> for ListQuery {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ListParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        let pagination = &state.config().pagination;
        let skip = params.skip.unwrap_or(0).max(0);
        let limit = clamped_limit(
            params.limit,
            pagination.limit_param_default,
            pagination.api_limit_max,
        );

        Ok(ListQuery { skip, limit })
    }
}
