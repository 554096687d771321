//! Request header echo endpoint

use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE, HOST, USER_AGENT},
        HeaderMap, HeaderName,
    },
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct HeadersResponse {
    #[serde(rename = "Accept")]
    pub accept: Option<String>,
    #[serde(rename = "Content-Type")]
    pub content_type: Option<String>,
    #[serde(rename = "User-Agent")]
    pub user_agent: Option<String>,
    #[serde(rename = "Host")]
    pub host: Option<String>,
}

fn header_text(headers: &HeaderMap, name: HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Echo a few of the caller's request headers
#[utoipa::path(
    get,
    path = "/headers/get_headers",
    tag = "headers",
    responses(
        (status = 200, description = "Selected request headers", body = HeadersResponse)
    )
)]
pub async fn get_headers(headers: HeaderMap) -> Json<HeadersResponse> {
    Json(HeadersResponse {
        accept: header_text(&headers, ACCEPT),
        content_type: header_text(&headers, CONTENT_TYPE),
        user_agent: header_text(&headers, USER_AGENT),
        host: header_text(&headers, HOST),
    })
}
