use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// A single registered route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RouteDto {
    /// Upper-case HTTP method, e.g. `GET`
    pub method: String,
    /// Route path with `{param}` placeholders
    pub path: String,
}

/// Machine-readable map of every route served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SitemapDto {
    pub routes: Vec<RouteDto>,
}
