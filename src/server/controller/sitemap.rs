use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Extension, Json};
use utoipa::openapi::OpenApi;

use crate::model::api::{RouteDto, SitemapDto};

/// Tag for grouping sitemap endpoints in OpenAPI documentation
pub static SITEMAP_TAG: &str = "sitemap";

/// List every route served by the API.
///
/// Returns the HTTP method and path of each registered endpoint. The list is built
/// once from the OpenAPI document when the router is constructed.
///
/// # Returns
/// - `200 OK` - Method and path of every registered route
#[utoipa::path(
    get,
    path = "/",
    tag = SITEMAP_TAG,
    responses(
        (status = 200, description = "Registered routes", body = SitemapDto)
    ),
)]
pub async fn get_sitemap(Extension(sitemap): Extension<Arc<SitemapDto>>) -> impl IntoResponse {
    (StatusCode::OK, Json(sitemap.as_ref().clone()))
}

/// Collects the method and path of every operation in an OpenAPI document.
///
/// Paths are visited in the document's order; methods within a path are listed in
/// the order GET, POST, PUT, PATCH, DELETE.
pub fn sitemap_from_openapi(api: &OpenApi) -> SitemapDto {
    let mut routes = Vec::new();

    for (path, item) in api.paths.paths.iter() {
        let methods = [
            ("GET", item.get.is_some()),
            ("POST", item.post.is_some()),
            ("PUT", item.put.is_some()),
            ("PATCH", item.patch.is_some()),
            ("DELETE", item.delete.is_some()),
        ];

        for (method, registered) in methods {
            if registered {
                routes.push(RouteDto {
                    method: method.to_string(),
                    path: path.clone(),
                });
            }
        }
    }

    SitemapDto { routes }
}
