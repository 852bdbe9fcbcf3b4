//! Tests driving the assembled application service.
//!
//! These go through routing, path normalization and the sitemap layer, which the
//! direct handler tests bypass.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use holocron::server::router::app;
use serde_json::json;
use tower::ServiceExt;

use super::*;

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

/// Tests that the sitemap lists every registered route.
///
/// Expected: 200 OK with `GET /` first and all fifteen routes present
#[tokio::test]
async fn sitemap_lists_registered_routes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_holocron_tables().build().await?;

    let resp = app(app_state(&test))
        .oneshot(request(Method::GET, "/"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let routes = body["routes"].as_array().unwrap();
    assert_eq!(routes[0], json!({ "method": "GET", "path": "/" }));

    for expected in [
        json!({ "method": "GET", "path": "/users" }),
        json!({ "method": "GET", "path": "/users/favorites" }),
        json!({ "method": "GET", "path": "/characters" }),
        json!({ "method": "GET", "path": "/characters/{character_id}" }),
        json!({ "method": "GET", "path": "/planets" }),
        json!({ "method": "GET", "path": "/planets/{planet_id}" }),
        json!({ "method": "GET", "path": "/vehicles" }),
        json!({ "method": "GET", "path": "/vehicles/{vehicle_id}" }),
        json!({ "method": "POST", "path": "/user/{user_id}/favorite/planet/{planet_id}" }),
        json!({ "method": "DELETE", "path": "/user/{user_id}/favorite/planet/{planet_id}" }),
        json!({ "method": "POST", "path": "/user/{user_id}/favorite/character/{character_id}" }),
        json!({ "method": "DELETE", "path": "/user/{user_id}/favorite/character/{character_id}" }),
        json!({ "method": "POST", "path": "/user/{user_id}/favorite/vehicle/{vehicle_id}" }),
        json!({ "method": "DELETE", "path": "/user/{user_id}/favorite/vehicle/{vehicle_id}" }),
    ] {
        assert!(routes.contains(&expected), "missing {expected}");
    }
    assert_eq!(routes.len(), 15);

    Ok(())
}

/// Tests that a trailing slash reaches the same handler.
///
/// Expected: 200 OK with the planets list
#[tokio::test]
async fn trailing_slash_is_trimmed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_holocron_tables().build().await?;
    let db = test.db.as_ref().unwrap();
    factory::create_planet(db).await?;

    let resp = app(app_state(&test))
        .oneshot(request(Method::GET, "/planets/"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["planets"].as_array().unwrap().len(), 1);

    Ok(())
}

/// Tests the full add then delete flow through the router.
///
/// Expected: 200 OK for POST and DELETE, then 404 for a repeated DELETE
#[tokio::test]
async fn favorite_round_trip_through_router() -> Result<(), TestError> {
    let test = TestBuilder::new().with_holocron_tables().build().await?;
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;
    let character = factory::create_character(db).await?;
    let uri = format!("/user/{}/favorite/character/{}", user.id, character.id);

    let resp = app(app_state(&test))
        .oneshot(request(Method::POST, &uri))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app(app_state(&test))
        .oneshot(request(Method::DELETE, &uri))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "deleted": true }));

    let resp = app(app_state(&test))
        .oneshot(request(Method::DELETE, &uri))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Tests that a non-integer path segment is rejected by the extractor.
///
/// Expected: 400 Bad Request
#[tokio::test]
async fn rejects_non_integer_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_holocron_tables().build().await?;

    let resp = app(app_state(&test))
        .oneshot(request(Method::GET, "/characters/luke"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests that the OpenAPI document is served.
///
/// Expected: 200 OK with the API title
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().with_holocron_tables().build().await?;

    let resp = app(app_state(&test))
        .oneshot(request(Method::GET, "/api/docs/openapi.json"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["info"]["title"], "Holocron");

    Ok(())
}

/// Tests that Swagger UI loads from its entry point.
///
/// The bare docs path redirects once to the slash-terminated page, which must be served
/// rather than trimmed back into another redirect.
///
/// Expected: 303 See Other to `/api/docs/`, then 200 OK
#[tokio::test]
async fn serves_swagger_ui_entry_point() -> Result<(), TestError> {
    let test = TestBuilder::new().with_holocron_tables().build().await?;

    let resp = app(app_state(&test))
        .oneshot(request(Method::GET, "/api/docs"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/api/docs/");

    let resp = app(app_state(&test))
        .oneshot(request(Method::GET, "/api/docs/"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
