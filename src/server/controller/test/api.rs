use super::*;

#[tokio::test]
async fn serves_openapi_document() {
    let app = TestApp::seeded().await;

    let (status, body) = app.get("/api").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["openapi"].is_string());

    let paths = body["paths"].as_object().unwrap();
    for path in [
        "/api/categories",
        "/api/reviews",
        "/api/reviews/{review_id}",
        "/api/reviews/{review_id}/comments",
        "/api/users",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
    assert!(body["paths"]["/api/reviews/{review_id}"]["patch"].is_object());
    assert!(body["paths"]["/api/reviews/{review_id}/comments"]["post"].is_object());
}
