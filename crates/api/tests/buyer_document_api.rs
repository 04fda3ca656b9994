//! HTTP-level integration tests for the buyer-only document endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_multipart, MultipartForm};
use sqlx::PgPool;

fn id_form() -> MultipartForm {
    MultipartForm::new()
        .file("id.jpg", "image/jpeg", &[0xFF, 0xD8, 0xFF])
        .text("buyer_id", "888")
        .text("document_tag", "identification")
}

// ---------------------------------------------------------------------------
// Upload then query
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_then_query_by_buyer(pool: PgPool) {
    let response = post_multipart(build_test_app(pool.clone()), "/documents/buyer", id_form()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["document_id"].as_i64().unwrap() > 0);

    let json = body_json(
        get(build_test_app(pool), "/documents/query/buyer?buyer_id=888").await,
    )
    .await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["documents"][0]["filename"], "id.jpg");
    assert_eq!(json["documents"][0]["document_tag"], "identification");
    assert_eq!(json["documents"][0]["buyer_id"], "888");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn upload_with_missing_fields_is_rejected(pool: PgPool) {
    let form = MultipartForm::new().file("id.jpg", "image/jpeg", b"bytes");
    let response = post_multipart(build_test_app(pool), "/documents/buyer", form).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let error = json["error"].as_str().unwrap();
    assert!(
        error.contains("Missing required fields"),
        "unexpected error: {error}"
    );
}

// ---------------------------------------------------------------------------
// buyer_id is mandatory on reads -- intentional asymmetry from the
// general table, where every filter is optional.
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn query_without_buyer_id_is_rejected(pool: PgPool) {
    let response = get(build_test_app(pool), "/documents/query/buyer").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "buyer_id is required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn query_narrows_by_document_tag(pool: PgPool) {
    post_multipart(build_test_app(pool.clone()), "/documents/buyer", id_form()).await;
    let passport = MultipartForm::new()
        .file("passport.jpg", "image/jpeg", b"bytes")
        .text("buyer_id", "888")
        .text("document_tag", "passport");
    post_multipart(build_test_app(pool.clone()), "/documents/buyer", passport).await;

    let json = body_json(
        get(
            build_test_app(pool),
            "/documents/query/buyer?buyer_id=888&document_tag=passport",
        )
        .await,
    )
    .await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["documents"][0]["document_tag"], "passport");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_of_nonexistent_pair_succeeds(pool: PgPool) {
    let response = delete(
        build_test_app(pool.clone()),
        "/documents/buyer/delete?buyer_id=888&document_tag=identification",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Documents deleted successfully");

    let json = body_json(
        get(build_test_app(pool), "/documents/query/buyer?buyer_id=888").await,
    )
    .await;
    assert_eq!(json["count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_removes_matching_documents(pool: PgPool) {
    post_multipart(build_test_app(pool.clone()), "/documents/buyer", id_form()).await;

    let response = delete(
        build_test_app(pool.clone()),
        "/documents/buyer/delete?buyer_id=888&document_tag=identification",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(
        get(build_test_app(pool), "/documents/query/buyer?buyer_id=888").await,
    )
    .await;
    assert_eq!(json["count"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_requires_both_parameters(pool: PgPool) {
    let response = delete(
        build_test_app(pool.clone()),
        "/documents/buyer/delete?document_tag=identification",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "buyer_id is required");

    let response = delete(
        build_test_app(pool),
        "/documents/buyer/delete?buyer_id=888",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "document_tag is required");
}
