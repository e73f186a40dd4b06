//! HTTP-level integration tests for the book endpoints, including the
//! referential-integrity and ISBN-uniqueness rules.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json};
use sqlx::PgPool;
use uuid::Uuid;

/// Create an author and return its generated ID.
async fn create_author(pool: &PgPool, first_name: &str, last_name: &str) -> String {
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        post_json(
            app,
            "/authors",
            serde_json::json!({"firstName": first_name, "lastName": last_name}),
        )
        .await,
    )
    .await;
    json["id"].as_str().unwrap().to_string()
}

/// Create a book and return the response body.
async fn create_book(
    pool: &PgPool,
    title: &str,
    isbn: &str,
    author_id: &str,
) -> serde_json::Value {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/books",
        serde_json::json!({"title": title, "isbn": isbn, "authorId": author_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_book_embeds_author(pool: PgPool) {
    let author_id = create_author(&pool, "George", "Orwell").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/books",
        serde_json::json!({
            "title": "1984",
            "isbn": "9780451524935",
            "publishedDate": "1949-06-08",
            "genre": "Dystopian fiction",
            "authorId": author_id
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "1984");
    assert_eq!(json["isbn"], "9780451524935");
    assert_eq!(json["publishedDate"], "1949-06-08");
    assert!(json["id"].is_string());
    assert_eq!(json["author"]["id"], author_id.as_str());
    assert_eq!(json["author"]["lastName"], "Orwell");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_book_with_unknown_author_returns_400_and_persists_nothing(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/books",
        serde_json::json!({
            "title": "Orphan Book",
            "isbn": "9780451524935",
            "authorId": Uuid::new_v4()
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Author not found");
    assert_eq!(json["error"], "BadRequest");

    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/books").await).await;
    assert_eq!(list["total"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_book_with_invalid_isbn_returns_400(pool: PgPool) {
    let author_id = create_author(&pool, "George", "Orwell").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/books",
        serde_json::json!({
            "title": "Bad Checksum",
            "isbn": "978-1-4028-9462-7",
            "authorId": author_id
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "BadRequest");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_isbn_returns_409_and_keeps_one_row(pool: PgPool) {
    let author_id = create_author(&pool, "George", "Orwell").await;
    create_book(&pool, "1984", "9780451524935", &author_id).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/books",
        serde_json::json!({
            "title": "1984, second printing",
            "isbn": "9780451524935",
            "authorId": author_id
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["statusCode"], 409);
    assert_eq!(json["error"], "Conflict");
    assert_eq!(json["message"], "ISBN already exists");

    // Exactly one book with that ISBN exists afterwards.
    let app = common::build_test_app(pool);
    let list = body_json(get(app, "/books?search=9780451524935").await).await;
    assert_eq!(list["total"], 1);
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn get_book_returns_embedded_author(pool: PgPool) {
    let author_id = create_author(&pool, "Jane", "Austen").await;
    let book = create_book(&pool, "Emma", "9780141439587", &author_id).await;
    let book_id = book["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/books/{book_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Emma");
    assert_eq!(json["author"]["firstName"], "Jane");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_nonexistent_book_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/books/{}", Uuid::new_v4())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Book not found");
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_books_filters_by_author(pool: PgPool) {
    let orwell = create_author(&pool, "George", "Orwell").await;
    let austen = create_author(&pool, "Jane", "Austen").await;
    create_book(&pool, "1984", "9780451524935", &orwell).await;
    create_book(&pool, "Animal Farm", "9780141036137", &orwell).await;
    create_book(&pool, "Emma", "9780141439587", &austen).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/books?authorId={orwell}")).await).await;
    assert_eq!(json["total"], 2);

    // Search and author filter combine with AND.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/books?search=farm&authorId={orwell}")).await).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["items"][0]["title"], "Animal Farm");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/books?search=farm&authorId={austen}")).await).await;
    assert_eq!(json["total"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_books_search_matches_title_or_isbn(pool: PgPool) {
    let author_id = create_author(&pool, "George", "Orwell").await;
    create_book(&pool, "1984", "9780451524935", &author_id).await;
    create_book(&pool, "Animal Farm", "9780141036137", &author_id).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/books?search=animal").await).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["items"][0]["title"], "Animal Farm");

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/books?search=9780451").await).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["items"][0]["title"], "1984");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn update_book_merges_partial_fields(pool: PgPool) {
    let author_id = create_author(&pool, "George", "Orwell").await;
    let book = create_book(&pool, "1984 (draft)", "9780451524935", &author_id).await;
    let book_id = book["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/books/{book_id}"),
        serde_json::json!({"title": "1984"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "1984");
    assert_eq!(json["isbn"], "9780451524935");
    assert_eq!(json["author"]["id"], author_id.as_str());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_book_can_change_author(pool: PgPool) {
    let orwell = create_author(&pool, "George", "Orwell").await;
    let austen = create_author(&pool, "Jane", "Austen").await;
    let book = create_book(&pool, "1984", "9780451524935", &orwell).await;
    let book_id = book["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/books/{book_id}"),
        serde_json::json!({"authorId": austen}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["author"]["id"], austen.as_str());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_book_to_unknown_author_returns_400(pool: PgPool) {
    let author_id = create_author(&pool, "George", "Orwell").await;
    let book = create_book(&pool, "1984", "9780451524935", &author_id).await;
    let book_id = book["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/books/{book_id}"),
        serde_json::json!({"authorId": Uuid::new_v4()}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Author not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_book_to_duplicate_isbn_returns_409(pool: PgPool) {
    let author_id = create_author(&pool, "George", "Orwell").await;
    create_book(&pool, "1984", "9780451524935", &author_id).await;
    let book = create_book(&pool, "Animal Farm", "9780141036137", &author_id).await;
    let book_id = book["id"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/books/{book_id}"),
        serde_json::json!({"isbn": "9780451524935"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["message"], "ISBN already exists");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_nonexistent_book_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/books/{}", Uuid::new_v4()),
        serde_json::json!({"title": "Nothing"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_book_returns_204_then_404(pool: PgPool) {
    let author_id = create_author(&pool, "George", "Orwell").await;
    let book = create_book(&pool, "1984", "9780451524935", &author_id).await;
    let book_id = book["id"].as_str().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/books/{book_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/books/{book_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_nonexistent_book_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/books/{}", Uuid::new_v4())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// End-to-end scenario
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn author_book_round_trip(pool: PgPool) {
    // 1) Create the author.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/authors",
        serde_json::json!({"firstName": "E2E", "lastName": "Tester"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let author = body_json(response).await;
    let author_id = author["id"].as_str().unwrap().to_string();

    // 2) Create a book referencing it.
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/books",
        serde_json::json!({
            "title": "E2E Book",
            "isbn": "978-1-4028-9462-6",
            "publishedDate": "2020-01-01",
            "genre": "Test",
            "authorId": author_id
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let book = body_json(response).await;
    let book_id = book["id"].as_str().unwrap().to_string();
    assert_eq!(book["author"]["id"], author_id.as_str());

    // 3) Fetch the book and verify the embedded author.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/books/{book_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "E2E Book");
    assert_eq!(json["author"]["id"], author_id.as_str());
}
