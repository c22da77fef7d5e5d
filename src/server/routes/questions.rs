use std::collections::BTreeMap;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::{queries, Question};
use crate::server::app::AppState;
use crate::server::deserializers::deserialize_page_or_first;
use crate::server::error::{ApiError, ApiResult};
use crate::server::pagination::paginate;

use super::{category_map, not_found};

#[derive(Deserialize)]
struct PageQuery {
    #[serde(
        default = "first_page",
        deserialize_with = "deserialize_page_or_first"
    )]
    page: usize,
}

fn first_page() -> usize {
    1
}

#[derive(Deserialize)]
struct NewQuestion {
    question: String,
    answer: String,
    // nullable, like the column it lands in
    category: Option<i64>,
    difficulty: i64,
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm")]
    search_term: String,
}

#[derive(Serialize)]
struct QuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: BTreeMap<i64, String>,
    current_category: Option<i64>,
}

#[derive(Serialize)]
struct DeletedResponse {
    success: bool,
    deleted: i64,
}

#[derive(Serialize)]
struct CreatedResponse {
    success: bool,
    created: Question,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    Query(PageQuery { page }): Query<PageQuery>,
) -> ApiResult<Json<QuestionsResponse>> {
    let questions = queries::questions::get_all_questions(&pool).await?;
    let page_questions = paginate(page, &questions).to_vec();
    if page_questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    let categories = category_map(queries::categories::get_all_categories(&pool).await?);
    Ok(Json(QuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions: page_questions,
        categories,
        current_category: None,
    }))
}

// junk ids and unknown ids both come back 422, kept from the published
// contract (see DESIGN.md)
async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeletedResponse>> {
    let id: i64 = id.parse().map_err(|_| ApiError::Unprocessable)?;
    let deleted = queries::questions::delete_question(&pool, id)
        .await
        .map_err(|_| ApiError::Unprocessable)?;
    if deleted == 0 {
        return Err(ApiError::Unprocessable);
    }
    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    body: Result<Json<NewQuestion>, JsonRejection>,
) -> ApiResult<Json<CreatedResponse>> {
    let Json(form) = body.map_err(|_| ApiError::Unprocessable)?;
    let id = queries::questions::create_question(
        &pool,
        &form.question,
        &form.answer,
        form.category,
        form.difficulty,
    )
    .await
    .map_err(|_| ApiError::Unprocessable)?;

    let created = queries::questions::get_question_by_id(&pool, id)
        .await
        .map_err(|_| ApiError::Unprocessable)?
        .ok_or(ApiError::Unprocessable)?;
    Ok(Json(CreatedResponse {
        success: true,
        created,
    }))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    body: Result<Json<SearchBody>, JsonRejection>,
) -> ApiResult<Json<QuestionsResponse>> {
    let Json(SearchBody { search_term }) = body.map_err(|_| ApiError::Unprocessable)?;
    if search_term.is_empty() {
        return Err(ApiError::Unprocessable);
    }
    let questions = queries::questions::search_questions(&pool, &search_term)
        .await
        .map_err(|_| ApiError::Unprocessable)?;
    let categories = category_map(
        queries::categories::get_all_categories(&pool)
            .await
            .map_err(|_| ApiError::Unprocessable)?,
    );
    // zero matches is still a success, only the list endpoint 404s on empty
    Ok(Json(QuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        categories,
        current_category: None,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(search_questions))
        .route("/questions/new", post(create_question))
        // only DELETE is served on the id path; any other verb reads as an
        // unknown route, not a method error
        .route("/questions/{id}", delete(delete_question).fallback(not_found))
        .with_state(state)
}
