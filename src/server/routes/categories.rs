use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::db::{queries, Question};
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};

use super::category_map;

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i64, String>,
    total_categories: usize,
}

#[derive(Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    categories: BTreeMap<i64, String>,
    current_category: String,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResult<Json<CategoriesResponse>> {
    let categories = queries::categories::get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    let categories = category_map(categories);
    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

async fn questions_by_category(
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> ApiResult<Json<CategoryQuestionsResponse>> {
    // a non-numeric id matches no rows, it is not a client error here
    let questions = match id.parse::<i64>() {
        Ok(category) => queries::questions::get_questions_for_category(&pool, category).await?,
        Err(_) => Vec::new(),
    };
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }
    let categories = category_map(queries::categories::get_all_categories(&pool).await?);
    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        categories,
        current_category: id,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(questions_by_category))
        .with_state(state)
}
