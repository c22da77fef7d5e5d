use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use rand::seq::IteratorRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::db::{queries, Question};
use crate::server::app::AppState;
use crate::server::error::{ApiError, ApiResult};
use crate::telemetry::QUIZ_CNTR;

#[derive(Deserialize)]
struct QuizBody {
    previous_questions: Vec<i64>,
    quiz_category: QuizCategory,
}

/// Category id 0 stands for "any category".
#[derive(Deserialize)]
struct QuizCategory {
    id: i64,
}

#[derive(Serialize)]
struct QuizResponse {
    success: bool,
    /// `null` once every candidate has been served; the round is over,
    /// not failed.
    question: Option<Question>,
}

/// Uniform draw over the candidates not seen yet this round. The RNG is
/// passed in so tests can seed it.
fn draw_question<R: Rng + ?Sized>(
    rng: &mut R,
    candidates: Vec<Question>,
    previous: &[i64],
) -> Option<Question> {
    candidates
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .choose(rng)
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    body: Result<Json<QuizBody>, JsonRejection>,
) -> ApiResult<Json<QuizResponse>> {
    let Json(QuizBody {
        previous_questions,
        quiz_category,
    }) = body.map_err(|_| ApiError::Unprocessable)?;

    let candidates = match quiz_category.id {
        0 => queries::questions::get_all_questions(&pool).await,
        category => queries::questions::get_questions_for_category(&pool, category).await,
    }
    .map_err(|_| ApiError::Unprocessable)?;

    let question = draw_question(&mut rand::rng(), candidates, &previous_questions);
    if let Some(question) = &question {
        let label = question
            .category
            .map(|c| c.to_string())
            .unwrap_or_else(|| "none".to_owned());
        QUIZ_CNTR.with_label_values(&[label.as_str()]).inc();
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(play_quiz))
        .with_state(state)
}
