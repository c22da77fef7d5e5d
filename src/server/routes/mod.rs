mod categories;
mod questions;
mod quizzes;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

use std::collections::BTreeMap;

use crate::db::Category;
use crate::server::error::ApiError;

/// `{id: type}` mapping shared by most list responses. serde_json renders
/// the integer keys as strings, same as the wire format clients expect.
pub(crate) fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

pub(crate) async fn not_found() -> ApiError {
    ApiError::NotFound
}
