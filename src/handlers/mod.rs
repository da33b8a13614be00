pub mod category;
pub mod homepage;
pub mod legacy;
pub mod quiz;
pub mod seo;
pub mod session;

use axum::response::IntoResponse;

use crate::rejections::AppError;

pub async fn not_found() -> impl IntoResponse {
    AppError::NotFound("Page")
}
