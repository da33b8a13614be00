use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;
use rust_i18n::t;

use crate::{seo::PageMeta, views};

#[derive(Debug)]
pub enum AppError {
    /// The named kind of record ("Quiz", "Category", "Page") does not exist.
    NotFound(&'static str),
    Input(&'static str),
    Internal(&'static str),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Input(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (meta, message) = match self {
            Self::NotFound(kind) => {
                let meta = PageMeta::not_found(kind);
                let message = meta.description.clone();
                (meta, message)
            }
            Self::Input(message) => (PageMeta::error("Bad Request"), message.to_string()),
            Self::Internal(message) => {
                (PageMeta::error("Internal Server Error"), message.to_string())
            }
        };

        let body = html! {
            section."error" {
                h1 { (meta.title) }
                p { (message) }
                a href="/" { (t!("error.back_home")) }
            }
        };
        (status, views::page(&meta, body)).into_response()
    }
}

pub trait ResultExt<T> {
    /// Logs the error and turns it into an internal error response.
    fn reject(self, message: &'static str) -> Result<T, AppError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn reject(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{message}: {e}");
            AppError::Internal(message)
        })
    }
}
