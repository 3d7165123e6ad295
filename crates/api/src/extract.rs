//! Request extractors whose rejections use the `{error, code}` envelope.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with rejections mapped through [`AppError`].
///
/// Syntax errors, type mismatches, and a missing `Content-Type` all become
/// 400 `BAD_REQUEST` instead of axum's plain-text 400/415/422 responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
