//! Movie catalog validation and pagination rules.
//!
//! Handlers call these before any repository access so malformed input
//! never reaches the database.

use crate::error::CoreError;

/// Page used when the client does not send `?page=`.
pub const DEFAULT_PAGE: i64 = 1;
/// Page size used when the client does not send `?limit=`.
pub const DEFAULT_LIMIT: i64 = 10;
/// Largest page size a client may request.
pub const MAX_LIMIT: i64 = 100;

/// Maximum length for a movie title.
pub const MAX_TITLE_LEN: usize = 255;

/// Resolved `LIMIT` / `OFFSET` pair for a paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

/// Resolve 1-based `page` and `limit` query values into a [`Page`].
///
/// Missing values fall back to [`DEFAULT_PAGE`] / [`DEFAULT_LIMIT`].
/// Non-positive values and limits above [`MAX_LIMIT`] are rejected rather
/// than clamped.
pub fn resolve_page(page: Option<i64>, limit: Option<i64>) -> Result<Page, CoreError> {
    let page = page.unwrap_or(DEFAULT_PAGE);
    let limit = limit.unwrap_or(DEFAULT_LIMIT);

    if page < 1 {
        return Err(CoreError::Validation("page must be at least 1".to_string()));
    }
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(CoreError::Validation(format!(
            "limit must be between 1 and {MAX_LIMIT}"
        )));
    }

    let offset = (page - 1)
        .checked_mul(limit)
        .ok_or_else(|| CoreError::Validation("page is out of range".to_string()))?;

    Ok(Page { limit, offset })
}

/// Validate that a required text field is present and not blank.
pub fn validate_required_text(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Validate a movie title: non-blank and at most [`MAX_TITLE_LEN`] characters.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    validate_required_text("title", title)?;
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "title exceeds maximum length of {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a movie running time in minutes.
pub fn validate_duration(minutes: i32) -> Result<(), CoreError> {
    if minutes <= 0 {
        return Err(CoreError::Validation(
            "duration must be a positive number of minutes".to_string(),
        ));
    }
    Ok(())
}
