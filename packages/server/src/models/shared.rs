use uuid::Uuid;

use crate::error::AppError;
use crate::store::mapping::parse_remote_id;

/// Validate a required single-line field (1-`max` Unicode characters after trimming).
pub fn required_text(field: &str, value: Option<String>, max: usize) -> Result<String, AppError> {
    let value = value.unwrap_or_default();
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{field} must be 1-{max} characters"
        )));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional field. Blank becomes `None`.
pub fn optional_text(
    field: &str,
    value: Option<String>,
    max: usize,
) -> Result<Option<String>, AppError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.chars().count() > max => Err(AppError::Validation(format!(
            "{field} must be at most {max} characters"
        ))),
        Some(v) => Ok(Some(v.to_string())),
    }
}

/// HTML checkbox semantics: `on`, `true`, `1`, `yes` are set.
pub fn checkbox(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("on" | "true" | "1" | "yes")
    )
}

/// Row id from a path segment. Accepts the public `db-` form or a bare uuid.
/// Embedded catalog ids are not manageable and resolve to `NOT_FOUND`.
pub fn row_id(id: &str) -> Result<Uuid, AppError> {
    parse_remote_id(id)
        .or_else(|| Uuid::parse_str(id).ok())
        .ok_or_else(|| AppError::NotFound(format!("No uploaded record with id '{id}'")))
}
