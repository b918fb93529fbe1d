/// Result of validating an uploaded file name.
#[derive(Debug, PartialEq, Eq)]
pub enum FilenameError {
    /// Filename is empty or whitespace-only.
    Empty,
    /// Filename contains path separators (`/` or `\`).
    ContainsPathSeparator,
    /// Filename contains control characters (CR, LF, NUL, etc.).
    ControlCharacter,
    /// Filename has no extension.
    MissingExtension,
    /// Extension is not an accepted image type.
    UnsupportedType,
}

impl FilenameError {
    /// Returns a human-readable error message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Empty => "Filename cannot be empty",
            Self::ContainsPathSeparator => "Invalid filename: path separators are not allowed",
            Self::ControlCharacter => "Invalid filename: control characters are not allowed",
            Self::MissingExtension => "Invalid filename: an extension is required",
            Self::UnsupportedType => "Unsupported image type (allowed: jpg, jpeg, png, webp, gif, tif, tiff)",
        }
    }
}

pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "webp", "gif", "tif", "tiff"];

/// Validates an uploaded image file name and returns its lowercased extension.
pub fn image_extension(filename: &str) -> Result<String, FilenameError> {
    let trimmed = filename.trim();

    if trimmed.is_empty() {
        return Err(FilenameError::Empty);
    }

    if trimmed.chars().any(|c| c.is_control()) {
        return Err(FilenameError::ControlCharacter);
    }

    if trimmed.contains('/') || trimmed.contains('\\') {
        return Err(FilenameError::ContainsPathSeparator);
    }

    let ext = match trimmed.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => ext.to_ascii_lowercase(),
        _ => return Err(FilenameError::MissingExtension),
    };

    if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return Err(FilenameError::UnsupportedType);
    }

    Ok(ext)
}

/// Key segment derived from a free-text label. Whitespace runs become a single
/// `_`; anything outside `[A-Za-z0-9._-]` is dropped.
pub fn key_segment(label: &str) -> String {
    let joined = label.split_whitespace().collect::<Vec<_>>().join("_");
    joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect::<String>()
        .trim_start_matches('.')
        .to_string()
}

/// Object key for an upload: `{prefix}/{unix_millis}-{label}.{ext}`.
pub fn upload_key(prefix: &str, label: &str, ext: &str, unix_millis: i64) -> String {
    let segment = key_segment(label);
    if segment.is_empty() {
        format!("{prefix}/{unix_millis}.{ext}")
    } else {
        format!("{prefix}/{unix_millis}-{segment}.{ext}")
    }
}
