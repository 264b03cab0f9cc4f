use std::fmt;

const HTTP_SCHEME: &str = "http://";
const HTTPS_SCHEME: &str = "https://";

/// Prefixes `https://` unless the input already starts with an http(s) scheme.
///
/// The scheme check is case-insensitive and only looks at the leading
/// characters. Empty input is returned as-is; callers reject it before
/// getting here.
pub fn normalize_url(raw: &str) -> String {
    if raw.is_empty() || has_http_scheme(raw) {
        raw.to_string()
    } else {
        format!("{HTTPS_SCHEME}{raw}")
    }
}

fn has_http_scheme(raw: &str) -> bool {
    starts_with_ignore_case(raw, HTTP_SCHEME) || starts_with_ignore_case(raw, HTTPS_SCHEME)
}

fn starts_with_ignore_case(raw: &str, prefix: &str) -> bool {
    raw.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Input was empty or whitespace only.
    Blank,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Blank => write!(f, "{}", crate::VALIDATION_MESSAGE),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A URL that is guaranteed to start with `http://` or `https://`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedUrl(String);

impl NormalizedUrl {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::Blank);
        }
        Ok(Self(normalize_url(raw)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
