// core/common/src/validation.rs
// Input validation shared by the profile library and the service

use regex::Regex;
use reqwest::Url;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidUrl(String),
    #[error("Invalid quoted literal: {0}")]
    InvalidLiteral(String),
    #[error("Invalid transaction hash: {0}")]
    InvalidTxHash(String),
    #[error("Input exceeds maximum length of {0} characters")]
    ExceedsMaxLength(usize),
    #[error("XSS attempt detected: potentially dangerous content found")]
    XssAttempt,
}

const MAX_URL_LENGTH: usize = 2048;
const EVM_TX_HASH_HEX_LENGTH: usize = 64;

/// XSS prevention
pub fn validate_no_xss(input: &str) -> Result<(), ValidationError> {
    let dangerous_patterns = [
        "<script", "javascript:", "onerror=", "onclick=",
        "onload=", "<iframe", "document.cookie", "eval(",
    ];

    let input_lower = input.to_lowercase();
    for pattern in &dangerous_patterns {
        if input_lower.contains(pattern) {
            return Err(ValidationError::XssAttempt);
        }
    }
    Ok(())
}

/// Length validation
pub fn validate_max_length(input: &str, max_length: usize) -> Result<(), ValidationError> {
    if input.len() > max_length {
        return Err(ValidationError::ExceedsMaxLength(max_length));
    }
    Ok(())
}

/// Validate an absolute http(s) URL with a host
pub fn validate_http_url(url: &str) -> Result<(), ValidationError> {
    validate_max_length(url, MAX_URL_LENGTH)?;
    validate_no_xss(url)?;

    let parsed = Url::parse(url).map_err(|e| ValidationError::InvalidUrl(format!("{}: {}", url, e)))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ValidationError::InvalidUrl(format!(
            "{}: scheme must be http or https",
            url
        )));
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(ValidationError::InvalidUrl(format!("{}: missing host", url)));
    }

    Ok(())
}

/// Validate a double-quoted literal such as `"test"` and return its inner text.
///
/// The literal must start and end with `"` and the inner text must not contain
/// an unescaped quote, so that substituting it verbatim yields one string token.
pub fn validate_quoted_literal(raw: &str) -> Result<&str, ValidationError> {
    if raw.len() < 2 || !raw.starts_with('"') || !raw.ends_with('"') {
        return Err(ValidationError::InvalidLiteral(format!(
            "{}: must be wrapped in double quotes",
            raw
        )));
    }

    let inner = &raw[1..raw.len() - 1];
    let mut escaped = false;
    for c in inner.chars() {
        match c {
            '\\' if !escaped => escaped = true,
            '"' if !escaped => {
                return Err(ValidationError::InvalidLiteral(format!(
                    "{}: unescaped quote inside literal",
                    raw
                )));
            }
            '\n' | '\r' => {
                return Err(ValidationError::InvalidLiteral(format!(
                    "{}: line break inside literal",
                    raw.escape_debug()
                )));
            }
            _ => escaped = false,
        }
    }

    if escaped {
        return Err(ValidationError::InvalidLiteral(format!(
            "{}: closing quote is escaped",
            raw
        )));
    }

    Ok(inner)
}

/// Validate an EVM transaction hash (0x + 64 hex characters)
pub fn validate_evm_tx_hash(hash: &str) -> Result<(), ValidationError> {
    let re = Regex::new(&format!(r"^0x[0-9a-fA-F]{{{}}}$", EVM_TX_HASH_HEX_LENGTH))
        .map_err(|_| ValidationError::InvalidTxHash("regex compilation failed".to_string()))?;

    if !re.is_match(hash) {
        return Err(ValidationError::InvalidTxHash(format!(
            "must be 0x followed by {} hexadecimal characters",
            EVM_TX_HASH_HEX_LENGTH
        )));
    }

    Ok(())
}
