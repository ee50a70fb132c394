//! Attendance token codec
//!
//! A token is `base64(username + "|" + email)` using the standard padded
//! alphabet. It is a transport format for copy-pasting an identity between
//! two sessions: no signature, no expiry, no secrecy.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

use crate::roster::Credentials;

/// Field separator inside the decoded token text
pub const SEPARATOR: char = '|';

/// Why a pasted token could not be turned back into credentials
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded token is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("expected exactly one '|' separator, found {found}")]
    Separator { found: usize },
}

/// Encode a (username, email) pair into a shareable token
///
/// Fields containing [`SEPARATOR`] produce a token that will not decode.
pub fn encode(username: &str, email: &str) -> String {
    STANDARD.encode(format!("{username}{SEPARATOR}{email}"))
}

/// Decode a token back into credentials
///
/// Whitespace anywhere in the pasted text (surrounding blanks, line breaks
/// from a wrapped terminal) is dropped before decoding; any other character
/// outside the base64 alphabet is an error.
pub fn decode(token: &str) -> Result<Credentials, DecodeError> {
    let compact: String = token.split_whitespace().collect();
    let bytes = STANDARD.decode(compact)?;
    let text = String::from_utf8(bytes)?;

    let found = text.matches(SEPARATOR).count();
    match text.split_once(SEPARATOR) {
        Some((username, email)) if found == 1 => Ok(Credentials::new(username, email)),
        _ => Err(DecodeError::Separator { found }),
    }
}
