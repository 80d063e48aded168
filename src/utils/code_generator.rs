//! Short code generation and validation.
//!
//! Codes are drawn from the OS CSPRNG because they are public identifiers:
//! a predictable generator would let anyone enumerate them.

use crate::domain::errors::CodeError;

/// The 64 symbols a short code may contain.
pub const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Shortest code accepted by [`is_valid_short_code`].
pub const MIN_CODE_LENGTH: usize = 4;

/// Longest code accepted by [`is_valid_short_code`].
pub const MAX_CODE_LENGTH: usize = 12;

/// Length of generated codes unless configured otherwise.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generates a short code of `length` characters.
///
/// Each character is drawn independently and uniformly from [`ALPHABET`]
/// using `getrandom`. Random bytes at or above the largest multiple of the
/// alphabet size are discarded and redrawn, so the reduction to an index
/// carries no modulo bias.
///
/// # Errors
///
/// Returns [`CodeError::InvalidLength`] if `length` is zero.
/// Returns [`CodeError::RandomSourceFailure`] if the OS random source fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6)?;
/// assert_eq!(code.len(), 6);
/// assert!(is_valid_short_code(&code));
/// ```
pub fn generate_code(length: usize) -> Result<String, CodeError> {
    if length == 0 {
        return Err(CodeError::InvalidLength(length));
    }

    // 256 for a 64-symbol alphabet, so every byte is accepted.
    let limit = 256 - (256 % ALPHABET.len());

    let mut code = String::with_capacity(length);
    let mut buffer = [0u8; 32];

    while code.len() < length {
        getrandom::fill(&mut buffer)
            .map_err(|e| CodeError::RandomSourceFailure(e.to_string()))?;

        for &byte in &buffer {
            if code.len() == length {
                break;
            }
            if usize::from(byte) < limit {
                code.push(char::from(ALPHABET[usize::from(byte) % ALPHABET.len()]));
            }
        }
    }

    Ok(code)
}

/// Returns whether `code` has the shape of a short code.
///
/// # Rules
///
/// - Length: 4-12 characters
/// - Allowed characters: `A-Z`, `a-z`, `0-9`, `-`, `_`
///
/// Pure predicate, used to reject malformed codes before they reach the store.
pub fn is_valid_short_code(code: &str) -> bool {
    (MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&code.len())
        && code
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
