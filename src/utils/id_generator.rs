//! Short id generation.
//!
//! Provides cryptographically secure random short id generation over a
//! URL-safe alphabet.

/// Length of generated short ids.
const SHORT_ID_LENGTH: usize = 7;

/// URL-safe alphabet: 64 symbols, so each id has 64^7 ≈ 4×10^12 possible values.
const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Generates a cryptographically secure random 7-character short id.
///
/// Uses `getrandom` for entropy and maps each byte onto the URL-safe alphabet.
/// Ids are generated independently of existing ones; uniqueness is enforced by
/// the store's primary key, with collisions treated as statistically
/// negligible.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let id = generate_short_id();
/// assert_eq!(id.len(), 7);
/// assert!(id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_'));
/// ```
pub fn generate_short_id() -> String {
    let mut buffer = [0u8; SHORT_ID_LENGTH];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    buffer
        .iter()
        .map(|b| ALPHABET[(b & 0x3f) as usize] as char)
        .collect()
}
