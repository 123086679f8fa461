// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use thiserror::Error;

use crate::models::GenerationOptions;

/// Character pool passwords are sampled from: lowercase, uppercase, digits
/// and a fixed symbol set, in that order.
pub const DEFAULT_CHARSET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+[]{}|;:,.<>?";

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Password length must be at least 1")]
    InvalidLength,

    #[error("No characters remain in the charset after exclusions")]
    EmptyCharset,
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

// The excluded characters are removed once per request, before any draw.
// Entries that are duplicated or not in the charset are no-ops.
fn effective_charset(charset: &[u8], exclude: &str) -> Vec<u8> {
    let excluded = exclude.as_bytes();
    let mut chars = charset.to_vec();
    chars.retain(|c| !excluded.contains(c));
    chars
}

/// Generate a password by sampling uniformly, with replacement, from the
/// default charset minus the excluded characters. The random source is passed
/// in so callers can seed it.
pub fn generate_password_with<R: Rng + ?Sized>(
    options: &GenerationOptions,
    rng: &mut R,
) -> Result<String> {
    if options.length == 0 {
        return Err(GeneratorError::InvalidLength);
    }

    let chars = effective_charset(DEFAULT_CHARSET, &options.exclude_chars);
    if chars.is_empty() {
        return Err(GeneratorError::EmptyCharset);
    }

    let dist = Uniform::from(0..chars.len());
    let password = (0..options.length)
        .map(|_| chars[dist.sample(rng)] as char)
        .collect();

    Ok(password)
}

/// Generate a password with the process-wide thread RNG.
pub fn generate_password(options: &GenerationOptions) -> Result<String> {
    generate_password_with(options, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn options(length: usize, exclude: &str) -> GenerationOptions {
        GenerationOptions {
            length,
            exclude_chars: exclude.to_string(),
        }
    }

    #[test]
    fn generates_requested_length_from_default_charset() {
        for len in [1, 8, 12, 32, 100] {
            let password = generate_password(&options(len, "")).unwrap();
            assert_eq!(password.chars().count(), len);
            assert!(password.bytes().all(|b| DEFAULT_CHARSET.contains(&b)));
        }
    }

    #[test]
    fn excluded_characters_never_appear() {
        let exclude = "abcdefghijklmnopqrstuvwxyz";
        let password = generate_password(&options(200, exclude)).unwrap();
        assert!(!password.chars().any(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn excluding_letters_and_digits_leaves_symbols() {
        let exclude = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
        let password = generate_password(&options(50, exclude)).unwrap();
        assert!(password
            .chars()
            .all(|c| !c.is_ascii_alphanumeric() && c.is_ascii()));
    }

    #[test]
    fn excluding_the_entire_charset_fails() {
        let everything: String = DEFAULT_CHARSET.iter().map(|&b| b as char).collect();
        let err = generate_password(&options(5, &everything)).unwrap_err();
        assert!(matches!(err, GeneratorError::EmptyCharset));
    }

    #[test]
    fn zero_length_is_rejected_before_sampling() {
        let err = generate_password(&options(0, "")).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidLength));
    }

    #[test]
    fn exclusions_outside_the_charset_are_noops() {
        let password = generate_password(&options(12, "éé~~``")).unwrap();
        assert_eq!(password.len(), 12);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let opts = options(24, "O0l1");
        let mut first = ChaCha20Rng::seed_from_u64(42);
        let mut second = ChaCha20Rng::seed_from_u64(42);
        assert_eq!(
            generate_password_with(&opts, &mut first).unwrap(),
            generate_password_with(&opts, &mut second).unwrap()
        );
    }
}
