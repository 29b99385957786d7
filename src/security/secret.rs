//! Signing secret strength validation.
//!
//! HMAC tokens are only as strong as the secret behind them. The secret is
//! classified at startup; weak secrets abort the boot.

use base64::{engine::general_purpose::STANDARD, Engine};
use rand::RngCore;

const MIN_SECRET_LENGTH: usize = 32; // 256 bits minimum
const RECOMMENDED_SECRET_LENGTH: usize = 64; // 512 bits recommended

/// Secret strength classification
#[derive(Debug, PartialEq, Eq)]
pub enum SecretStrength {
    /// Weak secret - reject at startup
    Weak,
    /// Acceptable secret - warn
    Acceptable,
    /// Strong secret - ok
    Strong,
}

/// Classify a signing secret.
///
/// Criteria: minimum 32 bytes, Shannon entropy above 4.0 bits/byte, and no
/// obvious repeating or sequential patterns.
pub fn validate_secret_strength(secret: &str) -> SecretStrength {
    let bytes = secret.as_bytes();

    if bytes.len() < MIN_SECRET_LENGTH {
        return SecretStrength::Weak;
    }

    let entropy = shannon_entropy(bytes);
    if entropy < 4.0 {
        return SecretStrength::Weak;
    }

    if has_obvious_patterns(bytes) {
        return SecretStrength::Weak;
    }

    if bytes.len() >= RECOMMENDED_SECRET_LENGTH && entropy >= 5.0 {
        SecretStrength::Strong
    } else {
        SecretStrength::Acceptable
    }
}

/// Shannon entropy in bits per byte (0-8 scale).
fn shannon_entropy(data: &[u8]) -> f64 {
    let mut freq = [0u32; 256];
    let len = data.len() as f64;

    for &byte in data {
        freq[byte as usize] += 1;
    }

    let mut entropy = 0.0;
    for &count in freq.iter() {
        if count > 0 {
            let p = f64::from(count) / len;
            entropy -= p * p.log2();
        }
    }

    entropy
}

/// Detect runs of repeated or sequential bytes (e.g. "aaaa", "1234").
fn has_obvious_patterns(data: &[u8]) -> bool {
    if data.len() < 4 {
        return false;
    }

    let mut same_run = 1;
    let mut seq_run = 1;
    for window in data.windows(2) {
        if window[0] == window[1] {
            same_run += 1;
            if same_run >= 4 {
                return true;
            }
        } else {
            same_run = 1;
        }

        if i16::from(window[1]) - i16::from(window[0]) == 1 {
            seq_run += 1;
            if seq_run >= 4 {
                return true;
            }
        } else {
            seq_run = 1;
        }
    }

    false
}

/// Generate a base64-encoded random secret, for development setups.
pub fn generate_secret(length: usize) -> String {
    let length = length.max(MIN_SECRET_LENGTH);
    let mut buffer = vec![0u8; length];
    rand::thread_rng().fill_bytes(&mut buffer);
    STANDARD.encode(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_secret_is_weak() {
        assert_eq!(validate_secret_strength("short"), SecretStrength::Weak);
    }

    #[test]
    fn test_low_entropy_secret_is_weak() {
        let repeated = "a".repeat(32);
        assert_eq!(validate_secret_strength(&repeated), SecretStrength::Weak);
    }

    #[test]
    fn test_sequential_secret_is_weak() {
        assert_eq!(
            validate_secret_strength("abcdefghijklmnopqrstuvwxyzabcdef"),
            SecretStrength::Weak
        );
    }

    #[test]
    fn test_random_32_byte_secret_is_at_least_acceptable() {
        let strength = validate_secret_strength("J8Kq2mPvRx4TnZs9YwLcGf7DhBe3Xa6W");
        assert_ne!(strength, SecretStrength::Weak);
    }

    #[test]
    fn test_long_random_secret_is_strong() {
        let secret = "y9K$mP2vRx#TnZ@s4Yw!cGf7Dh&e3Xa6Wq8Lj5BtNu1Zp0MkYhVgCxFbAsSdQwEr";
        assert_eq!(validate_secret_strength(secret), SecretStrength::Strong);
    }

    #[test]
    fn test_generated_secret_is_strong() {
        let secret = generate_secret(64);
        assert!(secret.len() >= 64);
        assert_eq!(validate_secret_strength(&secret), SecretStrength::Strong);
    }

    #[test]
    fn test_pattern_detection() {
        assert!(has_obvious_patterns(b"aaaa"));
        assert!(has_obvious_patterns(b"1234"));
        assert!(!has_obvious_patterns(b"aZ3$"));
    }
}
