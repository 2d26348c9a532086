//! Session password digest.
//!
//! The device never receives the plain password on session login. Instead it
//! hands out a challenge and an iteration count, and expects a chained SHA-256
//! digest back.

use crate::auth::challenge::LoginChallenge;
use sha2::{Digest, Sha256};

/// Compute the session password digest for `user`/`password` against `challenge`.
///
/// Irreversible mode hashes `user + salt + password` first; otherwise only the
/// password is hashed. The hex of that is concatenated with the challenge nonce
/// and hashed again, then re-hashed (as hex) until `iterations` is reached.
/// Iteration counts of 2 or fewer stop after the two fixed steps.
pub fn compute_digest(user: &str, password: &str, challenge: &LoginChallenge) -> String {
    let initial = if challenge.is_irreversible {
        Sha256::new()
            .chain_update(user)
            .chain_update(&challenge.salt)
            .chain_update(password)
            .finalize()
    } else {
        Sha256::digest(password)
    };

    let mut digest = Sha256::new()
        .chain_update(hex::encode(initial))
        .chain_update(&challenge.challenge)
        .finalize();

    for _ in 2..challenge.iterations {
        digest = Sha256::digest(hex::encode(digest));
    }

    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::challenge::LongTermFlag;

    fn sample_challenge(iterations: u32, is_irreversible: bool) -> LoginChallenge {
        LoginChallenge {
            version: Some("1.0".to_string()),
            xmlns: Some("http://example.com".to_string()),
            session_id: "abc123".to_string(),
            challenge: "xyz456".to_string(),
            iterations,
            is_irreversible,
            salt: "salty".to_string(),
            is_session_id_valid_long_term: LongTermFlag {
                value: true,
                opt: Some("optional".to_string()),
            },
            session_id_version: 2,
        }
    }

    #[test]
    fn test_irreversible_golden_value() {
        let digest = compute_digest("testuser", "testpassword", &sample_challenge(10, true));
        assert_eq!(
            digest,
            "5bbb0d3b38d162f1fdcaa8a5e4bc53cf02914a113f1fe0b4590551c55002410f"
        );
    }

    #[test]
    fn test_plain_golden_value() {
        let digest = compute_digest("testuser", "testpassword", &sample_challenge(10, false));
        assert_eq!(
            digest,
            "c489bf27321c295f8f34273a130bffac7021a6c1af85fdf409db62bd0cfee48d"
        );
    }

    #[test]
    fn test_plain_mode_ignores_user_and_salt() {
        let mut other = sample_challenge(10, false);
        other.salt = "different-salt".to_string();

        assert_eq!(
            compute_digest("testuser", "testpassword", &sample_challenge(10, false)),
            compute_digest("someone-else", "testpassword", &other)
        );
    }

    #[test]
    fn test_irreversible_mode_binds_user_and_salt() {
        let base = compute_digest("testuser", "testpassword", &sample_challenge(10, true));

        let mut salted = sample_challenge(10, true);
        salted.salt = "peppery".to_string();

        assert_ne!(base, compute_digest("testuser2", "testpassword", &sample_challenge(10, true)));
        assert_ne!(base, compute_digest("testuser", "testpassword", &salted));
    }

    #[test]
    fn test_small_iteration_counts_stop_after_fixed_steps() {
        let expected = "e6197b60f6582504db5b34a1df76d9de4be9984eae66f801a9d64274d31c665e";
        for iterations in [0, 1, 2] {
            assert_eq!(
                compute_digest("testuser", "testpassword", &sample_challenge(iterations, true)),
                expected,
                "iterations = {}",
                iterations
            );
        }
    }

    #[test]
    fn test_deterministic_lowercase_hex() {
        let challenge = sample_challenge(100, true);
        let first = compute_digest("testuser", "testpassword", &challenge);
        let second = compute_digest("testuser", "testpassword", &challenge);

        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}
