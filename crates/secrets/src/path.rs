//! Lookup path construction

use crate::SecretError;

/// Join a relative secret path onto a base path.
///
/// Exactly one `/` separates the two parts no matter how many slashes the
/// caller put at the end of `base` or around `relative`.
///
/// # Errors
///
/// Returns [`SecretError::InvalidPath`] if `relative` is empty once slashes are trimmed.
pub fn join_secret_path(base: &str, relative: &str) -> Result<String, SecretError> {
    let relative_trimmed = relative.trim_matches('/');
    if relative_trimmed.is_empty() {
        return Err(SecretError::InvalidPath {
            path: relative.to_string(),
            message: "relative path is empty".to_string(),
        });
    }

    Ok(format!("{}/{}", base.trim_end_matches('/'), relative_trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "secret/data/akari-value";
    const EXPECTED: &str = "secret/data/akari-value/slack/webhook_url";

    #[test]
    fn test_plain_join() {
        assert_eq!(join_secret_path(BASE, "slack/webhook_url").unwrap(), EXPECTED);
    }

    #[test]
    fn test_slash_combinations() {
        let bases = [BASE, "secret/data/akari-value/", "secret/data/akari-value//"];
        let relatives = [
            "slack/webhook_url",
            "/slack/webhook_url",
            "slack/webhook_url/",
            "//slack/webhook_url/",
        ];

        for base in bases {
            for relative in relatives {
                assert_eq!(
                    join_secret_path(base, relative).unwrap(),
                    EXPECTED,
                    "base={base:?} relative={relative:?}"
                );
            }
        }
    }

    #[test]
    fn test_inner_segments_untouched() {
        assert_eq!(
            join_secret_path("kv", "/a/b/c").unwrap(),
            "kv/a/b/c"
        );
    }

    #[test]
    fn test_empty_relative_rejected() {
        for relative in ["", "/", "///"] {
            let err = join_secret_path(BASE, relative).unwrap_err();
            assert!(matches!(err, SecretError::InvalidPath { .. }));
        }
    }
}
