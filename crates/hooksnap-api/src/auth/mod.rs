//! Shared-secret authorization for inbound deliveries.

use hooksnap_core::AppError;
use subtle::ConstantTimeEq;

fn secure_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Check the presented `token` query parameter against the configured secret.
///
/// With no secret configured every request passes. Otherwise the token must be
/// present and byte-for-byte equal.
pub fn verify_token(expected: Option<&str>, presented: Option<&str>) -> Result<(), AppError> {
    let Some(expected) = expected else {
        return Ok(());
    };

    match presented {
        Some(token) if secure_compare(expected, token) => Ok(()),
        Some(_) => Err(AppError::Unauthorized("token mismatch".to_string())),
        None => Err(AppError::Unauthorized("token missing".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anything_passes_without_a_secret() {
        assert!(verify_token(None, None).is_ok());
        assert!(verify_token(None, Some("whatever")).is_ok());
    }

    #[test]
    fn matching_token_passes() {
        assert!(verify_token(Some("secret"), Some("secret")).is_ok());
    }

    #[test]
    fn missing_or_wrong_token_is_unauthorized() {
        assert!(matches!(
            verify_token(Some("secret"), None),
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            verify_token(Some("secret"), Some("Secret")),
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            verify_token(Some("secret"), Some("secret ")),
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            verify_token(Some("secret"), Some("")),
            Err(AppError::Unauthorized(_))
        ));
    }
}
