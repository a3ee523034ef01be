//! Unit tests for token claims

use chrono::Utc;

use crate::domain::entities::token::Claims;

#[test]
fn test_claims_expire_after_lifetime() {
    let claims = Claims::new(42, "renttracker", 86_400);

    assert_eq!(claims.sub, "42");
    assert_eq!(claims.iss, "renttracker");
    assert_eq!(claims.exp - claims.iat, 86_400);
    assert!((claims.iat - Utc::now().timestamp()).abs() <= 2);
    assert!(!claims.is_expired());
}

#[test]
fn test_claims_user_id_parsing() {
    let claims = Claims::new(7, "renttracker", 60);
    assert_eq!(claims.user_id(), Some(7));
}

#[test]
fn test_claims_reject_malformed_subject() {
    let mut claims = Claims::new(7, "renttracker", 60);
    claims.sub = "not-a-number".into();
    assert_eq!(claims.user_id(), None);

    claims.sub = "0".into();
    assert_eq!(claims.user_id(), None);
}

#[test]
fn test_expired_claims() {
    let claims = Claims::new(1, "renttracker", -10);
    assert!(claims.is_expired());
}

#[test]
fn test_oversized_lifetime_saturates() {
    let claims = Claims::new(1, "renttracker", i64::MAX / 10);
    assert!(claims.exp > claims.iat);

    let claims = Claims::new(1, "renttracker", i64::MAX);
    assert_eq!(claims.exp, i64::MAX);
}
