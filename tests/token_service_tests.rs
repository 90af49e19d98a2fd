use std::sync::Arc;
use std::thread;

use time::Duration;

use authtoken::{
    ManualClock, Principal, TokenConfig, TokenError, TokenKind, TokenService,
    adapters::http::{app_error_impl::status_for, bearer::extract_from_header},
};

const START: i64 = 1_700_000_000;

fn build_token_service(clock: Arc<ManualClock>) -> TokenService {
    let cfg = TokenConfig::new(
        "integration-access-secret",
        "integration-refresh-secret",
        Duration::seconds(2_700),
        Duration::seconds(604_800),
    )
    .expect("failed to build test config");
    TokenService::new(cfg, clock)
}

fn principal() -> Principal {
    Principal::new("u1", "a@b.com", "A")
}

#[test]
fn access_expires_while_refresh_still_rotates() {
    let clock = Arc::new(ManualClock::new(START));
    let svc = build_token_service(clock.clone());

    let pair = svc.issue(&principal()).expect("issue pair");

    let claims = svc
        .verify(&pair.access_token, TokenKind::Access)
        .expect("fresh access token should verify");
    assert_eq!(claims.subject(), "u1");
    assert_eq!(claims.email(), "a@b.com");
    assert_eq!(claims.display_name(), "A");

    clock.advance(2_701);

    let expired = svc.verify(&pair.access_token, TokenKind::Access);
    assert_eq!(expired, Err(TokenError::TokenExpired));

    let refresh_claims = svc
        .verify(&pair.refresh_token, TokenKind::Refresh)
        .expect("refresh token should still verify");
    assert_eq!(refresh_claims.expires_at(), START + 604_800);

    let rotated = svc.refresh(&pair.refresh_token).expect("rotation");
    assert_ne!(rotated.access_token, pair.access_token);

    let new_claims = svc
        .verify(&rotated.access_token, TokenKind::Access)
        .expect("rotated access token should verify");
    assert_eq!(new_claims.subject(), "u1");
    assert_eq!(new_claims.issued_at(), START + 2_701);
    assert_eq!(new_claims.expires_at(), START + 2_701 + 2_700);
}

#[test]
fn token_text_has_three_base64url_segments() {
    let svc = build_token_service(Arc::new(ManualClock::new(START)));
    let pair = svc.issue(&principal()).expect("issue pair");

    let segments: Vec<&str> = pair.access_token.split('.').collect();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0], "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9");
    for segment in segments {
        assert!(!segment.is_empty());
        assert!(
            segment
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_'),
            "segment {segment:?} is not unpadded base64url"
        );
    }
}

#[test]
fn bearer_header_flow_maps_failures_to_unauthorized() {
    let clock = Arc::new(ManualClock::new(START));
    let svc = build_token_service(clock.clone());
    let pair = svc.issue(&principal()).expect("issue pair");

    let header = format!("Bearer {}", pair.access_token);
    let token = extract_from_header(&header).expect("bearer token");
    assert!(svc.verify(token, TokenKind::Access).is_ok());

    clock.advance(3_000);
    let err = svc.verify(token, TokenKind::Access).unwrap_err();
    assert_eq!(status_for(&err), 401);

    let err = svc.verify("garbage", TokenKind::Access).unwrap_err();
    assert_eq!(err, TokenError::MalformedToken);
    assert_eq!(status_for(&err), 401);
}

#[test]
fn concurrent_verification_shares_one_service() {
    let svc = Arc::new(build_token_service(Arc::new(ManualClock::new(START))));
    let pair = svc.issue(&principal()).expect("issue pair");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let svc = svc.clone();
            let token = pair.access_token.clone();
            thread::spawn(move || svc.verify(&token, TokenKind::Access).map(|c| c.issued_at()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread panicked"), Ok(START));
    }
}
