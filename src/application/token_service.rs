//! Issuance, verification and rotation of access/refresh token pairs.
//!
//! The service is stateless between calls: it holds two immutable secrets,
//! two lifetimes and a clock. Nothing is persisted, so a refresh token stays
//! verifiable until its own `exp` even after it has been rotated.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use time::Duration;

use crate::app_error::{TokenError, TokenResult};
use crate::application::clock::{Clock, SystemClock};
use crate::application::codec::{
    assemble_token, decode_segment, encode_segment, is_base64url, sign, split_token,
    verify_signature,
};
use crate::domain::{Claims, Principal, TokenHeader, TokenKind, TokenPair};
use crate::infra::config::TokenConfig;

pub struct TokenService {
    access_secret: SecretString,
    refresh_secret: SecretString,
    access_ttl: Duration,
    refresh_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    pub fn new(config: TokenConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            access_secret: config.access_secret,
            refresh_secret: config.refresh_secret,
            access_ttl: config.access_token_ttl,
            refresh_ttl: config.refresh_token_ttl,
            clock,
        }
    }

    pub fn with_system_clock(config: TokenConfig) -> Self {
        Self::new(config, Arc::new(SystemClock))
    }

    /// Issue a fresh access + refresh pair for `principal`.
    ///
    /// Both claims share a single reading of the clock.
    pub fn issue(&self, principal: &Principal) -> TokenResult<TokenPair> {
        if principal.subject.trim().is_empty() {
            return Err(TokenError::InvalidPrincipal(
                "subject must not be empty".into(),
            ));
        }

        let now = self.clock.now();
        let access_claims =
            Claims::for_principal(principal, now, self.access_ttl.whole_seconds());
        let refresh_claims =
            Claims::for_principal(principal, now, self.refresh_ttl.whole_seconds());

        let pair = TokenPair {
            access_token: encode_and_sign(&access_claims, &self.access_secret),
            refresh_token: encode_and_sign(&refresh_claims, &self.refresh_secret),
        };

        tracing::debug!(
            subject = %principal.subject,
            issued_at = now,
            access_expires_at = access_claims.expires_at(),
            refresh_expires_at = refresh_claims.expires_at(),
            "Issued token pair"
        );

        Ok(pair)
    }

    /// Verify a token of the given kind against its secret and expiry.
    pub fn verify(&self, token: &str, kind: TokenKind) -> TokenResult<Claims> {
        let result = self.verify_with_secret(token, self.secret_for(kind));
        if let Err(err) = &result {
            log_rejection(kind, err);
        }
        result
    }

    /// Verify `token` against an explicit secret.
    ///
    /// Checks run in order: structure, segment encoding, signature over the
    /// exact segment text, JSON content, expiry. Read-only.
    pub fn verify_with_secret(&self, token: &str, secret: &SecretString) -> TokenResult<Claims> {
        let (header_text, payload_text, signature_text) = split_token(token)?;

        if !is_base64url(header_text) {
            return Err(TokenError::MalformedSegment(
                "header is not valid base64url".into(),
            ));
        }
        if !is_base64url(payload_text) {
            return Err(TokenError::MalformedSegment(
                "payload is not valid base64url".into(),
            ));
        }
        if !is_base64url(signature_text) {
            return Err(TokenError::MalformedSegment(
                "signature is not valid base64url".into(),
            ));
        }

        if !verify_signature(
            header_text,
            payload_text,
            signature_text,
            secret.expose_secret().as_bytes(),
        ) {
            return Err(TokenError::InvalidSignature);
        }

        let header: TokenHeader = decode_segment(header_text)?;
        if header != TokenHeader::hs256() {
            return Err(TokenError::MalformedSegment(
                "unsupported token header".into(),
            ));
        }
        let claims: Claims = decode_segment(payload_text)?;

        if claims.is_expired_at(self.clock.now()) {
            return Err(TokenError::TokenExpired);
        }

        Ok(claims)
    }

    /// Rotate: verify the refresh token and issue a brand-new pair.
    ///
    /// Verification errors propagate unchanged. The presented token is not
    /// extended or revoked.
    pub fn refresh(&self, refresh_token: &str) -> TokenResult<TokenPair> {
        let claims = self.verify(refresh_token, TokenKind::Refresh)?;
        let pair = self.issue(&claims.principal())?;

        tracing::debug!(subject = %claims.subject(), "Rotated token pair");

        Ok(pair)
    }

    fn secret_for(&self, kind: TokenKind) -> &SecretString {
        match kind {
            TokenKind::Access => &self.access_secret,
            TokenKind::Refresh => &self.refresh_secret,
        }
    }
}

fn encode_and_sign(claims: &Claims, secret: &SecretString) -> String {
    let header_text = encode_segment(&TokenHeader::hs256());
    let payload_text = encode_segment(claims);
    let signature_text = sign(
        &header_text,
        &payload_text,
        secret.expose_secret().as_bytes(),
    );
    assemble_token(&header_text, &payload_text, &signature_text)
}

fn log_rejection(kind: TokenKind, err: &TokenError) {
    match err {
        TokenError::InvalidSignature => {
            tracing::warn!(kind = %kind, code = err.code().as_str(), "Token rejected")
        }
        _ => tracing::debug!(kind = %kind, code = err.code().as_str(), "Token rejected"),
    }
}
