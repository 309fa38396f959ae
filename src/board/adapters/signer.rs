//! HMAC-SHA256 timestamp signer for realtime channel tokens.

use crate::board::ports::ChannelSigner;
use chrono::Duration;
use hmac::{Hmac, Mac};
use mockable::Clock;
use sha2::Sha256;
use std::sync::Arc;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Separator between the value, timestamp and signature of a token.
const SEPARATOR: char = ':';

/// Errors returned while verifying a channel token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The secret cannot key the MAC.
    #[error("channel secret cannot be used as a signing key")]
    InvalidKey,

    /// The token does not have the `value:timestamp:signature` shape.
    #[error("malformed channel token")]
    Malformed,

    /// The signature does not match the value and timestamp.
    #[error("channel token signature does not match")]
    BadSignature,

    /// The token is older than the accepted age.
    #[error("channel token is {age_seconds} seconds old, exceeds {max_age_seconds}")]
    Expired {
        /// Age of the token in seconds.
        age_seconds: i64,
        /// Maximum accepted age in seconds.
        max_age_seconds: i64,
    },
}

/// Signs values as `value:timestamp:signature`.
///
/// The timestamp is the clock's Unix time in seconds and the signature is
/// the hex HMAC-SHA256 of `value:timestamp` keyed with the channel secret.
#[derive(Clone)]
pub struct TimestampSigner<C>
where
    C: Clock + Send + Sync,
{
    mac: HmacSha256,
    clock: Arc<C>,
}

impl<C> TimestampSigner<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a signer keyed with `secret`.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::InvalidKey`] when the MAC rejects the key.
    pub fn new(secret: impl AsRef<[u8]>, clock: Arc<C>) -> Result<Self, SignatureError> {
        let mac = HmacSha256::new_from_slice(secret.as_ref())
            .map_err(|_| SignatureError::InvalidKey)?;
        Ok(Self { mac, clock })
    }

    /// Verifies `token` and returns the embedded value.
    ///
    /// When `max_age` is given, tokens older than it are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::Malformed`] when the token cannot be split,
    /// [`SignatureError::BadSignature`] when the signature is not hex or does
    /// not match, or [`SignatureError::Expired`] when the token is too old.
    pub fn verify<'t>(
        &self,
        token: &'t str,
        max_age: Option<Duration>,
    ) -> Result<&'t str, SignatureError> {
        let mut parts = token.rsplitn(3, SEPARATOR);
        let signature = parts.next().ok_or(SignatureError::Malformed)?;
        let timestamp = parts.next().ok_or(SignatureError::Malformed)?;
        let value = parts.next().ok_or(SignatureError::Malformed)?;

        let expected = hex::decode(signature).map_err(|_| SignatureError::BadSignature)?;
        self.keyed(value, timestamp)
            .verify_slice(&expected)
            .map_err(|_| SignatureError::BadSignature)?;

        if let Some(limit) = max_age {
            let issued_at: i64 = timestamp.parse().map_err(|_| SignatureError::Malformed)?;
            let age_seconds = self.clock.utc().timestamp().saturating_sub(issued_at);
            if age_seconds > limit.num_seconds() {
                return Err(SignatureError::Expired {
                    age_seconds,
                    max_age_seconds: limit.num_seconds(),
                });
            }
        }

        Ok(value)
    }

    fn keyed(&self, value: &str, timestamp: &str) -> HmacSha256 {
        let mut mac = self.mac.clone();
        mac.update(format!("{value}{SEPARATOR}{timestamp}").as_bytes());
        mac
    }
}

impl<C> ChannelSigner for TimestampSigner<C>
where
    C: Clock + Send + Sync,
{
    fn sign(&self, value: &str) -> String {
        let timestamp = self.clock.utc().timestamp().to_string();
        let signature = hex::encode(self.keyed(value, &timestamp).finalize().into_bytes());
        format!("{value}{SEPARATOR}{timestamp}{SEPARATOR}{signature}")
    }
}
