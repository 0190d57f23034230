use hmac::{Mac, SimpleHmac};
use sha2::Sha256;

use super::errors::{CryptoError, Result};

/// Signature scheme version, used as base string and header prefix.
pub const SIGNATURE_VERSION: &str = "v0";

/// Slack request signature, as found in the `X-Slack-Request-Timestamp`
/// and `X-Slack-Signature` headers.
pub struct SlackSignature<'a> {
    /// Raw timestamp header value (unix seconds).
    pub timestamp: &'a str,
    /// Raw signature header value (`v0=<hex>`).
    pub signature: &'a str,
}

impl<'a> SlackSignature<'a> {
    /// Verify the signature against a raw body.
    ///
    /// `now` is the current unix time in seconds. Requests whose timestamp
    /// drifts more than `tolerance` seconds from `now` are rejected before
    /// the digest is even computed. An empty secret never verifies.
    pub fn verify(&self, body: &[u8], secret: &str, now: i64, tolerance: u64) -> Result<()> {
        if secret.is_empty() {
            return Err(CryptoError::EmptySecret);
        }

        let timestamp = self.parse_timestamp()?;
        if now.abs_diff(timestamp) > tolerance {
            return Err(CryptoError::ExpiredTimestamp {
                timestamp,
                tolerance,
            });
        }

        let decoded_signature = self.decode_signature()?;
        let hmac = Self::build_hmac(self.timestamp, body, secret)?;
        hmac.verify_slice(&decoded_signature)
            .map_err(|_| CryptoError::SignatureMismatch)
    }

    /// Check if a signature is valid.
    pub fn is_valid(&self, body: &[u8], secret: &str, now: i64, tolerance: u64) -> bool {
        self.verify(body, secret, now, tolerance).is_ok()
    }

    /// Compute the signature header value for a timestamp and body.
    pub fn compute(timestamp: &str, body: &[u8], secret: &str) -> Result<String> {
        let hmac = Self::build_hmac(timestamp, body, secret)?;
        Ok(format!(
            "{SIGNATURE_VERSION}={}",
            hex::encode(hmac.finalize().into_bytes())
        ))
    }

    fn parse_timestamp(&self) -> Result<i64> {
        self.timestamp
            .parse()
            .map_err(|_| CryptoError::InvalidTimestamp {
                timestamp: self.timestamp.to_string(),
            })
    }

    fn decode_signature(&self) -> Result<Vec<u8>> {
        let invalid = || CryptoError::InvalidSignatureFormat {
            sig: self.signature.to_string(),
        };

        let hex_digest = self
            .signature
            .strip_prefix(SIGNATURE_VERSION)
            .and_then(|s| s.strip_prefix('='))
            .ok_or_else(invalid)?;

        hex::decode(hex_digest).map_err(|_| invalid())
    }

    fn build_hmac(timestamp: &str, body: &[u8], secret: &str) -> Result<SimpleHmac<Sha256>> {
        let mut hmac = SimpleHmac::<Sha256>::new_from_slice(secret.as_bytes())
            .map_err(|_| CryptoError::InvalidSecretKeyLength)?;

        hmac.update(SIGNATURE_VERSION.as_bytes());
        hmac.update(b":");
        hmac.update(timestamp.as_bytes());
        hmac.update(b":");
        hmac.update(body);
        Ok(hmac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: u64 = 300;

    struct SigSet {
        timestamp: &'static str,
        signature: &'static str,
        body: &'static [u8],
        secret: &'static str,
        now: i64,
    }

    // Sample request from the Slack documentation.
    fn valid_sig_set() -> SigSet {
        SigSet {
            timestamp: "1531420618",
            signature: "v0=a2114d57b48eac39b9ad189dd8316235a7b4a8d21a10bd27519666489c69b503",
            body: b"token=xyzz0WbapA4vBCDEFasx0q6G&team_id=T1DC2JH3J&team_domain=testteamnow&channel_id=G8PSS9T3V&channel_name=foobar&user_id=U2CERLKJA&user_name=roadrunner&command=%2Fwebhook-collect&text=&response_url=https%3A%2F%2Fhooks.slack.com%2Fcommands%2FT1DC2JH3J%2F397700885554%2F96rGlfmibIGlgcZRskXaIFfN&trigger_id=398738663015.47445629121.803a0bc887a14d10d2c447fce8b6703c",
            secret: "8f742231b10e8888abcd99yyyzzz85a5",
            now: 1531420618,
        }
    }

    fn challenge_sig_set() -> SigSet {
        SigSet {
            timestamp: "1700000000",
            signature: "v0=d534f0e96e0866037fd8bd46f32d3be84edb1d3840b694769c428f79022e699c",
            body: br#"{"type":"url_verification","challenge":"abc123"}"#,
            secret: "iAmAsEcReTkEy",
            now: 1700000042,
        }
    }

    fn verify(set: &SigSet) -> Result<()> {
        SlackSignature {
            timestamp: set.timestamp,
            signature: set.signature,
        }
        .verify(set.body, set.secret, set.now, TOLERANCE)
    }

    #[test]
    fn test_verify_valid_signature() {
        verify(&valid_sig_set()).unwrap();
        verify(&challenge_sig_set()).unwrap();
    }

    #[test]
    fn test_compute_matches_known_signature() {
        let set = valid_sig_set();
        assert_eq!(
            SlackSignature::compute(set.timestamp, set.body, set.secret).unwrap(),
            set.signature
        );
    }

    #[test]
    fn test_body_mutation_is_rejected() {
        let set = challenge_sig_set();
        for idx in 0..set.body.len() {
            let mut body = set.body.to_vec();
            body[idx] ^= 0x01;

            let result = SlackSignature {
                timestamp: set.timestamp,
                signature: set.signature,
            }
            .verify(&body, set.secret, set.now, TOLERANCE);
            assert!(
                matches!(result, Err(CryptoError::SignatureMismatch)),
                "mutation at byte {idx} should be rejected"
            );
        }
    }

    #[test]
    fn test_signature_mutation_is_rejected() {
        let set = challenge_sig_set();
        for idx in 0..set.signature.len() {
            let mut signature = set.signature.as_bytes().to_vec();
            signature[idx] = if signature[idx] == b'0' { b'1' } else { b'0' };
            let signature = String::from_utf8(signature).unwrap();

            let valid = SlackSignature {
                timestamp: set.timestamp,
                signature: &signature,
            }
            .is_valid(set.body, set.secret, set.now, TOLERANCE);
            assert!(!valid, "mutation at byte {idx} should be rejected");
        }
    }

    #[test]
    fn test_timestamp_mutation_is_rejected() {
        let set = challenge_sig_set();
        let result = SlackSignature {
            timestamp: "1700000001",
            signature: set.signature,
        }
        .verify(set.body, set.secret, set.now, TOLERANCE);
        assert!(matches!(result, Err(CryptoError::SignatureMismatch)));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let mut set = challenge_sig_set();
        set.secret = "anotherSecret";
        assert!(matches!(verify(&set), Err(CryptoError::SignatureMismatch)));
    }

    #[test]
    fn test_empty_secret_is_rejected() {
        let set = challenge_sig_set();
        let signature = SlackSignature::compute(set.timestamp, set.body, "").unwrap();

        let result = SlackSignature {
            timestamp: set.timestamp,
            signature: &signature,
        }
        .verify(set.body, "", set.now, TOLERANCE);
        assert!(matches!(result, Err(CryptoError::EmptySecret)));
    }

    #[test]
    fn test_stale_timestamp_is_rejected() {
        let mut set = challenge_sig_set();
        set.now = 1700000000 + TOLERANCE as i64 + 1;
        assert!(matches!(
            verify(&set),
            Err(CryptoError::ExpiredTimestamp { .. })
        ));

        set.now = 1700000000 - TOLERANCE as i64 - 1;
        assert!(matches!(
            verify(&set),
            Err(CryptoError::ExpiredTimestamp { .. })
        ));

        set.now = 1700000000 + TOLERANCE as i64;
        verify(&set).unwrap();
    }

    #[test]
    fn test_malformed_headers_are_rejected() {
        let set = challenge_sig_set();

        for signature in [
            "",
            "v0=",
            "v0=zz",
            "v1=d534f0e96e0866037fd8bd46f32d3be84edb1d3840b694769c428f79022e699c",
            "d534f0e96e0866037fd8bd46f32d3be84edb1d3840b694769c428f79022e699c",
        ] {
            let result = SlackSignature {
                timestamp: set.timestamp,
                signature,
            }
            .verify(set.body, set.secret, set.now, TOLERANCE);
            assert!(result.is_err(), "signature '{signature}' should be rejected");
        }

        for timestamp in ["", "abc", "1700000000.5"] {
            let result = SlackSignature {
                timestamp,
                signature: set.signature,
            }
            .verify(set.body, set.secret, set.now, TOLERANCE);
            assert!(
                matches!(result, Err(CryptoError::InvalidTimestamp { .. })),
                "timestamp '{timestamp}' should be rejected"
            );
        }
    }
}
