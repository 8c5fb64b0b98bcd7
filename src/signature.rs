use crate::domain::event::EventEnvelope;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    InvalidSignature(String),
    MalformedPayload(String),
}

impl std::fmt::Display for VerifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerifyError::InvalidSignature(reason) => write!(f, "invalid signature: {}", reason),
            VerifyError::MalformedPayload(reason) => write!(f, "malformed payload: {}", reason),
        }
    }
}

impl std::error::Error for VerifyError {}

pub struct SignatureHeader {
    pub timestamp: i64,
    pub signatures: Vec<Vec<u8>>,
}

pub fn parse_signature_header(header: &str) -> Option<SignatureHeader> {
    let mut timestamp = None;
    let mut signatures = Vec::new();

    for part in header.split(',') {
        match part.trim().split_once('=') {
            Some(("t", value)) => timestamp = value.parse::<i64>().ok(),
            Some(("v1", value)) => {
                if let Ok(bytes) = hex::decode(value) {
                    signatures.push(bytes);
                }
            }
            _ => {}
        }
    }

    let timestamp = timestamp?;
    if signatures.is_empty() {
        return None;
    }

    Some(SignatureHeader { timestamp, signatures })
}

pub fn verify_payload(
    payload: &[u8],
    header: &str,
    secret: &str,
    tolerance_secs: i64,
    now: i64,
) -> Result<(), VerifyError> {
    let parsed = parse_signature_header(header)
        .ok_or_else(|| VerifyError::InvalidSignature("unparseable signature header".to_string()))?;

    if (now - parsed.timestamp).abs() > tolerance_secs {
        return Err(VerifyError::InvalidSignature(
            "timestamp outside tolerance window".to_string(),
        ));
    }

    let mut matched = false;
    for candidate in &parsed.signatures {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .map_err(|_| VerifyError::InvalidSignature("unusable secret".to_string()))?;
        mac.update(parsed.timestamp.to_string().as_bytes());
        mac.update(b".");
        mac.update(payload);
        if mac.verify_slice(candidate).is_ok() {
            matched = true;
        }
    }

    if !matched {
        return Err(VerifyError::InvalidSignature("signature mismatch".to_string()));
    }

    Ok(())
}

pub fn verify_event(
    payload: &[u8],
    header: &str,
    secret: &str,
    tolerance_secs: i64,
    now: i64,
) -> Result<EventEnvelope, VerifyError> {
    verify_payload(payload, header, secret, tolerance_secs, now)?;
    serde_json::from_slice(payload).map_err(|e| VerifyError::MalformedPayload(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_timestamp_and_signatures() {
        let parsed = parse_signature_header("t=1700000000,v1=deadbeef,v1=cafe").unwrap();
        assert_eq!(parsed.timestamp, 1_700_000_000);
        assert_eq!(parsed.signatures.len(), 2);
        assert_eq!(parsed.signatures[0], vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn ignores_unknown_scheme_entries() {
        let parsed = parse_signature_header("t=1700000000,v0=ffff,v1=beef").unwrap();
        assert_eq!(parsed.signatures.len(), 1);
    }

    #[test]
    fn rejects_header_without_timestamp() {
        assert!(parse_signature_header("v1=deadbeef").is_none());
    }

    #[test]
    fn rejects_header_without_signature() {
        assert!(parse_signature_header("t=1700000000").is_none());
        assert!(parse_signature_header("t=1700000000,v1=not-hex").is_none());
    }
}
