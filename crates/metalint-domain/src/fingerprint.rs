use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - document filename
/// - offending value (if present)
pub fn fingerprint_for(check_id: &str, code: &str, document: &str, value: Option<&str>) -> String {
    let mut parts = vec![check_id, code, document];
    if let Some(v) = value {
        parts.push(v);
    }
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
