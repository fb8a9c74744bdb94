//! Checksum calculation for dataset deduplication and versioning.

use sha2::{Digest, Sha256};

/// Calculate SHA-256 checksum of catalog JSON content.
///
/// The hexadecimal digest identifies a dataset version: equal content
/// always hashes to the same version, so re-storing an identical catalog
/// is detected without parsing it.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_consistency() {
        let content = r#"{"universities": []}"#;
        let checksum1 = calculate_checksum(content);
        let checksum2 = calculate_checksum(content);
        assert_eq!(checksum1, checksum2);
    }

    #[test]
    fn test_different_content_different_checksum() {
        let content1 = r#"{"universities": []}"#;
        let content2 = r#"{"universities": [{}]}"#;
        assert_ne!(calculate_checksum(content1), calculate_checksum(content2));
    }
}
