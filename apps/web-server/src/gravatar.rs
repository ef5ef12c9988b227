//! Gravatar avatar URLs for comment authors.

/// Build the Gravatar URL for an email address: md5 of the trimmed,
/// lowercased address, size 100, "retro" fallback, rating "g".
pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = md5::compute(normalized.as_bytes());
    format!("https://www.gravatar.com/avatar/{digest:x}?s=100&d=retro&r=g")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(
            gravatar_url(" Ada@Example.COM "),
            gravatar_url("ada@example.com")
        );
    }

    #[test]
    fn hashes_the_normalized_address() {
        // md5("") is the well-known empty digest.
        assert_eq!(
            gravatar_url("   "),
            "https://www.gravatar.com/avatar/d41d8cd98f00b204e9800998ecf8427e?s=100&d=retro&r=g"
        );
    }
}
