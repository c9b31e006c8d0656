//! URL slug generation for page anchors
//!
//! Anchors have to survive as URL fragments, so names are reduced to
//! lowercase ASCII alphanumerics separated by single hyphens.

/// Generate a URL-safe slug from a string.
///
/// Converts the input string to lowercase, replaces non-alphanumeric
/// characters with hyphens, collapses multiple consecutive hyphens,
/// and trims leading/trailing hyphens.
///
/// # Examples
///
/// ```
/// use docsite_etch::site::slug::slug;
///
/// assert_eq!(slug("ServiceBroker"), "servicebroker");
/// assert_eq!(slug("Context-call"), "context-call");
/// assert_eq!(slug("$emit"), "emit");
/// ```
pub fn slug(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '-',
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Generate a unique slug by appending a suffix if needed.
///
/// If the base slug conflicts with existing slugs, appends
/// a numeric suffix to make it unique.
pub fn unique_slug(base: &str, existing: &[String]) -> String {
    let base_slug = slug(base);

    if !existing.contains(&base_slug) {
        return base_slug;
    }

    let mut counter = 1;
    loop {
        let candidate = format!("{}-{}", base_slug, counter);
        if !existing.contains(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_basic() {
        assert_eq!(slug("Service Broker"), "service-broker");
        assert_eq!(slug("call"), "call");
        assert_eq!(slug("PROTOCOL_VERSION"), "protocol-version");
    }

    #[test]
    fn test_slug_edge_cases() {
        assert_eq!(slug(""), "");
        assert_eq!(slug("---"), "");
        assert_eq!(slug("a--b"), "a-b");
        assert_eq!(slug("_localCall"), "localcall");
        assert_eq!(slug("v0.14"), "v0-14");
    }

    #[test]
    fn test_unique_slug() {
        let existing = vec!["call".to_string(), "emit".to_string()];
        assert_eq!(unique_slug("broadcast", &existing), "broadcast");
        assert_eq!(unique_slug("call", &existing), "call-1");

        let existing_with_suffix =
            vec!["call".to_string(), "call-1".to_string(), "call-2".to_string()];
        assert_eq!(unique_slug("Call", &existing_with_suffix), "call-3");
    }
}
