//! Artifact name resolution.
//!
//! Turns the raw, user-typed artifact name into an ordered list of nesting
//! segments plus a leaf name. Resolution is pure: same input, same output,
//! no filesystem or registry access.

use crate::domain::error::DomainError;

/// A raw name split into nesting segments and a leaf.
///
/// `"Admin/Billing/Invoice"` resolves to segments `["Admin", "Billing"]`
/// and leaf `"Invoice"`. Segments never contain empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    /// Nesting segments, outermost first. May be empty.
    pub segments: Vec<String>,
    /// The artifact's own name, before any suffixing.
    pub leaf: String,
}

impl ResolvedName {
    /// Resolve a raw name against a kind's root token.
    ///
    /// Rules, applied in order:
    ///
    /// 1. Surrounding whitespace is trimmed; an empty result is rejected.
    /// 2. `/` and `\` both separate segments and may be mixed freely.
    /// 3. Each segment is trimmed; empty segments (doubled or dangling
    ///    separators) are dropped. A name with no segments left is rejected.
    /// 4. A single leading segment that case-insensitively equals
    ///    `root_token` is stripped, but only when further segments follow:
    ///    `Service/User` and `User` resolve identically, while a bare
    ///    `Service` stays a leaf.
    /// 5. The final segment becomes the leaf; the rest keep their order.
    pub fn parse(raw: &str, root_token: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid_name(raw, "name is empty"));
        }

        let mut parts: Vec<String> = trimmed
            .split(['/', '\\'])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect();

        if parts.is_empty() {
            return Err(DomainError::invalid_name(raw, "name has no segments"));
        }

        // Strip a re-typed destination root, e.g. `Service/User` for the
        // service kind. Never strips the leaf itself.
        if parts.len() > 1 && parts[0].eq_ignore_ascii_case(root_token) {
            parts.remove(0);
        }

        let leaf = match parts.pop() {
            Some(leaf) => leaf,
            None => return Err(DomainError::invalid_name(raw, "name has no segments")),
        };

        Ok(Self {
            segments: parts,
            leaf,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(raw: &str) -> ResolvedName {
        ResolvedName::parse(raw, "Service").unwrap()
    }

    #[test]
    fn plain_leaf_resolves_with_no_segments() {
        let name = resolve("User");
        assert!(name.segments.is_empty());
        assert_eq!(name.leaf, "User");
    }

    #[test]
    fn forward_and_back_slashes_resolve_identically() {
        assert_eq!(resolve("User/CreateUser"), resolve("User\\CreateUser"));
    }

    #[test]
    fn mixed_separators_resolve() {
        let name = resolve("Admin\\Billing/Invoice");
        assert_eq!(name.segments, vec!["Admin", "Billing"]);
        assert_eq!(name.leaf, "Invoice");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(resolve("  User  "), resolve("User"));
    }

    #[test]
    fn segments_are_trimmed_individually() {
        let name = resolve("User / CreateUser");
        assert_eq!(name.segments, vec!["User"]);
        assert_eq!(name.leaf, "CreateUser");
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = ResolvedName::parse("", "Service").unwrap_err();
        assert!(matches!(err, DomainError::InvalidName { .. }));
    }

    #[test]
    fn whitespace_only_name_is_rejected() {
        assert!(ResolvedName::parse("   ", "Service").is_err());
    }

    #[test]
    fn separator_only_name_is_rejected() {
        assert!(ResolvedName::parse("/", "Service").is_err());
        assert!(ResolvedName::parse("\\\\//", "Service").is_err());
    }

    #[test]
    fn doubled_separators_are_collapsed() {
        let name = resolve("User//CreateUser");
        assert_eq!(name.segments, vec!["User"]);
        assert_eq!(name.leaf, "CreateUser");
    }

    #[test]
    fn dangling_separator_is_ignored() {
        let name = resolve("User/");
        assert!(name.segments.is_empty());
        assert_eq!(name.leaf, "User");
    }

    #[test]
    fn leading_root_token_is_stripped() {
        let name = resolve("Service/User");
        assert!(name.segments.is_empty());
        assert_eq!(name.leaf, "User");
    }

    #[test]
    fn root_token_strip_is_case_insensitive() {
        assert_eq!(resolve("SERVICE\\User"), resolve("User"));
        assert_eq!(resolve("service/User"), resolve("User"));
    }

    #[test]
    fn bare_root_token_stays_a_leaf() {
        let name = resolve("Service");
        assert!(name.segments.is_empty());
        assert_eq!(name.leaf, "Service");
    }

    #[test]
    fn only_the_first_occurrence_is_stripped() {
        let name = resolve("Service/Service/User");
        assert_eq!(name.segments, vec!["Service"]);
        assert_eq!(name.leaf, "User");
    }

    #[test]
    fn inner_root_token_is_preserved() {
        let name = resolve("Admin/Service/User");
        assert_eq!(name.segments, vec!["Admin", "Service"]);
        assert_eq!(name.leaf, "User");
    }
}
