//! Entity-name normalization and the case helpers exposed to templates.

use cruet::Inflector;

/// Normalizes a user supplied entity name to its canonical camelCase form.
///
/// Hyphens, underscores and spaces are treated as word boundaries, so
/// `user-profile`, `user_profile` and `UserProfile` all become `userProfile`.
pub fn normalize_entity(name: &str) -> String {
    name.trim().to_camel_case()
}

/// Lower-cased form used for directory names, file names and Go package paths.
pub fn path_segment(entity: &str) -> String {
    entity.to_lowercase()
}

/// Delimiter-aware camelCase conversion.
pub fn to_camel_case(s: &str) -> String {
    s.to_camel_case()
}

/// Delimiter-aware PascalCase conversion, used for generated type names.
pub fn to_pascal_case(s: &str) -> String {
    s.to_pascal_case()
}

/// Legacy helper: upper-cases only the first character.
///
/// Kept for templates written against the older naming helpers. It does not
/// split on delimiters, `user_profile` stays `User_profile`.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Legacy helper: lower-cases only the first character. See [`upper_first`].
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_entity() {
        assert_eq!(normalize_entity("user"), "user");
        assert_eq!(normalize_entity("User"), "user");
        assert_eq!(normalize_entity("user-profile"), "userProfile");
        assert_eq!(normalize_entity("user_profile"), "userProfile");
        assert_eq!(normalize_entity(" UserProfile "), "userProfile");
    }

    #[test]
    fn test_path_segment() {
        assert_eq!(path_segment("userProfile"), "userprofile");
        assert_eq!(path_segment(""), "");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_pascal_case("userProfile"), "UserProfile");
        assert_eq!(to_pascal_case("order_item"), "OrderItem");
        assert_eq!(to_pascal_case("user"), "User");
    }

    #[test]
    fn test_legacy_helpers_only_touch_first_char() {
        assert_eq!(upper_first("user_profile"), "User_profile");
        assert_eq!(lower_first("UserProfile"), "userProfile");
        assert_eq!(upper_first(""), "");
        assert_eq!(lower_first(""), "");
    }
}
