//! Class list composition.

/// Joins class lists in order, dropping blanks and repeated classes.
///
/// Earlier lists win: a class already present is not appended again, so a
/// caller modifier can extend base styling but never reorder or drop it.
pub fn compose_classes<'a>(lists: impl IntoIterator<Item = &'a str>) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for list in lists {
        for class in list.split_whitespace() {
            if !seen.contains(&class) {
                seen.push(class);
            }
        }
    }
    seen.join(" ")
}

/// Base classes extended by an optional caller modifier.
pub fn with_modifier(base: &str, modifier: Option<&str>) -> String {
    compose_classes([base, modifier.unwrap_or("")])
}

#[cfg(test)]
mod tests {
    use super::{compose_classes, with_modifier};

    #[test]
    fn modifier_is_appended_after_base() {
        assert_eq!(with_modifier("p-4 border", Some("mt-2")), "p-4 border mt-2");
    }

    #[test]
    fn missing_or_blank_modifier_keeps_base_only() {
        assert_eq!(with_modifier(" p-4  border ", None), "p-4 border");
        assert_eq!(with_modifier("p-4 border", Some("   ")), "p-4 border");
    }

    #[test]
    fn repeated_classes_are_dropped() {
        assert_eq!(
            compose_classes(["p-4 border", "border p-4 shadow", "shadow"]),
            "p-4 border shadow"
        );
    }
}
