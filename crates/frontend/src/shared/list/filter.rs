//! In-memory text search over the rows of the current page.

/// Extracts one searchable field from a row
pub type FieldAccessor<T> = fn(&T) -> String;

/// Case-insensitive substring match on any of `fields`
pub fn matches<T>(item: &T, needle_lower: &str, fields: &[FieldAccessor<T>]) -> bool {
    fields
        .iter()
        .any(|field| field(item).to_lowercase().contains(needle_lower))
}

/// Rows where at least one field contains `term`. A blank term keeps every
/// row. Only the rows passed in are searched, so on a paginated table
/// matches on other pages are not found.
pub fn filter_items<T: Clone>(items: &[T], term: &str, fields: &[FieldAccessor<T>]) -> Vec<T> {
    let term = term.trim();
    if term.is_empty() {
        return items.to_vec();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| matches(*item, &needle, fields))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct User {
        name: String,
        email: String,
    }

    const FIELDS: &[FieldAccessor<User>] = &[|u| u.name.clone(), |u| u.email.clone()];

    fn page() -> Vec<User> {
        (0..15)
            .map(|i| {
                let name = match i {
                    3 => "John Smith".to_string(),
                    9 => "Mary".to_string(),
                    _ => format!("User {}", i),
                };
                let email = match i {
                    9 => "JOHNNY@example.com".to_string(),
                    _ => format!("user{}@example.com", i),
                };
                User { name, email }
            })
            .collect()
    }

    #[test]
    fn test_search_matches_any_field_case_insensitive() {
        let found = filter_items(&page(), "john", FIELDS);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "John Smith");
        assert_eq!(found[1].name, "Mary");
    }

    #[test]
    fn test_blank_term_is_identity() {
        assert_eq!(filter_items(&page(), "", FIELDS), page());
        assert_eq!(filter_items(&page(), "   ", FIELDS), page());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = filter_items(&page(), "user 1", FIELDS);
        let twice = filter_items(&once, "user 1", FIELDS);
        assert_eq!(once, twice);
        assert!(!once.is_empty());
    }

    #[test]
    fn test_no_match() {
        assert!(filter_items(&page(), "zzz", FIELDS).is_empty());
    }
}
