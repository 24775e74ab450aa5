//! Indexed accelerator resolution
//!
//! Account and service fast-switch entries share one template (e.g.
//! `CmdOrCtrl+Number`) that is resolved per list position.

/// Placeholder token replaced with the 1-based slot digit
const NUMBER_TOKEN: &str = "Number";

/// Resolve an indexed accelerator template into a concrete keystroke.
///
/// `index` is the zero-based list position; positions past nine get no
/// accelerator at all. A missing template resolves to an empty string so
/// the entry still renders, just without a shortcut hint.
pub fn resolve_indexed_accelerator(template: Option<&str>, index: usize) -> Option<String> {
    if index > 9 {
        return None;
    }
    let Some(template) = template else {
        return Some(String::new());
    };
    Some(template.replace(NUMBER_TOKEN, &(index + 1).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_one_based_digit() {
        for index in 0..=9 {
            let resolved = resolve_indexed_accelerator(Some("Cmd+Number"), index);
            assert_eq!(resolved, Some(format!("Cmd+{}", index + 1)));
        }
    }

    #[test]
    fn test_out_of_range_index() {
        assert_eq!(resolve_indexed_accelerator(Some("Cmd+Number"), 10), None);
        assert_eq!(resolve_indexed_accelerator(Some("Cmd+Number"), 42), None);
    }

    #[test]
    fn test_missing_template() {
        assert_eq!(resolve_indexed_accelerator(None, 0), Some(String::new()));
    }

    #[test]
    fn test_empty_template() {
        assert_eq!(resolve_indexed_accelerator(Some(""), 3), Some(String::new()));
    }

    #[test]
    fn test_template_without_token_is_unchanged() {
        assert_eq!(
            resolve_indexed_accelerator(Some("Ctrl+T"), 5),
            Some("Ctrl+T".to_string())
        );
    }
}
