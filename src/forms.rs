//! Form validation primitives shared by the checkout and listing forms.

use rustc_hash::FxHashMap;

/// Field-level validation results: field name to message.
pub type FieldErrors = FxHashMap<&'static str, &'static str>;

/// Message attached to a blank required field.
pub const REQUIRED: &str = "Required";

/// Collect a [`REQUIRED`] entry for every field that is blank after
/// trimming.
#[must_use]
pub fn required_fields<'a>(
    fields: impl IntoIterator<Item = (&'static str, &'a str)>,
) -> FieldErrors {
    fields
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| (name, REQUIRED))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_whitespace_fields_are_required() {
        let errors = required_fields([("name", ""), ("city", "   "), ("state", "CA")]);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name"), Some(&REQUIRED));
        assert_eq!(errors.get("city"), Some(&REQUIRED));
        assert_eq!(errors.get("state"), None);
    }

    #[test]
    fn all_filled_fields_yield_no_errors() {
        let errors = required_fields([("name", "a"), ("city", "b")]);

        assert!(errors.is_empty());
    }
}
