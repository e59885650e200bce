//! Airtable formula builder.
//!
//! Values are always emitted as escaped string literals, never spliced into
//! the formula verbatim.

use crate::domain::agents::repository::EqualityFilter;

/// Render `filter` as an Airtable `filterByFormula` expression.
#[must_use]
pub fn equality_formula(filter: &EqualityFilter) -> String {
    format!(
        "{} = {}",
        field_reference(filter.field()),
        string_literal(filter.value())
    )
}

/// Reference a field by name, e.g. `{Ramal}`.
///
/// Field names come from code, not from callers; braces cannot be escaped
/// inside a reference, so they are dropped.
#[must_use]
pub fn field_reference(name: &str) -> String {
    let name: String = name.chars().filter(|c| !matches!(c, '{' | '}')).collect();

    format!("{{{name}}}")
}

/// Quote `value` as a single-quoted formula string literal.
#[must_use]
pub fn string_literal(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);

    quoted.push('\'');

    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            other => quoted.push(other),
        }
    }

    quoted.push('\'');

    quoted
}

#[cfg(test)]
mod tests {
    use crate::domain::agents::records::RAMAL_FIELD;

    use super::*;

    #[test]
    fn plain_value_renders_equality() {
        let filter = EqualityFilter::new(RAMAL_FIELD, "1234");

        assert_eq!(equality_formula(&filter), "{Ramal} = '1234'");
    }

    #[test]
    fn quotes_cannot_break_out_of_the_literal() {
        let filter = EqualityFilter::new(RAMAL_FIELD, "1' OR TRUE() OR '1");

        assert_eq!(
            equality_formula(&filter),
            r"{Ramal} = '1\' OR TRUE() OR \'1'"
        );
    }

    #[test]
    fn backslashes_are_escaped_before_quotes() {
        assert_eq!(string_literal(r"a\'b"), r"'a\\\'b'");
    }

    #[test]
    fn control_characters_are_escaped() {
        assert_eq!(string_literal("a\nb\tc"), r"'a\nb\tc'");
    }

    #[test]
    fn field_reference_strips_braces() {
        assert_eq!(field_reference("Ra}mal"), "{Ramal}");
    }
}
