//! Name/value attributes attached to nodes.

use compact_str::{CompactString, ToCompactString};
use facet::Facet;
use std::fmt;

/// A single `name="value"` attribute.
///
/// Values are stored as text. Numbers are converted once, at construction,
/// using their `Display` form (`64`, `1.5`). Nothing is escaped: a `"` inside
/// a value ends up verbatim in the output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Facet)]
pub struct Attribute {
    name: CompactString,
    value: CompactString,
}

impl Attribute {
    /// Create an attribute from any displayable value.
    ///
    /// `name` should not be empty. This is not checked: an empty name renders
    /// as `="value"`.
    ///
    /// ```
    /// use htmlsmith::Attribute;
    ///
    /// assert_eq!(Attribute::new("alt", "logo").render(), r#"alt="logo""#);
    /// assert_eq!(Attribute::new("width", 64).render(), r#"width="64""#);
    /// ```
    pub fn new(name: impl Into<CompactString>, value: impl fmt::Display) -> Self {
        Self {
            name: name.into(),
            value: value.to_compact_string(),
        }
    }

    /// `id="..."`
    pub fn id(value: impl fmt::Display) -> Self {
        Self::new("id", value)
    }

    /// `class="..."`
    pub fn class(value: impl fmt::Display) -> Self {
        Self::new("class", value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The `name="value"` form used inside start tags.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facet_testhelpers::test;

    #[test]
    fn test_render_string_value() {
        assert_eq!(Attribute::new("id", "x").render(), "id=\"x\"");
    }

    #[test]
    fn test_numeric_values_are_stored_as_text() {
        let width = Attribute::new("width", 256);
        assert_eq!(width.value(), "256");

        let negative = Attribute::new("tabindex", -1i64);
        assert_eq!(negative.value(), "-1");

        // Float formatting is whatever Display produces; only check it parses back.
        let ratio = Attribute::new("data-ratio", 0.5f64);
        assert_eq!(ratio.value().parse::<f64>().unwrap(), 0.5);
    }

    #[test]
    fn test_id_and_class_shortcuts() {
        assert_eq!(Attribute::id("main").render(), "id=\"main\"");
        assert_eq!(Attribute::class("wide").render(), "class=\"wide\"");
        assert_eq!(Attribute::class("wide"), Attribute::new("class", "wide"));
    }

    #[test]
    fn test_empty_name_is_not_rejected() {
        assert_eq!(Attribute::new("", "v").render(), "=\"v\"");
    }

    #[test]
    fn test_values_are_not_escaped() {
        let attr = Attribute::new("title", "say \"hi\" & <go>");
        assert_eq!(attr.render(), "title=\"say \"hi\" & <go>\"");
    }
}
