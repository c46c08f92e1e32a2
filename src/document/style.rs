//! Computed style defaults
//!
//! A property without an inline value takes its parent's computed value if
//! it is inherited, its initial value otherwise.

const INHERITED: &[&str] = &[
    "color",
    "cursor",
    "font-family",
    "font-size",
    "font-style",
    "font-weight",
    "letter-spacing",
    "line-height",
    "text-align",
    "visibility",
    "white-space",
];

const INITIAL: &[(&str, &str)] = &[
    ("background-color", "rgba(0, 0, 0, 0)"),
    ("color", "rgb(0, 0, 0)"),
    ("display", "inline"),
    ("font-size", "16px"),
    ("font-style", "normal"),
    ("font-weight", "400"),
    ("height", "auto"),
    ("opacity", "1"),
    ("position", "static"),
    ("visibility", "visible"),
    ("width", "auto"),
    ("z-index", "auto"),
];

/// Returns true if the property inherits from the parent element
pub(crate) fn is_inherited(property: &str) -> bool {
    INHERITED.contains(&property)
}

/// Returns the initial value of a property, if one is known
pub(crate) fn initial_value(property: &str) -> Option<&'static str> {
    INITIAL
        .iter()
        .find(|(name, _)| *name == property)
        .map(|(_, value)| *value)
}

/// Parses a computed value as a number: plain numbers and `px` lengths
pub(crate) fn parse_number(value: &str) -> Option<f64> {
    let value = value.trim();
    let digits = value.strip_suffix("px").unwrap_or(value);
    digits.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}
