//! Atomic provenance steps

use std::fmt;

use serde::Serialize;

/// One step of a provenance path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Designator {
    /// The trivial step; neutral for composition
    Identity,
    /// The `index`-th element matching `selector`, in document order
    SelectorMatch { selector: String, index: usize },
    /// The computed value of a style property
    StyleProperty { property: String },
    /// Argument `index` of `operator`
    Operand { operator: String, index: usize },
    /// The value bound to a quantified variable
    Bound { name: String },
}

impl Designator {
    pub fn selector_match(selector: impl Into<String>, index: usize) -> Self {
        Designator::SelectorMatch {
            selector: selector.into(),
            index,
        }
    }

    pub fn style_property(property: impl Into<String>) -> Self {
        Designator::StyleProperty {
            property: property.into(),
        }
    }

    pub fn operand(operator: impl Into<String>, index: usize) -> Self {
        Designator::Operand {
            operator: operator.into(),
            index,
        }
    }

    pub fn bound(name: impl Into<String>) -> Self {
        Designator::Bound { name: name.into() }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Designator::Identity)
    }
}

impl fmt::Display for Designator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Designator::Identity => write!(f, "itself"),
            Designator::SelectorMatch { selector, index } => {
                write!(f, "element matching \"{}\" (match {})", selector, index)
            }
            Designator::StyleProperty { property } => write!(f, "{} of", property),
            Designator::Operand { operator, index } => {
                write!(f, "argument {} of {}", index, operator)
            }
            Designator::Bound { name } => write!(f, "bound to {}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_by_kind_and_parameters() {
        assert_eq!(Designator::selector_match("#h2", 0), Designator::selector_match("#h2", 0));
        assert_ne!(Designator::selector_match("#h2", 0), Designator::selector_match("#h2", 1));
        assert_ne!(Designator::bound("$x"), Designator::style_property("$x"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Designator::style_property("opacity").to_string(), "opacity of");
        assert_eq!(Designator::operand("GreaterThan", 1).to_string(), "argument 1 of GreaterThan");
        assert_eq!(Designator::bound("$x").to_string(), "bound to $x");
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(Designator::selector_match("p", 2)).unwrap();
        assert_eq!(json["kind"], "selector_match");
        assert_eq!(json["selector"], "p");
        assert_eq!(json["index"], 2);
    }
}
