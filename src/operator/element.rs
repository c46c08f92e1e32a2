//! Operators over document elements

use super::{Member, Output};
use crate::designator::Designator;
use crate::document::{style, ElementHandle};
use crate::errors::{LineageError, LineageResult};
use crate::value::Value;

fn element<'a>(operator: &str, value: &'a Value) -> LineageResult<&'a ElementHandle> {
    value
        .as_element()
        .ok_or_else(|| LineageError::type_mismatch(operator, "element", value.kind()))
}

pub(super) fn opacity(operator: &str, value: &Value) -> LineageResult<Output> {
    let element = element(operator, value)?;
    let opacity = match element.computed_style("opacity") {
        // A node that reports nothing is at the initial value
        None => 1.0,
        Some(raw) => style::parse_number(&raw).ok_or_else(|| {
            LineageError::type_mismatch(operator, "numeric opacity", format!("\"{}\"", raw))
        })?,
    };
    Ok(Output::scalar(opacity))
}

pub(super) fn computed_style(operator: &str, property: &str, value: &Value) -> LineageResult<Output> {
    let element = element(operator, value)?;
    let computed = match element.computed_style(property) {
        None => Value::Null,
        Some(raw) => match style::parse_number(&raw) {
            Some(n) => Value::Number(n),
            None => Value::Text(raw),
        },
    };
    Ok(Output::Scalar(computed))
}

pub(super) fn find_by_selector(operator: &str, selector: &str, value: &Value) -> LineageResult<Output> {
    let element = element(operator, value)?;
    let members = element
        .query_selector_all(selector)?
        .into_iter()
        .enumerate()
        .map(|(index, found)| Member {
            value: Value::Element(found),
            step: Designator::selector_match(selector, index),
        })
        .collect();
    Ok(Output::Members(members))
}

#[cfg(test)]
mod tests {
    use crate::designator::Designator;
    use crate::document::{Document, ElementSpec};
    use crate::errors::LineageError;
    use crate::operator::{Operator, Output};
    use crate::value::Value;

    fn page() -> Document {
        Document::new(ElementSpec::new("body").children([
            ElementSpec::new("h2").id("h2").style("opacity", "0.25"),
            ElementSpec::new("p").style("font-size", "12px").style("color", "blue"),
            ElementSpec::new("p").style("opacity", "half"),
        ]))
    }

    #[test]
    fn test_opacity() {
        let doc = page();
        let h2 = doc.element_by_id("h2").unwrap();
        assert_eq!(
            Operator::Opacity.apply(&[h2.into()]).unwrap(),
            Output::Scalar(Value::from(0.25))
        );
        assert_eq!(
            Operator::Opacity.apply(&[doc.root().into()]).unwrap(),
            Output::Scalar(Value::from(1))
        );
    }

    #[test]
    fn test_opacity_requires_element() {
        let err = Operator::Opacity.apply(&[0.5.into()]).unwrap_err();
        assert_eq!(err, LineageError::type_mismatch("Opacity", "element", "number"));

        let doc = page();
        let bad = doc.root().query_selector_all("p").unwrap().remove(1);
        assert_eq!(err.code(), "LINEAGE_TYPE_MISMATCH");
        assert!(Operator::Opacity.apply(&[bad.into()]).is_err());
    }

    #[test]
    fn test_computed_style() {
        let doc = page();
        let p = doc.root().query_selector_all("p").unwrap().remove(0);
        let apply = |property: &str| match Operator::computed_style(property).apply(&[p.clone().into()]).unwrap() {
            Output::Scalar(v) => v,
            Output::Members(_) => panic!("expected a scalar"),
        };
        assert_eq!(apply("font-size"), Value::from(12));
        assert_eq!(apply("color"), Value::from("blue"));
        assert_eq!(apply("display"), Value::from("inline"));
        assert_eq!(apply("nothing"), Value::Null);
    }

    #[test]
    fn test_find_by_selector_members() {
        let doc = page();
        let output = Operator::find_by_selector("p").apply(&[doc.root().into()]).unwrap();
        let Output::Members(members) = output else {
            panic!("expected members");
        };
        assert_eq!(members.len(), 2);
        assert_eq!(members[1].step, Designator::selector_match("p", 1));
        assert!(matches!(members[0].value, Value::Element(_)));
    }

    #[test]
    fn test_find_by_selector_errors() {
        let doc = page();
        let err = Operator::find_by_selector("p >")
            .apply(&[doc.root().into()])
            .unwrap_err();
        assert_eq!(err.code(), "LINEAGE_INVALID_SELECTOR");

        let err = Operator::find_by_selector("p").apply(&[1.into()]).unwrap_err();
        assert_eq!(err.code(), "LINEAGE_TYPE_MISMATCH");
    }
}
