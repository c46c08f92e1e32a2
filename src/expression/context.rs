//! Binding context
//!
//! A context is a persistent scope chain. Extending it allocates one new link
//! and leaves the parent untouched, so leaving a quantifier scope is just
//! dropping the extended context.

use std::rc::Rc;

use super::reference::Reference;
use crate::designator::DesignatedObject;
use crate::errors::{LineageError, LineageResult};
use crate::value::Value;

/// What a reference resolves to
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    /// Raw value handed to operators
    value: Value,
    /// Leaf reported in witnesses
    leaf: DesignatedObject,
}

impl Binding {
    pub fn new(value: Value, leaf: DesignatedObject) -> Self {
        Self { value, leaf }
    }

    /// A root input: the value is its own leaf, with the trivial path
    pub fn input(value: Value) -> Self {
        let leaf = DesignatedObject::leaf(value.clone());
        Self { value, leaf }
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn leaf(&self) -> &DesignatedObject {
        &self.leaf
    }
}

#[derive(Debug)]
struct Scope {
    name: String,
    binding: Binding,
    parent: Option<Rc<Scope>>,
}

/// Bindings visible during one evaluation
#[derive(Debug, Clone)]
pub struct Context {
    inputs: Rc<[Binding]>,
    scope: Option<Rc<Scope>>,
}

impl Context {
    /// A context whose positional references address `inputs`
    pub fn new(inputs: impl IntoIterator<Item = Value>) -> Self {
        let inputs: Vec<Binding> = inputs.into_iter().map(Binding::input).collect();
        Self {
            inputs: Rc::from(inputs),
            scope: None,
        }
    }

    /// Returns a context with `name` bound, shadowing any outer binding
    pub fn extend(&self, name: impl Into<String>, binding: Binding) -> Context {
        Context {
            inputs: Rc::clone(&self.inputs),
            scope: Some(Rc::new(Scope {
                name: name.into(),
                binding,
                parent: self.scope.clone(),
            })),
        }
    }

    /// Resolves a reference against inputs and the innermost binding
    pub fn resolve(&self, reference: &Reference) -> LineageResult<&Binding> {
        let found = match reference {
            Reference::Positional(index) => self.inputs.get(*index),
            Reference::Named(name) => {
                let mut current = self.scope.as_deref();
                loop {
                    match current {
                        Some(scope) if scope.name == *name => break Some(&scope.binding),
                        Some(scope) => current = scope.parent.as_deref(),
                        None => break None,
                    }
                }
            }
        };
        found.ok_or_else(|| LineageError::UnboundReference(reference.to_string()))
    }

    /// Number of root inputs
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::designator::{CompoundDesignator, Designator};

    fn bound(value: i32, name: &str) -> Binding {
        Binding::new(
            Value::from(value),
            DesignatedObject::new(value, CompoundDesignator::single(Designator::bound(name))),
        )
    }

    #[test]
    fn test_positional_inputs() {
        let ctx = Context::new([Value::from(100), Value::from("a")]);
        assert_eq!(ctx.input_count(), 2);
        let binding = ctx.resolve(&Reference::input(0)).unwrap();
        assert_eq!(binding.value(), &Value::from(100));
        assert!(binding.leaf().designator().is_trivial());
        assert_eq!(
            ctx.resolve(&Reference::input(2)).unwrap_err(),
            LineageError::UnboundReference("@2".into())
        );
    }

    #[test]
    fn test_extension_does_not_mutate_parent() {
        let root = Context::new([]);
        let inner = root.extend("$x", bound(1, "$x"));
        assert!(inner.resolve(&Reference::named("$x")).is_ok());
        assert!(root.resolve(&Reference::named("$x")).is_err());
    }

    #[test]
    fn test_shadowing() {
        let outer = Context::new([]).extend("$x", bound(1, "$x"));
        let inner = outer.extend("$y", bound(2, "$y")).extend("$x", bound(3, "$x"));
        assert_eq!(inner.resolve(&Reference::named("$x")).unwrap().value(), &Value::from(3));
        assert_eq!(inner.resolve(&Reference::named("$y")).unwrap().value(), &Value::from(2));
        assert_eq!(outer.resolve(&Reference::named("$x")).unwrap().value(), &Value::from(1));
    }
}
