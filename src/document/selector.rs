//! Selector parsing and matching
//!
//! Supported subset:
//! - type selectors (`h2`) and the universal selector (`*`)
//! - `#id`, `.class`, `[attr]`, `[attr=value]` (value bare or quoted)
//! - compound selectors (`h2.title#main`)
//! - descendant (whitespace) and child (`>`) combinators
//! - selector lists (`h1, h2`)
//!
//! Matching is right-to-left against the full ancestry of the element.

use std::sync::OnceLock;

use regex::Regex;

use super::errors::SelectorError;

fn identifier_pattern() -> &'static Regex {
    static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
    IDENTIFIER.get_or_init(|| {
        Regex::new(r"^-?[A-Za-z_][A-Za-z0-9_-]*").expect("identifier pattern is valid")
    })
}

/// Element view required by the matcher
pub trait Matchable: Clone {
    /// Lowercase tag name
    fn local_name(&self) -> &str;
    /// Value of the `id` attribute
    fn element_id(&self) -> Option<&str>;
    /// Whether the element carries `class`
    fn has_class(&self, class: &str) -> bool;
    /// Value of an attribute, lowercase name
    fn attribute(&self, name: &str) -> Option<&str>;
    /// Parent element, if any
    fn parent_element(&self) -> Option<Self>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttributeTest {
    Exists(String),
    Equals(String, String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CompoundSelector {
    /// `None` for the universal selector or when only qualifiers are given
    tag: Option<String>,
    ids: Vec<String>,
    classes: Vec<String>,
    attributes: Vec<AttributeTest>,
}

impl CompoundSelector {
    fn matches<E: Matchable>(&self, element: &E) -> bool {
        if let Some(tag) = &self.tag {
            if element.local_name() != tag {
                return false;
            }
        }
        if !self.ids.iter().all(|id| element.element_id() == Some(id.as_str())) {
            return false;
        }
        if !self.classes.iter().all(|class| element.has_class(class)) {
            return false;
        }
        self.attributes.iter().all(|test| match test {
            AttributeTest::Exists(name) => element.attribute(name).is_some(),
            AttributeTest::Equals(name, value) => element.attribute(name) == Some(value.as_str()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

/// One selector of a list: compounds joined by combinators, left to right
#[derive(Debug, Clone, PartialEq, Eq)]
struct ComplexSelector {
    compounds: Vec<CompoundSelector>,
    /// `combinators[i]` joins `compounds[i]` and `compounds[i + 1]`
    combinators: Vec<Combinator>,
}

impl ComplexSelector {
    fn matches<E: Matchable>(&self, element: &E) -> bool {
        let last = self.compounds.len() - 1;
        self.compounds[last].matches(element) && self.matches_left_of(last, element)
    }

    /// Checks compounds `0..index` given that `element` matched `compounds[index]`
    fn matches_left_of<E: Matchable>(&self, index: usize, element: &E) -> bool {
        if index == 0 {
            return true;
        }
        let compound = &self.compounds[index - 1];
        match self.combinators[index - 1] {
            Combinator::Child => element.parent_element().map_or(false, |parent| {
                compound.matches(&parent) && self.matches_left_of(index - 1, &parent)
            }),
            Combinator::Descendant => {
                let mut current = element.parent_element();
                while let Some(ancestor) = current {
                    if compound.matches(&ancestor) && self.matches_left_of(index - 1, &ancestor) {
                        return true;
                    }
                    current = ancestor.parent_element();
                }
                false
            }
        }
    }
}

/// A parsed, comma-separated list of selectors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    source: String,
    selectors: Vec<ComplexSelector>,
}

impl SelectorList {
    /// Parse a selector string
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        let selectors = Parser::new(source).parse_list()?;
        Ok(Self {
            source: source.to_string(),
            selectors,
        })
    }

    /// Returns the selector as written
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns true if any selector in the list matches `element`
    pub fn matches<E: Matchable>(&self, element: &E) -> bool {
        self.selectors.iter().any(|selector| selector.matches(element))
    }
}

struct Parser<'a> {
    source: &'a str,
    rest: &'a str,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            rest: source,
        }
    }

    fn error(&self, reason: impl Into<String>) -> SelectorError {
        SelectorError::new(self.source, reason)
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.rest = &self.rest[expected.len_utf8()..];
            true
        } else {
            false
        }
    }

    /// Skips whitespace, returns whether any was skipped
    fn skip_whitespace(&mut self) -> bool {
        let trimmed = self.rest.trim_start();
        let skipped = trimmed.len() != self.rest.len();
        self.rest = trimmed;
        skipped
    }

    fn identifier(&mut self) -> Option<String> {
        let found = identifier_pattern().find(self.rest)?;
        let ident = found.as_str().to_string();
        self.rest = &self.rest[found.end()..];
        Some(ident)
    }

    fn expect_identifier(&mut self, after: char) -> Result<String, SelectorError> {
        self.identifier()
            .ok_or_else(|| self.error(format!("expected identifier after '{}'", after)))
    }

    fn starts_compound(&self) -> bool {
        match self.peek() {
            Some(c) => c.is_ascii_alphabetic() || matches!(c, '_' | '-' | '*' | '#' | '.' | '['),
            None => false,
        }
    }

    fn parse_list(mut self) -> Result<Vec<ComplexSelector>, SelectorError> {
        let mut selectors = Vec::new();
        loop {
            self.skip_whitespace();
            selectors.push(self.parse_complex()?);
            self.skip_whitespace();
            match self.peek() {
                None => break,
                Some(',') => {
                    self.eat(',');
                }
                Some(c) => return Err(self.error(format!("unexpected character '{}'", c))),
            }
        }
        Ok(selectors)
    }

    fn parse_complex(&mut self) -> Result<ComplexSelector, SelectorError> {
        let mut compounds = vec![self.parse_compound()?];
        let mut combinators = Vec::new();
        loop {
            let had_whitespace = self.skip_whitespace();
            if self.eat('>') {
                self.skip_whitespace();
                combinators.push(Combinator::Child);
            } else if had_whitespace && self.starts_compound() {
                combinators.push(Combinator::Descendant);
            } else {
                break;
            }
            compounds.push(self.parse_compound()?);
        }
        Ok(ComplexSelector {
            compounds,
            combinators,
        })
    }

    fn parse_compound(&mut self) -> Result<CompoundSelector, SelectorError> {
        let mut compound = CompoundSelector::default();
        let mut seen_any = false;

        if self.eat('*') {
            seen_any = true;
        } else if let Some(tag) = self.identifier() {
            compound.tag = Some(tag.to_ascii_lowercase());
            seen_any = true;
        }

        loop {
            if self.eat('#') {
                let id = self.expect_identifier('#')?;
                compound.ids.push(id);
            } else if self.eat('.') {
                let class = self.expect_identifier('.')?;
                compound.classes.push(class);
            } else if self.eat('[') {
                let test = self.parse_attribute()?;
                compound.attributes.push(test);
            } else {
                break;
            }
            seen_any = true;
        }

        if !seen_any {
            return Err(match self.peek() {
                Some(c) => self.error(format!("unexpected character '{}'", c)),
                None => self.error("expected a selector"),
            });
        }
        Ok(compound)
    }

    fn parse_attribute(&mut self) -> Result<AttributeTest, SelectorError> {
        self.skip_whitespace();
        let name = self.expect_identifier('[')?.to_ascii_lowercase();
        self.skip_whitespace();
        if self.eat(']') {
            return Ok(AttributeTest::Exists(name));
        }
        if !self.eat('=') {
            return Err(self.error("expected '=' or ']' in attribute selector"));
        }
        self.skip_whitespace();
        let value = match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.eat(quote);
                let end = self
                    .rest
                    .find(quote)
                    .ok_or_else(|| self.error("unterminated string in attribute selector"))?;
                let value = self.rest[..end].to_string();
                self.rest = &self.rest[end + 1..];
                value
            }
            _ => self.expect_identifier('=')?,
        };
        self.skip_whitespace();
        if !self.eat(']') {
            return Err(self.error("expected ']' to close attribute selector"));
        }
        Ok(AttributeTest::Equals(name, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compound() {
        let list = SelectorList::parse("H2.title#main[data-x='1']").unwrap();
        let compound = &list.selectors[0].compounds[0];
        assert_eq!(compound.tag.as_deref(), Some("h2"));
        assert_eq!(compound.ids, vec!["main".to_string()]);
        assert_eq!(compound.classes, vec!["title".to_string()]);
        assert_eq!(
            compound.attributes,
            vec![AttributeTest::Equals("data-x".into(), "1".into())]
        );
    }

    #[test]
    fn test_parse_combinators_and_lists() {
        let list = SelectorList::parse("body > div p, h1").unwrap();
        assert_eq!(list.selectors.len(), 2);
        assert_eq!(
            list.selectors[0].combinators,
            vec![Combinator::Child, Combinator::Descendant]
        );
        assert_eq!(list.selectors[1].compounds.len(), 1);
        assert_eq!(list.source(), "body > div p, h1");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for source in ["", "   ", "#", ".", "h2,", "[x", "[x=]", "a >", "h2 !", "[x=\"open]"] {
            let err = SelectorList::parse(source).unwrap_err();
            assert_eq!(err.selector(), source, "for {:?}", source);
        }
    }

    #[test]
    fn test_universal_selector() {
        let list = SelectorList::parse("*").unwrap();
        assert_eq!(list.selectors[0].compounds[0], CompoundSelector::default());
    }
}
