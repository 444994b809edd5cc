//! Selector matching
//!
//! The subset of CSS selectors the behaviors query with: selector lists
//! of compound selectors (`tag`, `*`, `#id`, `.class`, `[attr]`,
//! `[attr="v"]`, `:not(...)`). Combinators are rejected.

use crate::{DomError, ElementData, Result};

/// Simple selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Universal,
    Tag(String),
    Id(String),
    Class(String),
    Attr { name: String, value: Option<String> },
    Not(Box<Compound>),
}

impl Selector {
    pub fn matches(&self, element: &ElementData) -> bool {
        match self {
            Self::Universal => true,
            Self::Tag(tag) => element.tag.eq_ignore_ascii_case(tag),
            Self::Id(id) => element.id() == Some(id.as_str()),
            Self::Class(class) => element.has_class(class),
            Self::Attr { name, value: None } => element.has_attr(name),
            Self::Attr {
                name,
                value: Some(v),
            } => element.get_attr(name) == Some(v.as_str()),
            Self::Not(inner) => !inner.matches(element),
        }
    }
}

/// Compound selector: every part must match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compound {
    pub parts: Vec<Selector>,
}

impl Compound {
    pub fn matches(&self, element: &ElementData) -> bool {
        self.parts.iter().all(|p| p.matches(element))
    }
}

/// Comma-separated selector list: any compound may match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList {
    pub compounds: Vec<Compound>,
}

impl SelectorList {
    pub fn parse(input: &str) -> Result<Self> {
        let mut parser = Parser {
            input,
            chars: input.char_indices().peekable(),
        };
        let mut compounds = vec![parser.compound()?];
        loop {
            parser.skip_ws();
            match parser.chars.next() {
                None => break,
                Some((_, ',')) => {
                    parser.skip_ws();
                    compounds.push(parser.compound()?);
                }
                Some((_, c)) => {
                    return Err(parser.error(format!("unexpected '{c}'")));
                }
            }
        }
        Ok(Self { compounds })
    }

    pub fn matches(&self, element: &ElementData) -> bool {
        self.compounds.iter().any(|c| c.matches(element))
    }
}

struct Parser<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl Parser<'_> {
    fn error(&self, reason: impl Into<String>) -> DomError {
        DomError::InvalidSelector {
            selector: self.input.to_string(),
            reason: reason.into(),
        }
    }

    fn skip_ws(&mut self) {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn ident(&mut self) -> Result<String> {
        let mut out = String::new();
        while let Some((_, c)) = self
            .chars
            .next_if(|(_, c)| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        {
            out.push(c);
        }
        if out.is_empty() {
            Err(self.error("expected identifier"))
        } else {
            Ok(out)
        }
    }

    fn expect(&mut self, want: char) -> Result<()> {
        match self.chars.next() {
            Some((_, c)) if c == want => Ok(()),
            Some((_, c)) => Err(self.error(format!("expected '{want}', found '{c}'"))),
            None => Err(self.error(format!("expected '{want}'"))),
        }
    }

    fn compound(&mut self) -> Result<Compound> {
        let mut parts = Vec::new();

        match self.peek() {
            Some('*') => {
                self.chars.next();
                parts.push(Selector::Universal);
            }
            Some(c) if c.is_ascii_alphabetic() => {
                parts.push(Selector::Tag(self.ident()?.to_ascii_lowercase()));
            }
            _ => {}
        }

        loop {
            match self.peek() {
                Some('#') => {
                    self.chars.next();
                    parts.push(Selector::Id(self.ident()?));
                }
                Some('.') => {
                    self.chars.next();
                    parts.push(Selector::Class(self.ident()?));
                }
                Some('[') => {
                    self.chars.next();
                    parts.push(self.attribute()?);
                }
                Some(':') => {
                    self.chars.next();
                    let name = self.ident()?;
                    if !name.eq_ignore_ascii_case("not") {
                        return Err(self.error(format!("unsupported pseudo-class ':{name}'")));
                    }
                    self.expect('(')?;
                    self.skip_ws();
                    let inner = self.compound()?;
                    self.skip_ws();
                    self.expect(')')?;
                    parts.push(Selector::Not(Box::new(inner)));
                }
                _ => break,
            }
        }

        if parts.is_empty() {
            return Err(self.error("empty compound selector"));
        }
        // Whitespace followed by anything but a comma would be a combinator
        self.skip_ws();
        match self.peek() {
            None | Some(',') | Some(')') => Ok(Compound { parts }),
            Some(_) => Err(self.error("combinators are not supported")),
        }
    }

    fn attribute(&mut self) -> Result<Selector> {
        self.skip_ws();
        let name = self.ident()?.to_ascii_lowercase();
        self.skip_ws();
        let value = if self.chars.next_if(|(_, c)| *c == '=').is_some() {
            self.skip_ws();
            Some(self.attr_value()?)
        } else {
            None
        };
        self.skip_ws();
        self.expect(']')?;
        Ok(Selector::Attr { name, value })
    }

    fn attr_value(&mut self) -> Result<String> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.chars.next();
                let mut out = String::new();
                loop {
                    match self.chars.next() {
                        Some((_, c)) if c == quote => return Ok(out),
                        Some((_, c)) => out.push(c),
                        None => return Err(self.error("unterminated string")),
                    }
                }
            }
            _ => self.ident(),
        }
    }
}
