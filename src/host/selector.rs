// ============================================================================
// SELECTORES - Motor de querySelector para el host en memoria
// ============================================================================
// Soporta listas (`a, b`), combinadores descendiente y `>`, tipo/universal,
// `#id`, `.clase` y `[atributo]` con los operadores = ~= |= ^= $= *=.
// Pseudo-clases y combinadores `+`/`~` devuelven NotSupported.
// ============================================================================

use crate::host::DomError;

/// Vista mínima de un elemento para evaluar selectores
pub trait SelectorElement: Sized {
    /// Nombre local en minúsculas; `None` si no es un elemento
    fn local_name(&self) -> Option<String>;
    fn attribute(&self, name: &str) -> Option<String>;
    fn parent_element(&self) -> Option<Self>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectorList {
    selectors: Vec<ComplexSelector>,
}

#[derive(Debug, Clone, PartialEq)]
struct ComplexSelector {
    parts: Vec<Compound>,
    // combinators[i] une parts[i] con parts[i + 1]
    combinators: Vec<Combinator>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Compound {
    tag: Option<String>,
    ids: Vec<String>,
    classes: Vec<String>,
    attributes: Vec<AttributeSelector>,
}

#[derive(Debug, Clone, PartialEq)]
struct AttributeSelector {
    name: String,
    matcher: Option<(AttributeOp, String)>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum AttributeOp {
    Equals,
    Includes,
    DashMatch,
    Prefix,
    Suffix,
    Substring,
}

impl SelectorList {
    pub fn parse(input: &str) -> Result<Self, DomError> {
        Parser::new(input).parse_list()
    }

    pub fn matches<E: SelectorElement>(&self, element: &E) -> bool {
        self.selectors.iter().any(|selector| selector.matches(element))
    }
}

impl ComplexSelector {
    fn matches<E: SelectorElement>(&self, element: &E) -> bool {
        self.match_at(self.parts.len() - 1, element)
    }

    fn match_at<E: SelectorElement>(&self, index: usize, element: &E) -> bool {
        if !self.parts[index].matches(element) {
            return false;
        }
        if index == 0 {
            return true;
        }

        match self.combinators[index - 1] {
            Combinator::Child => element
                .parent_element()
                .map_or(false, |parent| self.match_at(index - 1, &parent)),
            Combinator::Descendant => {
                let mut ancestor = element.parent_element();
                while let Some(current) = ancestor {
                    if self.match_at(index - 1, &current) {
                        return true;
                    }
                    ancestor = current.parent_element();
                }
                false
            }
        }
    }
}

impl Compound {
    fn matches<E: SelectorElement>(&self, element: &E) -> bool {
        let Some(local_name) = element.local_name() else {
            return false;
        };

        if let Some(tag) = &self.tag {
            if *tag != local_name {
                return false;
            }
        }

        if !self.ids.is_empty() {
            let id = element.attribute("id");
            if !self.ids.iter().all(|wanted| id.as_deref() == Some(wanted.as_str())) {
                return false;
            }
        }

        if !self.classes.is_empty() {
            let class = element.attribute("class").unwrap_or_default();
            let present: Vec<&str> = class.split_whitespace().collect();
            if !self.classes.iter().all(|wanted| present.contains(&wanted.as_str())) {
                return false;
            }
        }

        self.attributes.iter().all(|selector| selector.matches(element))
    }
}

impl AttributeSelector {
    fn matches<E: SelectorElement>(&self, element: &E) -> bool {
        let Some(actual) = element.attribute(&self.name) else {
            return false;
        };
        let Some((op, expected)) = &self.matcher else {
            return true;
        };
        let expected = expected.as_str();

        match op {
            AttributeOp::Equals => actual == expected,
            AttributeOp::Includes => {
                !expected.is_empty()
                    && !expected.contains(char::is_whitespace)
                    && actual.split_whitespace().any(|word| word == expected)
            }
            AttributeOp::DashMatch => {
                actual == expected || actual.starts_with(&format!("{}-", expected))
            }
            AttributeOp::Prefix => !expected.is_empty() && actual.starts_with(expected),
            AttributeOp::Suffix => !expected.is_empty() && actual.ends_with(expected),
            AttributeOp::Substring => !expected.is_empty() && actual.contains(expected),
        }
    }
}

struct Parser<'a> {
    source: &'a str,
    chars: Vec<char>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    fn syntax_error(&self) -> DomError {
        DomError::Syntax(self.source.to_string())
    }

    fn not_supported(&self) -> DomError {
        DomError::NotSupported(self.source.to_string())
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    /// Devuelve true si consumió algún espacio
    fn skip_whitespace(&mut self) -> bool {
        let start = self.pos;
        while self.peek().map_or(false, char::is_whitespace) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn parse_list(&mut self) -> Result<SelectorList, DomError> {
        let mut selectors = Vec::new();
        loop {
            self.skip_whitespace();
            selectors.push(self.parse_complex()?);
            self.skip_whitespace();
            match self.peek() {
                None => break,
                Some(',') => self.pos += 1,
                Some(_) => return Err(self.syntax_error()),
            }
        }
        Ok(SelectorList { selectors })
    }

    fn parse_complex(&mut self) -> Result<ComplexSelector, DomError> {
        let mut parts = vec![self.parse_compound()?];
        let mut combinators = Vec::new();

        loop {
            let had_space = self.skip_whitespace();
            match self.peek() {
                None | Some(',') => break,
                Some('>') => {
                    self.pos += 1;
                    self.skip_whitespace();
                    combinators.push(Combinator::Child);
                }
                Some('+') | Some('~') => return Err(self.not_supported()),
                Some(_) if had_space => combinators.push(Combinator::Descendant),
                Some(_) => return Err(self.syntax_error()),
            }
            parts.push(self.parse_compound()?);
        }

        Ok(ComplexSelector { parts, combinators })
    }

    fn parse_compound(&mut self) -> Result<Compound, DomError> {
        let mut compound = Compound::default();
        let mut empty = true;

        if self.peek() == Some('*') {
            self.pos += 1;
            empty = false;
        } else if self.at_ident_start() {
            compound.tag = Some(self.parse_ident()?.to_ascii_lowercase());
            empty = false;
        }

        loop {
            match self.peek() {
                Some('#') => {
                    self.pos += 1;
                    compound.ids.push(self.parse_ident()?);
                }
                Some('.') => {
                    self.pos += 1;
                    compound.classes.push(self.parse_ident()?);
                }
                Some('[') => {
                    self.pos += 1;
                    compound.attributes.push(self.parse_attribute()?);
                }
                Some(':') => return Err(self.not_supported()),
                _ => break,
            }
            empty = false;
        }

        if empty {
            return Err(self.syntax_error());
        }
        Ok(compound)
    }

    fn parse_attribute(&mut self) -> Result<AttributeSelector, DomError> {
        self.skip_whitespace();
        let name = self.parse_ident()?.to_ascii_lowercase();
        self.skip_whitespace();

        let op = match (self.peek(), self.peek_at(1)) {
            (Some(']'), _) => {
                self.pos += 1;
                return Ok(AttributeSelector { name, matcher: None });
            }
            (Some('='), _) => {
                self.pos += 1;
                AttributeOp::Equals
            }
            (Some(symbol), Some('=')) => {
                let op = match symbol {
                    '~' => AttributeOp::Includes,
                    '|' => AttributeOp::DashMatch,
                    '^' => AttributeOp::Prefix,
                    '$' => AttributeOp::Suffix,
                    '*' => AttributeOp::Substring,
                    _ => return Err(self.syntax_error()),
                };
                self.pos += 2;
                op
            }
            _ => return Err(self.syntax_error()),
        };

        self.skip_whitespace();
        let value = match self.peek() {
            Some(quote @ ('"' | '\'')) => self.parse_quoted(quote)?,
            _ => self.parse_ident()?,
        };
        self.skip_whitespace();

        if self.peek() != Some(']') {
            return Err(self.syntax_error());
        }
        self.pos += 1;

        Ok(AttributeSelector {
            name,
            matcher: Some((op, value)),
        })
    }

    fn parse_quoted(&mut self, quote: char) -> Result<String, DomError> {
        self.pos += 1;
        let mut value = String::new();
        loop {
            match self.peek() {
                None => return Err(self.syntax_error()),
                Some('\\') => return Err(self.not_supported()),
                Some(c) if c == quote => {
                    self.pos += 1;
                    return Ok(value);
                }
                Some(c) => {
                    value.push(c);
                    self.pos += 1;
                }
            }
        }
    }

    fn at_ident_start(&self) -> bool {
        match self.peek() {
            Some('-') => self.peek_at(1).map_or(false, |next| is_name_start(next) || next == '-'),
            Some(c) => is_name_start(c),
            None => false,
        }
    }

    fn parse_ident(&mut self) -> Result<String, DomError> {
        if self.peek() == Some('\\') {
            return Err(self.not_supported());
        }
        if !self.at_ident_start() {
            return Err(self.syntax_error());
        }

        let start = self.pos;
        while self.peek().map_or(false, is_name_char) {
            self.pos += 1;
        }
        if self.peek() == Some('\\') {
            return Err(self.not_supported());
        }
        Ok(self.chars[start..self.pos].iter().collect())
    }
}

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || c == '-'
}
