use std::fmt;
use std::rc::Rc;

use crate::dom::css_object;
use crate::host::Host;
use crate::models::StyleMap;
use crate::utils::format_number;

/// Callback registrado como listener de eventos
pub type Listener<H> = Rc<dyn Fn(&<H as Host>::Event)>;

/// Valor asignable con `set_property`
pub enum Value<H: Host> {
    Text(String),
    Number(f64),
    Bool(bool),
    Style(StyleMap),
    Callback(Listener<H>),
}

impl<H: Host> Value<H> {
    /// Crear valor callback desde un closure
    pub fn callback<F>(handler: F) -> Self
    where
        F: Fn(&H::Event) + 'static,
    {
        Value::Callback(Rc::new(handler))
    }

    pub fn is_callback(&self) -> bool {
        matches!(self, Value::Callback(_))
    }

    pub fn as_style(&self) -> Option<&StyleMap> {
        match self {
            Value::Style(style) => Some(style),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl<H: Host> Clone for Value<H> {
    fn clone(&self) -> Self {
        match self {
            Value::Text(text) => Value::Text(text.clone()),
            Value::Number(number) => Value::Number(*number),
            Value::Bool(flag) => Value::Bool(*flag),
            Value::Style(style) => Value::Style(style.clone()),
            Value::Callback(listener) => Value::Callback(Rc::clone(listener)),
        }
    }
}

impl<H: Host> fmt::Debug for Value<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Value::Number(number) => f.debug_tuple("Number").field(number).finish(),
            Value::Bool(flag) => f.debug_tuple("Bool").field(flag).finish(),
            Value::Style(style) => f.debug_tuple("Style").field(style).finish(),
            Value::Callback(_) => write!(f, "Callback(..)"),
        }
    }
}

/// Forma string del valor, usada al caer en `setAttribute`
impl<H: Host> fmt::Display for Value<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => write!(f, "{}", text),
            Value::Number(number) => write!(f, "{}", format_number(*number)),
            Value::Bool(flag) => write!(f, "{}", flag),
            Value::Style(style) => write!(f, "{}", css_object(style)),
            Value::Callback(_) => write!(f, "[function]"),
        }
    }
}

impl<H: Host> From<&str> for Value<H> {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl<H: Host> From<String> for Value<H> {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<H: Host> From<f64> for Value<H> {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl<H: Host> From<i32> for Value<H> {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl<H: Host> From<bool> for Value<H> {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl<H: Host> From<StyleMap> for Value<H> {
    fn from(value: StyleMap) -> Self {
        Value::Style(value)
    }
}
