use std::fmt;

use crate::host::Host;

/// Hijo(s) a renderar: texto, nodo existente o lista anidada
pub enum Child<H: Host> {
    Text(String),
    Node(H::Node),
    List(Vec<Child<H>>),
}

impl<H: Host> Child<H> {
    pub fn node(node: H::Node) -> Self {
        Child::Node(node)
    }

    /// Lista vacía: no rendera nada (equivale a un componente que devuelve null)
    pub fn empty() -> Self {
        Child::List(Vec::new())
    }

    pub fn as_node(&self) -> Option<&H::Node> {
        match self {
            Child::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn into_node(self) -> Option<H::Node> {
        match self {
            Child::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Child::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Child::List(children) if children.is_empty())
    }
}

impl<H: Host> Clone for Child<H> {
    fn clone(&self) -> Self {
        match self {
            Child::Text(text) => Child::Text(text.clone()),
            Child::Node(node) => Child::Node(node.clone()),
            Child::List(children) => Child::List(children.clone()),
        }
    }
}

impl<H: Host> fmt::Debug for Child<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Child::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Child::Node(_) => write!(f, "Node(..)"),
            Child::List(children) => f.debug_tuple("List").field(children).finish(),
        }
    }
}

impl<H: Host> From<&str> for Child<H> {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl<H: Host> From<String> for Child<H> {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl<H: Host> From<Vec<Child<H>>> for Child<H> {
    fn from(children: Vec<Child<H>>) -> Self {
        Child::List(children)
    }
}
