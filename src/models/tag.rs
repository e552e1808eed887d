use std::fmt;
use std::rc::Rc;

use crate::host::Host;
use crate::models::{Child, Props};

/// Componente: función que recibe props e hijos y devuelve hijo(s)
pub type Component<H> = Rc<
    dyn Fn(&H, Props<H>, Vec<Child<H>>) -> Result<Child<H>, <H as Host>::Error>,
>;

/// Identificador de tag para `create_element`
pub enum Tag<H: Host> {
    /// Nombre de elemento (`"div"`)
    Element(String),
    /// Función componente; recibe la llamada completa
    Component(Component<H>),
    /// Contenedor sin representación propia (`<>...</>`)
    Fragment,
}

impl<H: Host> Tag<H> {
    pub fn component<F>(component: F) -> Self
    where
        F: Fn(&H, Props<H>, Vec<Child<H>>) -> Result<Child<H>, H::Error> + 'static,
    {
        Tag::Component(Rc::new(component))
    }

    pub fn is_fragment(&self) -> bool {
        matches!(self, Tag::Fragment)
    }
}

impl<H: Host> Clone for Tag<H> {
    fn clone(&self) -> Self {
        match self {
            Tag::Element(name) => Tag::Element(name.clone()),
            Tag::Component(component) => Tag::Component(Rc::clone(component)),
            Tag::Fragment => Tag::Fragment,
        }
    }
}

impl<H: Host> fmt::Debug for Tag<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Element(name) => f.debug_tuple("Element").field(name).finish(),
            Tag::Component(_) => write!(f, "Component(..)"),
            Tag::Fragment => write!(f, "Fragment"),
        }
    }
}

impl<H: Host> From<&str> for Tag<H> {
    fn from(name: &str) -> Self {
        Tag::Element(name.to_string())
    }
}

impl<H: Host> From<String> for Tag<H> {
    fn from(name: String) -> Self {
        Tag::Element(name)
    }
}
