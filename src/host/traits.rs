use crate::models::{Listener, Value};

/// Árbol de nodos del host (navegador o memoria) sobre el que operan los helpers.
///
/// Cada método es un envoltorio directo de la API DOM equivalente. Los errores
/// son los nativos del host y los helpers los propagan sin modificarlos.
pub trait Host: Sized {
    /// Referencia a un nodo vivo (elemento, texto, fragmento o documento)
    type Node: Clone;
    /// Evento que reciben los listeners registrados
    type Event;
    /// Error nativo del host
    type Error;

    /// Nodo raíz por defecto para las búsquedas (el documento)
    fn root(&self) -> Self::Node;

    /// `ParentNode.querySelector`
    fn query_selector(&self, parent: &Self::Node, selectors: &str) -> Result<Option<Self::Node>, Self::Error>;

    /// `ParentNode.querySelectorAll`, en orden de documento
    fn query_selector_all(&self, parent: &Self::Node, selectors: &str) -> Result<Vec<Self::Node>, Self::Error>;

    /// `Document.createElement`
    fn create_element(&self, tag: &str) -> Result<Self::Node, Self::Error>;

    /// `Document.createTextNode`
    fn create_text_node(&self, data: &str) -> Self::Node;

    /// `Document.createDocumentFragment`
    fn create_document_fragment(&self) -> Self::Node;

    /// `Node.appendChild`
    fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), Self::Error>;

    /// `Element.setAttribute`
    fn set_attribute(&self, element: &Self::Node, name: &str, value: &str) -> Result<(), Self::Error>;

    /// Asignación directa `element[name] = value`
    fn set_property(&self, element: &Self::Node, name: &str, value: &Value<Self>) -> Result<(), Self::Error>;

    /// Asignación `element.style = css_text`
    fn set_style(&self, element: &Self::Node, css_text: &str) -> Result<(), Self::Error>;

    /// `EventTarget.addEventListener`
    fn add_event_listener(&self, element: &Self::Node, event_type: &str, listener: Listener<Self>) -> Result<(), Self::Error>;
}
