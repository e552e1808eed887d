// ============================================================================
// HOST EN MEMORIA - Árbol DOM mínimo sin navegador
// ============================================================================
// Implementa `Host` con nodos `Rc<RefCell<..>>` y enlaces débiles al padre.
// Sigue la semántica DOM en lo que usan los helpers: appendChild mueve nodos,
// los fragmentos se vacían al insertarse, setAttribute normaliza a minúsculas.
// ============================================================================

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::host::selector::{SelectorElement, SelectorList};
use crate::host::{DomError, Host};
use crate::models::{Listener, Value};

/// Evento entregado a los listeners del host en memoria
#[derive(Debug, Clone)]
pub struct MemoryEvent {
    pub event_type: String,
    pub target: MemoryNode,
}

#[derive(Debug, Clone, PartialEq)]
enum NodeKind {
    Document,
    Element(String),
    Text(String),
    Fragment,
}

struct NodeData {
    kind: NodeKind,
    parent: Weak<RefCell<NodeData>>,
    children: Vec<MemoryNode>,
    attributes: Vec<(String, String)>,
    properties: Vec<(String, Value<MemoryDom>)>,
    listeners: Vec<(String, Listener<MemoryDom>)>,
}

/// Referencia compartida a un nodo del árbol en memoria
#[derive(Clone)]
pub struct MemoryNode(Rc<RefCell<NodeData>>);

impl PartialEq for MemoryNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for MemoryNode {}

impl fmt::Debug for MemoryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.borrow().kind {
            NodeKind::Document => write!(f, "#document"),
            NodeKind::Element(name) => write!(f, "<{}>", name),
            NodeKind::Text(data) => write!(f, "#text {:?}", data),
            NodeKind::Fragment => write!(f, "#document-fragment"),
        }
    }
}

impl MemoryNode {
    fn new(kind: NodeKind) -> Self {
        MemoryNode(Rc::new(RefCell::new(NodeData {
            kind,
            parent: Weak::new(),
            children: Vec::new(),
            attributes: Vec::new(),
            properties: Vec::new(),
            listeners: Vec::new(),
        })))
    }

    /// Nombre local del elemento (en minúsculas)
    pub fn tag_name(&self) -> Option<String> {
        match &self.0.borrow().kind {
            NodeKind::Element(name) => Some(name.clone()),
            _ => None,
        }
    }

    pub fn is_element(&self) -> bool {
        matches!(self.0.borrow().kind, NodeKind::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self.0.borrow().kind, NodeKind::Text(_))
    }

    pub fn is_fragment(&self) -> bool {
        matches!(self.0.borrow().kind, NodeKind::Fragment)
    }

    pub fn is_document(&self) -> bool {
        matches!(self.0.borrow().kind, NodeKind::Document)
    }

    /// Contenido de un nodo de texto
    pub fn text(&self) -> Option<String> {
        match &self.0.borrow().kind {
            NodeKind::Text(data) => Some(data.clone()),
            _ => None,
        }
    }

    /// Texto concatenado de todos los descendientes (`Node.textContent`)
    pub fn text_content(&self) -> String {
        let data = self.0.borrow();
        match &data.kind {
            NodeKind::Text(text) => text.clone(),
            _ => data.children.iter().map(MemoryNode::text_content).collect(),
        }
    }

    pub fn children(&self) -> Vec<MemoryNode> {
        self.0.borrow().children.clone()
    }

    pub fn child_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    pub fn parent(&self) -> Option<MemoryNode> {
        self.0.borrow().parent.upgrade().map(MemoryNode)
    }

    /// `Element.getAttribute`, sin distinguir mayúsculas ASCII en el nombre
    pub fn attribute(&self, name: &str) -> Option<String> {
        let name = name.to_ascii_lowercase();
        self.0
            .borrow()
            .attributes
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, value)| value.clone())
    }

    pub fn attributes(&self) -> Vec<(String, String)> {
        self.0.borrow().attributes.clone()
    }

    /// Última propiedad asignada con `set_property`
    pub fn property(&self, name: &str) -> Option<Value<MemoryDom>> {
        self.0
            .borrow()
            .properties
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.clone())
    }

    /// Declaración de estilo inline
    pub fn style_text(&self) -> Option<String> {
        self.attribute("style")
    }

    pub fn listener_count(&self, event_type: &str) -> usize {
        self.0
            .borrow()
            .listeners
            .iter()
            .filter(|(existing, _)| existing == event_type)
            .count()
    }

    /// Disparar un evento: ejecuta los listeners de ese tipo en orden de registro
    /// y devuelve cuántos se ejecutaron
    pub fn dispatch_event(&self, event_type: &str) -> usize {
        // Clonar los listeners antes de llamarlos: pueden modificar el nodo
        let listeners: Vec<Listener<MemoryDom>> = self
            .0
            .borrow()
            .listeners
            .iter()
            .filter(|(existing, _)| existing == event_type)
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        let event = MemoryEvent {
            event_type: event_type.to_string(),
            target: self.clone(),
        };
        for listener in &listeners {
            listener(&event);
        }
        listeners.len()
    }

    /// Serializar como HTML (los fragmentos y documentos serializan sus hijos)
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html);
        html
    }

    fn write_html(&self, out: &mut String) {
        let data = self.0.borrow();
        match &data.kind {
            NodeKind::Text(text) => out.push_str(&escape_html(text, false)),
            NodeKind::Element(name) => {
                out.push('<');
                out.push_str(name);
                for (attr, value) in &data.attributes {
                    out.push_str(&format!(" {}=\"{}\"", attr, escape_html(value, true)));
                }
                out.push('>');
                for child in &data.children {
                    child.write_html(out);
                }
                out.push_str(&format!("</{}>", name));
            }
            NodeKind::Document | NodeKind::Fragment => {
                for child in &data.children {
                    child.write_html(out);
                }
            }
        }
    }

    /// true si `self` es `other` o uno de sus ancestros
    fn is_inclusive_ancestor_of(&self, other: &MemoryNode) -> bool {
        let mut current = Some(other.clone());
        while let Some(node) = current {
            if node == *self {
                return true;
            }
            current = node.parent();
        }
        false
    }

    fn detach(&self) {
        if let Some(parent) = self.parent() {
            parent.0.borrow_mut().children.retain(|child| child != self);
        }
        self.0.borrow_mut().parent = Weak::new();
    }

    fn push_child(&self, child: MemoryNode) {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child);
    }

    fn set_attribute_raw(&self, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        let mut data = self.0.borrow_mut();
        match data.attributes.iter_mut().find(|(existing, _)| *existing == name) {
            Some(attr) => attr.1 = value.to_string(),
            None => data.attributes.push((name, value.to_string())),
        }
    }

    fn replace_children_with_text(&self, text: &str) {
        let old: Vec<MemoryNode> = std::mem::take(&mut self.0.borrow_mut().children);
        for child in old {
            child.0.borrow_mut().parent = Weak::new();
        }
        if !text.is_empty() {
            self.push_child(MemoryNode::new(NodeKind::Text(text.to_string())));
        }
    }

    /// Descendientes en orden de documento (preorden), sin incluir `self`
    fn descendants(&self) -> Vec<MemoryNode> {
        let mut out = Vec::new();
        let mut stack: Vec<MemoryNode> = self.children().into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            stack.extend(node.children().into_iter().rev());
            out.push(node);
        }
        out
    }

    fn can_have_children(&self) -> bool {
        !self.is_text()
    }
}

impl SelectorElement for MemoryNode {
    fn local_name(&self) -> Option<String> {
        self.tag_name()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        MemoryNode::attribute(self, name)
    }

    fn parent_element(&self) -> Option<Self> {
        self.parent().filter(MemoryNode::is_element)
    }
}

/// Documento en memoria; su nodo raíz es la raíz por defecto de `search`
#[derive(Debug, Clone)]
pub struct MemoryDom {
    document: MemoryNode,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    pub fn new() -> Self {
        Self {
            document: MemoryNode::new(NodeKind::Document),
        }
    }

    pub fn document(&self) -> &MemoryNode {
        &self.document
    }

    fn query(&self, parent: &MemoryNode, selectors: &str) -> Result<(SelectorList, Vec<MemoryNode>), DomError> {
        if !parent.can_have_children() {
            return Err(DomError::Type("querySelector is not a function on text nodes".to_string()));
        }
        let list = SelectorList::parse(selectors)?;
        Ok((list, parent.descendants()))
    }
}

impl Host for MemoryDom {
    type Node = MemoryNode;
    type Event = MemoryEvent;
    type Error = DomError;

    fn root(&self) -> MemoryNode {
        self.document.clone()
    }

    fn query_selector(&self, parent: &MemoryNode, selectors: &str) -> Result<Option<MemoryNode>, DomError> {
        let (list, candidates) = self.query(parent, selectors)?;
        Ok(candidates.into_iter().find(|node| list.matches(node)))
    }

    fn query_selector_all(&self, parent: &MemoryNode, selectors: &str) -> Result<Vec<MemoryNode>, DomError> {
        let (list, candidates) = self.query(parent, selectors)?;
        Ok(candidates.into_iter().filter(|node| list.matches(node)).collect())
    }

    fn create_element(&self, tag: &str) -> Result<MemoryNode, DomError> {
        if !is_valid_name(tag) {
            return Err(DomError::InvalidCharacter(tag.to_string()));
        }
        Ok(MemoryNode::new(NodeKind::Element(tag.to_ascii_lowercase())))
    }

    fn create_text_node(&self, data: &str) -> MemoryNode {
        MemoryNode::new(NodeKind::Text(data.to_string()))
    }

    fn create_document_fragment(&self) -> MemoryNode {
        MemoryNode::new(NodeKind::Fragment)
    }

    fn append_child(&self, parent: &MemoryNode, child: &MemoryNode) -> Result<(), DomError> {
        if child.is_document() {
            return Err(DomError::HierarchyRequest("a document cannot be inserted".to_string()));
        }
        if !parent.can_have_children() {
            return Err(DomError::HierarchyRequest("text nodes cannot have children".to_string()));
        }
        if child.is_inclusive_ancestor_of(parent) {
            return Err(DomError::HierarchyRequest(
                "the new child is an ancestor of the parent".to_string(),
            ));
        }

        if child.is_fragment() {
            // Insertar un fragmento mueve sus hijos y lo deja vacío
            let moved: Vec<MemoryNode> = std::mem::take(&mut child.0.borrow_mut().children);
            for node in moved {
                parent.push_child(node);
            }
        } else {
            child.detach();
            parent.push_child(child.clone());
        }
        Ok(())
    }

    fn set_attribute(&self, element: &MemoryNode, name: &str, value: &str) -> Result<(), DomError> {
        if !element.is_element() {
            return Err(DomError::Type(format!("cannot set attribute '{}' on {:?}", name, element)));
        }
        if !is_valid_name(name) {
            return Err(DomError::InvalidCharacter(name.to_string()));
        }
        element.set_attribute_raw(name, value);
        Ok(())
    }

    fn set_property(&self, element: &MemoryNode, name: &str, value: &Value<MemoryDom>) -> Result<(), DomError> {
        {
            let mut data = element.0.borrow_mut();
            match data.properties.iter_mut().find(|(existing, _)| existing == name) {
                Some(property) => property.1 = value.clone(),
                None => data.properties.push((name.to_string(), value.clone())),
            }
        }

        // Propiedades reflejadas en atributos o hijos
        if element.is_element() {
            match name {
                "classList" | "className" => element.set_attribute_raw("class", &value.to_string()),
                "style" => element.set_attribute_raw("style", &value.to_string()),
                "id" => element.set_attribute_raw("id", &value.to_string()),
                "innerText" | "textContent" => element.replace_children_with_text(&value.to_string()),
                _ => {}
            }
        }
        Ok(())
    }

    fn set_style(&self, element: &MemoryNode, css_text: &str) -> Result<(), DomError> {
        if !element.is_element() {
            return Err(DomError::Type(format!("cannot set style on {:?}", element)));
        }
        element.set_attribute_raw("style", css_text);
        Ok(())
    }

    fn add_event_listener(&self, element: &MemoryNode, event_type: &str, listener: Listener<MemoryDom>) -> Result<(), DomError> {
        element
            .0
            .borrow_mut()
            .listeners
            .push((event_type.to_string(), listener));
        Ok(())
    }
}

/// Nombres de tag/atributo: no vacíos, sin espacios ni caracteres de marcado
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '<' | '>' | '"' | '\'' | '/' | '='))
}

fn escape_html(text: &str, in_attribute: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' if !in_attribute => out.push_str("&lt;"),
            '>' if !in_attribute => out.push_str("&gt;"),
            '"' if in_attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn element(dom: &MemoryDom, tag: &str) -> MemoryNode {
        dom.create_element(tag).unwrap()
    }

    #[test]
    fn test_create_element_lowercases_and_validates() {
        let dom = MemoryDom::new();
        assert_eq!(element(&dom, "DIV").tag_name().as_deref(), Some("div"));
        assert_eq!(dom.create_element(""), Err(DomError::InvalidCharacter(String::new())));
        assert_eq!(
            dom.create_element("my div"),
            Err(DomError::InvalidCharacter("my div".to_string()))
        );
        assert!(dom.create_element("<p>").is_err());
    }

    #[test]
    fn test_append_child_moves_node() {
        let dom = MemoryDom::new();
        let first = element(&dom, "div");
        let second = element(&dom, "div");
        let span = element(&dom, "span");

        dom.append_child(&first, &span).unwrap();
        dom.append_child(&second, &span).unwrap();

        assert_eq!(first.child_count(), 0);
        assert_eq!(second.children(), vec![span.clone()]);
        assert_eq!(span.parent(), Some(second));
    }

    #[test]
    fn test_append_fragment_moves_children() {
        let dom = MemoryDom::new();
        let parent = element(&dom, "ul");
        let fragment = dom.create_document_fragment();
        dom.append_child(&fragment, &element(&dom, "li")).unwrap();
        dom.append_child(&fragment, &element(&dom, "li")).unwrap();

        dom.append_child(&parent, &fragment).unwrap();

        assert_eq!(parent.child_count(), 2);
        assert_eq!(fragment.child_count(), 0);
        assert!(parent.children().iter().all(|li| li.parent() == Some(parent.clone())));
        assert_eq!(parent.to_html(), "<ul><li></li><li></li></ul>");
    }

    #[test]
    fn test_append_child_hierarchy_errors() {
        let dom = MemoryDom::new();
        let outer = element(&dom, "div");
        let inner = element(&dom, "div");
        let text = dom.create_text_node("x");
        dom.append_child(&outer, &inner).unwrap();

        assert!(matches!(dom.append_child(&inner, &outer), Err(DomError::HierarchyRequest(_))));
        assert!(matches!(dom.append_child(&outer, &outer), Err(DomError::HierarchyRequest(_))));
        assert!(matches!(dom.append_child(&text, &inner), Err(DomError::HierarchyRequest(_))));
        assert!(matches!(dom.append_child(&outer, &dom.root()), Err(DomError::HierarchyRequest(_))));
        assert_eq!(outer.child_count(), 1);
    }

    #[test]
    fn test_attributes() {
        let dom = MemoryDom::new();
        let input = element(&dom, "input");
        dom.set_attribute(&input, "dataValue", "1").unwrap();
        dom.set_attribute(&input, "datavalue", "2").unwrap();

        assert_eq!(input.attribute("dataValue").as_deref(), Some("2"));
        assert_eq!(input.attributes().len(), 1);
        assert_eq!(
            dom.set_attribute(&input, "bad name", "x"),
            Err(DomError::InvalidCharacter("bad name".to_string()))
        );
        assert!(matches!(
            dom.set_attribute(&dom.create_text_node("t"), "id", "x"),
            Err(DomError::Type(_))
        ));
    }

    #[test]
    fn test_reflected_properties() {
        let dom = MemoryDom::new();
        let p = element(&dom, "p");
        dom.append_child(&p, &element(&dom, "b")).unwrap();

        dom.set_property(&p, "innerText", &Value::from("hola")).unwrap();
        dom.set_property(&p, "classList", &Value::from("a b")).unwrap();
        dom.set_property(&p, "custom", &Value::from(true)).unwrap();

        assert_eq!(p.child_count(), 1);
        assert_eq!(p.text_content(), "hola");
        assert_eq!(p.attribute("class").as_deref(), Some("a b"));
        assert!(matches!(p.property("custom"), Some(Value::Bool(true))));
        assert!(p.attribute("custom").is_none());

        dom.set_property(&p, "innerText", &Value::from("")).unwrap();
        assert_eq!(p.child_count(), 0);
    }

    #[test]
    fn test_dispatch_event_runs_listeners_in_order() {
        let dom = MemoryDom::new();
        let button = element(&dom, "button");
        let calls = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second"] {
            let calls = Rc::clone(&calls);
            dom.add_event_listener(&button, "click", Rc::new(move |event: &MemoryEvent| {
                calls.borrow_mut().push(format!("{}:{}", tag, event.event_type));
            }))
            .unwrap();
        }

        assert_eq!(button.listener_count("click"), 2);
        assert_eq!(button.dispatch_event("click"), 2);
        assert_eq!(button.dispatch_event("keydown"), 0);
        assert_eq!(*calls.borrow(), vec!["first:click", "second:click"]);
    }

    #[test]
    fn test_listener_can_mutate_target() {
        let dom = MemoryDom::new();
        let button = element(&dom, "button");
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let host = dom.clone();

        dom.add_event_listener(&button, "click", Rc::new(move |event: &MemoryEvent| {
            counter.set(counter.get() + 1);
            host.set_attribute(&event.target, "data-clicked", "yes").unwrap();
        }))
        .unwrap();

        button.dispatch_event("click");
        assert_eq!(hits.get(), 1);
        assert_eq!(button.attribute("data-clicked").as_deref(), Some("yes"));
    }

    #[test]
    fn test_query_selector_document_order_and_scope() {
        let dom = MemoryDom::new();
        let root = dom.root();
        let main = element(&dom, "main");
        let section = element(&dom, "section");
        let first = element(&dom, "p");
        let second = element(&dom, "p");
        let outside = element(&dom, "p");

        dom.set_attribute(&main, "class", "content").unwrap();
        dom.append_child(&root, &main).unwrap();
        dom.append_child(&main, &section).unwrap();
        dom.append_child(&section, &first).unwrap();
        dom.append_child(&main, &second).unwrap();
        dom.append_child(&root, &outside).unwrap();

        assert_eq!(dom.query_selector(&root, "p").unwrap(), Some(first.clone()));
        assert_eq!(
            dom.query_selector_all(&root, "p").unwrap(),
            vec![first.clone(), second.clone(), outside.clone()]
        );
        // Los ancestros fuera del nodo raíz de la búsqueda también cuentan
        assert_eq!(
            dom.query_selector_all(&section, ".content p").unwrap(),
            vec![first.clone()]
        );
        assert_eq!(dom.query_selector(&section, "section").unwrap(), None);
        assert_eq!(dom.query_selector(&root, "table").unwrap(), None);
    }

    #[test]
    fn test_query_selector_errors() {
        let dom = MemoryDom::new();
        let root = dom.root();
        assert_eq!(dom.query_selector(&root, "p["), Err(DomError::Syntax("p[".to_string())));
        assert!(matches!(
            dom.query_selector_all(&dom.create_text_node("t"), "p"),
            Err(DomError::Type(_))
        ));
    }

    #[test]
    fn test_to_html_escapes() {
        let dom = MemoryDom::new();
        let a = element(&dom, "a");
        dom.set_attribute(&a, "title", "say \"hi\" & <bye>").unwrap();
        dom.append_child(&a, &dom.create_text_node("1 < 2 & 3")).unwrap();

        assert_eq!(
            a.to_html(),
            "<a title=\"say &quot;hi&quot; &amp; <bye>\">1 &lt; 2 &amp; 3</a>"
        );
    }
}
