// ============================================================================
// HOST WEB - Implementación de `Host` sobre web-sys
// ============================================================================
// GESTIÓN DE LISTENERS:
// - Los closures de eventos se mantienen vivos con `forget()` / `into_js_value()`.
//   Cuando el elemento se destruye, el navegador limpia sus listeners.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, DocumentFragment, Element, Event, HtmlElement, Node, NodeList, Window};

use crate::host::Host;
use crate::models::{Listener, Value};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Host sobre el `document` del navegador
#[derive(Debug, Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    /// Crear host sobre el document global
    pub fn new() -> Result<Self, JsValue> {
        let document = document().ok_or_else(|| JsValue::from_str("No document"))?;
        Ok(Self::from_document(document))
    }

    /// Crear host sobre un document concreto (iframes, documentos creados)
    pub fn from_document(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Host for WebDom {
    type Node = Node;
    type Event = Event;
    type Error = JsValue;

    fn root(&self) -> Node {
        self.document.clone().into()
    }

    fn query_selector(&self, parent: &Node, selectors: &str) -> Result<Option<Node>, JsValue> {
        let found = if let Some(element) = parent.dyn_ref::<Element>() {
            element.query_selector(selectors)?
        } else if let Some(document) = parent.dyn_ref::<Document>() {
            document.query_selector(selectors)?
        } else if let Some(fragment) = parent.dyn_ref::<DocumentFragment>() {
            fragment.query_selector(selectors)?
        } else {
            return Err(not_a_parent_node("querySelector"));
        };
        Ok(found.map(Node::from))
    }

    fn query_selector_all(&self, parent: &Node, selectors: &str) -> Result<Vec<Node>, JsValue> {
        let list = if let Some(element) = parent.dyn_ref::<Element>() {
            element.query_selector_all(selectors)?
        } else if let Some(document) = parent.dyn_ref::<Document>() {
            document.query_selector_all(selectors)?
        } else if let Some(fragment) = parent.dyn_ref::<DocumentFragment>() {
            fragment.query_selector_all(selectors)?
        } else {
            return Err(not_a_parent_node("querySelectorAll"));
        };
        Ok(node_list_to_vec(&list))
    }

    fn create_element(&self, tag: &str) -> Result<Node, JsValue> {
        Ok(self.document.create_element(tag)?.into())
    }

    fn create_text_node(&self, data: &str) -> Node {
        self.document.create_text_node(data).into()
    }

    fn create_document_fragment(&self) -> Node {
        self.document.create_document_fragment().into()
    }

    fn append_child(&self, parent: &Node, child: &Node) -> Result<(), JsValue> {
        parent.append_child(child).map(|_| ())
    }

    fn set_attribute(&self, element: &Node, name: &str, value: &str) -> Result<(), JsValue> {
        as_element(element, "setAttribute")?.set_attribute(name, value)
    }

    fn set_property(&self, element: &Node, name: &str, value: &Value<WebDom>) -> Result<(), JsValue> {
        let value = to_js(value)?;
        js_sys::Reflect::set(element, &JsValue::from_str(name), &value)?;
        Ok(())
    }

    fn set_style(&self, element: &Node, css_text: &str) -> Result<(), JsValue> {
        // `element.style = "..."` escribe en style.cssText
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            html.style().set_css_text(css_text);
            Ok(())
        } else {
            as_element(element, "style")?.set_attribute("style", css_text)
        }
    }

    fn add_event_listener(&self, element: &Node, event_type: &str, listener: Listener<WebDom>) -> Result<(), JsValue> {
        let closure = Closure::wrap(Box::new(move |event: Event| {
            listener(&event);
        }) as Box<dyn FnMut(Event)>);
        element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        // Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM
        closure.forget();
        Ok(())
    }
}

/// Convertir un `Value` a su equivalente JS
fn to_js(value: &Value<WebDom>) -> Result<JsValue, JsValue> {
    Ok(match value {
        Value::Text(text) => JsValue::from_str(text),
        Value::Number(number) => JsValue::from_f64(*number),
        Value::Bool(flag) => JsValue::from_bool(*flag),
        Value::Style(style) => {
            let object = js_sys::Object::new();
            for (name, rule) in style.iter() {
                js_sys::Reflect::set(&object, &JsValue::from_str(name), &JsValue::from_str(&rule.to_string()))?;
            }
            object.into()
        }
        Value::Callback(listener) => {
            let listener = listener.clone();
            Closure::wrap(Box::new(move |event: Event| {
                listener(&event);
            }) as Box<dyn FnMut(Event)>)
            .into_js_value()
        }
    })
}

fn node_list_to_vec(list: &NodeList) -> Vec<Node> {
    (0..list.length()).filter_map(|index| list.get(index)).collect()
}

fn as_element<'a>(node: &'a Node, operation: &str) -> Result<&'a Element, JsValue> {
    node.dyn_ref::<Element>().ok_or_else(|| {
        js_sys::TypeError::new(&format!("{} requires an Element, got node type {}", operation, node.node_type())).into()
    })
}

fn not_a_parent_node(operation: &str) -> JsValue {
    js_sys::TypeError::new(&format!("{} is not a function on this node", operation)).into()
}
