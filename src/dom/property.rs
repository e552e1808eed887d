// ============================================================================
// SET PROPERTY - Alternativa más potente a Element.setAttribute
// ============================================================================

use crate::dom::css_object;
use crate::host::Host;
use crate::models::Value;

/// Propiedades que se asignan directamente sobre el nodo y no como atributo
pub const DIRECT_PROPERTIES: [&str; 3] = ["innerText", "classList", "style"];

/// Estrategia de asignación elegida por `classify`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// `style` con un mapa de reglas: se convierte con `css_object`
    StyleObject,
    /// Nombre en `DIRECT_PROPERTIES`: `element[name] = value`
    DirectProperty,
    /// `on*` con callback: `addEventListener`
    EventHandler,
    /// Todo lo demás: `setAttribute`
    Attribute,
}

/// Decidir cómo asignar `name = value`. El orden de las reglas importa:
/// `style` con mapa gana a la lista directa, y la lista directa gana a los eventos.
pub fn classify<H: Host>(name: &str, value: &Value<H>) -> PropertyKind {
    let trimmed = name.trim();
    let caseless = trimmed.to_lowercase();

    if caseless == "style" && value.as_style().is_some() {
        PropertyKind::StyleObject
    } else if DIRECT_PROPERTIES.contains(&trimmed) {
        PropertyKind::DirectProperty
    } else if caseless.starts_with("on") && value.is_callback() {
        PropertyKind::EventHandler
    } else {
        PropertyKind::Attribute
    }
}

/// Nombre del evento para un handler `on*` (`onClick` -> `click`)
pub fn event_name(name: &str) -> String {
    let caseless = name.trim().to_lowercase();
    match caseless.strip_prefix("on") {
        Some(event) => event.to_string(),
        None => caseless,
    }
}

/// Asignar una propiedad, listener o atributo sobre `element`
pub fn set_property<H: Host>(host: &H, element: &H::Node, name: &str, value: Value<H>) -> Result<(), H::Error> {
    let kind = classify(name, &value);
    log::trace!("[SET-PROPERTY] '{}' -> {:?}", name, kind);

    match (kind, value) {
        (PropertyKind::StyleObject, Value::Style(style)) => host.set_style(element, &css_object(&style)),
        (PropertyKind::DirectProperty, value) => host.set_property(element, name.trim(), &value),
        (PropertyKind::EventHandler, Value::Callback(listener)) => {
            host.add_event_listener(element, &event_name(name), listener)
        }
        (_, value) => host.set_attribute(element, name.trim(), &value.to_string()),
    }
}
