// ============================================================================
// DOM UTILS - Helpers DOM estilo JSX
// ============================================================================
// - search: querySelector / querySelectorAll con raíz por defecto
// - set_property: propiedad, listener o atributo según nombre y valor
// - render: aplana hijos (texto, nodos, listas) dentro de un padre
// - create_element / Fragment: destino de JSX, devuelve nodos DOM reales
// - css_object: reglas camelCase -> declaración CSS inline
//
// Todas las operaciones reciben el host (`Host`) explícitamente:
// `WebDom` en el navegador, `MemoryDom` fuera de él.
// ============================================================================

pub mod config;
pub mod dom;
pub mod host;
pub mod models;
pub mod utils;

pub use config::{DomConfig, CONFIG};
pub use dom::{
    classify, create_element, css_object, event_name, fragment, render, search, search_all, search_one,
    set_property, Found, PropertyKind, DIRECT_PROPERTIES,
};
pub use host::memory::{MemoryDom, MemoryEvent, MemoryNode};
pub use host::{DomError, Host};
pub use models::{Child, Component, Listener, Props, StyleMap, StyleValue, Tag, Value};

#[cfg(target_arch = "wasm32")]
pub use host::web::WebDom;

/// Inicializar panic hook y logging en el navegador (llamar una vez al arrancar)
#[cfg(target_arch = "wasm32")]
pub fn init() {
    init_with_config(&CONFIG);
}

/// Igual que `init`, con una configuración explícita
#[cfg(target_arch = "wasm32")]
pub fn init_with_config(config: &DomConfig) {
    // Panic hook para mejor debugging
    console_error_panic_hook::set_once();

    if !config.is_logging_enabled() {
        return;
    }

    let mut logger = wasm_logger::Config::new(config.level());
    if let Some(prefix) = &config.log_module_prefix {
        logger = logger.module_prefix(prefix);
    }
    wasm_logger::init(logger);
    log::info!("🚀 dom-utils inicializado (nivel {})", config.level());
}
