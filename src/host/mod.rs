// Hosts DOM: navegador (web-sys) y árbol en memoria

#[cfg(target_arch = "wasm32")]
pub mod web;

pub mod memory;
pub mod selector;

// Trait común para todos los hosts
pub mod traits;
mod error;

pub use error::DomError;
pub use traits::Host;
