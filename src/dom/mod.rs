// ============================================================================
// DOM MODULE - Helpers para manipulación DOM
// ============================================================================
// Orden de dependencias: css -> property -> render -> builder. search es independiente.
// ============================================================================

pub mod builder;
pub mod css;
pub mod property;
pub mod render;
pub mod search;

pub use builder::*;
pub use css::*;
pub use property::*;
pub use render::*;
pub use search::*;
