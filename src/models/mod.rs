// ============================================================================
// MODELS - Tipos de entrada de los helpers DOM
// ============================================================================

pub mod child;
pub mod props;
pub mod style;
pub mod tag;
pub mod value;

pub use child::*;
pub use props::*;
pub use style::*;
pub use tag::*;
pub use value::*;
