// Utils compartidos

pub mod number;

pub use number::*;
