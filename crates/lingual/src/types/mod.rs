//! Core value types shared across the engine.

mod value;

pub use value::Value;
