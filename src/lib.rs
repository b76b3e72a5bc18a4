pub mod config;
pub mod unit;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use unit::{ScaledValue, Unit, UnitError, UnitKind};
