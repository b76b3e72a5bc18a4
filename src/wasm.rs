// WebAssembly bindings for the unit converter
use crate::unit::{Unit, UnitKind};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct UnitWasm {
    unit: Unit,
}

#[wasm_bindgen]
impl UnitWasm {
    /// Build from a numeric unit code; unknown codes are accepted and format as "Invalid unit"
    #[wasm_bindgen(constructor)]
    pub fn new(code: u32) -> Self {
        Self {
            unit: Unit::from_code(code),
        }
    }

    /// Build from a kind name such as "volts" or "ps"
    #[wasm_bindgen]
    pub fn from_name(name: &str) -> Result<UnitWasm, JsValue> {
        let kind: UnitKind = name
            .parse()
            .map_err(|e| JsValue::from_str(&format!("{}", e)))?;
        Ok(Self {
            unit: Unit::new(kind),
        })
    }

    #[wasm_bindgen]
    pub fn format(&self, value: f64) -> String {
        self.unit.pretty_print(value)
    }

    #[wasm_bindgen]
    pub fn parse(&self, text: &str) -> f64 {
        self.unit.parse_string(text)
    }

    #[wasm_bindgen]
    pub fn try_format(&self, value: f64) -> Result<String, JsValue> {
        self.unit
            .try_pretty_print(value)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen]
    pub fn try_parse(&self, text: &str) -> Result<f64, JsValue> {
        self.unit
            .try_parse(text)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Catalog as a JSON array of kind names
    #[wasm_bindgen]
    pub fn kinds() -> Result<String, JsValue> {
        serde_json::to_string(&UnitKind::ALL)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize kinds: {}", e)))
    }
}
