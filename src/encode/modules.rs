//! `MODULES`: значение уже является строкой модулей ('0'/'1').
//! Это не символика — просто сквозной провайдер для заранее закодированных данных.

use super::{EncodeOptions, Symbology};
use crate::core::error::ConstructError;
use crate::core::types::EncodedSymbol;

pub const FORMAT: &str = "MODULES";

pub struct Modules {
    bits: String,
}

impl Modules {
    pub fn new(bits: &str) -> Self {
        Self {
            bits: bits.to_string(),
        }
    }
}

impl Symbology for Modules {
    fn valid(&self) -> bool {
        !self.bits.is_empty() && self.bits.bytes().all(|b| b == b'0' || b == b'1')
    }

    /// Подпись = сами биты; переопределение подписи применяет раскладка.
    fn encode(&self) -> EncodedSymbol {
        EncodedSymbol::new(self.bits.clone()).with_text(self.bits.clone())
    }
}

/// Фабрика для `Registry`.
pub fn factory(value: &str, _options: &EncodeOptions) -> Result<Box<dyn Symbology>, ConstructError> {
    Ok(Box::new(Modules::new(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_bits() {
        assert!(Modules::new("1101").valid());
        assert!(!Modules::new("11a1").valid());
        assert!(!Modules::new("").valid());
    }

    #[test]
    fn text_is_the_value() {
        let o = EncodeOptions {
            text: Some("ABC".into()),
            height: 100.0,
        };
        let s = factory("101", &o).unwrap().encode();
        assert_eq!(s.data, "101");
        assert_eq!(s.text.as_deref(), Some("101"));
    }
}
