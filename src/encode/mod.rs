//! Адаптер к внешнему провайдеру символик.
//!
//! Сам крейт символики не реализует: провайдер регистрирует по имени формата
//! фабрику `(value, options) -> Box<dyn Symbology>`. Адаптер проверяет вход,
//! строит энкодер, спрашивает `valid()` и отдаёт `encode()` как есть.
//!
//! Политика валидации строгая: пустое/отсутствующее значение отбрасывается
//! до поиска фабрики (`InvalidInput`), никакого "null" в штрих-коде.

pub mod modules;

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, warn};

use crate::core::error::{BarcodeError, ConstructError};
use crate::core::types::EncodedSymbol;

/// Объект энкодера конкретной символики, построенный под одно значение.
pub trait Symbology {
    /// Значение допустимо для формата (charset, длина, контрольная сумма...).
    fn valid(&self) -> bool;

    /// Бинарные данные и подпись.
    fn encode(&self) -> EncodedSymbol;
}

/// Опции, которые пробрасываются провайдеру вместе со значением.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EncodeOptions {
    /// Переопределённая подпись.
    pub text: Option<String>,
    /// Высота баров (некоторым символикам нужна для guard-баров).
    pub height: f64,
}

/// Фабрика энкодера для одного формата.
pub type Factory =
    Box<dyn Fn(&str, &EncodeOptions) -> Result<Box<dyn Symbology>, ConstructError> + Send + Sync>;

/// Реестр форматов: имя -> фабрика. Имена сравниваются точно.
#[derive(Default)]
pub struct Registry {
    factories: BTreeMap<String, Factory>,
}

impl Registry {
    /// Пустой реестр.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Реестр со встроенным pass-through форматом `MODULES`.
    pub fn with_builtin() -> Self {
        let mut r = Self::new();
        r.register(modules::FORMAT, modules::factory);
        r
    }

    pub fn register<F>(&mut self, format: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&str, &EncodeOptions) -> Result<Box<dyn Symbology>, ConstructError>
            + Send
            + Sync
            + 'static,
    {
        self.factories.insert(format.into(), Box::new(factory));
        self
    }

    #[inline]
    pub fn contains(&self, format: &str) -> bool {
        self.factories.contains_key(format)
    }

    /// Зарегистрированные форматы в алфавитном порядке.
    pub fn formats(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    fn build(
        &self,
        format: &str,
        value: &str,
        options: &EncodeOptions,
    ) -> Result<Box<dyn Symbology>, BarcodeError> {
        let invalid_format = || BarcodeError::InvalidFormat {
            format: format.to_string(),
        };
        let factory = self.factories.get(format).ok_or_else(|| {
            warn!("unknown barcode format {format:?}");
            invalid_format()
        })?;
        factory(value, options).map_err(|e| {
            warn!("{format}: {e}");
            invalid_format()
        })
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("formats", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Закодировать значение через провайдера формата `format`.
pub fn encode(
    registry: &Registry,
    value: Option<&str>,
    format: &str,
    options: &EncodeOptions,
) -> Result<EncodedSymbol, BarcodeError> {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => {
            warn!("empty barcode value rejected");
            return Err(BarcodeError::InvalidInput);
        }
    };

    let encoder = registry.build(format, value, options)?;
    if !encoder.valid() {
        warn!("{format}: value {value:?} rejected by encoder");
        return Err(BarcodeError::InvalidValueForFormat {
            format: format.to_string(),
        });
    }

    let encoded = encoder.encode();
    debug!("{format}: {value:?} -> {} modules", encoded.len());
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Тестовая «символика»: цифры -> 4 модуля на цифру (1 + 3 бита), чётная длина.
    struct Digits(String);

    impl Symbology for Digits {
        fn valid(&self) -> bool {
            self.0.len() % 2 == 0 && self.0.bytes().all(|b| b.is_ascii_digit())
        }

        fn encode(&self) -> EncodedSymbol {
            let data: String = self
                .0
                .bytes()
                .map(|b| format!("1{:03b}", (b - b'0') & 0b111))
                .collect();
            EncodedSymbol::new(data).with_text(self.0.clone())
        }
    }

    fn digits_registry() -> Registry {
        let mut r = Registry::with_builtin();
        r.register("DIGITS", |v: &str, _: &EncodeOptions| {
            Ok(Box::new(Digits(v.to_string())) as Box<dyn Symbology>)
        });
        r.register("BROKEN", |_: &str, _: &EncodeOptions| {
            Err(ConstructError("no tables".into()))
        });
        r
    }

    #[test]
    fn unknown_format_is_invalid_format() {
        let r = digits_registry();
        let err = encode(&r, Some("12"), "EAN99", &EncodeOptions::default()).unwrap_err();
        assert_eq!(
            err,
            BarcodeError::InvalidFormat {
                format: "EAN99".into()
            }
        );
        assert_eq!(err.to_string(), "Invalid barcode format.");
    }

    #[test]
    fn construction_failure_is_invalid_format() {
        let r = digits_registry();
        let err = encode(&r, Some("12"), "BROKEN", &EncodeOptions::default()).unwrap_err();
        assert!(matches!(err, BarcodeError::InvalidFormat { .. }));
    }

    #[test]
    fn invalid_value_for_format() {
        let r = digits_registry();
        let err = encode(&r, Some("123"), "DIGITS", &EncodeOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid barcode for selected format.");
    }

    #[test]
    fn empty_value_rejected_before_factory() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let mut r = Registry::new();
        r.register("DIGITS", move |v: &str, _: &EncodeOptions| {
            seen.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(Digits(v.to_string())) as Box<dyn Symbology>)
        });

        let opts = EncodeOptions::default();
        assert_eq!(encode(&r, Some(""), "DIGITS", &opts), Err(BarcodeError::InvalidInput));
        assert_eq!(encode(&r, None, "DIGITS", &opts), Err(BarcodeError::InvalidInput));
        // даже неизвестный формат не проверяется раньше значения
        assert_eq!(encode(&r, None, "NOPE", &opts), Err(BarcodeError::InvalidInput));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn encode_result_is_passed_through() {
        let r = digits_registry();
        let s = encode(&r, Some("05"), "DIGITS", &EncodeOptions::default()).unwrap();
        assert_eq!(s.data, "10001101");
        assert_eq!(s.text.as_deref(), Some("05"));
    }

    #[test]
    fn formats_are_listed() {
        let r = digits_registry();
        let f: Vec<&str> = r.formats().collect();
        assert_eq!(f, vec!["BROKEN", "DIGITS", "MODULES"]);
        assert!(r.contains("MODULES"));
        assert!(!r.contains("modules"));
    }
}
