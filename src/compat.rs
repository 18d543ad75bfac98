// src/compat.rs
//! Совместимость со старым поведением «колбэк или исключение».
//! Внутри всё идёт через `Result`; здесь ошибка либо отдаётся колбэку
//! (и тогда результата просто нет), либо поднимается вызывающему.

use crate::core::error::BarcodeError;
use crate::core::types::EncodedSymbol;
use crate::encode::{encode, EncodeOptions, Registry};

/// Колбэк ошибок в стиле `onError`.
pub type ErrorCallback<'a> = &'a mut dyn FnMut(BarcodeError);

/// Развести результат по старой схеме:
/// Ok -> Ok(Some), Err + колбэк -> колбэк и Ok(None), Err без колбэка -> Err.
pub fn deliver<T>(
    result: Result<T, BarcodeError>,
    on_error: Option<ErrorCallback<'_>>,
) -> Result<Option<T>, BarcodeError> {
    match (result, on_error) {
        (Ok(v), _) => Ok(Some(v)),
        (Err(e), Some(cb)) => {
            cb(e);
            Ok(None)
        }
        (Err(e), None) => Err(e),
    }
}

/// Старый `encode()`: при заданном колбэке ошибки не поднимаются.
pub fn encode_or_report(
    registry: &Registry,
    value: Option<&str>,
    format: &str,
    options: &EncodeOptions,
    on_error: Option<ErrorCallback<'_>>,
) -> Result<Option<EncodedSymbol>, BarcodeError> {
    deliver(encode(registry, value, format, options), on_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_swallows_error() {
        let r = Registry::with_builtin();
        let mut seen = Vec::new();
        let mut cb = |e: BarcodeError| seen.push(e);

        let out = encode_or_report(&r, Some("1"), "CODE39", &EncodeOptions::default(), Some(&mut cb));
        assert_eq!(out, Ok(None));
        assert_eq!(
            seen,
            vec![BarcodeError::InvalidFormat {
                format: "CODE39".into()
            }]
        );
    }

    #[test]
    fn without_callback_error_is_raised() {
        let r = Registry::with_builtin();
        let out = encode_or_report(&r, Some(""), "MODULES", &EncodeOptions::default(), None);
        assert_eq!(out, Err(BarcodeError::InvalidInput));
    }

    #[test]
    fn success_ignores_callback() {
        let r = Registry::with_builtin();
        let mut calls = 0;
        let mut cb = |_: BarcodeError| calls += 1;
        let out = encode_or_report(&r, Some("10"), "MODULES", &EncodeOptions::default(), Some(&mut cb))
            .unwrap()
            .unwrap();
        assert_eq!(out.data, "10");
        assert_eq!(calls, 0);
    }
}
