//! Пропсы штрих-кода (то, что хост задаёт виджету) + загрузка из JSON.
//! Ключи в camelCase, значения по умолчанию как у исходного компонента.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::PropsError;
use crate::encode::EncodeOptions;

/// Горизонтальный отступ контейнера с каждой стороны.
pub const PADDING_X: f64 = 15.0;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BarcodeProps {
    /// Что кодируем. `None` — значение не задано (будет `InvalidInput`).
    pub value: Option<String>,
    /// Имя формата в реестре провайдера.
    pub format: String,
    /// Переопределённая подпись.
    pub text: Option<String>,
    /// Ширина контейнера; 0 — растянуть по хосту.
    pub width: f64,
    /// Высота баров.
    pub height: f64,
    pub line_color: String,
    pub text_color: String,
    pub text_font: String,
    pub background: String,
}

impl Default for BarcodeProps {
    fn default() -> Self {
        Self {
            value: None,
            format: "CODE128".to_string(),
            text: None,
            width: 0.0,
            height: 100.0,
            line_color: "#000000".to_string(),
            text_color: "#000000".to_string(),
            text_font: "System".to_string(),
            background: "#ffffff".to_string(),
        }
    }
}

impl BarcodeProps {
    #[inline]
    pub fn new(value: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            format: format.into(),
            ..Self::default()
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PropsError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| PropsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw).map_err(|source| PropsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Опции, которые уходят провайдеру.
    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            text: self.text.clone(),
            height: self.height,
        }
    }

    /// Ширина контейнера: реальная раскладка хоста, иначе `width` из пропсов.
    pub fn container_width(&self, viewport: Option<Viewport>) -> f64 {
        match viewport {
            Some(v) => v.width,
            None => self.width,
        }
    }

    /// Ширина под бары = контейнер минус отступы, не меньше 0.
    pub fn available_width(&self, viewport: Option<Viewport>) -> f64 {
        (self.container_width(viewport) - 2.0 * PADDING_X).max(0.0)
    }
}

/// Итоговая ширина контейнера после раскладки у хоста.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
}

impl Viewport {
    #[inline]
    pub fn new(width: f64) -> Self {
        Self { width }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_component() {
        let p = BarcodeProps::from_json_str("{}").unwrap();
        assert_eq!(p, BarcodeProps::default());
        assert_eq!(p.format, "CODE128");
        assert_eq!(p.height, 100.0);
        assert_eq!(p.text_font, "System");
        assert!(p.value.is_none());
    }

    #[test]
    fn camel_case_keys() {
        let p = BarcodeProps::from_json_str(
            r##"{"value":"1101","format":"MODULES","lineColor":"#ff0000","textFont":"Mono","width":230}"##,
        )
        .unwrap();
        assert_eq!(p.value.as_deref(), Some("1101"));
        assert_eq!(p.line_color, "#ff0000");
        assert_eq!(p.text_font, "Mono");
        assert_eq!(p.width, 230.0);
        assert_eq!(p.background, "#ffffff");
    }

    #[test]
    fn null_value_stays_none() {
        let p = BarcodeProps::from_json_str(r#"{"value":null}"#).unwrap();
        assert!(p.value.is_none());
    }

    #[test]
    fn available_width_subtracts_padding() {
        let p = BarcodeProps {
            width: 130.0,
            ..BarcodeProps::default()
        };
        assert_eq!(p.available_width(None), 100.0);
        assert_eq!(p.available_width(Some(Viewport::new(50.0))), 20.0);
        assert_eq!(p.available_width(Some(Viewport::new(10.0))), 0.0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = BarcodeProps::from_json_file("/nonexistent/props.json").unwrap_err();
        assert!(matches!(err, PropsError::Io { .. }));
    }
}
