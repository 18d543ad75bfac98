// src/core/types.rs
//
// Общие типы, независимые от конкретного энкодера и поверхности отрисовки.

use std::fmt;

/// Результат работы энкодера: подпись + биты модулей.
/// `data` — строка из '0'/'1', по символу на модуль (как отдаёт провайдер).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedSymbol {
    /// Подпись, которую предлагает энкодер (может отсутствовать).
    pub text: Option<String>,
    pub data: String,
}

impl EncodedSymbol {
    #[inline]
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            text: None,
            data: data.into(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Число модулей (длина бинарной строки).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Биты как bool: true = бар (чёрный), false = пробел.
    #[cfg(test)]
    pub(crate) fn modules(&self) -> Vec<bool> {
        self.data.bytes().map(|b| b == b'1').collect()
    }
}

/// Один сплошной run единиц, уже в пикселях.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Правая граница.
    #[cfg(test)]
    pub(crate) fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Замкнутый прямоугольный контур в синтаксисе SVG path:
    /// `M<x>,<y>h<width>v<height>h-<width>z`.
    pub fn to_path(&self) -> String {
        self.to_string()
    }
}

/// Display = та же path-команда (удобно для `write!` в готовый буфер).
/// f64 печатается в кратчайшей форме: 4.0 -> "4", 2.5 -> "2.5".
impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M{},{}h{}v{}h-{}z",
            self.x, self.y, self.width, self.height, self.width
        )
    }
}

/// Параметры раскладки для одного запроса.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Ширина одного модуля в пикселях.
    pub module_width: f64,
    /// Высота баров.
    pub bar_height: f64,
}

impl RenderOptions {
    #[inline]
    pub fn new(module_width: f64, bar_height: f64) -> Self {
        Self {
            module_width,
            bar_height,
        }
    }
}
