#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate, clippy::missing_errors_doc, clippy::doc_markdown)]

// Публичные модули
pub mod api;     // верхний уровень: render + кэширующий BarcodeView
pub mod core;    // общие типы и ошибки
pub mod prelude; // удобные re-export'ы

pub mod encode;  // адаптер к внешнему провайдеру символик
pub mod layout;  // сжатие run'ов в прямоугольники
pub mod props;   // пропсы виджета + загрузка из JSON
pub mod svg;     // SVG-документ

// Слой совместимости со старой доставкой ошибок (колбэк или исключение)
pub mod compat;

pub use crate::api::{render, BarcodeView, Rendering, Style};
pub use crate::core::error::{BarcodeError, ConstructError, PropsError};
pub use crate::core::types::{EncodedSymbol, Rectangle, RenderOptions};
pub use crate::encode::{encode, EncodeOptions, Registry, Symbology};
pub use crate::layout::compact;
pub use crate::props::{BarcodeProps, Viewport};

/// One-shot: пропсы + ширина контейнера -> path-команды баров.
#[inline]
pub fn render_paths(
    registry: &Registry,
    props: &BarcodeProps,
    viewport: Option<Viewport>,
) -> Result<Vec<String>, BarcodeError> {
    render(registry, props, viewport).map(|r| r.paths())
}

/// One-shot: сразу SVG-документ.
#[inline]
pub fn render_svg(
    registry: &Registry,
    props: &BarcodeProps,
    viewport: Option<Viewport>,
) -> Result<String, BarcodeError> {
    render(registry, props, viewport).map(|r| svg::to_document(&r))
}
