// src/prelude.rs
//! `use barpath::prelude::*;` — всё, что обычно нужно хосту.

pub use crate::api::{render, BarcodeView, Rendering, Style};
pub use crate::core::error::BarcodeError;
pub use crate::core::types::{EncodedSymbol, Rectangle, RenderOptions};
pub use crate::encode::{EncodeOptions, Registry, Symbology};
pub use crate::layout::{compact, module_width};
pub use crate::props::{BarcodeProps, Viewport};
