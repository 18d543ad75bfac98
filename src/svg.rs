//! Сериализация `Rendering` в самостоятельный SVG-документ.
//!
//! Геометрия контейнера как у исходного виджета: отступы 15px по бокам и 10px
//! сверху/снизу, подпись кеглем 15 с отступом 5 под барами, по центру.
//! Все бары идут одним `<path>`: `d` = склейка path-команд.

use std::fmt::Write;

use crate::api::Rendering;
use crate::core::types::Rectangle;
use crate::props::PADDING_X;

pub const PADDING_Y: f64 = 10.0;
pub const FONT_SIZE: f64 = 15.0;
pub const TEXT_MARGIN: f64 = 5.0;

/// Склеить path-команды всех баров в одно значение `d`.
pub fn path_data(rects: &[Rectangle]) -> String {
    let mut d = String::with_capacity(rects.len() * 24);
    for r in rects {
        // запись в String не падает
        let _ = write!(d, "{r}");
    }
    d
}

/// Размер документа: (ширина, высота) с отступами и местом под подпись.
pub fn document_size(rendering: &Rendering) -> (f64, f64) {
    let caption = if rendering.caption.is_some() {
        TEXT_MARGIN + FONT_SIZE
    } else {
        0.0
    };
    (
        rendering.width + 2.0 * PADDING_X,
        rendering.height + caption + 2.0 * PADDING_Y,
    )
}

pub fn to_document(rendering: &Rendering) -> String {
    let (w, h) = document_size(rendering);
    let style = &rendering.style;
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = writeln!(
        out,
        r#"  <rect x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#,
        escape(&style.background)
    );
    if !rendering.bars.is_empty() {
        let _ = writeln!(
            out,
            r#"  <path transform="translate({PADDING_X},{PADDING_Y})" d="{}" fill="{}"/>"#,
            path_data(&rendering.bars),
            escape(&style.line_color)
        );
    }
    if let Some(caption) = &rendering.caption {
        let x = w / 2.0;
        // базовая линия текста = верх подписи + кегль
        let y = PADDING_Y + rendering.height + TEXT_MARGIN + FONT_SIZE;
        let _ = writeln!(
            out,
            r#"  <text x="{x}" y="{y}" text-anchor="middle" font-size="{FONT_SIZE}" font-family="{}" fill="{}">{}</text>"#,
            escape(&style.text_font),
            escape(&style.text_color),
            escape(caption)
        );
    }
    out.push_str("</svg>\n");
    out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
