//! Раскладка бинарной строки модулей в прямоугольники баров.
//!
//! Один проход: считаем длину текущего run'а единиц, на первом нуле после
//! run'а выпускаем прямоугольник. Хвостовой run (строка кончается на '1')
//! закрываем после цикла, иначе последний бар теряется.
//!
//! x и ширина считаются напрямую из целых индексов × ширина модуля,
//! без накопления float-ошибки.

use crate::core::types::{Rectangle, RenderOptions};

/// Ширина модуля: доступная ширина / число модулей. Для пустой строки — 0.
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn module_width(available_width: f64, bit_count: usize) -> f64 {
    if bit_count == 0 {
        return 0.0;
    }
    available_width / bit_count as f64
}

/// Сжать строку '0'/'1' в упорядоченный список прямоугольников.
/// Любой символ кроме '1' считается пробелом.
pub fn compact(bits: &str, module_width: f64, bar_height: f64) -> Vec<Rectangle> {
    let mut out = Vec::new();
    let mut run_length = 0usize;

    for (b, c) in bits.bytes().enumerate() {
        if c == b'1' {
            run_length += 1;
        } else if run_length > 0 {
            out.push(bar(b - run_length, run_length, module_width, bar_height));
            run_length = 0;
        }
    }

    // строка кончается на '1' — выпускаем последний бар
    if run_length > 0 {
        out.push(bar(bits.len() - run_length, run_length, module_width, bar_height));
    }
    out
}

/// То же, но с параметрами из `RenderOptions`.
#[inline]
pub fn compact_with(bits: &str, opts: &RenderOptions) -> Vec<Rectangle> {
    compact(bits, opts.module_width, opts.bar_height)
}

/// Path-команды для списка прямоугольников, по строке на бар.
pub fn paths(rects: &[Rectangle]) -> Vec<String> {
    rects.iter().map(Rectangle::to_path).collect()
}

#[inline]
#[allow(clippy::cast_precision_loss)]
fn bar(start: usize, len: usize, module_width: f64, bar_height: f64) -> Rectangle {
    Rectangle::new(
        start as f64 * module_width,
        0.0,
        len as f64 * module_width,
        bar_height,
    )
}
