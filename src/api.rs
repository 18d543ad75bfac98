// src/api.rs
//
// Верхнеуровневый API: чистая функция `render` (пропсы + ширина -> бары)
// и `BarcodeView` — кэш на стороне хоста, который пересчитывает бары
// только когда поменялись входы.

use log::debug;

use crate::compat::{deliver, ErrorCallback};
use crate::core::error::BarcodeError;
use crate::core::types::{EncodedSymbol, Rectangle, RenderOptions};
use crate::encode::{encode, Registry};
use crate::layout::{compact_with, module_width, paths};
use crate::props::{BarcodeProps, Viewport};

/// Цвета и шрифт — для ядра непрозрачные строки.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Style {
    pub line_color: String,
    pub text_color: String,
    pub text_font: String,
    pub background: String,
}

impl From<&BarcodeProps> for Style {
    fn from(p: &BarcodeProps) -> Self {
        Self {
            line_color: p.line_color.clone(),
            text_color: p.text_color.clone(),
            text_font: p.text_font.clone(),
            background: p.background.clone(),
        }
    }
}

/// Готовая раскладка: что отдать поверхности отрисовки.
#[derive(Clone, Debug, PartialEq)]
pub struct Rendering {
    pub bars: Vec<Rectangle>,
    pub caption: Option<String>,
    /// Ширина области баров (без отступов контейнера).
    pub width: f64,
    pub height: f64,
    pub style: Style,
}

impl Rendering {
    /// Path-команды, по одной на бар.
    #[inline]
    pub fn paths(&self) -> Vec<String> {
        paths(&self.bars)
    }
}

/// Закодировать и разложить. Чистая функция входов.
pub fn render(
    registry: &Registry,
    props: &BarcodeProps,
    viewport: Option<Viewport>,
) -> Result<Rendering, BarcodeError> {
    let encoded = encode(
        registry,
        props.value.as_deref(),
        &props.format,
        &props.encode_options(),
    )?;
    Ok(lay_out(&encoded, props, props.available_width(viewport)))
}

/// Раскладка уже закодированного символа в заданную ширину.
pub fn lay_out(encoded: &EncodedSymbol, props: &BarcodeProps, available_width: f64) -> Rendering {
    let opts = RenderOptions::new(module_width(available_width, encoded.len()), props.height);
    let bars = compact_with(&encoded.data, &opts);
    debug!(
        "{} modules -> {} bars (module {:.3}px, width {available_width})",
        encoded.len(),
        bars.len(),
        opts.module_width
    );

    Rendering {
        bars,
        // подпись из пропсов важнее той, что предложил энкодер
        caption: props.text.clone().or_else(|| encoded.text.clone()),
        width: available_width,
        height: props.height,
        style: Style::from(props),
    }
}

/// Всё, от чего зависит геометрия. Цвета сюда не входят.
#[derive(Clone, Debug, PartialEq)]
struct LayoutKey {
    value: Option<String>,
    format: String,
    text: Option<String>,
    height: f64,
    available_width: f64,
}

impl LayoutKey {
    fn of(props: &BarcodeProps, viewport: Option<Viewport>) -> Self {
        Self {
            value: props.value.clone(),
            format: props.format.clone(),
            text: props.text.clone(),
            height: props.height,
            available_width: props.available_width(viewport),
        }
    }
}

/// Состояние виджета на стороне хоста.
/// Последняя удачная раскладка живёт до следующего успешного пересчёта;
/// ошибка её не трогает.
#[derive(Debug, Default)]
pub struct BarcodeView {
    props: BarcodeProps,
    viewport: Option<Viewport>,
    cache: Option<(LayoutKey, Rendering)>,
}

impl BarcodeView {
    pub fn new(props: BarcodeProps) -> Self {
        Self {
            props,
            ..Self::default()
        }
    }

    #[inline]
    pub fn props(&self) -> &BarcodeProps {
        &self.props
    }

    pub fn set_props(&mut self, props: BarcodeProps) {
        self.props = props;
    }

    /// Хост сообщил новую ширину контейнера (onLayout).
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    /// Последняя удачная раскладка.
    #[inline]
    pub fn rendering(&self) -> Option<&Rendering> {
        self.cache.as_ref().map(|(_, r)| r)
    }

    /// Нужен ли пересчёт геометрии.
    pub fn is_stale(&self) -> bool {
        let key = LayoutKey::of(&self.props, self.viewport);
        !matches!(&self.cache, Some((k, _)) if *k == key)
    }

    /// Пересчитать, если входы поменялись. При ошибке кэш остаётся прежним.
    pub fn refresh(&mut self, registry: &Registry) -> Result<&Rendering, BarcodeError> {
        let key = LayoutKey::of(&self.props, self.viewport);
        let entry = match self.cache.take() {
            Some((cached_key, mut cached)) if cached_key == key => {
                // геометрия та же, но цвета могли поменяться
                cached.style = Style::from(&self.props);
                debug!("barcode layout unchanged, skipping encode");
                (cached_key, cached)
            }
            previous => match render(registry, &self.props, self.viewport) {
                Ok(fresh) => (key, fresh),
                Err(e) => {
                    self.cache = previous;
                    return Err(e);
                }
            },
        };
        Ok(&self.cache.insert(entry).1)
    }

    /// `refresh` со старой доставкой ошибок через колбэк:
    /// при заданном колбэке ошибка уходит в него, а результата нет.
    pub fn refresh_with(
        &mut self,
        registry: &Registry,
        on_error: Option<ErrorCallback<'_>>,
    ) -> Result<Option<&Rendering>, BarcodeError> {
        let result = self.refresh(registry).map(|_| ());
        Ok(deliver(result, on_error)?.and(self.rendering()))
    }
}
