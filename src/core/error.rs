// src/core/error.rs
//
// Ошибки верхнего уровня: кодирование значения и загрузка пропсов.

use std::path::PathBuf;
use thiserror::Error;

/// Ошибки кодирования. Тексты сообщений совместимы со старым компонентом.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BarcodeError {
    /// Значение отсутствует или пустое (проверяется до поиска энкодера).
    #[error("Invalid barcode value.")]
    InvalidInput,

    /// Формат неизвестен или энкодер не удалось сконструировать.
    #[error("Invalid barcode format.")]
    InvalidFormat { format: String },

    /// Энкодер создан, но значение не проходит проверку формата.
    #[error("Invalid barcode for selected format.")]
    InvalidValueForFormat { format: String },
}

/// Провайдер не смог построить энкодер для значения.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("encoder construction failed: {0}")]
pub struct ConstructError(pub String);

/// Ошибки чтения пропсов из JSON-файла.
#[derive(Debug, Error)]
pub enum PropsError {
    #[error("failed to read props at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse props at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
