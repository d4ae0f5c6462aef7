use std::ffi::OsStr;

use bstr::ByteSlice;

/// Ошибка, возникающая, когда шаблон содержит невалидный UTF-8.
///
/// Функции преобразования стандартной библиотеки из `OsStr` не дают
/// хороших сообщений об ошибках, поэтому мы вычисляем смещение первого
/// невалидного байта сами и включаем его в сообщение.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidPatternError {
    original: String,
    valid_up_to: usize,
}

impl InvalidPatternError {
    /// Возвращает индекс байта, на котором заканчивается валидный
    /// UTF-8 в исходном шаблоне.
    pub fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }
}

impl std::error::Error for InvalidPatternError {}

impl std::fmt::Display for InvalidPatternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "найден невалидный UTF-8 в шаблоне по смещению байта {}: {} \
             (шаблоны должны быть валидным UTF-8)",
            self.valid_up_to, self.original,
        )
    }
}

/// Преобразует строку ОС в шаблон регулярного выражения.
///
/// Аргументы командной строки не обязаны быть валидным UTF-8. Если
/// данный шаблон им не является, возвращается ошибка с точным
/// смещением первого невалидного байта.
pub fn pattern_from_os(pattern: &OsStr) -> Result<&str, InvalidPatternError> {
    pattern.to_str().ok_or_else(|| {
        let bytes = pattern.as_encoded_bytes();
        let valid_up_to = match bytes.to_str() {
            Err(err) => err.valid_up_to(),
            Ok(_) => bytes.len(),
        };
        InvalidPatternError {
            original: bytes.as_bstr().to_string(),
            valid_up_to,
        }
    })
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;

    use super::pattern_from_os;

    #[test]
    fn valid_utf8() {
        assert_eq!(Ok("foo[0-9]*"), pattern_from_os(OsStr::new("foo[0-9]*")));
    }

    #[test]
    #[cfg(unix)]
    fn invalid_utf8() {
        use std::os::unix::ffi::OsStrExt;

        let pattern = OsStr::from_bytes(b"ab\xFFcd");
        let err = pattern_from_os(pattern).unwrap_err();
        assert_eq!(2, err.valid_up_to());
    }
}
