/// Ошибка, которая может возникнуть в этом крейте.
///
/// Как правило, эта ошибка соответствует проблемам с самим шаблоном:
/// либо он отвергнут транслятором базовой грамматики, либо нижележащим
/// движком регулярных выражений. После успешной компиляции поиск
/// совпадений уже не может завершиться неудачей.
#[derive(Clone, Debug)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn regex<E: std::error::Error>(err: E) -> Error {
        Error { kind: ErrorKind::Regex(err.to_string()) }
    }

    pub(crate) fn syntax<S: Into<String>>(msg: S) -> Error {
        Error { kind: ErrorKind::Syntax(msg.into()) }
    }

    /// Возвращает тип этой ошибки.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

/// Тип ошибки.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Шаблон отвергнут нижележащим движком регулярных выражений.
    /// Сообщение движка приводится как есть.
    Regex(String),
    /// Шаблон отвергнут транслятором базовой грамматики ещё до того,
    /// как дошёл до движка. Например, непарная `\(` или обратная
    /// ссылка, которую движок не поддерживает.
    Syntax(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::Regex(ref msg) => write!(f, "{}", msg),
            ErrorKind::Syntax(ref msg) => write!(f, "{}", msg),
        }
    }
}
