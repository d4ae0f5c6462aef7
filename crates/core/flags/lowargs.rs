/*!
Предоставляет определение низкоуровневых аргументов из флагов CLI.
*/

use std::ffi::OsString;

use bstr::BString;

/// Коллекция «низкоуровневых» аргументов.
///
/// «Низкоуровневый» здесь означает максимально близкий к фактическим
/// флагам CLI. Заполнение низкоуровневых аргументов не требует ничего,
/// кроме проверки того, что предоставил пользователь: например, шаблон
/// здесь ещё не скомпилирован, а маркеры лишь раскодированы из
/// экранирующих последовательностей.
///
/// Низкоуровневые аргументы заполняются парсером напрямую через метод
/// `update` соответствующей реализации трейта `Flag`.
#[derive(Debug, Default)]
pub(crate) struct LowArgs {
    // Существенные аргументы.
    pub(crate) special: Option<SpecialMode>,
    pub(crate) positional: Vec<OsString>,
    // Всё остальное, лексикографически.
    pub(crate) after: Option<BString>,
    pub(crate) before: Option<BString>,
    pub(crate) extended: bool,
    pub(crate) ignore_case: bool,
    pub(crate) logging: Option<LoggingMode>,
}

/// «Специальный» режим, который превалирует над всем остальным.
///
/// Когда присутствует один из этих режимов, он переопределяет всё
/// остальное и заставляет hl коротко замыкать: в частности, мы избегаем
/// преобразования низкоуровневых аргументов в высокоуровневые, которое
/// может завершиться ошибкой (например, из-за невалидного шаблона).
/// Это страховка, чтобы информация о версии и помощи была доступна
/// практически всегда.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum SpecialMode {
    /// Показывает сжатую версию вывода «помощи»: каждый флаг и краткое
    /// описание в одной строке. Соответствует флагу `-h`.
    HelpShort,
    /// Показывает подробную версию вывода «помощи». Соответствует
    /// флагу `--help`.
    HelpLong,
    /// Показывает сжатую информацию о версии: `hl x.y.z`.
    VersionShort,
    /// Показывает подробную информацию о версии.
    VersionLong,
}

/// Режим ведения журнала, запрошенный на CLI.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum LoggingMode {
    Debug,
    Trace,
}
