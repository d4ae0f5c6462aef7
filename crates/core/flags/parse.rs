/*!
Разбирает аргументы командной строки в структурированное и
типизированное представление.
*/

use std::ffi::OsString;

use anyhow::Context;

use crate::flags::{
    Flag, FlagValue,
    defs::FLAGS,
    hiargs::HiArgs,
    lowargs::{LoggingMode, LowArgs, SpecialMode},
};

/// Результат разбора аргументов CLI.
///
/// Это в основном `anyhow::Result<T>`, но с одним дополнительным
/// вариантом, который населяется, когда hl должен выполнить
/// «специальный» режим: пользователь предоставил `-h/--help` или
/// `-V/--version`. Специальный вариант позволяет разбору CLI коротко
/// замыкать как можно раньше, не преобразуя низкоуровневые аргументы
/// в высокоуровневые.
#[derive(Debug)]
pub(crate) enum ParseResult<T> {
    Special(SpecialMode),
    Ok(T),
    Err(anyhow::Error),
}

impl<T> ParseResult<T> {
    /// Если этот результат — `Ok`, применяет к нему `then`. В противном
    /// случае возвращает результат без изменений.
    fn and_then<U>(
        self,
        mut then: impl FnMut(T) -> ParseResult<U>,
    ) -> ParseResult<U> {
        match self {
            ParseResult::Special(mode) => ParseResult::Special(mode),
            ParseResult::Ok(t) => then(t),
            ParseResult::Err(err) => ParseResult::Err(err),
        }
    }
}

/// Разбирает аргументы CLI и преобразует их в высокоуровневое
/// представление.
pub(crate) fn parse() -> ParseResult<HiArgs> {
    parse_low().and_then(|low| match HiArgs::from_low_args(low) {
        Ok(hi) => ParseResult::Ok(hi),
        Err(err) => ParseResult::Err(err),
    })
}

/// Разбирает аргументы CLI только в их низкоуровневое представление.
///
/// Это также установит глобальные флаги состояния, такие как уровень
/// журнала.
fn parse_low() -> ParseResult<LowArgs> {
    if let Err(err) = crate::logger::Logger::init() {
        let err = anyhow::anyhow!("не удалось инициализировать логгер: {err}");
        return ParseResult::Err(err);
    }

    let mut low = LowArgs::default();
    if let Err(err) = Parser::new().parse(std::env::args_os().skip(1), &mut low)
    {
        return ParseResult::Err(err);
    }
    set_log_levels(&low);
    if let Some(special) = low.special.take() {
        return ParseResult::Special(special);
    }
    ParseResult::Ok(low)
}

/// Устанавливает глобальное состояние ведения журнала на основе
/// низкоуровневых аргументов.
fn set_log_levels(low: &LowArgs) {
    match low.logging {
        Some(LoggingMode::Trace) => {
            log::set_max_level(log::LevelFilter::Trace)
        }
        Some(LoggingMode::Debug) => {
            log::set_max_level(log::LevelFilter::Debug)
        }
        None => log::set_max_level(log::LevelFilter::Warn),
    }
}

/// Разбирает последовательность аргументов CLI в низкоуровневое
/// типизированное представление аргументов.
///
/// Это открыто для тестирования того, что из CLI разбираются правильные
/// низкоуровневые аргументы. Оно не настраивает ведение журнала.
///
/// Предполагается, что данный итератор *не* начинается с имени
/// бинарного файла.
#[cfg(test)]
pub(crate) fn parse_low_raw(
    rawargs: impl IntoIterator<Item = impl Into<OsString>>,
) -> anyhow::Result<LowArgs> {
    let mut args = LowArgs::default();
    Parser::new().parse(rawargs, &mut args)?;
    Ok(args)
}

/// Парсер для превращения последовательности аргументов командной
/// строки в более строго типизированный набор аргументов.
#[derive(Debug)]
struct Parser {
    /// Единая карта, которая содержит все возможные имена флагов,
    /// короткие и длинные, и отображает их в индексы в `info`.
    map: FlagMap,
    /// Карта от ID, возвращаемых `map`, к информации о флаге.
    info: Vec<FlagInfo>,
}

impl Parser {
    /// Создаёт новый парсер.
    ///
    /// Это всегда создаёт один и тот же парсер и только один раз.
    /// Вызывающие могут вызывать это неоднократно, и парсер будет
    /// построен только один раз.
    fn new() -> &'static Parser {
        use std::sync::OnceLock;

        // Состояние парсера неизменяемо и полностью определяется FLAGS,
        // поэтому его можно инициализировать ровно один раз.
        static P: OnceLock<Parser> = OnceLock::new();
        P.get_or_init(|| {
            let mut infos = vec![];
            for &flag in FLAGS.iter() {
                infos.push(FlagInfo { flag, name: Ok(flag.name_long()) });
                if let Some(byte) = flag.name_short() {
                    infos.push(FlagInfo { flag, name: Err(byte) });
                }
            }
            let map = FlagMap::new(&infos);
            Parser { map, info: infos }
        })
    }

    /// Разбирает данные аргументы CLI в низкоуровневое представление.
    ///
    /// Данный итератор *не* должен начинаться с имени бинарного файла.
    fn parse<I, O>(&self, rawargs: I, args: &mut LowArgs) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = O>,
        O: Into<OsString>,
    {
        let mut p = lexopt::Parser::from_args(rawargs);
        while let Some(arg) = p.next().context("invalid CLI arguments")? {
            let lookup = match arg {
                lexopt::Arg::Value(value) => {
                    args.positional.push(value);
                    continue;
                }
                lexopt::Arg::Short(ch) if ch == 'h' => {
                    // Особый случай -h/--help: поведение различается в
                    // зависимости от того, дан короткий или длинный флаг.
                    args.special = Some(SpecialMode::HelpShort);
                    continue;
                }
                lexopt::Arg::Short(ch) if ch == 'V' => {
                    // Особый случай -V/--version, как и для -h/--help.
                    args.special = Some(SpecialMode::VersionShort);
                    continue;
                }
                lexopt::Arg::Short(ch) => self.find_short(ch),
                lexopt::Arg::Long(name) if name == "help" => {
                    args.special = Some(SpecialMode::HelpLong);
                    continue;
                }
                lexopt::Arg::Long(name) if name == "version" => {
                    args.special = Some(SpecialMode::VersionLong);
                    continue;
                }
                lexopt::Arg::Long(name) => self.find_long(name),
            };
            let mat = match lookup {
                FlagLookup::Match(mat) => mat,
                FlagLookup::UnrecognizedShort(name) => {
                    anyhow::bail!("нераспознанный флаг -{name}")
                }
                FlagLookup::UnrecognizedLong(name) => {
                    anyhow::bail!("нераспознанный флаг --{name}")
                }
            };
            let value = if mat.flag.is_switch() {
                FlagValue::Switch(true)
            } else {
                FlagValue::Value(p.value().with_context(|| {
                    format!("отсутствует значение для флага {mat}")
                })?)
            };
            mat.flag
                .update(value, args)
                .with_context(|| format!("ошибка разбора флага {mat}"))?;
        }
        Ok(())
    }

    /// Ищет флаг по его короткому имени.
    fn find_short(&self, ch: char) -> FlagLookup<'_> {
        if !ch.is_ascii() {
            return FlagLookup::UnrecognizedShort(ch);
        }
        let byte = u8::try_from(ch).unwrap();
        let Some(index) = self.map.find(&[byte]) else {
            return FlagLookup::UnrecognizedShort(ch);
        };
        FlagLookup::Match(&self.info[index])
    }

    /// Ищет флаг по его длинному имени.
    fn find_long(&self, name: &str) -> FlagLookup<'_> {
        let Some(index) = self.map.find(name.as_bytes()) else {
            return FlagLookup::UnrecognizedLong(name.to_string());
        };
        FlagLookup::Match(&self.info[index])
    }
}

/// Результат поиска имени флага.
#[derive(Debug)]
enum FlagLookup<'a> {
    /// Поиск нашёл совпадение, и метаданные для флага прикреплены.
    Match(&'a FlagInfo),
    /// Данное короткое имя нераспознано.
    UnrecognizedShort(char),
    /// Данное длинное имя нераспознано.
    UnrecognizedLong(String),
}

/// Информация о флаге, связанная с ID флага в карте флагов.
#[derive(Debug)]
struct FlagInfo {
    /// Объект флага и его связанные метаданные.
    flag: &'static dyn Flag,
    /// Имя, по которому флаг найден: длинное имя или байт короткого.
    name: Result<&'static str, u8>,
}

impl std::fmt::Display for FlagInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.name {
            Ok(long) => write!(f, "--{long}"),
            Err(short) => write!(f, "-{short}", short = char::from(short)),
        }
    }
}

/// Карта от имён флагов (коротких и длинных) к их ID.
///
/// Как только ID известен, он может быть использован для поиска
/// метаданных флага во внутреннем состоянии парсера.
#[derive(Debug)]
struct FlagMap {
    map: std::collections::HashMap<Vec<u8>, usize>,
}

impl FlagMap {
    /// Создаёт новую карту флагов для данной информации о флагах.
    ///
    /// Индекс каждой информации о флаге соответствует её ID.
    fn new(infos: &[FlagInfo]) -> FlagMap {
        let mut map = std::collections::HashMap::with_capacity(infos.len());
        for (i, info) in infos.iter().enumerate() {
            match info.name {
                Ok(name) => {
                    assert_eq!(None, map.insert(name.as_bytes().to_vec(), i));
                }
                Err(byte) => {
                    assert_eq!(None, map.insert(vec![byte], i));
                }
            }
        }
        FlagMap { map }
    }

    /// Ищет ID флага с данным именем.
    fn find(&self, name: &[u8]) -> Option<usize> {
        self.map.get(name).copied()
    }
}
