/*!
Определяет все флаги, доступные в hl.

Каждый флаг соответствует unit-структуре с реализацией `Flag`. Одна
реализация может иметь короткое и длинное имя, доступные конечному
пользователю, но соответствует одному _логическому_ флагу внутри hl.
*/

use bstr::ByteVec;

use crate::flags::{
    Category, Flag, FlagValue,
    lowargs::{LoggingMode, LowArgs},
};

#[cfg(test)]
use crate::flags::parse::parse_low_raw;

/// Список всех флагов hl через реализации `Flag`.
///
/// Порядок флагов определяет порядок в сгенерированной справке внутри
/// каждой категории.
pub(super) const FLAGS: &[&dyn Flag] = &[
    &After,
    &Before,
    &Debug,
    &ExtendedRegexp,
    &IgnoreCase,
    &Trace,
];

/// -a/--after
#[derive(Debug)]
struct After;

impl Flag for After {
    fn is_switch(&self) -> bool {
        false
    }
    fn name_short(&self) -> Option<u8> {
        Some(b'a')
    }
    fn name_long(&self) -> &'static str {
        "after"
    }
    fn doc_variable(&self) -> Option<&'static str> {
        Some("STR")
    }
    fn doc_category(&self) -> Category {
        Category::Output
    }
    fn doc_short(&self) -> &'static str {
        r"Печатать STR после каждого совпадения."
    }
    fn doc_long(&self) -> &'static str {
        r"
Печатать STR сразу после каждого совпадения регулярного выражения вместо
сброса атрибутов терминала. Поддерживаются экранирующие последовательности,
например \x1B[0m, \n и \t. По умолчанию используется ANSI-последовательность,
сбрасывающая инверсию цветов.
"
    }

    fn update(&self, v: FlagValue, args: &mut LowArgs) -> anyhow::Result<()> {
        let s = convert::string(v.unwrap_value())?;
        args.after = Some(Vec::unescape_bytes(&s).into());
        Ok(())
    }
}

#[cfg(test)]
#[test]
fn test_after() {
    use bstr::BString;

    let args = parse_low_raw(None::<&str>).unwrap();
    assert_eq!(None, args.after);

    let args = parse_low_raw(["--after", ">>"]).unwrap();
    assert_eq!(Some(BString::from(">>")), args.after);

    let args = parse_low_raw(["-a", ">>"]).unwrap();
    assert_eq!(Some(BString::from(">>")), args.after);

    let args = parse_low_raw(["--after=>>"]).unwrap();
    assert_eq!(Some(BString::from(">>")), args.after);

    // Экранирующие последовательности распознаются.
    let args = parse_low_raw(["-a", r"\x1B[0m"]).unwrap();
    assert_eq!(Some(BString::from(b"\x1b[0m".as_slice())), args.after);
}

/// -b/--before
#[derive(Debug)]
struct Before;

impl Flag for Before {
    fn is_switch(&self) -> bool {
        false
    }
    fn name_short(&self) -> Option<u8> {
        Some(b'b')
    }
    fn name_long(&self) -> &'static str {
        "before"
    }
    fn doc_variable(&self) -> Option<&'static str> {
        Some("STR")
    }
    fn doc_category(&self) -> Category {
        Category::Output
    }
    fn doc_short(&self) -> &'static str {
        r"Печатать STR перед каждым совпадением."
    }
    fn doc_long(&self) -> &'static str {
        r"
Печатать STR непосредственно перед каждым совпадением регулярного выражения
вместо изменения цвета фона. Поддерживаются экранирующие последовательности,
например \x1B[7m, \n и \t. По умолчанию используется ANSI-последовательность,
включающая инверсию цветов терминала.
"
    }

    fn update(&self, v: FlagValue, args: &mut LowArgs) -> anyhow::Result<()> {
        let s = convert::string(v.unwrap_value())?;
        args.before = Some(Vec::unescape_bytes(&s).into());
        Ok(())
    }
}

#[cfg(test)]
#[test]
fn test_before() {
    use bstr::BString;

    let args = parse_low_raw(None::<&str>).unwrap();
    assert_eq!(None, args.before);

    let args = parse_low_raw(["--before", "<<"]).unwrap();
    assert_eq!(Some(BString::from("<<")), args.before);

    let args = parse_low_raw(["-b", "<<"]).unwrap();
    assert_eq!(Some(BString::from("<<")), args.before);

    let args = parse_low_raw(["-b", r"\x1B[7m"]).unwrap();
    assert_eq!(Some(BString::from(b"\x1b[7m".as_slice())), args.before);
}

/// --debug
#[derive(Debug)]
struct Debug;

impl Flag for Debug {
    fn is_switch(&self) -> bool {
        true
    }
    fn name_long(&self) -> &'static str {
        "debug"
    }
    fn doc_category(&self) -> Category {
        Category::Logging
    }
    fn doc_short(&self) -> &'static str {
        r"Показывать отладочные сообщения."
    }
    fn doc_long(&self) -> &'static str {
        r"
Показывать отладочные сообщения. Используйте этот флаг, когда hl ведёт себя
не так, как вы ожидаете. Например, он покажет, во что транслировался шаблон
базовой грамматики перед компиляцией.
"
    }

    fn update(&self, v: FlagValue, args: &mut LowArgs) -> anyhow::Result<()> {
        assert!(v.unwrap_switch(), "flag has no negation");
        args.logging = Some(LoggingMode::Debug);
        Ok(())
    }
}

#[cfg(test)]
#[test]
fn test_debug() {
    let args = parse_low_raw(None::<&str>).unwrap();
    assert_eq!(None, args.logging);

    let args = parse_low_raw(["--debug"]).unwrap();
    assert_eq!(Some(LoggingMode::Debug), args.logging);
}

/// -e/--extended-regexp
#[derive(Debug)]
struct ExtendedRegexp;

impl Flag for ExtendedRegexp {
    fn is_switch(&self) -> bool {
        true
    }
    fn name_short(&self) -> Option<u8> {
        Some(b'e')
    }
    fn name_long(&self) -> &'static str {
        "extended-regexp"
    }
    fn doc_category(&self) -> Category {
        Category::Search
    }
    fn doc_short(&self) -> &'static str {
        r"Интерпретировать REGEXP как расширенную грамматику (ERE)."
    }
    fn doc_long(&self) -> &'static str {
        r"
Интерпретировать REGEXP как расширенное регулярное выражение (ERE). В этом
режиме шаблон передаётся движку регулярных выражений без изменений. Без
этого флага шаблон разбирается как базовое регулярное выражение (BRE), в
котором операторы +, ?, |, ( ) и { } — обычные символы, а группировка и
интервалы записываются как \( \) и \{ \}.
"
    }

    fn update(&self, v: FlagValue, args: &mut LowArgs) -> anyhow::Result<()> {
        assert!(v.unwrap_switch(), "flag has no negation");
        args.extended = true;
        Ok(())
    }
}

#[cfg(test)]
#[test]
fn test_extended_regexp() {
    let args = parse_low_raw(None::<&str>).unwrap();
    assert_eq!(false, args.extended);

    let args = parse_low_raw(["--extended-regexp"]).unwrap();
    assert_eq!(true, args.extended);

    let args = parse_low_raw(["-e"]).unwrap();
    assert_eq!(true, args.extended);
}

/// -i/--ignore-case
#[derive(Debug)]
struct IgnoreCase;

impl Flag for IgnoreCase {
    fn is_switch(&self) -> bool {
        true
    }
    fn name_short(&self) -> Option<u8> {
        Some(b'i')
    }
    fn name_long(&self) -> &'static str {
        "ignore-case"
    }
    fn doc_category(&self) -> Category {
        Category::Search
    }
    fn doc_short(&self) -> &'static str {
        r"Не различать регистр."
    }
    fn doc_long(&self) -> &'static str {
        r"
Когда этот флаг предоставлен, шаблон сопоставляется без учёта регистра.
Правила приведения регистра соответствуют «простым» правилам Unicode,
которые использует движок регулярных выражений.
"
    }

    fn update(&self, v: FlagValue, args: &mut LowArgs) -> anyhow::Result<()> {
        assert!(v.unwrap_switch(), "flag has no negation");
        args.ignore_case = true;
        Ok(())
    }
}

#[cfg(test)]
#[test]
fn test_ignore_case() {
    let args = parse_low_raw(None::<&str>).unwrap();
    assert_eq!(false, args.ignore_case);

    let args = parse_low_raw(["--ignore-case"]).unwrap();
    assert_eq!(true, args.ignore_case);

    let args = parse_low_raw(["-i"]).unwrap();
    assert_eq!(true, args.ignore_case);
}

/// --trace
#[derive(Debug)]
struct Trace;

impl Flag for Trace {
    fn is_switch(&self) -> bool {
        true
    }
    fn name_long(&self) -> &'static str {
        "trace"
    }
    fn doc_category(&self) -> Category {
        Category::Logging
    }
    fn doc_short(&self) -> &'static str {
        r"Показывать сообщения трассировки."
    }
    fn doc_long(&self) -> &'static str {
        r"
Показывать сообщения трассировки. Это показывает ещё больше деталей, чем
флаг --debug, и подразумевает его.
"
    }

    fn update(&self, v: FlagValue, args: &mut LowArgs) -> anyhow::Result<()> {
        assert!(v.unwrap_switch(), "flag has no negation");
        args.logging = Some(LoggingMode::Trace);
        Ok(())
    }
}

#[cfg(test)]
#[test]
fn test_trace() {
    let args = parse_low_raw(["--trace"]).unwrap();
    assert_eq!(Some(LoggingMode::Trace), args.logging);

    // Более поздний флаг побеждает.
    let args = parse_low_raw(["--trace", "--debug"]).unwrap();
    assert_eq!(Some(LoggingMode::Debug), args.logging);
}

mod convert {
    use std::ffi::OsString;

    /// Преобразует значение флага в строку или сообщает понятную
    /// ошибку, если значение не является валидным UTF-8.
    pub(super) fn string(v: OsString) -> anyhow::Result<String> {
        let Ok(s) = v.into_string() else {
            anyhow::bail!("value is not valid UTF-8")
        };
        Ok(s)
    }
}
