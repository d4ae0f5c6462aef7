/*!
Модуль для работы со всем, что связано с флагами CLI hl.

Разбор устроен в два этапа: сначала аргументы CLI превращаются в
низкоуровневое представление (`LowArgs`), максимально близкое к самим
флагам, а затем — в высокоуровневое (`HiArgs`), с которым работает
остальная часть программы. Каждый логический флаг — это реализация
трейта [`Flag`] в `defs`, из которой также генерируется справка.
*/

use std::ffi::OsString;

pub(crate) use crate::flags::{
    doc::{
        generate_help_long, generate_help_short, generate_version_long,
        generate_version_short,
    },
    hiargs::HiArgs,
    lowargs::SpecialMode,
    parse::{ParseResult, parse},
};

mod defs;
mod doc;
mod hiargs;
mod lowargs;
mod parse;

/// Категория флага, определяющая его место в справке.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Category {
    /// Флаги, управляющие интерпретацией шаблона.
    Search,
    /// Флаги, управляющие форматом вывода.
    Output,
    /// Флаги, связанные с ведением журнала.
    Logging,
}

impl Category {
    /// Заголовок категории в справке.
    fn name(&self) -> &'static str {
        match *self {
            Category::Search => "ПАРАМЕТРЫ ПОИСКА",
            Category::Output => "ПАРАМЕТРЫ ВЫВОДА",
            Category::Logging => "ПАРАМЕТРЫ ЖУРНАЛИРОВАНИЯ",
        }
    }
}

/// Трейт, описывающий один логический флаг CLI.
///
/// Одна реализация может проявляться для пользователя и коротким, и
/// длинным именем, но внутри hl это один флаг. Методы `doc_*` питают
/// генерацию справки, так что документация флага живёт рядом с его
/// разбором.
trait Flag: std::fmt::Debug + Send + Sync + 'static {
    /// Возвращает true, если флаг — переключатель без значения.
    fn is_switch(&self) -> bool;
    /// Короткое однобайтовое имя флага, если есть.
    fn name_short(&self) -> Option<u8> {
        None
    }
    /// Длинное имя флага, без ведущих тире.
    fn name_long(&self) -> &'static str;
    /// Имя переменной-значения для справки, например `STR`.
    fn doc_variable(&self) -> Option<&'static str> {
        None
    }
    /// Категория флага в справке.
    fn doc_category(&self) -> Category;
    /// Краткое описание для `-h`.
    fn doc_short(&self) -> &'static str;
    /// Подробное описание для `--help`.
    fn doc_long(&self) -> &'static str;
    /// Применяет значение флага к низкоуровневым аргументам.
    fn update(
        &self,
        value: FlagValue,
        args: &mut lowargs::LowArgs,
    ) -> anyhow::Result<()>;
}

/// Значение, извлечённое из флага и передаваемое в `Flag::update`.
#[derive(Debug)]
enum FlagValue {
    /// Переключатель, включённый или выключенный.
    Switch(bool),
    /// Произвольное значение.
    Value(OsString),
}

impl FlagValue {
    /// Возвращает значение переключателя.
    ///
    /// Паникует, если это не переключатель: вызывающие используют это
    /// только для флагов, у которых `is_switch` возвращает true.
    fn unwrap_switch(self) -> bool {
        match self {
            FlagValue::Switch(yes) => yes,
            FlagValue::Value(_) => {
                unreachable!("got flag value but expected switch")
            }
        }
    }

    /// Возвращает произвольное значение.
    ///
    /// Паникует, если это переключатель.
    fn unwrap_value(self) -> OsString {
        match self {
            FlagValue::Switch(_) => {
                unreachable!("got switch but expected flag value")
            }
            FlagValue::Value(value) => value,
        }
    }
}
