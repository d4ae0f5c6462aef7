/*!
Предоставляет определение высокоуровневых аргументов hl.
*/

use anyhow::Context;
use bstr::BString;

use crate::flags::lowargs::LowArgs;

/// Коллекция «высокоуровневых» аргументов.
///
/// Это разрешённая конфигурация запуска: проверенный шаблон, готовые
/// байты маркеров и флаги компиляции. Она конструируется один раз из
/// низкоуровневых аргументов, неизменяема и владеется драйвером;
/// остальные части программы лишь заимствуют её.
#[derive(Debug)]
pub(crate) struct HiArgs {
    pattern: String,
    before: BString,
    after: BString,
    extended: bool,
    ignore_case: bool,
}

impl HiArgs {
    /// Преобразует низкоуровневые аргументы в высокоуровневые.
    ///
    /// Именно здесь проверяется, что пользователь дал ровно один
    /// шаблон и что он является валидным UTF-8.
    pub(crate) fn from_low_args(mut low: LowArgs) -> anyhow::Result<HiArgs> {
        let mut positional = std::mem::take(&mut low.positional).into_iter();
        let pattern = match positional.next() {
            None => anyhow::bail!(
                "требуется шаблон REGEXP, но он не был предоставлен"
            ),
            Some(os) => hl::cli::pattern_from_os(&os)?.to_string(),
        };
        if let Some(arg) = positional.next() {
            anyhow::bail!(
                "нераспознанный позиционный аргумент {arg:?}, \
                 принимается только один REGEXP",
            );
        }
        Ok(HiArgs {
            pattern,
            before: low
                .before
                .unwrap_or_else(|| BString::from(b"\x1b[7m".as_slice())),
            after: low
                .after
                .unwrap_or_else(|| BString::from(b"\x1b[0m".as_slice())),
            extended: low.extended,
            ignore_case: low.ignore_case,
        })
    }

    /// Компилирует шаблон в матчер.
    ///
    /// Неудачная компиляция фатальна для запуска: исправленным шаблон
    /// сам по себе не станет, поэтому повторных попыток нет.
    pub(crate) fn matcher(&self) -> anyhow::Result<hl::regex::RegexMatcher> {
        let matcher = hl::regex::RegexMatcherBuilder::new()
            .case_insensitive(self.ignore_case)
            .extended(self.extended)
            .build(&self.pattern)
            .with_context(|| {
                format!(
                    "не удалось скомпилировать регулярное выражение {:?}",
                    self.pattern
                )
            })?;
        Ok(matcher)
    }

    /// Строит принтер, пишущий в данный писатель.
    pub(crate) fn printer<W: std::io::Write>(
        &self,
        wtr: W,
    ) -> hl::printer::Highlighter<W> {
        hl::printer::HighlighterBuilder::new()
            .before(&self.before)
            .after(&self.after)
            .build(wtr)
    }

    /// Возвращает писатель в stdout с подходящей буферизацией.
    pub(crate) fn stdout(&self) -> hl::cli::StandardStream {
        hl::cli::stdout()
    }
}
