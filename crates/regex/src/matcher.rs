use std::borrow::Cow;

use {
    hl_matcher::{Match, Matcher, NoError},
    regex_automata::{Input, meta, util::syntax},
};

use crate::{bre, error::Error};

/// Билдер для матчера на основе regex-automata.
///
/// Билдер позволяет выбрать грамматику шаблона и чувствительность к
/// регистру. После построения матчера его конфигурация заморожена.
#[derive(Clone, Debug)]
pub struct RegexMatcherBuilder {
    case_insensitive: bool,
    extended: bool,
}

impl Default for RegexMatcherBuilder {
    fn default() -> RegexMatcherBuilder {
        RegexMatcherBuilder::new()
    }
}

impl RegexMatcherBuilder {
    /// Создаёт новый билдер с настройками по умолчанию: базовая
    /// грамматика, с учётом регистра.
    pub fn new() -> RegexMatcherBuilder {
        RegexMatcherBuilder { case_insensitive: false, extended: false }
    }

    /// Включает поиск без учёта регистра.
    ///
    /// По умолчанию выключено.
    pub fn case_insensitive(&mut self, yes: bool) -> &mut RegexMatcherBuilder {
        self.case_insensitive = yes;
        self
    }

    /// Интерпретировать шаблон как расширенную грамматику (ERE).
    ///
    /// В этом режиме шаблон передаётся движку без изменений, то есть
    /// расширенная грамматика — это собственный синтаксис движка. По
    /// умолчанию выключено, и шаблон разбирается как базовая грамматика
    /// (BRE) с последующей трансляцией.
    pub fn extended(&mut self, yes: bool) -> &mut RegexMatcherBuilder {
        self.extended = yes;
        self
    }

    /// Компилирует шаблон в матчер.
    ///
    /// Если шаблон невалиден в выбранной грамматике, возвращается
    /// ошибка. Повторная попытка с тем же шаблоном бессмысленна.
    pub fn build(&self, pattern: &str) -> Result<RegexMatcher, Error> {
        let pattern: Cow<'_, str> = if self.extended {
            Cow::Borrowed(pattern)
        } else {
            Cow::Owned(bre::translate(pattern)?)
        };
        log::debug!("шаблон для движка: {:?}", pattern);
        let regex = meta::Regex::builder()
            .syntax(
                syntax::Config::new().case_insensitive(self.case_insensitive),
            )
            .build(&pattern)
            .map_err(Error::regex)?;
        Ok(RegexMatcher { regex })
    }
}

/// Скомпилированный матчер поверх meta-движка regex-automata.
///
/// Матчер можно свободно применять к любому числу строк: поиск не
/// изменяет его состояния, а внутренние ленивые ДКА движка безопасны
/// для повторного использования.
#[derive(Clone, Debug)]
pub struct RegexMatcher {
    regex: meta::Regex,
}

impl Matcher for RegexMatcher {
    type Error = NoError;

    fn find_at(
        &self,
        haystack: &[u8],
        at: usize,
    ) -> Result<Option<Match>, NoError> {
        let input = Input::new(haystack).span(at..haystack.len());
        Ok(self.regex.find(input).map(|m| Match::new(m.start(), m.end())))
    }
}
