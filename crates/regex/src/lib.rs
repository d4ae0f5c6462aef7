/*!
Крейт hl-regex реализует трейт [`Matcher`](hl_matcher::Matcher) поверх
движка регулярных выражений из крейта `regex-automata`.

Матчер строится через [`RegexMatcherBuilder`], который принимает два
флага: чувствительность к регистру и выбор грамматики. Расширенная
грамматика (ERE) — это собственный синтаксис движка; шаблон передаётся
ему без изменений. Базовая грамматика (BRE) реализована трансляцией:
шаблон переписывается в синтаксис движка перед компиляцией (см. модуль
`bre`), так что, например, `\(ab\)*` становится `(ab)*`, а `a{2,3}`
понимается буквально.

Шаблон компилируется ровно один раз; полученный [`RegexMatcher`] можно
затем применять к любому количеству строк без синхронизации.
*/

#![deny(missing_docs)]

pub use crate::{
    error::{Error, ErrorKind},
    matcher::{RegexMatcher, RegexMatcherBuilder},
};

mod bre;
mod error;
mod matcher;
