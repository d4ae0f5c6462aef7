/*!
Этот крейт предоставляет интерфейс для матчеров регулярных выражений,
используемых при подсветке совпадений в одной строке текста.

Центральные элементы — тип [`Match`], представляющий диапазон байтов
одного совпадения в строке-субъекте, и трейт [`Matcher`], описывающий
минимальную способность движка: найти первое совпадение, начиная с
данного смещения. Реализации трейта предоставляются другими крейтами
(см. `hl-regex`), так что алгоритм подсветки не привязан к конкретному
движку регулярных выражений.

«Совпадений больше нет» — это обычный результат, а не ошибка. Поэтому
`find_at` возвращает `Result<Option<Match>, E>`: `Ok(None)` означает
отсутствие совпадения, а ошибка зарезервирована для матчеров, у которых
сам поиск может завершиться неудачей. Для матчеров, которые не могут
ошибаться, предусмотрен тип [`NoError`].
*/

#![deny(missing_docs)]

use std::ops;

/// Одно совпадение: полуоткрытый диапазон байтов `[start, end)` в
/// строке-субъекте.
///
/// Инвариант: `start <= end`. Диапазон с `start == end` обозначает
/// пустое совпадение (например, для шаблонов `^`, `$` или шаблонов,
/// совпадающих с пустой строкой).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Match {
    start: usize,
    end: usize,
}

impl Match {
    /// Создаёт новое совпадение.
    ///
    /// # Паника
    ///
    /// Паникует, если `start > end`.
    #[inline]
    pub fn new(start: usize, end: usize) -> Match {
        assert!(start <= end);
        Match { start, end }
    }

    /// Создаёт пустое совпадение в данной позиции.
    #[inline]
    pub fn zero(offset: usize) -> Match {
        Match { start: offset, end: offset }
    }

    /// Возвращает начальное смещение совпадения.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Возвращает конечное смещение совпадения.
    ///
    /// Смещение указывает на байт, следующий сразу за последним байтом
    /// совпадения, так что поиск следующего совпадения продолжается
    /// именно с него.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Возвращает это совпадение с новым начальным смещением.
    ///
    /// # Паника
    ///
    /// Паникует, если `start > self.end()`.
    #[inline]
    #[must_use]
    pub fn with_start(&self, start: usize) -> Match {
        assert!(start <= self.end, "{} is not <= {}", start, self.end);
        Match { start, ..*self }
    }

    /// Возвращает это совпадение с новым конечным смещением.
    ///
    /// # Паника
    ///
    /// Паникует, если `end < self.start()`.
    #[inline]
    #[must_use]
    pub fn with_end(&self, end: usize) -> Match {
        assert!(self.start <= end, "{} is not <= {}", self.start, end);
        Match { end, ..*self }
    }

    /// Возвращает длину совпадения в байтах.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Возвращает true тогда и только тогда, когда совпадение пустое.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl ops::Index<Match> for [u8] {
    type Output = [u8];

    #[inline]
    fn index(&self, index: Match) -> &[u8] {
        &self[index.start..index.end]
    }
}

impl ops::Index<Match> for str {
    type Output = str;

    #[inline]
    fn index(&self, index: Match) -> &str {
        &self[index.start..index.end]
    }
}

/// Тип ошибки, используемый матчерами, которые никогда не ошибаются.
///
/// Этот тип невозможно сконструировать вне крейта, и он никогда не
/// возвращается. Он существует только для удовлетворения ассоциированного
/// типа `Matcher::Error`.
#[derive(Debug)]
pub struct NoError(());

impl std::error::Error for NoError {}

impl std::fmt::Display for NoError {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        unreachable!("BUG: NoError сконструирован быть не может")
    }
}

/// Минимальный интерфейс движка регулярных выражений.
///
/// Матчер инкапсулирует скомпилированный шаблон вместе с флагами
/// компиляции и может многократно применяться к произвольным строкам
/// без повторной компиляции. Реализации должны возвращать самое левое
/// совпадение; «жадность» среди совпадений в одной позиции наследуется
/// от нижележащего движка и здесь не оговаривается.
pub trait Matcher {
    /// Тип ошибки, возвращаемой при неудачном поиске. Для матчеров,
    /// у которых поиск не может завершиться неудачей, используйте
    /// [`NoError`].
    type Error: std::fmt::Display;

    /// Возвращает первое совпадение в `haystack`, начинающееся на
    /// позиции `at` или правее неё. Смещения результата абсолютны
    /// относительно начала `haystack`, а не `at`.
    ///
    /// Реализации могут паниковать, если `at > haystack.len()`.
    fn find_at(
        &self,
        haystack: &[u8],
        at: usize,
    ) -> Result<Option<Match>, Self::Error>;

    /// Возвращает первое совпадение во всём `haystack`.
    fn find(&self, haystack: &[u8]) -> Result<Option<Match>, Self::Error> {
        self.find_at(haystack, 0)
    }
}

impl<'a, M: Matcher> Matcher for &'a M {
    type Error = M::Error;

    fn find_at(
        &self,
        haystack: &[u8],
        at: usize,
    ) -> Result<Option<Match>, Self::Error> {
        (*self).find_at(haystack, at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Матчер поверх крейта `regex`, только для тестов трейта.
    struct RegexMatcher(regex::bytes::Regex);

    impl Matcher for RegexMatcher {
        type Error = NoError;

        fn find_at(
            &self,
            haystack: &[u8],
            at: usize,
        ) -> Result<Option<Match>, NoError> {
            Ok(self
                .0
                .find_at(haystack, at)
                .map(|m| Match::new(m.start(), m.end())))
        }
    }

    #[test]
    fn match_accessors() {
        let m = Match::new(2, 5);
        assert_eq!(2, m.start());
        assert_eq!(5, m.end());
        assert_eq!(3, m.len());
        assert!(!m.is_empty());

        let z = Match::zero(7);
        assert_eq!(0, z.len());
        assert!(z.is_empty());
    }

    #[test]
    fn match_adjust() {
        let m = Match::new(2, 5);
        assert_eq!(Match::new(4, 5), m.with_start(4));
        assert_eq!(Match::new(2, 9), m.with_end(9));
    }

    #[test]
    #[should_panic]
    fn match_invalid() {
        Match::new(5, 2);
    }

    #[test]
    fn match_index() {
        let line = "abcdef";
        assert_eq!("cde", &line[Match::new(2, 5)]);
        assert_eq!(b"cde", &line.as_bytes()[Match::new(2, 5)]);
    }

    #[test]
    fn find_at_absolute_offsets() {
        let m = RegexMatcher(regex::bytes::Regex::new(r"a+").unwrap());
        let hay = b"xaax aaa";
        assert_eq!(Some(Match::new(1, 3)), m.find(hay).unwrap());
        assert_eq!(Some(Match::new(5, 8)), m.find_at(hay, 3).unwrap());
        assert_eq!(None, m.find_at(hay, 8).unwrap());
    }

    #[test]
    fn matcher_by_reference() {
        fn first<M: Matcher>(m: M, hay: &[u8]) -> Option<Match> {
            m.find(hay).ok().flatten()
        }

        let m = RegexMatcher(regex::bytes::Regex::new(r"b").unwrap());
        assert_eq!(Some(Match::new(1, 2)), first(&m, b"abc"));
        assert_eq!(Some(Match::new(1, 2)), first(&m, b"abc"));
    }
}
