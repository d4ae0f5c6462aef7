use std::io;

use hl_matcher::Matcher;

/// Маркер по умолчанию перед совпадением: инверсия цветов терминала.
const DEFAULT_BEFORE: &[u8] = b"\x1b[7m";

/// Маркер по умолчанию после совпадения: сброс атрибутов терминала.
const DEFAULT_AFTER: &[u8] = b"\x1b[0m";

/// Конфигурация принтера.
///
/// Управляется через HighlighterBuilder. После создания принтера
/// конфигурация заморожена и не может быть изменена.
#[derive(Clone, Debug)]
struct Config {
    before: Vec<u8>,
    after: Vec<u8>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            before: DEFAULT_BEFORE.to_vec(),
            after: DEFAULT_AFTER.to_vec(),
        }
    }
}

/// Билдер для принтера, подсвечивающего совпадения.
///
/// Единственное, что здесь настраивается, — это пара маркеров,
/// вставляемых вокруг каждого совпадения. По умолчанию это
/// escape-последовательности ANSI для инверсии цветов и её сброса.
#[derive(Clone, Debug)]
pub struct HighlighterBuilder {
    config: Config,
}

impl Default for HighlighterBuilder {
    fn default() -> HighlighterBuilder {
        HighlighterBuilder::new()
    }
}

impl HighlighterBuilder {
    /// Создаёт новый билдер с маркерами по умолчанию.
    pub fn new() -> HighlighterBuilder {
        HighlighterBuilder { config: Config::default() }
    }

    /// Устанавливает маркер, печатаемый непосредственно перед каждым
    /// совпадением.
    pub fn before(&mut self, bytes: &[u8]) -> &mut HighlighterBuilder {
        self.config.before = bytes.to_vec();
        self
    }

    /// Устанавливает маркер, печатаемый непосредственно после каждого
    /// совпадения.
    pub fn after(&mut self, bytes: &[u8]) -> &mut HighlighterBuilder {
        self.config.after = bytes.to_vec();
        self
    }

    /// Создаёт принтер, пишущий в данную реализацию `io::Write`.
    pub fn build<W: io::Write>(&self, wtr: W) -> Highlighter<W> {
        Highlighter { config: self.config.clone(), wtr }
    }
}

/// Принтер, печатающий каждую строку входа с совпадениями, обёрнутыми
/// в маркеры.
///
/// Принтер не хранит никакого состояния между строками: каждая строка
/// обрабатывается независимо, одним проходом слева направо.
#[derive(Clone, Debug)]
pub struct Highlighter<W> {
    config: Config,
    wtr: W,
}

impl<W: io::Write> Highlighter<W> {
    /// Печатает одну строку, оборачивая каждое совпадение в маркеры.
    ///
    /// `line` не должна содержать завершающего перевода строки; если
    /// `terminated` истинно, перевод строки добавляется после вывода.
    /// Так последняя строка входа без терминатора не приобретает его
    /// на выходе.
    ///
    /// Курсор начинается с нулевого смещения. Каждое найденное
    /// совпадение печатается как: текст от курсора до начала
    /// совпадения, маркер «до», сам текст совпадения, маркер «после»;
    /// затем курсор переходит на конец совпадения. Когда совпадений
    /// больше нет, остаток строки печатается без изменений.
    ///
    /// Пустое совпадение (нулевой длины) печатается один раз и
    /// завершает сканирование строки: движок детерминирован и нашёл бы
    /// то же пустое совпадение на той же позиции снова, поэтому
    /// продолжение привело бы к зацикливанию. Остаток строки при этом
    /// печатается без изменений.
    pub fn print_line<M: Matcher>(
        &mut self,
        matcher: M,
        line: &[u8],
        terminated: bool,
    ) -> io::Result<()> {
        let mut at = 0;
        loop {
            let m = matcher
                .find_at(line, at)
                .map_err(|err| io::Error::other(err.to_string()))?;
            let Some(m) = m else {
                self.wtr.write_all(&line[at..])?;
                break;
            };
            self.wtr.write_all(&line[at..m.start()])?;
            self.wtr.write_all(&self.config.before)?;
            self.wtr.write_all(&line[m])?;
            self.wtr.write_all(&self.config.after)?;
            at = m.end();
            if m.is_empty() {
                self.wtr.write_all(&line[at..])?;
                break;
            }
        }
        if terminated {
            self.wtr.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Возвращает изменяемую ссылку на нижележащий писатель.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.wtr
    }

    /// Потребляет принтер и возвращает нижележащий писатель.
    pub fn into_inner(self) -> W {
        self.wtr
    }
}

#[cfg(test)]
mod tests {
    use {bstr::ByteSlice, hl_regex::RegexMatcherBuilder};

    use super::HighlighterBuilder;

    /// Прогоняет строки через принтер с маркерами `<`/`>` и возвращает
    /// весь вывод.
    fn highlight(pattern: &str, lines: &[&str]) -> String {
        let matcher = RegexMatcherBuilder::new().build(pattern).unwrap();
        let mut printer =
            HighlighterBuilder::new().before(b"<").after(b">").build(vec![]);
        for line in lines {
            printer.print_line(&matcher, line.as_bytes(), true).unwrap();
        }
        printer.into_inner().to_str().unwrap().to_string()
    }

    #[test]
    fn passthrough_without_match() {
        assert_eq!("hello\n", highlight("xyz", &["hello"]));
    }

    #[test]
    fn single_match() {
        assert_eq!("foo<bar>baz\n", highlight("bar", &["foobarbaz"]));
    }

    #[test]
    fn match_spans_whole_line() {
        assert_eq!("<abc>\n", highlight("abc", &["abc"]));
    }

    #[test]
    fn multiple_matches() {
        assert_eq!(
            "a<1>b<22>c<333>d\n",
            highlight("[0-9][0-9]*", &["a1b22c333d"])
        );
    }

    #[test]
    fn adjacent_matches() {
        assert_eq!("<ab><ab>c\n", highlight("ab", &["ababc"]));
    }

    #[test]
    fn match_at_end_of_line() {
        // Без артефактов пустого хвоста после совпадения в конце строки.
        assert_eq!("abc<d>\n", highlight("d$", &["abcd"]));
    }

    #[test]
    fn match_at_start_of_line() {
        assert_eq!("<a>bc\n", highlight("^a", &["abc"]));
    }

    #[test]
    fn empty_match_terminates_scan() {
        // Пустое совпадение печатается один раз, остаток строки — без
        // изменений. Наивное возобновление поиска с той же позиции
        // зациклилось бы на таком шаблоне.
        assert_eq!("<>aaa\n", highlight("x*", &["aaa"]));
    }

    #[test]
    fn empty_match_at_end() {
        assert_eq!("abc<>\n", highlight("$", &["abc"]));
    }

    #[test]
    fn empty_match_after_final_match() {
        // После последнего непустого совпадения курсор стоит в конце
        // строки, и `a*` находит там пустое совпадение: оно печатается
        // один раз, после чего сканирование завершается.
        assert_eq!("<aaa><>\n", highlight("a*", &["aaa"]));
        assert_eq!("<aa><>x\n", highlight("a*", &["aax"]));
    }

    #[test]
    fn empty_line() {
        assert_eq!("\n", highlight("xyz", &[""]));
        assert_eq!("<>\n", highlight("x*", &[""]));
    }

    #[test]
    fn unterminated_line_stays_unterminated() {
        let matcher = RegexMatcherBuilder::new().build("b").unwrap();
        let mut printer =
            HighlighterBuilder::new().before(b"<").after(b">").build(vec![]);
        printer.print_line(&matcher, b"abc", false).unwrap();
        assert_eq!(b"a<b>c".as_slice(), &printer.into_inner());
    }

    #[test]
    fn default_markers_are_ansi() {
        let matcher = RegexMatcherBuilder::new().build("b").unwrap();
        let mut printer = HighlighterBuilder::new().build(vec![]);
        printer.print_line(&matcher, b"abc", true).unwrap();
        assert_eq!(
            b"a\x1b[7mb\x1b[0mc\n".as_slice(),
            &printer.into_inner()
        );
    }

    #[test]
    fn markers_can_be_arbitrary_bytes() {
        let matcher = RegexMatcherBuilder::new().build("b").unwrap();
        let mut printer = HighlighterBuilder::new()
            .before(b"[[")
            .after(b"]]")
            .build(vec![]);
        printer.print_line(&matcher, b"abc", true).unwrap();
        assert_eq!(b"a[[b]]c\n".as_slice(), &printer.into_inner());
    }

    #[test]
    fn grammar_changes_match_boundaries() {
        // В базовой грамматике `a{2,3}` — литерал и не встречается во
        // входе, в расширенной — ограниченное повторение.
        assert_eq!("aaaa\n", highlight("a{2,3}", &["aaaa"]));

        let matcher = RegexMatcherBuilder::new()
            .extended(true)
            .build("a{2,3}")
            .unwrap();
        let mut printer =
            HighlighterBuilder::new().before(b"<").after(b">").build(vec![]);
        printer.print_line(&matcher, b"aaaa", true).unwrap();
        assert_eq!(b"<aaa>a\n".as_slice(), &printer.into_inner());
    }

    #[test]
    fn case_sensitivity() {
        // С учётом регистра совпадает только второе вхождение.
        assert_eq!("ABC<abc>\n", highlight("abc", &["ABCabc"]));

        let matcher = RegexMatcherBuilder::new()
            .case_insensitive(true)
            .build("abc")
            .unwrap();
        let mut printer =
            HighlighterBuilder::new().before(b"<").after(b">").build(vec![]);
        printer.print_line(&matcher, b"ABCabc", true).unwrap();
        assert_eq!(b"<ABC>abc\n".as_slice(), &printer.into_inner());
    }

    #[test]
    fn non_marker_spans_reconstruct_line() {
        // Конкатенация всех немаркерных фрагментов вывода по порядку
        // восстанавливает исходную строку: ничего не теряется и не
        // дублируется.
        for (pattern, line) in [
            ("[0-9][0-9]*", "a1b22c333d"),
            ("a", "banana"),
            ("x*", "aaa"),
            ("b*", "abc"),
            ("zzz", "abc"),
        ] {
            let got = highlight(pattern, &[line]);
            let stripped =
                got.trim_end_matches('\n').replace('<', "").replace('>', "");
            assert_eq!(line, stripped, "pattern: {pattern}");
        }
    }

    #[test]
    fn many_lines_are_independent() {
        assert_eq!(
            "<a>bc\nxyz\n<a>\n",
            highlight("a", &["abc", "xyz", "a"])
        );
    }
}
