/*!
Трансляция базовой грамматики POSIX (BRE) в синтаксис движка.

Движок regex-automata понимает только один диалект, близкий к
расширенной грамматике. Базовая грамматика отличается тем, какие
конструкции требуют экранирования: `\(`/`\)` группируют, `\{m,n\}` —
интервал повторения, а неэкранированные `+`, `?`, `|`, `(`, `)`, `{`,
`}` — обычные литералы. Кроме того, `*` — литерал в начале шаблона и
подвыражения, `^` — якорь только в начале, `$` — только в конце.

Транслятор выполняет один проход по шаблону и переписывает его в
синтаксис движка, экранируя литералы через `regex-syntax`. Поддержаны
также привычные GNU-расширения glibc: `\<`/`\>` (границы слова,
переписываются в `\b`) и классы
`\w`, `\W`, `\s`, `\S`, `\b`, `\B` (передаются движку как есть).
Обратные ссылки `\1`..`\9` движок не поддерживает, поэтому они
отвергаются с ошибкой синтаксиса.
*/

use crate::error::Error;

/// Переписывает шаблон базовой грамматики в синтаксис движка.
pub(crate) fn translate(pattern: &str) -> Result<String, Error> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len());
    let mut i = 0;
    // Глубина вложенности открытых `\(`.
    let mut depth = 0usize;
    // Есть ли слева выражение, к которому могут применяться `*` и
    // `\{m,n\}`. В начале шаблона и сразу после `\(` или `^` такого
    // выражения нет.
    let mut repeatable = false;
    // Находимся ли мы в позиции, где `^` является якорем.
    let mut at_start = true;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\\' => {
                i += 1;
                let Some(&d) = chars.get(i) else {
                    return Err(Error::syntax("Trailing backslash"));
                };
                match d {
                    '(' => {
                        out.push('(');
                        depth += 1;
                        repeatable = false;
                        at_start = true;
                        i += 1;
                        continue;
                    }
                    ')' => {
                        if depth == 0 {
                            return Err(Error::syntax("Unmatched \\)"));
                        }
                        out.push(')');
                        depth -= 1;
                        repeatable = true;
                    }
                    '{' => {
                        if !repeatable {
                            return Err(Error::syntax(
                                "Invalid preceding regular expression",
                            ));
                        }
                        i = interval(&chars, i + 1, &mut out)?;
                        repeatable = true;
                    }
                    '}' => {
                        return Err(Error::syntax("Unmatched \\{ or \\}"));
                    }
                    '<' | '>' => {
                        out.push_str(r"\b");
                        repeatable = false;
                    }
                    '1'..='9' => {
                        return Err(Error::syntax(
                            "Back-references are not supported",
                        ));
                    }
                    'w' | 'W' | 's' | 'S' | 'b' | 'B' => {
                        out.push('\\');
                        out.push(d);
                        repeatable = true;
                    }
                    _ => {
                        push_literal(&mut out, d);
                        repeatable = true;
                    }
                }
                at_start = false;
            }
            '*' => {
                // `*` без предшествующего выражения — обычный символ.
                if repeatable {
                    out.push('*');
                } else {
                    push_literal(&mut out, '*');
                    repeatable = true;
                }
                at_start = false;
            }
            '^' => {
                if at_start {
                    out.push('^');
                    repeatable = false;
                } else {
                    push_literal(&mut out, '^');
                    repeatable = true;
                }
                at_start = false;
            }
            '$' => {
                let at_end = i + 1 == chars.len()
                    || (chars.get(i + 1) == Some(&'\\')
                        && chars.get(i + 2) == Some(&')'));
                if at_end {
                    out.push('$');
                    repeatable = false;
                } else {
                    push_literal(&mut out, '$');
                    repeatable = true;
                }
                at_start = false;
            }
            '[' => {
                i = bracket(&chars, i, &mut out)?;
                repeatable = true;
                at_start = false;
            }
            '.' => {
                out.push('.');
                repeatable = true;
                at_start = false;
            }
            // В базовой грамматике это обычные символы.
            '+' | '?' | '|' | '(' | ')' | '{' | '}' => {
                push_literal(&mut out, c);
                repeatable = true;
                at_start = false;
            }
            _ => {
                push_literal(&mut out, c);
                repeatable = true;
                at_start = false;
            }
        }
        i += 1;
    }
    if depth > 0 {
        return Err(Error::syntax("Unmatched \\("));
    }
    Ok(out)
}

/// Добавляет символ как литерал, экранируя его, если он имеет
/// специальное значение в синтаксисе движка.
fn push_literal(out: &mut String, c: char) {
    if regex_syntax::is_meta_character(c) {
        out.push('\\');
    }
    out.push(c);
}

/// Разбирает интервал повторения `\{m\}`, `\{m,\}` или `\{m,n\}`.
///
/// `i` указывает на первый символ после `\{`. Возвращает индекс
/// закрывающего `}` (так что внешний цикл продолжит со следующего
/// символа).
fn interval(
    chars: &[char],
    mut i: usize,
    out: &mut String,
) -> Result<usize, Error> {
    let mut body = String::new();
    loop {
        match chars.get(i) {
            None => return Err(Error::syntax("Unmatched \\{ or \\}")),
            Some('\\') if chars.get(i + 1) == Some(&'}') => break,
            Some(&c) => {
                body.push(c);
                i += 1;
            }
        }
    }
    if !valid_interval(&body) {
        return Err(Error::syntax("Invalid content of \\{\\}"));
    }
    out.push('{');
    out.push_str(&body);
    out.push('}');
    // Индекс `}` из завершающей пары `\}`.
    Ok(i + 1)
}

/// Возвращает true, если тело интервала имеет вид `m`, `m,` или `m,n`,
/// где `m` и `n` — десятичные числа.
fn valid_interval(body: &str) -> bool {
    let mut parts = body.splitn(2, ',');
    let m = parts.next().unwrap_or("");
    if m.is_empty() || !m.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    match parts.next() {
        None => true,
        Some(n) => n.chars().all(|c| c.is_ascii_digit()),
    }
}

/// Копирует скобочное выражение `[...]` в синтаксис движка.
///
/// Скобочные выражения в обеих грамматиках почти совпадают, поэтому
/// содержимое передаётся почти без изменений: учитываются `]` на первой
/// позиции, ведущий `^` и именованные классы вида `[:alpha:]`. Обратная
/// косая черта внутри скобок в POSIX — обычный символ, поэтому она
/// экранируется. Также экранируются символы, которые движок внутри
/// классов считает операторами (`&` и `~`).
///
/// `i` указывает на открывающую `[`. Возвращает индекс закрывающей `]`.
fn bracket(
    chars: &[char],
    mut i: usize,
    out: &mut String,
) -> Result<usize, Error> {
    out.push('[');
    i += 1;
    if chars.get(i) == Some(&'^') {
        out.push('^');
        i += 1;
    }
    // `]` на первой позиции — литерал.
    if chars.get(i) == Some(&']') {
        out.push_str(r"\]");
        i += 1;
    }
    while let Some(&c) = chars.get(i) {
        if c == ']' {
            out.push(']');
            return Ok(i);
        }
        if c == '['
            && matches!(chars.get(i + 1), Some(':') | Some('.') | Some('='))
        {
            // Именованный класс, сортировочный элемент или класс
            // эквивалентности: копируем до закрывающей пары, чтобы
            // внутренняя `]` не была принята за конец выражения.
            let kind = chars[i + 1];
            let mut j = i + 2;
            loop {
                match (chars.get(j), chars.get(j + 1)) {
                    (Some(&a), Some(']')) if a == kind => break,
                    (Some(_), _) => j += 1,
                    (None, _) => {
                        return Err(Error::syntax("Unmatched [ or [^"));
                    }
                }
            }
            for &d in &chars[i..=j + 1] {
                out.push(d);
            }
            i = j + 2;
            continue;
        }
        match c {
            '\\' => out.push_str(r"\\"),
            '[' => out.push_str(r"\["),
            '&' => out.push_str(r"\&"),
            '~' => out.push_str(r"\~"),
            _ => out.push(c),
        }
        i += 1;
    }
    Err(Error::syntax("Unmatched [ or [^"))
}

#[cfg(test)]
mod tests {
    use super::translate;

    fn t(pattern: &str) -> String {
        translate(pattern).unwrap()
    }

    fn err(pattern: &str) -> String {
        translate(pattern).unwrap_err().to_string()
    }

    #[test]
    fn literals_pass_through() {
        assert_eq!("abc", t("abc"));
        assert_eq!("a.c", t("a.c"));
        assert_eq!("ab*", t("ab*"));
    }

    #[test]
    fn ere_operators_are_literals() {
        assert_eq!(r"a\+b", t("a+b"));
        assert_eq!(r"a\?", t("a?"));
        assert_eq!(r"a\|b", t("a|b"));
        assert_eq!(r"\(ab\)", t("(ab)"));
        assert_eq!(r"a\{2,3\}", t("a{2,3}"));
    }

    #[test]
    fn groups() {
        assert_eq!("(ab)*c", t(r"\(ab\)*c"));
        assert_eq!("((a))", t(r"\(\(a\)\)"));
        assert_eq!("Unmatched \\(", err(r"\(ab"));
        assert_eq!("Unmatched \\)", err(r"ab\)"));
    }

    #[test]
    fn intervals() {
        assert_eq!("a{2,3}", t(r"a\{2,3\}"));
        assert_eq!("a{2}", t(r"a\{2\}"));
        assert_eq!("a{2,}", t(r"a\{2,\}"));
        assert_eq!("Unmatched \\{ or \\}", err(r"a\{2,3"));
        assert_eq!("Unmatched \\{ or \\}", err(r"a\}"));
        assert_eq!("Invalid content of \\{\\}", err(r"a\{x\}"));
        assert_eq!("Invalid preceding regular expression", err(r"\{2\}"));
    }

    #[test]
    fn star_is_literal_without_atom() {
        assert_eq!(r"\*a", t("*a"));
        assert_eq!(r"^\*", t("^*"));
        assert_eq!(r"(\*a)", t(r"\(*a\)"));
    }

    #[test]
    fn anchors() {
        assert_eq!("^ab$", t("^ab$"));
        assert_eq!(r"a\^b", t("a^b"));
        assert_eq!(r"a\$b", t("a$b"));
        assert_eq!("(^a$)", t(r"\(^a$\)"));
        // `$` перед `\)` — якорь, в середине — литерал.
        assert_eq!(r"(a\$b)", t(r"\(a$b\)"));
    }

    #[test]
    fn brackets() {
        assert_eq!("[abc]", t("[abc]"));
        assert_eq!("[^abc]", t("[^abc]"));
        assert_eq!(r"[\]]", t("[]]"));
        assert_eq!(r"[^\]]", t("[^]]"));
        assert_eq!("[[:digit:]]", t("[[:digit:]]"));
        // Внутри скобок `\` — обычный символ, а метасимволы грамматики
        // не действуют.
        assert_eq!(r"[\\n]", t(r"[\n]"));
        assert_eq!("[a*.]", t("[a*.]"));
        assert_eq!("Unmatched [ or [^", err("[abc"));
        assert_eq!("Unmatched [ or [^", err("[[:digit:]"));
    }

    #[test]
    fn gnu_extensions() {
        assert_eq!(r"\bfoo\b", t(r"\<foo\>"));
        assert_eq!(r"\w\s*", t(r"\w\s*"));
        assert_eq!("Back-references are not supported", err(r"\(a\)\1"));
    }

    #[test]
    fn escaped_ordinary_characters() {
        assert_eq!(r"\.a", t(r"\.a"));
        assert_eq!(r"\*", t(r"\*"));
        assert_eq!("n", t(r"\n"));
        assert_eq!("Trailing backslash", err("ab\\"));
    }
}
