/*!
Генерация вывода `-h`/`--help` и `-V/--version` из определений флагов.

Справка собирается из реализаций трейта `Flag`, так что документация
каждого флага живёт рядом с его разбором и не может разойтись с ним.
*/

use std::fmt::Write;

use crate::flags::{Category, defs::FLAGS};

/// Заголовок справки с шаблоном использования.
const USAGE: &str = "\
Подсвечивает совпадения регулярного выражения в строках текста из stdin.

ИСПОЛЬЗОВАНИЕ:
    hl [ПАРАМЕТРЫ] REGEXP < ВХОД";

/// Генерирует сжатый вывод помощи для `-h`: каждый флаг и его краткое
/// описание в одной строке.
pub(crate) fn generate_help_short() -> String {
    generate_help(false)
}

/// Генерирует подробный вывод помощи для `--help`.
pub(crate) fn generate_help_long() -> String {
    generate_help(true)
}

fn generate_help(long_doc: bool) -> String {
    let mut out = String::new();
    out.push_str(USAGE);
    out.push('\n');
    for category in [Category::Search, Category::Output, Category::Logging] {
        writeln!(out, "\n{}:", category.name()).unwrap();
        let flags = FLAGS.iter().filter(|f| f.doc_category() == category);
        for flag in flags {
            let mut names = String::new();
            if let Some(short) = flag.name_short() {
                write!(names, "-{}, ", char::from(short)).unwrap();
            }
            write!(names, "--{}", flag.name_long()).unwrap();
            if let Some(var) = flag.doc_variable() {
                write!(names, " {var}").unwrap();
            }
            if long_doc {
                writeln!(out, "    {names}").unwrap();
                for line in flag.doc_long().trim().lines() {
                    writeln!(out, "        {}", line.trim_end()).unwrap();
                }
                out.push('\n');
            } else {
                writeln!(out, "    {names:<24} {}", flag.doc_short())
                    .unwrap();
            }
        }
    }
    writeln!(
        out,
        "\n-h выводит краткий и сжатый обзор, а --help даёт все подробности."
    )
    .unwrap();
    out
}

/// Генерирует сжатую информацию о версии для `-V`.
pub(crate) fn generate_version_short() -> String {
    format!("hl {}", env!("CARGO_PKG_VERSION"))
}

/// Генерирует подробную информацию о версии для `--version`.
///
/// У hl нет опциональных возможностей сборки, поэтому здесь добавляется
/// только имя пакета.
pub(crate) fn generate_version_long() -> String {
    format!("hl {} ({})", env!("CARGO_PKG_VERSION"), env!("CARGO_PKG_NAME"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_mentions_every_flag() {
        for help in [generate_help_short(), generate_help_long()] {
            for flag in FLAGS.iter() {
                assert!(
                    help.contains(&format!("--{}", flag.name_long())),
                    "flag --{} is missing from help",
                    flag.name_long(),
                );
            }
        }
    }

    #[test]
    fn version_is_prefixed() {
        assert!(generate_version_short().starts_with("hl "));
        assert!(generate_version_long().starts_with("hl "));
    }
}
