/*!
Точка входа в hl.
*/

use std::{io::Write, process::ExitCode};

use crate::flags::HiArgs;

#[macro_use]
mod messages;

mod flags;
mod logger;
mod search;

fn main() -> ExitCode {
    match run(flags::parse()) {
        Ok(code) => code,
        Err(err) => {
            // Ищем ошибку разрыва канала. В этом случае мы хотим выйти
            // «грациозно» с кодом выхода успеха, в соответствии с
            // существующим соглашением Unix. Нам нужно обрабатывать это
            // явно, поскольку среда выполнения Rust не запрашивает
            // сигналы PIPE, и поэтому вместо сигнала мы получаем ошибку
            // ввода-вывода.
            for cause in err.chain() {
                if let Some(ioerr) = cause.downcast_ref::<std::io::Error>() {
                    if ioerr.kind() == std::io::ErrorKind::BrokenPipe {
                        return ExitCode::from(0);
                    }
                }
            }
            eprintln_locked!("{:#}", err);
            ExitCode::from(2)
        }
    }
}

/// Основная точка входа для hl.
///
/// Данный результат разбора определяет поведение hl: либо это ошибка
/// разбора CLI, либо «специальный» режим (помощь или версия), либо
/// разрешённая конфигурация, с которой запускается цикл подсветки.
fn run(result: crate::flags::ParseResult<HiArgs>) -> anyhow::Result<ExitCode> {
    use crate::flags::ParseResult;

    let args = match result {
        ParseResult::Err(err) => return Err(err),
        ParseResult::Special(mode) => return special(mode),
        ParseResult::Ok(args) => args,
    };
    search::search(&args)?;
    Ok(ExitCode::from(0))
}

/// Реализует «специальные» режимы hl.
///
/// Специальный режим коротко замыкает обычную инициализацию и переходит
/// сразу к выводу помощи или версии. Идея в том, чтобы как можно меньше
/// могло помешать hl вывести справку: например, невалидный шаблон в
/// остальных аргументах не должен этому мешать.
fn special(mode: crate::flags::SpecialMode) -> anyhow::Result<ExitCode> {
    use crate::flags::SpecialMode;

    let output = match mode {
        SpecialMode::HelpShort => flags::generate_help_short(),
        SpecialMode::HelpLong => flags::generate_help_long(),
        SpecialMode::VersionShort => flags::generate_version_short(),
        SpecialMode::VersionLong => flags::generate_version_long(),
    };
    writeln!(std::io::stdout(), "{}", output.trim_end())?;
    Ok(ExitCode::from(0))
}
