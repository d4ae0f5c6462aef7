/*!
Определяет основной цикл hl: чтение строк из stdin и печать их с
подсвеченными совпадениями в stdout.
*/

use std::io::{self, BufRead, Write};

use crate::flags::HiArgs;

/// Читает stdin построчно и печатает каждую строку с совпадениями,
/// обёрнутыми в маркеры.
///
/// Матчер компилируется ровно один раз и переиспользуется для всех
/// строк: шаблон и флаги в течение запуска не меняются, поэтому
/// результат идентичен повторной компиляции на каждую строку.
///
/// Исчерпание входа — это обычное возвращаемое значение `read_until`,
/// а не скрытое состояние. Ошибка разрыва канала пробрасывается
/// вызывающему, который завершает процесс грациозно.
pub(crate) fn search(args: &HiArgs) -> anyhow::Result<()> {
    let matcher = args.matcher()?;
    let mut printer = args.printer(args.stdout());
    let mut stdin = io::stdin().lock();
    let mut line = Vec::with_capacity(1024);
    loop {
        line.clear();
        if stdin.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        // Терминатор не участвует в поиске и восстанавливается при
        // печати, так что последняя строка без перевода строки не
        // приобретает его на выходе.
        let terminated = line.last() == Some(&b'\n');
        if terminated {
            line.pop();
        }
        printer.print_line(&matcher, &line, terminated)?;
    }
    printer.get_mut().flush()?;
    Ok(())
}
