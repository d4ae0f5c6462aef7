/*!
Этот модуль определяет макрос для вывода сообщений пользователю.

Все сообщения об ошибках hl печатаются в stderr с префиксом `hl: `,
чтобы их источник был очевиден, когда stdout перенаправлен в конвейер.
*/

/// Как eprintln, но блокирует stdout для предотвращения перемешивания строк.
///
/// Это блокирует stdout, а не stderr, хотя вывод идёт в stderr. Так
/// строки не перемешиваются, когда stdout и stderr оба соответствуют
/// tty.
#[macro_export]
macro_rules! eprintln_locked {
    ($($tt:tt)*) => {{
        {
            use std::io::Write;

            let stdout = std::io::stdout().lock();
            let mut stderr = std::io::stderr().lock();
            // Мы специально игнорируем любые ошибки здесь, кроме разрыва
            // канала, при котором выходим грациозно. В противном случае
            // прерываемся с кодом ошибки, потому что больше ничего
            // сделать нельзя.
            if let Err(err) = write!(stderr, "hl: ") {
                if err.kind() == std::io::ErrorKind::BrokenPipe {
                    std::process::exit(0);
                } else {
                    std::process::exit(2);
                }
            }
            if let Err(err) = writeln!(stderr, $($tt)*) {
                if err.kind() == std::io::ErrorKind::BrokenPipe {
                    std::process::exit(0);
                } else {
                    std::process::exit(2);
                }
            }
            drop(stdout);
        }
    }}
}
