use std::io::{self, IsTerminal};

/// Писатель в stdout с построчной или блочной буферизацией.
#[derive(Debug)]
pub struct StandardStream(StandardStreamKind);

/// Возвращает возможно буферизированный писатель в stdout.
///
/// Возвращаемый писатель либо построчно, либо блочно буферизирован.
/// Решение принимается автоматически: если stdout подключён к tty,
/// используется построчная буферизация, чтобы пользователь видел
/// вывод по мере его появления. В противном случае используется
/// блочная буферизация, которая быстрее при перенаправлении вывода
/// в файл или конвейер.
///
/// Если нужен явный контроль над стратегией буферизации, используйте
/// [`stdout_buffered_line`] или [`stdout_buffered_block`].
pub fn stdout() -> StandardStream {
    if io::stdout().is_terminal() {
        stdout_buffered_line()
    } else {
        stdout_buffered_block()
    }
}

/// Возвращает построчно буферизированный писатель в stdout.
pub fn stdout_buffered_line() -> StandardStream {
    StandardStream(StandardStreamKind::LineBuffered(io::LineWriter::new(
        io::stdout(),
    )))
}

/// Возвращает блочно буферизированный писатель в stdout.
pub fn stdout_buffered_block() -> StandardStream {
    StandardStream(StandardStreamKind::BlockBuffered(io::BufWriter::new(
        io::stdout(),
    )))
}

#[derive(Debug)]
enum StandardStreamKind {
    LineBuffered(io::LineWriter<io::Stdout>),
    BlockBuffered(io::BufWriter<io::Stdout>),
}

impl io::Write for StandardStream {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        use self::StandardStreamKind::*;

        match self.0 {
            LineBuffered(ref mut w) => w.write(buf),
            BlockBuffered(ref mut w) => w.write(buf),
        }
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        use self::StandardStreamKind::*;

        match self.0 {
            LineBuffered(ref mut w) => w.flush(),
            BlockBuffered(ref mut w) => w.flush(),
        }
    }
}
