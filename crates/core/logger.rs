/*!
Определяет очень простой логгер, который работает с крейтом `log`.

Мы не делаем ничего сложного: нужны только базовые уровни логов и вывод
в stderr, поэтому мы избегаем дополнительных зависимостей только ради
этой функциональности.
*/

use log::Log;

/// Простейший логгер, который логирует в stderr.
///
/// Этот логгер не выполняет фильтрацию. Вместо этого он полагается на
/// глобальную настройку max_level крейта `log`.
#[derive(Debug)]
pub(crate) struct Logger(());

/// Одиночка, используемый как цель для реализации трейта `Log`.
const LOGGER: &'static Logger = &Logger(());

impl Logger {
    /// Создать новый логгер, который логирует в stderr, и установить его
    /// как глобальный. Если при установке возникла проблема, возвращается
    /// ошибка.
    pub(crate) fn init() -> Result<(), log::SetLoggerError> {
        log::set_logger(LOGGER)
    }
}

impl Log for Logger {
    fn enabled(&self, _: &log::Metadata<'_>) -> bool {
        // Уровень лога устанавливается через log::set_max_level, поэтому
        // здесь фильтровать не нужно.
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        match (record.file(), record.line()) {
            (Some(file), Some(line)) => {
                eprintln_locked!(
                    "{}|{}|{}:{}: {}",
                    record.level(),
                    record.target(),
                    file,
                    line,
                    record.args()
                );
            }
            (Some(file), None) => {
                eprintln_locked!(
                    "{}|{}|{}: {}",
                    record.level(),
                    record.target(),
                    file,
                    record.args()
                );
            }
            _ => {
                eprintln_locked!(
                    "{}|{}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                );
            }
        }
    }

    fn flush(&self) {
        // eprintln_locked! сбрасывается при каждом вызове.
    }
}
