/*!
Этот крейт предоставляет общие подпрограммы для консольной части hl.

Здесь нет центрального типа или функции; ключевой фокус — улучшение
режимов отказа и удобные для пользователя сообщения об ошибках, когда
что-то идёт не так.

[`pattern_from_os`] преобразует аргумент командной строки в шаблон,
сообщая точное смещение первого невалидного байта UTF-8, если
преобразование невозможно.

[`stdout`], [`stdout_buffered_line`] и [`stdout_buffered_block`] —
конструкторы для [`StandardStream`], инкапсулирующего стратегию
буферизации stdout: построчная буферизация при выводе в tty (меньше
задержка для пользователя) и блочная в противном случае (быстрее при
перенаправлении в файл или конвейер).
*/

#![deny(missing_docs)]

mod pattern;
mod wtr;

pub use crate::{
    pattern::{InvalidPatternError, pattern_from_os},
    wtr::{StandardStream, stdout, stdout_buffered_block, stdout_buffered_line},
};
