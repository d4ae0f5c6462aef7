/*!
hl как библиотека.

Эта библиотека — высокоуровневый фасад к крейтам, из которых состоит
hl. Каждый элемент общедоступного API составных крейтов задокументирован
на своём месте; здесь только реэкспорт.
*/

pub extern crate hl_cli as cli;
pub extern crate hl_matcher as matcher;
pub extern crate hl_printer as printer;
pub extern crate hl_regex as regex;
