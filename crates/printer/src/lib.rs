/*!
Крейт hl-printer печатает строки текста, оборачивая каждое совпадение
регулярного выражения в настраиваемые строки-маркеры.

Центральный тип — [`Highlighter`], который строится через
[`HighlighterBuilder`] и пишет в любую реализацию `std::io::Write`.
Маркеры по умолчанию — escape-последовательности ANSI, включающие и
сбрасывающие инверсию цветов терминала, но ими может быть любая
последовательность байтов.

Сам поиск совпадений делегируется реализации трейта
[`Matcher`](hl_matcher::Matcher), поэтому принтер не зависит от
конкретного движка регулярных выражений.

# Пример

```
use hl_printer::HighlighterBuilder;
use hl_regex::RegexMatcherBuilder;

let matcher = RegexMatcherBuilder::new().build("[0-9][0-9]*").unwrap();
let mut printer = HighlighterBuilder::new()
    .before(b"<")
    .after(b">")
    .build(vec![]);
printer.print_line(&matcher, b"a1b22c333d", true).unwrap();

let got = printer.into_inner();
assert_eq!("a<1>b<22>c<333>d\n", String::from_utf8(got).unwrap());
```
*/

#![deny(missing_docs)]

pub use crate::standard::{Highlighter, HighlighterBuilder};

mod standard;
