use std::collections::BTreeMap;

use super::{Color, DEFAULT_FONT, Language, StyleTables, Theme};
use crate::parsing::CommentDelimiters;

const KEYWORD: Color = Color::hex(0xf92672);
const TYPE: Color = Color::hex(0x66d9ef);
const LITERAL: Color = Color::hex(0xae81ff);
const BUILTIN: Color = Color::hex(0xa6e22e);

pub(super) fn tables() -> StyleTables {
    StyleTables::new()
        .with_language(go())
        .with_language(java())
        .with_language(python())
        .with_language(rust())
        .with_font("courier", DEFAULT_FONT)
        .with_font("courier_new", DEFAULT_FONT)
        .with_font("consolas", "Consolas")
        .with_font("roboto_mono", "Roboto Mono")
        .with_font("source_code_pro", "Source Code Pro")
        .with_theme(Theme {
            name: "dark".into(),
            background: Color::hex(0x272822),
            foreground: Color::hex(0xf8f8f2),
            comment: Color::hex(0x75715e),
        })
        .with_theme(Theme {
            name: "light".into(),
            background: Color::hex(0xfafafa),
            foreground: Color::hex(0x383a42),
            comment: Color::hex(0xa0a1a7),
        })
}

#[derive(Default)]
struct Keywords(BTreeMap<String, Color>);

impl Keywords {
    fn add(mut self, words: &[&str], color: Color) -> Self {
        self.0.extend(words.iter().map(|w| (w.to_string(), color)));
        self
    }
}

fn shortcuts(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn c_comments() -> Vec<CommentDelimiters> {
    vec![
        CommentDelimiters::line("//"),
        CommentDelimiters::new("/*", "*/"),
    ]
}

fn go() -> Language {
    Language {
        name: "go".into(),
        keywords: Keywords::default()
            .add(
                &[
                    "break", "case", "chan", "const", "continue", "default", "defer", "else",
                    "fallthrough", "for", "func", "go", "goto", "if", "import", "interface",
                    "map", "package", "range", "return", "select", "struct", "switch", "type",
                    "var",
                ],
                KEYWORD,
            )
            .add(
                &[
                    "bool", "byte", "error", "float32", "float64", "int", "int32", "int64",
                    "rune", "string", "uint", "uint32", "uint64",
                ],
                TYPE,
            )
            .add(&["true", "false", "nil", "iota"], LITERAL)
            .add(&["append", "len", "cap", "make", "new", "panic"], BUILTIN)
            .0,
        shortcuts: shortcuts(&[
            ("iferr", "if err != nil {\n\treturn err\n}"),
            ("pln", "fmt.Println"),
            ("pf", "fmt.Printf"),
        ]),
        comments: c_comments(),
    }
}

fn java() -> Language {
    Language {
        name: "java".into(),
        keywords: Keywords::default()
            .add(
                &[
                    "abstract", "break", "case", "catch", "class", "continue", "default", "do",
                    "else", "extends", "final", "finally", "for", "if", "implements", "import",
                    "instanceof", "interface", "new", "package", "private", "protected",
                    "public", "return", "static", "super", "switch", "this", "throw", "throws",
                    "try", "while",
                ],
                KEYWORD,
            )
            .add(
                &[
                    "boolean", "byte", "char", "double", "float", "int", "long", "short",
                    "void",
                ],
                TYPE,
            )
            .add(&["true", "false", "null"], LITERAL)
            .0,
        shortcuts: shortcuts(&[
            ("sout", "System.out.println"),
            ("psvm", "public static void main(String[] args)"),
        ]),
        comments: c_comments(),
    }
}

fn python() -> Language {
    Language {
        name: "python".into(),
        keywords: Keywords::default()
            .add(
                &[
                    "and", "as", "assert", "break", "class", "continue", "def", "del", "elif",
                    "else", "except", "finally", "for", "from", "global", "if", "import", "in",
                    "is", "lambda", "not", "or", "pass", "raise", "return", "try", "while",
                    "with", "yield",
                ],
                KEYWORD,
            )
            .add(&["print", "len", "range", "self"], BUILTIN)
            .0,
        shortcuts: shortcuts(&[("ifmain", "if __name__ == \"__main__\":")]),
        comments: vec![
            CommentDelimiters::line("#"),
            CommentDelimiters::new("\"\"\"", "\"\"\""),
        ],
    }
}

fn rust() -> Language {
    Language {
        name: "rust".into(),
        keywords: Keywords::default()
            .add(
                &[
                    "as", "break", "const", "continue", "else", "enum", "fn", "for", "if",
                    "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
                    "return", "static", "struct", "trait", "type", "use", "where", "while",
                ],
                KEYWORD,
            )
            .add(
                &[
                    "bool", "char", "f32", "f64", "i32", "i64", "str", "u8", "u32", "u64",
                    "usize",
                ],
                TYPE,
            )
            .add(&["true", "false"], LITERAL)
            .0,
        shortcuts: shortcuts(&[("pln", "println!")]),
        comments: c_comments(),
    }
}
