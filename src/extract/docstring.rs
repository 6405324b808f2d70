//! Docstring literal evaluation and cleanup.

use rustpython_parser::ast::{self, Constant};

/// Evaluate the text of a Python string literal, or of several adjacent
/// literals that Python joins implicitly.
///
/// Escapes, including `\N{...}` names, decode exactly as CPython decodes
/// them. Returns `None` for anything that is not a plain `str` constant:
/// bytes, f-strings and text that fails to parse.
pub fn literal_value(literal: &str) -> Option<String> {
    let wrapped = format!("({literal})");
    match rustpython_parser::parse_expression(&wrapped, "<docstring>").ok()? {
        ast::Expr::Constant(ast::ExprConstant { value: Constant::Str(value), .. }) => Some(value),
        _ => None,
    }
}

/// Clean a docstring the way Python's `inspect.cleandoc` does.
///
/// Tabs expand to 8 columns, the first line loses its leading whitespace,
/// the remaining lines lose their common indentation, and empty lines at
/// either end are dropped.
pub fn clean_docstring(doc: &str) -> String {
    let expanded = expand_tabs(doc, 8);
    let mut lines: Vec<&str> = expanded.split('\n').collect();

    let margin = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let content = line.trim_start();
            (!content.is_empty()).then(|| line.chars().count() - content.chars().count())
        })
        .min();

    let mut cleaned: Vec<String> = Vec::with_capacity(lines.len());
    if let Some(first) = lines.first_mut() {
        *first = first.trim_start();
    }
    for (idx, line) in lines.iter().enumerate() {
        if idx == 0 {
            cleaned.push(line.to_string());
            continue;
        }
        match margin {
            Some(margin) => cleaned.push(strip_columns(line, margin).to_string()),
            None => cleaned.push(line.to_string()),
        }
    }

    while cleaned.last().is_some_and(|line| line.is_empty()) {
        cleaned.pop();
    }
    let leading = cleaned.iter().take_while(|line| line.is_empty()).count();
    cleaned.drain(..leading);

    cleaned.join("\n")
}

/// Drop up to `count` leading characters, or the whole line if it is shorter.
fn strip_columns(line: &str, count: usize) -> &str {
    match line.char_indices().nth(count) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}

fn expand_tabs(text: &str, tab_size: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0usize;
    for c in text.chars() {
        match c {
            '\t' => {
                let spaces = tab_size - (column % tab_size);
                out.extend(std::iter::repeat(' ').take(spaces));
                column += spaces;
            }
            '\n' | '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}
