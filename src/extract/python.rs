//! Python definition extraction.
//!
//! Validity is decided by `rustpython-parser`, which follows CPython's
//! grammar strictly. The tree-sitter concrete syntax tree then supplies node
//! traversal and exact source spans.

use super::docstring::{clean_docstring, literal_value};
use crate::domain::{GeneratorError, Result, Symbol, SymbolKind};
use std::collections::VecDeque;
use std::path::Path;
use tracing::debug;
use tree_sitter::{Language, Node, Parser, Tree};

pub struct PythonExtractor {
    include_async: bool,
}

impl PythonExtractor {
    pub fn new(include_async: bool) -> Self {
        Self { include_async }
    }

    /// Collect every function and class definition in `source`.
    ///
    /// Definitions are visited breadth-first: all module-level definitions
    /// come first, then everything one statement level deeper, and so on.
    /// `path` only labels errors.
    pub fn extract(&self, source: &str, path: &Path) -> Result<Vec<Symbol>> {
        validate(source, path)?;
        let tree = parse_tree(source, path)?;

        let mut symbols = Vec::new();
        let mut queue = VecDeque::new();
        push_statement_children(tree.root_node(), &mut queue);

        while let Some(visit) = queue.pop_front() {
            let node = match visit {
                Visit::Node(node) => node,
                Visit::Elif(alternatives) => {
                    push_elif_chain(&alternatives, &mut queue);
                    continue;
                }
            };
            let definition = match node.kind() {
                "decorated_definition" => node.child_by_field_name("definition"),
                "function_definition" | "class_definition" => Some(node),
                _ => None,
            };

            match definition {
                Some(definition) => {
                    if let Some(symbol) = self.symbol(source, definition, node) {
                        symbols.push(symbol);
                    }
                    push_statement_children(definition, &mut queue);
                }
                None => push_statement_children(node, &mut queue),
            }
        }

        Ok(symbols)
    }

    /// Build the record for `definition`; `span` is the node whose text is
    /// reproduced (the decorator wrapper when there is one).
    fn symbol(&self, source: &str, definition: Node<'_>, span: Node<'_>) -> Option<Symbol> {
        let kind = match definition.kind() {
            "class_definition" => SymbolKind::Class,
            _ => {
                if is_async(definition) && !self.include_async {
                    return None;
                }
                SymbolKind::Function
            }
        };
        let name = node_text(source, definition.child_by_field_name("name")?).to_string();

        Some(Symbol {
            name,
            kind,
            docstring: docstring(source, definition),
            source: definition_source(source, span),
        })
    }
}

fn validate(source: &str, path: &Path) -> Result<()> {
    let label = path.to_string_lossy();
    rustpython_parser::parse(source, rustpython_parser::Mode::Module, &label)
        .map(|_| ())
        .map_err(|e| GeneratorError::Parse { path: path.to_path_buf(), message: e.to_string() })
}

fn parse_tree(source: &str, path: &Path) -> Result<Tree> {
    let language: Language = tree_sitter_python::LANGUAGE.into();
    let mut parser = Parser::new();
    parser.set_language(&language).map_err(|e| GeneratorError::Parse {
        path: path.to_path_buf(),
        message: format!("failed to load Python grammar: {e}"),
    })?;

    let tree = parser.parse(source, None).ok_or_else(|| GeneratorError::Parse {
        path: path.to_path_buf(),
        message: "tree-sitter produced no syntax tree".to_string(),
    })?;
    if tree.root_node().has_error() {
        debug!(path = %path.display(), "tree-sitter recovered from errors in valid source");
    }
    Ok(tree)
}

/// One entry of the breadth-first walk.
enum Visit<'t> {
    Node(Node<'t>),
    /// The `elif`/`else` tail of an `if` statement, starting at an `elif`.
    /// Python nests each `elif` as an `if` inside the preceding `else`, so
    /// the tail sits one level below the statement that owns it.
    Elif(Vec<Node<'t>>),
}

/// Queue the named children of `node` so that each queue level is one
/// statement level.
///
/// `block`, `else` and `finally` bodies are looked through: their statements
/// belong to the enclosing compound statement. `except` and `case` clauses
/// stay a level of their own, as handlers and match cases do in Python.
fn push_statement_children<'t>(node: Node<'t>, queue: &mut VecDeque<Visit<'t>>) {
    let is_if = node.kind() == "if_statement";
    let mut alternatives = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "elif_clause" | "else_clause" if is_if => alternatives.push(child),
            "block" | "else_clause" | "finally_clause" => push_statement_children(child, queue),
            _ => queue.push_back(Visit::Node(child)),
        }
    }
    push_alternatives(&alternatives, queue);
}

fn push_alternatives<'t>(alternatives: &[Node<'t>], queue: &mut VecDeque<Visit<'t>>) {
    match alternatives.first() {
        Some(first) if first.kind() == "elif_clause" => {
            queue.push_back(Visit::Elif(alternatives.to_vec()));
        }
        Some(else_clause) => push_statement_children(*else_clause, queue),
        None => {}
    }
}

fn push_elif_chain<'t>(alternatives: &[Node<'t>], queue: &mut VecDeque<Visit<'t>>) {
    if let Some((elif, rest)) = alternatives.split_first() {
        push_statement_children(*elif, queue);
        push_alternatives(rest, queue);
    }
}

fn is_async(function: Node<'_>) -> bool {
    function.child(0).is_some_and(|first| first.kind() == "async")
}

fn node_text<'s>(source: &'s str, node: Node<'_>) -> &'s str {
    source.get(node.start_byte()..node.end_byte()).unwrap_or_default()
}

/// Value of the body's leading string statement, cleaned.
fn docstring(source: &str, definition: Node<'_>) -> Option<String> {
    let body = definition.child_by_field_name("body")?;
    let mut cursor = body.walk();
    let first = body.named_children(&mut cursor).find(|child| child.kind() != "comment")?;
    if first.kind() != "expression_statement" || first.named_child_count() != 1 {
        return None;
    }

    let mut expr = first.named_child(0)?;
    while expr.kind() == "parenthesized_expression" && expr.named_child_count() == 1 {
        expr = expr.named_child(0)?;
    }

    match expr.kind() {
        "string" | "concatenated_string" => {
            literal_value(node_text(source, expr)).map(|raw| clean_docstring(&raw))
        }
        _ => None,
    }
}

/// Text of `span` with the indentation of its first line removed from every
/// following line. Trailing whitespace is dropped.
fn definition_source(source: &str, span: Node<'_>) -> String {
    let text = node_text(source, span).trim_end();
    let line_start = source[..span.start_byte()].rfind('\n').map_or(0, |idx| idx + 1);
    let indent = &source[line_start..span.start_byte()];
    if indent.is_empty() || !indent.chars().all(|c| c == ' ' || c == '\t') {
        return text.to_string();
    }

    let mut lines = text.split('\n');
    let mut out = String::with_capacity(text.len());
    if let Some(first) = lines.next() {
        out.push_str(first);
    }
    for line in lines {
        out.push('\n');
        out.push_str(line.strip_prefix(indent).unwrap_or(line));
    }
    out
}
