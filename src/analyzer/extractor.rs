//! Python import extraction using native tree-sitter

use std::collections::BTreeSet;

use thiserror::Error;
use tree_sitter::{Node, Parser, Point};

use super::registry::SourceModule;
use super::resolver::candidate_targets;
use crate::core::{ImportStatement, ResolutionWarning};
use crate::error::CircularImportError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("invalid syntax at line {line}, column {column}")]
    Invalid { line: usize, column: usize },

    #[error("the parser did not produce a syntax tree")]
    NoTree,
}

/// What one file imports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedImports {
    /// Statements in source order
    pub statements: Vec<ImportStatement>,
    /// Resolved candidate targets, in-project or not
    pub targets: BTreeSet<String>,
    /// Relative imports that could not be resolved
    pub warnings: Vec<ResolutionWarning>,
}

/// Parses Python source and extracts its import statements
///
/// A parser holds tree-sitter state and is not shareable across threads;
/// create one per worker.
pub struct ImportExtractor {
    parser: Parser,
}

impl ImportExtractor {
    pub fn new() -> Result<Self, CircularImportError> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_python::LANGUAGE.into())?;
        Ok(Self { parser })
    }

    /// Parse `source` and resolve its imports relative to `module`
    pub fn extract(
        &mut self,
        source: &str,
        module: &SourceModule,
    ) -> Result<ExtractedImports, SyntaxError> {
        let statements = self.parse_statements(source)?;
        let mut extracted = ExtractedImports::default();

        for statement in &statements {
            match candidate_targets(statement, module) {
                Ok(targets) => extracted.targets.extend(targets),
                Err(err) => extracted.warnings.push(ResolutionWarning {
                    module: module.name().to_string(),
                    statement: statement.to_string(),
                    message: err.to_string(),
                }),
            }
        }

        extracted.statements = statements;
        Ok(extracted)
    }

    /// Parse `source` into its import statements, without resolving them
    pub fn parse_statements(&mut self, source: &str) -> Result<Vec<ImportStatement>, SyntaxError> {
        let tree = self.parser.parse(source, None).ok_or(SyntaxError::NoTree)?;
        let root = tree.root_node();

        if root.has_error() {
            return Err(invalid_at(first_error(root).unwrap_or(root)));
        }

        let bytes = source.as_bytes();
        let mut statements = Vec::new();
        let mut cursor = root.walk();

        loop {
            let node = cursor.node();
            if is_python2_only(node, bytes) {
                return Err(invalid_at(node));
            }

            let descend = match node.kind() {
                "import_statement" => {
                    collect_import(node, bytes, &mut statements);
                    false
                }
                "import_from_statement" => {
                    collect_from_import(node, bytes, &mut statements);
                    false
                }
                "future_import_statement" => false,
                _ => true,
            };

            if descend && cursor.goto_first_child() {
                continue;
            }

            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return Ok(statements);
                }
            }
        }
    }
}

/// `import a.b, c as d`
fn collect_import(node: Node<'_>, source: &[u8], statements: &mut Vec<ImportStatement>) {
    let mut cursor = node.walk();
    for name in node.children_by_field_name("name", &mut cursor) {
        if let Some(module) = imported_name(name, source) {
            statements.push(ImportStatement::absolute(module));
        }
    }
}

/// `from x import a, b`, `from ..x import (a as b)`, `from . import *`
fn collect_from_import(node: Node<'_>, source: &[u8], statements: &mut Vec<ImportStatement>) {
    let Some(module_node) = node.child_by_field_name("module_name") else {
        return;
    };

    let mut cursor = node.walk();
    let mut names: Vec<String> = node
        .children_by_field_name("name", &mut cursor)
        .filter_map(|name| imported_name(name, source))
        .collect();

    let mut cursor = node.walk();
    if node
        .named_children(&mut cursor)
        .any(|child| child.kind() == "wildcard_import")
    {
        names.push(ImportStatement::WILDCARD.to_string());
    }

    let statement = match module_node.kind() {
        "relative_import" => {
            let mut level = 0;
            let mut suffix = None;
            let mut inner = module_node.walk();
            for child in module_node.named_children(&mut inner) {
                match child.kind() {
                    "import_prefix" => {
                        level = text(child, source).chars().filter(|c| *c == '.').count();
                    }
                    "dotted_name" => suffix = Some(dotted_name(child, source)),
                    _ => {}
                }
            }
            ImportStatement::Relative {
                level,
                suffix,
                names,
            }
        }
        _ => ImportStatement::Absolute {
            module: dotted_name(module_node, source),
            names,
        },
    };

    statements.push(statement);
}

/// The dotted path of a `dotted_name` or the `name` of an `aliased_import`
fn imported_name(node: Node<'_>, source: &[u8]) -> Option<String> {
    match node.kind() {
        "dotted_name" => Some(dotted_name(node, source)),
        "aliased_import" => node
            .child_by_field_name("name")
            .map(|name| dotted_name(name, source)),
        _ => None,
    }
}

fn dotted_name(node: Node<'_>, source: &[u8]) -> String {
    let mut cursor = node.walk();
    let parts: Vec<&str> = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() == "identifier")
        .map(|child| text(child, source))
        .collect();

    if parts.is_empty() {
        text(node, source).to_string()
    } else {
        parts.join(".")
    }
}

fn text<'a>(node: Node<'_>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

/// Constructs tree-sitter accepts but that only parse as Python 2
fn is_python2_only(node: Node<'_>, source: &[u8]) -> bool {
    match node.kind() {
        // `print >>f, x` is still a valid Python 3 expression
        "print_statement" => !has_child(node, "chevron"),
        "exec_statement" => true,
        // `repr` backticks are lexed as a string delimiter
        "string" => text(node, source).starts_with('`'),
        // `except E, e:` and `a <> b`
        "except_clause" => has_child(node, ","),
        "comparison_operator" => has_child(node, "<>"),
        _ => false,
    }
}

fn has_child(node: Node<'_>, kind: &str) -> bool {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|child| child.kind() == kind);
    found
}

fn invalid_at(node: Node<'_>) -> SyntaxError {
    let Point { row, column } = node.start_position();
    SyntaxError::Invalid {
        line: row + 1,
        column: column + 1,
    }
}

fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if node.has_error() {
            let mut cursor = node.walk();
            let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
            stack.extend(children.into_iter().rev());
        }
    }
    None
}
