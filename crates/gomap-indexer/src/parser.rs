//! Go parser wrapper around tree-sitter
//!
//! One parser is created per run and reused for every file. Files that do not
//! parse cleanly are rejected with the position of the first broken node.

use std::path::{Path, PathBuf};

use tree_sitter::{Node, Parser, Tree};

use crate::error::{IndexError, Result};

/// A successfully parsed Go source file.
#[derive(Debug)]
pub struct ParsedFile {
    pub path: PathBuf,
    pub source: String,
    pub tree: Tree,
}

impl ParsedFile {
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    pub fn bytes(&self) -> &[u8] {
        self.source.as_bytes()
    }
}

/// Reusable Go parser.
pub struct GoParser {
    parser: Parser,
}

impl std::fmt::Debug for GoParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoParser").finish_non_exhaustive()
    }
}

impl GoParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        let language: tree_sitter::Language = tree_sitter_go::LANGUAGE.into();
        parser
            .set_language(&language)
            .map_err(|e| IndexError::Parser(format!("Failed to set language: {}", e)))?;
        Ok(GoParser { parser })
    }

    /// Read and parse a file from disk.
    pub fn parse_file(&mut self, path: &Path) -> Result<ParsedFile> {
        let source = read_source(path)?;
        self.parse_source(path, source)
    }

    /// Parse in-memory source; `path` is only used for error reporting.
    pub fn parse_source(&mut self, path: &Path, source: String) -> Result<ParsedFile> {
        let tree = self
            .parser
            .parse(&source, None)
            .ok_or_else(|| IndexError::Parser("Failed to parse content".to_string()))?;

        if let Some(broken) = first_error(tree.root_node()) {
            let pos = broken.start_position();
            return Err(IndexError::Syntax {
                path: path.to_path_buf(),
                line: pos.row + 1,
                column: pos.column + 1,
            });
        }

        tracing::debug!("Parsed {}", path.display());
        Ok(ParsedFile {
            path: path.to_path_buf(),
            source,
            tree,
        })
    }
}

/// Read a source file, which must be valid UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| IndexError::io(path, e))?;
    String::from_utf8(bytes).map_err(|_| IndexError::Encoding {
        path: path.to_path_buf(),
    })
}

/// Depth-first search for the first error or missing node.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if !node.has_error() {
        return None;
    }
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error).or(Some(node))
}
