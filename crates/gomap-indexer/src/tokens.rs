//! Lexical token stream of a parsed file
//!
//! Tokens are the leaves of the syntax tree. Comments, whitespace-only
//! terminators and zero-width nodes carry no token. Literals are taken as a
//! single token positioned at their first character, so a raw string spanning
//! several lines only touches its opening line.

use gomap_core::TokenPos;
use tree_sitter::Node;

use crate::parser::ParsedFile;

/// Node kinds that are lexed as one token even though the grammar gives them children.
const ATOMIC_KINDS: &[&str] = &[
    "interpreted_string_literal",
    "raw_string_literal",
    "rune_literal",
];

/// All tokens of `file`, in source order.
pub fn tokens(file: &ParsedFile) -> Vec<TokenPos> {
    let mut out = Vec::new();
    collect(file.root(), file.bytes(), &mut out);
    out
}

fn collect(node: Node<'_>, source: &[u8], out: &mut Vec<TokenPos>) {
    if node.kind() == "comment" {
        return;
    }

    if node.child_count() == 0 || ATOMIC_KINDS.contains(&node.kind()) {
        if is_token(node, source) {
            out.push(TokenPos {
                kind: node.kind(),
                line: node.start_position().row + 1,
            });
        }
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect(child, source, out);
    }
}

fn is_token(node: Node<'_>, source: &[u8]) -> bool {
    if node.is_missing() || node.start_byte() == node.end_byte() {
        return false;
    }
    // Statement terminators may be a bare newline.
    source[node.start_byte()..node.end_byte()]
        .iter()
        .any(|b| !b.is_ascii_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::GoParser;
    use gomap_core::count_token_lines;
    use std::path::Path;

    fn count(src: &str) -> usize {
        let mut parser = GoParser::new().unwrap();
        let parsed = parser.parse_source(Path::new("t.go"), src.to_string()).unwrap();
        count_token_lines(&tokens(&parsed))
    }

    #[test]
    fn test_comments_and_blanks_carry_no_tokens() {
        let src = "package p\n\n// a comment\n\n/*\n block\n*/\n\nvar x = 1 // trailing\n";
        assert_eq!(count(src), 2);
    }

    #[test]
    fn test_raw_string_counts_first_line_only() {
        let src = "package p\n\nconst s = `line one\nline two\nline three`\n";
        assert_eq!(count(src), 2);
    }

    #[test]
    fn test_token_kinds_and_lines() {
        let mut parser = GoParser::new().unwrap();
        let parsed = parser
            .parse_source(Path::new("t.go"), "package p\nvar s = \"x\"\n".to_string())
            .unwrap();
        let toks = tokens(&parsed);

        let kinds: Vec<&str> = toks.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec!["package", "package_identifier", "var", "identifier", "=", "interpreted_string_literal"]
        );
        assert_eq!(toks.first().unwrap().line, 1);
        assert_eq!(toks.last().unwrap().line, 2);
    }
}
