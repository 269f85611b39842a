//! Token-based line counting and the line-count report

use std::collections::HashSet;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::classify::DeclCounts;
use crate::model::TokenPos;

/// Number of distinct lines touched by at least one token.
pub fn count_token_lines<'a>(tokens: impl IntoIterator<Item = &'a TokenPos>) -> usize {
    tokens
        .into_iter()
        .map(|token| token.line)
        .collect::<HashSet<_>>()
        .len()
}

/// Line and declaration counts of one source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    /// Slash-separated path relative to the counted directory.
    pub path: String,
    pub lines: usize,
    #[serde(flatten)]
    pub decls: DeclCounts,
}

/// Aggregate of all counted files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocTotals {
    pub lines: usize,
    #[serde(flatten)]
    pub decls: DeclCounts,
}

/// Per-file rows, in traversal order, plus their sum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocReport {
    pub files: Vec<FileStats>,
    pub total: LocTotals,
}

impl LocReport {
    pub fn push(&mut self, stats: FileStats) {
        self.total.lines += stats.lines;
        self.total.decls += stats.decls;
        self.files.push(stats);
    }

    /// Render as a fixed-width table with a trailing `Total` row.
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<30}{:<10}{:<10}{:<10}{:<10}{:<10}",
            "Path", "Lines", "Types", "Funcs", "Consts", "Vars"
        );
        for file in &self.files {
            write_row(&mut out, &file.path, file.lines, &file.decls);
        }
        write_row(&mut out, "Total", self.total.lines, &self.total.decls);
        out
    }
}

fn write_row(out: &mut String, label: &str, lines: usize, decls: &DeclCounts) {
    let _ = writeln!(
        out,
        "{:<30}{:<10}{:<10}{:<10}{:<10}{:<10}",
        label, lines, decls.types, decls.funcs, decls.consts, decls.vars
    );
}

/// Single-file summary line.
pub fn render_line_count(lines: usize) -> String {
    format!("{} lines of code\n", lines)
}
