//! Token-based line counting over files and directory trees

use std::path::{Path, PathBuf};

use gomap_core::{count_declarations, count_token_lines, DeclCounts, FileStats, LocReport};
use ignore::WalkBuilder;

use crate::error::{IndexError, Result};
use crate::extractor::extract;
use crate::parser::{GoParser, ParsedFile};
use crate::tokens::tokens;

/// Which files a directory count leaves out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocConfig {
    /// Skip `*_test.go` files.
    pub ignore_tests: bool,
    /// Skip files whose relative path contains `<dir>/` for any entry.
    pub ignore_dirs: Vec<String>,
}

impl LocConfig {
    /// Whether the file at slash-separated relative path `rel` is left out.
    pub fn skips(&self, rel: &str) -> bool {
        if self.ignore_tests && rel.ends_with("_test.go") {
            return true;
        }
        self.ignore_dirs
            .iter()
            .any(|dir| rel.contains(&format!("{}/", dir)))
    }
}

/// Result of counting a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocOutcome {
    /// A directory: one row per file plus the total.
    Directory(LocReport),
    /// A single Go file: the line count only.
    File { path: PathBuf, lines: usize },
}

/// Counts lines and declarations, reusing one parser for every file.
#[derive(Debug)]
pub struct LineCounter {
    parser: GoParser,
}

impl LineCounter {
    pub fn new() -> Result<Self> {
        Ok(LineCounter {
            parser: GoParser::new()?,
        })
    }

    /// Count `path`, which must be a directory or a `.go` file.
    pub fn count_path(&mut self, path: &Path, config: &LocConfig) -> Result<LocOutcome> {
        let meta = std::fs::metadata(path).map_err(|e| IndexError::io(path, e))?;
        if meta.is_dir() {
            return self.count_directory(path, config).map(LocOutcome::Directory);
        }
        if path.extension().is_some_and(|ext| ext == "go") {
            let lines = self.count_file(path)?;
            return Ok(LocOutcome::File {
                path: path.to_path_buf(),
                lines,
            });
        }
        Err(IndexError::NotGoSource(path.to_path_buf()))
    }

    /// Distinct token-bearing lines of one file.
    pub fn count_file(&mut self, path: &Path) -> Result<usize> {
        let parsed = self.parser.parse_file(path)?;
        Ok(line_count(&parsed))
    }

    /// Distinct token-bearing lines of in-memory source.
    pub fn count_source(&mut self, source: &str) -> Result<usize> {
        let parsed = self
            .parser
            .parse_source(Path::new("<source>"), source.to_string())?;
        Ok(line_count(&parsed))
    }

    /// Lines and declaration counts of one file, reported under `rel`.
    pub fn file_stats(&mut self, path: &Path, rel: String) -> Result<FileStats> {
        let parsed = self.parser.parse_file(path)?;
        let decls = declaration_counts(&parsed)?;
        Ok(FileStats {
            path: rel,
            lines: line_count(&parsed),
            decls,
        })
    }

    /// Walk `root` depth-first in lexical order and count every Go file.
    ///
    /// The first read or parse failure aborts the whole count.
    pub fn count_directory(&mut self, root: &Path, config: &LocConfig) -> Result<LocReport> {
        let mut report = LocReport::default();

        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let rel = relative_slash_path(root, entry.path());
            if !rel.ends_with(".go") || config.skips(&rel) {
                continue;
            }

            let stats = self.file_stats(entry.path(), rel)?;
            tracing::debug!("{}: {} lines", stats.path, stats.lines);
            report.push(stats);
        }

        tracing::info!(
            "Counted {} files, {} lines",
            report.files.len(),
            report.total.lines
        );
        Ok(report)
    }
}

fn line_count(parsed: &ParsedFile) -> usize {
    count_token_lines(&tokens(parsed))
}

fn declaration_counts(parsed: &ParsedFile) -> Result<DeclCounts> {
    let syntax = extract(parsed)?;
    Ok(count_declarations(&syntax.declarations))
}

fn relative_slash_path(root: &Path, path: &Path) -> String {
    let rel: Vec<String> = path
        .strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    rel.join("/")
}
