//! Project loading
//!
//! Discovers the packages of a Go module, parses every package file and hands
//! one [`CompilationUnit`] per file to the graph builder.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use gomap_core::{CompilationUnit, Graph, GraphBuilder, NamespaceResolver};
use ignore::{DirEntry, WalkBuilder};

use crate::error::Result;
use crate::extractor::extract;
use crate::module::{read_module_path, MODULE_FILE};
use crate::parser::{read_source, GoParser};

/// All compilation units of a module.
#[derive(Debug, Clone)]
pub struct Project {
    pub module_path: String,
    pub units: Vec<CompilationUnit>,
}

impl Project {
    pub fn resolver(&self) -> NamespaceResolver {
        NamespaceResolver::new(self.module_path.clone())
    }

    /// Fold the units into the package graph.
    pub fn build_graph(&self) -> Graph {
        let mut builder = GraphBuilder::new(self.resolver());
        let mut included = 0;
        for unit in &self.units {
            if builder.add_unit(unit) {
                included += 1;
            }
        }
        tracing::debug!("{} of {} units belong to the project", included, self.units.len());
        builder.build()
    }
}

/// Load and parse every package of the module rooted at `root`.
///
/// Files tagged `ignore` by a build constraint are left out. A file whose
/// package clause disagrees with the first one seen in its directory is
/// skipped with a warning.
pub fn load_project(root: &Path) -> Result<Project> {
    let module_path = read_module_path(root)?;
    let mut parser = GoParser::new()?;
    let mut units = Vec::new();

    for (dir, files) in package_files(root)? {
        let namespace_path = namespace_for(&module_path, root, &dir);
        let mut package_name: Option<String> = None;

        for file in files {
            let source = read_source(&file)?;
            if is_build_ignored(&source) {
                tracing::debug!("Skipping {}: excluded by build constraint", file.display());
                continue;
            }

            let parsed = parser.parse_source(&file, source)?;
            let syntax = extract(&parsed)?;

            let first = package_name.get_or_insert_with(|| syntax.package_name.clone());
            if *first != syntax.package_name {
                tracing::warn!(
                    "Skipping {}: package {} does not match package {} in {}",
                    file.display(),
                    syntax.package_name,
                    first,
                    dir.display()
                );
                continue;
            }

            units.push(CompilationUnit {
                package_name: syntax.package_name,
                namespace_path: namespace_path.clone(),
                imports: syntax.imports,
                declarations: syntax.declarations,
            });
        }
    }

    tracing::info!("Loaded {} files of module {}", units.len(), module_path);
    Ok(Project { module_path, units })
}

/// Load the module rooted at `root` and build its package graph.
pub fn build_project_graph(root: &Path) -> Result<Graph> {
    Ok(load_project(root)?.build_graph())
}

/// Package source files grouped by directory, both in lexical order.
pub fn package_files(root: &Path) -> Result<BTreeMap<PathBuf, Vec<PathBuf>>> {
    let mut packages: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| !is_skipped_dir(entry))
        .build();

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) || !is_package_file(entry.path()) {
            continue;
        }
        let dir = entry
            .path()
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.to_path_buf());
        packages.entry(dir).or_default().push(entry.into_path());
    }

    Ok(packages)
}

/// Directories the `./...` pattern never descends into.
fn is_skipped_dir(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.')
        || name.starts_with('_')
        || name == "testdata"
        || name == "vendor"
        || entry.path().join(MODULE_FILE).is_file()
}

/// Non-test Go sources; files starting with `.` or `_` are ignored by the toolchain.
fn is_package_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".go")
        && !name.ends_with("_test.go")
        && !name.starts_with('.')
        && !name.starts_with('_')
}

/// Whether the header comments before the package clause carry an `ignore`
/// build constraint (`//go:build ignore` or `// +build ignore`).
///
/// Other constraints are not evaluated.
fn is_build_ignored(source: &str) -> bool {
    for line in source.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(comment) = line.strip_prefix("//") else {
            break;
        };
        if let Some(expr) = comment.strip_prefix("go:build") {
            if expr.trim() == "ignore" {
                return true;
            }
        } else if let Some(tags) = comment.trim_start().strip_prefix("+build") {
            if tags.split_whitespace().any(|tag| tag == "ignore") {
                return true;
            }
        }
    }
    false
}

/// Import path of the package in `dir`.
fn namespace_for(module_path: &str, root: &Path, dir: &Path) -> String {
    let rel: Vec<String> = dir
        .strip_prefix(root)
        .unwrap_or(dir)
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if rel.is_empty() {
        module_path.to_string()
    } else {
        format!("{}/{}", module_path, rel.join("/"))
    }
}
