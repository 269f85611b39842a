//! Module root detection (`go.mod`)

use std::path::Path;

use crate::error::{IndexError, Result};

/// Name of the module declaration file at the project root.
pub const MODULE_FILE: &str = "go.mod";

/// Read the module path declared in `<dir>/go.mod`.
pub fn read_module_path(dir: &Path) -> Result<String> {
    let path = dir.join(MODULE_FILE);
    let content = std::fs::read_to_string(&path).map_err(|e| IndexError::Configuration {
        path: path.clone(),
        reason: format!("could not read {}: {}", MODULE_FILE, e),
    })?;

    let module = parse_module_path(&content).ok_or_else(|| IndexError::Configuration {
        path: path.clone(),
        reason: format!("module path not found in {}", MODULE_FILE),
    })?;

    tracing::debug!("Module path: {}", module);
    Ok(module)
}

/// Extract the module path from `go.mod` content.
pub fn parse_module_path(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let rest = line.trim_start().strip_prefix("module")?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let rest = match rest.find("//") {
            Some(idx) => &rest[..idx],
            None => rest,
        };
        let module = rest.trim().trim_matches(|c| c == '"' || c == '`');
        (!module.is_empty()).then(|| module.to_string())
    })
}
