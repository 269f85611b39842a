//! Graph report rendering

use std::fmt::Write;

use crate::model::Graph;

/// Width of the rule printed after each package.
pub const SEPARATOR_WIDTH: usize = 40;

/// Render the graph as a human-readable report, packages in path order.
pub fn render_graph(graph: &Graph) -> String {
    let mut out = String::new();

    for unit in graph.units() {
        let _ = writeln!(out, "Package: {}", unit.path);
        write_block(&mut out, "Imports", &unit.imports);
        write_block(&mut out, "Types", &unit.types);
        write_block(&mut out, "Functions", &unit.functions);
        let _ = writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH));
    }

    out
}

fn write_block(out: &mut String, label: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    let _ = writeln!(out, "  {}:", label);
    for line in lines {
        let _ = writeln!(out, "    {}", line);
    }
}

/// Render the graph as pretty-printed JSON keyed by package path.
pub fn render_graph_json(graph: &Graph) -> serde_json::Result<String> {
    serde_json::to_string_pretty(graph)
}
