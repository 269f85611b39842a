//! gomap core: package graph model, signature printer and line metrics

pub mod model;
pub mod namespace;
pub mod signature;
pub mod classify;
pub mod graph;
pub mod report;
pub mod metrics;


#[cfg(test)]
pub mod test_utils;

pub use model::{ChanDir, TypeExpr, Field, FuncSig, Decl, CompilationUnit, ProjectUnit, Graph, TokenPos};
pub use namespace::NamespaceResolver;
pub use signature::{render_type, render_func, render_fields, UNMAPPED};
pub use classify::{classify, count_declarations, Classified, DeclCounts};
pub use graph::{GraphBuilder, build_graph};
pub use report::{render_graph, render_graph_json};
pub use metrics::{count_token_lines, render_line_count, FileStats, LocReport, LocTotals};
