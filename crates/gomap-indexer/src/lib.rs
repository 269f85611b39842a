//! Go front end: module discovery, parsing and extraction

pub mod error;
pub mod module;
pub mod parser;
pub mod tokens;
pub mod extractor;
pub mod loader;
pub mod loc;


pub use error::{IndexError, Result};
pub use module::{read_module_path, parse_module_path, MODULE_FILE};
pub use parser::{GoParser, ParsedFile};
pub use tokens::tokens;
pub use extractor::{extract, FileSyntax};
pub use loader::{build_project_graph, load_project, package_files, Project};
pub use loc::{LineCounter, LocConfig, LocOutcome};
