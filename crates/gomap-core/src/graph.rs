//! Package dependency graph construction
//!
//! Building happens in two phases: units are folded into unsorted
//! accumulators, then [`GraphBuilder::build`] sorts and de-duplicates every
//! node into its final, deterministic form.

use std::collections::{BTreeMap, HashMap};

use crate::classify::classify;
use crate::model::{CompilationUnit, Graph, ProjectUnit};
use crate::namespace::NamespaceResolver;

/// Accumulated, not yet normalized, contents of one package.
#[derive(Debug, Default)]
struct UnitAccumulator {
    imports: Vec<String>,
    interfaces: Vec<String>,
    records: Vec<String>,
    others: Vec<String>,
    functions: Vec<String>,
}

impl UnitAccumulator {
    fn into_unit(self, path: String) -> ProjectUnit {
        let mut types = sorted(self.interfaces);
        types.extend(sorted(self.records));
        types.extend(sorted(self.others));

        ProjectUnit {
            path,
            imports: sorted(self.imports),
            types,
            functions: sorted(self.functions),
        }
    }
}

fn sorted(mut items: Vec<String>) -> Vec<String> {
    items.sort();
    items.dedup();
    items
}

/// Folds compilation units into a [`Graph`].
#[derive(Debug)]
pub struct GraphBuilder {
    resolver: NamespaceResolver,
    units: HashMap<String, UnitAccumulator>,
}

impl GraphBuilder {
    pub fn new(resolver: NamespaceResolver) -> Self {
        GraphBuilder {
            resolver,
            units: HashMap::new(),
        }
    }

    /// Fold one compilation unit into its package node.
    ///
    /// Returns `false` when the unit does not belong to the project (unnamed
    /// package or a namespace outside the root); such units are ignored.
    pub fn add_unit(&mut self, unit: &CompilationUnit) -> bool {
        if unit.package_name.is_empty() || !self.resolver.is_internal(&unit.namespace_path) {
            tracing::debug!("Skipping unit outside project: {:?}", unit.namespace_path);
            return false;
        }

        let path = self.resolver.resolve(&unit.namespace_path).to_string();
        let acc = self.units.entry(path).or_default();

        for import in &unit.imports {
            if self.resolver.is_internal(import) {
                acc.imports.push(self.resolver.resolve(import).to_string());
            }
        }

        let classified = classify(&unit.declarations);
        acc.interfaces.extend(classified.interfaces);
        acc.records.extend(classified.records);
        acc.others.extend(classified.others);
        acc.functions.extend(classified.functions);

        true
    }

    /// Normalize every node and produce the final graph.
    pub fn build(self) -> Graph {
        let units: BTreeMap<String, ProjectUnit> = self
            .units
            .into_iter()
            .map(|(path, acc)| (path.clone(), acc.into_unit(path)))
            .collect();

        tracing::debug!("Built graph with {} packages", units.len());
        Graph::from_units(units)
    }
}

/// Build a graph from a set of compilation units in one go.
pub fn build_graph<'a>(
    resolver: NamespaceResolver,
    units: impl IntoIterator<Item = &'a CompilationUnit>,
) -> Graph {
    let mut builder = GraphBuilder::new(resolver);
    for unit in units {
        builder.add_unit(unit);
    }
    builder.build()
}
