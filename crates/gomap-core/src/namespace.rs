//! Root-namespace prefix handling

/// Separator between namespace path segments.
const SEPARATOR: char = '/';

/// Maps fully-qualified package paths onto project-relative ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceResolver {
    root: String,
    root_with_separator: String,
}

impl NamespaceResolver {
    pub fn new(root: impl Into<String>) -> Self {
        let root = root.into();
        let root_with_separator = format!("{}{}", root, SEPARATOR);
        NamespaceResolver {
            root,
            root_with_separator,
        }
    }

    /// Whether `namespace` belongs to the project.
    ///
    /// This is a plain string prefix test against the root namespace.
    pub fn is_internal(&self, namespace: &str) -> bool {
        namespace.starts_with(&self.root)
    }

    /// Strip the `root/` prefix; namespaces without it come back unchanged.
    pub fn resolve<'a>(&self, namespace: &'a str) -> &'a str {
        namespace
            .strip_prefix(&self.root_with_separator)
            .unwrap_or(namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_strips_root_prefix() {
        let resolver = NamespaceResolver::new("example.com/app");
        assert_eq!(resolver.resolve("example.com/app/sub/pkg"), "sub/pkg");
        assert_eq!(resolver.resolve("example.com/app/util"), "util");
    }

    #[test]
    fn test_resolve_keeps_root_and_foreign_paths() {
        let resolver = NamespaceResolver::new("example.com/app");
        assert_eq!(resolver.resolve("example.com/app"), "example.com/app");
        assert_eq!(resolver.resolve("github.com/other/lib"), "github.com/other/lib");
    }

    #[test]
    fn test_is_internal() {
        let resolver = NamespaceResolver::new("example.com/app");
        assert!(resolver.is_internal("example.com/app"));
        assert!(resolver.is_internal("example.com/app/internal/db"));
        assert!(!resolver.is_internal("fmt"));
        assert!(!resolver.is_internal("golang.org/x/tools/go/packages"));
    }
}
