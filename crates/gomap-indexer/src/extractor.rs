//! Go declaration extraction
//!
//! Lowers the tree-sitter syntax tree of a Go file into the core's
//! declaration model: package name, import paths and top-level declarations.
//! Type expressions outside the shapes the signature printer knows are
//! lowered to [`TypeExpr::Unmapped`].

use gomap_core::{ChanDir, Decl, Field, FuncSig, TypeExpr};
use tree_sitter::Node;

use crate::error::{IndexError, Result};
use crate::parser::ParsedFile;

/// Declarations of a single Go file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSyntax {
    pub package_name: String,
    /// Import paths with quotes removed, in file order.
    pub imports: Vec<String>,
    pub declarations: Vec<Decl>,
}

/// Extract the package clause, imports and top-level declarations of a file.
pub fn extract(file: &ParsedFile) -> Result<FileSyntax> {
    let lower = Lowering { source: file.bytes() };
    let mut out = FileSyntax::default();

    let root = file.root();
    let mut cursor = root.walk();
    for node in root.named_children(&mut cursor) {
        match node.kind() {
            "package_clause" => {
                if let Some(name) = node.named_child(0) {
                    out.package_name = lower.text(name).to_string();
                }
            }
            "import_declaration" => lower.imports(node, &mut out.imports),
            "function_declaration" => out.declarations.push(lower.function(node, None)),
            "method_declaration" => {
                let receiver = node
                    .child_by_field_name("receiver")
                    .map(|r| lower.receiver(r))
                    .unwrap_or(TypeExpr::Unmapped);
                out.declarations.push(lower.function(node, Some(receiver)));
            }
            "type_declaration" => lower.type_specs(node, &mut out.declarations),
            "const_declaration" => out.declarations.push(Decl::Const {
                specs: count_specs(node, "const_spec"),
            }),
            "var_declaration" => out.declarations.push(Decl::Var {
                specs: count_specs(node, "var_spec"),
            }),
            _ => {}
        }
    }

    if out.package_name.is_empty() {
        return Err(IndexError::MissingPackage {
            path: file.path.clone(),
        });
    }
    Ok(out)
}

/// Number of specification groups of a `const` / `var` declaration.
fn count_specs(node: Node<'_>, spec_kind: &str) -> usize {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .map(|child| {
            if child.kind() == spec_kind {
                1
            } else if child.kind().ends_with("_spec_list") {
                let mut inner = child.walk();
                child
                    .named_children(&mut inner)
                    .filter(|c| c.kind() == spec_kind)
                    .count()
            } else {
                0
            }
        })
        .sum()
}

fn named_children<'t>(node: Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|c| c.kind() != "comment")
        .collect()
}

struct Lowering<'s> {
    source: &'s [u8],
}

impl<'s> Lowering<'s> {
    fn text(&self, node: Node<'_>) -> &'s str {
        node.utf8_text(self.source).unwrap_or_default()
    }

    fn imports(&self, node: Node<'_>, out: &mut Vec<String>) {
        for child in named_children(node) {
            match child.kind() {
                "import_spec" => {
                    if let Some(path) = child.child_by_field_name("path") {
                        out.push(unquote(self.text(path)).to_string());
                    }
                }
                "import_spec_list" => self.imports(child, out),
                _ => {}
            }
        }
    }

    fn type_specs(&self, node: Node<'_>, out: &mut Vec<Decl>) {
        for child in named_children(node) {
            match child.kind() {
                "type_spec" | "type_alias" => {
                    let name = child
                        .child_by_field_name("name")
                        .map(|n| self.text(n).to_string())
                        .unwrap_or_default();
                    let ty = child
                        .child_by_field_name("type")
                        .map(|t| self.type_expr(t))
                        .unwrap_or(TypeExpr::Unmapped);
                    out.push(Decl::Type { name, ty });
                }
                _ => {}
            }
        }
    }

    fn function(&self, node: Node<'_>, receiver: Option<TypeExpr>) -> Decl {
        let name = node
            .child_by_field_name("name")
            .map(|n| self.text(n).to_string())
            .unwrap_or_default();
        Decl::Func {
            name,
            receiver,
            signature: self.signature(node),
        }
    }

    /// The receiver's type, e.g. `*Server` for `func (s *Server) ...`.
    fn receiver(&self, list: Node<'_>) -> TypeExpr {
        self.parameters(list)
            .into_iter()
            .next()
            .map(|field| field.ty)
            .unwrap_or(TypeExpr::Unmapped)
    }

    /// Parameters and results of any node with `parameters` / `result` fields.
    fn signature(&self, node: Node<'_>) -> FuncSig {
        let params = node
            .child_by_field_name("parameters")
            .map(|p| self.parameters(p))
            .unwrap_or_default();
        let results = match node.child_by_field_name("result") {
            Some(r) if r.kind() == "parameter_list" => self.parameters(r),
            Some(r) => vec![Field::anonymous(self.type_expr(r))],
            None => Vec::new(),
        };
        FuncSig { params, results }
    }

    fn parameters(&self, list: Node<'_>) -> Vec<Field> {
        named_children(list)
            .into_iter()
            .filter_map(|param| match param.kind() {
                "parameter_declaration" => Some(Field {
                    names: self.field_names(param),
                    ty: self.field_type(param),
                }),
                "variadic_parameter_declaration" => Some(Field {
                    names: self.field_names(param),
                    ty: TypeExpr::Variadic(Box::new(self.field_type(param))),
                }),
                _ => None,
            })
            .collect()
    }

    fn field_names(&self, node: Node<'_>) -> Vec<String> {
        let mut cursor = node.walk();
        node.children_by_field_name("name", &mut cursor)
            .map(|n| self.text(n).to_string())
            .collect()
    }

    fn field_type(&self, node: Node<'_>) -> TypeExpr {
        node.child_by_field_name("type")
            .map(|t| self.type_expr(t))
            .unwrap_or(TypeExpr::Unmapped)
    }

    fn struct_fields(&self, node: Node<'_>) -> Vec<Field> {
        let Some(list) = named_children(node)
            .into_iter()
            .find(|c| c.kind() == "field_declaration_list")
        else {
            return Vec::new();
        };

        named_children(list)
            .into_iter()
            .filter(|c| c.kind() == "field_declaration")
            .map(|decl| {
                let names = self.field_names(decl);
                let mut ty = self.field_type(decl);
                if names.is_empty() && has_child_kind(decl, "*") {
                    ty = TypeExpr::Pointer(Box::new(ty));
                }
                Field { names, ty }
            })
            .collect()
    }

    fn interface_elems(&self, node: Node<'_>) -> Vec<Field> {
        named_children(node)
            .into_iter()
            .map(|elem| match elem.kind() {
                "method_elem" | "method_spec" => {
                    let name = elem
                        .child_by_field_name("name")
                        .map(|n| self.text(n).to_string())
                        .unwrap_or_default();
                    Field::named(name, TypeExpr::Func(self.signature(elem)))
                }
                "type_elem" | "constraint_elem" => {
                    let types = named_children(elem);
                    match types.as_slice() {
                        [single] => Field::anonymous(self.type_expr(*single)),
                        _ => Field::anonymous(TypeExpr::Unmapped),
                    }
                }
                _ => Field::anonymous(self.type_expr(elem)),
            })
            .collect()
    }

    fn type_expr(&self, node: Node<'_>) -> TypeExpr {
        match node.kind() {
            "type_identifier" | "identifier" | "package_identifier" | "field_identifier" => {
                TypeExpr::Ident(self.text(node).to_string())
            }
            "int_literal" | "float_literal" | "imaginary_literal" | "rune_literal" => {
                TypeExpr::Literal(self.text(node).to_string())
            }
            "qualified_type" => self.qualified(node, "package", "name"),
            "selector_expression" => self.qualified(node, "operand", "field"),
            "pointer_type" => match named_children(node).first() {
                Some(elem) => TypeExpr::Pointer(Box::new(self.type_expr(*elem))),
                None => TypeExpr::Unmapped,
            },
            "slice_type" => TypeExpr::Sequence {
                len: None,
                elem: Box::new(self.field(node, "element")),
            },
            "array_type" => TypeExpr::Sequence {
                len: Some(Box::new(self.field(node, "length"))),
                elem: Box::new(self.field(node, "element")),
            },
            "map_type" => TypeExpr::Map {
                key: Box::new(self.field(node, "key")),
                value: Box::new(self.field(node, "value")),
            },
            "channel_type" => TypeExpr::Channel {
                dir: channel_dir(node),
                elem: Box::new(self.field(node, "value")),
            },
            "struct_type" => TypeExpr::Struct(self.struct_fields(node)),
            "interface_type" => TypeExpr::Interface(self.interface_elems(node)),
            "function_type" => TypeExpr::Func(self.signature(node)),
            other => {
                tracing::trace!("Unmapped type node: {}", other);
                TypeExpr::Unmapped
            }
        }
    }

    fn field(&self, node: Node<'_>, name: &str) -> TypeExpr {
        node.child_by_field_name(name)
            .map(|n| self.type_expr(n))
            .unwrap_or(TypeExpr::Unmapped)
    }

    fn qualified(&self, node: Node<'_>, namespace: &str, member: &str) -> TypeExpr {
        match (node.child_by_field_name(namespace), node.child_by_field_name(member)) {
            (Some(ns), Some(m)) => TypeExpr::Qualified {
                namespace: Box::new(self.type_expr(ns)),
                member: self.text(m).to_string(),
            },
            _ => TypeExpr::Unmapped,
        }
    }
}

fn has_child_kind(node: Node<'_>, kind: &str) -> bool {
    let mut cursor = node.walk();
    node.children(&mut cursor).any(|c| c.kind() == kind)
}

/// `<-chan T` starts with the arrow, `chan<- T` has it after `chan`.
fn channel_dir(node: Node<'_>) -> ChanDir {
    let mut cursor = node.walk();
    let kinds: Vec<&str> = node.children(&mut cursor).map(|c| c.kind()).collect();
    match kinds.iter().position(|k| *k == "<-") {
        Some(0) => ChanDir::Recv,
        Some(_) => ChanDir::Send,
        None => ChanDir::Both,
    }
}

fn unquote(literal: &str) -> &str {
    literal.trim_matches(|c| c == '"' || c == '`')
}
