//! Core data structures for the package graph

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Direction of a channel type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChanDir {
    /// `<-chan T`
    Recv,
    /// `chan<- T`
    Send,
    /// `chan T`
    Both,
}

/// A type expression, reduced to the fixed set of shapes the signature
/// printer understands. Anything the front end cannot map lands in `Unmapped`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeExpr {
    // ── Names ───────────────────────────────────────────────
    Ident(String),
    /// Constant expression text, e.g. an array length literal.
    Literal(String),
    Qualified {
        namespace: Box<TypeExpr>,
        member: String,
    },

    // ── Composite ───────────────────────────────────────────
    Pointer(Box<TypeExpr>),
    /// Array when `len` is set, slice otherwise.
    Sequence {
        len: Option<Box<TypeExpr>>,
        elem: Box<TypeExpr>,
    },
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    Channel {
        dir: ChanDir,
        elem: Box<TypeExpr>,
    },
    /// Final `...T` parameter; the element type is kept but not rendered.
    Variadic(Box<TypeExpr>),

    // ── Structural ──────────────────────────────────────────
    Struct(Vec<Field>),
    Interface(Vec<Field>),
    Func(FuncSig),

    // ── Fallback ────────────────────────────────────────────
    Unmapped,
}

impl TypeExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        TypeExpr::Ident(name.into())
    }

    pub fn pointer(elem: TypeExpr) -> Self {
        TypeExpr::Pointer(Box::new(elem))
    }

    pub fn slice(elem: TypeExpr) -> Self {
        TypeExpr::Sequence {
            len: None,
            elem: Box::new(elem),
        }
    }

    pub fn qualified(namespace: impl Into<String>, member: impl Into<String>) -> Self {
        TypeExpr::Qualified {
            namespace: Box::new(TypeExpr::Ident(namespace.into())),
            member: member.into(),
        }
    }
}

/// One entry of a parameter, result, struct field or interface method list.
/// `names` is empty for anonymous parameters and embedded fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub names: Vec<String>,
    pub ty: TypeExpr,
}

impl Field {
    pub fn anonymous(ty: TypeExpr) -> Self {
        Field { names: Vec::new(), ty }
    }

    pub fn named(name: impl Into<String>, ty: TypeExpr) -> Self {
        Field {
            names: vec![name.into()],
            ty,
        }
    }
}

/// Parameters and results of a function type or declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuncSig {
    pub params: Vec<Field>,
    pub results: Vec<Field>,
}

/// A top-level declaration of a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decl {
    /// One type spec; aliases are included.
    Type { name: String, ty: TypeExpr },
    /// A function, or a method when `receiver` is set.
    Func {
        name: String,
        receiver: Option<TypeExpr>,
        signature: FuncSig,
    },
    /// A `const` declaration holding `specs` specification groups.
    Const { specs: usize },
    /// A `var` declaration holding `specs` specification groups.
    Var { specs: usize },
}

/// One parsed source file as handed over by the front end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationUnit {
    /// Name from the package clause.
    pub package_name: String,
    /// Fully-qualified import path of the package the file belongs to.
    pub namespace_path: String,
    /// Fully-qualified import paths, in file order.
    pub imports: Vec<String>,
    pub declarations: Vec<Decl>,
}

/// A package node of the graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectUnit {
    /// Project-relative import path; the graph key.
    pub path: String,
    pub imports: Vec<String>,
    pub types: Vec<String>,
    pub functions: Vec<String>,
}

/// The package graph, ordered by package path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Graph {
    units: BTreeMap<String, ProjectUnit>,
}

impl Graph {
    pub(crate) fn from_units(units: BTreeMap<String, ProjectUnit>) -> Self {
        Graph { units }
    }

    /// Look up a package by project-relative path.
    pub fn unit(&self, path: &str) -> Option<&ProjectUnit> {
        self.units.get(path)
    }

    /// Packages in ascending path order.
    pub fn units(&self) -> impl Iterator<Item = &ProjectUnit> {
        self.units.values()
    }

    /// Package paths in ascending order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

/// A lexical token position, as produced by the front end's scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPos {
    pub kind: &'static str,
    /// 1-based line of the token's first character.
    pub line: usize,
}
