//! Declaration classification
//!
//! Buckets the top-level declarations of a unit into interface-like,
//! record-like and other types plus free functions, and renders each one
//! into its canonical signature.

use serde::{Deserialize, Serialize};

use crate::model::{Decl, TypeExpr};
use crate::signature::{render_func, render_type};

/// Signatures of one unit, grouped but not yet sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classified {
    pub interfaces: Vec<String>,
    pub records: Vec<String>,
    pub others: Vec<String>,
    pub functions: Vec<String>,
}

/// Classify and render the declarations of a unit.
///
/// Methods are skipped: only functions without a receiver are reported.
pub fn classify(decls: &[Decl]) -> Classified {
    let mut out = Classified::default();

    for decl in decls {
        match decl {
            Decl::Type { name, ty } => match ty {
                TypeExpr::Interface(_) => out.interfaces.push(format!("type {} interface", name)),
                TypeExpr::Struct(_) => out.records.push(format!("type {} struct", name)),
                other => out.others.push(format!("type {} {}", name, render_type(other))),
            },
            Decl::Func {
                name,
                receiver: None,
                signature,
            } => out.functions.push(format!("func {}", render_func(signature, name))),
            Decl::Func { .. } | Decl::Const { .. } | Decl::Var { .. } => {}
        }
    }

    out
}

/// Declaration counts of a single file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclCounts {
    /// Type specs.
    pub types: usize,
    /// Free functions; methods are not counted.
    pub funcs: usize,
    /// Const specification groups.
    pub consts: usize,
    /// Var specification groups.
    pub vars: usize,
}

impl std::ops::AddAssign for DeclCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.types += rhs.types;
        self.funcs += rhs.funcs;
        self.consts += rhs.consts;
        self.vars += rhs.vars;
    }
}

/// Count the declarations of a file.
pub fn count_declarations(decls: &[Decl]) -> DeclCounts {
    let mut counts = DeclCounts::default();
    for decl in decls {
        match decl {
            Decl::Type { .. } => counts.types += 1,
            Decl::Func { receiver: None, .. } => counts.funcs += 1,
            Decl::Func { .. } => {}
            Decl::Const { specs } => counts.consts += specs,
            Decl::Var { specs } => counts.vars += specs,
        }
    }
    counts
}
