//! Canonical signature printer
//!
//! Renders type expressions and function signatures into a single
//! whitespace-normalized string. The output only depends on the shape of the
//! expression, never on how the source was formatted.

use crate::model::{ChanDir, Field, FuncSig, TypeExpr};

/// Rendered for any shape the front end could not map.
pub const UNMAPPED: &str = "UNMAPPED";

/// Render a type expression.
pub fn render_type(expr: &TypeExpr) -> String {
    match expr {
        TypeExpr::Ident(name) => name.clone(),
        TypeExpr::Literal(text) => text.clone(),
        TypeExpr::Qualified { namespace, member } => {
            format!("{}.{}", render_type(namespace), member)
        }
        TypeExpr::Pointer(elem) => format!("*{}", render_type(elem)),
        TypeExpr::Sequence { len, elem } => {
            let len = len.as_deref().map(render_type).unwrap_or_default();
            format!("[{}]{}", len, render_type(elem))
        }
        TypeExpr::Map { key, value } => {
            format!("map[{}]{}", render_type(key), render_type(value))
        }
        TypeExpr::Channel { dir, elem } => match dir {
            ChanDir::Recv => format!("<-chan {}", render_type(elem)),
            ChanDir::Send => format!("chan<- {}", render_type(elem)),
            ChanDir::Both => format!("chan {}", render_type(elem)),
        },
        TypeExpr::Variadic(_) => "...".to_string(),
        TypeExpr::Struct(fields) => format!("struct{{{}}}", render_fields(fields).join("; ")),
        TypeExpr::Interface(methods) => {
            format!("interface{{{}}}", render_fields(methods).join("; "))
        }
        TypeExpr::Func(sig) => render_func(sig, "func"),
        TypeExpr::Unmapped => UNMAPPED.to_string(),
    }
}

/// Render a function signature with `name` in front of the parameter list.
///
/// `name` is `func` for function types, the declared name for declarations and
/// the field name for function-typed fields.
pub fn render_func(sig: &FuncSig, name: &str) -> String {
    let params = render_fields(&sig.params).join(", ");
    if sig.results.is_empty() {
        return format!("{}({})", name, params);
    }

    let mut results = render_fields(&sig.results).join(", ");
    // Anything longer than one token needs parentheses to stay unambiguous.
    if results.contains(' ') {
        results = format!("({})", results);
    }
    format!("{}({}) {}", name, params, results)
}

/// Render each entry of a field list.
pub fn render_fields(fields: &[Field]) -> Vec<String> {
    fields.iter().map(render_field).collect()
}

fn render_field(field: &Field) -> String {
    let Some(first) = field.names.first() else {
        return render_type(&field.ty);
    };
    if let TypeExpr::Func(sig) = &field.ty {
        return render_func(sig, first);
    }
    format!("{} {}", field.names.join(", "), render_type(&field.ty))
}
