//! Test utilities for gomap-core

use crate::model::*;

pub const MODULE: &str = "example.com/shop";

/// A compilation unit of package `name` at `MODULE/<rel>` (or the root when `rel` is empty).
pub fn unit(rel: &str, name: &str, imports: &[&str], declarations: Vec<Decl>) -> CompilationUnit {
    let namespace_path = if rel.is_empty() {
        MODULE.to_string()
    } else {
        format!("{}/{}", MODULE, rel)
    };
    CompilationUnit {
        package_name: name.to_string(),
        namespace_path,
        imports: imports.iter().map(|s| s.to_string()).collect(),
        declarations,
    }
}

pub fn type_decl(name: &str, ty: TypeExpr) -> Decl {
    Decl::Type {
        name: name.to_string(),
        ty,
    }
}

pub fn func_decl(name: &str, params: Vec<Field>, results: Vec<Field>) -> Decl {
    Decl::Func {
        name: name.to_string(),
        receiver: None,
        signature: FuncSig { params, results },
    }
}

pub fn method_decl(receiver: &str, name: &str) -> Decl {
    Decl::Func {
        name: name.to_string(),
        receiver: Some(TypeExpr::pointer(TypeExpr::ident(receiver))),
        signature: FuncSig::default(),
    }
}

/// A small three-package shop: `example.com/shop`, `store` and `internal/money`.
pub fn sample_units() -> Vec<CompilationUnit> {
    vec![
        unit(
            "store",
            "store",
            &["context", "example.com/shop/internal/money", "fmt"],
            vec![
                type_decl(
                    "Item",
                    TypeExpr::Struct(vec![
                        Field::named("SKU", TypeExpr::ident("string")),
                        Field::named("Price", TypeExpr::qualified("money", "Cents")),
                    ]),
                ),
                type_decl(
                    "Repository",
                    TypeExpr::Interface(vec![Field::named(
                        "Get",
                        TypeExpr::Func(FuncSig {
                            params: vec![
                                Field::named("ctx", TypeExpr::qualified("context", "Context")),
                                Field::named("sku", TypeExpr::ident("string")),
                            ],
                            results: vec![
                                Field::anonymous(TypeExpr::pointer(TypeExpr::ident("Item"))),
                                Field::anonymous(TypeExpr::ident("error")),
                            ],
                        }),
                    )]),
                ),
                func_decl(
                    "NewMemory",
                    vec![],
                    vec![Field::anonymous(TypeExpr::ident("Repository"))],
                ),
                method_decl("memory", "Get"),
            ],
        ),
        unit(
            "store",
            "store",
            &["example.com/shop/internal/money", "sync"],
            vec![
                type_decl("Catalog", TypeExpr::slice(TypeExpr::pointer(TypeExpr::ident("Item")))),
                func_decl(
                    "Total",
                    vec![Field::named("items", TypeExpr::ident("Catalog"))],
                    vec![Field::anonymous(TypeExpr::qualified("money", "Cents"))],
                ),
            ],
        ),
        unit(
            "internal/money",
            "money",
            &["strconv"],
            vec![
                type_decl("Cents", TypeExpr::ident("int64")),
                func_decl(
                    "Parse",
                    vec![Field::named("s", TypeExpr::ident("string"))],
                    vec![
                        Field::named("c", TypeExpr::ident("Cents")),
                        Field::named("err", TypeExpr::ident("error")),
                    ],
                ),
            ],
        ),
        unit(
            "",
            "main",
            &["example.com/shop/store", "log"],
            vec![func_decl("main", vec![], vec![])],
        ),
    ]
}
