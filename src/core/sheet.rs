//! Locates the `StyleSheet.create` declaration in a parsed file.
//!
//! Only top-level variable declarations are considered: nested scopes and
//! `export const` forms never match. The callee must be exactly the member
//! expression `StyleSheet.create`.

use swc_ecma_ast::{
    Callee, Decl, Expr, MemberProp, ModuleItem, ObjectLit, Pat, Program, Stmt, VarDecl,
};

const SHEET_OBJECT: &str = "StyleSheet";
const SHEET_METHOD: &str = "create";

/// The stylesheet declaration captured from a file, if any.
///
/// `name` and `object` are captured independently: a matching call whose
/// argument is missing or not an object literal still captures the variable
/// name while leaving the table absent. Downstream code must treat the pair
/// as complete only when both are present.
#[derive(Debug, Default)]
pub struct StyleSheetDecl {
    pub name: Option<String>,
    pub object: Option<ObjectLit>,
}

impl StyleSheetDecl {
    /// Both the variable name and its object literal were captured.
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.object.is_some()
    }
}

/// Scan top-level declarations for `const styles = StyleSheet.create({...})`.
///
/// When several declarations match, the last one in program order wins; the
/// scan never exits early and each match overwrites the previous capture.
pub fn locate_style_sheet(program: &Program) -> StyleSheetDecl {
    let mut found = StyleSheetDecl::default();

    match program {
        Program::Module(module) => {
            for item in &module.body {
                if let ModuleItem::Stmt(stmt) = item {
                    scan_stmt(stmt, &mut found);
                }
            }
        }
        Program::Script(script) => {
            for stmt in &script.body {
                scan_stmt(stmt, &mut found);
            }
        }
    }

    found
}

fn scan_stmt(stmt: &Stmt, found: &mut StyleSheetDecl) {
    if let Stmt::Decl(Decl::Var(var_decl)) = stmt {
        scan_var_decl(var_decl, found);
    }
}

fn scan_var_decl(var_decl: &VarDecl, found: &mut StyleSheetDecl) {
    for decl in &var_decl.decls {
        let Some(init) = &decl.init else {
            continue;
        };
        let Expr::Call(call) = &**init else {
            continue;
        };
        let Callee::Expr(callee) = &call.callee else {
            continue;
        };
        let Expr::Member(member) = &**callee else {
            continue;
        };
        let Expr::Ident(obj) = &*member.obj else {
            continue;
        };
        let MemberProp::Ident(prop) = &member.prop else {
            continue;
        };
        if obj.sym.as_str() != SHEET_OBJECT || prop.sym.as_str() != SHEET_METHOD {
            continue;
        }

        found.name = match &decl.name {
            Pat::Ident(binding) => Some(binding.id.sym.to_string()),
            _ => None,
        };
        found.object = call.args.first().and_then(|arg| {
            if arg.spread.is_some() {
                return None;
            }
            match &*arg.expr {
                Expr::Object(obj) => Some(obj.clone()),
                _ => None,
            }
        });
    }
}
