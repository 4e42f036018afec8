use swc_core::ecma::{
  ast::Module,
  transforms::typescript::strip,
  visit::FoldWith,
};

use crate::Marks;

/// Removes type annotations, type-only declarations and imports that are
/// only used as types. Expects [crate::resolve] to have run.
pub fn ts_to_js(ast: Module, marks: Marks) -> Module {
  ast.fold_with(&mut strip(marks.top_level))
}
