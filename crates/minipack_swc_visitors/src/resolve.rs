use swc_core::common::Mark;
use swc_core::ecma::{ast, transforms::base::resolver, visit::FoldWith};

#[derive(Debug, Clone, Copy)]
pub struct Marks {
  pub unresolved: Mark,
  pub top_level: Mark,
}

/// Runs swc's resolver once for every later pass on this module.
///
/// Must be called inside `GLOBALS.set`, and every pass that receives the
/// returned [Marks] must run inside the same `GLOBALS`.
pub fn resolve(ast: ast::Module, typescript: bool) -> (ast::Module, Marks) {
  let marks = Marks {
    unresolved: Mark::new(),
    top_level: Mark::new(),
  };
  let ast = ast.fold_with(&mut resolver(marks.unresolved, marks.top_level, typescript));
  (ast, marks)
}
