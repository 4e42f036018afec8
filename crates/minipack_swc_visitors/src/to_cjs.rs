use swc_core::common::comments::SingleThreadedComments;
use swc_core::ecma::transforms::base::helpers::{self, inject_helpers, HELPERS};
use swc_core::ecma::transforms::base::{fixer::fixer, hygiene::hygiene};
use swc_core::ecma::{
  ast::{self, EsVersion},
  transforms::module::common_js,
  visit::FoldWith,
};

use crate::{downlevel, Marks};

/// Lowers syntax newer than `target`, then rewrites ES module syntax into a
/// CommonJS body that runs with `require`, `module` and `exports` in scope.
/// Expects [crate::resolve] to have run.
///
/// Helpers are inlined, so the output needs nothing beyond those three
/// bindings.
pub fn to_cjs(
  ast: ast::Module,
  comments: &SingleThreadedComments,
  marks: Marks,
  target: EsVersion,
) -> ast::Module {
  HELPERS.set(&helpers::Helpers::new(false), || {
    ast
      .fold_with(&mut downlevel(target, comments, marks))
      .fold_with(&mut common_js::common_js::<SingleThreadedComments>(
        marks.unresolved,
        common_js::Config {
          ..Default::default()
        },
        Default::default(),
        None,
      ))
      .fold_with(&mut inject_helpers(marks.unresolved))
      .fold_with(&mut hygiene())
      .fold_with(&mut fixer(Some(comments)))
  })
}

#[cfg(test)]
mod tests {
  use minipack_compiler::Compiler;

  use super::*;
  use crate::test_utils::{parse, print, with_marks};

  #[test]
  fn imports_become_require_calls() {
    let compiler = Compiler::default();
    let module = parse(
      &compiler,
      "import { x } from \"./a.js\";\nconsole.log(x);",
      false,
    );
    let output = print(
      &compiler,
      &with_marks(module, false, |m, marks| {
        to_cjs(m, &Default::default(), marks, EsVersion::EsNext)
      }),
    );
    assert!(output.contains("require(\"./a.js\")"));
    assert!(!output.contains("import "));
  }

  #[test]
  fn exports_are_written_to_exports() {
    let compiler = Compiler::default();
    let module = parse(&compiler, "export const x = 42;", false);
    let output = print(
      &compiler,
      &with_marks(module, false, |m, marks| {
        to_cjs(m, &Default::default(), marks, EsVersion::EsNext)
      }),
    );
    assert!(output.contains("exports"));
    assert!(!output.contains("export const"));
  }

  fn lower(code: &str, target: EsVersion) -> String {
    let compiler = Compiler::default();
    let module = parse(&compiler, code, false);
    print(
      &compiler,
      &with_marks(module, false, |m, marks| {
        to_cjs(m, &Default::default(), marks, target)
      }),
    )
  }

  #[test]
  fn es5_target_lowers_modern_syntax() {
    let output = lower(
      "export const f = (a, ...r) => `${a}${r.length}`;\nexport class K { #p = 1; get p() { return this.#p; } }\nlet { x, ...y } = { x: 1, z: 2 };\nexport const all = [...(y.z ? [x] : [])];",
      EsVersion::Es5,
    );
    assert!(!output.contains("=>"), "{output}");
    assert!(!output.contains("class K"), "{output}");
    assert!(!output.contains("..."), "{output}");
    assert!(!output.contains("#p"), "{output}");
    assert!(!output.contains("let "), "{output}");
  }

  #[test]
  fn helpers_are_inlined() {
    let output = lower("export class K {}", EsVersion::Es5);
    assert!(output.contains("function _class_call_check"), "{output}");
    assert!(!output.contains("@swc/helpers"), "{output}");
  }

  #[test]
  fn esnext_target_keeps_syntax() {
    let output = lower("export const f = (a, ...r) => r;", EsVersion::EsNext);
    assert!(output.contains("=>"));
    assert!(output.contains("...r"));
  }
}
