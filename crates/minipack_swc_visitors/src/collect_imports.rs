use swc_core::ecma::{
  ast,
  visit::{noop_visit_type, Visit, VisitWith},
};

/// Lists the source of every static import in declaration order, verbatim and
/// without deduplication.
///
/// `export ... from` forms count as imports because they load the module too.
/// Type-only declarations are skipped, they leave no trace after stripping.
pub fn collect_imports(ast: &ast::Module) -> Vec<String> {
  let mut collector = ImportCollector::default();
  ast.visit_with(&mut collector);
  collector.sources
}

#[derive(Default)]
struct ImportCollector {
  sources: Vec<String>,
}

impl ImportCollector {
  fn add_source(&mut self, src: &ast::Str) {
    self.sources.push(src.value.to_string());
  }
}

impl Visit for ImportCollector {
  noop_visit_type!();

  fn visit_module_decl(&mut self, decl: &ast::ModuleDecl) {
    match decl {
      ast::ModuleDecl::Import(import) if !import.type_only => self.add_source(&import.src),
      ast::ModuleDecl::ExportAll(export_all) => self.add_source(&export_all.src),
      ast::ModuleDecl::ExportNamed(ast::NamedExport {
        src: Some(src),
        type_only: false,
        ..
      }) => self.add_source(src),
      _ => {}
    }
  }
}
