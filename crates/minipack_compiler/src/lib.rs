use std::path::{Path, PathBuf};

use ast::EsVersion;
use swc_core::{
  common::{comments::Comments, sync::Lrc, FileName, SourceFile, SourceMap, Spanned},
  ecma::{
    ast, codegen as swc_ecma_codegen,
    parser::{self as swc_ecma_parser, error::Error as ParseError},
  },
};
use swc_ecma_codegen::text_writer::JsWriter;
use swc_ecma_parser::{lexer::Lexer, Parser, StringInput, Syntax};

/// Owns the source map that parsing and printing of one file share.
#[derive(Default)]
pub struct Compiler {
  pub cm: Lrc<SourceMap>,
}

impl Compiler {
  pub fn create_source_file(&self, filename: PathBuf, code: String) -> Lrc<SourceFile> {
    self.cm.new_source_file(FileName::Real(filename), code)
  }

  pub fn print(
    &self,
    ast: &ast::Module,
    comments: Option<&dyn Comments>,
  ) -> anyhow::Result<String> {
    let mut output = Vec::new();

    {
      let mut emitter = swc_ecma_codegen::Emitter {
        cfg: Default::default(),
        cm: self.cm.clone(),
        comments,
        wr: JsWriter::new(self.cm.clone(), "\n", &mut output, None),
      };
      emitter.emit_module(ast)?;
    }

    String::from_utf8(output).map_err(Into::into)
  }

  /// Parses `source_file` as an ES module.
  ///
  /// Errors the parser recovered from are still reported: a file either parses
  /// cleanly or it is rejected.
  pub fn parse_with_comments(
    &self,
    source_file: &SourceFile,
    syntax: Syntax,
    comments: Option<&dyn Comments>,
  ) -> minipack_error::Result<ast::Module> {
    let lexer = Lexer::new(
      syntax,
      EsVersion::latest(),
      StringInput::from(source_file),
      comments,
    );
    let mut parser = Parser::new_from(lexer);
    let module = parser.parse_module();
    let filename = real_path(source_file);

    if let Some(err) = parser.take_errors().into_iter().next() {
      return Err(self.to_syntax_error(&filename, err));
    }
    module.map_err(|err| self.to_syntax_error(&filename, err))
  }

  fn to_syntax_error(&self, filename: &Path, err: ParseError) -> minipack_error::Error {
    let loc = self.cm.lookup_char_pos(err.span().lo);
    minipack_error::Error::source_syntax_error(
      filename,
      format!(
        "{} ({}:{})",
        err.kind().msg(),
        loc.line,
        loc.col_display + 1
      ),
    )
  }
}

fn real_path(source_file: &SourceFile) -> PathBuf {
  match &source_file.name {
    FileName::Real(path) => path.clone(),
    other => PathBuf::from(other.to_string()),
  }
}
