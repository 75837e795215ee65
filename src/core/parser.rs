use anyhow::{Result, anyhow};
use swc_common::{FileName, SourceMap};
use swc_ecma_ast::Program;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

pub struct ParsedSource {
    pub program: Program,
    pub source_map: SourceMap,
    pub source: String,
}

/// Parse TSX/JSX source code string into an AST.
///
/// Parses as a program rather than a module so that plain scripts (no
/// import/export) are accepted alongside ES modules.
pub fn parse_tsx_source(code: String, file_path: &str) -> Result<ParsedSource> {
    let source_map = SourceMap::default();
    let source_file =
        source_map.new_source_file(FileName::Real(file_path.into()).into(), code.clone());

    let syntax = Syntax::Typescript(TsSyntax {
        tsx: true,
        ..Default::default()
    });
    let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
    let program = parser
        .parse_program()
        .map_err(|e| anyhow!("Failed to parse tsx string: {:?}", e))?;
    Ok(ParsedSource {
        program,
        source_map,
        source: code,
    })
}
