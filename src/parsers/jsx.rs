use anyhow::{Result, anyhow};
use swc_common::{FileName, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

pub struct ParsedJsx {
    pub module: Module,
    pub source_map: SourceMap,
    pub source: String,
}

/// Parse JSX/TSX source code string into an AST.
///
/// This is the consumed side of the transform: the engine itself never
/// parses, it operates on the module this function (or any equivalent
/// caller-owned parser) produces. Comments are not collected; the transform
/// does not read them, and leaving them out keeps the parsed result `Send`
/// for the parallel pipeline.
pub fn parse_jsx_source(code: String, file_path: &str) -> Result<ParsedJsx> {
    let source_map = SourceMap::default();
    let source_file =
        source_map.new_source_file(FileName::Real(file_path.into()).into(), code.clone());

    let syntax = Syntax::Typescript(TsSyntax {
        tsx: true,
        ..Default::default()
    });
    let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
    let module = parser
        .parse_module()
        .map_err(|e| anyhow!("Failed to parse tsx string: {:?}", e))?;
    Ok(ParsedJsx {
        module,
        source_map,
        source: code,
    })
}
