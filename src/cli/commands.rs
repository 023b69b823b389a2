//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use clangprint_core::lang::dialect::Dialect;

use crate::header::HeaderAssembler;
use crate::model::DetachedModel;
use crate::model::manifest::ManifestModel;
use crate::printer::{CodeWriter, PrintContext, PrinterConfig, SyntaxPrinter};

use super::{CliError, CliResult, ExitCode};

/// Print each name, sanitized for `dialect`, on its own line.
pub fn print_identifiers(names: &[String], dialect: Dialect) -> CliResult<ExitCode> {
    emit(&render_identifiers(names, dialect))
}

/// Load a manifest and write the assembled header to `output` (stdout when `None`).
pub fn emit_header(manifest: &Path, output: Option<&Path>, dialect: Dialect) -> CliResult<ExitCode> {
    let model = ManifestModel::load(manifest).map_err(CliError::from_diagnostic)?;
    let header = HeaderAssembler::new(&model, PrinterConfig::new().with_dialect(dialect)).assemble();

    match output {
        Some(path) => {
            fs::write(path, header)
                .map_err(|e| CliError::failure(format!("Error writing {}: {}", path.display(), e)))?;
            tracing::info!(path = %path.display(), "header written");
            Ok(ExitCode::SUCCESS)
        }
        None => emit(&header),
    }
}

/// Print the include cascade for `header`.
pub fn print_shim_include(header: &str) -> CliResult<ExitCode> {
    if header.is_empty() {
        return Err(CliError::failure("Error: header name must not be empty"));
    }
    let ctx = PrintContext::new(PrinterConfig::default(), &DetachedModel);
    let mut out = CodeWriter::new();
    SyntaxPrinter::new(&mut out, &ctx).print_include_for_shim_header(header);
    emit(&out.finish())
}

fn render_identifiers(names: &[String], dialect: Dialect) -> String {
    let ctx = PrintContext::new(PrinterConfig::new().with_dialect(dialect), &DetachedModel);
    let mut out = CodeWriter::new();
    let mut printer = SyntaxPrinter::new(&mut out, &ctx);
    for name in names {
        printer.print_identifier(name);
        printer.write("\n");
    }
    out.finish()
}

fn emit(text: &str) -> CliResult<ExitCode> {
    io::stdout()
        .lock()
        .write_all(text.as_bytes())
        .map_err(|e| CliError::failure(format!("Error writing output: {}", e)))?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clangprint_core::lang::dialect::CStandard;

    #[test]
    fn test_render_identifiers() {
        let names = vec!["class".to_string(), "widget".to_string(), "restrict".to_string()];
        assert_eq!(render_identifiers(&names, Dialect::Clang), "class_\nwidget\nrestrict_\n");
    }

    #[test]
    fn test_render_identifiers_for_c() {
        let names = vec!["class".to_string(), "restrict".to_string()];
        assert_eq!(render_identifiers(&names, Dialect::C(CStandard::C99)), "class\nrestrict_\n");
    }

    #[test]
    fn test_emit_header_reports_missing_manifest() {
        let err = emit_header(Path::new("/nonexistent/manifest.json"), None, Dialect::Clang).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("failed to read manifest"));
    }

    #[test]
    fn test_shim_include_rejects_empty_header() {
        assert!(print_shim_include("").is_err());
    }
}
