//! Typst rendering engine.
//!
//! Handles the low-level details of writing Typst source and its side files
//! to a temporary directory, invoking the compiler, and reading back the PDF.

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;
use tempfile::TempDir;

use super::RenderError;

const SOURCE_FILENAME: &str = "report.typ";
const OUTPUT_FILENAME: &str = "report.pdf";

/// Stateless engine for compiling Typst sources to PDF.
pub struct TypstRenderEngine;

impl TypstRenderEngine {
    /// Compile a Typst source string to PDF bytes.
    ///
    /// # Arguments
    /// * `typst_source` - The complete Typst source code string.
    /// * `side_files` - Files the source references by name (e.g. the header image).
    /// * `font_dir` - Optional extra font directory passed to `--font-path`.
    pub fn render(
        typst_source: &str,
        side_files: &[(&str, &[u8])],
        font_dir: Option<&Path>,
    ) -> Result<Vec<u8>, RenderError> {
        // Create temp directory for compilation context
        let temp_dir = tempdir().map_err(RenderError::TempDir)?;
        let typ_path = temp_dir.path().join(SOURCE_FILENAME);

        fs::write(&typ_path, typst_source).map_err(RenderError::WriteTypst)?;
        for (name, bytes) in side_files {
            fs::write(temp_dir.path().join(name), bytes).map_err(RenderError::WriteTypst)?;
        }

        compile_typst_to_pdf(&temp_dir, font_dir)
    }

    /// Whether the `typst` binary can be executed.
    pub fn is_available() -> bool {
        Command::new("typst")
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}

/// Compile the source file in `temp_dir` to PDF.
fn compile_typst_to_pdf(temp_dir: &TempDir, font_dir: Option<&Path>) -> Result<Vec<u8>, RenderError> {
    let typ_path = temp_dir.path().join(SOURCE_FILENAME);
    let output_path = temp_dir.path().join(OUTPUT_FILENAME);

    let mut command = Command::new("typst");
    command
        .arg("compile")
        .arg("--root")
        .arg(temp_dir.path());
    if let Some(dir) = font_dir {
        command.arg("--font-path").arg(dir);
    }

    let output = command
        .arg(&typ_path)
        .arg(&output_path)
        .current_dir(temp_dir.path())
        .output()
        .map_err(RenderError::TypstIo)?;

    if !output.status.success() {
        log::error!(
            "typst compile failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return Err(RenderError::TypstExit(output.status.code().unwrap_or(-1)));
    }

    fs::read(&output_path).map_err(RenderError::ReadPdf)
}
