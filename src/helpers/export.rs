use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::EXPORT_FILE_PREFIX;
use crate::enums::analysis_mode::AnalysisMode;
use crate::errors::{ExplainerError, ExplainerResult};

pub fn export_file_name(mode: AnalysisMode) -> String {
    format!("{}{}.md", EXPORT_FILE_PREFIX, mode.slug())
}

/// Writes the result as markdown into `dir`, creating the directory if needed.
/// An existing export for the same mode is overwritten.
pub fn write_markdown(dir: &Path, mode: AnalysisMode, content: &str) -> ExplainerResult<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| {
        ExplainerError::file_error(&dir.display().to_string(), "create directory", &e.to_string())
    })?;

    let path = dir.join(export_file_name(mode));
    fs::write(&path, content).map_err(|e| {
        ExplainerError::file_error(&path.display().to_string(), "write", &e.to_string())
    })?;

    log::debug!("Exported {} bytes to {}", content.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_names_use_mode_slug() {
        assert_eq!(export_file_name(AnalysisMode::Explain), "code_analysis_explain_code.md");
        assert_eq!(export_file_name(AnalysisMode::AskQuestion), "code_analysis_ask_question.md");
        assert_eq!(export_file_name(AnalysisMode::Optimize), "code_analysis_optimize_code.md");
    }

    #[test]
    fn writes_into_nested_directory() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("reports").join("today");

        let path = write_markdown(&target, AnalysisMode::Debug, "## Bugs\nNone").unwrap();

        assert_eq!(path, target.join("code_analysis_debug_code.md"));
        assert_eq!(fs::read_to_string(path).unwrap(), "## Bugs\nNone");
    }
}
