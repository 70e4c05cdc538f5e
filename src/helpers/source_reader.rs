use std::io::{self, Read};
use std::path::Path;
use crate::errors::{ExplainerError, ExplainerResult};

pub async fn read_file(path: &Path) -> ExplainerResult<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ExplainerError::file_error(&path.display().to_string(), "read", &e.to_string()))
}

/// Reads the whole of stdin, e.g. `cat main.py | code-explainer analyze`.
pub fn read_stdin() -> ExplainerResult<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| ExplainerError::file_error("<stdin>", "read", &e.to_string()))?;
    Ok(buffer)
}

pub async fn read_source(path: Option<&Path>) -> ExplainerResult<String> {
    match path {
        Some(path) => read_file(path).await,
        None => {
            log::info!("📥 Reading code from stdin (end with Ctrl-D)...");
            read_stdin()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;
    use std::io::Write;

    #[tokio::test]
    async fn reads_file_contents_verbatim() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "fn main() {{}}").unwrap();

        assert_eq!(read_source(Some(file.path())).await.unwrap(), "fn main() {}\n");
    }

    #[tokio::test]
    async fn missing_file_is_a_file_operation_error() {
        let result = read_file(Path::new("/definitely/not/here.py")).await;
        assert!(matches!(result, Err(ExplainerError::FileOperationError { .. })));
    }
}
