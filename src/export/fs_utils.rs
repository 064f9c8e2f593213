use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Refuse to overwrite an existing output file unless forced.
pub fn check_overwrite(path: &str, force: bool) -> AppResult<()> {
    if Path::new(path).exists() && !force {
        return Err(AppError::Export(format!(
            "file '{path}' already exists (use --force to overwrite)"
        )));
    }
    Ok(())
}
