pub mod dump;
pub mod list;
pub mod log;
pub mod readable;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Whole input from `path`, or stdin when the path is absent or `-`.
pub(crate) fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
