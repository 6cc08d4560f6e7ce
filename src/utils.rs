use std::path::Path;

use encoding_rs::WINDOWS_1252;

use crate::error::{CheckError, Result};

/// Read a whole file as text. Tries UTF-8 first and falls back to
/// Windows-1252 so that legacy files still get a best-effort comparison.
pub async fn read_text(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| CheckError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) => {
            let (decoded, _, _) = WINDOWS_1252.decode(err.as_bytes());
            decoded.into_owned()
        }
    })
}
