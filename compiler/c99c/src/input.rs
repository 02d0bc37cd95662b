//! Whole-file input: read a translation unit into a byte buffer.
//!
//! The lexer proper never touches the filesystem; this is the one place
//! the driver does I/O, and every failure path surfaces a typed error.

use thiserror::Error;

/// Why a source file could not be loaded.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("unable to open file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// Token spans and coordinates are 32-bit; a source this large cannot
    /// be addressed.
    #[error("file {path} exceeds the 4 GiB source limit")]
    TooLarge { path: String },
}

/// Read the entire file at `path` into memory.
pub fn read_source(path: &str) -> Result<Vec<u8>, InputError> {
    let bytes = std::fs::read(path).map_err(|source| InputError::Read {
        path: path.to_owned(),
        source,
    })?;
    if u32::try_from(bytes.len()).is_err() {
        return Err(InputError::TooLarge {
            path: path.to_owned(),
        });
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_path() {
        let err = read_source("/no/such/file.c").expect_err("file must not exist");
        assert!(err.to_string().contains("/no/such/file.c"));
    }
}
