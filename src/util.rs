/// Filesystem helpers shared by the generator.
pub mod fs {
    use std::fs::{self, OpenOptions};
    use std::io::{self, Write};

    use anyhow::{Context, Result};
    use camino::Utf8Path;

    /// Ensure a directory exists, creating it recursively if needed.
    /// Returns `true` when something had to be created.
    pub fn ensure_dir(path: &Utf8Path) -> Result<bool> {
        if path.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(path).with_context(|| format!("creating directory {}", path))?;
        Ok(true)
    }

    /// Write `contents` to a file that must not exist yet.
    /// Returns `false` without touching the file when it is already there.
    pub fn create_new(path: &Utf8Path, contents: &str) -> Result<bool> {
        let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
            Err(err) => return Err(err).with_context(|| format!("creating {}", path)),
        };
        file.write_all(contents.as_bytes())
            .with_context(|| format!("writing {}", path))?;
        Ok(true)
    }

}
