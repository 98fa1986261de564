use anyhow::Result;
use camino::Utf8Path;

use super::{Mode, Outcome};
use crate::util;

/// Single-line TODO marker naming the last segment of `file_path`.
pub fn contents(file_path: &str) -> String {
    let basename = file_path.rsplit('/').next().unwrap_or(file_path);
    format!("// TODO: Implement {basename}\n")
}

/// Create the placeholder at `target` unless something is already there.
pub fn ensure_file(target: &Utf8Path, file_path: &str, mode: Mode) -> Result<Outcome> {
    if target.exists() {
        return Ok(Outcome::Skipped);
    }

    if mode == Mode::DryRun {
        return Ok(Outcome::WouldCreate);
    }

    if util::fs::create_new(target, &contents(file_path))? {
        Ok(Outcome::Created)
    } else {
        Ok(Outcome::Skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contents_name_the_basename() {
        assert_eq!(
            contents("core/theme/app_colors.dart"),
            "// TODO: Implement app_colors.dart\n"
        );
        assert_eq!(contents("main.dart"), "// TODO: Implement main.dart\n");
    }
}
