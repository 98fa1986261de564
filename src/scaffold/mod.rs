pub mod placeholder;

use std::fmt;

use anyhow::{Result, bail};
use camino::{Utf8Path, Utf8PathBuf};

use crate::layout::LayoutSpec;
use crate::util;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Mode {
    #[default]
    Write,
    DryRun,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Created,
    Skipped,
    WouldCreate,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Created => "created",
            Outcome::Skipped => "skipped (exists)",
            Outcome::WouldCreate => "would create",
        }
    }
}

/// What happened to each declared file, in layout order.
#[derive(Debug, Default)]
pub struct Report {
    pub entries: Vec<(Utf8PathBuf, Outcome)>,
}

impl Report {
    pub fn count(&self, outcome: Outcome) -> usize {
        self.entries.iter().filter(|(_, o)| *o == outcome).count()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pending = self.count(Outcome::WouldCreate);
        write!(
            f,
            "{} created, {} skipped",
            self.count(Outcome::Created),
            self.count(Outcome::Skipped)
        )?;
        if pending > 0 {
            write!(f, ", {} would be created", pending)?;
        }
        Ok(())
    }
}

/// Create every directory and placeholder file in `layout` under `base`.
/// Existing files are never rewritten.
pub fn ensure_structure(base: &Utf8Path, layout: &LayoutSpec) -> Result<Report> {
    ensure_structure_with(base, layout, Mode::Write)
}

pub fn ensure_structure_with(base: &Utf8Path, layout: &LayoutSpec, mode: Mode) -> Result<Report> {
    let mut report = Report::default();

    for (folder, file_path) in layout.entries() {
        let target = base.join(folder).join(file_path);
        let Some(parent) = target.parent() else {
            bail!("layout entry {} has no parent directory", target);
        };

        if mode == Mode::Write && util::fs::ensure_dir(parent)? {
            tracing::debug!(dir = %parent, "created directory");
        }

        let outcome = placeholder::ensure_file(&target, file_path, mode)?;
        println!("  {} {}", outcome.as_str(), target);
        report.entries.push((target, outcome));
    }

    Ok(report)
}

/// Print the layout as `folder/file` lines without touching the filesystem.
pub fn list(layout: &LayoutSpec) {
    for (folder, file_path) in layout.entries() {
        println!("{}", Utf8Path::new(folder).join(file_path));
    }
}
