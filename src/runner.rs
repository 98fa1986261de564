use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use camino::Utf8PathBuf;

use crate::cli::{Cli, Command};
use crate::layout::LayoutSpec;
use crate::scaffold::{self, Mode};

pub fn run(cli: Cli) -> Result<()> {
    let ctx = CliContext::from(&cli);
    ctx.apply_chdir()?;

    let layout = LayoutSpec::workout_app();
    match cli.command.unwrap_or(Command::Create) {
        Command::Create => handle_create(&ctx, &layout),
        Command::List => {
            scaffold::list(&layout);
            Ok(())
        }
    }
}

fn handle_create(ctx: &CliContext, layout: &LayoutSpec) -> Result<()> {
    let base = current_base()?;
    tracing::debug!(base = %base, entries = layout.len(), "generating structure");

    let report = match ctx.mode() {
        Mode::Write => scaffold::ensure_structure(&base, layout)?,
        mode => scaffold::ensure_structure_with(&base, layout, mode)?,
    };
    println!("{report}");
    Ok(())
}

fn current_base() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir().context("determining current directory")?;
    Utf8PathBuf::from_path_buf(cwd).map_err(|_| anyhow!("base path must be valid UTF-8"))
}

struct CliContext {
    chdir: Option<PathBuf>,
    dry_run: bool,
}

impl CliContext {
    fn apply_chdir(&self) -> Result<()> {
        if let Some(path) = &self.chdir {
            std::env::set_current_dir(path)
                .with_context(|| format!("changing directory to {}", path.display()))?;
        }
        Ok(())
    }

    fn mode(&self) -> Mode {
        if self.dry_run {
            Mode::DryRun
        } else {
            Mode::Write
        }
    }
}

impl From<&Cli> for CliContext {
    fn from(cli: &Cli) -> Self {
        Self {
            chdir: cli.chdir.clone(),
            dry_run: cli.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn dry_run_flag_selects_mode() {
        let cli = Cli::try_parse_from(["workout-scaffold", "--dry-run"]).unwrap();
        assert_eq!(CliContext::from(&cli).mode(), Mode::DryRun);

        let cli = Cli::try_parse_from(["workout-scaffold"]).unwrap();
        assert_eq!(CliContext::from(&cli).mode(), Mode::Write);
    }

    #[test]
    fn missing_chdir_target_is_an_error() {
        let ctx = CliContext {
            chdir: Some(PathBuf::from("/definitely/not/here/workout-scaffold")),
            dry_run: false,
        };
        let err = ctx.apply_chdir().unwrap_err();
        assert!(err.to_string().contains("changing directory to"));
    }
}
