//! `kiln init`: mark a directory as a kiln project.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, instrument};

use kiln_adapters::{RC_FILE_NAME, RcFile, builtin_stubs::all_stubs};

use crate::{
    cli::InitArgs,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct InitReport {
    rc_file: PathBuf,
    stubs: Vec<PathBuf>,
}

/// Write `.kilnrc.json` (and optionally the built-in stubs) into the project.
#[instrument(skip_all, fields(project = %args.project.display()))]
pub fn execute(args: InitArgs, output: &OutputManager) -> CliResult<()> {
    if args.project.exists() && !args.project.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("'{}' is not a directory", args.project.display()),
        });
    }
    let rc_path = args.project.join(RC_FILE_NAME);

    // Bail early if the file already exists and --force was not given.
    if rc_path.exists() && !args.force {
        output.warning(&format!(
            "{} already exists (use --force to overwrite)",
            rc_path.display(),
        ))?;
        return Ok(());
    }

    let rc = RcFile::default_layout();
    fs::create_dir_all(&args.project).with_cli_context(|| {
        format!("Failed to create project directory '{}'", args.project.display())
    })?;
    fs::write(&rc_path, rc.to_json()?)
        .with_cli_context(|| format!("Failed to write '{}'", rc_path.display()))?;
    debug!(path = %rc_path.display(), "Wrote rc file");

    let stubs = match (&rc.stubs, args.with_stubs) {
        (Some(dir), true) => write_stubs(&args.project.join(dir), args.force)?,
        _ => Vec::new(),
    };

    if output.is_json() {
        return output.json(&InitReport {
            rc_file: rc_path,
            stubs,
        });
    }

    output.success(&format!("Created {}", rc_path.display()))?;
    if !stubs.is_empty() {
        output.info(&format!(
            "Copied {} stubs into {}",
            stubs.len(),
            args.project.join(rc.stubs.unwrap_or_default()).display()
        ))?;
    }
    Ok(())
}

/// Copy every built-in stub into `dir`, keeping edited copies unless `force`.
fn write_stubs(dir: &Path, force: bool) -> CliResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_cli_context(|| format!("Failed to create stub directory '{}'", dir.display()))?;

    let mut written = Vec::new();
    for (id, source) in all_stubs() {
        let path = dir.join(format!("{id}.stub"));
        if path.exists() && !force {
            debug!(path = %path.display(), "Keeping existing stub");
            continue;
        }
        fs::write(&path, source)
            .with_cli_context(|| format!("Failed to write '{}'", path.display()))?;
        written.push(path);
    }
    Ok(written)
}
