//! Implementation of the `kiln kinds` command.

use serde::Serialize;

use kiln_core::domain::{ArtifactKind, all_kinds};

use crate::{
    cli::{KindsArgs, KindsFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// One row of `kiln kinds`: the effective conventions for a kind.
#[derive(Debug, Serialize)]
struct KindInfo {
    kind: ArtifactKind,
    namespace: &'static str,
    stub: &'static str,
    form: Option<String>,
    pattern: Option<String>,
    suffix: Option<String>,
    extname: String,
}

impl KindInfo {
    fn new(kind: ArtifactKind, config: &AppConfig) -> Self {
        let conventions = config.conventions_for(kind);
        let form = (!conventions.form_ignore_list.contains(&kind))
            .then_some(conventions.form)
            .flatten();
        Self {
            kind,
            namespace: kind.namespace(),
            stub: kind.stub(),
            form: form.map(|f| f.to_string()),
            pattern: conventions.pattern.map(|p| p.to_string()),
            suffix: conventions.suffix,
            extname: conventions.extname,
        }
    }

    fn row(&self) -> Vec<String> {
        let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".into());
        vec![
            self.kind.to_string(),
            self.namespace.to_string(),
            or_dash(&self.form),
            or_dash(&self.pattern),
            or_dash(&self.suffix),
            self.extname.clone(),
        ]
    }
}

pub fn execute(args: KindsArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let kinds: Vec<KindInfo> = all_kinds()
        .iter()
        .map(|kind| KindInfo::new(*kind, config))
        .collect();

    let format = if output.is_json() {
        KindsFormat::Json
    } else {
        args.format
    };

    match format {
        KindsFormat::Table => {
            let rows: Vec<Vec<String>> = kinds.iter().map(KindInfo::row).collect();
            output.table(
                &["KIND", "NAMESPACE", "FORM", "PATTERN", "SUFFIX", "EXT"],
                &rows,
            )?;
        }
        KindsFormat::List => {
            for info in &kinds {
                output.print(info.kind.as_str())?;
            }
        }
        KindsFormat::Json => output.json(&kinds)?,
    }

    Ok(())
}
