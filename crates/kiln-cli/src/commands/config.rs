//! `kiln config`: inspect configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(config, &key)?;
            if output.is_json() {
                output.json(&serde_json::json!({ "key": key, "value": value }))?;
            } else {
                output.print(&format!("{key} = {value}"))?;
            }
        }

        ConfigCommands::List => {
            if output.is_json() {
                return output.json(config);
            }
            output.header("Current Configuration:")?;
            let serialised = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
                message: format!("Failed to serialise config: {e}"),
                source: Some(Box::new(e)),
            })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&AppConfig::describe_path(&AppConfig::config_path()))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.to_string()),
        "generation.overwrite" => Ok(config.generation.overwrite.to_string()),
        "generation.form_ignore_list" => Ok(config
            .generation
            .form_ignore_list
            .iter()
            .map(|k| k.as_str())
            .collect::<Vec<_>>()
            .join(",")),
        _ => convention_value(config, key).ok_or_else(|| CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

/// `conventions.<kind>.<field>`, falling back to the kind's built-in value.
fn convention_value(config: &AppConfig, key: &str) -> Option<String> {
    let rest = key.strip_prefix("conventions.")?;
    let (token, field) = rest.split_once('.')?;
    let conventions = config.conventions_for(token.parse().ok()?);

    match field {
        "form" => Some(conventions.form.map(|f| f.to_string()).unwrap_or_default()),
        "pattern" => Some(
            conventions
                .pattern
                .map(|p| p.to_string())
                .unwrap_or_default(),
        ),
        "suffix" => Some(conventions.suffix.unwrap_or_default()),
        "extname" => Some(conventions.extname),
        _ => None,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_key() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "generation.form_ignore_list").unwrap(),
            "model-interface"
        );
        assert_eq!(get_config_value(&cfg, "output.format").unwrap(), "auto");
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn convention_keys_fall_back_to_kind_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "conventions.validator.suffix").unwrap(),
            "Validator"
        );
        assert_eq!(
            get_config_value(&cfg, "conventions.view.extname").unwrap(),
            ".edge"
        );
        assert!(get_config_value(&cfg, "conventions.widget.suffix").is_err());
        assert!(get_config_value(&cfg, "conventions.view.colour").is_err());
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }
}
