use std::path::PathBuf;

use crate::cli::context::ShellContext;
use crate::cli::output;
use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::errors::{CommandError, CommandResult};
use crate::http::{HttpMethod, HttpRequest};
use crate::utils::build_info;

pub fn register_all(registry: &mut CommandRegistry) {
    registry.register(CommandEntry::new(
        "get",
        "Send a GET request",
        "get <path>",
        cmd_get,
    ));
    registry.register(
        CommandEntry::new(
            "post",
            "Send a POST request with a JSON body",
            "post <path> <json>   (json taken as typed, e.g. {\"name\":\"food\",\"parentID\":\"\"})",
            cmd_post,
        )
        .with_body(),
    );
    registry.register(
        CommandEntry::new(
            "patch",
            "Send a PATCH request with a JSON body",
            "patch <path> <json>   (json taken as typed, e.g. {\"name\":\"groceries\"})",
            cmd_patch,
        )
        .with_body(),
    );
    registry.register(CommandEntry::new(
        "delete",
        "Send a DELETE request",
        "delete <path>",
        cmd_delete,
    ));
    registry.register(CommandEntry::new(
        "load",
        "Replace the catalogue with a JSON snapshot",
        "load <file>",
        cmd_load,
    ));
    registry.register(CommandEntry::new(
        "export",
        "Write the catalogue to a JSON snapshot",
        "export <file>",
        cmd_export,
    ));
    registry.register(CommandEntry::new(
        "config",
        "Show or change console settings",
        "config [set <key> <value>]",
        cmd_config,
    ));
    registry.register(CommandEntry::new(
        "version",
        "Show build information",
        "version",
        cmd_version,
    ));
    registry.register(CommandEntry::new(
        "help",
        "List commands or show usage for one",
        "help [command]",
        cmd_help,
    ));
    registry.register(CommandEntry::new(
        "exit",
        "Leave the console",
        "exit",
        cmd_exit,
    ));
}

fn cmd_get(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    send(context, HttpMethod::Get, args, false)
}

fn cmd_post(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    send(context, HttpMethod::Post, args, true)
}

fn cmd_patch(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    send(context, HttpMethod::Patch, args, true)
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    send(context, HttpMethod::Delete, args, false)
}

/// Builds a request from `<path> [body]`. Body commands receive the rest of
/// the line untouched, so JSON keeps its double quotes and spaces.
fn send(context: &ShellContext, method: HttpMethod, args: &[&str], with_body: bool) -> CommandResult {
    let Some((path, rest)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(format!(
            "usage: {} <path>{}",
            method.as_str().to_ascii_lowercase(),
            if with_body { " <json>" } else { "" }
        )));
    };
    let body = match (with_body, rest) {
        (_, []) => "",
        (true, [body]) => *body,
        (false, _) => {
            return Err(CommandError::InvalidArguments(format!(
                "{} requests do not take a body",
                method
            )))
        }
        (true, _) => {
            return Err(CommandError::InvalidArguments(
                "expected a single JSON body".to_string(),
            ))
        }
    };

    let request = HttpRequest::new(method, *path, body.as_bytes().to_vec());
    let response = context.server.handle(&request);
    output::response(&response);
    Ok(())
}

fn cmd_load(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let path = single_path(args, "load <file>")?;
    let total = context.load_snapshot(&path)?;
    output::success(format!("Loaded {} records from {}", total, path.display()));
    Ok(())
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let path = single_path(args, "export <file>")?;
    context.export_snapshot(&path)?;
    output::success(format!("Snapshot written to {}", path.display()));
    Ok(())
}

fn single_path(args: &[&str], usage: &str) -> Result<PathBuf, CommandError> {
    match args {
        [path] => Ok(PathBuf::from(path)),
        _ => Err(CommandError::InvalidArguments(format!("usage: {usage}"))),
    }
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            let config = &context.config;
            output::section("Configuration");
            output::info(format!("file: {}", context.config_manager.config_path().display()));
            output::info(format!("log_filter: {}", config.log_filter));
            output::info(format!("ui_color_enabled: {}", config.ui_color_enabled));
            output::info(format!("plain_output: {}", config.plain_output));
            output::info(format!(
                "seed_path: {}",
                config
                    .seed_path
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|| "(none)".to_string())
            ));
            Ok(())
        }
        ["set", key, value] => {
            apply_setting(&mut context.config, key, value)?;
            context.config_manager.save(&context.config)?;
            context.apply_output_preferences();
            output::success(format!("{} updated", key));
            if *key == "log_filter" {
                output::hint("The new log filter applies from the next start.");
            }
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: config [set <key> <value>]".to_string(),
        )),
    }
}

fn apply_setting(
    config: &mut spendcat_config::Config,
    key: &str,
    value: &str,
) -> Result<(), CommandError> {
    match key {
        "log_filter" => config.log_filter = value.to_string(),
        "ui_color_enabled" => config.ui_color_enabled = parse_bool(key, value)?,
        "plain_output" => config.plain_output = parse_bool(key, value)?,
        "seed_path" => {
            config.seed_path = match value {
                "" | "none" => None,
                path => Some(PathBuf::from(path)),
            }
        }
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown setting `{other}`"
            )))
        }
    }
    Ok(())
}

fn parse_bool(key: &str, value: &str) -> Result<bool, CommandError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(CommandError::InvalidArguments(format!(
            "`{key}` expects true or false, got `{value}`"
        ))),
    }
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    for line in build_info::current().report() {
        output::info(line);
    }
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        let entry = context
            .registry()
            .get(&name.to_ascii_lowercase())
            .ok_or_else(|| CommandError::InvalidArguments(format!("unknown command `{name}`")))?;
        output::info(format!("{}: {}", entry.name, entry.description));
        output::info(format!("usage: {}", entry.usage));
        return Ok(());
    }

    output::section("Commands");
    for entry in context.registry().list() {
        output::info(format!("{:<8} {}", entry.name, entry.description));
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_parse_booleans_and_paths() {
        let mut config = spendcat_config::Config::default();

        apply_setting(&mut config, "plain_output", "on").expect("plain");
        apply_setting(&mut config, "seed_path", "/tmp/seed.json").expect("seed");

        assert!(config.plain_output);
        assert_eq!(config.seed_path, Some(PathBuf::from("/tmp/seed.json")));
        assert!(apply_setting(&mut config, "ui_color_enabled", "maybe").is_err());
        assert!(apply_setting(&mut config, "colour", "true").is_err());
    }

    #[test]
    fn every_command_is_registered() {
        let mut registry = CommandRegistry::new();
        register_all(&mut registry);

        let names: Vec<_> = registry.names().collect();
        assert_eq!(
            names,
            ["get", "post", "patch", "delete", "load", "export", "config", "version", "help", "exit"]
        );
        assert_eq!(registry.suggest("pots", 3), Some("post"));
        assert!(registry.takes_body("post") && registry.takes_body("patch"));
        assert!(!registry.takes_body("get") && !registry.takes_body("missing"));
        assert_eq!(registry.suggest("zzzzzzzz", 3), None);
    }
}
