//! Command dispatch

use std::io::{self, Write};
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::example_division;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings, DEFAULT_ORDER};
use crate::domain::{OsVariant, Phone, PowerAction};
use crate::infrastructure::{ConsoleNotifier, InfraError, InfraResult, ServiceContainer};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let stdout = io::stdout();
    execute_command_to(cli, &mut stdout.lock())
}

/// Run `cli` writing everything meant for the user to `out`.
///
/// Settings are only loaded for commands that use them, so `config path`,
/// `config template` and `completion` work with a broken config file.
pub fn execute_command_to(cli: &Cli, out: &mut dyn Write) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, see `patternbook --help`".to_string(),
        ));
    };

    match command {
        Commands::Completion { shell } => cmd_completion(*shell, out),
        Commands::Config {
            command: ConfigCommands::Path,
        } => cmd_config_path(out),
        Commands::Config {
            command: ConfigCommands::Template,
        } => Ok(write_out(out, &Settings::template())?),
        _ => {
            let container = ServiceContainer::new(Settings::load()?);
            run_command(command, &container, out)
        }
    }
}

/// Run `command` against already wired services.
pub fn run_command(command: &Commands, container: &ServiceContainer, out: &mut dyn Write) -> CliResult<()> {
    match command {
        Commands::Phone { os, actions } => cmd_phone(container, *os, actions, out),
        Commands::Brief { order, file } => cmd_brief(container, order.as_deref(), file.clone(), out),
        Commands::Tree { file } => cmd_tree(container, file.clone(), out),
        Commands::Demo => cmd_demo(container, out),
        Commands::Config { command } => cmd_config(container, command, out),
        Commands::Completion { shell } => cmd_completion(*shell, out),
    }
}

#[instrument(skip(container, out))]
fn cmd_phone(
    container: &ServiceContainer,
    os: Option<OsVariant>,
    actions: &[PowerAction],
    out: &mut dyn Write,
) -> CliResult<()> {
    let variant = match os {
        Some(variant) => variant,
        None => container.settings.os_variant()?,
    };
    output::action(out, "os", &variant).map_err(stdout_err)?;

    let phone = {
        let mut sink = ConsoleNotifier::new(&mut *out);
        container.device_service.run(variant, actions, &mut sink)
    };
    output::action(out, "power", &phone.power_state()).map_err(stdout_err)?;
    Ok(())
}

#[instrument(skip(container, out))]
fn cmd_brief(
    container: &ServiceContainer,
    order: Option<&str>,
    file: Option<PathBuf>,
    out: &mut dyn Write,
) -> CliResult<()> {
    let path = file.or_else(|| container.settings.hierarchy.clone());
    let root = container.org_service.load(path.as_deref())?;
    let order = order.unwrap_or(container.settings.order.as_str());

    let mut sink = ConsoleNotifier::new(out);
    let report = container.org_service.brief(&root, order, &mut sink);
    debug!(?report, "brief done");
    Ok(())
}

#[instrument(skip(container, out))]
fn cmd_tree(container: &ServiceContainer, file: Option<PathBuf>, out: &mut dyn Write) -> CliResult<()> {
    let path = file.or_else(|| container.settings.hierarchy.clone());
    let root = container.org_service.load(path.as_deref())?;
    let tree = container.org_service.render(&root);
    Ok(write_out(out, &tree.to_string())?)
}

#[instrument(skip(container, out))]
fn cmd_demo(container: &ServiceContainer, out: &mut dyn Write) -> CliResult<()> {
    output::header(out, "Factory method: phones").map_err(stdout_err)?;
    for variant in OsVariant::ALL {
        output::action(out, "os", &variant).map_err(stdout_err)?;
        let mut sink = ConsoleNotifier::new(&mut *out);
        container.device_service.run(
            variant,
            &[PowerAction::On, PowerAction::On, PowerAction::Off, PowerAction::Off],
            &mut sink,
        );
    }

    output::header(out, "Composite: briefing the 1st Division").map_err(stdout_err)?;
    let mut sink = ConsoleNotifier::new(out);
    container
        .org_service
        .brief(&example_division(), DEFAULT_ORDER, &mut sink);
    Ok(())
}

fn cmd_config(container: &ServiceContainer, command: &ConfigCommands, out: &mut dyn Write) -> CliResult<()> {
    match command {
        ConfigCommands::Show => Ok(write_out(out, &container.settings.to_toml()?)?),
        ConfigCommands::Path => cmd_config_path(out),
        ConfigCommands::Template => Ok(write_out(out, &Settings::template())?),
    }
}

fn cmd_config_path(out: &mut dyn Write) -> CliResult<()> {
    let path = global_config_path().ok_or(InfraError::NoConfigDir)?;
    Ok(write_out(out, &format!("{}\n", path.display()))?)
}

fn cmd_completion(shell: Shell, out: &mut dyn Write) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
    Ok(())
}

fn write_out(out: &mut dyn Write, text: &str) -> InfraResult<()> {
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .map_err(stdout_err)
}

fn stdout_err(source: io::Error) -> InfraError {
    InfraError::output("stdout", source)
}
