use super::args::{Cli, Commands};
use super::handlers;
use anyhow::Result;
use boxlog_core::{Level, Settings};

/// Config file first, then command-line overrides.
pub fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;

    if cli.no_timestamp {
        settings.show_timestamp = false;
    }
    if let Some(padding) = cli.padding {
        settings.padding = padding;
    }
    if let Some(color) = cli.color {
        settings.color = color.into();
    }

    Ok(settings)
}

pub fn run(cli: Cli) -> Result<()> {
    let settings = resolve_settings(&cli)?;

    match cli.command {
        Commands::Warning(args) => handlers::log::handle(&settings, Level::Warning, args),
        Commands::Message(args) => handlers::log::handle(&settings, Level::Message, args),
        Commands::Info(args) => handlers::log::handle(&settings, Level::Info, args),
        Commands::Error(args) => handlers::log::handle(&settings, Level::Error, args),
        Commands::Success(args) => handlers::log::handle(&settings, Level::Success, args),
        Commands::Ongoing(args) => handlers::log::handle(&settings, Level::Ongoing, args),

        Commands::Dump {
            file,
            format,
            indent,
            before,
        } => handlers::dump::handle(file.as_deref(), format, indent, before.as_deref()),

        Commands::List {
            items,
            style,
            before,
        } => handlers::list::handle(&items, style, before.as_deref()),

        Commands::Readable { kind, value } => handlers::readable::handle(kind, &value),
    }
}
