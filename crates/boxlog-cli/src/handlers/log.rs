use crate::args::LogArgs;
use anyhow::Result;
use boxlog_core::{Level, Settings};
use std::path::Path;

pub fn handle(settings: &Settings, level: Level, args: LogArgs) -> Result<()> {
    let message = if args.message == "-" {
        let input = super::read_input(Some(Path::new("-")))?;
        input.trim_end_matches(['\n', '\r']).to_string()
    } else {
        args.message
    };

    let logger = settings.logger();
    let mut stdout = std::io::stdout().lock();
    logger.write_to(&mut stdout, level, &message, args.tag.as_deref())?;
    Ok(())
}
