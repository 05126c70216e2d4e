use crate::types::ListStyle;
use anyhow::{Result, bail};
use boxlog_core::{render_indexed_list, render_list, write_indexed};
use std::io::Write;

pub fn handle(items: &[String], style: ListStyle, before: Option<&str>) -> Result<()> {
    if before.is_some() && style == ListStyle::Lines {
        bail!("--before is not supported with --style lines");
    }

    let mut stdout = std::io::stdout().lock();
    match style {
        ListStyle::Quoted => writeln!(stdout, "{}", render_list(items, before))?,
        ListStyle::Indexed => writeln!(stdout, "{}", render_indexed_list(items, before))?,
        ListStyle::Lines => write_indexed(&mut stdout, items)?,
    }
    Ok(())
}
