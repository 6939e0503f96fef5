//! Version command implementation.

use crate::cli::Cli;
use crate::error::Result;
use crate::{NAME, VERSION};

/// Run the version command.
pub fn run(cli: &Cli) -> Result<()> {
    if cli.json {
        let json = serde_json::json!({ "name": NAME, "version": VERSION });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{NAME} {VERSION}");
    }
    Ok(())
}
