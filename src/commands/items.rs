//! `ranq items` command - print the item collection

use crate::cli::{Cli, OutputFormat};
use ranq_core::error::Result;
use ranq_core::item::Item;
use ranq_core::records::escape_quotes;

/// Execute the items command
pub fn execute(cli: &Cli, items: &[Item]) -> Result<()> {
    match cli.format {
        OutputFormat::Human => {
            for item in items {
                println!("{} {}", item.id, item.name);
                if cli.verbose {
                    println!("    {}", item.text);
                    if !item.tags.is_empty() {
                        println!("    tags: {}", item.tags.join(", "));
                    }
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(items)?);
        }
        OutputFormat::Records => {
            for item in items {
                println!(
                    "I {} name=\"{}\" tags={}",
                    item.id,
                    escape_quotes(&item.name),
                    item.tags.join(",")
                );
            }
        }
    }
    Ok(())
}
