use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use ap_scaffold::{layout, scaffold};

/// Create the ap/ analysis project skeleton in the current directory.
///
/// Takes no arguments: the layout is fixed. Safe to re-run - existing
/// directories and files are left untouched.
#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Create the ap/ analysis project skeleton", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    scaffold::execute()?;

    for dir in layout::DIRECTORIES {
        println!("  ✓ {}/{dir}", layout::BASE_DIR);
    }
    println!(
        "  ✓ {} package marker(s), {} placeholder file(s)",
        layout::PACKAGE_DIRS.len(),
        layout::FILES.len()
    );
    println!(
        "\n✨ Project skeleton '{}' {}",
        layout::BASE_DIR,
        "created successfully!".green()
    );

    Ok(())
}
