use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "addressbook")]
#[command(about = "Assistant bot - contacts, phone numbers and birthdays", long_about = None)]
#[command(version)]
struct Cli {
    /// Data file path
    #[arg(short, long, env = "ADDRESSBOOK_FILE", default_value = "addressbook.db")]
    file: PathBuf,

    /// Write the stored contacts to a JSON file and exit
    #[arg(long, value_name = "JSON_PATH", conflicts_with = "import")]
    export: Option<PathBuf>,

    /// Merge contacts from a JSON file into the data file and exit
    #[arg(long, value_name = "JSON_PATH")]
    import: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(json_path) = cli.export {
        let result = addressbook::db::load_book(&cli.file)
            .and_then(|book| addressbook::transfer::export_json(&book, &json_path).map(|_| book.len()));
        match result {
            Ok(count) => println!("Exported {} contact(s) to {}", count, json_path.display()),
            Err(e) => {
                eprintln!("Export failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Some(json_path) = cli.import {
        println!("Importing from {}...", json_path.display());
        let result = addressbook::db::load_book(&cli.file).and_then(|mut book| {
            let stats = addressbook::transfer::import_json(&mut book, &json_path)?;
            addressbook::db::save_book(&cli.file, &book)?;
            Ok(stats)
        });
        match result {
            Ok(stats) => {
                println!("Import complete!");
                println!("  Added: {}", stats.added);
                println!("  Replaced: {}", stats.replaced);
            }
            Err(e) => {
                eprintln!("Import failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if let Err(e) = addressbook::cli::run(&cli.file) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
