use chrono::Utc;
use clap::{Parser, Subcommand};
use deckdrop_store::{Area, ExchangeStore, DEFAULT_DATA_DIR};
use deckdrop_types::AccessCode;
use std::path::PathBuf;

/// Minimum raw length of an access code, matching the server boundary.
const MIN_CODE_LEN: usize = 3;

#[derive(Parser)]
#[command(name = "deckdrop")]
#[command(about = "DeckDrop file exchange maintenance CLI")]
struct Cli {
    /// Storage root containing the partitions
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all partitions
    List,
    /// List files in one area of a partition
    Files {
        /// Access code of the partition
        code: String,
        /// Area to list (inbound or outbound)
        #[arg(long, default_value = "inbound")]
        area: Area,
    },
    /// Remove every partition past the retention window
    Sweep,
    /// Delete the entire storage root and recreate it empty
    Wipe,
}

fn parse_code(raw: &str) -> Result<AccessCode, String> {
    if raw.chars().count() < MIN_CODE_LEN {
        return Err(format!(
            "access code too short (minimum {} characters)",
            MIN_CODE_LEN
        ));
    }
    AccessCode::new(raw).map_err(|e| e.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let store = ExchangeStore::new(&cli.data_dir)?;

    match cli.command {
        Some(Commands::List) => {
            let codes = store.partitions()?;
            if codes.is_empty() {
                println!("No partitions found.");
            } else {
                for code in codes {
                    let inbound = store.list_files(&code, Area::Inbound)?.len();
                    let outbound = store.list_files(&code, Area::Outbound)?.len();
                    println!(
                        "Code: {}, Inbound: {}, Outbound: {}",
                        code, inbound, outbound
                    );
                }
            }
        }
        Some(Commands::Files { code, area }) => match parse_code(&code) {
            Ok(code) => {
                let files = store.list_files(&code, area)?;
                if files.is_empty() {
                    println!("No files in {}/{}.", code, area);
                } else {
                    for file in files {
                        println!(
                            "Name: {}, Size: {} bytes, Modified: {}",
                            file.name, file.size_bytes, file.modified
                        );
                    }
                }
            }
            Err(e) => eprintln!("Error: {}", e),
        },
        Some(Commands::Sweep) => {
            let removed = store.sweep_expired(Utc::now())?;
            if removed.is_empty() {
                println!("Nothing to sweep.");
            } else {
                for code in removed {
                    println!("Removed expired partition: {}", code);
                }
            }
        }
        Some(Commands::Wipe) => {
            store.wipe_all()?;
            println!("Wiped all partitions under {}", store.root().display());
        }
        None => {
            println!("Use 'deckdrop --help' for commands");
        }
    }

    Ok(())
}
