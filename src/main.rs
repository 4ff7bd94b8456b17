use clap::{Parser, Subcommand};

mod dict;
mod tactics;
mod update;

pub type Result<T> = anyhow::Result<T>;

/// Where the site keeps the dictionary, relative to the repo root.
const DEFAULT_DICTIONARY_PATH: &str = "public/data/glyph-dictionary.json";

#[derive(Parser)]
#[command(name = "glyph-dict-tool")]
#[command(about = "Re(s)etario glyph dictionary maintenance tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite every combination record to carry a tactic field.
    Update {
        #[arg(long, default_value = DEFAULT_DICTIONARY_PATH)]
        file: String,
    },
    /// Report structural problems without modifying the file.
    Check {
        #[arg(long, default_value = DEFAULT_DICTIONARY_PATH)]
        file: String,
    },
    /// List the planned tactic assignments for the first glyphs.
    Tactics,
}

fn main() {
    let cli = Cli::parse();

    // Every failure comes out as one line on stdout; the exit status stays
    // zero either way.
    if let Err(err) = run(cli) {
        println!("Error: {err:#}");
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.cmd {
        Commands::Update { file } => {
            // 1) Load the whole document.
            let mut doc = dict::load_dictionary(&file)?;

            // 2) Rebuild every combination record in place.
            let summary = update::insert_tactic_fields(&mut doc)?;

            // 3) Overwrite the file.
            dict::save_dictionary(&file, &doc)?;
            println!(
                "Updated {}: {} combination(s) across {} glyph(s) now carry a tactic field.",
                file, summary.combinations, summary.glyphs
            );
        }
        Commands::Check { file } => {
            let doc = dict::load_dictionary(&file)?;
            let report = dict::check_dictionary(&doc);
            for finding in &report.findings {
                println!("{finding}");
            }
            println!(
                "Checked {}: {} glyph(s), {} combination(s), {} finding(s).",
                file,
                report.glyphs,
                report.combinations,
                report.findings.len()
            );
        }
        Commands::Tactics => {
            for (id, name) in tactics::PLANNED_TACTICS {
                println!("{id:>2}  {name}");
            }
        }
    }

    Ok(())
}
