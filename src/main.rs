use anyhow::{Context, Result};
use chordal::{split_tokens, Analyzer, ProgressionAnalysis, ValidatorSettings};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "chordal",
    version,
    about = "Identify chords, analyze roman numerals and check SATB voice leading"
)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Identify a single chord, e.g. `identify C3 E3 G3` or `identify C3,E3,G3`
    Identify {
        #[arg(required = true)]
        notes: Vec<String>,
    },
    /// Analyze a progression, one comma-separated chord per argument
    Analyze {
        /// Key such as C, f# or Bbm
        #[arg(short, long)]
        key: String,

        /// Also check four-part voice leading
        #[arg(short, long, default_value_t = false)]
        validate: bool,

        /// YAML file with spacing and range limits
        #[arg(short, long)]
        settings: Option<PathBuf>,

        #[arg(required = true)]
        chords: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Identify { notes } => {
            let tokens: Vec<&str> = notes.iter().flat_map(|n| split_tokens(n)).collect();
            let chord = Analyzer::default().identify_chord(&tokens)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&chord)?);
            } else {
                println!("Name:      {}", chord.name);
                println!("Slash:     {}", chord.slash_name);
                println!("Quality:   {:?}", chord.quality);
                println!("Root:      {}", chord.root_index);
                println!("Inversion: {}", chord.inversion);
            }
        }
        Command::Analyze {
            key,
            validate,
            settings,
            chords,
        } => {
            let mut analyzer = Analyzer::default();
            if let Some(path) = settings {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Error reading settings '{}'", path.display()))?;
                analyzer = analyzer.with_settings(ValidatorSettings::from_yaml(&content)?);
            }

            let groups: Vec<Vec<&str>> = chords.iter().map(|c| split_tokens(c)).collect();
            let analysis = analyzer.analyze_progression(&groups, &key, validate)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print_analysis(&analysis);
            }
        }
    }

    Ok(())
}

fn print_analysis(analysis: &ProgressionAnalysis) {
    println!("Key: {}", analysis.key);
    for (i, chord) in analysis.chords.iter().enumerate() {
        let notes: Vec<String> = chord
            .notes
            .iter()
            .zip(&chord.accidentals)
            .map(|(note, accidental)| {
                if accidental.is_empty() {
                    note.clone()
                } else {
                    format!("{} ({})", note, accidental)
                }
            })
            .collect();
        println!("{:>3}. {:<10} {:<12} {}", i + 1, chord.name, chord.numeral, notes.join(", "));
    }

    if let Some(errors) = &analysis.validation_errors {
        if errors.is_empty() {
            println!("No voice-leading errors");
        } else {
            println!("{} voice-leading error(s):", errors.len());
            for error in errors {
                println!("  [{}] {}", error.code.as_str(), error);
            }
        }
    }
}
