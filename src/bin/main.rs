use akshara_core::config::OutputFormat;
use akshara_core::ocr::{OcrEngine, TesseractCli};
use akshara_core::persistence::{load_from_disk, save_to_disk};
use akshara_core::report::{characters_column, counts_column, formatter_for};
use akshara_core::{extract_and_analyze, AnalysisEngine, AnalysisReport, Config};
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::style::Stylize;
use crossterm::tty::IsTty;
use log::info;
use std::error::Error;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "akshara")]
#[command(about = "Telugu OCR text: akshara segmentation and frequency tables")]
struct Args {
    /// JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the tesseract executable
    #[arg(long)]
    tesseract: Option<PathBuf>,

    /// Directory holding tel.traineddata
    #[arg(long)]
    tessdata_dir: Option<PathBuf>,

    /// Output format for the tables
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the text recognized in an image
    Ocr { image: PathBuf },

    /// Analyze text from a file, stdin, or an image
    Analyze {
        /// Text file; stdin when absent or "-"
        input: Option<PathBuf>,

        /// Recognize this image instead of reading text
        #[arg(long, conflicts_with = "input")]
        image: Option<PathBuf>,

        /// Print only one column of the character table
        #[arg(long, value_enum)]
        column: Option<Column>,

        /// Also save a snapshot of the text and report
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Print the tables stored in a snapshot
    Show { snapshot: PathBuf },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Tsv,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Tsv => OutputFormat::Tsv,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Column {
    Characters,
    Counts,
}

fn load_config(args: &Args) -> Result<Config, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(bin) = &args.tesseract {
        config.tesseract_bin = bin.clone();
    }
    if let Some(dir) = &args.tessdata_dir {
        config.tessdata_dir = Some(dir.clone());
    }
    if let Some(format) = args.format {
        config.format = format.into();
    }
    Ok(config)
}

fn read_text(input: Option<&Path>) -> io::Result<String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path),
        _ => io::read_to_string(io::stdin()),
    }
}

fn heading(out: &mut impl Write, title: &str, styled: bool) -> io::Result<()> {
    if styled {
        writeln!(out, "{}", format!("### {}", title).bold().cyan())
    } else {
        writeln!(out, "### {}", title)
    }
}

fn print_report(report: &AnalysisReport, config: &Config) -> Result<(), Box<dyn Error>> {
    let formatter = formatter_for(config.format);
    let mut stdout = io::stdout();
    let styled = config.format == OutputFormat::Tsv && stdout.is_tty();

    let tables = [
        ("Telugu character frequency", formatter.character_table(report)?),
        ("Words", formatter.word_table(report)?),
        ("Categories", formatter.category_table(report)?),
    ];
    for (title, body) in tables {
        if config.format == OutputFormat::Tsv {
            heading(&mut stdout, title, styled)?;
        }
        writeln!(stdout, "{}\n", body)?;
    }
    stdout.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();
    let config = load_config(&args)?;

    match &args.command {
        Command::Ocr { image } => {
            let ocr = TesseractCli::new(&config);
            println!("{}", ocr.recognize_file(image)?);
        }
        Command::Analyze { input, image, column, save } => {
            let (text, report) = match image {
                Some(path) => {
                    let ocr = TesseractCli::new(&config);
                    let bytes = fs::read(path)?;
                    extract_and_analyze(&ocr, &bytes, |recognized| recognized)?
                }
                None => {
                    let text = read_text(input.as_deref())?;
                    let report = AnalysisEngine::new().analyze(&text);
                    (text, report)
                }
            };

            if let Some(path) = save {
                save_to_disk(&text, &report, path)?;
                info!("snapshot written to {:?}", path);
            }

            match column {
                Some(Column::Characters) => println!("{}", characters_column(&report)),
                Some(Column::Counts) => println!("{}", counts_column(&report)),
                None => print_report(&report, &config)?,
            }
        }
        Command::Show { snapshot } => {
            let (_, report) = load_from_disk(snapshot)?;
            print_report(&report, &config)?;
        }
    }
    Ok(())
}
