// Command line front end: reads OCR output and prints the decoded passport fields

use clap::{Parser, Subcommand};
use mrzscan::{
    models::{CheckDigitField, DecodedMrz, PassportForm},
    processing::{ocr::DEFAULT_LANGUAGE_HINTS, VisionRequest, VisionResponse},
    utils::{PassportError, Result},
    PassportScanner, Presenter, ScanOutcome,
};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mrzscan", version, about = "Decode a passport MRZ from OCR text")]
struct Cli {
    /// Print the decoded record as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Refuse to print fields when any check digit is wrong
    #[arg(long, global = true)]
    strict: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode plain OCR text from a file, or stdin when no file is given
    Decode { file: Option<PathBuf> },
    /// Decode a saved Google Vision images:annotate response
    Vision { file: PathBuf },
    /// Print a Google Vision request body for an image
    Request {
        image: PathBuf,
        /// Language hint, repeatable (default: en, he)
        #[arg(long = "hint")]
        hints: Vec<String>,
    },
}

struct ConsolePresenter {
    json: bool,
}

impl Presenter for ConsolePresenter {
    fn present(&mut self, form: &PassportForm, mrz: &DecodedMrz) {
        if self.json {
            match serde_json::to_string_pretty(mrz) {
                Ok(json) => println!("{}", json),
                Err(err) => eprintln!("Error serializing result: {}", err),
            }
        } else {
            print_report(form, mrz);
        }
    }
}

// Function to print a readable report of the decoded MRZ
fn print_report(form: &PassportForm, mrz: &DecodedMrz) {
    println!("\n===============================================");
    println!("            PASSPORT MRZ REPORT");
    println!("===============================================\n");

    println!("PASSPORT INFORMATION:");
    println!("  Document Type: {}", mrz.document_type);
    println!("  Issuing Country: {}", form.issuing_country);
    println!("  Passport Number: {}", form.passport_number);
    println!("  Surname: {}", form.surname);
    println!("  Given Names: {}", form.given_names);
    println!("  Nationality: {}", form.nationality);
    println!("  Date of Birth: {}", form.birth_date);
    println!("  Sex: {}", form.sex);
    println!("  Date of Expiry: {}", form.expiry_date);
    if !mrz.personal_number.is_empty() {
        println!("  Personal Number: {}", mrz.personal_number);
    }

    println!("\nCHECK DIGITS:");
    println!("  Document Number: {}", mrz.check_digits.document_number);
    println!("  Date of Birth: {}", mrz.check_digits.birth_date);
    println!("  Date of Expiry: {}", mrz.check_digits.expiry_date);
    println!("  Personal Number: {}", mrz.check_digits.personal_number);
    println!("  Composite: {}", mrz.check_digits.composite);
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// What happened to one piece of OCR text on its way to the presenter.
#[derive(Debug, PartialEq, Eq)]
enum Disposition {
    Presented,
    NoText,
    /// Strict mode refused an MRZ with these bad check digits.
    Rejected(Vec<CheckDigitField>),
}

impl Disposition {
    fn exit_code(&self) -> ExitCode {
        match self {
            Disposition::Presented => ExitCode::SUCCESS,
            Disposition::NoText => ExitCode::FAILURE,
            Disposition::Rejected(_) => ExitCode::from(2),
        }
    }
}

fn present_text<R: Presenter>(text: &str, strict: bool, presenter: &mut R) -> Result<Disposition> {
    let mrz = match PassportScanner::new().scan_text(text) {
        ScanOutcome::NoText => {
            eprintln!("No text detected. Try a sharper image.");
            return Ok(Disposition::NoText);
        }
        ScanOutcome::NoMrz => return Err(PassportError::MrzNotFound),
        ScanOutcome::Decoded(mrz) => mrz,
    };

    let invalid = mrz.check_digits.invalid_fields();
    if strict && !invalid.is_empty() {
        for field in &invalid {
            eprintln!("  - check digit mismatch: {}", field.label());
        }
        eprintln!("Refusing to fill fields from an MRZ with bad check digits");
        return Ok(Disposition::Rejected(invalid));
    }

    presenter.present(&PassportForm::from(mrz.as_ref()), &mrz);
    Ok(Disposition::Presented)
}

fn language_hints(hints: &[String]) -> Vec<&str> {
    if hints.is_empty() {
        DEFAULT_LANGUAGE_HINTS.to_vec()
    } else {
        hints.iter().map(String::as_str).collect()
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let mut presenter = ConsolePresenter { json: cli.json };
    let disposition = match &cli.command {
        Command::Decode { file } => {
            let text = read_input(file.as_ref())?;
            present_text(&text, cli.strict, &mut presenter)?
        }
        Command::Vision { file } => {
            let json = std::fs::read_to_string(file)?;
            let text = VisionResponse::from_json(&json)?.into_text()?;
            present_text(&text, cli.strict, &mut presenter)?
        }
        Command::Request { image, hints } => {
            let bytes = std::fs::read(image)?;
            let request = VisionRequest::document_text(&bytes, &language_hints(hints));
            println!("{}", request.to_json()?);
            Disposition::Presented
        }
    };
    Ok(disposition.exit_code())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
