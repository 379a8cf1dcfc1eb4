//! img2table - reconstruct a table from a scanned image.
//!
//! A command line tool that takes a table image plus the stored output
//! of an external OCR run (a JSON sidecar of per-word annotations) and
//! prints the reconstructed grid as CSV or JSON.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use serde::Deserialize;

use imgtable_core::{
    DEFAULT_Y_TOLERANCE, GrayView, TableSettings, TextAnnotation, TextRecognizer, Vertex,
    extract_table_with_recognizer,
};

/// Output type for the reconstructed table.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputType {
    /// Comma-joined rows, one line per table row (default)
    #[default]
    Csv,
    /// JSON object {"table": [[...], ...]}
    Json,
}

/// Reconstruct a table grid from a scanned image and stored OCR output.
#[derive(Parser, Debug)]
#[command(name = "img2table")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the table image (any format the image crate decodes)
    image: PathBuf,

    /// Path to the OCR sidecar JSON: an array of {"text", "quad"}
    /// annotations, the first being the full-image summary
    #[arg(short = 'w', long)]
    words: PathBuf,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    /// Maximum top-edge gap in pixels between words of the same row
    #[arg(short = 'y', long = "y-tolerance", default_value_t = DEFAULT_Y_TOLERANCE)]
    y_tolerance: i32,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Type of output to generate
    #[arg(short = 't', long = "output_type", value_enum, default_value = "csv")]
    output_type: OutputType,
}

/// One stored OCR annotation, matching the shape of a cloud text
/// detection response: a text plus four quad vertices in the order
/// top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Deserialize)]
struct StoredAnnotation {
    text: String,
    quad: [[i32; 2]; 4],
}

/// Replays a stored OCR response instead of calling a live service.
struct StoredOcr {
    annotations: Vec<TextAnnotation>,
}

impl StoredOcr {
    fn load(path: &PathBuf) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading OCR sidecar {}", path.display()))?;
        let stored: Vec<StoredAnnotation> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing OCR sidecar {}", path.display()))?;
        let annotations = stored
            .into_iter()
            .map(|a| TextAnnotation {
                text: a.text,
                quad: a.quad.map(|[x, y]| Vertex { x, y }),
            })
            .collect();
        Ok(Self { annotations })
    }
}

impl TextRecognizer for StoredOcr {
    fn detect_text(&self, _image: &[u8]) -> imgtable_core::Result<Vec<TextAnnotation>> {
        Ok(self.annotations.clone())
    }
}

fn write_table(out: &mut dyn Write, table: &[Vec<String>], output_type: OutputType) -> Result<()> {
    match output_type {
        OutputType::Csv => {
            for row in table {
                writeln!(out, "{}", row.join(","))?;
            }
        }
        OutputType::Json => {
            serde_json::to_writer(&mut *out, &serde_json::json!({ "table": table }))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn run(args: &Args) -> Result<()> {
    let bytes = fs::read(&args.image)
        .with_context(|| format!("reading image {}", args.image.display()))?;
    let decoded = image::load_from_memory(&bytes)
        .with_context(|| format!("decoding image {}", args.image.display()))?
        .to_luma8();
    let gray = GrayView::new(
        decoded.width() as usize,
        decoded.height() as usize,
        decoded.as_raw(),
    )?;

    let ocr = StoredOcr::load(&args.words)?;
    let settings = TableSettings {
        y_tolerance: args.y_tolerance,
    };
    let table = extract_table_with_recognizer(&bytes, &gray, &ocr, &settings)?;

    if args.outfile == "-" {
        let stdout = io::stdout();
        write_table(&mut stdout.lock(), &table, args.output_type)
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("creating {}", args.outfile))?;
        write_table(&mut BufWriter::new(file), &table, args.output_type)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    run(&args)
}
