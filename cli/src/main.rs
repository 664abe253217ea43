//! mdword CLI - Markdown guide to Word document tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use mdword::convert::{
    ConvertOptions, Converter, DocxConverter, DocxStage, TextBundleConverter, DEFAULT_INPUT,
};
use mdword::{Error, JsonFormat, PaginationMode, RenderOptions};

#[derive(Parser)]
#[command(name = "mdword")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Convert a Markdown guide to DOCX, RTF and formatted text", long_about = None)]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert Markdown to a styled DOCX document
    Docx {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (`<stem>.docx` next to the input if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Which section headings get a page break
        #[arg(long, value_enum, default_value = "first")]
        pagination: Pagination,

        /// Level-1 heading text that marks the document title
        #[arg(long, value_name = "TEXT")]
        title_marker: Option<String>,
    },

    /// Write the RTF, formatted text and Word instructions files
    #[command(alias = "text")]
    Rtf {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output directory (the input's directory if not specified)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Run both the DOCX and the text pipelines
    All {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output directory (the input's directory if not specified)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Dump the parsed elements as JSON
    Inspect {
        /// Input Markdown file
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Pagination {
    /// Break before the first matching section only
    First,
    /// Break before every matching section
    Every,
    /// No page breaks
    Off,
}

impl From<Pagination> for PaginationMode {
    fn from(mode: Pagination) -> Self {
        match mode {
            Pagination::First => PaginationMode::FirstMatch,
            Pagination::Every => PaginationMode::EveryMatch,
            Pagination::Off => PaginationMode::Disabled,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Docx {
            input,
            output,
            pagination,
            title_marker,
        }) => {
            let mut render_options = RenderOptions::new().with_pagination(pagination.into());
            if let Some(marker) = title_marker {
                render_options = render_options.with_title_marker(marker);
            }
            let options = ConvertOptions::new().with_render_options(render_options);
            let options = match output {
                Some(path) => options.with_docx_path(path),
                None => options,
            };
            exit_on_docx_failure(run_docx(&input_or_default(input), &options))
        }
        Some(Commands::Rtf { input, output }) => {
            cmd_text_bundle(&input_or_default(input), &output_options(output))
        }
        Some(Commands::All { input, output }) => {
            cmd_all(&input_or_default(input), &output_options(output))
        }
        Some(Commands::Inspect {
            input,
            output,
            compact,
        }) => cmd_inspect(&input_or_default(input), output.as_deref(), compact),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_all(&input_or_default(cli.input), &ConvertOptions::default()),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn input_or_default(input: Option<PathBuf>) -> PathBuf {
    input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
}

fn output_options(output: Option<PathBuf>) -> ConvertOptions {
    match output {
        Some(dir) => ConvertOptions::new().with_output_dir(dir),
        None => ConvertOptions::new(),
    }
}

/// Exits with status 1 when the DOCX step failed.
///
/// The failure message is already printed by then; the exit status is added
/// so scripts can tell the run did not produce a document.
fn exit_on_docx_failure(ok: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_all(input: &Path, options: &ConvertOptions) -> Result<(), Box<dyn std::error::Error>> {
    let docx_ok = run_docx(input, options);
    println!();
    cmd_text_bundle(input, options)?;
    exit_on_docx_failure(docx_ok)
}

/// DOCX pipeline; every failure is reported here and turned into `false`.
fn run_docx(input: &Path, options: &ConvertOptions) -> bool {
    match cmd_docx(input, options) {
        Ok(output) => {
            println!(
                "{} {}",
                "🎉 Đã tạo file DOCX:".green().bold(),
                output.display()
            );
            true
        }
        Err(Error::InputNotFound(path)) => {
            println!("{} {}", "❌ File không tồn tại:".red(), path.display());
            false
        }
        Err(e) => {
            println!("{} {}", "❌ Lỗi khi convert:".red(), e);
            false
        }
    }
}

fn cmd_docx(input: &Path, options: &ConvertOptions) -> mdword::Result<PathBuf> {
    let pb = ProgressBar::new(DocxStage::ALL.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );

    let result = DocxConverter::new().convert_with_progress(input, options, |stage| {
        pb.set_position(stage.index() as u64);
        pb.set_message(stage.message());
    });
    pb.finish_and_clear();

    let report = result?;
    let output = report
        .outputs
        .first()
        .cloned()
        .ok_or_else(|| Error::Other("DOCX converter wrote no file".to_string()))?;
    let stats = report.stats.unwrap_or_default();

    println!(
        "{} {} to {}",
        "✅ Successfully converted".green(),
        input.display(),
        output.display()
    );
    println!(
        "  {} {} headings, {} paragraphs, {} code lines, {} list items",
        "├─".dimmed(),
        stats.heading_count,
        stats.paragraph_count,
        stats.code_line_count,
        stats.list_item_count
    );
    println!(
        "  {} {} hyperlinks, {} page breaks",
        "└─".dimmed(),
        stats.hyperlink_count,
        stats.page_break_count
    );

    Ok(output)
}

fn cmd_text_bundle(
    input: &Path,
    options: &ConvertOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "🚀 Bắt đầu tạo tài liệu VPS Deployment...".cyan().bold());

    let report = match TextBundleConverter::new().convert(input, options) {
        Ok(report) => report,
        Err(Error::InputNotFound(path)) => {
            println!("{}", format!("❌ File {} không tồn tại!", path.display()).red());
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let mut outputs = report.outputs.iter();
    if let Some(rtf) = outputs.next() {
        println!("{} {}", "✅ Đã tạo file RTF:".green(), rtf.display());
        println!("📝 File RTF có thể mở bằng Microsoft Word và save as DOCX");
    }
    if let Some(txt) = outputs.next() {
        println!("{} {}", "✅ Đã tạo file TXT:".green(), txt.display());
    }
    if let Some(instructions) = outputs.next() {
        println!("{} {}", "📋 Đã tạo hướng dẫn:".green(), instructions.display());
    }

    println!("\n{}", "🎉 Hoàn thành! Bạn có thể:".green().bold());
    println!("1. Mở file RTF bằng Word và save as DOCX");
    println!("2. Hoặc copy nội dung từ TXT file vào Word thủ công");

    Ok(())
}

fn cmd_inspect(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = mdword::to_json(input, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "mdword".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Markdown guide to Word document tool");
    println!();
    println!("License: MIT");
}
