//! untextract CLI - table reconstruction from document-analysis responses

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use untextract::render::{self, ExtractionStats};
use untextract::{
    AnalysisParser, BlockType, JsonFormat, PageSelection, ParseOptions, RenderOptions, SpanStyle,
};

#[derive(Parser)]
#[command(name = "untextract")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Render tables from document-analysis responses to HTML, text, and JSON", long_about = None)]
struct Cli {
    /// Input analysis response (JSON)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a response to all formats (HTML, text, JSON)
    Convert {
        /// Input analysis response (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Render tables as HTML
    Html {
        /// Input analysis response (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Put each row on its own line
        #[arg(long)]
        pretty: bool,

        /// Write spans as colspan="N" instead of colSpan=N
        #[arg(long)]
        quoted_spans: bool,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,

        /// Fail when a cell references an unknown word
        #[arg(long, env = "UNTEXTRACT_STRICT")]
        strict: bool,
    },

    /// Render tables as tab-separated text
    Text {
        /// Input analysis response (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page range (e.g., "1-10", "1,3,5")
        #[arg(long)]
        pages: Option<String>,
    },

    /// Render tables as JSON
    Json {
        /// Input analysis response (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show response information
    Info {
        /// Input analysis response (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert { input, output }) => cmd_convert(&input, output.as_deref()),
        Some(Commands::Html {
            input,
            output,
            pretty,
            quoted_spans,
            pages,
            strict,
        }) => cmd_html(
            &input,
            output.as_deref(),
            pretty,
            quoted_spans,
            pages.as_deref(),
            strict,
        ),
        Some(Commands::Text {
            input,
            output,
            pages,
        }) => cmd_text(&input, output.as_deref(), pages.as_deref()),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref())
            } else {
                println!("{}", "Usage: untextract <FILE> [OUTPUT]".yellow());
                println!("       untextract --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn page_selection(pages: Option<&str>) -> Result<PageSelection, Box<dyn std::error::Error>> {
    match pages {
        Some(p) => Ok(PageSelection::parse(p)?),
        None => Ok(PageSelection::All),
    }
}

fn write_or_print(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_convert(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_tables", stem))
    });

    fs::create_dir_all(&output_dir)?;
    log::debug!("Writing tables to {}", output_dir.display());

    let pb = ProgressBar::new(4);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")?
            .progress_chars("#>-"),
    );

    pb.set_message("Reconstructing tables...");
    let tables = untextract::parse_file(input)?;
    pb.inc(1);

    pb.set_message("Generating HTML...");
    let result = render::to_html_with_stats(&tables, &RenderOptions::new().with_pretty(true))?;
    fs::write(output_dir.join("tables.html"), &result.content)?;
    pb.inc(1);

    pb.set_message("Generating text...");
    let text = render::to_text(&tables)?;
    fs::write(output_dir.join("tables.txt"), &text)?;
    pb.inc(1);

    pb.set_message("Generating JSON...");
    let json = render::to_json(&tables, JsonFormat::Pretty)?;
    fs::write(output_dir.join("tables.json"), &json)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    print_stats(&result.stats);

    println!("\n{}", "Output files:".green().bold());
    println!("  {} tables.html", "├─".dimmed());
    println!("  {} tables.txt", "├─".dimmed());
    println!("  {} tables.json", "└─".dimmed());

    Ok(())
}

fn cmd_html(
    input: &Path,
    output: Option<&Path>,
    pretty: bool,
    quoted_spans: bool,
    pages: Option<&str>,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = ParseOptions::new().with_pages(page_selection(pages)?);
    if strict {
        options = options.strict();
    }
    let tables = untextract::parse_file_with_options(input, options)?;

    let span_style = if quoted_spans {
        SpanStyle::Quoted
    } else {
        SpanStyle::Compact
    };
    let render_options = RenderOptions::new()
        .with_pretty(pretty)
        .with_span_style(span_style);

    let html = render::to_html(&tables, &render_options)?;
    write_or_print(output, &html)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    pages: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = ParseOptions::new().with_pages(page_selection(pages)?);
    let tables = untextract::parse_file_with_options(input, options)?;

    let text = render::to_text(&tables)?;
    write_or_print(output, &text)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let tables = untextract::parse_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = render::to_json(&tables, format)?;
    write_or_print(output, &json)
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let parser = AnalysisParser::open(input)?;
    let response = parser.response();

    println!("{}", "Response Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(status) = response.job_status {
        println!("{}: {}", "Job status".bold(), status);
    }
    if let Some(pages) = response.page_count() {
        println!("{}: {}", "Pages".bold(), pages);
    }
    if let Some(ref version) = response.analyze_document_model_version {
        println!("{}: {}", "Model version".bold(), version);
    }
    println!("{}: {}", "Blocks".bold(), response.blocks.len());
    for (label, kind) in [
        ("Words", BlockType::Word),
        ("Lines", BlockType::Line),
        ("Tables", BlockType::Table),
        ("Cells", BlockType::Cell),
        ("Merged cells", BlockType::MergedCell),
    ] {
        println!("  {}: {}", label, response.blocks_of(kind).count());
    }

    let tables = parser.parse()?;
    let mut stats = ExtractionStats::new();
    for table in &tables {
        stats.add_table(&table.geometry);
    }

    println!();
    print_stats(&stats);

    Ok(())
}

fn print_stats(stats: &ExtractionStats) {
    println!("{}", "Table Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Rows".bold(), stats.row_count);
    println!("{}: {}", "Cells".bold(), stats.cell_count);
    println!("{}: {}", "Header cells".bold(), stats.header_cell_count);
    println!("{}: {}", "Merged cells".bold(), stats.merged_cell_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
}

fn cmd_version() {
    println!("{} {}", "untextract".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Table reconstruction from document-analysis responses");
    println!();
    println!("License: MIT");
}
