//! dokupage CLI - render and check static documentation pages

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use dokupage::{homepage, render, validate, Document, JsonFormat, RenderOptions};

#[derive(Parser)]
#[command(name = "dokupage")]
#[command(version)]
#[command(about = "Render static documentation pages to XHTML, text, and JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the built-in homepage into an output directory
    Build {
        /// Output directory
        #[arg(short, long, value_name = "DIR", default_value = "dist")]
        output: PathBuf,
    },

    /// Render an authored JSON document to XHTML
    Xhtml {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Omit the leading XML declaration
        #[arg(long)]
        no_xml_declaration: bool,
    },

    /// Render an authored JSON document to plain text
    Text {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// List marker character
        #[arg(long, default_value = "-")]
        marker: char,
    },

    /// Normalize an authored JSON document
    Json {
        /// Input document (JSON)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Check a document: link syntax, heading structure, bundle assets
    Check {
        /// Input document (JSON), or the built-in homepage if omitted
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,

        /// Resolve relative asset references against this directory
        #[arg(long, value_name = "DIR")]
        bundle: Option<PathBuf>,
    },

    /// Show document metadata and block statistics
    Info {
        /// Input document (JSON), or the built-in homepage if omitted
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build { output } => cmd_build(&output),
        Commands::Xhtml {
            input,
            output,
            no_xml_declaration,
        } => cmd_xhtml(&input, output.as_deref(), no_xml_declaration),
        Commands::Text {
            input,
            output,
            marker,
        } => cmd_text(&input, output.as_deref(), marker),
        Commands::Json {
            input,
            output,
            compact,
        } => cmd_json(&input, output.as_deref(), compact),
        Commands::Check { input, bundle } => cmd_check(input.as_deref(), bundle.as_deref()),
        Commands::Info { input } => cmd_info(input.as_deref()),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_input(input: Option<&Path>) -> Result<Document, Box<dyn std::error::Error>> {
    match input {
        Some(path) => Ok(dokupage::load_document(path)?),
        None => Ok(homepage::document()),
    }
}

fn write_or_print(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn cmd_build(output_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(output_dir)?;

    let doc = homepage::document();
    let xhtml = render::to_xhtml(&doc, &RenderOptions::default())?;
    let index = output_dir.join("index.html");
    fs::write(&index, &xhtml)?;

    println!(
        "{} {} ({} bytes)",
        "Wrote".green().bold(),
        index.display(),
        xhtml.len()
    );

    let issues = validate::check_bundle(&doc, output_dir)?;
    if issues.is_empty() {
        println!("{} all asset references resolve", "OK".green().bold());
    } else {
        for issue in &issues {
            log::warn!("{}", issue);
            println!("{} {}", "warning:".yellow().bold(), issue);
        }
        println!(
            "{} copy the missing assets into {} before deploying",
            "note:".dimmed(),
            output_dir.display()
        );
    }

    Ok(())
}

fn cmd_xhtml(
    input: &Path,
    output: Option<&Path>,
    no_xml_declaration: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = dokupage::load_document(input)?;
    let options = RenderOptions::new().with_xml_declaration(!no_xml_declaration);
    let xhtml = render::to_xhtml(&doc, &options)?;
    write_or_print(&xhtml, output)
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    marker: char,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = dokupage::load_document(input)?;
    let options = RenderOptions::new().with_list_marker(marker);
    let text = render::to_text(&doc, &options)?;
    write_or_print(&text, output)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = dokupage::load_document(input)?;
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = render::to_json(&doc, format)?;
    write_or_print(&json, output)
}

fn cmd_check(
    input: Option<&Path>,
    bundle: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_input(input)?;

    let issues = match bundle {
        Some(dir) => validate::check_bundle(&doc, dir)?,
        None => validate::check(&doc),
    };

    if issues.is_empty() {
        println!("{} no issues found", "OK".green().bold());
        return Ok(());
    }

    for issue in &issues {
        println!("{} {}", "issue:".red().bold(), issue);
    }
    println!("{} issue(s) found", issues.len());
    std::process::exit(1);
}

fn cmd_info(input: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_input(input)?;
    let result = render::to_xhtml_with_stats(&doc, &RenderOptions::default())?;
    let stats = &result.stats;

    println!("{}", "Document".green().bold());
    println!("  Title:       {}", doc.metadata.title);
    if let Some(ref lang) = doc.metadata.language {
        println!("  Language:    {}", lang);
    }
    println!("  Encoding:    {}", doc.metadata.encoding);
    println!("  Stylesheets: {}", doc.metadata.stylesheets.join(", "));
    println!("  Blocks:      {}", doc.block_count());

    println!("{}", "Content".green().bold());
    println!("  Headings:     {}", stats.heading_count);
    println!("  Paragraphs:   {}", stats.paragraph_count);
    println!("  Lists:        {}", stats.list_count);
    println!("  List items:   {}", stats.list_item_count);
    println!("  Links:        {}", stats.link_count);
    println!("  Images:       {}", stats.image_count);
    println!("  Preformatted: {}", stats.preformatted_count);
    println!("  Scripts:      {}", stats.script_count);
    println!("  Words:        {}", stats.word_count);

    Ok(())
}

fn cmd_version() {
    println!("dokupage {}", env!("CARGO_PKG_VERSION"));
}
