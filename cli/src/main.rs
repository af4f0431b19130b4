//! unocr CLI - OCR result viewer and exporter

mod fetch;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unocr::{DocumentBuffer, ImageHandling, JsonFormat, RenderOptions};

#[derive(Parser)]
#[command(name = "unocr")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "View, edit, and export OCR results to DOCX, Markdown, and HTML", long_about = None)]
struct Cli {
    /// Input OCR result (file path or URL)
    #[arg(value_name = "INPUT")]
    input: Option<String>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an OCR result to all formats (DOCX, Markdown, HTML, JSON)
    Convert {
        /// Input OCR result (file path or URL)
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Export paragraph blocks to a DOCX file
    Docx {
        /// Input OCR result (file path or URL)
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output file (input stem plus .docx if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert an OCR result to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input OCR result (file path or URL)
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Image rendering mode
        #[arg(long, value_enum, default_value = "inline")]
        images: ImageMode,

        /// Path prefix for referenced images
        #[arg(long, default_value = "images/")]
        image_prefix: String,
    },

    /// Convert an OCR result to a standalone HTML page
    Html {
        /// Input OCR result (file path or URL)
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Page title
        #[arg(long, default_value = "OCR Result")]
        title: String,

        /// Image rendering mode
        #[arg(long, value_enum, default_value = "inline")]
        images: ImageMode,
    },

    /// Convert an OCR result to plain text
    Text {
        /// Input OCR result (file path or URL)
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Re-serialize an OCR result to JSON
    Json {
        /// Input OCR result (file path or URL)
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// List paragraph blocks
    Blocks {
        /// Input OCR result (file path or URL)
        #[arg(value_name = "INPUT")]
        input: String,
    },

    /// Show document information
    Info {
        /// Input OCR result (file path or URL)
        #[arg(value_name = "INPUT")]
        input: String,
    },

    /// Extract embedded images to files
    Extract {
        /// Input OCR result (file path or URL)
        #[arg(value_name = "INPUT")]
        input: String,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ImageMode {
    /// Inline payloads as data URIs
    Inline,
    /// Reference image files by path
    Referenced,
    /// Drop image references
    Strip,
}

impl From<ImageMode> for ImageHandling {
    fn from(mode: ImageMode) -> Self {
        match mode {
            ImageMode::Inline => ImageHandling::Inline,
            ImageMode::Referenced => ImageHandling::Referenced,
            ImageMode::Strip => ImageHandling::Strip,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert { input, output }) => cmd_convert(&input, output.as_deref()),
        Some(Commands::Docx { input, output }) => cmd_docx(&input, output.as_deref()),
        Some(Commands::Markdown {
            input,
            output,
            images,
            image_prefix,
        }) => cmd_markdown(&input, output.as_deref(), images, &image_prefix),
        Some(Commands::Html {
            input,
            output,
            title,
            images,
        }) => cmd_html(&input, output.as_deref(), &title, images),
        Some(Commands::Text { input, output }) => cmd_text(&input, output.as_deref()),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Blocks { input }) => cmd_blocks(&input),
        Some(Commands::Info { input }) => cmd_info(&input),
        Some(Commands::Extract { input, output }) => cmd_extract(&input, output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: convert if input is provided
            if let Some(input) = cli.input {
                cmd_convert(&input, cli.output.as_deref())
            } else {
                println!("{}", "Usage: unocr <INPUT> [OUTPUT]".yellow());
                println!("       unocr --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_document(input: &str) -> Result<unocr::Document, Box<dyn std::error::Error>> {
    let data = fetch::resolve_input(input)?;
    Ok(unocr::load_bytes(&data)?)
}

fn cmd_convert(input: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let stem = fetch::input_stem(input);
    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(format!("{}_output", stem)));

    fs::create_dir_all(&output_dir)?;

    let pb = ProgressBar::new(5);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    // Load document
    pb.set_message("Loading OCR result...");
    let doc = load_document(input)?;
    pb.inc(1);

    // Extract images
    pb.set_message("Extracting images...");
    let images_dir = output_dir.join("images");
    fs::create_dir_all(&images_dir)?;
    for page in &doc.pages {
        for image in &page.images {
            if !image.has_payload() {
                continue;
            }
            match image.decode() {
                Ok(data) => {
                    let filename = image.suggested_filename(&data);
                    fs::write(images_dir.join(&filename), &data)?;
                }
                Err(e) => log::warn!("Skipping image '{}': {}", image.id, e),
            }
        }
    }
    pb.inc(1);

    // Export DOCX
    pb.set_message("Exporting DOCX...");
    let buffer = DocumentBuffer::from_document(&doc);
    unocr::write_docx_file(&buffer, output_dir.join(unocr::DEFAULT_FILE_NAME))?;
    pb.inc(1);

    // Generate Markdown
    pb.set_message("Generating Markdown...");
    let md_options = RenderOptions::new().referenced_images("images/");
    let markdown = unocr::render::to_markdown(&doc, &md_options);
    fs::write(output_dir.join("document.md"), &markdown)?;
    pb.inc(1);

    // Generate HTML and JSON
    pb.set_message("Generating HTML...");
    let html_options = RenderOptions::new().with_html_title(stem.as_str());
    let html = unocr::render::to_html(&doc, &html_options);
    fs::write(output_dir.join("index.html"), &html)?;

    let json = unocr::render::to_json(&doc, JsonFormat::Pretty)?;
    fs::write(output_dir.join("content.json"), &json)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!("\n{}", "Output files:".green().bold());
    println!("  {} {}", "├─".dimmed(), unocr::DEFAULT_FILE_NAME);
    println!("  {} document.md", "├─".dimmed());
    println!("  {} index.html", "├─".dimmed());
    println!("  {} content.json", "├─".dimmed());
    println!("  {} images/", "└─".dimmed());

    Ok(())
}

fn cmd_docx(input: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let buffer = DocumentBuffer::from_document(&doc);

    let path = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(format!("{}.docx", fetch::input_stem(input))));

    unocr::write_docx_file(&buffer, &path)?;
    println!(
        "{} {} ({} blocks)",
        "Saved to".green(),
        path.display(),
        buffer.len()
    );

    Ok(())
}

fn cmd_markdown(
    input: &str,
    output: Option<&Path>,
    images: ImageMode,
    image_prefix: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;

    let render_options = RenderOptions::new()
        .with_image_handling(images.into())
        .with_image_prefix(image_prefix);

    let markdown = unocr::render::to_markdown(&doc, &render_options);

    if let Some(path) = output {
        fs::write(path, &markdown)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", markdown);
    }

    Ok(())
}

fn cmd_html(
    input: &str,
    output: Option<&Path>,
    title: &str,
    images: ImageMode,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;

    let render_options = RenderOptions::new()
        .with_image_handling(images.into())
        .with_html_title(title);

    let html = unocr::render::to_html(&doc, &render_options);

    if let Some(path) = output {
        fs::write(path, &html)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", html);
    }

    Ok(())
}

fn cmd_text(input: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;

    let render_options = RenderOptions::new();
    let text = unocr::render::to_text(&doc, &render_options);

    if let Some(path) = output {
        fs::write(path, &text)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_json(
    input: &str,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = unocr::render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_blocks(input: &str) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let buffer = DocumentBuffer::from_document(&doc);

    println!("{}", "Paragraph Blocks".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    for (index, block) in buffer.blocks().iter().enumerate() {
        let label = format!("[{:>3}]", index);
        let page = format!("p{}", block.page);

        if block.has_images() {
            let ids: Vec<&str> = block.images.iter().map(|i| i.id.as_str()).collect();
            println!(
                "{} {} {}",
                label.dimmed(),
                page.dimmed(),
                format!("(image: {})", ids.join(", ")).yellow()
            );
            if !block.text.is_empty() {
                println!("          {}", block.text);
            }
        } else {
            println!("{} {} {}", label.dimmed(), page.dimmed(), block.text);
        }
    }

    println!();
    println!("{} {} blocks", "Total:".bold(), buffer.len());

    Ok(())
}

fn cmd_info(input: &str) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;
    let buffer = DocumentBuffer::from_document(&doc);

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Input".bold(), input);
    println!("{}: {}", "Pages".bold(), doc.page_count());
    println!("{}: {}", "Blocks".bold(), buffer.len());
    println!("{}: {}", "Images".bold(), doc.image_count());

    if let Some(ref model) = doc.model {
        println!("{}: {}", "Model".bold(), model);
    }
    if let Some(ref usage) = doc.usage_info {
        if let Some(pages) = usage.pages_processed {
            println!("{}: {}", "Pages processed".bold(), pages);
        }
        if let Some(size) = usage.doc_size_bytes {
            println!("{}: {} bytes", "Document size".bold(), size);
        }
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let text = doc.plain_text();
    let words: usize = text.split_whitespace().count();
    let chars = text.chars().count();

    println!("{}: {}", "Words".bold(), words);
    println!("{}: {}", "Characters".bold(), chars);

    Ok(())
}

fn cmd_extract(input: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let doc = load_document(input)?;

    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let mut count = 0;
    for page in &doc.pages {
        for image in &page.images {
            if !image.has_payload() {
                continue;
            }
            match image.decode() {
                Ok(data) => {
                    let filename = image.suggested_filename(&data);
                    fs::write(output_dir.join(&filename), &data)?;
                    println!("{} {}", "Extracted".green(), filename);
                    count += 1;
                }
                Err(e) => {
                    eprintln!("{} {}: {}", "Skipped".yellow(), image.id, e);
                }
            }
        }
    }

    println!("\n{} {} images extracted", "Done!".green().bold(), count);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "unocr".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("OCR result viewer and exporter");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/unocr".dimmed());
    println!("License: MIT");
}
