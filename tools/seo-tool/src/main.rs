use clap::{Parser, Subcommand, ValueEnum};
use seo_content::hashing::fields_hash;
use seo_content::reading_time::word_count;
use seo_content::slug::{generate_slug, is_valid_slug, slug_or};
use seo_content::{process_seo_with, SeoConfig, SeoFields};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "seo-tool")]
#[command(about = "Derive SEO fields (slug, description, reading time, keywords, image) for blog posts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a post body and emit its SEO fields
    Process {
        /// Post body (HTML, Markdown, optional frontmatter)
        #[arg(long, short)]
        input: String,
        /// Post title (default: input file stem)
        #[arg(long, short)]
        title: Option<String>,
        /// Output encoding
        #[arg(long, short, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Output file (default: stdout, JSON only)
        #[arg(long, short)]
        output: Option<String>,
        /// Config file (default: ~/.config/seo-content/config.toml if present)
        #[arg(long, short)]
        config: Option<String>,
    },
    /// Print the slug for a title
    Slug {
        title: String,
    },
    /// Fail unless the argument is a well-formed slug
    CheckSlug {
        slug: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Cbor,
}

fn default_config_path() -> Option<PathBuf> {
    let mut p = dirs::config_dir()?;
    p.push("seo-content");
    p.push("config.toml");
    Some(p)
}

fn load_config(config_file: Option<&str>) -> Result<SeoConfig, Box<dyn std::error::Error>> {
    let path = match config_file {
        Some(path) => PathBuf::from(path),
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => path,
            None => {
                info!("No config file, using defaults");
                return Ok(SeoConfig::default());
            }
        },
    };
    info!("Loading config from {}", path.display());
    let config: SeoConfig = toml::from_str(&fs::read_to_string(&path)?)?;
    Ok(config)
}

fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace(['-', '_'], " "))
        .unwrap_or_default()
}

/// Slug from the title, else from the file stem, else from the fields fingerprint.
fn post_slug(title: &str, path: &Path, fields: &SeoFields) -> String {
    let slug = slug_or(title, &title_from_path(path));
    if !slug.is_empty() {
        return slug;
    }
    let hash = hex::encode(fields_hash(fields));
    format!("post-{}", &hash[..12])
}

fn encode(fields: &SeoFields, format: Format) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    match format {
        Format::Json => {
            let mut json = serde_json::to_vec_pretty(fields)?;
            json.push(b'\n');
            Ok(json)
        }
        Format::Cbor => Ok(fields.to_bytes()),
    }
}

fn process_post(
    input: String,
    title: Option<String>,
    format: Format,
    output: Option<String>,
    config_file: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_file.as_deref())?;
    let input_path = PathBuf::from(&input);
    let content = fs::read_to_string(&input_path)?;
    let title = title.unwrap_or_else(|| title_from_path(&input_path));
    info!("Processing {} ({} bytes)", input_path.display(), content.len());

    let mut fields = process_seo_with(&title, &content, &config);
    if fields.slug.is_empty() {
        fields.slug = post_slug(&title, &input_path, &fields);
        info!("Title {:?} has no slug, using {}", title, fields.slug);
    }
    info!(
        "Fields fingerprint: {} ({} words)",
        hex::encode(fields_hash(&fields)),
        word_count(&content)
    );

    let encoded = encode(&fields, format)?;
    match output {
        Some(path) => {
            fs::write(&path, &encoded)?;
            info!("SEO fields written to: {} ({} bytes)", path, encoded.len());
        }
        None if format == Format::Cbor => {
            return Err("CBOR output needs --output".into());
        }
        None => print!("{}", String::from_utf8(encoded)?),
    }
    Ok(())
}

fn check_slug(slug: &str) -> Result<(), Box<dyn std::error::Error>> {
    if !is_valid_slug(slug) {
        return Err(format!("Invalid slug: {:?} (suggested: {:?})", slug, generate_slug(slug)).into());
    }
    println!("{}", slug);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Process {
            input,
            title,
            format,
            output,
            config,
        } => process_post(input, title, format, output, config),
        Commands::Slug { title } => {
            println!("{}", generate_slug(&title));
            Ok(())
        }
        Commands::CheckSlug { slug } => check_slug(&slug),
    }
}
