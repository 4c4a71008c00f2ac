use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use mdsite_config::SiteConfig;

mod site;

#[derive(Parser)]
#[command(name = "mdsite")]
#[command(about = "Generate a static HTML site from markdown content")]
struct Cli {
    /// Site root containing the content, static and template paths
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Config file (defaults to mdsite.toml under the site root)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SiteConfig::load_from_path(path)?
            .ok_or_else(|| anyhow!("config file not found: {}", path.display()))?,
        None => SiteConfig::load_or_default(&cli.root)?,
    };

    // Configured paths are relative to the site root unless absolute.
    let content_dir = cli.root.join(&config.content_dir);
    let static_dir = cli.root.join(&config.static_dir);
    let output_dir = cli.root.join(&config.output_dir);
    let template_path = cli.root.join(&config.template_path);

    let template = fs::read_to_string(&template_path)
        .with_context(|| format!("reading template {}", template_path.display()))?;

    site::copy_tree_clean(&static_dir, &output_dir)
        .with_context(|| format!("copying static assets from {}", static_dir.display()))?;
    println!(
        "Copied static assets from {} to {}",
        static_dir.display(),
        output_dir.display()
    );

    let pages = site::generate_pages_recursive(&content_dir, &template, &output_dir)
        .with_context(|| format!("generating pages from {}", content_dir.display()))?;
    for page in &pages {
        println!("Generated {}", page.display());
    }
    println!("Done: {} page(s)", pages.len());

    Ok(())
}
