use clap::{Parser, Subcommand};
use skills_blog::breadcrumbs::{self, NavigationTrail, TrailPolicy};
use skills_blog::{config, content, generate, logging, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skills-blog")]
#[command(about = "Static renderer for the Learn Agent Skills blog")]
#[command(long_about = "\
Static renderer for the Learn Agent Skills blog

Renders the home page, the blog index and every article. Pages below the
home page carry breadcrumbs: an accessible <nav aria-label=\"Breadcrumb\">
plus a schema.org BreadcrumbList in JSON-LD.

Configuration (later layers win):
  built-in defaults → <config-dir>/config.toml → environment

  SITE_URL             Origin prefixed to breadcrumb URLs in JSON-LD
                       (empty = root-relative)
  BREADCRUMB_POLICY    permissive | strict
  RUST_LOG             Log filter for stderr diagnostics (default: info)

Run 'skills-blog gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Directory containing config.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every page into the output directory
    Build,
    /// Validate every page's breadcrumb trail without building
    Check,
    /// Print the JSON-LD for a trail read from a JSON file
    Trail(TrailArgs),
    /// Print a stock config.toml with all options documented
    GenConfig,
}

#[derive(clap::Args)]
struct TrailArgs {
    /// JSON file holding an array of {"label": ..., "href": ...} steps
    file: PathBuf,

    /// Origin to prefix instead of the configured site_url
    #[arg(long)]
    site_url: Option<String>,

    /// Reject malformed trails instead of rendering them
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_logging();

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.config_dir)?;
            println!("==> Generating site \u{2192} {}", cli.output.display());
            let report = generate::generate(&site_config, &cli.output)?;
            output::print_generate_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            let pages = content::page_trails();
            output::print_check_output(&pages);
            let issues: usize = pages.iter().map(|page| page.trail.issues().len()).sum();
            if issues > 0 {
                return Err(format!("{issues} breadcrumb issue(s) found").into());
            }
            println!("==> All breadcrumb trails are valid");
        }
        Command::Trail(args) => {
            let raw = std::fs::read_to_string(&args.file)?;
            let trail: NavigationTrail = serde_json::from_str(&raw)?;
            let site_url = match args.site_url {
                Some(site_url) => site_url,
                None => config::load_config(&cli.config_dir)?.site_url,
            };
            let policy = if args.strict {
                TrailPolicy::Strict
            } else {
                TrailPolicy::Permissive
            };
            let rendered = breadcrumbs::render_with_policy(&trail, &site_url, policy)?;
            output::print_trail_output(&rendered.structured);
            println!();
            println!("{}", rendered.structured.to_json());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
