use brand_site::{config, content, generate, logging, output, scan};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

const MANIFEST_FILE: &str = "manifest.json";

#[derive(Parser)]
#[command(name = "brand-site")]
#[command(about = "Static generator for a single-page brand portfolio")]
#[command(long_about = "\
Static generator for a single-page brand portfolio

The whole page is described in one TOML file. Sections are rendered in a
fixed order: hero, about, portfolio, shop, contact.

Content structure:

  content/
  ├── site.toml        # Page content (required, see 'brand-site gen-content')
  ├── config.toml      # Colours, theme, scene gate (optional, see 'gen-config')
  └── assets/          # Copied verbatim to the output root (optional)

Output:

  dist/
  ├── index.html       # The page, stylesheet inlined
  ├── reveal.js        # Scroll-in entrance animation
  ├── gate.js          # Visibility-gated scene loader (when the scene is enabled)
  └── ...              # Assets")]
#[command(version)]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for the intermediate manifest
    #[arg(long, default_value = ".brand-site-temp", global = true)]
    temp_dir: PathBuf,

    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate content and write the manifest
    Scan,
    /// Render the site from an existing manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate content without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
    /// Print the stock site.toml
    GenContent,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    run(&cli).inspect_err(|e| tracing::error!(error = %e, "brand-site failed"))
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Generate => {
            let manifest_path = cli.temp_dir.join(MANIFEST_FILE);
            let report = generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_generate_output(&report, &cli.output);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            let manifest_path = write_manifest(&manifest, &cli.temp_dir)?;
            output::print_scan_output(&manifest, &cli.source);

            println!();
            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let report = generate::generate(&manifest_path, &cli.source, &cli.output)?;
            output::print_generate_output(&report, &cli.output);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::GenContent => {
            print!("{}", content::stock_content_toml());
        }
    }

    Ok(())
}

/// Write the scan manifest into `temp_dir` and return its path.
fn write_manifest(manifest: &scan::Manifest, temp_dir: &Path) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(temp_dir)?;
    let path = temp_dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(manifest).map_err(std::io::Error::other)?;
    std::fs::write(&path, json)?;
    tracing::debug!(path = %path.display(), "wrote manifest");
    Ok(path)
}
