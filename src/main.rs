use clap::{Parser, Subcommand};
use std::path::PathBuf;
use storefront::generate::{self, GenerateError};
use storefront::loader::{self, FileSource};
use storefront::render::{self, RenderContext};
use storefront::{config, output, shell};
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "storefront")]
#[command(about = "Render a storefront page from its content document")]
#[command(long_about = "\
Render a storefront page from its content document

The page shell is fixed; every section is filled from a single JSON document.

Site structure:

  site/
  ├── site.toml                    # Site config (optional)
  └── assets/                      # Copied to the output
      ├── css/style.css
      └── data/content.json        # Content document (path set by content_path)

Run 'storefront gen-config' to generate a documented site.toml.")]
#[command(version)]
struct Cli {
    /// Site directory
    #[arg(long, default_value = ".", global = true)]
    site: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load the content document and write the pre-rendered page
    Build,
    /// Validate the content document against the page without writing anything
    Check,
    /// Print a stock site.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.site)?;
            println!("==> Building {}", cli.site.display());
            match generate::generate(&cli.site, &cli.output, &site_config) {
                Ok(summary) => {
                    output::print_generate_output(&summary);
                    println!("==> Build complete: {}", cli.output.display());
                }
                Err(GenerateError::Load { alert, source }) => {
                    eprintln!("{alert}");
                    return Err(source.into());
                }
                Err(e) => return Err(e.into()),
            }
        }
        Command::Check => {
            let site_config = config::load_config(&cli.site)?;
            println!("==> Checking {}", cli.site.display());
            let source = FileSource::new(&cli.site);
            let ctx = RenderContext::from_config(&site_config);

            let document = loader::fetch_content(&source, &site_config.content_path)
                .inspect_err(|e| {
                    error!(path = %site_config.content_path, error = %e, "content load failed");
                    eprintln!("{}", site_config.alert.message);
                })?;
            // Rendering into a scratch shell catches container mismatches.
            let mut scratch = shell::skeleton(&site_config);
            render::dispatch(&document, &ctx, &mut scratch)?;

            output::print_check_output(&document, &site_config.content_path, &ctx.rating);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
