use std::path::PathBuf;

use clap::Parser;

use sitegen::{BuildOptions, Config, build_site};

#[derive(Parser)]
#[command(name = "sitegen")]
#[command(about = "Build a static HTML site from Markdown sources")]
struct Cli {
    /// Site root directory (contains config.toml, content/ and static/)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output directory (overrides config.toml)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Base path prefix for root-relative URLs (overrides config.toml)
    #[arg(short, long)]
    basepath: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let mut config = Config::load(&cli.root.join("config.toml"));
    if let Some(basepath) = cli.basepath {
        config.basepath = basepath;
    }

    let mut opts = BuildOptions::from_config(&cli.root, &config);
    if let Some(output) = cli.output {
        opts.output = output;
    }

    match build_site(&opts) {
        Ok(pages) => println!("Generated {} page(s) in {}", pages, opts.output.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
