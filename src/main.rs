use anyhow::Result;
use ca_planter_core::config::AppConfig;
use ca_planter_core::metrics::init_logging;
use ca_planter_lib::app::App;
use ca_planter_lib::ui::GridWidget;
use clap::Parser;
use std::path::PathBuf;

/// Columns shown by the terminal preview before sampling kicks in.
const PREVIEW_COLUMNS: usize = 160;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Seed for the initial row, overriding the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory for the generated files, overriding the config file
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Skip the terminal preview
    #[arg(long)]
    no_preview: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging("ca_planter=info,ca_planter_lib=info,ca_planter_core=info,ca_planter_io=info");

    let mut config = AppConfig::load_from(&args.config)?;
    if let Some(seed) = args.seed {
        config.automaton.seed = Some(seed);
    }
    if let Some(dir) = args.output_dir {
        config.output.directory = dir;
    }
    if args.no_preview {
        config.output.preview = false;
    }

    let preview = config.output.preview;
    let mut app = App::new(config)?;
    let report = app.run()?;

    if preview {
        let title = ca_planter_io::title(report.rule);
        for line in GridWidget::new(&report.grid, title, PREVIEW_COLUMNS).to_lines() {
            println!("{line}");
        }
    }

    for path in &report.artifacts {
        println!("Wrote {}", path.display());
    }
    println!("{}", report.summary());
    Ok(())
}
