mod tui;

use clap::{CommandFactory, Parser, Subcommand};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use freq_lens_common::Config;
use freq_lens_core::{
    compute_frequency_distribution, export_csv, export_json, extract_columns, print_distribution,
    print_summary, resolve_paths, select_series, summarize_sorted, ColumnSeries, Distribution,
    ExtractOptions,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};
use tui::app::App;
use tui::events::handle_key;
use tui::session::Session;
use tui::ui::render;

fn parse_delimiter(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c),
        _ => Err(format!("delimiter must be a single ASCII character, got {s:?}")),
    }
}

#[derive(Parser)]
#[command(name = "freq-lens", version, about = "Grouped frequency distribution inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct IngestArgs {
    /// column to analyze (default: first numeric column)
    #[arg(long)]
    column: Option<String>,
    /// field delimiter (default from config, usually ',')
    #[arg(long, value_parser = parse_delimiter)]
    delimiter: Option<char>,
    /// treat the first record as data, not headers
    #[arg(long)]
    no_headers: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive distribution viewer
    Inspect {
        path: String,
        #[command(flatten)]
        ingest: IngestArgs,
    },
    /// Print the distribution table to stdout
    Table {
        path: String,
        #[command(flatten)]
        ingest: IngestArgs,
    },
    /// Print summary statistics to stdout
    Summary {
        path: String,
        #[command(flatten)]
        ingest: IngestArgs,
    },
    /// Write the distribution to a file
    Export {
        path: String,
        #[arg(long, default_value = "json")]
        format: String,
        #[arg(long)]
        output: Option<String>,
        #[command(flatten)]
        ingest: IngestArgs,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn extract_options(config: &Config, ingest: &IngestArgs) -> ExtractOptions {
    ExtractOptions {
        delimiter: ingest
            .delimiter
            .map(|c| c as u8)
            .unwrap_or_else(|| config.ingest.delimiter_byte()),
        has_headers: !ingest.no_headers && config.ingest.has_headers,
    }
}

/// resolve the input, extract every numeric column, and report match count
fn load_columns(
    input_path: &str,
    config: &Config,
    ingest: &IngestArgs,
) -> anyhow::Result<Vec<ColumnSeries>> {
    let paths = resolve_paths(input_path).map_err(|e| anyhow::anyhow!("{e}"))?;
    if paths.is_empty() {
        anyhow::bail!("No CSV/TSV files found: {input_path}");
    }
    if paths.len() > 1 {
        eprintln!(
            "{} files matched; analyzing {}",
            paths.len(),
            paths[0].display()
        );
    }
    let opts = extract_options(config, ingest);
    extract_columns(&paths[0], &opts).map_err(|e| anyhow::anyhow!("{e}"))
}

fn load_series(
    input_path: &str,
    config: &Config,
    ingest: &IngestArgs,
) -> anyhow::Result<(ColumnSeries, Distribution)> {
    let cols = load_columns(input_path, config, ingest)?;
    let series = select_series(cols, ingest.column.as_deref()).map_err(|e| anyhow::anyhow!("{e}"))?;
    let dist = compute_frequency_distribution(&series.values).map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok((series, dist))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_default();
    match cli.command {
        Commands::Inspect { path, ingest } => run_tui(path, config, &ingest)?,
        Commands::Table { path, ingest } => run_table(path, &config, &ingest)?,
        Commands::Summary { path, ingest } => run_summary(path, &config, &ingest)?,
        Commands::Export {
            path,
            format,
            output,
            ingest,
        } => run_export(path, format, output, &config, &ingest)?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        }
    }
    Ok(())
}

fn run_table(input_path: String, config: &Config, ingest: &IngestArgs) -> anyhow::Result<()> {
    let (series, dist) = load_series(&input_path, config, ingest)?;
    print_distribution(&series, &dist, config.display.decimals);
    Ok(())
}

fn run_summary(input_path: String, config: &Config, ingest: &IngestArgs) -> anyhow::Result<()> {
    let (series, dist) = load_series(&input_path, config, ingest)?;
    let stats = summarize_sorted(&dist.sorted_data).map_err(|e| anyhow::anyhow!("{e}"))?;
    print_summary(&series, &stats, config.display.decimals);
    Ok(())
}

fn run_export(
    input_path: String,
    format: String,
    output: Option<String>,
    config: &Config,
    ingest: &IngestArgs,
) -> anyhow::Result<()> {
    let (series, dist) = load_series(&input_path, config, ingest)?;
    let default_name = format!("distribution.{format}");
    let out_path: std::path::PathBuf = if let Some(ref o) = output {
        std::path::PathBuf::from(o)
    } else {
        std::path::Path::new(&config.export.output_dir).join(&default_name)
    };
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    match format.as_str() {
        "json" => {
            let stats = summarize_sorted(&dist.sorted_data).map_err(|e| anyhow::anyhow!("{e}"))?;
            export_json(&out_path, &series, &dist, &stats).map_err(|e| anyhow::anyhow!("{e}"))?;
            println!("Exported to {}", out_path.display());
        }
        "csv" => {
            export_csv(&out_path, &dist).map_err(|e| anyhow::anyhow!("{e}"))?;
            println!("Exported to {}", out_path.display());
        }
        _ => anyhow::bail!("Unknown format: {format} (use json or csv)"),
    }
    Ok(())
}

fn run_tui(input_path: String, config: Config, ingest: &IngestArgs) -> anyhow::Result<()> {
    let columns = load_columns(&input_path, &config, ingest)?;

    let mut app = App::new(input_path, config);
    if let Some(s) = Session::load() {
        app.restore_from_session(&s);
    }
    app.load_columns(columns);
    if let Some(name) = ingest.column.as_deref() {
        app.select_column_by_name(name);
    }
    app.status_msg = "Ready — q:quit ?:help".into();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick = Duration::from_millis(66); // 15Hz
    loop {
        terminal.draw(|f| render(f, &app))?;
        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) => handle_key(&mut app, key),
                Event::Mouse(mouse) => {
                    use crossterm::event::MouseEventKind;
                    match mouse.kind {
                        MouseEventKind::ScrollDown => app.scroll_down(),
                        MouseEventKind::ScrollUp => app.scroll_up(),
                        _ => {}
                    }
                }
                _ => {}
            }
        }
        if app.should_quit {
            break;
        }
    }
    let _ = app.to_session().save();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}
