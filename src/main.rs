// objscope: collapsible value inspector for the terminal

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use objscope::error::Result;
use objscope::inspect::{inspect, InspectOptions, PaletteMode, DEFAULT_ROOT_MARKER};
use objscope::ui::{render_plain, App, LogSilence, PlainMode};
use objscope::value::{json::read_json, Value};

/// Inspect a JSON document as a collapsible tree
#[derive(Debug, Parser)]
#[command(name = "objscope", version, about)]
struct Cli {
    /// JSON file to inspect; reads stdin when absent or `-`
    file: Option<PathBuf>,

    /// Sub-path to expand initially, relative to the root (repeatable), e.g. `b.c`
    #[arg(short, long = "expand", value_name = "PATH")]
    expand: Vec<String>,

    /// Palette: `light` or `dark`
    #[arg(long, env = "OBJSCOPE_THEME", default_value = "light")]
    theme: PaletteMode,

    /// Marker naming the root node
    #[arg(long, default_value = DEFAULT_ROOT_MARKER)]
    root_marker: String,

    /// Render composite values nested deeper than this as leaves
    #[arg(long)]
    max_depth: Option<usize>,

    /// Print the tree as text instead of opening the interactive view
    #[arg(long)]
    print: bool,

    /// With --print, only show nodes opened by --expand
    #[arg(long, requires = "print")]
    only_expanded: bool,
}

impl Cli {
    fn options(&self) -> InspectOptions {
        InspectOptions {
            expand_paths: (!self.expand.is_empty()).then(|| self.expand.clone()),
            palette_mode: self.theme,
            root_marker: self.root_marker.clone(),
            max_depth: self.max_depth,
        }
    }
}

fn load(file: Option<&PathBuf>) -> Result<Value> {
    match file {
        Some(path) if path.as_os_str() != "-" => {
            log::info!("reading {}", path.display());
            read_json(BufReader::new(File::open(path)?))
        }
        _ => {
            log::info!("reading stdin");
            read_json(io::stdin().lock())
        }
    }
}

fn run_tui(data: Value, options: InspectOptions) -> Result<()> {
    // Held until the terminal is restored
    let _silence = LogSilence::start();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(data, options);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}

fn run(cli: Cli) -> Result<()> {
    let data = load(cli.file.as_ref())?;
    let options = cli.options();

    if cli.print {
        let view = inspect(&data, &options);
        let mode = if cli.only_expanded {
            PlainMode::DefaultExpanded
        } else {
            PlainMode::All
        };
        let mut stdout = io::stdout().lock();
        stdout.write_all(render_plain(&view, mode).as_bytes())?;
        return Ok(());
    }

    run_tui(data, options)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("options: {:?}", cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
