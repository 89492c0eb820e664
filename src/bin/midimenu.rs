//! midimenu - Device menu simulator.
//!
//! Builds a device registry, opens the device menu on the chosen display and
//! replays a script of encoder and button events, printing every frame.
//!
//! Usage:
//!   midimenu -e "+1 +1 -1 select"                   # studio rig, 3-row display
//!   midimenu -c rig.json -e "+2 back"               # devices from a config file
//!   midimenu --display scrolling-line -e "-1 -1"    # single scrolling line
//!   midimenu --resume 3 -e "+1"                     # return from device 3's submenu

use clap::{Parser, ValueEnum};
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

use midimenu::config::MenuConfig;
use midimenu::input::{ActionResult, parse_script};
use midimenu::menu::{
    DeviceMenu, DisplayMode, MenuContext, RenderFrame, RenderSink, SelectionSlot,
};
use midimenu::source::mock::DeviceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DisplayArg {
    Windowed,
    ScrollingLine,
}

/// Device menu simulator.
#[derive(Parser)]
#[command(name = "midimenu", about = "MIDI device menu simulator")]
struct Args {
    /// Rig configuration file (JSON). Defaults to the built-in studio rig.
    #[arg(short, long, value_name = "PATH")]
    config: Option<String>,

    /// Display type, overriding the config file.
    #[arg(long, value_enum)]
    display: Option<DisplayArg>,

    /// Visible rows on a windowed display, overriding the config file.
    #[arg(long, value_name = "N")]
    rows: Option<usize>,

    /// Enter the menu as if returning from the submenu of hosted device UID.
    #[arg(long, value_name = "UID")]
    resume: Option<u32>,

    /// Event script, e.g. "+1 +1 -1 select back".
    #[arg(short, long, value_name = "SCRIPT", default_value = "")]
    events: String,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

/// Initializes logging on stderr so frames on stdout stay readable.
/// Default level is WARN. Use -v for debug and -vv for trace.
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("midimenu={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints frames to stdout as they are rendered.
struct StdoutSink {
    frames: usize,
}

impl RenderSink for StdoutSink {
    fn render(&mut self, frame: RenderFrame) {
        self.frames += 1;
        match frame {
            RenderFrame::Rows(rows) => {
                println!("+----------------------");
                for (row, label) in rows.labels.iter().enumerate() {
                    let marker = if rows.highlighted == Some(row) { '>' } else { ' ' };
                    println!("|{} {}", marker, label);
                }
                println!("+----------------------");
            }
            RenderFrame::ScrollingText(label) => println!("[ {} ]", label),
        }
    }
}

/// Applies command-line overrides on top of the loaded display settings.
fn resolve_display(
    config: DisplayMode,
    arg: Option<DisplayArg>,
    rows: Option<usize>,
) -> DisplayMode {
    let current_rows = match config {
        DisplayMode::Windowed { visible_rows } => visible_rows,
        DisplayMode::ScrollingLine => midimenu::menu::DEFAULT_VISIBLE_ROWS,
    };
    let windowed = match arg {
        Some(DisplayArg::Windowed) => true,
        Some(DisplayArg::ScrollingLine) => false,
        None => config.is_windowed(),
    };
    if windowed {
        DisplayMode::Windowed {
            visible_rows: rows.unwrap_or(current_rows),
        }
    } else {
        DisplayMode::ScrollingLine
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let mut config = match &args.config {
        Some(path) => match MenuConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config from '{}': {}", path, e);
                std::process::exit(1);
            }
        },
        None => MenuConfig::default(),
    };
    config.display = resolve_display(config.display, args.display, args.rows);
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let events = match parse_script(&args.events) {
        Ok(events) => events,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let registry = config.build_registry();
    info!(
        "Rig: display={:?}, upstream_usb={}, devices={}",
        config.display,
        config.upstream_usb,
        registry.hosted().len()
    );

    let selection = match args.resume {
        Some(uid) => SelectionSlot::remembering(DeviceId::Hosted(uid)),
        None => SelectionSlot::new(),
    };
    let mut selection = selection.with_listener(|item: &DeviceId| {
        info!(?item, "selected device changed");
    });
    let mut sink = StdoutSink { frames: 0 };
    let mut menu = DeviceMenu::new(config.display);

    let mut ctx = MenuContext::new(&registry, &mut selection, &mut sink);
    if let Err(e) = menu.begin(&mut ctx, args.resume.is_some()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    // Windowed sessions are drawn by the caller after entry
    if menu.display().is_windowed() {
        menu.draw(&mut ctx);
    }

    for event in events {
        debug!(?event, "replaying");
        let result = menu.handle_event(&mut ctx, event);
        match result {
            ActionResult::DealtWith | ActionResult::NotDealtWith => {}
            ActionResult::EnterSubmenu | ActionResult::GoUp => println!("-> {:?}", result),
        }
        if result == ActionResult::GoUp {
            break;
        }
    }

    info!(frames = sink.frames, cursor = menu.cursor(), "session finished");
}
