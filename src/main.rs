//! natview - A terminal front end for the NAT site.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use natview::app::App;
use natview::config::Config;
use natview::format::{self, Helpers};
use natview::pages::{self, PageLayout, SupplySnapshot, ViewId};
use natview::router::{RouteTable, Router, ScrollTarget};
use natview::ui;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "natview")]
#[command(about = "A terminal front end for the NAT site", long_about = None)]
struct Args {
    /// Location to open, e.g. / or /natpaper#supply
    #[arg(default_value = "/")]
    location: String,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Force local/dev mode (otherwise read from NATVIEW_LOCAL)
    #[arg(long)]
    local: bool,

    /// Print the page as plain text instead of starting the interface
    #[arg(long)]
    print: bool,

    /// Wrap width for --print
    #[arg(long, default_value_t = 80)]
    width: usize,

    /// Override the maximum supply shown on the home page
    #[arg(long)]
    max_supply: Option<String>,

    /// Override the remaining supply shown on the home page
    #[arg(long)]
    remaining: Option<String>,

    /// Override the reference fee, in satoshis
    #[arg(long)]
    fee_sats: Option<String>,
}

impl Args {
    fn supply(&self) -> natview::Result<SupplySnapshot> {
        let mut supply = SupplySnapshot::default();
        if let Some(max) = &self.max_supply {
            supply.max_supply = format::parse_integer(max)?;
        }
        if let Some(remaining) = &self.remaining {
            supply.remaining = format::parse_integer(remaining)?;
        }
        if let Some(fee) = &self.fee_sats {
            supply.fee_sats = format::parse_sats(fee)?;
        }
        Ok(supply)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting natview");
    }

    let mut config = Config::from_env();
    if args.local {
        config = config.with_local();
    }
    tracing::debug!("Local mode: {}", config.is_local());

    let supply = args.supply()?;

    if args.print {
        print_page(&config, &supply, &args.location, args.width)?;
        tracing::info!("natview exited");
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let size = terminal.size()?;
    let (width, height) = ui::page_viewport(Rect::new(0, 0, size.width, size.height));
    let res = App::new(config, supply, &args.location, width, height)
        .map_err(anyhow::Error::from)
        .and_then(|app| run_app(&mut terminal, app));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    tracing::info!("natview exited");
    Ok(())
}

/// Render `location` as plain text, starting where the scroll policy lands.
fn print_page(config: &Config, supply: &SupplySnapshot, location: &str, width: usize) -> Result<()> {
    let (_, transition) = Router::new(RouteTable::site(), location)?;
    let helpers = Helpers::new(config);
    let page = pages::build(transition.route.view, &helpers, supply);
    let layout = PageLayout::build(&page, width);

    let start = match transition.scroll_target() {
        ScrollTarget::Anchor { selector, .. } => layout.anchor_line(&selector).unwrap_or_else(|| {
            tracing::warn!("Anchor {} not found on {}", selector, layout.title);
            0
        }),
        ScrollTarget::Saved(position) => position.top,
        ScrollTarget::Top => 0,
    };

    let text = layout.to_plain_text();
    for line in text.lines().skip(start) {
        println!("{}", line);
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let mut pending_g = false; // For 'gg' vim binding

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        let timeout = if app.is_animating() {
            Duration::from_millis(30)
        } else {
            Duration::from_millis(100)
        };

        if !event::poll(timeout)? {
            app.tick();
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };

        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

            // Scrolling
            (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                app.scroll_up(1);
            }
            (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                app.scroll_down(1);
            }
            (KeyModifiers::CONTROL, KeyCode::Char('u')) | (KeyModifiers::NONE, KeyCode::PageUp) => {
                app.scroll_up(app.page_step());
            }
            (KeyModifiers::CONTROL, KeyCode::Char('d'))
            | (KeyModifiers::NONE, KeyCode::PageDown) => {
                app.scroll_down(app.page_step());
            }
            (KeyModifiers::NONE, KeyCode::Char('g')) => {
                if pending_g {
                    app.goto_top();
                    pending_g = false;
                } else {
                    pending_g = true;
                }
                continue;
            }
            (KeyModifiers::SHIFT, KeyCode::Char('G')) | (KeyModifiers::NONE, KeyCode::End) => {
                app.goto_bottom();
            }
            (KeyModifiers::NONE, KeyCode::Home) => app.goto_top(),

            // Routes
            (KeyModifiers::NONE, KeyCode::Char('1')) => app.go_view(ViewId::Home),
            (KeyModifiers::NONE, KeyCode::Char('2')) => app.go_view(ViewId::NatPaper),
            (KeyModifiers::NONE, KeyCode::Tab) => app.next_section(),
            (_, KeyCode::BackTab) => app.prev_section(),

            // History
            (KeyModifiers::NONE, KeyCode::Char('b'))
            | (KeyModifiers::NONE, KeyCode::Backspace)
            | (KeyModifiers::ALT, KeyCode::Left) => app.back(),
            (KeyModifiers::NONE, KeyCode::Char('f')) | (KeyModifiers::ALT, KeyCode::Right) => {
                app.forward();
            }

            // Features
            (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_location(),
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),

            _ => {}
        }
        pending_g = false;
    }
}
