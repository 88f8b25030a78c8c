mod app;
mod args;
mod ui;

use anyhow::{Context, Result, bail};
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use postdeck_config::Config;
use postdeck_engine::io;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    env,
    io::{Stdout, stdout},
    path::Path,
    process,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut argv = env::args();
    let program = argv.next().unwrap_or_else(|| "postdeck-cli".to_string());
    let args = match args::parse_args(argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", args::usage(&program));
            process::exit(1);
        }
    };

    // Posts path from CLI args or config file; deck settings only come from the file
    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) if args.posts_path.is_some() => {
            log::warn!("Ignoring config file: {e}");
            None
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("{}", args::usage(&program));
            process::exit(1);
        }
    };
    let deck_config = config
        .as_ref()
        .map(|config| config.deck.clone())
        .unwrap_or_default();

    let from_config = args.posts_path.is_none();
    let posts_path = match (args.posts_path, config) {
        (Some(path), _) => path,
        (None, Some(config)) => config.posts_path,
        (None, None) => {
            eprintln!("Error: No posts path provided and no config file found");
            eprintln!("{}", args::usage(&program));
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
    };
    log::info!("Posts path: {}", posts_path.display());

    if let Err(e) = io::validate_posts_dir(&posts_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Posts path '{}'{} is invalid: {e}",
            posts_path.display(),
            source
        );
        process::exit(1);
    }

    if let Some(slug) = args.dump_slug {
        return dump_sections(&posts_path, &slug);
    }

    let mut app = App::new(posts_path, deck_config)?;
    if let Some(slug) = &args.open_slug {
        app.open_slug(slug);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Prints the sections of one post as JSON.
fn dump_sections(posts_path: &Path, slug: &str) -> Result<()> {
    let posts = io::load_posts(posts_path)?;
    let Some(post) = posts.find(slug).and_then(|index| posts.get(index)) else {
        bail!("No post with slug `{slug}` in {}", posts_path.display());
    };
    let json = serde_json::to_string_pretty(&post.sections())
        .with_context(|| format!("Failed to serialize sections of `{slug}`"))?;
    println!("{json}");
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && !app.handle_key(key.code)
        {
            return Ok(());
        }
    }
}
