//! Polygrid terminal editor (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer renderer
//! from `polygrid::term`. `polygrid show [PATH]` prints a saved document
//! instead of starting the editor.

use std::fs::{self, OpenOptions};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use polygrid::app::App;
use polygrid::config::{parse_args, AppConfig, Command};
use polygrid::input::{map_mouse_event, should_quit};
use polygrid::term::{FrameBuffer, TerminalRenderer, Viewport};

/// Input poll interval; storage completions are picked up between polls.
const POLL_MS: u64 = 50;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = parse_args(&args, AppConfig::from_env()?)?;

    match command {
        Command::Show { config, path } => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
                .init();
            let text = polygrid::show::run(&config, &path)?;
            print!("{}", text);
            Ok(())
        }
        Command::Run(config) => {
            init_file_logger(&config)?;
            log::info!(
                "starting editor: {}x{} grid, data dir {}",
                config.grid.width,
                config.grid.height,
                config.store.data_dir.display()
            );

            let mut app = App::new(&config)?;
            let mut term = TerminalRenderer::new();
            term.enter()?;

            let result = run(&mut term, &mut app);

            // Always try to restore terminal state.
            let _ = term.exit();
            result
        }
    }
}

/// The editor owns the terminal, so logs go to a file.
fn init_file_logger(config: &AppConfig) -> Result<()> {
    let path = config.log_path();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        app.poll_store();

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        app.render_into(viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        if !event::poll(Duration::from_millis(POLL_MS))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                app.handle_key(key);
            }
            Event::Mouse(mouse) => {
                if let Some(cmd) = map_mouse_event(mouse) {
                    app.handle(cmd);
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
