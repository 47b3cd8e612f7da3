//! Quiver - a terminal-based 2D/3D vector visualizer.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use quiver::app::App;
use quiver::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "quiver")]
#[command(version)]
#[command(about = "A terminal-based 2D/3D point and vector visualizer", long_about = None)]
struct Args {
    /// Path to a scene file to load (key = value lines)
    scene: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Output path for PNG snapshots
    #[arg(long, default_value = "quiver.png")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Quiver");
    }

    // Validate path if provided
    if let Some(ref path) = args.scene {
        if !path.exists() {
            eprintln!("Error: Path not found: {}", path.display());
            std::process::exit(1);
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(args.scene, args.output);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Quiver exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Help overlay - any of the close keys dismisses it
                if app.show_help {
                    if matches!(
                        key.code,
                        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')
                    ) {
                        app.show_help = false;
                    }
                    continue;
                }

                // Insert mode - keystrokes go to the focused field
                if app.editor.is_editing() {
                    match key.code {
                        KeyCode::Esc => app.editor.stop_edit(),
                        KeyCode::Enter => {
                            app.editor.stop_edit();
                            app.render();
                        }
                        KeyCode::Tab => app.editor.next_field(),
                        KeyCode::BackTab => app.editor.prev_field(),
                        KeyCode::Left => app.editor.move_left(),
                        KeyCode::Right => app.editor.move_right(),
                        KeyCode::Home => app.editor.move_home(),
                        KeyCode::End => app.editor.move_end(),
                        KeyCode::Backspace => app.editor.backspace(),
                        KeyCode::Delete => app.editor.delete(),
                        KeyCode::Char(c) => app.editor.insert(c),
                        _ => {}
                    }
                    continue;
                }

                // Normal mode
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

                    // Editing
                    (KeyModifiers::NONE, KeyCode::Char('i')) => app.editor.start_edit(),
                    (KeyModifiers::NONE, KeyCode::Tab) => app.editor.next_field(),
                    (KeyModifiers::SHIFT, KeyCode::BackTab)
                    | (KeyModifiers::NONE, KeyCode::BackTab) => app.editor.prev_field(),
                    (KeyModifiers::NONE, KeyCode::Enter) => app.render(),
                    (KeyModifiers::NONE, KeyCode::Char('x')) => app.clear_plot(),

                    // Mode
                    (KeyModifiers::NONE, KeyCode::Char('m')) => app.toggle_mode(),

                    // Pan
                    (KeyModifiers::NONE, KeyCode::Left)
                    | (KeyModifiers::NONE, KeyCode::Char('h')) => app.view.pan(-1.0, 0.0),
                    (KeyModifiers::NONE, KeyCode::Right)
                    | (KeyModifiers::NONE, KeyCode::Char('l')) => app.view.pan(1.0, 0.0),
                    (KeyModifiers::NONE, KeyCode::Up)
                    | (KeyModifiers::NONE, KeyCode::Char('k')) => app.view.pan(0.0, 1.0),
                    (KeyModifiers::NONE, KeyCode::Down)
                    | (KeyModifiers::NONE, KeyCode::Char('j')) => app.view.pan(0.0, -1.0),

                    // Zoom
                    (KeyModifiers::NONE, KeyCode::Char('+'))
                    | (KeyModifiers::SHIFT, KeyCode::Char('+'))
                    | (KeyModifiers::NONE, KeyCode::Char('=')) => app.view.zoom_in(),
                    (KeyModifiers::NONE, KeyCode::Char('-')) => app.view.zoom_out(),

                    // 3D camera
                    (KeyModifiers::NONE, KeyCode::Char('[')) => app.rotate(-1.0, 0.0),
                    (KeyModifiers::NONE, KeyCode::Char(']')) => app.rotate(1.0, 0.0),
                    (KeyModifiers::NONE, KeyCode::Char('{'))
                    | (KeyModifiers::SHIFT, KeyCode::Char('{')) => app.rotate(0.0, -1.0),
                    (KeyModifiers::NONE, KeyCode::Char('}'))
                    | (KeyModifiers::SHIFT, KeyCode::Char('}')) => app.rotate(0.0, 1.0),
                    (KeyModifiers::NONE, KeyCode::Char('r')) => app.reset_view(),

                    // Display toggles
                    (KeyModifiers::NONE, KeyCode::Char('g')) => app.toggle_grid(),
                    (KeyModifiers::NONE, KeyCode::Char('n')) => app.toggle_labels(),
                    (KeyModifiers::NONE, KeyCode::Char('c')) => app.cycle_palette(),
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),

                    // Clipboard and snapshot
                    (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_scene(),
                    (KeyModifiers::NONE, KeyCode::Char('w')) => app.save_snapshot(),

                    // Help
                    (KeyModifiers::NONE, KeyCode::Char('?'))
                    | (KeyModifiers::SHIFT, KeyCode::Char('?')) => app.toggle_help(),

                    // Escape - clear the error message
                    (KeyModifiers::NONE, KeyCode::Esc) => {
                        app.error_message = None;
                    }

                    _ => {}
                }
            }
        }
    }
}
