use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use doorcheck::action::Action;
use doorcheck::components::{Component, Root, RootProps};
use doorcheck::effect::Effect;
use doorcheck::event::{process_raw_event, spawn_event_poller};
use doorcheck::reducer::reducer;
use doorcheck::state::AppState;
use doorcheck::store::Store;
use doorcheck_core::{default_data_path, SnapshotStore};

#[derive(Parser, Debug)]
#[command(name = "doorcheck")]
#[command(about = "A leave-the-house checklist for the terminal")]
struct Args {
    /// Where to store the checklist (defaults to the platform data dir)
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Append logs to this file (the terminal itself is taken over by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let result = run_app(terminal, args);

    // Restore terminal
    disable_raw_mode()?;
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;

    result
}

#[tokio::main]
async fn run_app(
    mut terminal: Terminal<CrosstermBackend<io::Stdout>>,
    args: Args,
) -> io::Result<()> {
    let snapshot = SnapshotStore::new(args.data_file.unwrap_or_else(default_data_path));
    info!(path = %snapshot.path().display(), "loading checklist");

    let mut store = Store::new(AppState::new(snapshot.load()), reducer);
    let mut root = Root::new();

    let cancel = CancellationToken::new();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let poller = spawn_event_poller(
        event_tx,
        Duration::from_millis(10),
        Duration::from_millis(10),
        cancel.clone(),
    );

    let mut should_render = true;
    'main: loop {
        if should_render {
            terminal.draw(|frame| {
                root.render(
                    frame,
                    frame.area(),
                    RootProps {
                        state: store.state(),
                    },
                );
            })?;
            should_render = false;
        }

        let Some(raw) = event_rx.recv().await else {
            break;
        };
        let event = process_raw_event(raw);

        let actions: Vec<Action> = root
            .handle_event(
                &event,
                RootProps {
                    state: store.state(),
                },
            )
            .into_iter()
            .collect();

        // Redraw after every event: in-flight drags live in the components
        // and never reach the store.
        should_render = true;

        for action in actions {
            if matches!(action, Action::Quit) {
                break 'main;
            }
            let result = store.dispatch(action);
            for effect in result.effects {
                match effect {
                    Effect::SaveList => {
                        if let Err(error) = snapshot.save(&store.state().checklist) {
                            warn!(%error, "failed to persist checklist");
                        }
                    }
                }
            }
        }
    }

    cancel.cancel();
    let _ = poller.await;
    terminal.show_cursor()?;
    Ok(())
}
