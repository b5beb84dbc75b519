mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand, QueueableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dino_runner::{GameConfig, Session};

use display::TerminalSurface;

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS

const HINT_PLAYING: &str = "SPACE / ↑ : Jump   H : Hitboxes   Q : Quit";
const HINT_GAME_OVER: &str = "R : Play Again   Q : Quit";

// ── Logging ───────────────────────────────────────────────────────────────────

/// Logs go to stderr so they never land on the game screen; redirect with
/// `2> run.log` and raise the level with `RUST_LOG=debug`.
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")
}

/// `DINO_SEED=<u64>` makes a run reproducible.
fn make_rng() -> StdRng {
    match std::env::var("DINO_SEED") {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(seed) => {
                info!(seed, "using fixed RNG seed");
                StdRng::seed_from_u64(seed)
            }
            Err(_) => {
                warn!(value = %raw, "ignoring DINO_SEED, not an unsigned integer");
                StdRng::from_entropy()
            }
        },
        Err(_) => StdRng::from_entropy(),
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum Flow {
    Quit,
    Restart,
}

/// Drive one session until the player quits or asks for a new run.
///
/// The session is fed three things every frame: queued key presses, the
/// wall-clock time since it started, and a frame tick.  Once it reports game
/// over we stop ticking, draw the banner once and keep only listening for
/// keys.
fn play<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    config: &GameConfig,
    rng: &mut StdRng,
) -> anyhow::Result<Flow> {
    let mut session = Session::new(config.clone()).context("invalid game configuration")?;
    let (cols, rows) = terminal::size().context("reading terminal size")?;
    let mut surface = TerminalSurface::new(cols, rows, config);
    let mut banner_drawn = false;
    let started = Instant::now();

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    loop {
        let frame_start = Instant::now();

        // ── Drain pending input (non-blocking) ────────────────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press,
                    modifiers,
                    ..
                }) => match code {
                    KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
                        session.jump();
                    }
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                        return Ok(Flow::Quit);
                    }
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(Flow::Quit);
                    }
                    KeyCode::Char('r') | KeyCode::Char('R') if !session.running() => {
                        return Ok(Flow::Restart);
                    }
                    KeyCode::Char('h') | KeyCode::Char('H') => surface.toggle_hitboxes(),
                    _ => {}
                },
                Event::Resize(cols, rows) => {
                    surface = TerminalSurface::new(cols, rows, config);
                    banner_drawn = false;
                    out.queue(terminal::Clear(terminal::ClearType::All))?;
                }
                _ => {}
            }
        }

        // ── Wall clock, then one frame ────────────────────────────────────────
        let elapsed_ms = started.elapsed().as_millis() as u64;
        let behind = elapsed_ms.saturating_sub(session.clock_ms());
        session.advance_clock(Duration::from_millis(behind), rng);

        let hint = if session.running() {
            session.tick(&mut surface);
            HINT_PLAYING
        } else {
            if !banner_drawn {
                session.draw_game_over(&mut surface);
                banner_drawn = true;
            }
            HINT_GAME_OVER
        };

        surface.present(out, hint).context("drawing frame")?;

        let spent = frame_start.elapsed();
        if spent < FRAME {
            thread::sleep(FRAME - spent);
        }
    }
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> anyhow::Result<()> {
    let config = GameConfig::default();
    let mut rng = make_rng();

    loop {
        match play(out, rx, &config, &mut rng)? {
            Flow::Quit => break,
            Flow::Restart => info!("starting a new run"),
        }
    }
    Ok(())
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Blocking event reads live on their own thread so the frame loop never
    // waits on input.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
