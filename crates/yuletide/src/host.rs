//! Terminal host: surface acquisition, frame pacing and logging.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::tty::IsTty;
use env_logger::{Env, Target};
use ratatui::DefaultTerminal;
use yuletide_canvas::SurfaceError;
use yuletide_scene::FrameScheduler;

/// Take over the terminal as the drawing host.
///
/// Fails when stdout is not a terminal, so the render loop never starts.
pub fn acquire_terminal() -> Result<DefaultTerminal, SurfaceError> {
    ensure_terminal(io::stdout().is_tty())?;
    ratatui::try_init().map_err(|e| SurfaceError::Unavailable(e.to_string()))
}

/// Refuse to draw unless the output is an interactive terminal.
pub fn ensure_terminal(is_tty: bool) -> Result<(), SurfaceError> {
    if is_tty {
        Ok(())
    } else {
        Err(SurfaceError::Unavailable("stdout is not a terminal".to_string()))
    }
}

/// Send log records to `path`; the terminal itself is busy drawing.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_logging(path: &Path) -> color_eyre::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

/// Install file logging, or carry on without it if the file cannot be opened.
///
/// Returns whether logging is active.
pub fn try_init_logging(path: &Path) -> bool {
    match init_logging(path) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("yuletide: logging disabled, {}: {}", path.display(), e);
            false
        }
    }
}

/// Frame scheduler that paces ticks at a fixed interval.
#[derive(Debug)]
pub struct FramePacer {
    interval: Duration,
    /// When the requested tick is due, if one is pending.
    next: Option<Instant>,
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: None,
        }
    }

    /// Deadline of the pending tick, clearing the request.
    pub fn take_deadline(&mut self) -> Option<Instant> {
        self.next.take()
    }
}

impl FrameScheduler for FramePacer {
    fn request_frame(&mut self) {
        self.next = Some(Instant::now() + self.interval);
    }
}
