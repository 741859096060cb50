use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::DefaultTerminal;
use yuletide_canvas::{PixelCanvas, SurfaceError};
use yuletide_config::{Config, ConfigOrigin};
use yuletide_core::Viewport;
use yuletide_scene::{RenderLoop, Scene};

mod host;

use host::FramePacer;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let (config, origin) = Config::load()?;
    if let Some(path) = config.log_path() {
        host::try_init_logging(&path);
    }
    log::info!("{}", origin);
    if let ConfigOrigin::Missing(path) = &origin {
        // Leave a starter file behind for the user to edit.
        match config.save() {
            Ok(()) => log::info!("wrote default config to {}", path.display()),
            Err(e) => log::warn!("could not write default config: {}", e),
        }
    }

    let (cols, rows) = crossterm::terminal::size().unwrap_or_default();
    let mut app = App::new(&config, Viewport::from_cells(cols, rows))?;
    app.launch(host::acquire_terminal())
}

/// The main application which owns the scene and its drawing surface.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Render loop driving the scene.
    render_loop: RenderLoop<StdRng>,
    /// Pixel surface the scene draws into.
    canvas: PixelCanvas,
    /// Schedules the next frame tick.
    pacer: FramePacer,
}

impl App {
    /// Construct a new instance of [`App`] for the given terminal viewport.
    pub fn new(config: &Config, viewport: Viewport) -> color_eyre::Result<Self> {
        let settings = config.scene_settings()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        log::info!("seed {}, speed {}", seed, config.speed.name());

        let scene = Scene::new(viewport, settings, StdRng::seed_from_u64(seed));
        Ok(Self {
            running: false,
            render_loop: RenderLoop::new(scene),
            canvas: PixelCanvas::new(0, 0),
            pacer: FramePacer::new(config.speed.frame_interval()),
        })
    }

    /// Run on the acquired terminal, restoring it afterwards.
    ///
    /// Without a terminal the render loop is never started.
    pub fn launch(
        &mut self,
        terminal: Result<DefaultTerminal, SurfaceError>,
    ) -> color_eyre::Result<()> {
        let terminal = terminal?;
        let result = self.run(terminal);
        ratatui::restore();
        result
    }

    /// Run the application's main loop.
    fn run(&mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        // The host reports its size once at startup, like any later resize.
        let viewport = self.render_loop.scene().viewport();
        self.render_loop
            .scene_mut()
            .handle_resize(viewport, &mut self.canvas);

        self.running = true;
        self.render_loop.start(&mut self.canvas, &mut self.pacer);
        self.present(&mut terminal)?;

        while self.running {
            let Some(deadline) = self.pacer.take_deadline() else {
                break;
            };
            self.handle_crossterm_events(deadline)?;
            if !self.running {
                break;
            }
            self.render_loop.tick(&mut self.canvas, &mut self.pacer);
            self.present(&mut terminal)?;
        }
        log::info!("stopped after {} frames", self.render_loop.frames());
        Ok(())
    }

    /// Blit the canvas to the terminal.
    fn present(&self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        terminal.draw(|frame| frame.render_widget(&self.canvas, frame.area()))?;
        Ok(())
    }

    /// Reads the crossterm events until the next frame is due.
    fn handle_crossterm_events(&mut self, deadline: Instant) -> color_eyre::Result<()> {
        while self.running {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => self.on_resize(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Apply a terminal resize to the scene and its canvas.
    fn on_resize(&mut self, cols: u16, rows: u16) {
        let viewport = Viewport::from_cells(cols, rows);
        if viewport.is_empty() {
            log::debug!("terminal collapsed to {}x{} cells", cols, rows);
        }
        self.render_loop
            .scene_mut()
            .handle_resize(viewport, &mut self.canvas);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
