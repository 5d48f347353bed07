use std::io::{self, IsTerminal};
use std::time::{Duration, Instant};

use aquaflow_background::AnimationContext;
use aquaflow_config::Config;
use aquaflow_core::{DrawList, Point, Viewport};
use color_eyre::eyre::WrapErr;
use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Stylize},
    symbols::Marker,
    text::Line,
    widgets::canvas::Canvas,
};

mod logging;
mod painter;

use painter::SceneShape;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let (config, source) = Config::load()?;
    let log_file = logging::init(&config)?;
    tracing::info!(log_file = ?log_file, scene = config.scene.name(), "aquaflow starting");
    tracing::info!(%source, "configuration loaded");

    if !io::stdout().is_terminal() {
        tracing::warn!("stdout is not a terminal, animation not started");
        eprintln!("aquaflow: stdout is not a terminal, nothing to draw on");
        return Ok(());
    }

    let terminal = ratatui::init();
    let result = execute!(io::stdout(), EnableMouseCapture, EnableFocusChange)
        .wrap_err("failed to enable mouse capture")
        .and_then(|()| App::new(config).run(terminal));
    if let Err(err) = execute!(io::stdout(), DisableMouseCapture, DisableFocusChange) {
        tracing::warn!(error = %err, "failed to disable mouse capture");
    }
    ratatui::restore();

    tracing::info!("aquaflow stopped");
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Simulation state for the terminal surface.
    context: AnimationContext,
    /// Commands recorded for the current frame.
    draw_list: DrawList,
    /// Loaded configuration.
    config: Config,
    /// Terminal size the pools were last built for.
    last_size: Option<(u16, u16)>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            context: AnimationContext::new(config.scene, config.aqua, config.network),
            draw_list: DrawList::new(),
            config,
            last_size: None,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let frame_interval = self.config.frame_interval();
        self.running = true;
        while self.running {
            let frame_start = Instant::now();
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events(frame_start + frame_interval)?;
        }
        Ok(())
    }

    /// Viewport in world units for a terminal of `cols` x `rows` cells.
    fn viewport_for(&self, cols: u16, rows: u16) -> Viewport {
        Viewport::new(
            cols as f64 * self.config.cell_width,
            rows as f64 * self.config.cell_height,
        )
    }

    /// World position of the centre of a terminal cell.
    fn cell_center(&self, column: u16, row: u16) -> Point {
        Point::new(
            (column as f64 + 0.5) * self.config.cell_width,
            (row as f64 + 0.5) * self.config.cell_height,
        )
    }

    /// Rebuild the pools for a new terminal size.
    fn resize(&mut self, cols: u16, rows: u16) {
        if self.last_size == Some((cols, rows)) {
            return;
        }
        self.last_size = Some((cols, rows));
        let viewport = self.viewport_for(cols, rows);
        tracing::debug!(cols, rows, "terminal resized");
        self.context.resize(viewport);
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.resize(area.width, area.height);

        self.context.frame(&mut self.draw_list);

        let viewport = self.context.viewport();
        let [r, g, b] = self.config.backdrop;
        let scene = SceneShape {
            commands: self.draw_list.commands(),
            viewport,
            backdrop: self.config.backdrop,
            // Braille cells are 2 dots wide and 4 dots tall
            dot_width: self.config.cell_width / 2.0,
            dot_height: self.config.cell_height / 4.0,
        };
        let canvas = Canvas::default()
            .background_color(Color::Rgb(r, g, b))
            .marker(Marker::Braille)
            .x_bounds([0.0, viewport.width])
            .y_bounds([0.0, viewport.height])
            .paint(|ctx| ctx.draw(&scene));
        frame.render_widget(canvas, area);

        let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(area);
        let help = Line::from(vec![
            "q".bold().white(),
            " quit  ".gray(),
            "s".bold().white(),
            format!(" scene: {}", self.context.scene().name()).gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[1]);
    }

    /// Reads crossterm events until `deadline`, the start of the next frame.
    fn handle_crossterm_events(&mut self, deadline: Instant) -> color_eyre::Result<()> {
        loop {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            self.on_event(event::read()?);
            if !self.running || timeout == Duration::ZERO {
                break;
            }
        }
        Ok(())
    }

    /// Dispatch a single terminal event.
    fn on_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
            Event::Mouse(mouse) => self.on_mouse_event(mouse),
            Event::Resize(cols, rows) => self.resize(cols, rows),
            // The pointer left the window
            Event::FocusLost => self.context.clear_pointer(),
            _ => {}
        }
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('s')) => self.cycle_scene(),
            _ => {}
        }
    }

    /// Track the pointer while it moves over the window.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let position = self.cell_center(mouse.column, mouse.row);
                self.context.set_pointer(position);
            }
            _ => {}
        }
    }

    /// Cycle through available scenes.
    fn cycle_scene(&mut self) {
        let next = self.context.scene().next();
        self.context.set_scene(next);
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
