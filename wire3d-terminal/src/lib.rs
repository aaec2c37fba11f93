/// Terminal host for the wireframe engine
use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use log::info;
use std::io::{stdout, Write};
use std::time::{Duration, Instant};
use wire3d_core::{Engine, FrameBuffer, FrameStats, Surface};

pub mod logger;
pub mod renderer;

pub use logger::StatusLogger;
pub use renderer::CellRenderer;

/// Scale change per `+` / `-` key press
const ZOOM_FACTOR: f32 = 1.25;

#[derive(Debug, Clone, Copy)]
pub struct AppOptions {
    /// Target ticks per second
    pub fps: u32,
    /// Stop after this many frames
    pub max_frames: Option<u64>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            max_frames: None,
        }
    }
}

/// Main application struct for terminal rendering
pub struct TerminalApp {
    engine: Engine,
    renderer: CellRenderer,
    options: AppOptions,
    running: bool,
    paused: bool,
    last_stats: FrameStats,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mut engine: Engine, options: AppOptions) -> Result<Self> {
        let (width, height) = terminal::size().context("querying terminal size")?;
        engine.attach_target(Self::frame_buffer(width, height)?);
        let last_stats = engine.redraw()?;
        let renderer = CellRenderer::new(engine.config().background);

        Ok(Self {
            engine,
            renderer,
            options,
            running: true,
            paused: false,
            last_stats,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    /// Frame buffer for a terminal of the given size, leaving the last row
    /// for the status line
    fn frame_buffer(width: u16, height: u16) -> Result<FrameBuffer> {
        let rows = height.saturating_sub(1).max(1);
        Ok(FrameBuffer::new(width.max(1) as usize, rows as usize)?)
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn run(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        self.engine.detach_target();
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> Result<()> {
        let target_frame_time = Duration::from_millis(1000 / u64::from(self.options.fps.max(1)));

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            while event::poll(Duration::from_millis(0))? {
                self.handle_event(event::read()?)?;
            }

            // Update
            if !self.paused {
                self.last_stats = self.engine.on_tick()?;
            }

            // Render
            self.render()?;

            if let Some(max) = self.options.max_frames {
                if self.engine.frame() >= max {
                    info!("reached {max} frames");
                    self.running = false;
                }
            }

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                ..
            }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('p') => {
                    self.paused = !self.paused;
                }
                KeyCode::Char('+') | KeyCode::Char('=') => self.zoom(ZOOM_FACTOR)?,
                KeyCode::Char('-') => self.zoom(1.0 / ZOOM_FACTOR)?,
                _ => {}
            },
            Event::Resize(width, height) => {
                self.engine.attach_target(Self::frame_buffer(width, height)?);
                self.last_stats = self.engine.redraw()?;
                execute!(stdout(), terminal::Clear(ClearType::All))?;
                info!("resized to {width}x{height}");
            }
            _ => {}
        }
        Ok(())
    }

    fn zoom(&mut self, factor: f32) -> Result<()> {
        let config = *self.engine.config();
        let config = config.with_scale(config.scale * factor);
        self.engine.set_config(config)?;
        self.last_stats = self.engine.redraw()?;
        info!("scale {:.2}", config.scale);
        Ok(())
    }

    fn render(&self) -> Result<()> {
        let buffer = self
            .engine
            .target()
            .context("frame buffer detached while running")?;

        let mut stdout = stdout();
        self.renderer.draw(&mut stdout, buffer)?;

        // Draw status overlay
        let status_row = buffer.height() as u16;
        let mut status = format!(
            "WIRE3D | FPS: {:.1} | frame {} | {} triangles{} | q=Quit p=Pause +/-=Zoom",
            self.fps,
            self.last_stats.frame,
            self.last_stats.triangles_drawn,
            if self.paused { " | PAUSED" } else { "" },
        );
        if let Some(message) = StatusLogger::last_message() {
            status.push_str(" | ");
            status.push_str(&message);
        }
        let status: String = status.chars().take(buffer.width()).collect();

        queue!(
            stdout,
            cursor::MoveTo(0, status_row),
            terminal::Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Yellow),
            Print(status),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}
