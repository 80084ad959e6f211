//! Session: Owns the terminal while layout results are being shown.
//!
//! Entering a session switches the terminal to raw mode and (optionally)
//! the alternate screen; dropping it restores the previous state.

use super::output::OutputBuffer;
use crate::render::Canvas;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Configuration for a [`Session`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Target frames per second.
    pub target_fps: u32,
    /// Whether to use alternate screen buffer.
    pub alternate_screen: bool,
    /// Color of drawn outlines.
    pub outline_color: (u8, u8, u8),
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            target_fps: 30,
            alternate_screen: true,
            outline_color: (0, 255, 0),
        }
    }
}

/// Input a session reports back to its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The terminal was resized.
    Resize {
        /// New width.
        width: u16,
        /// New height.
        height: u16,
    },
    /// A printable key was pressed.
    Key(char),
    /// The user asked to quit (`q`, `Esc` or `Ctrl+C`).
    Quit,
}

/// A terminal session for presenting canvases.
pub struct Session {
    /// Configuration.
    config: SessionConfig,
    /// Reused frame output.
    output: OutputBuffer,
    /// Terminal width.
    width: u16,
    /// Terminal height.
    height: u16,
    /// Minimum time between two presented canvases.
    present_interval: Duration,
    /// Earliest moment the next canvas may be shown.
    next_present: Instant,
    /// Canvases shown so far.
    presented: u64,
}

impl Session {
    /// Enter a session with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be switched to raw mode or
    /// prepared for drawing.
    pub fn new() -> io::Result<Self> {
        Self::with_config(SessionConfig::default())
    }

    /// Enter a session with custom configuration.
    ///
    /// If preparing the screen fails, raw mode is switched off again before
    /// the error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn with_config(config: SessionConfig) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        terminal::enable_raw_mode()?;
        let alternate = config.alternate_screen;
        undo_on_error(
            || prepare_screen(alternate),
            || {
                let _ = terminal::disable_raw_mode();
            },
        )?;

        let present_interval = Duration::from_secs(1) / config.target_fps.max(1);
        tracing::debug!(width, height, fps = config.target_fps, "terminal session started");

        Ok(Self {
            config,
            output: OutputBuffer::new(),
            width,
            height,
            present_interval,
            next_present: Instant::now(),
            presented: 0,
        })
    }

    /// Get the terminal width.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the terminal height.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Number of canvases presented so far.
    pub const fn presented(&self) -> u64 {
        self.presented
    }

    /// Wait up to `timeout` for the next input of interest.
    ///
    /// Resizes are tracked by the session before being reported.
    ///
    /// # Errors
    ///
    /// Returns an error if reading terminal events fails.
    pub fn poll_event(&mut self, timeout: Duration) -> io::Result<Option<SessionEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let converted = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Some(SessionEvent::Quit),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(SessionEvent::Quit)
                }
                KeyCode::Char(c) => Some(SessionEvent::Key(c)),
                _ => None,
            },
            Event::Resize(width, height) => {
                self.width = width;
                self.height = height;
                tracing::debug!(width, height, "terminal resized");
                Some(SessionEvent::Resize { width, height })
            }
            _ => None,
        };
        Ok(converted)
    }

    /// Draw a canvas over the whole screen in a single write.
    ///
    /// Canvases are shown at most `target_fps` times per second; when the
    /// previous one went out less than an interval ago, this blocks until
    /// the interval is over.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails.
    pub fn present(&mut self, canvas: &Canvas) -> io::Result<()> {
        let now = Instant::now();
        let due = self.next_present.max(now);
        if due > now {
            std::thread::sleep(due - now);
        }
        self.next_present = due + self.present_interval;

        self.output.clear();
        self.output.clear_screen();
        self.output.set_fg(self.config.outline_color);
        self.output.write_canvas(canvas);
        self.output.reset_attrs();

        let mut stdout = io::stdout().lock();
        self.output.flush_to(&mut stdout)?;
        self.presented += 1;
        Ok(())
    }
}

/// Switch to the alternate screen (if asked) and hide the cursor.
///
/// A failure to hide the cursor leaves the alternate screen again.
fn prepare_screen(alternate: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    if alternate {
        execute!(stdout, EnterAlternateScreen)?;
    }
    undo_on_error(
        || execute!(io::stdout(), cursor::Hide),
        || {
            if alternate {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
            }
        },
    )
}

/// Run a setup step, calling `undo` before handing back its error.
fn undo_on_error<T>(
    step: impl FnOnce() -> io::Result<T>,
    undo: impl FnOnce(),
) -> io::Result<T> {
    step().map_err(|err| {
        tracing::warn!(%err, "terminal setup failed, restoring");
        undo();
        err
    })
}

impl Drop for Session {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show);
        if self.config.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = stdout.flush();
        let _ = terminal::disable_raw_mode();
        tracing::debug!(presented = self.presented, "terminal session ended");
    }
}
