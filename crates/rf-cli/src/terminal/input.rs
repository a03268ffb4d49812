//! Raw-mode keyboard input for interactive terminals.

use std::io::{self, IsTerminal, Write};
use std::time::{Duration, Instant};

use crossterm::cursor::{self, MoveToColumn, MoveUp};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use indicatif::{ProgressBar, ProgressDrawTarget};
use rf_engine::presenter::Spinner;
use rf_engine::{EngineError, EngineResult};

use super::spinner;

/// Raw mode for as long as the guard lives.
struct RawMode;

impl RawMode {
    fn enter() -> EngineResult<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        restore();
    }
}

/// Leave raw mode and show the cursor again.
pub fn restore() {
    terminal::disable_raw_mode().ok();
    if io::stdout().is_terminal() {
        execute!(io::stdout(), cursor::Show).ok();
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Block until a key is pressed. Ctrl+C is an interrupt.
fn next_key() -> EngineResult<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            if is_interrupt(&key) {
                return Err(EngineError::UserInterrupt);
            }
            return Ok(key);
        }
    }
}

fn draw_menu(out: &mut impl Write, labels: &[&str], current: usize) -> io::Result<()> {
    for (n, label) in labels.iter().enumerate() {
        queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        if n == current {
            queue!(out, Print(format!(" > {label}\r\n")))?;
        } else {
            queue!(out, Print(format!("   {label}\r\n")))?;
        }
    }
    out.flush()
}

/// Arrow-key menu. Digits jump to an entry, Enter confirms it.
pub fn select(out: &mut impl Write, labels: &[&str]) -> EngineResult<usize> {
    if labels.is_empty() {
        return Err(EngineError::InvalidArgument("nothing to select".into()));
    }
    let _raw = RawMode::enter()?;
    let last = labels.len() - 1;
    let mut current = 0;
    draw_menu(out, labels, current)?;

    loop {
        let key = next_key()?;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                current = if current == 0 { last } else { current - 1 };
            }
            KeyCode::Down | KeyCode::Char('j') => {
                current = if current == last { 0 } else { current + 1 };
            }
            KeyCode::Char(c) => match c.to_digit(10) {
                Some(d) if (1..=labels.len()).contains(&(d as usize)) => current = d as usize - 1,
                _ => continue,
            },
            KeyCode::Enter => return Ok(current),
            _ => continue,
        }
        let rows = u16::try_from(labels.len()).unwrap_or(u16::MAX);
        queue!(out, MoveUp(rows))?;
        draw_menu(out, labels, current)?;
    }
}

/// Wait for any key.
pub fn wait_for_key() -> EngineResult<()> {
    let _raw = RawMode::enter()?;
    next_key().map(|_| ())
}

/// A single-line editor with backspace.
pub fn read_line(out: &mut impl Write, prompt: &str) -> EngineResult<String> {
    let _raw = RawMode::enter()?;
    execute!(out, Print(format!("{prompt}: ")), cursor::Show)?;
    let mut input = String::new();

    loop {
        let key = next_key()?;
        match key.code {
            KeyCode::Enter => break,
            KeyCode::Backspace => {
                if input.pop().is_some() {
                    execute!(out, Print("\u{8} \u{8}"))?;
                }
            }
            KeyCode::Char(c) => {
                input.push(c);
                execute!(out, Print(c))?;
            }
            _ => {}
        }
    }
    execute!(out, Print("\r\n"))?;
    Ok(input)
}

/// Animate `kind` next to `message` for `duration`, watching for Ctrl+C.
pub fn spin(duration: Duration, message: &str, kind: Option<Spinner>) -> EngineResult<()> {
    let _raw = RawMode::enter()?;
    let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
    bar.set_style(spinner::style(kind));
    bar.set_message(message.to_string());
    if let Some(kind) = kind {
        bar.enable_steady_tick(spinner::interval(kind));
    }

    let started = Instant::now();
    while let Some(left) = duration.checked_sub(started.elapsed()) {
        if left.is_zero() {
            break;
        }
        if event::poll(left)?
            && let Event::Key(key) = event::read()?
            && is_interrupt(&key)
        {
            bar.finish_and_clear();
            return Err(EngineError::UserInterrupt);
        }
    }
    bar.finish_and_clear();
    Ok(())
}
