//! The terminal frontend.

mod input;
mod layout;
mod markdown;
mod spinner;

use std::io::{self, BufRead, IsTerminal, Write};
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{self, Clear, ClearType};
use log::debug;
use rf_engine::choice::INVALID_INPUT_NOTICE;
use rf_engine::presenter::{Color, DisplayOptions, FormattedOptions, PauseOptions, Spinner, Style};
use rf_engine::{EngineConfig, EngineError, EngineResult, Presenter};

pub use input::restore;
use layout::{Line, paint, passage};

/// How the player talks to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// A keyboard on a TTY, read in raw mode.
    Interactive,
    /// Whole lines from a pipe or file.
    Lines,
}

/// A [`Presenter`] on stdout.
pub struct TerminalPresenter {
    config: EngineConfig,
    mode: Mode,
    input: Box<dyn BufRead>,
    out: Box<dyn Write>,
}

impl TerminalPresenter {
    /// Pick the input mode from whether stdin and stdout are terminals.
    pub fn new(config: EngineConfig) -> Self {
        let stdin = io::stdin();
        if stdin.is_terminal() && io::stdout().is_terminal() {
            debug!("interactive terminal");
            Self {
                config,
                mode: Mode::Interactive,
                input: Box::new(stdin.lock()),
                out: Box::new(io::stdout()),
            }
        } else {
            debug!("line mode");
            Self::lines(config, stdin.lock(), io::stdout())
        }
    }

    /// Read whole lines from `input` and write uncoloured text to `out`.
    fn lines(
        config: EngineConfig,
        input: impl BufRead + 'static,
        out: impl Write + 'static,
    ) -> Self {
        colored::control::set_override(false);
        Self {
            config,
            mode: Mode::Lines,
            input: Box::new(input),
            out: Box::new(out),
        }
    }

    fn width(&self) -> usize {
        let columns = match self.mode {
            Mode::Interactive => terminal::size().ok().map(|(columns, _)| usize::from(columns)),
            Mode::Lines => None,
        };
        self.config.line_width(columns)
    }

    fn emit(&mut self, lines: &[Line], base: Style) -> EngineResult<()> {
        for line in lines {
            writeln!(self.out, "{}", paint(line, base))?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// One line of input without its line ending. EOF is an interrupt.
    fn next_line(&mut self) -> EngineResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EngineError::UserInterrupt);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn notice(&mut self) -> EngineResult<()> {
        let style = Style::new().bold().fg(Color::White).on(Color::Red);
        self.display(INVALID_INPUT_NOTICE, &DisplayOptions::new().with_style(style))
    }

    fn select_line(&mut self, labels: &[&str]) -> EngineResult<usize> {
        for (n, label) in labels.iter().enumerate() {
            writeln!(self.out, "{:>2}) {label}", n + 1)?;
        }
        loop {
            write!(self.out, "Enter choice [1-{}]: ", labels.len())?;
            self.out.flush()?;
            let line = self.next_line()?;
            writeln!(self.out)?;
            match line.trim().parse::<usize>() {
                Ok(n) if (1..=labels.len()).contains(&n) => return Ok(n - 1),
                _ => self.notice()?,
            }
        }
    }
}

impl Presenter for TerminalPresenter {
    fn display(&mut self, text: &str, options: &DisplayOptions) -> EngineResult<()> {
        self.display_items(&[text], options)
    }

    fn display_items(&mut self, items: &[&str], options: &DisplayOptions) -> EngineResult<()> {
        let lines = passage(items, options, self.width());
        self.emit(&lines, options.style)
    }

    fn display_formatted(
        &mut self,
        text: &str,
        options: &FormattedOptions,
    ) -> EngineResult<()> {
        let lines = markdown::render(text, options, self.width());
        self.emit(&lines, options.style)
    }

    fn select(&mut self, labels: &[&str]) -> EngineResult<usize> {
        if labels.is_empty() {
            return Err(EngineError::InvalidArgument("nothing to select".into()));
        }
        match self.mode {
            Mode::Interactive => input::select(&mut self.out, labels),
            Mode::Lines => self.select_line(labels),
        }
    }

    fn read_text(&mut self, prompt: &str) -> EngineResult<String> {
        match self.mode {
            Mode::Interactive => input::read_line(&mut self.out, prompt),
            Mode::Lines => {
                write!(self.out, "{prompt}: ")?;
                self.out.flush()?;
                let line = self.next_line()?;
                writeln!(self.out)?;
                Ok(line)
            }
        }
    }

    fn clear(&mut self) -> EngineResult<()> {
        match self.mode {
            Mode::Interactive => execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))?,
            Mode::Lines => writeln!(self.out)?,
        }
        Ok(())
    }

    fn pause(&mut self, message: &str, options: &PauseOptions) -> EngineResult<()> {
        let layout = DisplayOptions::new().with_justify(options.justify);
        let lines = passage(&[message], &layout, self.width());
        self.emit(&lines, options.style)?;
        match self.mode {
            Mode::Interactive => input::wait_for_key(),
            Mode::Lines => Ok(()),
        }
    }

    fn spin(
        &mut self,
        duration: Duration,
        message: &str,
        spinner: Option<Spinner>,
    ) -> EngineResult<()> {
        match self.mode {
            Mode::Interactive => input::spin(duration, message, spinner),
            Mode::Lines => {
                if !message.is_empty() {
                    writeln!(self.out, "{message}")?;
                    self.out.flush()?;
                }
                thread::sleep(duration);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rf_engine::presenter::Justify;

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Rc<RefCell<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    fn presenter(input: &'static str) -> (TerminalPresenter, Captured) {
        let out = Captured::default();
        let config = EngineConfig::default().with_max_width(40);
        (
            TerminalPresenter::lines(config, input.as_bytes(), out.clone()),
            out,
        )
    }

    #[test]
    fn numbered_menu_is_one_based() {
        let (mut ui, out) = presenter("2\n");
        assert_eq!(ui.select(&["North", "South"]).unwrap(), 1);
        let text = out.text();
        assert!(text.contains(" 1) North"));
        assert!(text.contains(" 2) South"));
        assert!(text.contains("Enter choice [1-2]: "));
    }

    #[test]
    fn invalid_menu_input_is_reprompted() {
        let (mut ui, out) = presenter("0\nthree\n3\n");
        assert_eq!(ui.select(&["a", "b", "c"]).unwrap(), 2);
        assert_eq!(out.text().matches(INVALID_INPUT_NOTICE).count(), 2);
    }

    #[test]
    fn eof_is_an_interrupt() {
        let (mut ui, _) = presenter("");
        assert!(ui.select(&["a"]).unwrap_err().is_interrupt());
        assert!(ui.read_text("Name").unwrap_err().is_interrupt());
    }

    #[test]
    fn empty_menu_is_rejected() {
        let (mut ui, _) = presenter("1\n");
        assert!(matches!(ui.select(&[]), Err(EngineError::InvalidArgument(_))));
    }

    #[test]
    fn read_text_strips_line_ending() {
        let (mut ui, out) = presenter("Ada\r\n");
        assert_eq!(ui.read_text("Name").unwrap(), "Ada");
        assert!(out.text().starts_with("Name: "));
    }

    #[test]
    fn pause_does_not_consume_input() {
        let (mut ui, out) = presenter("1\n");
        let options = PauseOptions {
            justify: Justify::Right,
            ..PauseOptions::default()
        };
        ui.pause("Onward", &options).unwrap();
        assert_eq!(out.text().lines().next().unwrap().trim_start(), "Onward");
        assert_eq!(ui.select(&["only"]).unwrap(), 0);
    }

    #[test]
    fn text_wraps_to_configured_width() {
        let (mut ui, out) = presenter("");
        let text = "word ".repeat(20);
        ui.display(&text, &DisplayOptions::default()).unwrap();
        assert!(out.text().lines().all(|line| line.chars().count() <= 40));
        assert!(out.text().lines().count() > 1);
    }

    #[test]
    fn formatted_text_has_no_markers() {
        let (mut ui, out) = presenter("");
        ui.display_formatted("*choice:* **View Inventory**", &FormattedOptions::default())
            .unwrap();
        assert_eq!(out.text(), "choice: View Inventory\n");
    }

    #[test]
    fn spinner_prints_message_in_line_mode() {
        let (mut ui, out) = presenter("");
        ui.spin(Duration::from_millis(1), "Working", Some(Spinner::Dots))
            .unwrap();
        assert_eq!(out.text(), "Working\n");
    }
}
