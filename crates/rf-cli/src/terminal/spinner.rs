//! Spinner styles for each animation kind.

use std::time::Duration;

use indicatif::ProgressStyle;
use rf_engine::presenter::Spinner;

/// Frames in order. The last entry is shown once the spinner finishes.
pub fn ticks(kind: Spinner) -> &'static [&'static str] {
    match kind {
        Spinner::Dots => &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "],
        Spinner::Line => &["-", "\\", "|", "/", " "],
        Spinner::Arc => &["◜", "◠", "◝", "◞", "◡", "◟", " "],
        Spinner::Clock => &[
            "🕛", "🕐", "🕑", "🕒", "🕓", "🕔", "🕕", "🕖", "🕗", "🕘", "🕙", "🕚", " ",
        ],
        Spinner::Moon => &["🌑", "🌒", "🌓", "🌔", "🌕", "🌖", "🌗", "🌘", " "],
        Spinner::Earth => &["🌍", "🌎", "🌏", " "],
        Spinner::SimpleDots => &[".  ", ".. ", "...", "   ", "   "],
    }
}

/// Time each frame stays on screen.
pub fn interval(kind: Spinner) -> Duration {
    let millis = match kind {
        Spinner::Dots | Spinner::Moon => 80,
        Spinner::Line => 130,
        Spinner::Arc => 100,
        Spinner::Clock | Spinner::Earth => 180,
        Spinner::SimpleDots => 400,
    };
    Duration::from_millis(millis)
}

/// Style for a spinner next to its message, or the bare message.
pub fn style(kind: Option<Spinner>) -> ProgressStyle {
    match kind {
        Some(kind) => ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(ticks(kind)),
        None => ProgressStyle::default_spinner()
            .template("{msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_animates() {
        for kind in Spinner::ALL {
            // at least two frames plus the finishing one
            assert!(ticks(kind).len() >= 3, "{kind:?}");
            assert!(interval(kind) > Duration::ZERO);
        }
    }

    #[test]
    fn finished_frame_is_blank() {
        for kind in Spinner::ALL {
            let last = ticks(kind).last().unwrap();
            assert!(last.trim().is_empty(), "{kind:?}");
        }
    }
}
