//! Wrapping, alignment, and boxing of styled text.

use colored::{ColoredString, Colorize};
use rf_engine::presenter::{Color, DisplayOptions, Justify, Style};

/// A run of text in one style. `None` marks layout padding, which never
/// takes on the passage style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub style: Option<Style>,
}

impl Fragment {
    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style: Some(style),
        }
    }

    pub fn padding(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// Fragments that must stay on one line, such as `**B-0B**,`.
pub type Word = Vec<Fragment>;

fn word_width(word: &Word) -> usize {
    word.iter().map(Fragment::width).sum()
}

/// One output line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub fragments: Vec<Fragment>,
}

impl Line {
    pub fn padding(text: impl Into<String>) -> Self {
        Self {
            fragments: vec![Fragment::padding(text)],
        }
    }

    pub fn width(&self) -> usize {
        self.fragments.iter().map(Fragment::width).sum()
    }

    #[cfg(test)]
    pub fn plain(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    fn pad(&mut self, columns: usize) {
        if columns > 0 {
            self.fragments.push(Fragment::padding(" ".repeat(columns)));
        }
    }
}

/// A wrapped line before alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    lead: String,
    words: Vec<Word>,
    last: bool,
}

impl Row {
    fn new(lead: &str) -> Self {
        Self {
            lead: lead.to_string(),
            words: Vec::new(),
            last: false,
        }
    }

    fn width(&self) -> usize {
        let words: usize = self.words.iter().map(word_width).sum();
        self.lead.chars().count() + words + self.words.len().saturating_sub(1)
    }
}

/// Strip the common leading whitespace of all non-blank lines.
pub fn dedent(text: &str) -> String {
    let margin = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    text.lines()
        .map(|line| line.get(margin..).unwrap_or_else(|| line.trim_start()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split styled fragments into words, gluing fragments that touch.
pub fn to_words(fragments: &[Fragment]) -> Vec<Word> {
    let mut words: Vec<Word> = Vec::new();
    let mut glue = false;
    for fragment in fragments {
        let text = &fragment.text;
        if text.is_empty() {
            continue;
        }
        let starts_glued = glue && !text.starts_with(char::is_whitespace);
        for (k, piece) in text.split_whitespace().enumerate() {
            let piece = Fragment {
                text: piece.to_string(),
                style: fragment.style,
            };
            match words.last_mut() {
                Some(last) if k == 0 && starts_glued => last.push(piece),
                _ => words.push(vec![piece]),
            }
        }
        glue = !text.ends_with(char::is_whitespace);
    }
    words
}

/// Words of a plain passage.
pub fn words(text: &str, style: Style) -> Vec<Word> {
    to_words(&[Fragment::styled(text, style)])
}

/// Greedy wrap to `width` columns, `prefix` on the first row and `indent`
/// on the rest. A word wider than a row gets a row to itself.
pub fn wrap(words: &[Word], width: usize, prefix: &str, indent: &str) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut current = Row::new(prefix);
    for word in words {
        if !current.words.is_empty() && current.width() + 1 + word_width(word) > width {
            rows.push(current);
            current = Row::new(indent);
        }
        current.words.push(word.clone());
    }
    if !current.words.is_empty() {
        rows.push(current);
    }
    if let Some(last) = rows.last_mut() {
        last.last = true;
    }
    rows
}

/// Turn wrapped rows into aligned lines.
pub fn align(rows: &[Row], width: usize, justify: Justify) -> Vec<Line> {
    rows.iter()
        .map(|row| {
            let slack = width.saturating_sub(row.width());
            let gaps = row.words.len().saturating_sub(1);
            let mut line = Line::default();
            match justify {
                Justify::Center => line.pad(slack / 2),
                Justify::Right => line.pad(slack),
                Justify::Left | Justify::Full => {}
            }
            if !row.lead.is_empty() {
                line.fragments
                    .push(Fragment::styled(row.lead.clone(), Style::new()));
            }
            for (i, word) in row.words.iter().enumerate() {
                if i > 0 {
                    let mut spaces = 1;
                    if justify == Justify::Full && !row.last && gaps > 0 {
                        spaces += slack / gaps + usize::from(i <= slack % gaps);
                    }
                    line.fragments
                        .push(Fragment::styled(" ".repeat(spaces), Style::new()));
                }
                line.fragments.extend(word.iter().cloned());
            }
            line
        })
        .collect()
}

/// Surround lines with a rounded box `width` columns wide.
pub fn boxed(lines: Vec<Line>, width: usize) -> Vec<Line> {
    let inner = width.saturating_sub(4);
    let rule = "─".repeat(width.saturating_sub(2));
    let mut out = Vec::with_capacity(lines.len() + 2);
    out.push(Line::padding(format!("╭{rule}╮")));
    for line in lines {
        let fill = inner.saturating_sub(line.width());
        let mut framed = Line::padding("│ ");
        framed.fragments.extend(line.fragments);
        framed.pad(fill);
        framed.fragments.push(Fragment::padding(" │"));
        out.push(framed);
    }
    out.push(Line::padding(format!("╰{rule}╯")));
    out
}

/// Lay out a plain passage, or a list of them.
pub fn passage(items: &[&str], options: &DisplayOptions, width: usize) -> Vec<Line> {
    let inner = if options.boxed {
        width.saturating_sub(4)
    } else {
        width
    };

    let mut lines = Vec::new();
    for (position, item) in items.iter().enumerate() {
        let (prefix, indent) = options.margins(position);
        let text = dedent(item);
        let rows = wrap(&words(text.trim(), Style::new()), inner, &prefix, &indent);
        lines.extend(align(&rows, inner, options.justify));
    }
    if lines.is_empty() {
        lines.push(Line::default());
    }

    if options.boxed {
        boxed(lines, width)
    } else {
        lines
    }
}

fn to_colored(color: Color) -> colored::Color {
    match color {
        Color::Black => colored::Color::Black,
        Color::Red => colored::Color::Red,
        Color::Green => colored::Color::Green,
        Color::Yellow => colored::Color::Yellow,
        Color::Blue => colored::Color::Blue,
        Color::Magenta => colored::Color::Magenta,
        Color::Cyan => colored::Color::Cyan,
        Color::White => colored::Color::White,
    }
}

fn apply(text: &str, style: Style) -> ColoredString {
    let mut out = text.normal();
    if let Some(fg) = style.fg {
        out = out.color(to_colored(fg));
    }
    if let Some(bg) = style.bg {
        out = out.on_color(to_colored(bg));
    }
    if style.bold {
        out = out.bold();
    }
    if style.italic {
        out = out.italic();
    }
    out
}

/// Render a line with `base` under every non-padding fragment.
pub fn paint(line: &Line, base: Style) -> String {
    line.fragments
        .iter()
        .map(|fragment| match fragment.style {
            Some(style) => {
                let style = base.merge(style);
                if style.is_plain() {
                    fragment.text.clone()
                } else {
                    apply(&fragment.text, style).to_string()
                }
            }
            None => fragment.text.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines.iter().map(Line::plain).collect()
    }

    #[test]
    fn dedent_strips_common_margin() {
        let text = "    # Title\n\n      indented\n    body";
        assert_eq!(dedent(text), "# Title\n\n  indented\nbody");
        assert_eq!(dedent("flush\n  not"), "flush\n  not");
    }

    #[test]
    fn wraps_with_prefix_and_indent() {
        let rows = wrap(&words("one two three four", Style::new()), 10, " • ", "   ");
        let lines = align(&rows, 10, Justify::Left);
        assert_eq!(plain(&lines), vec![" • one two", "   three", "   four"]);
    }

    #[test]
    fn long_words_get_their_own_row() {
        let rows = wrap(&words("a extraordinarily b", Style::new()), 6, "", "");
        let lines = align(&rows, 6, Justify::Left);
        assert_eq!(plain(&lines), vec!["a", "extraordinarily", "b"]);
    }

    #[test]
    fn center_and_right() {
        let rows = wrap(&words("abc", Style::new()), 7, "", "");
        assert_eq!(plain(&align(&rows, 7, Justify::Center)), vec!["  abc"]);
        assert_eq!(plain(&align(&rows, 7, Justify::Right)), vec!["    abc"]);
    }

    #[test]
    fn full_justify_spreads_all_but_last_row() {
        let rows = wrap(&words("aa bb cc dd", Style::new()), 9, "", "");
        let lines = align(&rows, 9, Justify::Full);
        assert_eq!(plain(&lines), vec!["aa  bb cc", "dd"]);
    }

    #[test]
    fn touching_fragments_stay_together() {
        let fragments = [
            Fragment::styled("marked ", Style::new()),
            Fragment::styled("RF-13", Style::new().bold()),
            Fragment::styled(". Next", Style::new()),
        ];
        let words = to_words(&fragments);
        assert_eq!(words.len(), 3);
        assert_eq!(words[1].len(), 2);
        assert_eq!(words[1][0].text, "RF-13");
        assert_eq!(words[1][1].text, ".");
    }

    #[test]
    fn boxes_pad_to_width() {
        let lines = passage(&["hi"], &DisplayOptions::new().boxed(), 8);
        assert_eq!(
            plain(&lines),
            vec!["╭──────╮", "│ hi   │", "╰──────╯"]
        );
    }

    #[test]
    fn numbered_lists() {
        let lines = passage(&["Street", "Tower"], &DisplayOptions::new().numbered(), 40);
        assert_eq!(plain(&lines), vec![" 1 Street", " 2 Tower"]);
    }

    #[test]
    fn empty_passage_is_one_blank_line() {
        let lines = passage(&[""], &DisplayOptions::default(), 40);
        assert_eq!(plain(&lines), vec![""]);
    }

    #[test]
    fn paint_without_style_is_plain() {
        let line = Line {
            fragments: vec![Fragment::styled("plain", Style::new())],
        };
        assert_eq!(paint(&line, Style::new()), "plain");
    }
}
