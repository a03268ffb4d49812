//! A small Markdown subset: headings, paragraphs, and emphasis.

use rf_engine::presenter::{FormattedOptions, Justify, Style};

use super::layout::{Fragment, Line, align, boxed, dedent, to_words, wrap};

/// A top-level Markdown block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `#` to `######` followed by a space.
    Heading {
        /// Number of leading `#`.
        level: usize,
        /// Heading text, inline markup intact.
        text: String,
    },
    /// Consecutive non-blank lines joined by spaces.
    Paragraph(String),
}

/// Split Markdown into blocks. Soft line breaks inside a paragraph join
/// with a space.
pub fn blocks(markdown: &str) -> Vec<Block> {
    let text = dedent(markdown);
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();

    for line in text.trim().lines() {
        let line = line.trim();
        if line.is_empty() {
            flush(&mut paragraph, &mut blocks);
            continue;
        }
        match heading(line) {
            Some(block) => {
                flush(&mut paragraph, &mut blocks);
                blocks.push(block);
            }
            None => paragraph.push(line),
        }
    }
    flush(&mut paragraph, &mut blocks);
    blocks
}

fn flush(paragraph: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if !paragraph.is_empty() {
        blocks.push(Block::Paragraph(paragraph.join(" ")));
        paragraph.clear();
    }
}

fn heading(line: &str) -> Option<Block> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    let rest = &line[level..];
    if !rest.starts_with(' ') {
        return None;
    }
    Some(Block::Heading {
        level,
        text: rest.trim().to_string(),
    })
}

/// Parse `*italic*`, `**bold**` and `***both***` into styled fragments.
///
/// A run of stars opens emphasis only when it touches the following word
/// and a matching closer exists; anything else is literal text.
pub fn inline(text: &str, base: Style) -> Vec<Fragment> {
    let chars: Vec<char> = text.chars().collect();
    let mut fragments = Vec::new();
    let mut buffer = String::new();
    let mut bold = false;
    let mut italic = false;
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '*' {
            buffer.push(chars[i]);
            i += 1;
            continue;
        }

        let run = chars[i..].iter().take_while(|&&c| c == '*').count();
        let before = i.checked_sub(1).map(|p| chars[p]);
        let after = chars.get(i + run).copied();
        let closes = before.is_some_and(|c| !c.is_whitespace());
        let opens = after.is_some_and(|c| !c.is_whitespace());

        let toggled = match run {
            3 if closes && bold && italic => Some((false, false)),
            2 if closes && bold => Some((false, italic)),
            1 if closes && italic => Some((bold, false)),
            3 if opens && !bold && !italic && has_closer(&chars, i + run, 3) => Some((true, true)),
            2 if opens && !bold && has_closer(&chars, i + run, 2) => Some((true, italic)),
            1 if opens && !italic && has_closer(&chars, i + run, 1) => Some((bold, true)),
            _ => None,
        };

        match toggled {
            Some((b, it)) => {
                push(&mut fragments, &mut buffer, base, bold, italic);
                bold = b;
                italic = it;
            }
            None => buffer.extend(std::iter::repeat_n('*', run)),
        }
        i += run;
    }
    push(&mut fragments, &mut buffer, base, bold, italic);
    fragments
}

fn push(fragments: &mut Vec<Fragment>, buffer: &mut String, base: Style, bold: bool, italic: bool) {
    if buffer.is_empty() {
        return;
    }
    let mut style = base;
    style.bold |= bold;
    style.italic |= italic;
    fragments.push(Fragment::styled(std::mem::take(buffer), style));
}

/// Whether a closing run of exactly `run` stars follows `from`.
fn has_closer(chars: &[char], from: usize, run: usize) -> bool {
    let mut i = from;
    while i < chars.len() {
        if chars[i] != '*' {
            i += 1;
            continue;
        }
        let len = chars[i..].iter().take_while(|&&c| c == '*').count();
        if len == run && i > 0 && !chars[i - 1].is_whitespace() {
            return true;
        }
        i += len;
    }
    false
}

/// Lay out Markdown at `width` columns.
pub fn render(markdown: &str, options: &FormattedOptions, width: usize) -> Vec<Line> {
    let inner = if options.boxed {
        width.saturating_sub(4)
    } else {
        width
    };

    let mut lines = Vec::new();
    for (n, block) in blocks(markdown).iter().enumerate() {
        if n > 0 {
            lines.push(Line::default());
        }
        let (fragments, justify) = match block {
            Block::Heading { level, text } => {
                let style = Style::new().bold();
                let justify = if *level == 1 {
                    Justify::Center
                } else {
                    Justify::Left
                };
                (inline(text, style), justify)
            }
            Block::Paragraph(text) => (inline(text, Style::new()), Justify::Left),
        };
        let rows = wrap(&to_words(&fragments), inner, "", "");
        lines.extend(align(&rows, inner, justify));
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

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(fragments: &[Fragment]) -> Vec<(&str, bool, bool)> {
        fragments
            .iter()
            .map(|f| {
                let style = f.style.unwrap_or_default();
                (f.text.as_str(), style.bold, style.italic)
            })
            .collect()
    }

    #[test]
    fn splits_headings_and_paragraphs() {
        let md = "
            # HOLDING CELL

            You are inside a cramped
            metal cell.

            What do you do?
        ";
        assert_eq!(
            blocks(md),
            vec![
                Block::Heading {
                    level: 1,
                    text: "HOLDING CELL".to_string()
                },
                Block::Paragraph("You are inside a cramped metal cell.".to_string()),
                Block::Paragraph("What do you do?".to_string()),
            ]
        );
    }

    #[test]
    fn hash_without_space_is_text() {
        assert_eq!(
            blocks("#hashtag"),
            vec![Block::Paragraph("#hashtag".to_string())]
        );
    }

    #[test]
    fn emphasis() {
        let fragments = inline("a **B-0B**, *so* ***loud***", Style::new());
        assert_eq!(
            texts(&fragments),
            vec![
                ("a ", false, false),
                ("B-0B", true, false),
                (", ", false, false),
                ("so", false, true),
                (" ", false, false),
                ("loud", true, true),
            ]
        );
    }

    #[test]
    fn isolated_stars_are_literal() {
        let fragments = inline("*** YOU DIED ***", Style::new());
        assert_eq!(texts(&fragments), vec![("*** YOU DIED ***", false, false)]);
    }

    #[test]
    fn unclosed_emphasis_is_literal() {
        let fragments = inline("a *dangling star", Style::new());
        assert_eq!(texts(&fragments), vec![("a *dangling star", false, false)]);
    }

    #[test]
    fn choice_echo() {
        let fragments = inline("*choice:* **View Inventory**", Style::new());
        assert_eq!(
            texts(&fragments),
            vec![
                ("choice:", false, true),
                (" ", false, false),
                ("View Inventory", true, false),
            ]
        );
    }

    #[test]
    fn renders_centered_title() {
        let lines = render("# HI\n\nbody text", &FormattedOptions::default(), 10);
        let plain: Vec<String> = lines.iter().map(Line::plain).collect();
        assert_eq!(plain, vec!["    HI", "", "body text"]);
    }
}
