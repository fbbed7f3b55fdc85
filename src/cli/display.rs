// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the sitesearch CLI.
//!
//! Colors come from OneDark, or One Light when `SITESEARCH_THEME=light` or
//! `COLORFGBG` reports a light background. `NO_COLOR` and a non-TTY stdout
//! give plain text, so piped output never carries escape codes.

use std::sync::OnceLock;

use sitesearch::{Highlighter, Span, EXCERPT_WEIGHT, TITLE_WEIGHT};

/// Inner width of a box, between the two `│` borders.
const BOX_WIDTH: usize = 72;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// What a piece of output means; each tone has a dark and a light color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Box labels and headline numbers.
    Heading,
    /// Scores that include a title hit.
    TitleHit,
    /// Scores that include an excerpt hit but no title hit.
    ExcerptHit,
    /// Content-only scores and box borders.
    Muted,
    /// Item type tags.
    Badge,
    /// Query occurrences inside titles and excerpts.
    Match,
}

impl Tone {
    fn rgb(self) -> (u8, u8, u8) {
        // (OneDark, One Light)
        let (dark, light) = match self {
            Tone::Heading => ((97, 175, 239), (64, 120, 242)),
            Tone::TitleHit => ((152, 195, 121), (80, 161, 79)),
            Tone::ExcerptHit => ((229, 192, 123), (193, 132, 1)),
            Tone::Muted => ((92, 99, 112), (160, 161, 167)),
            Tone::Badge => ((198, 120, 221), (166, 38, 164)),
            Tone::Match => ((255, 215, 0), (152, 104, 1)),
        };
        if light_background() {
            light
        } else {
            dark
        }
    }

    fn code(self) -> String {
        let (r, g, b) = self.rgb();
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

fn light_background() -> bool {
    static LIGHT: OnceLock<bool> = OnceLock::new();
    *LIGHT.get_or_init(|| match std::env::var("SITESEARCH_THEME").as_deref() {
        Ok("light") => true,
        Ok("dark") => false,
        // COLORFGBG is "fg;bg"; background 7 and up (except 8) is light
        _ => std::env::var("COLORFGBG")
            .ok()
            .and_then(|value| value.rsplit(';').next()?.parse::<u8>().ok())
            .is_some_and(|bg| bg >= 7 && bg != 8),
    })
}

fn use_colors() -> bool {
    static COLORS: OnceLock<bool> = OnceLock::new();
    *COLORS.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

/// `text` in the given tone, optionally bold. Plain when colors are off.
pub fn paint(tone: Tone, bold: bool, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let weight = if bold { BOLD } else { "" };
    format!("{}{}{}{}", weight, tone.code(), text, RESET)
}

/// Dimmed secondary text (urls, dates, messages).
pub fn dim(text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", DIM, text, RESET)
    } else {
        text.to_string()
    }
}

/// Printable width of `s`, skipping ANSI escape sequences.
fn visible_len(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            chars.by_ref().find(|&c| c == 'm');
        } else {
            width += 1;
        }
    }
    width
}

/// Pad a possibly styled string with spaces to `width` printable chars.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Shorten to `max` chars, ending with `…` when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

// ═══════════════════════════════════════════════════════════════════════════
// BOXES
// ═══════════════════════════════════════════════════════════════════════════

/// `┌─ LABEL ───┐`
pub fn section_top(label: &str) {
    let label = format!("─ {} ", paint(Tone::Heading, true, label));
    let rule = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&label)));
    println!("{}{}{}", border("┌"), label, border(&format!("{}┐", rule)));
}

/// `│ content   │`
pub fn row(content: &str) {
    println!("{}{}{}", border("│"), pad_right(content, BOX_WIDTH), border("│"));
}

/// `└───────────┘`
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

fn border(text: &str) -> String {
    paint(Tone::Muted, false, text)
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULT FORMATTING
// ═══════════════════════════════════════════════════════════════════════════

/// Text with query matches emphasized: bold in color, `[..]` without.
pub fn highlighted(text: &str, highlighter: &Highlighter) -> String {
    let colors = use_colors();
    highlighter
        .spans(text)
        .into_iter()
        .map(|span| match span {
            Span::Plain(plain) => plain.to_string(),
            Span::Match(matched) if colors => paint(Tone::Match, true, matched),
            Span::Match(matched) => format!("[{}]", matched),
        })
        .collect()
}

/// Right-aligned score, colored by the best field it includes.
pub fn score_value(score: u32) -> String {
    paint(score_tone(score), false, &format!("{:>3}", score))
}

fn score_tone(score: u32) -> Tone {
    if score >= TITLE_WEIGHT {
        Tone::TitleHit
    } else if score >= EXCERPT_WEIGHT {
        Tone::ExcerptHit
    } else {
        Tone::Muted
    }
}

/// Item type tag; `-` for untyped items.
pub fn type_badge(kind: &str) -> String {
    let label = if kind.is_empty() { "-" } else { kind };
    paint(Tone::Badge, false, label)
}
