// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the dynseq demo.
//!
//! Boxed sections, padded columns and a handful of theme-aware colors.
//! Respects `NO_COLOR` and drops escape codes entirely when stdout is not a
//! TTY, so piped output stays clean.
//!
//! # Theme detection order
//!
//! 1. `DYNSEQ_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

pub const BOX_WIDTH: usize = 60;

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dark" | "d" => Some(Theme::Dark),
            "light" | "l" => Some(Theme::Light),
            _ => None,
        }
    }

    /// Background index is the last `;` field; 7 and 9..=15 are light.
    fn from_colorfgbg(value: &str) -> Option<Self> {
        let bg: u8 = value.rsplit(';').next()?.parse().ok()?;
        Some(if bg >= 7 && bg != 8 { Theme::Light } else { Theme::Dark })
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

pub fn theme() -> Theme {
    *THEME.get_or_init(|| {
        std::env::var("DYNSEQ_THEME")
            .ok()
            .and_then(|name| Theme::parse(&name))
            .or_else(|| {
                std::env::var("COLORFGBG")
                    .ok()
                    .and_then(|v| Theme::from_colorfgbg(&v))
            })
            .unwrap_or(Theme::Dark)
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// TONES
// ═══════════════════════════════════════════════════════════════════════════

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// What a piece of demo output means, mapped to OneDark / One Light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Heading,
    Border,
    Ok,
    Failure,
    Number,
}

impl Tone {
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (self, theme) {
            (Tone::Heading, Theme::Dark) => (86, 182, 194),
            (Tone::Heading, Theme::Light) => (1, 132, 188),
            (Tone::Border, Theme::Dark) => (92, 99, 112),
            (Tone::Border, Theme::Light) => (160, 161, 167),
            (Tone::Ok, Theme::Dark) => (152, 195, 121),
            (Tone::Ok, Theme::Light) => (80, 161, 79),
            (Tone::Failure, Theme::Dark) => (224, 108, 117),
            (Tone::Failure, Theme::Light) => (228, 86, 73),
            (Tone::Number, Theme::Dark) => (229, 192, 123),
            (Tone::Number, Theme::Light) => (193, 132, 1),
        }
    }

    fn escape(self) -> String {
        let (r, g, b) = self.rgb(theme());
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }
}

/// Colors are off under `NO_COLOR` or when stdout is piped.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

pub fn paint(tone: Tone, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", tone.escape(), text, RESET)
    } else {
        text.to_string()
    }
}

fn paint_bold(tone: Tone, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", BOLD, tone.escape(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Printed width of `s`, skipping SGR escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// `┌─ LABEL ───┐`
pub fn section_top(label: &str) {
    let title = format!("─ {} ", paint_bold(Tone::Heading, label));
    let fill = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&title)));
    println!(
        "{}{}{}",
        paint(Tone::Border, "┌"),
        title,
        paint(Tone::Border, &format!("{}┐", fill))
    );
}

/// `│ content   │`, padded to the box width.
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    let border = paint(Tone::Border, "│");
    println!("{}{}{}{}", border, content, " ".repeat(pad), border);
}

/// Print a `label: value` line inside a section.
pub fn field(label: &str, value: &str) {
    row(&format!(" {} {}", pad_right(&format!("{}:", label), 12), value));
}

pub fn section_bot() {
    let line = format!("└{}┘", "─".repeat(BOX_WIDTH));
    println!("{}", paint(Tone::Border, &line));
}

pub fn pad_left(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", " ".repeat(pad), s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Human-readable byte count.
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Green "ok" or red error text for an operation outcome.
pub fn outcome<T, E: std::fmt::Display>(result: &Result<T, E>) -> String {
    match result {
        Ok(_) => paint(Tone::Ok, "ok"),
        Err(e) => paint(Tone::Failure, &e.to_string()),
    }
}

/// Highlighted number.
pub fn number(value: impl std::fmt::Display) -> String {
    paint(Tone::Number, &value.to_string())
}
