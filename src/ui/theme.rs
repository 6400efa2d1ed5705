//! Theme definitions for blocklaunch
//!
//! The primary color comes from a Material-style palette (shade name -> hex
//! color) stored as JSON under the `color` key. Everything else is a fixed
//! dark base.

use crate::storage::{keys, Storage};
use anyhow::{bail, Context, Result};
use ratatui::style::{Color, Modifier, Style};
use std::collections::BTreeMap;

/// Shade name ("50".."900", "A100".., or "main") -> `#rrggbb`
pub type Palette = BTreeMap<String, String>;

/// A palette shipped with the launcher
#[derive(Debug, Clone, Copy)]
pub struct NamedPalette {
    pub name: &'static str,
    pub shades: &'static [(&'static str, &'static str)],
}

impl NamedPalette {
    pub fn to_palette(&self) -> Palette {
        self.shades
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    pub fn to_json(&self) -> String {
        // A map of strings always serializes
        serde_json::to_string(&self.to_palette()).unwrap_or_default()
    }
}

pub const BLUE: NamedPalette = NamedPalette {
    name: "blue",
    shades: &[
        ("50", "#e3f2fd"),
        ("100", "#bbdefb"),
        ("200", "#90caf9"),
        ("300", "#64b5f6"),
        ("400", "#42a5f5"),
        ("500", "#2196f3"),
        ("600", "#1e88e5"),
        ("700", "#1976d2"),
        ("800", "#1565c0"),
        ("900", "#0d47a1"),
        ("A100", "#82b1ff"),
        ("A200", "#448aff"),
        ("A400", "#2979ff"),
        ("A700", "#2962ff"),
    ],
};

pub const INDIGO: NamedPalette = NamedPalette {
    name: "indigo",
    shades: &[
        ("300", "#7986cb"),
        ("500", "#3f51b5"),
        ("700", "#303f9f"),
    ],
};

pub const TEAL: NamedPalette = NamedPalette {
    name: "teal",
    shades: &[
        ("300", "#4db6ac"),
        ("500", "#009688"),
        ("700", "#00796b"),
    ],
};

pub const DEEP_ORANGE: NamedPalette = NamedPalette {
    name: "deepOrange",
    shades: &[
        ("300", "#ff8a65"),
        ("500", "#ff5722"),
        ("700", "#e64a19"),
    ],
};

pub const PALETTES: &[NamedPalette] = &[BLUE, INDIGO, TEAL, DEEP_ORANGE];

/// Name reported for a stored palette that matches no built-in one
pub const CUSTOM_PALETTE: &str = "custom";

/// Name of the built-in palette whose main shade matches, if any
pub fn palette_name(palette: &Palette) -> Option<&'static str> {
    let main = main_shade(palette)?;
    PALETTES
        .iter()
        .find(|p| p.shades.iter().any(|(k, v)| *k == "500" && v.eq_ignore_ascii_case(main)))
        .map(|p| p.name)
}

fn main_shade(palette: &Palette) -> Option<&str> {
    palette
        .get("main")
        .or_else(|| palette.get("500"))
        .map(String::as_str)
}

/// Parse `#rrggbb` (or `#rgb`)
pub fn parse_hex(value: &str) -> Result<Color> {
    let hex = value
        .trim()
        .strip_prefix('#')
        .with_context(|| format!("Color {:?} does not start with '#'", value))?;

    if !hex.is_ascii() {
        bail!("Color {:?} is not #rgb or #rrggbb", value);
    }

    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => bail!("Color {:?} is not #rgb or #rrggbb", value),
    };

    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .with_context(|| format!("Color {:?} has a non-hex channel", value))
    };

    Ok(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Complete theme with all required colors
#[derive(Debug, Clone)]
pub struct Theme {
    /// Built-in palette name, or `CUSTOM_PALETTE`
    pub palette: &'static str,

    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub fg_dim: Color,

    // Primary palette
    pub accent: Color,
    pub accent_dim: Color,
    pub accent_light: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&BLUE.to_palette()).unwrap_or_else(|_| Self::base(Color::Blue))
    }
}

impl Theme {
    /// Theme from the stored `color` palette, or blue when none is stored.
    ///
    /// A stored value that is not a palette is an error.
    pub fn from_storage(storage: &dyn Storage) -> Result<Self> {
        match storage.get(keys::COLOR) {
            Some(raw) => {
                let palette: Palette = serde_json::from_str(&raw)
                    .with_context(|| format!("Failed to parse stored theme color {:?}", raw))?;
                Self::from_palette(&palette)
            }
            None => Ok(Self::default()),
        }
    }

    /// Build a theme around a palette's main shade
    pub fn from_palette(palette: &Palette) -> Result<Self> {
        let main = main_shade(palette).context("Palette has neither a \"main\" nor a \"500\" shade")?;
        let accent = parse_hex(main)?;

        let shade = |names: &[&str]| -> Result<Color> {
            match names.iter().find_map(|n| palette.get(*n)) {
                Some(value) => parse_hex(value),
                None => Ok(accent),
            }
        };

        Ok(Self {
            palette: palette_name(palette).unwrap_or(CUSTOM_PALETTE),
            accent_dim: shade(&["dark", "700"])?,
            accent_light: shade(&["light", "300"])?,
            border_focused: accent,
            ..Self::base(accent)
        })
    }

    fn base(accent: Color) -> Self {
        Self {
            palette: CUSTOM_PALETTE,

            bg: Color::Rgb(33, 33, 33),           // #212121
            fg: Color::Rgb(238, 238, 238),        // #eeeeee
            fg_dim: Color::Rgb(158, 158, 158),    // #9e9e9e

            accent,
            accent_dim: accent,
            accent_light: accent,

            success: Color::Rgb(76, 175, 80),     // #4caf50
            warning: Color::Rgb(255, 152, 0),     // #ff9800
            error: Color::Rgb(244, 67, 54),       // #f44336
            info: Color::Rgb(33, 150, 243),       // #2196f3

            border: Color::Rgb(66, 66, 66),       // #424242
            border_focused: accent,
            selection_bg: Color::Rgb(66, 66, 66), // #424242
            selection_fg: Color::Rgb(255, 255, 255),
        }
    }

    // Style helpers for common UI patterns

    /// Background fill for blocks
    pub fn block_style(&self) -> Style {
        Style::default().bg(self.bg)
    }

    /// Default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Dimmed text style
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Title/header style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Title bar: primary color background
    pub fn title_bar(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(self.accent_dim)
            .add_modifier(Modifier::BOLD)
    }

    /// Setting values shown next to their labels
    pub fn value(&self) -> Style {
        Style::default().fg(self.accent_light).bg(self.bg)
    }

    /// Selected item style
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style (unfocused)
    pub fn border(&self) -> Style {
        Style::default().fg(self.border).bg(self.bg)
    }

    /// Border style (focused)
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused).bg(self.bg)
    }

    /// Tab style (inactive)
    pub fn tab_inactive(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Tab style (active), underlined like an indicator
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success).bg(self.bg)
    }

    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning).bg(self.bg)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error).bg(self.bg)
    }

    pub fn info(&self) -> Style {
        Style::default().fg(self.info).bg(self.bg)
    }
}
