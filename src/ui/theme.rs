//! Card theme to terminal style mapping.
//!
//! Each [`CardTheme`] variant resolves to a fixed pair of colors: a muted
//! background for card panels and a brighter accent for borders and list
//! markers. The gradient variants keep the original palette's feel by
//! pairing their background with the gradient's far-end color as accent.

use ratatui::style::{Color, Style};

use crate::model::CardTheme;

/// Resolved visual style for one card theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeStyle {
    pub background: Color,
    pub accent: Color,
}

impl ThemeStyle {
    /// Style for a filled card panel.
    pub fn panel(&self) -> Style {
        Style::default().bg(self.background)
    }

    /// Style for borders and accents belonging to this theme.
    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }
}

/// Look up the fixed style for a theme. Total over the closed enum.
pub fn theme_style(theme: CardTheme) -> ThemeStyle {
    match theme {
        CardTheme::Blue => ThemeStyle {
            background: Color::Rgb(24, 42, 66),
            accent: Color::Rgb(97, 175, 239),
        },
        CardTheme::Green => ThemeStyle {
            background: Color::Rgb(26, 54, 38),
            accent: Color::Rgb(140, 200, 120),
        },
        CardTheme::Purple => ThemeStyle {
            background: Color::Rgb(46, 34, 68),
            accent: Color::Rgb(180, 140, 235),
        },
        CardTheme::Orange => ThemeStyle {
            background: Color::Rgb(66, 46, 22),
            accent: Color::Rgb(235, 170, 95),
        },
        CardTheme::GradientBlue => ThemeStyle {
            background: Color::Rgb(20, 52, 78),
            accent: Color::Rgb(95, 215, 230),
        },
        CardTheme::GradientPink => ThemeStyle {
            background: Color::Rgb(72, 34, 44),
            accent: Color::Rgb(240, 180, 120),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_resolves_to_a_distinct_style() {
        let styles: Vec<_> = CardTheme::ALL.iter().map(|&t| theme_style(t)).collect();
        for (i, a) in styles.iter().enumerate() {
            for b in styles.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
