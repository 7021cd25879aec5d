//! Light/dark theme and its terminal palette.

use ratatui::style::Color;

/// Persisted marker for dark mode.
pub const DARK: &str = "dark";
/// Persisted marker for light mode.
pub const LIGHT: &str = "light";

/// Display theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors used by the renderer for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub selected_bg: Color,
    pub done: Color,
    pub danger: Color,
}

impl Theme {
    /// Theme for a dark-mode flag.
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Parse the persisted marker. Anything other than `dark`/`light` is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            DARK => Some(Self::Dark),
            LIGHT => Some(Self::Light),
            _ => None,
        }
    }

    /// Convert to the persisted marker.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => LIGHT,
            Self::Dark => DARK,
        }
    }

    /// Icon on the theme toggle: a moon offers dark mode, a sun offers light mode.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Light => "\u{263e}",
            Self::Dark => "\u{2600}",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Light => Palette {
                background: Color::Reset,
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                border: Color::Gray,
                selected_bg: Color::LightBlue,
                done: Color::Green,
                danger: Color::Red,
            },
            Self::Dark => Palette {
                background: Color::Black,
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                border: Color::DarkGray,
                selected_bg: Color::Indexed(236),
                done: Color::LightGreen,
                danger: Color::LightRed,
            },
        }
    }
}
