//! Built-in colour themes. The selected theme is a display preference only and
//! has no effect on ledger state.

use std::fmt;

/// An RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    const fn hex(value: u32) -> Self {
        Self((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgb,
    pub card: Rgb,
    pub accent: Rgb,
    pub warning: Rgb,
    pub danger: Rgb,
    pub text_primary: Rgb,
    pub text_secondary: Rgb,
}

pub const THEMES: [Theme; 4] = [
    Theme {
        name: "Dark",
        background: Rgb::hex(0x0D0D0D),
        card: Rgb::hex(0x1A1A1A),
        accent: Rgb::hex(0x00D26A),
        warning: Rgb::hex(0xFFBE0B),
        danger: Rgb::hex(0xFF4757),
        text_primary: Rgb::hex(0xFFFFFF),
        text_secondary: Rgb::hex(0x888888),
    },
    Theme {
        name: "Light",
        background: Rgb::hex(0xF5F5F5),
        card: Rgb::hex(0xFFFFFF),
        accent: Rgb::hex(0x00B859),
        warning: Rgb::hex(0xE5A800),
        danger: Rgb::hex(0xE5384D),
        text_primary: Rgb::hex(0x1A1A1A),
        text_secondary: Rgb::hex(0x666666),
    },
    Theme {
        name: "Ocean",
        background: Rgb::hex(0x0A1628),
        card: Rgb::hex(0x152238),
        accent: Rgb::hex(0x00B4D8),
        warning: Rgb::hex(0xFFB703),
        danger: Rgb::hex(0xFF6B6B),
        text_primary: Rgb::hex(0xFFFFFF),
        text_secondary: Rgb::hex(0x7B8CA3),
    },
    Theme {
        name: "Purple",
        background: Rgb::hex(0x1A1025),
        card: Rgb::hex(0x2D1B3D),
        accent: Rgb::hex(0xBB86FC),
        warning: Rgb::hex(0xFFB86C),
        danger: Rgb::hex(0xFF5555),
        text_primary: Rgb::hex(0xFFFFFF),
        text_secondary: Rgb::hex(0x9580A5),
    },
];

impl Theme {
    /// Looks up a theme by persisted index, falling back to the first theme.
    pub fn by_index(index: i64) -> &'static Theme {
        usize::try_from(index)
            .ok()
            .and_then(|idx| THEMES.get(idx))
            .unwrap_or(&THEMES[0])
    }

    /// Case-insensitive lookup by name, returning the index and theme.
    pub fn by_name(name: &str) -> Option<(usize, &'static Theme)> {
        let needle = name.trim();
        THEMES
            .iter()
            .enumerate()
            .find(|(_, theme)| theme.name.eq_ignore_ascii_case(needle))
    }

    pub fn all() -> &'static [Theme] {
        &THEMES
    }
}

impl Default for Theme {
    fn default() -> Self {
        THEMES[0]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
