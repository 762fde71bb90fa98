use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub const fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                grid: Rgb::new(0x2d, 0x3b, 0x4e),
                text: Rgb::new(0x9c, 0xa3, 0xaf),
                angle_lines: Rgb::new(0xE0, 0xDC, 0xD5),
            },
            Self::Light => Palette {
                grid: Rgb::new(0xE5, 0xE7, 0xEB),
                text: Rgb::new(0x4B, 0x55, 0x63),
                angle_lines: Rgb::new(0xd1, 0xd5, 0xdb),
            },
        }
    }
}

/// Chart colors that follow the theme. Baked into each chart build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub grid: Rgb,
    pub text: Rgb,
    pub angle_lines: Rgb,
}

pub const ACCENT: Rgb = Rgb::new(0x74, 0x56, 0xF1);
pub const ACCENT_DEEP: Rgb = Rgb::new(0x5e, 0x45, 0xc4);
pub const NAVY: Rgb = Rgb::new(0x1a, 0x2c, 0x42);
pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_returns_to_start() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn parse_accepts_mixed_case() {
        assert_eq!(Theme::parse(" Light "), Some(Theme::Light));
        assert_eq!(Theme::parse("DARK"), Some(Theme::Dark));
        assert_eq!(Theme::parse("sepia"), None);
    }

    #[test]
    fn palettes_differ_per_theme() {
        assert_eq!(Theme::Dark.palette().grid.hex(), "#2d3b4e");
        assert_eq!(Theme::Light.palette().text.hex(), "#4b5563");
        assert_ne!(Theme::Dark.palette(), Theme::Light.palette());
    }
}
