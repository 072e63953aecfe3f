use std::fmt;

/// An RGBA color as used in style values.
///
/// Components are in the unit range. Colors render and parse in CSS notation
/// because the animation surface passes color values through as style text.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn rgb_u32(rgb: u32) -> Self {
        let r = (rgb & 0xff0000) >> 16;
        let g = (rgb & 0xff00) >> 8;
        let b = rgb & 0xff;
        Color::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Parses `#rgb`, `#rrggbb`, and `#rrggbbaa` notation.
    ///
    /// `None` for anything else. Unsupported notations degrade to the value
    /// being skipped by the caller, they are never an error.
    pub fn parse(text: &str) -> Option<Self> {
        let hex = text.strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let component = |i: usize| {
                    let d = u32::from_str_radix(&hex[i..i + 1], 16).unwrap();
                    (d * 17) as f32 / 255.0
                };
                Some(Self::rgb(component(0), component(1), component(2)))
            }
            6 | 8 => {
                let component =
                    |i: usize| u32::from_str_radix(&hex[i..i + 2], 16).unwrap() as f32 / 255.0;
                let alpha = if hex.len() == 8 { component(6) } else { 1.0 };
                Some(Self::new(component(0), component(2), component(4), alpha))
            }
            _ => None,
        }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    fn to_u8(component: f32) -> u8 {
        (component.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = (
            Self::to_u8(self.red),
            Self::to_u8(self.green),
            Self::to_u8(self.blue),
        );
        if self.alpha >= 1.0 {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "rgba({r}, {g}, {b}, {})", self.alpha)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn parses_hex_notations() {
        assert_eq!(Color::parse("#fff"), Some(Color::WHITE));
        assert_eq!(Color::parse("#000000"), Some(Color::BLACK));
        assert_eq!(
            Color::parse("#ff8000"),
            Some(Color::rgb_u32(0xff8000)),
        );
        assert_eq!(
            Color::parse("#00000080").map(|c| (c.alpha * 255.0).round() as u8),
            Some(0x80)
        );
    }

    #[test]
    fn rejects_unsupported_notation() {
        assert_eq!(Color::parse("red"), None);
        assert_eq!(Color::parse("#12"), None);
        assert_eq!(Color::parse("#ggg"), None);
        assert_eq!(Color::parse(""), None);
    }

    #[test]
    fn renders_css_notation() {
        assert_eq!(Color::rgb_u32(0xff8000).to_string(), "#ff8000");
        assert_eq!(
            Color::BLACK.with_alpha(0.5).to_string(),
            "rgba(0, 0, 0, 0.5)"
        );
    }
}
