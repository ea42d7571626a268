use serde::{Deserialize, Deserializer, Serialize, de};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value }
    }

    /// Parse a color token: `0x`/`#`-prefixed 24-bit hex, or a palette
    /// name. Unknown names resolve to black (documented lenient
    /// fallback); malformed hex is an error.
    pub fn parse(token: &str) -> Result<Color, String> {
        let t = token.trim();
        if let Some(hex) = t
            .strip_prefix("0x")
            .or_else(|| t.strip_prefix("0X"))
            .or_else(|| t.strip_prefix('#'))
        {
            return Self::parse_hex(hex);
        }
        Ok(Self::from_name(t).unwrap_or(BLACK))
    }

    /// Look up a named palette color, case-insensitive.
    pub fn from_name(name: &str) -> Option<Color> {
        let c = match name.to_ascii_lowercase().as_str() {
            "black" => Color::new(0, 0, 0),
            "white" => Color::new(255, 255, 255),
            "red" => Color::new(255, 0, 0),
            "green" => Color::new(0, 255, 0),
            "blue" => Color::new(0, 0, 255),
            "yellow" => Color::new(255, 255, 0),
            "orange" => Color::new(255, 200, 0),
            "pink" => Color::new(255, 175, 175),
            "cyan" => Color::new(0, 255, 255),
            "magenta" => Color::new(255, 0, 255),
            "gray" | "grey" => Color::gray(128),
            "light_gray" | "lightgray" => Color::gray(192),
            "dark_gray" | "darkgray" => Color::gray(64),
            _ => return None,
        };
        Some(c)
    }

    fn parse_hex(hex: &str) -> Result<Color, String> {
        if hex.len() != 6 {
            return Err(format!(
                "Invalid hex color length: expected 6 digits, got {}",
                hex.len()
            ));
        }
        let rgb = u32::from_str_radix(hex, 16)
            .map_err(|e| format!("Invalid hex color '{}': {}", hex, e))?;
        Ok(Color {
            r: (rgb >> 16) as u8,
            g: (rgb >> 8) as u8,
            b: rgb as u8,
        })
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color { r, g, b }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefixed_hex() {
        assert_eq!(Color::parse("0xF0F0F0").unwrap(), Color::gray(240));
        assert_eq!(Color::parse("#000000").unwrap(), BLACK);
        assert_eq!(Color::parse("#ff8800").unwrap(), Color::new(255, 136, 0));
    }

    #[test]
    fn named_palette_is_case_insensitive() {
        assert_eq!(Color::parse("RED").unwrap(), Color::new(255, 0, 0));
        assert_eq!(Color::parse("Light_Gray").unwrap(), Color::gray(192));
    }

    #[test]
    fn unknown_name_falls_back_to_black() {
        assert_eq!(Color::parse("turquoise9000").unwrap(), BLACK);
    }

    #[test]
    fn malformed_hex_is_an_error() {
        assert!(Color::parse("#12").is_err());
        assert!(Color::parse("0xZZZZZZ").is_err());
    }
}
