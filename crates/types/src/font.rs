use serde::{Deserialize, Serialize};

/// The base-14 families the script language can address. Family lookup
/// is a substring match on the requested name; anything unrecognized
/// maps to Helvetica.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    #[default]
    Helvetica,
    Times,
    Courier,
}

impl FontFamily {
    pub fn from_name(name: &str) -> Self {
        let n = name.to_ascii_lowercase();
        if n.contains("times") {
            FontFamily::Times
        } else if n.contains("courier") {
            FontFamily::Courier
        } else {
            FontFamily::Helvetica
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    /// Parse a style keyword, case-insensitive. Unrecognized styles
    /// fall back to regular (documented lenient fallback).
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "bold" => FontStyle::Bold,
            "italic" => FontStyle::Italic,
            "bolditalic" => FontStyle::BoldItalic,
            _ => FontStyle::Regular,
        }
    }
}

/// A concrete font resource: family plus style. This is the whole
/// font-provisioning data contract; metrics live behind the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct FontSpec {
    pub family: FontFamily,
    pub style: FontStyle,
}

impl FontSpec {
    pub fn new(family: FontFamily, style: FontStyle) -> Self {
        Self { family, style }
    }

    /// The PostScript base-font name, as registered in a PDF font
    /// dictionary.
    pub fn postscript_name(&self) -> &'static str {
        use FontFamily::*;
        use FontStyle::*;
        match (self.family, self.style) {
            (Helvetica, Regular) => "Helvetica",
            (Helvetica, Bold) => "Helvetica-Bold",
            (Helvetica, Italic) => "Helvetica-Oblique",
            (Helvetica, BoldItalic) => "Helvetica-BoldOblique",
            (Times, Regular) => "Times-Roman",
            (Times, Bold) => "Times-Bold",
            (Times, Italic) => "Times-Italic",
            (Times, BoldItalic) => "Times-BoldItalic",
            (Courier, Regular) => "Courier",
            (Courier, Bold) => "Courier-Bold",
            (Courier, Italic) => "Courier-Oblique",
            (Courier, BoldItalic) => "Courier-BoldOblique",
        }
    }
}
