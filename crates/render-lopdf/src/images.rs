//! Image file probing and embedding.
//!
//! JPEG files are passed through untouched as `DCTDecode` streams. PNG
//! files keep their zlib-compressed scanlines and are declared as
//! `FlateDecode` with a PNG predictor, so neither format is ever
//! re-encoded. Only 8-bit non-interlaced grayscale and RGB PNGs are
//! accepted.

use std::fs;
use std::path::Path;

use pagescript_render_core::RenderError;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    DeviceGray,
    DeviceRgb,
}

impl ColorSpace {
    pub fn pdf_name(self) -> &'static str {
        match self {
            ColorSpace::DeviceGray => "DeviceGray",
            ColorSpace::DeviceRgb => "DeviceRGB",
        }
    }

    pub fn components(self) -> u8 {
        match self {
            ColorSpace::DeviceGray => 1,
            ColorSpace::DeviceRgb => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Raw JPEG file contents.
    Dct,
    /// Concatenated PNG IDAT payload, still zlib-compressed and
    /// scanline-filtered. Needs `DecodeParms` with predictor 15.
    FlateWithPngPredictor,
}

#[derive(Debug, Clone)]
pub struct EmbeddedImage {
    pub width: u32,
    pub height: u32,
    pub color_space: ColorSpace,
    pub encoding: Encoding,
    pub data: Vec<u8>,
}

fn resource_err(path: &Path, msg: &str) -> RenderError {
    RenderError::Resource(format!("{}: {msg}", path.display()))
}

/// Reads an image file and prepares it for embedding as an XObject.
pub fn load(path: &Path) -> Result<EmbeddedImage, RenderError> {
    let bytes = fs::read(path)
        .map_err(|e| RenderError::Resource(format!("{}: {e}", path.display())))?;
    if bytes.starts_with(&PNG_SIGNATURE) {
        load_png(path, &bytes)
    } else if bytes.starts_with(&[0xFF, 0xD8]) {
        load_jpeg(path, bytes)
    } else {
        Err(resource_err(path, "unsupported image format (expected PNG or JPEG)"))
    }
}

fn read_u32(bytes: &[u8], off: usize) -> Option<u32> {
    let chunk: [u8; 4] = bytes.get(off..off + 4)?.try_into().ok()?;
    Some(u32::from_be_bytes(chunk))
}

fn read_u16(bytes: &[u8], off: usize) -> Option<u16> {
    let chunk: [u8; 2] = bytes.get(off..off + 2)?.try_into().ok()?;
    Some(u16::from_be_bytes(chunk))
}

fn load_png(path: &Path, bytes: &[u8]) -> Result<EmbeddedImage, RenderError> {
    let truncated = || resource_err(path, "truncated PNG");

    // IHDR is required to be the first chunk.
    let width = read_u32(bytes, 16).ok_or_else(truncated)?;
    let height = read_u32(bytes, 20).ok_or_else(truncated)?;
    let bit_depth = *bytes.get(24).ok_or_else(truncated)?;
    let color_type = *bytes.get(25).ok_or_else(truncated)?;
    let interlace = *bytes.get(28).ok_or_else(truncated)?;

    if bit_depth != 8 {
        return Err(resource_err(path, "only 8-bit PNGs are supported"));
    }
    if interlace != 0 {
        return Err(resource_err(path, "interlaced PNGs are not supported"));
    }
    let color_space = match color_type {
        0 => ColorSpace::DeviceGray,
        2 => ColorSpace::DeviceRgb,
        _ => {
            return Err(resource_err(
                path,
                "only grayscale and RGB PNGs are supported (no palette or alpha)",
            ));
        }
    };

    let mut data = Vec::new();
    let mut off = 8;
    loop {
        let len = read_u32(bytes, off).ok_or_else(truncated)? as usize;
        let kind = bytes.get(off + 4..off + 8).ok_or_else(truncated)?;
        match kind {
            b"IDAT" => {
                let payload = bytes.get(off + 8..off + 8 + len).ok_or_else(truncated)?;
                data.extend_from_slice(payload);
            }
            b"IEND" => break,
            _ => {}
        }
        off += 12 + len;
    }
    if data.is_empty() {
        return Err(resource_err(path, "PNG has no image data"));
    }

    Ok(EmbeddedImage {
        width,
        height,
        color_space,
        encoding: Encoding::FlateWithPngPredictor,
        data,
    })
}

fn load_jpeg(path: &Path, bytes: Vec<u8>) -> Result<EmbeddedImage, RenderError> {
    let truncated = || resource_err(path, "truncated JPEG");

    let mut off = 2;
    loop {
        if *bytes.get(off).ok_or_else(truncated)? != 0xFF {
            return Err(resource_err(path, "malformed JPEG marker stream"));
        }
        let marker = *bytes.get(off + 1).ok_or_else(truncated)?;
        match marker {
            // Standalone markers carry no length field.
            0x01 | 0xD0..=0xD8 => off += 2,
            // Baseline and progressive frame headers.
            0xC0 | 0xC1 | 0xC2 => {
                let height = read_u16(bytes.as_slice(), off + 5).ok_or_else(truncated)?;
                let width = read_u16(bytes.as_slice(), off + 7).ok_or_else(truncated)?;
                let components = *bytes.get(off + 9).ok_or_else(truncated)?;
                let color_space = match components {
                    1 => ColorSpace::DeviceGray,
                    3 => ColorSpace::DeviceRgb,
                    _ => return Err(resource_err(path, "unsupported JPEG component count")),
                };
                return Ok(EmbeddedImage {
                    width: u32::from(width),
                    height: u32::from(height),
                    color_space,
                    encoding: Encoding::Dct,
                    data: bytes,
                });
            }
            _ => {
                let len = read_u16(bytes.as_slice(), off + 2).ok_or_else(truncated)? as usize;
                off += 2 + len;
            }
        }
    }
}
