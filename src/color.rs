use tauri::utils::config::Color;

use crate::{Error, Result, fallback};

/// Normalized color with each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba {
        red: 0.0,
        green: 0.0,
        blue: 0.0,
        alpha: 0.0,
    };

    /// Parse a hex color specification.
    ///
    /// Surrounding whitespace and one leading `#` are stripped; the rest must
    /// be exactly 6 (opaque RGB) or 8 (RGBA, last byte is alpha) hex digits.
    /// Anything else is `Error::InvalidColorFormat` — the caller picks a
    /// fallback, a color is never fabricated here.
    pub fn parse(raw: &str) -> Result<Rgba> {
        let hex = raw.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidColorFormat(raw.to_string()));
        }

        let value = u32::from_str_radix(hex, 16)
            .map_err(|_| Error::InvalidColorFormat(raw.to_string()))?;

        match hex.len() {
            6 => Ok(Rgba {
                red: channel((value >> 16) as u8),
                green: channel((value >> 8) as u8),
                blue: channel(value as u8),
                alpha: 1.0,
            }),
            8 => Ok(Rgba {
                red: channel((value >> 24) as u8),
                green: channel((value >> 16) as u8),
                blue: channel((value >> 8) as u8),
                alpha: channel(value as u8),
            }),
            _ => Err(Error::InvalidColorFormat(raw.to_string())),
        }
    }

    /// Convert to the window-level color used by the native paint property.
    pub fn to_window_color(self) -> Color {
        Color(
            to_byte(self.red),
            to_byte(self.green),
            to_byte(self.blue),
            to_byte(self.alpha),
        )
    }
}

#[inline]
fn channel(byte: u8) -> f64 {
    byte as f64 / 255.0
}

#[inline]
fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round() as u8
}

/// A successfully parsed color, keeping the normalized `#`-prefixed hex text
/// for CSS emission alongside the numeric channels.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedColor {
    pub hex: String,
    pub rgba: Rgba,
}

impl ResolvedColor {
    pub fn parse(raw: &str) -> Result<ResolvedColor> {
        let rgba = Rgba::parse(raw)?;
        let digits = raw.trim().trim_start_matches('#');
        Ok(ResolvedColor {
            hex: format!("#{digits}"),
            rgba,
        })
    }
}

/// Pick the color source by fixed precedence (theme color, then generic
/// background, then splash background; first non-empty wins), then parse the
/// winner once. A malformed winner yields no color plus the diagnostic;
/// lower-precedence settings are not consulted after a non-empty match.
pub fn resolve_from_settings(
    theme_color: Option<&str>,
    background_color: Option<&str>,
    splash_background_color: Option<&str>,
) -> (Option<ResolvedColor>, Option<Error>) {
    let Some(raw) = fallback::first_non_empty([theme_color, background_color, splash_background_color])
    else {
        return (None, None);
    };

    match ResolvedColor::parse(raw) {
        Ok(color) => (Some(color), None),
        Err(err) => (None, Some(err)),
    }
}
