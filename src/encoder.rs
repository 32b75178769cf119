//! QR matrix rendering.
//!
//! Encoding is delegated to the [`qrcode`] crate. This module fixes the
//! symbol parameters and rasterises the resulting module grid into an RGB
//! image, or into a block-character string for the terminal.

use image::{ImageBuffer, Rgb, RgbImage};
use qrcode::{Color, EcLevel, QrCode, Version};

use crate::error::Result;

/// Parameters used to encode and rasterise a QR symbol.
///
/// The defaults are the values the command-line tool always uses:
/// version 5, error correction High, 10 px modules, a 4-module quiet zone,
/// black on white.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QrConfig {
    /// Symbol version (1–40). The symbol never grows past this version.
    pub version: i16,
    pub ec_level: EcLevel,
    /// Width and height of a single module, in pixels.
    pub box_size: u32,
    /// Quiet zone width, in modules.
    pub border: u32,
    pub fill: Rgb<u8>,
    pub background: Rgb<u8>,
}

impl Default for QrConfig {
    fn default() -> Self {
        QrConfig {
            version: 5,
            ec_level: EcLevel::H,
            box_size: 10,
            border: 4,
            fill: Rgb([0, 0, 0]),
            background: Rgb([255, 255, 255]),
        }
    }
}

impl QrConfig {
    /// Number of modules per side for the configured version.
    ///
    /// Only meaningful for versions 1–40; out-of-range versions are rejected
    /// by the encoder before anything is rendered.
    pub fn modules(&self) -> u32 {
        u32::from(self.version.clamp(0, 40).unsigned_abs()) * 4 + 17
    }

    /// Side length in pixels of the rendered image.
    pub fn side(&self) -> u32 {
        qr_side(self, self.modules())
    }
}

/// Returns the pixel side length of a rendered symbol with `modules` modules
/// per side, including the quiet zone on both edges.
pub fn qr_side(config: &QrConfig, modules: u32) -> u32 {
    (modules + 2 * config.border) * config.box_size
}

fn encode(payload: &str, config: &QrConfig) -> Result<QrCode> {
    let code = QrCode::with_version(payload, Version::Normal(config.version), config.ec_level)?;
    log::debug!(
        "encoded {} bytes as version {} ({} modules), ec level {:?}",
        payload.len(),
        config.version,
        code.width(),
        config.ec_level
    );
    Ok(code)
}

/// Encodes `payload` and renders it as an RGB image.
///
/// # Errors
///
/// Returns [`Error::Encode`](crate::error::Error::Encode) when the payload
/// does not fit the configured version and error correction level.
///
/// # Example
///
/// ```
/// use qrlogo::encoder::{render_qr, QrConfig};
///
/// let img = render_qr("https://example.com", &QrConfig::default()).unwrap();
/// assert_eq!(img.dimensions(), (450, 450));
/// ```
pub fn render_qr(payload: &str, config: &QrConfig) -> Result<RgbImage> {
    let code = encode(payload, config)?;
    let width = code.width();
    let colors = code.to_colors();

    debug_assert_eq!(config.modules() as usize, width);
    let side = config.side();
    let border = config.border as i64;
    let box_size = config.box_size.max(1);
    let mut img = ImageBuffer::new(side, side);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let qr_x = (x / box_size) as i64 - border;
        let qr_y = (y / box_size) as i64 - border;
        let dark = (0..width as i64).contains(&qr_x)
            && (0..width as i64).contains(&qr_y)
            && colors[qr_y as usize * width + qr_x as usize] == Color::Dark;
        *pixel = if dark { config.fill } else { config.background };
    }

    Ok(img)
}

/// Encodes `payload` and renders it as text, two block characters per
/// module, with the configured quiet zone.
pub fn render_terminal(payload: &str, config: &QrConfig) -> Result<String> {
    let code = encode(payload, config)?;
    let width = code.width() as i64;
    let border = config.border as i64;
    let mut out = String::new();

    for y in -border..width + border {
        for x in -border..width + border {
            let dark = (0..width).contains(&x)
                && (0..width).contains(&y)
                && code[(x as usize, y as usize)] == Color::Dark;
            let c = if dark { '█' } else { ' ' };
            out.push(c);
            out.push(c);
        }
        out.push('\n');
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_side() {
        let config = QrConfig::default();
        assert_eq!(config.modules(), 37);
        assert_eq!(config.side(), 37 * 10 + 2 * 4 * 10);
    }

    #[test]
    fn test_render_qr_dimensions() {
        let config = QrConfig::default();
        let img = render_qr("https://example.com", &config).unwrap();
        assert_eq!(img.dimensions(), (450, 450));
        assert_eq!(img.dimensions(), (config.side(), config.side()));
    }

    #[test]
    fn test_side_follows_config() {
        let config = QrConfig { version: 2, box_size: 3, border: 1, ..QrConfig::default() };
        assert_eq!(config.modules(), 25);
        let img = render_qr("small", &config).unwrap();
        assert_eq!(img.width(), config.side());
        assert_eq!(config.side(), (25 + 2) * 3);
    }

    #[test]
    fn test_negative_version_is_rejected() {
        let config = QrConfig { version: -3, ..QrConfig::default() };
        assert_eq!(config.modules(), 17);
        assert!(matches!(render_qr("x", &config), Err(Error::Encode(_))));
    }

    #[test]
    fn test_render_qr_quiet_zone_and_finder() {
        let img = render_qr("HELLO WORLD", &QrConfig::default()).unwrap();

        // Quiet zone is background.
        assert_eq!(*img.get_pixel(0, 0), Rgb([255, 255, 255]));
        assert_eq!(*img.get_pixel(39, 39), Rgb([255, 255, 255]));
        // Top-left module of the finder pattern is dark and fills a whole box.
        assert_eq!(*img.get_pixel(40, 40), Rgb([0, 0, 0]));
        assert_eq!(*img.get_pixel(49, 49), Rgb([0, 0, 0]));
        // Every pixel is either fill or background.
        assert!(img
            .pixels()
            .all(|p| *p == Rgb([0, 0, 0]) || *p == Rgb([255, 255, 255])));
    }

    #[test]
    fn test_render_qr_is_deterministic() {
        let config = QrConfig::default();
        let a = render_qr("same input", &config).unwrap();
        let b = render_qr("same input", &config).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_render_qr_custom_colors() {
        let config = QrConfig {
            fill: Rgb([10, 20, 30]),
            background: Rgb([200, 210, 220]),
            ..QrConfig::default()
        };
        let img = render_qr("colors", &config).unwrap();
        assert_eq!(*img.get_pixel(0, 0), Rgb([200, 210, 220]));
        assert_eq!(*img.get_pixel(40, 40), Rgb([10, 20, 30]));
    }

    #[test]
    fn test_render_qr_rejects_oversized_payload() {
        let payload = "x".repeat(200);
        let err = render_qr(&payload, &QrConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Encode(_)));
    }

    #[test]
    fn test_render_terminal_shape() {
        let text = render_terminal("HELLO WORLD", &QrConfig::default()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 45);
        assert!(lines.iter().all(|l| l.chars().count() == 90));
        assert!(lines[4].starts_with("        ██"));
    }
}
