use crate::encoder::{render_qr, QrConfig};
use crate::error::{Error, Result};

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageError, RgbImage, RgbaImage};
use std::io;
use std::path::{Path, PathBuf};

/*---- Composition ----*/

/// What happened to the logo during composition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogoOutcome {
    /// No logo path was given.
    NotRequested,
    /// The logo was resized to `side` x `side` and pasted with its top-left
    /// corner at `offset`.
    Applied { side: u32, offset: (u32, u32) },
    /// The logo path did not exist; the QR image was left untouched.
    Missing(PathBuf),
}

/// A finished QR image together with the logo outcome.
#[derive(Clone, Debug)]
pub struct Composition {
    pub image: RgbImage,
    pub logo: LogoOutcome,
}

/// Resizes `logo` to `side` x `side` with colours premultiplied by alpha,
/// so fully transparent pixels do not tint the edges of the visible area.
fn resize_premultiplied(logo: &DynamicImage, side: u32) -> RgbaImage {
    let mut rgba = logo.to_rgba32f();
    for p in rgba.pixels_mut() {
        let a = p[3];
        for c in &mut p.0[..3] {
            *c *= a;
        }
    }

    let mut resized = imageops::resize(&rgba, side, side, FilterType::CatmullRom);
    for p in resized.pixels_mut() {
        let a = p[3].clamp(0.0, 1.0);
        for c in &mut p.0[..3] {
            *c = if a > 0.0 { (*c / a).clamp(0.0, 1.0) } else { 0.0 };
        }
        p[3] = a;
    }

    DynamicImage::ImageRgba32F(resized).to_rgba8()
}

/// Resizes `logo` to a quarter of the QR side and pastes it at the centre.
///
/// The logo's alpha channel is the paste mask. A logo without alpha is
/// treated as fully opaque and replaces the pixels it covers.
///
/// Returns the composited image, the logo side and the paste offset.
pub fn overlay_logo(qr: RgbImage, logo: &DynamicImage) -> (RgbImage, u32, (u32, u32)) {
    let (width, height) = qr.dimensions();
    let side = width / 4;
    let offset = ((width - side) / 2, (height - side) / 2);

    log::debug!(
        "placing {}x{} logo as {side}x{side} at ({}, {})",
        logo.width(),
        logo.height(),
        offset.0,
        offset.1
    );

    if side == 0 {
        return (qr, side, offset);
    }

    let resized = resize_premultiplied(logo, side);
    let mut canvas = DynamicImage::ImageRgb8(qr).to_rgba8();
    imageops::overlay(&mut canvas, &resized, offset.0 as i64, offset.1 as i64);

    (DynamicImage::ImageRgba8(canvas).to_rgb8(), side, offset)
}

/// Overlays the logo at `logo_path`, if any, onto `qr`.
///
/// A logo path that does not exist is not an error: the QR image is returned
/// unchanged with [`LogoOutcome::Missing`] and the caller reports it.
///
/// # Errors
///
/// Returns [`Error::Image`] if the logo exists but cannot be read or decoded.
pub fn compose(qr: RgbImage, logo_path: Option<&Path>) -> Result<Composition> {
    let Some(path) = logo_path else {
        return Ok(Composition { image: qr, logo: LogoOutcome::NotRequested });
    };

    let logo = match image::open(path) {
        Ok(logo) => logo,
        Err(ImageError::IoError(err)) if err.kind() == io::ErrorKind::NotFound => {
            log::debug!("logo '{}' not found, continuing without it", path.display());
            return Ok(Composition {
                image: qr,
                logo: LogoOutcome::Missing(path.to_path_buf()),
            });
        }
        Err(source) => {
            return Err(Error::Image { path: path.to_path_buf(), source });
        }
    };

    let (image, side, offset) = overlay_logo(qr, &logo);
    Ok(Composition { image, logo: LogoOutcome::Applied { side, offset } })
}

/// Renders `content` as a QR code and overlays the optional logo.
///
/// # Example
///
/// ```
/// use qrlogo::encoder::QrConfig;
/// use qrlogo::helper::{generate, LogoOutcome};
///
/// let out = generate("Hello, World!", None, &QrConfig::default()).unwrap();
/// assert_eq!(out.image.dimensions(), (450, 450));
/// assert_eq!(out.logo, LogoOutcome::NotRequested);
/// ```
pub fn generate(content: &str, logo_path: Option<&Path>, config: &QrConfig) -> Result<Composition> {
    let qr = render_qr(content, config)?;
    compose(qr, logo_path)
}

/// Saves `img` to `path`. The format is chosen from the file extension.
///
/// Parent directories are not created.
pub fn save(img: &RgbImage, path: &Path) -> Result<()> {
    img.save(path).map_err(|source| Error::Image { path: path.to_path_buf(), source })?;
    log::debug!("wrote {}x{} image to {}", img.width(), img.height(), path.display());
    Ok(())
}
