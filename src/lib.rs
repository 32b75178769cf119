//! # qrlogo
//!
//! Generate QR code images with an optional logo pasted at the centre.
//!
//! `qrlogo` encodes text or URLs into a version 5 QR code with the High error
//! correction level, renders it with 10 px modules and a 4-module quiet zone,
//! and optionally overlays a logo scaled to a quarter of the code's width.
//! High error correction keeps the code scannable with the centre covered.
//!
//! ## Features
//!
//! - Fixed, reproducible rendering (`450 x 450` px with the default settings).
//! - Logo overlay using the logo's own alpha channel as the paste mask.
//! - A missing logo file is reported and skipped rather than failing.
//! - Output format chosen from the file extension (PNG, JPEG, BMP, ...).
//! - Terminal preview of the code.
//!
//! ## Example
//!
//! Generate a QR code with a logo and save it:
//!
//! ```no_run
//! use std::path::Path;
//! use qrlogo::{encoder::QrConfig, helper};
//!
//! let out = helper::generate(
//!     "https://example.com",
//!     Some(Path::new("logo.png")),
//!     &QrConfig::default(),
//! )?;
//! helper::save(&out.image, Path::new("qr.png"))?;
//! # Ok::<(), qrlogo::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`encoder`]: QR encoding and rasterisation.
//! - [`helper`]: Logo composition and saving.
//! - [`viewer`]: Opening results in the system image viewer.

pub mod encoder;
pub mod error;
pub mod helper;
pub mod viewer;

pub use error::{Error, Result};
