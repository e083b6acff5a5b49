//! Best-effort loading of the logo and signature images.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use gpa_config::CertificateConfig;
use image::{DynamicImage, ImageFormat, ImageReader};
use tracing::{debug, warn};

use crate::error::CertificateError;

/// Raw image bytes plus where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub data: Vec<u8>,
    pub source: PathBuf,
}

impl Asset {
    #[must_use]
    pub fn new(name: String, data: Vec<u8>, source: PathBuf) -> Self {
        Self { name, data, source }
    }

    #[must_use]
    pub fn bytes_len(&self) -> usize {
        self.data.len()
    }

    fn reader(&self) -> Option<ImageReader<Cursor<&[u8]>>> {
        ImageReader::new(Cursor::new(self.data.as_slice()))
            .with_guessed_format()
            .ok()
    }

    /// Image format sniffed from the bytes.
    #[must_use]
    pub fn format(&self) -> Option<ImageFormat> {
        image::guess_format(&self.data).ok()
    }

    /// Pixel size from the image header, `None` when the bytes are not a
    /// supported image. Only the header is read.
    #[must_use]
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        let (width, height) = self.reader()?.into_dimensions().ok()?;
        (width > 0 && height > 0).then_some((width, height))
    }

    /// Fully decoded pixels.
    #[must_use]
    pub fn decode(&self) -> Option<DynamicImage> {
        match self.reader()?.decode() {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                debug!(name = %self.name, error = %err, "image decode failed");
                None
            }
        }
    }
}

/// Images the layout may place. Either may be absent.
#[derive(Debug, Clone, Default)]
pub struct CertificateAssets {
    pub logo: Option<Asset>,
    pub signature: Option<Asset>,
}

impl CertificateAssets {
    /// Load the configured logo and signature, skipping whatever is missing.
    #[must_use]
    pub fn load(config: &CertificateConfig) -> Self {
        Self {
            logo: try_load_asset(&config.logo_candidates),
            signature: try_load_asset(&config.signature_candidates),
        }
    }
}

/// Try each candidate path in order and return the first readable, non-empty
/// file. Exhausting the list is logged and reported as `None`.
pub fn try_load_asset<P: AsRef<Path>>(candidates: &[P]) -> Option<Asset> {
    for candidate in candidates {
        let path = candidate.as_ref();
        match fs::read(path) {
            Ok(data) if !data.is_empty() => {
                let name = path
                    .file_name()
                    .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
                debug!(path = %path.display(), bytes = data.len(), "asset loaded");
                return Some(Asset::new(name, data, path.to_path_buf()));
            }
            Ok(_) => debug!(path = %path.display(), "asset file is empty"),
            Err(err) => debug!(path = %path.display(), error = %err, "asset candidate skipped"),
        }
    }

    let err = CertificateError::AssetUnavailable {
        candidates: candidates
            .iter()
            .map(|c| c.as_ref().display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    };
    warn!(error = %err, "continuing without image");
    None
}
