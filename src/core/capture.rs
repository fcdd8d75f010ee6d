//! Image capture: turn selected files into embeddable data URIs.

use crate::models::DataUri;
use crate::models::record::MAX_IMAGES;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// A decoded photo, ready for preview and storage.
#[derive(Debug, Clone)]
pub struct CapturedImage {
    /// Position in the original selection.
    pub index: usize,
    pub source: PathBuf,
    pub uri: DataUri,
}

/// Decode up to four selected files in parallel.
///
/// Files past the fourth are dropped. A file that cannot be read or is not a
/// decodable image is left out without notice. Results keep selection order;
/// `on_ready` fires for each image as soon as its own decode finishes.
pub fn capture<P, F>(files: &[P], on_ready: F) -> Vec<DataUri>
where
    P: AsRef<Path> + Sync,
    F: Fn(&CapturedImage) + Sync,
{
    let accepted = &files[..files.len().min(MAX_IMAGES)];

    let slots: Vec<Option<CapturedImage>> = accepted
        .par_iter()
        .enumerate()
        .map(|(index, path)| {
            let image = decode_file(index, path.as_ref())?;
            on_ready(&image);
            Some(image)
        })
        .collect();

    slots.into_iter().flatten().map(|img| img.uri).collect()
}

/// Read one file and check that it really decodes as an image.
fn decode_file(index: usize, path: &Path) -> Option<CapturedImage> {
    let bytes = fs::read(path).ok()?;
    let uri = encode_bytes(&bytes)?;

    Some(CapturedImage {
        index,
        source: path.to_path_buf(),
        uri,
    })
}

/// Encode raw image bytes as a data URI, or `None` for unsupported/corrupt data.
pub fn encode_bytes(bytes: &[u8]) -> Option<DataUri> {
    let format = image::guess_format(bytes).ok()?;
    image::load_from_memory_with_format(bytes, format).ok()?;
    Some(DataUri::encode(format.to_mime_type(), bytes))
}
