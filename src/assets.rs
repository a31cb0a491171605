//! Bundled image assets.
//!
//! Product cards reference their picture by asset key (`"3.jpeg"`). Keys are
//! resolved through an [`AssetSource`], decoded into a small RGB thumbnail
//! and handed back to the UI thread by the [`AssetLoader`], which runs every
//! request on its own worker thread.

use std::{
    collections::HashMap,
    fs, io,
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
    time::{Duration, Instant},
};

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender};
use log::{debug, warn};

use crate::error::{Result, StoreError};

/// Default thumbnail bounds, in pixels.
pub const THUMB_WIDTH: u32 = 32;
pub const THUMB_HEIGHT: u32 = 16;

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// Provides the raw bytes of a bundled resource.
pub trait AssetSource: Send + Sync {
    fn open(&self, key: &str) -> Result<Vec<u8>>;
}

/// Reads assets from `<root>/images/<key>`.
#[derive(Debug, Clone)]
pub struct DirAssetSource {
    root: PathBuf,
}

impl DirAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File backing the given key.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join("images").join(key)
    }
}

impl AssetSource for DirAssetSource {
    fn open(&self, key: &str) -> Result<Vec<u8>> {
        // Keys are plain file names; anything that could leave images/ is unknown.
        if key.is_empty() || key.contains(['/', '\\']) || key == ".." {
            return Err(StoreError::AssetNotFound { key: key.to_string() });
        }

        fs::read(self.path_for(key)).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::AssetNotFound { key: key.to_string() },
            _ => StoreError::AssetIo {
                key: key.to_string(),
                source: e,
            },
        })
    }
}

/// Serves assets from memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetSource {
    assets: HashMap<String, Vec<u8>>,
}

impl MemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, bytes: Vec<u8>) {
        self.assets.insert(key.into(), bytes);
    }

    pub fn with(mut self, key: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert(key, bytes);
        self
    }
}

impl AssetSource for MemoryAssetSource {
    fn open(&self, key: &str) -> Result<Vec<u8>> {
        self.assets
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::AssetNotFound { key: key.to_string() })
    }
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// A decoded, downscaled RGB image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// Row-major pixels, `width * height` entries.
    pub pixels: Vec<[u8; 3]>,
}

impl DecodedImage {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y * self.width + x) as usize).copied()
    }
}

/// Decode `bytes` and shrink the result to fit `max_width` x `max_height`,
/// keeping the aspect ratio.
pub fn decode_thumbnail(key: &str, bytes: &[u8], max_width: u32, max_height: u32) -> Result<DecodedImage> {
    let image = image::load_from_memory(bytes).map_err(|e| StoreError::AssetDecode {
        key: key.to_string(),
        source: e,
    })?;

    let thumb = image.thumbnail(max_width, max_height).to_rgb8();
    let (width, height) = thumb.dimensions();
    let pixels = thumb.pixels().map(|p| p.0).collect();

    Ok(DecodedImage {
        width,
        height,
        pixels,
    })
}

/// Read and decode one asset synchronously.
pub fn load_image(source: &dyn AssetSource, key: &str, max_width: u32, max_height: u32) -> Result<DecodedImage> {
    let bytes = source.open(key)?;
    decode_thumbnail(key, &bytes, max_width, max_height)
}

/// Body of one background load. Returns `None` as soon as `cancelled` is
/// seen: before reading, between reading and decoding, and after decoding.
fn run_load(
    source: &dyn AssetSource,
    key: &str,
    cancelled: &AtomicBool,
    max_width: u32,
    max_height: u32,
) -> Option<Result<DecodedImage>> {
    if cancelled.load(Ordering::SeqCst) {
        return None;
    }
    let bytes = match source.open(key) {
        Ok(bytes) => bytes,
        Err(e) => return (!cancelled.load(Ordering::SeqCst)).then_some(Err(e)),
    };
    if cancelled.load(Ordering::SeqCst) {
        return None;
    }
    let result = decode_thumbnail(key, &bytes, max_width, max_height);
    (!cancelled.load(Ordering::SeqCst)).then_some(result)
}

// ---------------------------------------------------------------------------
// Background loader
// ---------------------------------------------------------------------------

/// Outcome of a background load.
#[derive(Debug)]
pub enum AssetEvent {
    Loaded { key: String, image: DecodedImage },
    Failed { key: String, error: StoreError },
}

impl AssetEvent {
    pub fn key(&self) -> &str {
        match self {
            AssetEvent::Loaded { key, .. } | AssetEvent::Failed { key, .. } => key,
        }
    }
}

/// Fire-and-forget image loading keyed by asset key.
///
/// Each request runs on its own thread and reports back through a channel
/// drained by [`AssetLoader::poll`]. A cancelled request never produces an
/// event.
pub struct AssetLoader {
    source: Arc<dyn AssetSource>,
    tx: Sender<AssetEvent>,
    rx: Receiver<AssetEvent>,
    pending: HashMap<String, Arc<AtomicBool>>,
    max_width: u32,
    max_height: u32,
}

impl AssetLoader {
    pub fn new(source: Arc<dyn AssetSource>) -> Self {
        Self::with_thumbnail_size(source, THUMB_WIDTH, THUMB_HEIGHT)
    }

    pub fn with_thumbnail_size(source: Arc<dyn AssetSource>, max_width: u32, max_height: u32) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self {
            source,
            tx,
            rx,
            pending: HashMap::new(),
            max_width,
            max_height,
        }
    }

    /// Start loading `key` unless a load for it is already in flight.
    /// Returns whether a new load was started.
    pub fn request(&mut self, key: &str) -> bool {
        if self.pending.contains_key(key) {
            return false;
        }

        let cancelled = Arc::new(AtomicBool::new(false));
        self.pending.insert(key.to_string(), cancelled.clone());

        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let job_key = key.to_string();
        let (max_width, max_height) = (self.max_width, self.max_height);

        let spawned = thread::Builder::new()
            .name(format!("asset-{key}"))
            .spawn(move || {
                let Some(result) = run_load(source.as_ref(), &job_key, &cancelled, max_width, max_height)
                else {
                    debug!("Dropping cancelled load of asset {job_key}");
                    return;
                };
                let event = match result {
                    Ok(image) => AssetEvent::Loaded { key: job_key, image },
                    Err(error) => AssetEvent::Failed { key: job_key, error },
                };
                // The receiver only goes away together with the loader.
                let _ = tx.send(event);
            });

        if let Err(e) = spawned {
            warn!("Could not spawn loader thread for asset {key}: {e}");
            let _ = self.tx.send(AssetEvent::Failed {
                key: key.to_string(),
                error: StoreError::AssetIo {
                    key: key.to_string(),
                    source: e,
                },
            });
        }

        true
    }

    /// Cancel the in-flight load of `key`. Returns false if none was pending.
    pub fn cancel(&mut self, key: &str) -> bool {
        match self.pending.remove(key) {
            Some(flag) => {
                flag.store(true, Ordering::SeqCst);
                true
            }
            None => false,
        }
    }

    /// Cancel every in-flight load.
    pub fn cancel_all(&mut self) {
        for (_, flag) in self.pending.drain() {
            flag.store(true, Ordering::SeqCst);
        }
    }

    pub fn is_pending(&self, key: &str) -> bool {
        self.pending.contains_key(key)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Drain finished loads without blocking.
    pub fn poll(&mut self) -> Vec<AssetEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            if let Some(event) = self.accept(event) {
                events.push(event);
            }
        }
        events
    }

    /// Block until the next finished load or until `timeout` elapses.
    pub fn poll_timeout(&mut self, timeout: Duration) -> Option<AssetEvent> {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(remaining) {
                Ok(event) => {
                    if let Some(event) = self.accept(event) {
                        return Some(event);
                    }
                }
                Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => return None,
            }
        }
    }

    /// Keep events for loads that are still wanted.
    fn accept(&mut self, event: AssetEvent) -> Option<AssetEvent> {
        self.pending.remove(event.key()).map(|_| event)
    }
}

impl Drop for AssetLoader {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_source_rejects_path_traversal() {
        let source = DirAssetSource::new("/nonexistent");
        for key in ["", "..", "../secret", "a/b.jpeg"] {
            let err = source.open(key).unwrap_err();
            assert!(matches!(err, StoreError::AssetNotFound { .. }), "{key}");
        }
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode_thumbnail("bad.jpeg", b"definitely not an image", 8, 8).unwrap_err();
        assert!(err.is_asset_failure());
        assert_eq!(err.asset_key(), Some("bad.jpeg"));
    }

    #[test]
    fn pixel_out_of_range_is_none() {
        let img = DecodedImage {
            width: 1,
            height: 1,
            pixels: vec![[1, 2, 3]],
        };
        assert_eq!(img.pixel(0, 0), Some([1, 2, 3]));
        assert_eq!(img.pixel(1, 0), None);
        assert_eq!(img.pixel(0, 1), None);
    }

    /// Cancels the load from inside `open`, as if the card left the screen
    /// while the bytes were being read.
    struct CancelOnOpen {
        cancelled: Arc<AtomicBool>,
    }

    impl AssetSource for CancelOnOpen {
        fn open(&self, _key: &str) -> Result<Vec<u8>> {
            self.cancelled.store(true, Ordering::SeqCst);
            Ok(b"not an image either".to_vec())
        }
    }

    #[test]
    fn cancel_during_read_skips_decode() {
        let cancelled = Arc::new(AtomicBool::new(false));
        let source = CancelOnOpen {
            cancelled: cancelled.clone(),
        };
        // Decoding these bytes would yield Some(Err(AssetDecode)).
        assert!(run_load(&source, "6.jpeg", &cancelled, 8, 8).is_none());
    }

    #[test]
    fn uncancelled_load_reports_result() {
        let source = MemoryAssetSource::new();
        let cancelled = AtomicBool::new(false);
        let result = run_load(&source, "6.jpeg", &cancelled, 8, 8);
        assert!(matches!(result, Some(Err(StoreError::AssetNotFound { .. }))));
    }
}
