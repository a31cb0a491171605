use thiserror::Error;

/// Error type for storefront operations.
///
/// - `AssetNotFound` — no bundled resource under the requested key
/// - `AssetIo` — the resource exists but could not be read
/// - `AssetDecode` — the bytes are not a decodable image
/// - `Terminal` — terminal setup, drawing or teardown failed
///
/// The three asset variants together form the only failure the session
/// itself recognises; they are recovered locally by the UI.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Asset not found: {key}")]
    AssetNotFound { key: String },

    #[error("Failed to read asset {key}: {source}")]
    AssetIo {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode asset {key}: {source}")]
    AssetDecode {
        key: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl StoreError {
    /// True for every variant that means "image unavailable".
    pub fn is_asset_failure(&self) -> bool {
        matches!(
            self,
            StoreError::AssetNotFound { .. }
                | StoreError::AssetIo { .. }
                | StoreError::AssetDecode { .. }
        )
    }

    /// Asset key the error refers to, if any.
    pub fn asset_key(&self) -> Option<&str> {
        match self {
            StoreError::AssetNotFound { key }
            | StoreError::AssetIo { key, .. }
            | StoreError::AssetDecode { key, .. } => Some(key),
            StoreError::Terminal(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
