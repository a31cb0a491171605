use log::warn;

use super::state::{AppState, ImageSlot};
use crate::{AssetEvent, Screen};

/// Process background work between frames: store finished image loads and
/// keep loads in step with the cards currently on screen.
pub fn process_state(state: &mut AppState) {
    for event in state.loader.poll() {
        match event {
            AssetEvent::Loaded { key, image } => {
                state.images.insert(key, ImageSlot::Ready(image));
            }
            AssetEvent::Failed { key, error } => {
                warn!("Image unavailable for {key}: {error}");
                state.images.insert(key, ImageSlot::Failed);
            }
        }
    }

    let window = if state.session.current() == Screen::Home {
        state.card_window()
    } else {
        0..0
    };

    let wanted: Vec<String> = state.session.catalog().products()[window]
        .iter()
        .map(|p| p.image_asset_key.clone())
        .collect();

    // Cards that left the screen drop their unfinished loads.
    let stale: Vec<String> = state
        .images
        .iter()
        .filter(|(key, slot)| **slot == ImageSlot::Loading && !wanted.contains(*key))
        .map(|(key, _)| key.clone())
        .collect();
    for key in stale {
        state.loader.cancel(&key);
        state.images.remove(&key);
    }

    for key in wanted {
        if !state.images.contains_key(&key) && state.loader.request(&key) {
            state.images.insert(key, ImageSlot::Loading);
        }
    }
}
