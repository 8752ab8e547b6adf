//! Cyclic photo navigation state.

use crate::models::PhotoRef;

/// Holds the photo sequence being viewed and a cursor into it.
///
/// Navigation wraps cyclically in both directions. Closing drops the
/// sequence reference entirely rather than hiding it.
#[derive(Debug, Default)]
pub struct LightboxController {
    photos: Option<Vec<PhotoRef>>,
    index: usize,
}

impl LightboxController {
    /// Creates a closed lightbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the lightbox on a photo sequence at the given index.
    ///
    /// Opening an empty sequence is a no-op; a start index past the end
    /// clamps to the last photo.
    pub fn open(&mut self, photos: Vec<PhotoRef>, initial_index: usize) {
        if photos.is_empty() {
            return;
        }
        self.index = initial_index.min(photos.len() - 1);
        self.photos = Some(photos);
    }

    /// Whether a sequence is currently being viewed.
    pub fn is_open(&self) -> bool {
        self.photos.is_some()
    }

    /// The photo under the cursor, if open.
    pub fn current(&self) -> Option<&PhotoRef> {
        self.photos.as_ref().and_then(|photos| photos.get(self.index))
    }

    /// The cursor position, if open.
    pub fn index(&self) -> Option<usize> {
        self.photos.as_ref().map(|_| self.index)
    }

    /// Advances the cursor, wrapping from the last photo to the first.
    pub fn next(&mut self) {
        if let Some(photos) = &self.photos {
            self.index = if self.index == photos.len() - 1 {
                0
            } else {
                self.index + 1
            };
        }
    }

    /// Moves the cursor back, wrapping from the first photo to the last.
    pub fn prev(&mut self) {
        if let Some(photos) = &self.photos {
            self.index = if self.index == 0 {
                photos.len() - 1
            } else {
                self.index - 1
            };
        }
    }

    /// Closes the lightbox, clearing the sequence reference entirely.
    pub fn close(&mut self) {
        self.photos = None;
        self.index = 0;
    }
}
