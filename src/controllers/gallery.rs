use serde::Deserialize;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GalleryEntry {
    pub image: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryState {
    Closed,
    Open(usize),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    #[error("gallery has no entries")]
    EmptyCollection,
    #[error("gallery index {index} is out of range for {len} entries")]
    OutOfRange { index: usize, len: usize },
}

/// Keys the modal reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKey {
    Previous,
    Next,
    Close,
}

impl ModalKey {
    /// Maps a `KeyboardEvent.key` value.
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(ModalKey::Previous),
            "ArrowRight" => Some(ModalKey::Next),
            "Escape" => Some(ModalKey::Close),
            _ => None,
        }
    }
}

/// Modal viewer state over a fixed list of gallery entries.
///
/// The index is only meaningful while the modal is open and always stays in
/// `0..len`; every move wraps around.
#[derive(Debug, PartialEq)]
pub struct GalleryController {
    entries: Vec<GalleryEntry>,
    state: GalleryState,
}

impl GalleryController {
    pub fn new(entries: Vec<GalleryEntry>) -> Self {
        Self {
            entries,
            state: GalleryState::Closed,
        }
    }

    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn state(&self) -> GalleryState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, GalleryState::Open(_))
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            GalleryState::Open(index) => Some(index),
            GalleryState::Closed => None,
        }
    }

    pub fn current_entry(&self) -> Option<&GalleryEntry> {
        self.current_index().and_then(|index| self.entries.get(index))
    }

    /// Opens the modal at `index`, or jumps there if it is already open.
    pub fn open(&mut self, index: usize) -> Result<&GalleryEntry, GalleryError> {
        let len = self.entries.len();
        if len == 0 {
            return Err(GalleryError::EmptyCollection);
        }
        if index >= len {
            return Err(GalleryError::OutOfRange { index, len });
        }
        self.state = GalleryState::Open(index);
        Ok(&self.entries[index])
    }

    /// Advances to the next entry. Returns `Ok(None)` when the modal is closed.
    pub fn next(&mut self) -> Result<Option<&GalleryEntry>, GalleryError> {
        self.step(|index, len| (index + 1) % len)
    }

    pub fn previous(&mut self) -> Result<Option<&GalleryEntry>, GalleryError> {
        self.step(|index, len| (index + len - 1) % len)
    }

    pub fn close(&mut self) {
        self.state = GalleryState::Closed;
    }

    /// Keyboard navigation. Every key is ignored while the modal is closed.
    pub fn handle_key(&mut self, key: ModalKey) -> Result<(), GalleryError> {
        if !self.is_open() {
            return Ok(());
        }
        match key {
            ModalKey::Previous => self.previous().map(|_| ()),
            ModalKey::Next => self.next().map(|_| ()),
            ModalKey::Close => {
                self.close();
                Ok(())
            }
        }
    }

    fn step(
        &mut self,
        advance: impl Fn(usize, usize) -> usize,
    ) -> Result<Option<&GalleryEntry>, GalleryError> {
        let len = self.entries.len();
        if len == 0 {
            return Err(GalleryError::EmptyCollection);
        }
        match self.state {
            GalleryState::Closed => Ok(None),
            GalleryState::Open(index) => {
                let index = advance(index, len);
                self.state = GalleryState::Open(index);
                Ok(Some(&self.entries[index]))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<GalleryEntry> {
        (0..n)
            .map(|i| GalleryEntry {
                image: format!("/assets/gallery/{}.jpg", i),
                title: format!("Job {}", i),
                description: format!("Description {}", i),
            })
            .collect()
    }

    #[test]
    fn test_open_and_close() {
        let mut gallery = GalleryController::new(entries(4));
        assert!(!gallery.is_open());
        let entry = gallery.open(2).unwrap();
        assert_eq!(entry.title, "Job 2");
        assert_eq!(gallery.state(), GalleryState::Open(2));

        gallery.open(0).unwrap();
        assert_eq!(gallery.current_index(), Some(0));

        gallery.close();
        gallery.close();
        assert_eq!(gallery.state(), GalleryState::Closed);
        assert_eq!(gallery.current_entry(), None);
    }

    #[test]
    fn test_open_out_of_range() {
        let mut gallery = GalleryController::new(entries(3));
        assert_eq!(
            gallery.open(3),
            Err(GalleryError::OutOfRange { index: 3, len: 3 })
        );
        assert!(!gallery.is_open());
    }

    #[test]
    fn test_wraparound() {
        let mut gallery = GalleryController::new(entries(3));
        gallery.open(2).unwrap();
        assert_eq!(gallery.next().unwrap().map(|e| e.title.as_str()), Some("Job 0"));
        assert_eq!(gallery.previous().unwrap().map(|e| e.title.as_str()), Some("Job 2"));
        gallery.open(0).unwrap();
        gallery.previous().unwrap();
        assert_eq!(gallery.current_index(), Some(2));
    }

    #[test]
    fn test_index_stays_in_range() {
        for n in 1..=7 {
            let mut gallery = GalleryController::new(entries(n));
            for start in 0..n {
                gallery.open(start).unwrap();
                // deterministic mixed walk
                for step in 0..50usize {
                    if (step * 7 + start) % 3 == 0 {
                        gallery.previous().unwrap();
                    } else {
                        gallery.next().unwrap();
                    }
                    let index = gallery.current_index().unwrap();
                    assert!(index < n);
                }
            }
        }
    }

    #[test]
    fn test_next_previous_round_trip() {
        for n in 1..=5 {
            let mut gallery = GalleryController::new(entries(n));
            for start in 0..n {
                gallery.open(start).unwrap();
                gallery.next().unwrap();
                gallery.previous().unwrap();
                assert_eq!(gallery.current_index(), Some(start));
                gallery.previous().unwrap();
                gallery.next().unwrap();
                assert_eq!(gallery.current_index(), Some(start));
            }
        }
    }

    #[test]
    fn test_empty_gallery() {
        let mut gallery = GalleryController::new(Vec::new());
        assert_eq!(gallery.open(0), Err(GalleryError::EmptyCollection));
        assert_eq!(gallery.next(), Err(GalleryError::EmptyCollection));
        assert_eq!(gallery.previous(), Err(GalleryError::EmptyCollection));
        assert_eq!(gallery.state(), GalleryState::Closed);
    }

    #[test]
    fn test_moves_while_closed_are_noops() {
        let mut gallery = GalleryController::new(entries(3));
        assert_eq!(gallery.next(), Ok(None));
        assert_eq!(gallery.previous(), Ok(None));
        assert_eq!(gallery.state(), GalleryState::Closed);
    }

    #[test]
    fn test_keyboard_navigation() {
        let mut gallery = GalleryController::new(entries(3));
        gallery.handle_key(ModalKey::Next).unwrap();
        assert!(!gallery.is_open());

        gallery.open(1).unwrap();
        gallery.handle_key(ModalKey::Next).unwrap();
        assert_eq!(gallery.current_index(), Some(2));
        gallery.handle_key(ModalKey::Previous).unwrap();
        gallery.handle_key(ModalKey::Previous).unwrap();
        assert_eq!(gallery.current_index(), Some(0));
        gallery.handle_key(ModalKey::Close).unwrap();
        assert!(!gallery.is_open());
    }

    #[test]
    fn test_key_names() {
        assert_eq!(ModalKey::from_key_name("ArrowLeft"), Some(ModalKey::Previous));
        assert_eq!(ModalKey::from_key_name("ArrowRight"), Some(ModalKey::Next));
        assert_eq!(ModalKey::from_key_name("Escape"), Some(ModalKey::Close));
        assert_eq!(ModalKey::from_key_name("Enter"), None);
    }
}
