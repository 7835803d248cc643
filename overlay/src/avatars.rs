//! Shared avatar image cache.
//!
//! The render path reads and inserts; the host's event thread may clear
//! at any time in response to fight-selection changes, so the map lives
//! behind a `RwLock` and the handle is cheap to clone across threads.
//! There is no per-entry expiry: entries are dropped wholesale by
//! [`AvatarCache::clear`] and lazily rebuilt on the next frame.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use splatlog_core::{PartyRoster, RgbaImage};

/// Clonable handle to the cache of pre-scaled avatar images, keyed by
/// player display name.
#[derive(Debug, Clone, Default)]
pub struct AvatarCache {
    inner: Arc<RwLock<HashMap<String, Arc<RgbaImage>>>>,
}

impl AvatarCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<Arc<RgbaImage>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Insert an avatar already scaled to its display size.
    ///
    /// Entries keep the scale they were inserted with; a later size change
    /// only takes effect after an explicit [`clear`](Self::clear).
    pub fn put(&self, name: &str, image: RgbaImage) -> Arc<RgbaImage> {
        let image = Arc::new(image);
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), Arc::clone(&image));
        image
    }

    /// Drop every entry. Safe to call from any thread.
    pub fn clear(&self) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cached avatar for `name`, populating on miss.
    ///
    /// Misses ask the party roster for the player's avatar and fall back
    /// to `default` when the roster has nothing; the chosen image is
    /// scaled to `size` and cached. Returns `None` only when the roster
    /// misses and no default is available (e.g. the bundled image failed
    /// to decode at startup).
    pub fn resolve(
        &self,
        name: &str,
        size: u32,
        roster: &dyn PartyRoster,
        default: Option<&RgbaImage>,
    ) -> Option<Arc<RgbaImage>> {
        if let Some(hit) = self.get(name) {
            return Some(hit);
        }
        let source = roster.member_avatar(name).or_else(|| default.cloned())?;
        Some(self.put(name, source.scaled(size, size)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoParty;

    impl PartyRoster for NoParty {
        fn member_avatar(&self, _display_name: &str) -> Option<RgbaImage> {
            None
        }
    }

    struct FixedParty(RgbaImage);

    impl PartyRoster for FixedParty {
        fn member_avatar(&self, display_name: &str) -> Option<RgbaImage> {
            (display_name == "Member").then(|| self.0.clone())
        }
    }

    fn solid(size: u32, value: u8) -> RgbaImage {
        RgbaImage {
            width: size,
            height: size,
            data: vec![value; (size * size * 4) as usize],
        }
    }

    #[test]
    fn test_put_get_clear() {
        let cache = AvatarCache::new();
        assert!(cache.get("Zezima").is_none());
        cache.put("Zezima", solid(4, 7));
        assert_eq!(cache.get("Zezima").unwrap().width, 4);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_resolve_scales_party_avatar() {
        let cache = AvatarCache::new();
        let roster = FixedParty(solid(32, 1));
        let avatar = cache.resolve("Member", 20, &roster, None).unwrap();
        assert_eq!((avatar.width, avatar.height), (20, 20));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let cache = AvatarCache::new();
        let default = solid(16, 9);
        let avatar = cache
            .resolve("Stranger", 20, &NoParty, Some(&default))
            .unwrap();
        assert_eq!((avatar.width, avatar.height), (20, 20));
        // and the fallback is cached like any other entry
        assert!(cache.get("Stranger").is_some());
    }

    #[test]
    fn test_resolve_without_default_misses() {
        let cache = AvatarCache::new();
        assert!(cache.resolve("Stranger", 20, &NoParty, None).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_repopulates_after_clear() {
        let cache = AvatarCache::new();
        let default = solid(16, 9);
        cache.resolve("Stranger", 20, &NoParty, Some(&default));
        cache.clear();
        let avatar = cache.resolve("Stranger", 20, &NoParty, Some(&default));
        assert!(avatar.is_some());
    }

    #[test]
    fn test_clear_from_another_thread() {
        let cache = AvatarCache::new();
        cache.put("Zezima", solid(4, 7));

        let handle = cache.clone();
        std::thread::spawn(move || handle.clear())
            .join()
            .unwrap();

        assert!(cache.is_empty());
    }
}
