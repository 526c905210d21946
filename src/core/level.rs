//! Log level categories and the shared level filter
//!
//! Levels are bit flags: a logger is bound to one level at construction,
//! and a message is emitted only when the logger's level intersects the
//! process-wide [`LevelFilter`]. The filter is an explicit shared handle
//! rather than a global, so changing it through any clone of the handle
//! affects every logger constructed with it on their very next post.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Log level category a logger instance is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Level {
    Results = 1,
    Demo = 2,
    Debug = 4,
    #[default]
    All = 7,
}

impl Level {
    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Results => "results",
            Level::Demo => "demo",
            Level::Debug => "debug",
            Level::All => "all",
        }
    }

    /// Bit pattern of this level.
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// This level as a one-flag (or, for `All`, all-flag) mask.
    #[inline]
    pub const fn mask(self) -> LevelMask {
        LevelMask(self as u8)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "results" => Ok(Level::Results),
            "demo" => Ok(Level::Demo),
            "debug" => Ok(Level::Debug),
            "all" => Ok(Level::All),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

impl BitOr for Level {
    type Output = LevelMask;

    fn bitor(self, rhs: Level) -> LevelMask {
        LevelMask(self.bits() | rhs.bits())
    }
}

/// Combination of [`Level`] flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelMask(u8);

impl LevelMask {
    /// Mask enabling no levels.
    pub const NONE: LevelMask = LevelMask(0);
    /// Mask enabling every level.
    pub const ALL: LevelMask = LevelMask(Level::All as u8);

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn intersects(self, other: LevelMask) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub const fn contains(self, level: Level) -> bool {
        self.0 & level.bits() == level.bits()
    }
}

impl Default for LevelMask {
    fn default() -> Self {
        LevelMask::ALL
    }
}

impl From<Level> for LevelMask {
    fn from(level: Level) -> Self {
        level.mask()
    }
}

impl BitOr for LevelMask {
    type Output = LevelMask;

    fn bitor(self, rhs: LevelMask) -> LevelMask {
        LevelMask(self.0 | rhs.0)
    }
}

impl BitOr<Level> for LevelMask {
    type Output = LevelMask;

    fn bitor(self, rhs: Level) -> LevelMask {
        LevelMask(self.0 | rhs.bits())
    }
}

/// Shared, atomically mutable level filter.
///
/// Clones share the same underlying value. Loggers read the filter on every
/// post, so a change through any handle gates the very next message of every
/// logger holding a clone.
///
/// # Example
///
/// ```
/// use fanlog::core::{Level, LevelFilter};
///
/// let filter = LevelFilter::all();
/// assert!(filter.enables(Level::Debug));
///
/// filter.set(Level::Results.mask());
/// assert!(!filter.enables(Level::Debug));
/// assert!(filter.enables(Level::Results));
/// ```
#[derive(Debug, Clone)]
pub struct LevelFilter(Arc<AtomicU8>);

impl LevelFilter {
    /// Create a filter with the given initial mask.
    #[must_use]
    pub fn new(mask: LevelMask) -> Self {
        LevelFilter(Arc::new(AtomicU8::new(mask.bits())))
    }

    /// Create a filter that enables every level.
    #[must_use]
    pub fn all() -> Self {
        Self::new(LevelMask::ALL)
    }

    /// Current mask.
    pub fn get(&self) -> LevelMask {
        LevelMask(self.0.load(Ordering::Relaxed))
    }

    /// Replace the mask; takes effect on the next post of every logger
    /// sharing this handle.
    pub fn set(&self, mask: LevelMask) {
        self.0.store(mask.bits(), Ordering::Relaxed);
    }

    /// Whether a logger bound to `level` currently emits.
    #[inline]
    pub fn enables(&self, level: Level) -> bool {
        self.get().intersects(level.mask())
    }
}

impl Default for LevelFilter {
    fn default() -> Self {
        Self::all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bits() {
        assert_eq!(Level::Results.bits(), 1);
        assert_eq!(Level::Demo.bits(), 2);
        assert_eq!(Level::Debug.bits(), 4);
        assert_eq!(Level::All.bits(), 7);
    }

    #[test]
    fn test_mask_composition() {
        let mask = Level::Debug | Level::Demo;
        assert_eq!(mask.bits(), 6);
        assert!(mask.contains(Level::Debug));
        assert!(mask.contains(Level::Demo));
        assert!(!mask.contains(Level::Results));
        assert!(mask.intersects(Level::All.mask()));
        assert!(!mask.intersects(Level::Results.mask()));
    }

    #[test]
    fn test_all_contains_every_level() {
        for level in [Level::Results, Level::Demo, Level::Debug] {
            assert!(LevelMask::ALL.contains(level));
        }
        assert!(!LevelMask::NONE.intersects(LevelMask::ALL));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("results".parse::<Level>(), Ok(Level::Results));
        assert_eq!("DEMO".parse::<Level>(), Ok(Level::Demo));
        assert_eq!("Debug".parse::<Level>(), Ok(Level::Debug));
        assert_eq!("all".parse::<Level>(), Ok(Level::All));
        assert!("verbose".parse::<Level>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for level in [Level::Results, Level::Demo, Level::Debug, Level::All] {
            let parsed: Level = level.to_string().parse().expect("roundtrip");
            assert_eq!(parsed, level);
        }
    }

    #[test]
    fn test_filter_shared_handle() {
        let filter = LevelFilter::all();
        let clone = filter.clone();

        clone.set(Level::Results.mask());
        assert!(!filter.enables(Level::Debug));
        assert!(filter.enables(Level::Results));

        filter.set(Level::Debug | Level::Demo);
        assert!(clone.enables(Level::Debug));
        assert!(!clone.enables(Level::Results));
    }

    #[test]
    fn test_all_level_always_passes_nonempty_filter() {
        let filter = LevelFilter::new(Level::Results.mask());
        assert!(filter.enables(Level::All));

        filter.set(LevelMask::NONE);
        assert!(!filter.enables(Level::All));
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Level::Debug).expect("serialize");
        assert_eq!(json, "\"Debug\"");

        let mask = Level::Debug | Level::Demo;
        let json = serde_json::to_string(&mask).expect("serialize mask");
        let back: LevelMask = serde_json::from_str(&json).expect("deserialize mask");
        assert_eq!(back, mask);
    }
}
