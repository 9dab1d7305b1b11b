//! Scene-scoped mode state shared between the controller and selectors.
//!
//! A [`ModeContext`] is created once per scene and split into handles:
//! one [`ModeWriter`] (held by the controller), one [`FixWriter`] (held by
//! the broadcaster) and any number of [`ModeReader`]s. Reads are lock-free
//! atomic loads; writes go through a single exclusive section so a reader
//! never observes a revision bump without the value that caused it.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU8, AtomicU64, Ordering};
use std::sync::Arc;

use crate::mode::CvdMode;

#[derive(Debug)]
struct Shared {
    mode: AtomicU8,
    fix_enabled: AtomicBool,
    revision: AtomicU64,
    write_lock: Mutex<()>,
}

impl Shared {
    fn mode(&self) -> CvdMode {
        CvdMode::from_index(self.mode.load(Ordering::Acquire)).unwrap_or_default()
    }
}

/// Point-in-time view of the shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSnapshot {
    pub mode: CvdMode,
    pub fix_enabled: bool,
    /// Incremented on every change to either field.
    pub revision: u64,
}

/// Owner of the scene's mode state before it is split into handles.
#[derive(Debug)]
pub struct ModeContext {
    shared: Arc<Shared>,
}

impl ModeContext {
    /// Fresh scene state. A scene reload creates a new context.
    pub fn new(initial_mode: CvdMode, fix_enabled: bool) -> Self {
        Self {
            shared: Arc::new(Shared {
                mode: AtomicU8::new(initial_mode.index()),
                fix_enabled: AtomicBool::new(fix_enabled),
                revision: AtomicU64::new(0),
                write_lock: Mutex::new(()),
            }),
        }
    }

    /// Consume the context, handing out the two writers and a reader.
    pub fn split(self) -> (ModeWriter, FixWriter, ModeReader) {
        let reader = ModeReader {
            shared: Arc::clone(&self.shared),
        };
        let fix = FixWriter {
            shared: Arc::clone(&self.shared),
        };
        (ModeWriter { shared: self.shared }, fix, reader)
    }
}

impl Default for ModeContext {
    fn default() -> Self {
        Self::new(CvdMode::Normal, false)
    }
}

/// Read-only handle. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ModeReader {
    shared: Arc<Shared>,
}

impl ModeReader {
    pub fn mode(&self) -> CvdMode {
        self.shared.mode()
    }

    pub fn fix_enabled(&self) -> bool {
        self.shared.fix_enabled.load(Ordering::Acquire)
    }

    pub fn revision(&self) -> u64 {
        self.shared.revision.load(Ordering::Acquire)
    }

    /// Consistent view of mode, flag and revision.
    pub fn snapshot(&self) -> ModeSnapshot {
        let _guard = self.shared.write_lock.lock();
        ModeSnapshot {
            mode: self.mode(),
            fix_enabled: self.fix_enabled(),
            revision: self.revision(),
        }
    }
}

/// Sole writer of the current mode.
#[derive(Debug)]
pub struct ModeWriter {
    shared: Arc<Shared>,
}

impl ModeWriter {
    /// Publish `mode`. Returns `true` if it differs from the previous value.
    pub fn set(&self, mode: CvdMode) -> bool {
        let _guard = self.shared.write_lock.lock();
        let previous = self.shared.mode.swap(mode.index(), Ordering::AcqRel);
        let changed = previous != mode.index();
        if changed {
            self.shared.revision.fetch_add(1, Ordering::AcqRel);
        }
        changed
    }

    pub fn get(&self) -> CvdMode {
        self.shared.mode()
    }

    pub fn reader(&self) -> ModeReader {
        ModeReader {
            shared: Arc::clone(&self.shared),
        }
    }
}

/// Sole writer of the fix-enabled flag.
#[derive(Debug)]
pub struct FixWriter {
    shared: Arc<Shared>,
}

impl FixWriter {
    /// Publish `enabled`. Returns `true` if the flag changed.
    ///
    /// Every host changes the flag through here, so the change is logged
    /// here too.
    pub fn set(&self, enabled: bool) -> bool {
        let _guard = self.shared.write_lock.lock();
        let previous = self.shared.fix_enabled.swap(enabled, Ordering::AcqRel);
        let changed = previous != enabled;
        if changed {
            self.shared.revision.fetch_add(1, Ordering::AcqRel);
            tracing::info!("Apply fix set to: {enabled}");
        }
        changed
    }

    /// Flip the flag and return its new value.
    pub fn toggle(&self) -> bool {
        let _guard = self.shared.write_lock.lock();
        let enabled = !self.shared.fix_enabled.fetch_xor(true, Ordering::AcqRel);
        self.shared.revision.fetch_add(1, Ordering::AcqRel);
        tracing::info!("Apply fix set to: {enabled}");
        enabled
    }

    pub fn get(&self) -> bool {
        self.shared.fix_enabled.load(Ordering::Acquire)
    }

    pub fn reader(&self) -> ModeReader {
        ModeReader {
            shared: Arc::clone(&self.shared),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readers_observe_writer() {
        let (modes, _fix, reader) = ModeContext::default().split();
        let other = reader.clone();
        assert_eq!(reader.mode(), CvdMode::Normal);

        assert!(modes.set(CvdMode::Tritanopia));
        assert_eq!(reader.mode(), CvdMode::Tritanopia);
        assert_eq!(other.mode(), CvdMode::Tritanopia);
    }

    #[test]
    fn test_revision_only_moves_on_change() {
        let (modes, fix, reader) = ModeContext::new(CvdMode::Protanopia, false).split();
        assert_eq!(reader.revision(), 0);

        assert!(!modes.set(CvdMode::Protanopia));
        assert_eq!(reader.revision(), 0);

        assert!(modes.set(CvdMode::Normal));
        assert!(fix.set(true));
        assert!(!fix.set(true));
        assert_eq!(reader.revision(), 2);
    }

    #[test]
    fn test_toggle_returns_new_value() {
        let (_modes, fix, reader) = ModeContext::default().split();
        assert!(fix.toggle());
        assert!(reader.fix_enabled());
        assert!(!fix.toggle());
        assert!(!reader.fix_enabled());
    }

    #[test]
    fn test_snapshot_is_consistent_across_threads() {
        let (modes, fix, reader) = ModeContext::default().split();
        let handle = std::thread::spawn(move || {
            for mode in CvdMode::ALL.iter().cycle().take(64) {
                modes.set(*mode);
                fix.toggle();
            }
        });
        for _ in 0..64 {
            let snap = reader.snapshot();
            assert!(CvdMode::ALL.contains(&snap.mode));
        }
        handle.join().unwrap();
        assert!(reader.revision() > 0);
    }
}
