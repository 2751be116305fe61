//! Scoped page-level side effects.
//!
//! Opening an overlay suspends page scrolling, and the lightbox additionally
//! listens for the cancel key. Both effects are modelled as guards: acquiring
//! one performs the effect on the [`PageHost`], dropping it undoes the effect.
//! Because release lives in `Drop`, it happens exactly once on every exit path,
//! including when the whole gallery state is torn down while an overlay is
//! open.
//!
//! # Scroll lock counting
//!
//! Several holders may want scrolling suspended at the same time (for example
//! the menu and the lightbox when overlays are not exclusive). [`ScrollLock`]
//! counts holders and only talks to the host on the 0 -> 1 and 1 -> 0 edges,
//! so the host sees strictly alternating suspend/restore calls.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Environment hosting the page.
///
/// Implementations perform the actual effect (toggling body overflow, adding
/// a key listener, and so on). Calls arrive on the interaction thread only.
pub trait PageHost {
    /// Prevents the page behind overlays from scrolling.
    fn suspend_scroll(&self);

    /// Re-enables page scrolling.
    fn restore_scroll(&self);

    /// Starts delivering the cancel key to the gallery.
    fn listen_cancel_key(&self);

    /// Stops delivering the cancel key to the gallery.
    fn unlisten_cancel_key(&self);
}

/// Reference-counted page scroll lock.
#[derive(Clone)]
pub struct ScrollLock {
    host: Rc<dyn PageHost>,
    holders: Rc<Cell<usize>>,
}

impl ScrollLock {
    #[must_use]
    pub fn new(host: Rc<dyn PageHost>) -> Self {
        Self {
            host,
            holders: Rc::new(Cell::new(0)),
        }
    }

    /// Adds a holder, suspending scroll if it is the first one.
    #[must_use = "scrolling is restored as soon as the guard is dropped"]
    pub fn acquire(&self) -> ScrollGuard {
        let holders = self.holders.get();
        if holders == 0 {
            tracing::debug!("suspending page scroll");
            self.host.suspend_scroll();
        }
        self.holders.set(holders + 1);
        ScrollGuard { lock: self.clone() }
    }

    /// Whether at least one guard is alive.
    #[must_use]
    pub fn is_engaged(&self) -> bool {
        self.holders.get() > 0
    }

    /// Number of live guards.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.holders.get()
    }
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLock")
            .field("holders", &self.holders.get())
            .finish_non_exhaustive()
    }
}

/// Keeps page scroll suspended while alive.
pub struct ScrollGuard {
    lock: ScrollLock,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        let remaining = self.lock.holders.get().saturating_sub(1);
        self.lock.holders.set(remaining);
        if remaining == 0 {
            tracing::debug!("restoring page scroll");
            self.lock.host.restore_scroll();
        }
    }
}

impl fmt::Debug for ScrollGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollGuard").finish_non_exhaustive()
    }
}

/// Keeps the cancel-key listener registered while alive.
pub struct CancelKeyGuard {
    host: Rc<dyn PageHost>,
}

impl CancelKeyGuard {
    #[must_use = "the listener is removed as soon as the guard is dropped"]
    pub fn register(host: Rc<dyn PageHost>) -> Self {
        tracing::debug!("registering cancel key listener");
        host.listen_cancel_key();
        Self { host }
    }
}

impl Drop for CancelKeyGuard {
    fn drop(&mut self) {
        tracing::debug!("removing cancel key listener");
        self.host.unlisten_cancel_key();
    }
}

impl fmt::Debug for CancelKeyGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelKeyGuard").finish_non_exhaustive()
    }
}

/// A [`PageHost`] that only records calls.
///
/// Used by the headless driver, which has no real page to lock, and by tests
/// asserting that effects stay balanced.
#[derive(Debug, Default)]
pub struct RecordingHost {
    suspends: Cell<u32>,
    restores: Cell<u32>,
    listens: Cell<u32>,
    unlistens: Cell<u32>,
}

impl RecordingHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Times scrolling was suspended.
    #[must_use]
    pub fn suspends(&self) -> u32 {
        self.suspends.get()
    }

    /// Times scrolling was restored.
    #[must_use]
    pub fn restores(&self) -> u32 {
        self.restores.get()
    }

    /// Times the cancel-key listener was registered.
    #[must_use]
    pub fn listens(&self) -> u32 {
        self.listens.get()
    }

    /// Times the cancel-key listener was removed.
    #[must_use]
    pub fn unlistens(&self) -> u32 {
        self.unlistens.get()
    }

    /// Whether the page is currently prevented from scrolling.
    #[must_use]
    pub fn scroll_suspended(&self) -> bool {
        self.suspends.get() > self.restores.get()
    }

    /// Whether the cancel key is currently being listened for.
    #[must_use]
    pub fn cancel_key_listening(&self) -> bool {
        self.listens.get() > self.unlistens.get()
    }
}

impl PageHost for RecordingHost {
    fn suspend_scroll(&self) {
        self.suspends.set(self.suspends.get() + 1);
    }

    fn restore_scroll(&self) {
        self.restores.set(self.restores.get() + 1);
    }

    fn listen_cancel_key(&self) {
        self.listens.set(self.listens.get() + 1);
    }

    fn unlisten_cancel_key(&self) {
        self.unlistens.set(self.unlistens.get() + 1);
    }
}
