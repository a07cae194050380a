//! Theme store: the single owned holder of the theme preference.
//!
//! Reads the persisted mode once on initialisation, writes through on every change and keeps
//! an ambient subscription alive only while the mode is `system`.

use super::ambient::{AmbientScheme, Subscription};
use super::storage::PreferenceStorage;
use crate::shared::config::ThemeConfig;
use contracts::enums::{EffectiveMode, InvalidModeError, ThemeMode};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Snapshot delivered to change listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    pub mode: ThemeMode,
    pub effective: EffectiveMode,
}

type Listener = Rc<dyn Fn(ThemeState)>;

struct Inner {
    mode: ThemeMode,
    effective: EffectiveMode,
    subscription: Option<Subscription>,
    listeners: Vec<Listener>,
    released: bool,
}

impl Inner {
    fn state(&self) -> ThemeState {
        ThemeState {
            mode: self.mode,
            effective: self.effective,
        }
    }
}

pub struct ThemeStore {
    config: ThemeConfig,
    storage: Rc<dyn PreferenceStorage>,
    ambient: Rc<dyn AmbientScheme>,
    inner: Rc<RefCell<Inner>>,
}

/// Persisted mode under `storage_key`, if readable and valid.
pub fn read_persisted(storage: &dyn PreferenceStorage, storage_key: &str) -> Option<ThemeMode> {
    match storage.read(storage_key) {
        Ok(Some(value)) => {
            let mode = ThemeMode::from_code(&value);
            if mode.is_none() {
                log::warn!(
                    "ignoring persisted theme {:?} under '{}'",
                    value,
                    storage_key
                );
            }
            mode
        }
        Ok(None) => None,
        Err(e) => {
            log::warn!("theme storage read failed: {}", e);
            None
        }
    }
}

/// Parses an untyped mode. Non-strict callers get `system` for unknown values.
pub fn resolve_code(code: &str, strict: bool) -> Result<ThemeMode, InvalidModeError> {
    match code.parse::<ThemeMode>() {
        Ok(mode) => Ok(mode),
        Err(e) if strict => Err(e),
        Err(e) => {
            log::warn!("{}; clamping to system", e);
            Ok(ThemeMode::System)
        }
    }
}

impl ThemeStore {
    pub fn initialize(
        config: ThemeConfig,
        storage: Rc<dyn PreferenceStorage>,
        ambient: Rc<dyn AmbientScheme>,
    ) -> Self {
        let mode =
            read_persisted(storage.as_ref(), &config.storage_key).unwrap_or(config.default_mode);
        let effective = mode.resolve(ambient.prefers_dark());
        log::debug!(
            "theme initialized: mode={}, effective={}, key='{}'",
            mode,
            effective,
            config.storage_key
        );

        let store = Self {
            config,
            storage,
            ambient,
            inner: Rc::new(RefCell::new(Inner {
                mode,
                effective,
                subscription: None,
                listeners: Vec::new(),
                released: false,
            })),
        };
        store.sync_subscription();
        store
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn mode(&self) -> ThemeMode {
        self.inner.borrow().mode
    }

    pub fn effective_mode(&self) -> EffectiveMode {
        self.inner.borrow().effective
    }

    pub fn state(&self) -> ThemeState {
        self.inner.borrow().state()
    }

    pub fn resolve_effective_mode(&self, mode: ThemeMode) -> EffectiveMode {
        mode.resolve(self.ambient.prefers_dark())
    }

    /// Updates the mode, persists it and notifies listeners before returning.
    ///
    /// A failed storage write is logged; the in-memory mode is kept.
    pub fn set_mode(&self, mode: ThemeMode) {
        let effective = self.resolve_effective_mode(mode);
        let changed = {
            let mut inner = self.inner.borrow_mut();
            let before = inner.state();
            inner.mode = mode;
            inner.effective = effective;
            before != inner.state()
        };

        if let Err(e) = self.storage.write(&self.config.storage_key, mode.code()) {
            log::warn!("theme storage write failed, keeping '{}' in memory: {}", mode, e);
        }

        self.sync_subscription();

        if changed {
            log::debug!("theme changed: mode={}, effective={}", mode, effective);
            self.notify();
        }
    }

    /// String entry point for callers that hold an untyped mode.
    ///
    /// Debug builds reject unknown values; release builds clamp them to `system`.
    pub fn try_set_mode(&self, code: &str) -> Result<ThemeMode, InvalidModeError> {
        let mode = resolve_code(code, cfg!(debug_assertions))?;
        self.set_mode(mode);
        Ok(mode)
    }

    pub fn cycle_mode(&self) -> ThemeMode {
        let next = self.mode().next();
        self.set_mode(next);
        next
    }

    pub fn on_change(&self, listener: impl Fn(ThemeState) + 'static) {
        self.inner.borrow_mut().listeners.push(Rc::new(listener));
    }

    pub fn is_subscribed(&self) -> bool {
        self.inner.borrow().subscription.is_some()
    }

    /// Drops the ambient subscription and all listeners. Safe to call more than once.
    ///
    /// A released store still records and persists modes but never subscribes again.
    pub fn release(&self) {
        let subscription = {
            let mut inner = self.inner.borrow_mut();
            inner.released = true;
            inner.listeners.clear();
            inner.subscription.take()
        };
        drop(subscription);
    }

    fn notify(&self) {
        let (state, listeners) = {
            let inner = self.inner.borrow();
            (inner.state(), inner.listeners.clone())
        };
        for listener in listeners {
            listener(state);
        }
    }

    fn sync_subscription(&self) {
        let (wants, has) = {
            let inner = self.inner.borrow();
            (
                inner.mode.is_system() && !inner.released,
                inner.subscription.is_some(),
            )
        };

        if wants && !has {
            let weak = Rc::downgrade(&self.inner);
            let subscription = self
                .ambient
                .subscribe(Rc::new(move |prefers_dark| on_ambient_change(&weak, prefers_dark)));
            self.inner.borrow_mut().subscription = Some(subscription);
        } else if !wants && has {
            // Released outside the borrow: the release hook may call back into the host.
            let subscription = self.inner.borrow_mut().subscription.take();
            drop(subscription);
        }
    }
}

impl Drop for ThemeStore {
    fn drop(&mut self) {
        self.release();
    }
}

fn on_ambient_change(inner: &Weak<RefCell<Inner>>, prefers_dark: bool) {
    let Some(inner) = inner.upgrade() else {
        return;
    };

    let (state, listeners) = {
        let mut inner = inner.borrow_mut();
        if !inner.mode.is_system() {
            return;
        }
        let effective = inner.mode.resolve(prefers_dark);
        if effective == inner.effective {
            return;
        }
        inner.effective = effective;
        (inner.state(), inner.listeners.clone())
    };

    log::debug!("ambient color scheme changed: effective={}", state.effective);
    for listener in listeners {
        listener(state);
    }
}
