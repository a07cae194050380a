//! Theme management module for the application.
//!
//! Provides a context-based theme system with light, dark and system modes.
//! The preference is persisted in localStorage; `system` follows `prefers-color-scheme`.

pub mod ambient;
pub mod document;
pub mod mode_toggle;
pub mod storage;
pub mod store;

pub use mode_toggle::{ModeSelect, ModeToggle};

use ambient::MediaQueryScheme;
use contracts::enums::{EffectiveMode, ThemeMode};
use leptos::prelude::*;
use std::rc::Rc;
use storage::{BrowserStorage, MemoryStorage, PreferenceStorage};
use store::ThemeStore;

use crate::shared::config::ThemeConfig;

/// Theme context type.
///
/// Descendants read the mode through signals and change it only through the setters,
/// which go to the store owned by the nearest `ThemeProvider`.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Selected mode.
    pub mode: ReadSignal<ThemeMode>,
    /// Mode after resolving `system`.
    pub effective: ReadSignal<EffectiveMode>,
    store: StoredValue<ThemeStore, LocalStorage>,
}

impl ThemeContext {
    /// Bridges store changes into signals and hands each effective mode to `apply`,
    /// once immediately and then on every change.
    ///
    /// Must run inside a reactive owner; the store is disposed with it.
    pub fn from_store(store: ThemeStore, apply: impl Fn(EffectiveMode) + 'static) -> Self {
        let initial = store.state();
        let (mode, set_mode) = signal(initial.mode);
        let (effective, set_effective) = signal(initial.effective);

        apply(initial.effective);
        store.on_change(move |state| {
            set_mode.set(state.mode);
            set_effective.set(state.effective);
            apply(state.effective);
        });

        Self {
            mode,
            effective,
            store: StoredValue::new_local(store),
        }
    }

    /// Drops the ambient subscription of the underlying store.
    pub fn release(&self) {
        let _ = self.store.try_with_value(|store| store.release());
    }

    /// Set the mode and persist to storage.
    pub fn set_mode(&self, mode: ThemeMode) {
        self.store.with_value(|store| store.set_mode(mode));
    }

    /// Cycle to the next mode.
    pub fn cycle_mode(&self) {
        self.store.with_value(|store| {
            store.cycle_mode();
        });
    }

    pub fn get_mode(&self) -> ThemeMode {
        self.mode.get()
    }

    pub fn get_effective(&self) -> EffectiveMode {
        self.effective.get()
    }

    pub fn storage_key(&self) -> String {
        self.store
            .with_value(|store| store.config().storage_key.clone())
    }
}

fn preference_storage() -> Rc<dyn PreferenceStorage> {
    if BrowserStorage::is_available() {
        Rc::new(BrowserStorage)
    } else {
        log::warn!("localStorage unavailable, theme preference will not persist");
        Rc::new(MemoryStorage::new())
    }
}

/// Provides theme context to children components.
#[component]
pub fn ThemeProvider(
    /// Mode used when nothing valid is persisted.
    #[prop(optional)]
    default_theme: Option<ThemeMode>,
    /// localStorage key holding the preference.
    #[prop(optional, into)]
    storage_key: Option<String>,
    children: Children,
) -> impl IntoView {
    let defaults = ThemeConfig::default();
    let config = ThemeConfig {
        default_mode: default_theme.unwrap_or(defaults.default_mode),
        storage_key: storage_key.unwrap_or(defaults.storage_key),
    };

    let store = ThemeStore::initialize(
        config,
        preference_storage(),
        Rc::new(MediaQueryScheme::new()),
    );

    leptos::logging::log!("🎨 ThemeProvider mounted: mode={}", store.mode());

    let context = ThemeContext::from_store(store, document::apply_effective_mode);
    on_cleanup(move || {
        leptos::logging::log!("💥 ThemeProvider cleanup");
        context.release();
    });

    provide_context(context);

    children()
}

/// Hook to use the theme context.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ambient::ManualScheme;
    use std::cell::RefCell;

    fn context_with(
        storage: &MemoryStorage,
        ambient: &ManualScheme,
        applied: Rc<RefCell<Vec<EffectiveMode>>>,
    ) -> ThemeContext {
        let store = ThemeStore::initialize(
            ThemeConfig {
                default_mode: ThemeMode::Light,
                storage_key: "ui-theme".to_string(),
            },
            Rc::new(storage.clone()),
            Rc::new(ambient.clone()),
        );
        ThemeContext::from_store(store, move |effective| applied.borrow_mut().push(effective))
    }

    #[test]
    fn test_signals_follow_cycle_mode() {
        let owner = Owner::new();
        owner.with(|| {
            let storage = MemoryStorage::new();
            let applied = Rc::new(RefCell::new(Vec::new()));
            let ctx = context_with(&storage, &ManualScheme::new(false), applied.clone());

            assert_eq!(ctx.mode.get_untracked(), ThemeMode::Light);
            assert_eq!(ctx.effective.get_untracked(), EffectiveMode::Light);

            ctx.cycle_mode();

            assert_eq!(ctx.mode.get_untracked(), ThemeMode::Dark);
            assert_eq!(ctx.effective.get_untracked(), EffectiveMode::Dark);
            assert_eq!(storage.get("ui-theme").as_deref(), Some("dark"));
            assert_eq!(
                *applied.borrow(),
                vec![EffectiveMode::Light, EffectiveMode::Dark]
            );
        });
    }

    #[test]
    fn test_effective_signal_follows_ambient_in_system() {
        let owner = Owner::new();
        owner.with(|| {
            let ambient = ManualScheme::new(false);
            let applied = Rc::new(RefCell::new(Vec::new()));
            let ctx = context_with(&MemoryStorage::new(), &ambient, applied.clone());

            ctx.set_mode(ThemeMode::System);
            assert_eq!(ctx.effective.get_untracked(), EffectiveMode::Light);

            ambient.set_prefers_dark(true);

            assert_eq!(ctx.mode.get_untracked(), ThemeMode::System);
            assert_eq!(ctx.effective.get_untracked(), EffectiveMode::Dark);
            assert_eq!(applied.borrow().last(), Some(&EffectiveMode::Dark));
        });
    }

    #[test]
    fn test_release_unsubscribes_once() {
        let owner = Owner::new();
        owner.with(|| {
            let ambient = ManualScheme::new(false);
            let ctx = context_with(&MemoryStorage::new(), &ambient, Rc::default());

            ctx.set_mode(ThemeMode::System);
            assert_eq!(ambient.active(), 1);

            ctx.release();
            ctx.release();

            assert_eq!(ambient.active(), 0);
            assert_eq!(ambient.unsubscribes(), 1);
            assert_eq!(ctx.storage_key(), "ui-theme");
        });
    }
}
