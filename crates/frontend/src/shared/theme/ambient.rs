//! Ambient light/dark preference of the host (`prefers-color-scheme`).
//!
//! Subscriptions are scoped: a [`Subscription`] releases its callback exactly once, either
//! through [`Subscription::unsubscribe`] or when it is dropped.

use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, MediaQueryList, MediaQueryListEvent};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Called with `true` when the host switches to a dark preference.
pub type AmbientCallback = Rc<dyn Fn(bool)>;

pub trait AmbientScheme {
    fn prefers_dark(&self) -> bool;
    fn subscribe(&self, on_change: AmbientCallback) -> Subscription;
}

/// Handle for a registered ambient callback.
#[must_use = "dropping a Subscription releases the callback immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release (host has no ambient signal).
    pub fn detached() -> Self {
        Self { release: None }
    }

    pub fn unsubscribe(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_once();
    }
}

/// `window.matchMedia("(prefers-color-scheme: dark)")`.
#[derive(Clone, Default)]
pub struct MediaQueryScheme {
    query: Option<MediaQueryList>,
}

impl MediaQueryScheme {
    pub fn new() -> Self {
        let query = window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten());
        if query.is_none() {
            log::warn!("matchMedia unavailable, system theme resolves to light");
        }
        Self { query }
    }
}

impl AmbientScheme for MediaQueryScheme {
    fn prefers_dark(&self) -> bool {
        self.query.as_ref().map(|q| q.matches()).unwrap_or(false)
    }

    fn subscribe(&self, on_change: AmbientCallback) -> Subscription {
        let Some(query) = self.query.clone() else {
            return Subscription::detached();
        };

        let closure = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            on_change(event.matches());
        }) as Box<dyn FnMut(_)>);

        if let Err(e) =
            query.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        {
            log::warn!("failed to listen for color scheme changes: {:?}", e);
            return Subscription::detached();
        }

        Subscription::new(move || {
            let _ = query
                .remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        })
    }
}

#[cfg(test)]
pub(crate) use manual::ManualScheme;

#[cfg(test)]
mod manual {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct ManualState {
        prefers_dark: bool,
        next_id: u64,
        callbacks: Vec<(u64, AmbientCallback)>,
        subscribes: usize,
        unsubscribes: usize,
    }

    /// Ambient preference driven by the test; counts subscriptions.
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheme {
        state: Rc<RefCell<ManualState>>,
    }

    impl ManualScheme {
        pub fn new(prefers_dark: bool) -> Self {
            let scheme = Self::default();
            scheme.state.borrow_mut().prefers_dark = prefers_dark;
            scheme
        }

        pub fn set_prefers_dark(&self, prefers_dark: bool) {
            let callbacks: Vec<AmbientCallback> = {
                let mut state = self.state.borrow_mut();
                state.prefers_dark = prefers_dark;
                state.callbacks.iter().map(|(_, cb)| cb.clone()).collect()
            };
            for callback in callbacks {
                callback(prefers_dark);
            }
        }

        pub fn subscribes(&self) -> usize {
            self.state.borrow().subscribes
        }

        pub fn unsubscribes(&self) -> usize {
            self.state.borrow().unsubscribes
        }

        pub fn active(&self) -> usize {
            self.state.borrow().callbacks.len()
        }
    }

    impl AmbientScheme for ManualScheme {
        fn prefers_dark(&self) -> bool {
            self.state.borrow().prefers_dark
        }

        fn subscribe(&self, on_change: AmbientCallback) -> Subscription {
            let id = {
                let mut state = self.state.borrow_mut();
                state.next_id += 1;
                state.subscribes += 1;
                let id = state.next_id;
                state.callbacks.push((id, on_change));
                id
            };
            let state = self.state.clone();
            Subscription::new(move || {
                let mut state = state.borrow_mut();
                state.callbacks.retain(|(cb_id, _)| *cb_id != id);
                state.unsubscribes += 1;
            })
        }
    }
}
