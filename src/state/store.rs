//! Observable snapshot holder shared by every feature service.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

use super::cache::RequestToken;
use super::mvi::Reducer;

/// Holds the current snapshot of one feature and publishes every change.
///
/// All mutation goes through [`Store::dispatch`], which runs the reducer
/// over the current snapshot. Readers either take a [`Store::snapshot`]
/// or [`Store::subscribe`] to be woken on each new one.
pub struct Store<R: Reducer> {
    sender: watch::Sender<R::State>,
    tokens: AtomicU64,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Store<R> {
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    pub fn with_state(state: R::State) -> Self {
        let (sender, _) = watch::channel(state);
        Self {
            sender,
            tokens: AtomicU64::new(0),
            _reducer: PhantomData,
        }
    }

    /// Clone of the current snapshot.
    pub fn snapshot(&self) -> R::State {
        self.sender.borrow().clone()
    }

    /// Read a projection of the current snapshot without cloning all of it.
    pub fn read<T>(&self, f: impl FnOnce(&R::State) -> T) -> T {
        f(&self.sender.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.sender.subscribe()
    }

    /// Run `intent` through the reducer and publish the result.
    pub fn dispatch(&self, intent: R::Intent) {
        self.sender.send_modify(|state| {
            let current = std::mem::take(state);
            *state = R::reduce(current, intent);
        });
    }

    /// Issue a fresh request token. Tokens grow monotonically per store.
    pub fn next_token(&self) -> RequestToken {
        self.tokens.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}
