//! One-shot completion handlers, keyed by opaque generated tokens.
//!
//! Every asynchronous operation issued through the facade reserves a fresh
//! [`DeferKey`] and delivers its outcome to whatever handler was registered
//! under that key. Handlers are single-use: retrieving one removes it, so a
//! result can never be delivered twice.

use std::collections::HashMap;

/// Opaque identifier binding one operation to one completion handler.
///
/// Keys come from a [`KeyGen`] and are unique within their facade instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeferKey(u64);

/// Monotonic key source. Each facade instance owns one, so keys never
/// collide within a registry.
#[derive(Debug, Default)]
pub struct KeyGen {
    cursor: u64,
}

impl KeyGen {
    pub fn next_key(&mut self) -> DeferKey {
        self.cursor += 1;
        DeferKey(self.cursor)
    }
}

/// Keyed store of single-use callbacks.
///
/// All operations are total: taking an unregistered key yields a no-op
/// handler rather than an error, and registering over an existing key
/// replaces the previous handler (last writer wins).
pub struct DeferRegistry<T> {
    slots: HashMap<DeferKey, Box<dyn FnOnce(T)>>,
}

impl<T> DeferRegistry<T> {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Stores `handler` under `key`, replacing any handler already there.
    pub fn register<F>(&mut self, key: DeferKey, handler: F)
    where
        F: FnOnce(T) + 'static,
    {
        self.slots.insert(key, Box::new(handler));
    }

    /// Removes and returns the handler for `key`, or a no-op if none is
    /// registered. The entry is gone either way, so a second `take` on the
    /// same key always yields the no-op.
    pub fn take(&mut self, key: DeferKey) -> Box<dyn FnOnce(T)> {
        self.slots.remove(&key).unwrap_or_else(|| Box::new(|_| {}))
    }

    /// Reports whether a handler is currently registered for `key`.
    pub fn has(&self, key: DeferKey) -> bool {
        self.slots.contains_key(&key)
    }
}

impl<T> Default for DeferRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
