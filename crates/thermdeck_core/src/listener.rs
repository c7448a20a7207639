//! Listener registry
//!
//! Records which handlers are live. The controls listener stays registered
//! for the whole presentation; each mounted slide registers its own listeners
//! and releases all of them when it unmounts.

use bitflags::bitflags;
use slotmap::{new_key_type, SlotMap};

use crate::navigation::MountId;

new_key_type! {
    /// Generational key to a registered listener
    pub struct ListenerKey;
}

bitflags! {
    /// Event kinds a listener receives
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct EventKinds: u8 {
        const KEYBOARD = 1 << 0;
        const WHEEL = 1 << 1;
        const CLICK = 1 << 2;
    }
}

/// Who handles events delivered to a listener
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerOwner {
    /// The presentation-wide controls (buttons, dots, Tab, slide-mode arrows)
    Controls,
    /// A mounted slide
    Slide(MountId),
}

/// A registered listener
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Listener {
    pub owner: ListenerOwner,
    pub kinds: EventKinds,
}

impl Listener {
    pub fn new(owner: ListenerOwner, kinds: EventKinds) -> Self {
        Self { owner, kinds }
    }
}

/// Registry of live listeners
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: SlotMap<ListenerKey, Listener>,
    /// Registration order, for stable dispatch order
    order: Vec<ListenerKey>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Register a listener, returning its key
    pub fn register(&mut self, listener: Listener) -> ListenerKey {
        let key = self.listeners.insert(listener);
        self.order.push(key);
        log::debug!("Registered {:?} listener for {:?}", listener.owner, listener.kinds);
        key
    }

    /// Remove a single listener
    pub fn remove(&mut self, key: ListenerKey) -> bool {
        if self.listeners.remove(key).is_some() {
            self.order.retain(|k| *k != key);
            true
        } else {
            false
        }
    }

    /// Remove every listener owned by `owner`, returning how many were removed
    pub fn release(&mut self, owner: ListenerOwner) -> usize {
        let before = self.listeners.len();
        self.listeners.retain(|_, listener| listener.owner != owner);
        let listeners = &self.listeners;
        self.order.retain(|k| listeners.contains_key(*k));
        let released = before - self.listeners.len();
        log::debug!("Released {} listener(s) of {:?}", released, owner);
        released
    }

    /// Whether `key` is still registered
    pub fn is_live(&self, key: ListenerKey) -> bool {
        self.listeners.contains_key(key)
    }

    pub fn get(&self, key: ListenerKey) -> Option<&Listener> {
        self.listeners.get(key)
    }

    /// Snapshot of live listeners receiving `kind`, in registration order
    pub fn subscribed(&self, kind: EventKinds) -> Vec<(ListenerKey, ListenerOwner)> {
        self.order
            .iter()
            .filter_map(|key| {
                self.listeners
                    .get(*key)
                    .filter(|listener| listener.kinds.intersects(kind))
                    .map(|listener| (*key, listener.owner))
            })
            .collect()
    }

    /// Number of live listeners
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Number of live listeners owned by `owner`
    pub fn count_owned_by(&self, owner: ListenerOwner) -> usize {
        self.listeners.values().filter(|l| l.owner == owner).count()
    }
}
