//! Property-changed notification.
//!
//! A small observer list: views subscribe with a callback and get a
//! `SubscriptionId` back that can be used to detach again.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct SubscriptionId;
}

type Callback<P> = Box<dyn FnMut(&P)>;

pub struct PropertyNotifier<P> {
    subscribers: SlotMap<SubscriptionId, Callback<P>>,
}

impl<P> PropertyNotifier<P> {
    pub fn new() -> Self {
        Self {
            subscribers: SlotMap::with_key(),
        }
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&P) + 'static) -> SubscriptionId {
        self.subscribers.insert(Box::new(callback))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id).is_some()
    }

    pub fn notify(&mut self, property: &P) {
        for callback in self.subscribers.values_mut() {
            callback(property);
        }
    }

}

impl<P> Default for PropertyNotifier<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> std::fmt::Debug for PropertyNotifier<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyNotifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
