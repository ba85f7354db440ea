use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

new_key_type! {
    /// Handle returned by [`Emitter::subscribe`].
    pub struct ListenerKey;
}

type Listener<E> = Rc<dyn Fn(&E)>;

/// Cloneable handle to a set of listeners for notifications of type `E`.
///
/// Clones share the same registry, so a widget can keep one handle and give
/// another to its host.
pub struct Emitter<E>(Rc<RefCell<SlotMap<ListenerKey, Listener<E>>>>);

impl<E> Clone for Emitter<E> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<E> Default for Emitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Emitter<E> {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(SlotMap::with_key())))
    }

    pub fn subscribe(&self, f: impl Fn(&E) + 'static) -> ListenerKey {
        self.0.borrow_mut().insert(Rc::new(f))
    }

    /// Returns `false` if the key was already removed.
    pub fn unsubscribe(&self, key: ListenerKey) -> bool {
        self.0.borrow_mut().remove(key).is_some()
    }

    pub fn listener_count(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn emit(&self, event: &E) {
        // snapshot so listeners may (un)subscribe while being called
        let listeners: SmallVec<[Listener<E>; 4]> = self.0.borrow().values().cloned().collect();
        log::trace!("emitting to {} listener(s)", listeners.len());
        for l in listeners {
            l(event);
        }
    }
}
