use std::cell::{Cell, OnceCell};

/// Lazily computed value owned by a widget.
///
/// Writes call [`Memo::invalidate`]; the next read recomputes. This is how
/// relayout is coalesced: any number of invalidations between two reads cost
/// one computation.
pub struct Memo<T> {
    cached: OnceCell<T>,
    computations: Cell<u64>,
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Memo<T> {
    pub fn new() -> Self {
        Self {
            cached: OnceCell::new(),
            computations: Cell::new(0),
        }
    }

    pub fn invalidate(&mut self) {
        self.cached.take();
    }

    pub fn is_valid(&self) -> bool {
        self.cached.get().is_some()
    }

    pub fn get_or_compute(&self, compute: impl FnOnce() -> T) -> &T {
        self.cached.get_or_init(|| {
            self.computations.set(self.computations.get() + 1);
            compute()
        })
    }

    /// Number of times the value has been computed so far.
    pub fn computations(&self) -> u64 {
        self.computations.get()
    }
}
