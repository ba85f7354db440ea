//! # Input, listeners, and derived values
//!
//! `notch-core` holds the small framework pieces the slider engine in
//! `notch-ui` is built on. Nothing here reaches into a window system: hosts
//! translate their own events into these types and hand them over.
//!
//! - `InputEvent`: pointer, keyboard, focus and resize events.
//! - `Emitter<E>`: a cloneable registry of listeners for outbound
//!   notifications.
//! - `Memo<T>`: a lazily recomputed value that is invalidated on writes.
//!
//! ## Emitters
//!
//! ```rust
//! use notch_core::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let events: Emitter<i32> = Emitter::new();
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! let key = events.subscribe({
//!     let seen = seen.clone();
//!     move |v: &i32| seen.borrow_mut().push(*v)
//! });
//!
//! events.emit(&1);
//! events.unsubscribe(key);
//! events.emit(&2);
//! assert_eq!(*seen.borrow(), vec![1]);
//! ```
//!
//! ## Derived values
//!
//! `Memo` caches the result of an expensive computation until the owner
//! invalidates it. Several invalidations between two reads collapse into a
//! single recomputation:
//!
//! ```rust
//! use notch_core::Memo;
//!
//! let mut layout: Memo<usize> = Memo::new();
//! assert_eq!(*layout.get_or_compute(|| 3), 3);
//! layout.invalidate();
//! layout.invalidate();
//! assert_eq!(*layout.get_or_compute(|| 4), 4);
//! assert_eq!(layout.computations(), 2);
//! ```

pub mod direction;
pub mod emitter;
pub mod error;
pub mod geometry;
pub mod input;
pub mod memo;
pub mod semantics;

pub use direction::*;
pub use emitter::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use memo::*;
pub use semantics::*;
