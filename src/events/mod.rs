//! Notification sink between the engine and its presentation layer.
//!
//! The board never calls into rendering code directly. It queues
//! `PlacementEvent`s as cards are previewed, committed, returned, or
//! destroyed, and callers either drain the queue or hand it to a
//! `PlacementObserver`.

mod event;
mod observer;

pub use event::PlacementEvent;
pub use observer::PlacementObserver;
