//! Card system: arrows, definitions, instances, and registry.
//!
//! ## Key Types
//!
//! - `Arrow`: strength plus effect on one side of a card
//! - `CardDefinition`: immutable card data with four arrows
//! - `Placeable`: a card instance in play and its location
//! - `CardRegistry`: card definition lookup, loadable from JSON

pub mod arrow;
pub mod definition;
pub mod instance;
pub mod registry;

pub use arrow::{Arrow, ArrowEffect, ArrowStrength};
pub use definition::{CardDefinition, CardId};
pub use instance::{Location, Placeable};
pub use registry::CardRegistry;
