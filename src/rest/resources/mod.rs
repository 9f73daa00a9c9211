//! Typed records for Management API resources.
//!
//! Each record is a hand-written serde struct mirroring one API resource.
//! Fields are optional because the API omits what a given operation does
//! not return; two records of the same type compare equal field-for-field.
//! Identity (`id`) is assigned by the server, never by this crate.

mod attribute;
mod customer;
mod inventory;
mod metafield;
mod segment;
mod subscriber;

pub use attribute::{Attribute, AttributeValue};
pub use customer::{Address, Customer, StoreCreditAmount};
pub use inventory::{Inventory, InventoryIdentity, InventoryLocation};
pub use metafield::Metafield;
pub use segment::Segment;
pub use subscriber::Subscriber;
