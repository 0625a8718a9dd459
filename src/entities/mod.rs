//! Entities module - attribute bags for scene objects
//!
//! Each bag type is a fixed set of property slots plus a change event:
//! - descriptor: the get/set-and-notify accessor every slot goes through
//! - bag: generic clone / merge / snapshot over a bag's descriptor table
//! - polygon, polyline: concrete bag types

pub mod bag;
pub mod descriptor;
pub mod keys;
pub mod polygon;
pub mod polyline;
pub mod property;

pub use bag::{AttributeBag, BagSnapshot, SlotSnapshot};
pub use descriptor::{
    PropertyChanged, PropertyChangedEvent, PropertyDescriptor, Slot, create_property_descriptor,
};
pub use polygon::PolygonGraphics;
pub use polyline::PolylineGraphics;
pub use property::{ConstantProperty, Property, PropertyHandle};
