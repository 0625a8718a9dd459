//! Observable property descriptors.
//!
//! A descriptor binds a public property name to one backing slot of a bag
//! type and holds the only copy of the compare-store-notify logic. Bag types
//! declare one `const` descriptor per slot, wrap them in plain `name()` /
//! `set_name()` methods, and list them in [`AttributeBag::DESCRIPTORS`] so
//! clone and merge can walk every slot generically.
//!
//! Setter contract:
//! 1. Identity-equal value (or unset onto unset): return, nothing happens
//! 2. Otherwise the slot is replaced first
//! 3. Then, only if anyone listens, `property_changed` is raised once
//!
//! Listeners therefore always observe the committed value.

use std::fmt;

use log::trace;

use super::bag::AttributeBag;
use super::property::PropertyHandle;
use crate::core::event::Event;

/// Backing storage of one bag field. `None` is the unset state.
pub type Slot = Option<PropertyHandle>;

/// Args of a bag's `property_changed` event. The bag itself is the sender.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyChanged {
    pub property_name: &'static str,
    pub new_value: Option<PropertyHandle>,
    pub old_value: Option<PropertyHandle>,
}

/// Event type every bag exposes.
pub type PropertyChangedEvent<B> = Event<B, PropertyChanged>;

/// Accessor pair for one named slot of bag type `B`.
pub struct PropertyDescriptor<B> {
    name: &'static str,
    slot: fn(&B) -> &Slot,
    slot_mut: fn(&mut B) -> &mut Slot,
}

// Manual impls: derives would demand `B: Clone`
impl<B> Clone for PropertyDescriptor<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for PropertyDescriptor<B> {}

impl<B> fmt::Debug for PropertyDescriptor<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .finish()
    }
}

/// Build the descriptor for `name`, backed by the slot the two projections reach.
///
/// Usable in `const` items:
/// ```ignore
/// pub const SHOW: PropertyDescriptor<Self> =
///     create_property_descriptor(A_SHOW, |b: &Self| &b.show, |b: &mut Self| &mut b.show);
/// ```
pub const fn create_property_descriptor<B>(
    name: &'static str,
    slot: fn(&B) -> &Slot,
    slot_mut: fn(&mut B) -> &mut Slot,
) -> PropertyDescriptor<B> {
    PropertyDescriptor {
        name,
        slot,
        slot_mut,
    }
}

impl<B> PropertyDescriptor<B> {
    /// Public property name, as reported in [`PropertyChanged::property_name`].
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Current value, `None` if unset.
    pub fn get<'a>(&self, bag: &'a B) -> Option<&'a PropertyHandle> {
        (self.slot)(bag).as_ref()
    }

    pub fn is_set(&self, bag: &B) -> bool {
        (self.slot)(bag).is_some()
    }
}

impl<B: AttributeBag> PropertyDescriptor<B> {
    /// Assign `value` to the slot. Returns true if the slot changed.
    pub fn set(&self, bag: &mut B, value: Option<PropertyHandle>) -> bool {
        let slot = (self.slot_mut)(bag);
        if *slot == value {
            return false;
        }
        let old_value = std::mem::replace(slot, value);
        trace!("{}.{}: {:?} -> {:?}", B::TYPE_NAME, self.name, old_value, (self.slot)(bag));

        let bag: &B = bag;
        let event = bag.property_changed();
        if event.has_subscribers() {
            let args = PropertyChanged {
                property_name: self.name,
                new_value: (self.slot)(bag).clone(),
                old_value,
            };
            event.raise(bag, &args);
        }
        true
    }
}
