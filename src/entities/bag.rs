//! AttributeBag - shared behaviour of all property bag types.
//!
//! A bag is a closed record of [`Slot`](super::descriptor::Slot)s plus one
//! `property_changed` event. Each bag type lists its descriptors once in
//! [`AttributeBag::DESCRIPTORS`]; clone, merge and snapshots walk that table
//! and write through the descriptors, so every assignment they make follows
//! the usual notification rules and no bag needs per-field copy code.

use std::fmt;

use log::debug;
use serde::Serialize;

use super::descriptor::{PropertyChangedEvent, PropertyDescriptor};
use super::property::PropertyHandle;
use crate::error::{Error, Result};

pub trait AttributeBag: Default + Sized + 'static {
    /// Type identifier string ("Polygon", "Polyline", ...)
    const TYPE_NAME: &'static str;

    /// Every slot of this bag type, in declaration order.
    const DESCRIPTORS: &'static [PropertyDescriptor<Self>];

    /// Event raised after any slot is replaced.
    fn property_changed(&self) -> &PropertyChangedEvent<Self>;

    /// Names of all slots, in declaration order.
    fn property_names() -> impl Iterator<Item = &'static str> {
        Self::DESCRIPTORS.iter().map(|d| d.name())
    }

    /// Look up a descriptor by property name.
    fn descriptor(name: &str) -> Option<&'static PropertyDescriptor<Self>> {
        Self::DESCRIPTORS.iter().find(|d| d.name() == name)
    }

    /// Current value of the named slot. `None` if unset or not a slot of this bag.
    fn get_property(&self, name: &str) -> Option<&PropertyHandle> {
        Self::descriptor(name).and_then(|d| d.get(self))
    }

    /// Number of slots currently set.
    fn set_count(&self) -> usize {
        Self::DESCRIPTORS.iter().filter(|d| d.is_set(self)).count()
    }

    /// True if every slot is unset.
    fn is_empty(&self) -> bool {
        self.set_count() == 0
    }

    /// Assign every slot of `result` to this bag's value, set or unset.
    ///
    /// Notifications fire on `result` for slots whose handle actually changes.
    fn clone_onto(&self, result: &mut Self) {
        let mut changed = 0;
        for d in Self::DESCRIPTORS {
            if d.set(result, d.get(self).cloned()) {
                changed += 1;
            }
        }
        debug!("{}: cloned onto target, {} slot(s) changed", Self::TYPE_NAME, changed);
    }

    /// Duplicate into `result`, or into a fresh bag if none is given.
    ///
    /// The returned bag keeps its own `property_changed` listeners; the
    /// source's listeners are never carried over.
    fn clone_bag(&self, result: Option<Self>) -> Self {
        let mut result = result.unwrap_or_default();
        self.clone_onto(&mut result);
        result
    }

    /// Fill each unset slot from `source`. Set slots are never overwritten.
    ///
    /// Returns the number of slots filled; each one raised `property_changed`.
    fn merge_from(&mut self, source: &Self) -> usize {
        let mut filled = 0;
        for d in Self::DESCRIPTORS {
            if d.is_set(self) {
                continue;
            }
            if let Some(value) = d.get(source).cloned() {
                d.set(self, Some(value));
                filled += 1;
            }
        }
        debug!("{}: merge filled {} slot(s)", Self::TYPE_NAME, filled);
        filled
    }

    /// [`merge_from`](Self::merge_from) for callers that may not have a source.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `source` is `None`; the bag is untouched.
    fn merge(&mut self, source: Option<&Self>) -> Result<()> {
        let source = source.ok_or(Error::InvalidArgument { name: "source" })?;
        self.merge_from(source);
        Ok(())
    }

    /// Serializable view of all slots, for diagnostics.
    fn snapshot(&self) -> BagSnapshot {
        BagSnapshot {
            type_name: Self::TYPE_NAME,
            slots: Self::DESCRIPTORS
                .iter()
                .map(|d| SlotSnapshot {
                    name: d.name(),
                    value: d.get(self).map(|h| format!("{:?}", h)),
                })
                .collect(),
        }
    }
}

/// One slot in a [`BagSnapshot`]. `value` is the handle's debug text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotSnapshot {
    pub name: &'static str,
    pub value: Option<String>,
}

impl SlotSnapshot {
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BagSnapshot {
    pub type_name: &'static str,
    pub slots: Vec<SlotSnapshot>,
}

impl BagSnapshot {
    pub fn get(&self, name: &str) -> Option<&SlotSnapshot> {
        self.slots.iter().find(|s| s.name == name)
    }
}

impl fmt::Display for BagSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.type_name)?;
        for slot in &self.slots {
            match &slot.value {
                Some(v) => writeln!(f, "  {:<16} {}", slot.name, v)?,
                None => writeln!(f, "  {:<16} <unset>", slot.name)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::entities::descriptor::PropertyChanged;
    use crate::entities::keys::*;
    use crate::entities::{PolygonGraphics, PolylineGraphics};

    fn record<B: AttributeBag>(bag: &B) -> Rc<RefCell<Vec<&'static str>>> {
        let names = Rc::new(RefCell::new(Vec::new()));
        let n = Rc::clone(&names);
        bag.property_changed()
            .subscribe(move |_, args: &PropertyChanged| n.borrow_mut().push(args.property_name));
        names
    }

    /// Set every slot to a fresh distinct handle.
    fn fill_all<B: AttributeBag>(bag: &mut B) {
        for (i, d) in B::DESCRIPTORS.iter().enumerate() {
            d.set(bag, Some(PropertyHandle::constant(i)));
        }
    }

    fn check_double_assign_fires_once<B: AttributeBag>() {
        for d in B::DESCRIPTORS {
            let mut bag = B::default();
            let names = record(&bag);
            let h = PropertyHandle::constant(d.name());

            d.set(&mut bag, Some(h.clone()));
            d.set(&mut bag, Some(h));
            assert_eq!(*names.borrow(), vec![d.name()], "{}.{}", B::TYPE_NAME, d.name());
        }
    }

    fn check_clone_roundtrip<B: AttributeBag>() {
        let mut src = B::default();
        // Every other slot set
        for d in B::DESCRIPTORS.iter().step_by(2) {
            d.set(&mut src, Some(PropertyHandle::constant(d.name())));
        }

        let mut copy = src.clone_bag(None);
        for d in B::DESCRIPTORS {
            assert_eq!(d.get(&copy), d.get(&src), "{}.{}", B::TYPE_NAME, d.name());
        }

        // Mutating the copy leaves the source alone
        let first = &B::DESCRIPTORS[0];
        let before = first.get(&src).cloned();
        first.set(&mut copy, Some(PropertyHandle::constant("changed")));
        assert_eq!(first.get(&src).cloned(), before);
    }

    fn check_merge_all_set_is_silent<B: AttributeBag>() {
        let mut bag = B::default();
        fill_all(&mut bag);
        let mut source = B::default();
        fill_all(&mut source);
        let before = bag.snapshot();
        let names = record(&bag);

        assert_eq!(bag.merge_from(&source), 0);
        assert!(names.borrow().is_empty());
        // Handles are untouched, not just equal-looking
        for d in B::DESCRIPTORS {
            assert_ne!(d.get(&bag), d.get(&source));
        }
        assert_eq!(bag.snapshot(), before);
    }

    #[test]
    fn test_double_assign_fires_once() {
        check_double_assign_fires_once::<PolygonGraphics>();
        check_double_assign_fires_once::<PolylineGraphics>();
    }

    #[test]
    fn test_clone_roundtrip() {
        check_clone_roundtrip::<PolygonGraphics>();
        check_clone_roundtrip::<PolylineGraphics>();
    }

    #[test]
    fn test_merge_all_set_is_silent() {
        check_merge_all_set_is_silent::<PolygonGraphics>();
        check_merge_all_set_is_silent::<PolylineGraphics>();
    }

    #[test]
    fn test_property_names_fixed_per_type() {
        let polygon: Vec<_> = PolygonGraphics::property_names().collect();
        assert_eq!(
            polygon,
            vec![
                A_SHOW,
                A_MATERIAL,
                A_HEIGHT,
                A_EXTRUDED_HEIGHT,
                A_GRANULARITY,
                A_ST_ROTATION,
                A_FILL,
                A_OUTLINE,
                A_OUTLINE_COLOR,
            ]
        );

        let polyline: Vec<_> = PolylineGraphics::property_names().collect();
        assert_eq!(polyline, vec![A_SHOW, A_MATERIAL, A_WIDTH, A_FOLLOW_SURFACE]);
    }

    #[test]
    fn test_descriptor_lookup() {
        assert!(PolygonGraphics::descriptor(A_OUTLINE_COLOR).is_some());
        assert!(PolygonGraphics::descriptor(A_WIDTH).is_none());
        assert!(PolylineGraphics::descriptor(A_WIDTH).is_some());

        let mut bag = PolylineGraphics::new();
        let w = PropertyHandle::constant(2.0_f32);
        bag.set_width(w.clone());
        assert_eq!(bag.get_property(A_WIDTH), Some(&w));
        assert_eq!(bag.get_property("nope"), None);
    }

    #[test]
    fn test_set_count_and_is_empty() {
        let mut bag = PolygonGraphics::new();
        assert!(bag.is_empty());

        bag.set_fill(PropertyHandle::constant(true));
        bag.set_height(PropertyHandle::constant(10.0));
        assert_eq!(bag.set_count(), 2);
        assert!(!bag.is_empty());

        fill_all(&mut bag);
        assert_eq!(bag.set_count(), PolygonGraphics::DESCRIPTORS.len());
    }

    #[test]
    fn test_snapshot() {
        let mut bag = PolylineGraphics::new();
        bag.set_width(PropertyHandle::constant(3_u32));

        let snap = bag.snapshot();
        assert_eq!(snap.type_name, "Polyline");
        assert_eq!(snap.slots.len(), 4);
        assert!(snap.get(A_WIDTH).unwrap().is_set());
        assert_eq!(
            snap.get(A_WIDTH).unwrap().value.as_deref(),
            Some("ConstantProperty { value: 3 }")
        );
        assert!(!snap.get(A_SHOW).unwrap().is_set());

        let text = snap.to_string();
        assert!(text.starts_with("Polyline:\n"));
        assert!(text.contains("<unset>"));

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["type_name"], "Polyline");
        assert_eq!(json["slots"][0]["name"], "show");
        assert!(json["slots"][0]["value"].is_null());
    }

    #[test]
    fn test_merge_none_is_invalid_argument() {
        let mut bag = PolylineGraphics::new();
        bag.set_show(PropertyHandle::constant(true));
        let before = bag.snapshot();

        let err = bag.merge(None).unwrap_err();
        assert_eq!(err, Error::InvalidArgument { name: "source" });
        assert_eq!(err.to_string(), "source is required.");
        assert_eq!(bag.snapshot(), before);
    }
}
