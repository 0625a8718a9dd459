//! PolylineGraphics - time-dynamic appearance of a polyline.

use super::bag::AttributeBag;
use super::descriptor::{
    PropertyChangedEvent, PropertyDescriptor, Slot, create_property_descriptor,
};
use super::keys::{A_FOLLOW_SURFACE, A_MATERIAL, A_SHOW, A_WIDTH};
use super::property::PropertyHandle;

/// Polyline attribute bag.
///
/// Slots (all unset on construction):
/// - show: Boolean, visibility
/// - material: material property for the line
/// - width: Number, width in pixels
/// - follow_surface: Boolean, segments follow the ellipsoid surface
#[derive(Debug, Default)]
pub struct PolylineGraphics {
    show: Slot,
    material: Slot,
    width: Slot,
    follow_surface: Slot,
    property_changed: PropertyChangedEvent<PolylineGraphics>,
}

impl PolylineGraphics {
    pub const SHOW: PropertyDescriptor<Self> =
        create_property_descriptor(A_SHOW, |b: &Self| &b.show, |b: &mut Self| &mut b.show);
    pub const MATERIAL: PropertyDescriptor<Self> = create_property_descriptor(
        A_MATERIAL,
        |b: &Self| &b.material,
        |b: &mut Self| &mut b.material,
    );
    pub const WIDTH: PropertyDescriptor<Self> =
        create_property_descriptor(A_WIDTH, |b: &Self| &b.width, |b: &mut Self| &mut b.width);
    pub const FOLLOW_SURFACE: PropertyDescriptor<Self> = create_property_descriptor(
        A_FOLLOW_SURFACE,
        |b: &Self| &b.follow_surface,
        |b: &mut Self| &mut b.follow_surface,
    );

    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self) -> Option<&PropertyHandle> {
        Self::SHOW.get(self)
    }

    pub fn set_show(&mut self, value: impl Into<Option<PropertyHandle>>) {
        Self::SHOW.set(self, value.into());
    }

    pub fn material(&self) -> Option<&PropertyHandle> {
        Self::MATERIAL.get(self)
    }

    pub fn set_material(&mut self, value: impl Into<Option<PropertyHandle>>) {
        Self::MATERIAL.set(self, value.into());
    }

    pub fn width(&self) -> Option<&PropertyHandle> {
        Self::WIDTH.get(self)
    }

    pub fn set_width(&mut self, value: impl Into<Option<PropertyHandle>>) {
        Self::WIDTH.set(self, value.into());
    }

    pub fn follow_surface(&self) -> Option<&PropertyHandle> {
        Self::FOLLOW_SURFACE.get(self)
    }

    pub fn set_follow_surface(&mut self, value: impl Into<Option<PropertyHandle>>) {
        Self::FOLLOW_SURFACE.set(self, value.into());
    }
}

impl AttributeBag for PolylineGraphics {
    const TYPE_NAME: &'static str = "Polyline";
    const DESCRIPTORS: &'static [PropertyDescriptor<Self>] =
        &[Self::SHOW, Self::MATERIAL, Self::WIDTH, Self::FOLLOW_SURFACE];

    fn property_changed(&self) -> &PropertyChangedEvent<Self> {
        &self.property_changed
    }
}

impl Clone for PolylineGraphics {
    fn clone(&self) -> Self {
        self.clone_bag(None)
    }
}
