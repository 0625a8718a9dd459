//! PolygonGraphics - time-dynamic appearance and extent of a polygon.
//!
//! Every field is a [`PropertyHandle`] the visualizer samples over time;
//! this type only stores, swaps and announces them.

use super::bag::AttributeBag;
use super::descriptor::{
    PropertyChangedEvent, PropertyDescriptor, Slot, create_property_descriptor,
};
use super::keys::{
    A_EXTRUDED_HEIGHT, A_FILL, A_GRANULARITY, A_HEIGHT, A_MATERIAL, A_OUTLINE, A_OUTLINE_COLOR,
    A_SHOW, A_ST_ROTATION,
};
use super::property::PropertyHandle;

/// Polygon attribute bag.
///
/// Slots (all unset on construction):
/// - show: Boolean, visibility
/// - material: material property for the fill
/// - height: Number, height above the surface (unset = on the surface)
/// - extruded_height: Number; when set, the polygon becomes a volume
///   spanning `height` to `extruded_height`
/// - granularity: Number, radians between each lat/lon sample point
/// - st_rotation: Number, texture coordinate rotation in radians (CCW)
/// - fill, outline: Boolean
/// - outline_color: Color
#[derive(Debug, Default)]
pub struct PolygonGraphics {
    show: Slot,
    material: Slot,
    height: Slot,
    extruded_height: Slot,
    granularity: Slot,
    st_rotation: Slot,
    fill: Slot,
    outline: Slot,
    outline_color: Slot,
    property_changed: PropertyChangedEvent<PolygonGraphics>,
}

impl PolygonGraphics {
    pub const SHOW: PropertyDescriptor<Self> =
        create_property_descriptor(A_SHOW, |b: &Self| &b.show, |b: &mut Self| &mut b.show);
    pub const MATERIAL: PropertyDescriptor<Self> = create_property_descriptor(
        A_MATERIAL,
        |b: &Self| &b.material,
        |b: &mut Self| &mut b.material,
    );
    pub const HEIGHT: PropertyDescriptor<Self> =
        create_property_descriptor(A_HEIGHT, |b: &Self| &b.height, |b: &mut Self| &mut b.height);
    pub const EXTRUDED_HEIGHT: PropertyDescriptor<Self> = create_property_descriptor(
        A_EXTRUDED_HEIGHT,
        |b: &Self| &b.extruded_height,
        |b: &mut Self| &mut b.extruded_height,
    );
    pub const GRANULARITY: PropertyDescriptor<Self> = create_property_descriptor(
        A_GRANULARITY,
        |b: &Self| &b.granularity,
        |b: &mut Self| &mut b.granularity,
    );
    pub const ST_ROTATION: PropertyDescriptor<Self> = create_property_descriptor(
        A_ST_ROTATION,
        |b: &Self| &b.st_rotation,
        |b: &mut Self| &mut b.st_rotation,
    );
    pub const FILL: PropertyDescriptor<Self> =
        create_property_descriptor(A_FILL, |b: &Self| &b.fill, |b: &mut Self| &mut b.fill);
    pub const OUTLINE: PropertyDescriptor<Self> = create_property_descriptor(
        A_OUTLINE,
        |b: &Self| &b.outline,
        |b: &mut Self| &mut b.outline,
    );
    pub const OUTLINE_COLOR: PropertyDescriptor<Self> = create_property_descriptor(
        A_OUTLINE_COLOR,
        |b: &Self| &b.outline_color,
        |b: &mut Self| &mut b.outline_color,
    );

    /// Create a bag with every slot unset.
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

    pub fn height(&self) -> Option<&PropertyHandle> {
        Self::HEIGHT.get(self)
    }

    pub fn set_height(&mut self, value: impl Into<Option<PropertyHandle>>) {
        Self::HEIGHT.set(self, value.into());
    }

    pub fn extruded_height(&self) -> Option<&PropertyHandle> {
        Self::EXTRUDED_HEIGHT.get(self)
    }

    pub fn set_extruded_height(&mut self, value: impl Into<Option<PropertyHandle>>) {
        Self::EXTRUDED_HEIGHT.set(self, value.into());
    }

    pub fn granularity(&self) -> Option<&PropertyHandle> {
        Self::GRANULARITY.get(self)
    }

    pub fn set_granularity(&mut self, value: impl Into<Option<PropertyHandle>>) {
        Self::GRANULARITY.set(self, value.into());
    }

    pub fn st_rotation(&self) -> Option<&PropertyHandle> {
        Self::ST_ROTATION.get(self)
    }

    pub fn set_st_rotation(&mut self, value: impl Into<Option<PropertyHandle>>) {
        Self::ST_ROTATION.set(self, value.into());
    }

    pub fn fill(&self) -> Option<&PropertyHandle> {
        Self::FILL.get(self)
    }

    pub fn set_fill(&mut self, value: impl Into<Option<PropertyHandle>>) {
        Self::FILL.set(self, value.into());
    }

    pub fn outline(&self) -> Option<&PropertyHandle> {
        Self::OUTLINE.get(self)
    }

    pub fn set_outline(&mut self, value: impl Into<Option<PropertyHandle>>) {
        Self::OUTLINE.set(self, value.into());
    }

    pub fn outline_color(&self) -> Option<&PropertyHandle> {
        Self::OUTLINE_COLOR.get(self)
    }

    pub fn set_outline_color(&mut self, value: impl Into<Option<PropertyHandle>>) {
        Self::OUTLINE_COLOR.set(self, value.into());
    }
}

impl AttributeBag for PolygonGraphics {
    const TYPE_NAME: &'static str = "Polygon";
    const DESCRIPTORS: &'static [PropertyDescriptor<Self>] = &[
        Self::SHOW,
        Self::MATERIAL,
        Self::HEIGHT,
        Self::EXTRUDED_HEIGHT,
        Self::GRANULARITY,
        Self::ST_ROTATION,
        Self::FILL,
        Self::OUTLINE,
        Self::OUTLINE_COLOR,
    ];

    fn property_changed(&self) -> &PropertyChangedEvent<Self> {
        &self.property_changed
    }
}

/// Copies slot handles into a new bag; listeners stay with the original.
impl Clone for PolygonGraphics {
    fn clone(&self) -> Self {
        self.clone_bag(None)
    }
}
