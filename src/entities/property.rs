//! Property handles: opaque references to possibly time-varying values.
//!
//! Bags never sample a property. They store the handle and compare it by
//! identity only. Producing a value at a given time is the job of the
//! sampling layer, which recovers the concrete type via [`PropertyHandle::downcast_ref`].

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Upcast helper so `dyn Property` can hand out `&dyn Any`.
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
}

// Blanket impl for all qualifying types
impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A possibly time-dynamic value, interpreted outside this crate.
pub trait Property: AsAny + fmt::Debug {
    /// True if the value never varies with time.
    fn is_constant(&self) -> bool {
        false
    }
}

/// Shared reference to a [`Property`].
///
/// Equality is reference identity: two handles are equal only if they point
/// at the same property object. Structurally equal but distinct properties
/// compare unequal.
#[derive(Clone)]
pub struct PropertyHandle(Rc<dyn Property>);

impl PropertyHandle {
    pub fn new<P: Property>(property: P) -> Self {
        Self(Rc::new(property))
    }

    /// Handle for a [`ConstantProperty`] holding `value`.
    pub fn constant<T: fmt::Debug + 'static>(value: T) -> Self {
        Self::new(ConstantProperty::new(value))
    }

    /// Same underlying property object?
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn property(&self) -> &dyn Property {
        &*self.0
    }

    pub fn is_constant(&self) -> bool {
        self.0.is_constant()
    }

    /// Downcast to the concrete property type.
    ///
    /// IMPORTANT: must deref to `dyn Property` before `as_any()`. Otherwise the
    /// blanket `AsAny` impl for `Rc<dyn Property>` answers and the downcast
    /// always fails.
    pub fn downcast_ref<P: Property>(&self) -> Option<&P> {
        (*self.0).as_any().downcast_ref::<P>()
    }
}

impl From<Rc<dyn Property>> for PropertyHandle {
    fn from(rc: Rc<dyn Property>) -> Self {
        Self(rc)
    }
}

impl PartialEq for PropertyHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for PropertyHandle {}

impl fmt::Debug for PropertyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

/// Property whose value is the same at every time.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantProperty<T> {
    value: T,
}

impl<T> ConstantProperty<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Debug + 'static> Property for ConstantProperty<T> {
    fn is_constant(&self) -> bool {
        true
    }
}
