//! Reading and writing single fields by name.

use crate::error::{FieldError, FieldResult};
use crate::field::Record;
use crate::shape::shape;
use std::any::{Any, type_name};

/// Borrows the field called `name`, type-erased.
pub fn field_ref<'a, R: Record>(record: &'a R, name: &str) -> Option<&'a dyn Any> {
    shape::<R>().get(name).map(|field| field.get(record))
}

/// Borrows the field called `name` as a `T`. `None` if the field is absent
/// or has a different type.
pub fn field_value<'a, R: Record, T: Any>(record: &'a R, name: &str) -> Option<&'a T> {
    field_ref(record, name)?.downcast_ref::<T>()
}

/// Mutably borrows the field called `name` as a `T`. `None` if the field is
/// absent, read-only, or has a different type.
pub fn field_mut<'a, R: Record, T: Any>(record: &'a mut R, name: &str) -> Option<&'a mut T> {
    shape::<R>()
        .get(name)?
        .get_mut(record)?
        .downcast_mut::<T>()
}

/// Assigns `value` to the field called `name`.
pub fn set_field<R: Record, T: Any>(record: &mut R, name: &str, value: T) -> FieldResult<()> {
    let shape = shape::<R>();
    let field = shape
        .get(name)
        .ok_or_else(|| FieldError::NotFound(name.to_string()))?;
    let slot = field
        .get_mut(record)
        .ok_or_else(|| FieldError::ReadOnly(name.to_string()))?;
    let slot = slot
        .downcast_mut::<T>()
        .ok_or_else(|| FieldError::TypeMismatch {
            field: name.to_string(),
            expected: field.tag().name(),
            found: type_name::<T>(),
        })?;
    *slot = value;
    Ok(())
}
