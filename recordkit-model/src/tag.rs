//! Runtime identity of declared field types.

use std::any::{Any, TypeId, type_name};
use std::fmt;

/// The declared type of a record field.
///
/// Equality is `TypeId` equality. Tags for `Option<T>` additionally know
/// their pointee `T`, which is what lets the synchronizer dereference and
/// wrap optional slots without knowing `T` statically.
#[derive(Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
    clone_into: fn(&dyn Any, &mut dyn Any) -> bool,
    pointee: Option<Pointee>,
}

#[derive(Clone, Copy)]
struct Pointee {
    id: TypeId,
    name: &'static str,
    unwrap_into: fn(&dyn Any, &mut dyn Any) -> Option<bool>,
    wrap_into: fn(&dyn Any, &mut dyn Any) -> bool,
}

impl TypeTag {
    /// Tag for a plain value of type `T`.
    #[must_use]
    pub fn of<T: Any + Clone>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
            clone_into: clone_into::<T>,
            pointee: None,
        }
    }

    /// Tag for an optional slot, `Option<T>`.
    #[must_use]
    pub fn optional<T: Any + Clone>() -> Self {
        Self {
            id: TypeId::of::<Option<T>>(),
            name: type_name::<Option<T>>(),
            clone_into: clone_into::<Option<T>>,
            pointee: Some(Pointee {
                id: TypeId::of::<T>(),
                name: type_name::<T>(),
                unwrap_into: unwrap_into::<T>,
                wrap_into: wrap_into::<T>,
            }),
        }
    }

    /// The underlying `TypeId`.
    #[must_use]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// The Rust type name, for diagnostics only.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` for `Option<T>` tags.
    #[must_use]
    pub fn is_optional(&self) -> bool {
        self.pointee.is_some()
    }

    /// `TypeId` of `T` for an `Option<T>` tag.
    #[must_use]
    pub fn pointee_id(&self) -> Option<TypeId> {
        self.pointee.map(|p| p.id)
    }

    /// Type name of `T` for an `Option<T>` tag.
    #[must_use]
    pub fn pointee_name(&self) -> Option<&'static str> {
        self.pointee.map(|p| p.name)
    }

    /// Returns `true` if `value` is an instance of this tag's type.
    #[must_use]
    pub fn matches(&self, value: &dyn Any) -> bool {
        value.type_id() == self.id
    }

    /// Clones `src` over `dst`; both must be of this tag's type.
    /// Returns `false` on a type mismatch.
    pub(crate) fn clone_value(&self, src: &dyn Any, dst: &mut dyn Any) -> bool {
        (self.clone_into)(src, dst)
    }

    /// Copies the pointee of `src` (an `Option<T>` of this tag) into `dst: T`.
    ///
    /// `Some(true)` when copied, `Some(false)` when `src` is `None`, `None`
    /// on a type mismatch or when this is not an optional tag.
    pub(crate) fn unwrap_value(&self, src: &dyn Any, dst: &mut dyn Any) -> Option<bool> {
        self.pointee.and_then(|p| (p.unwrap_into)(src, dst))
    }

    /// Stores `Some(src.clone())` into `dst`, an `Option<T>` of this tag.
    /// Returns `false` on a type mismatch or when this is not an optional tag.
    pub(crate) fn wrap_value(&self, src: &dyn Any, dst: &mut dyn Any) -> bool {
        self.pointee.is_some_and(|p| (p.wrap_into)(src, dst))
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeTag").field(&self.name).finish()
    }
}

fn clone_into<T: Any + Clone>(src: &dyn Any, dst: &mut dyn Any) -> bool {
    match (src.downcast_ref::<T>(), dst.downcast_mut::<T>()) {
        (Some(src), Some(dst)) => {
            dst.clone_from(src);
            true
        }
        _ => false,
    }
}

fn unwrap_into<T: Any + Clone>(src: &dyn Any, dst: &mut dyn Any) -> Option<bool> {
    let src = src.downcast_ref::<Option<T>>()?;
    let dst = dst.downcast_mut::<T>()?;
    Some(match src {
        Some(value) => {
            dst.clone_from(value);
            true
        }
        None => false,
    })
}

fn wrap_into<T: Any + Clone>(src: &dyn Any, dst: &mut dyn Any) -> bool {
    match (src.downcast_ref::<T>(), dst.downcast_mut::<Option<T>>()) {
        (Some(src), Some(dst)) => {
            *dst = Some(src.clone());
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_tag_knows_its_pointee() {
        let tag = TypeTag::optional::<String>();
        assert!(tag.is_optional());
        assert_eq!(tag.pointee_id(), Some(TypeId::of::<String>()));
        assert_eq!(tag, TypeTag::optional::<String>());
        assert_ne!(tag, TypeTag::of::<String>());
    }

    #[test]
    fn unwrap_copies_some_and_ignores_none() {
        let tag = TypeTag::optional::<i32>();
        let mut dst = 1i32;
        assert_eq!(tag.unwrap_value(&Some(9i32), &mut dst), Some(true));
        assert_eq!(dst, 9);
        assert_eq!(tag.unwrap_value(&None::<i32>, &mut dst), Some(false));
        assert_eq!(dst, 9);
    }

    #[test]
    fn mismatched_types_report_false() {
        let tag = TypeTag::of::<i32>();
        let mut dst = String::new();
        assert!(!tag.clone_value(&5i32, &mut dst));
        assert!(!TypeTag::of::<i32>().wrap_value(&5i32, &mut dst));
    }
}
