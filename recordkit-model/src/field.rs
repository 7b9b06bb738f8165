use crate::tag::TypeTag;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

pub(crate) type Getter<R> = Arc<dyn for<'a> Fn(&'a R) -> &'a (dyn Any) + Send + Sync>;
pub(crate) type Setter<R> = Arc<dyn for<'a> Fn(&'a mut R) -> &'a mut (dyn Any) + Send + Sync>;

/// A structured record that can describe its own fields.
///
/// `fields` returns the table in declaration order. Embedded sub-records
/// appear as a single [`Field::embedded`] entry; flattening is done by
/// [`shape`](crate::shape), not by the implementor.
pub trait Record: Any + Sized {
    fn fields() -> Vec<Field<Self>>;
}

/// Descriptor of one enumerated field: what [`enumerate_fields`](crate::enumerate_fields) yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub declared_type: TypeTag,
    pub anonymous: bool,
}

/// One row of a record's field table.
pub struct Field<R> {
    name: &'static str,
    tag: TypeTag,
    anonymous: bool,
    get: Getter<R>,
    get_mut: Option<Setter<R>>,
    embedded: Option<Vec<Field<R>>>,
}

impl<R: 'static> Field<R> {
    /// A plain, writable field of type `T`.
    pub fn value<T: Any + Clone>(
        name: &'static str,
        get: fn(&R) -> &T,
        get_mut: fn(&mut R) -> &mut T,
    ) -> Self {
        Self {
            name,
            tag: TypeTag::of::<T>(),
            anonymous: false,
            get: getter(move |r: &R| get(r) as &dyn Any),
            get_mut: Some(setter(move |r: &mut R| get_mut(r) as &mut dyn Any)),
            embedded: None,
        }
    }

    /// A writable optional slot holding a `T`.
    pub fn optional<T: Any + Clone>(
        name: &'static str,
        get: fn(&R) -> &Option<T>,
        get_mut: fn(&mut R) -> &mut Option<T>,
    ) -> Self {
        Self {
            name,
            tag: TypeTag::optional::<T>(),
            anonymous: false,
            get: getter(move |r: &R| get(r) as &dyn Any),
            get_mut: Some(setter(move |r: &mut R| get_mut(r) as &mut dyn Any)),
            embedded: None,
        }
    }

    /// An anonymous embedded sub-record whose fields are promoted into `R`.
    ///
    /// The entry itself is never enumerated; its fields take its place.
    pub fn embedded<E: Record + Clone>(
        name: &'static str,
        get: fn(&R) -> &E,
        get_mut: fn(&mut R) -> &mut E,
    ) -> Self {
        let children = E::fields()
            .into_iter()
            .map(|child| child.project(get, get_mut))
            .collect();
        Self {
            embedded: Some(children),
            anonymous: true,
            ..Self::value(name, get, get_mut)
        }
    }

    /// A field with caller-supplied, type-erased accessors, for tables
    /// produced by a generator rather than written against concrete types.
    ///
    /// Both accessors must yield values of `tag`'s type. A table that breaks
    /// this is a programmer error: synchronization panics on it.
    pub fn erased<G, M>(name: &'static str, tag: TypeTag, get: G, get_mut: M) -> Self
    where
        G: for<'a> Fn(&'a R) -> &'a (dyn Any) + Send + Sync + 'static,
        M: for<'a> Fn(&'a mut R) -> &'a mut (dyn Any) + Send + Sync + 'static,
    {
        Self {
            name,
            tag,
            anonymous: false,
            get: getter(get),
            get_mut: Some(setter(get_mut)),
            embedded: None,
        }
    }

    /// Drops the mutator: the synchronizer and [`set_field`](crate::set_field)
    /// will never write this field.
    #[must_use]
    pub fn read_only(mut self) -> Self {
        self.get_mut = None;
        self
    }

    /// Marks the field anonymous without flattening it. The synchronizer
    /// skips anonymous fields.
    #[must_use]
    pub fn anonymous(mut self) -> Self {
        self.anonymous = true;
        self
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    #[must_use]
    pub fn is_writable(&self) -> bool {
        self.get_mut.is_some()
    }

    #[must_use]
    pub fn is_embedded(&self) -> bool {
        self.embedded.is_some()
    }

    #[must_use]
    pub fn descriptor(&self) -> FieldDescriptor {
        FieldDescriptor {
            name: self.name,
            declared_type: self.tag,
            anonymous: self.anonymous,
        }
    }

    /// Reads the field from `record`.
    pub fn get<'a>(&self, record: &'a R) -> &'a dyn Any {
        (self.get)(record)
    }

    /// Borrows the field mutably, or `None` when read-only.
    pub fn get_mut<'a>(&self, record: &'a mut R) -> Option<&'a mut dyn Any> {
        self.get_mut.as_ref().map(|f| f(record))
    }

    pub(crate) fn into_embedded(self) -> Result<Vec<Field<R>>, Self> {
        match self.embedded {
            Some(children) => Ok(children),
            None => Err(self),
        }
    }

    /// Re-roots a field of an embedded record `R` onto its container `P`.
    fn project<P: 'static>(self, outer: fn(&P) -> &R, outer_mut: fn(&mut P) -> &mut R) -> Field<P> {
        let inner = self.get;
        Field {
            name: self.name,
            tag: self.tag,
            anonymous: self.anonymous,
            get: getter(move |p: &P| inner(outer(p))),
            get_mut: self
                .get_mut
                .map(|inner_mut| setter(move |p: &mut P| inner_mut(outer_mut(p)))),
            embedded: self.embedded.map(|children| {
                children
                    .into_iter()
                    .map(|child| child.project(outer, outer_mut))
                    .collect()
            }),
        }
    }
}

impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            tag: self.tag,
            anonymous: self.anonymous,
            get: Arc::clone(&self.get),
            get_mut: self.get_mut.clone(),
            embedded: self.embedded.clone(),
        }
    }
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("anonymous", &self.anonymous)
            .field("writable", &self.get_mut.is_some())
            .field("embedded", &self.embedded)
            .finish()
    }
}

fn getter<R, F>(f: F) -> Getter<R>
where
    F: for<'a> Fn(&'a R) -> &'a (dyn Any) + Send + Sync + 'static,
{
    Arc::new(f)
}

fn setter<R, F>(f: F) -> Setter<R>
where
    F: for<'a> Fn(&'a mut R) -> &'a mut (dyn Any) + Send + Sync + 'static,
{
    Arc::new(f)
}
