//! Flattened record shapes.
//!
//! A [`Shape`] is a record's field table with every embedded sub-record
//! expanded in place, plus a name index. Shapes are built once per record
//! type and shared process-wide.

use crate::field::{Field, FieldDescriptor, Record};
use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};
use tracing::trace;

type ShapeRegistry = RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>;

static SHAPES: LazyLock<ShapeRegistry> = LazyLock::new(|| RwLock::new(HashMap::new()));

/// The flattened field table of a record type.
pub struct Shape<R> {
    fields: Vec<Field<R>>,
    index: HashMap<&'static str, usize>,
}

impl<R: Record> Shape<R> {
    fn build() -> Self {
        let mut fields = Vec::new();
        let mut depths = Vec::new();
        flatten(R::fields(), 0, &mut fields, &mut depths);

        // name -> (depth, position); position is None when two fields tie
        // at the shallowest depth.
        let mut resolved: HashMap<&'static str, (usize, Option<usize>)> = HashMap::new();
        for (i, (field, &depth)) in fields.iter().zip(&depths).enumerate() {
            match resolved.get_mut(field.name()) {
                None => {
                    resolved.insert(field.name(), (depth, Some(i)));
                }
                Some(entry) if depth < entry.0 => *entry = (depth, Some(i)),
                Some(entry) if depth == entry.0 => entry.1 = None,
                Some(_) => {}
            }
        }
        let index = resolved
            .into_iter()
            .filter_map(|(name, (_, position))| Some((name, position?)))
            .collect();
        Self { fields, index }
    }

    /// All fields in enumeration order.
    #[must_use]
    pub fn fields(&self) -> &[Field<R>] {
        &self.fields
    }

    /// Looks a field up by name.
    ///
    /// A field declared directly shadows a promoted one of the same name.
    /// Names that tie at their shallowest depth are ambiguous and resolve
    /// to nothing.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field<R>> {
        self.position(name).map(|i| &self.fields[i])
    }

    /// Position in [`fields`](Self::fields) that `name` resolves to.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    #[must_use]
    pub fn descriptors(&self) -> Vec<FieldDescriptor> {
        self.fields.iter().map(Field::descriptor).collect()
    }
}

fn flatten<R: 'static>(
    fields: Vec<Field<R>>,
    depth: usize,
    out: &mut Vec<Field<R>>,
    depths: &mut Vec<usize>,
) {
    for field in fields {
        match field.into_embedded() {
            Ok(children) => flatten(children, depth + 1, out, depths),
            Err(field) => {
                out.push(field);
                depths.push(depth);
            }
        }
    }
}

/// Returns the shared shape of `R`, building it on first use.
pub fn shape<R: Record>() -> Arc<Shape<R>> {
    let key = TypeId::of::<R>();
    let cached = SHAPES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
        .cloned();
    if let Some(shape) = cached.and_then(|s| s.downcast::<Shape<R>>().ok()) {
        return shape;
    }

    let built = Arc::new(Shape::<R>::build());
    trace!(record = type_name::<R>(), fields = built.fields.len(), "record shape built");
    let erased: Arc<dyn Any + Send + Sync> = built.clone();
    let mut shapes = SHAPES.write().unwrap_or_else(PoisonError::into_inner);
    // Another thread may have won the race; keep whichever landed first.
    let entry = shapes.entry(key).or_insert(erased);
    Arc::clone(entry).downcast::<Shape<R>>().unwrap_or(built)
}

/// Lists every field of `R` in declaration order, with embedded
/// sub-records expanded in place of the embedding field.
#[must_use]
pub fn enumerate_fields<R: Record>() -> Vec<FieldDescriptor> {
    shape::<R>().descriptors()
}
