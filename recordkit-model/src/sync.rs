//! Best-effort synchronization between structurally similar records.
//!
//! Copies every same-named field from a source record into a destination
//! record, field by field and in place. Exact type matches are cloned
//! across; `Option<T>` and `T` are bridged in either direction. Anything
//! else is left alone without complaint. The destination is never replaced
//! as a whole, so fields the source does not know about keep their values.

use crate::field::{Field, Record};
use crate::shape::shape;
use std::any::{Any, type_name};
use tracing::{debug, trace};

/// Which fields a synchronization touched, by outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Identical types, value cloned.
    pub copied: Vec<&'static str>,
    /// Source was `Some(v)` of the destination's type, `v` copied.
    pub dereferenced: Vec<&'static str>,
    /// Destination is `Option<T>` of the source's type, set to `Some`.
    pub wrapped: Vec<&'static str>,
    /// Absent from the destination, shadowed or ambiguous, read-only, an
    /// empty optional, or no compatible conversion.
    pub skipped: Vec<&'static str>,
}

impl SyncReport {
    /// Number of destination fields that were written.
    #[must_use]
    pub fn written(&self) -> usize {
        self.copied.len() + self.dereferenced.len() + self.wrapped.len()
    }
}

#[derive(Debug, Clone, Copy)]
enum Outcome {
    Copied,
    Dereferenced,
    Wrapped,
    Skipped(&'static str),
}

/// Copies same-named fields of `src` into `dst` in place.
///
/// Names resolve the way field access does: a field declared directly
/// shadows a promoted one, and a name promoted twice at the same depth is
/// ambiguous and skipped. For each non-anonymous source field:
/// 1. no destination field of that name: skipped;
/// 2. same declared type and writable destination: cloned;
/// 3. source `Option<T>` holding a value, destination `T`: value copied;
/// 4. destination `Option<T>`, source `T`: destination set to `Some`;
/// 5. otherwise: left untouched.
///
/// Never fails. A field table whose accessor yields a value of a type other
/// than the declared one is a broken `Record` implementation and panics.
pub fn synchronize<D: Record, S: Record>(dst: &mut D, src: &S) {
    synchronize_report(dst, src);
}

/// [`synchronize`], returning which fields were written and how.
pub fn synchronize_report<D: Record, S: Record>(dst: &mut D, src: &S) -> SyncReport {
    let src_shape = shape::<S>();
    let dst_shape = shape::<D>();
    let mut report = SyncReport::default();

    // Fault before the first write, not halfway through.
    verify_table(src_shape.fields(), src);
    verify_table(dst_shape.fields(), &*dst);

    for (i, field) in src_shape.fields().iter().enumerate() {
        if field.is_anonymous() {
            continue;
        }
        let name = field.name();
        // Both sides are read through name resolution, so a shadowed
        // promoted field never stands in for the one declared directly.
        let outcome = match (src_shape.position(name), dst_shape.get(name)) {
            (None, _) => Outcome::Skipped("ambiguous"),
            (Some(resolved), _) if resolved != i => Outcome::Skipped("shadowed"),
            (_, None) => Outcome::Skipped("absent"),
            (_, Some(target)) => sync_field(field, src, target, dst),
        };

        match outcome {
            Outcome::Copied => report.copied.push(name),
            Outcome::Dereferenced => report.dereferenced.push(name),
            Outcome::Wrapped => report.wrapped.push(name),
            Outcome::Skipped(reason) => {
                trace!(field = name, reason, "field skipped");
                report.skipped.push(name);
                continue;
            }
        }
        trace!(field = name, outcome = ?outcome, "field written");
    }

    debug!(
        source = type_name::<S>(),
        destination = type_name::<D>(),
        written = report.written(),
        skipped = report.skipped.len(),
        "records synchronized"
    );
    report
}

fn sync_field<D: Record, S: Record>(
    field: &Field<S>,
    src: &S,
    target: &Field<D>,
    dst: &mut D,
) -> Outcome {
    let value = field.get(src);

    let Some(slot) = target.get_mut(dst) else {
        return Outcome::Skipped("read-only");
    };
    assert_declared(target.name(), type_name::<D>(), target, &*slot);

    let (from, to) = (field.tag(), target.tag());
    if from == to {
        fault_unless(from.clone_value(value, slot), field.name());
        Outcome::Copied
    } else if from.pointee_id() == Some(to.id()) {
        match from.unwrap_value(value, slot) {
            Some(true) => Outcome::Dereferenced,
            Some(false) => Outcome::Skipped("empty optional"),
            None => fault(field.name()),
        }
    } else if to.pointee_id() == Some(from.id()) {
        fault_unless(to.wrap_value(value, slot), field.name());
        Outcome::Wrapped
    } else {
        Outcome::Skipped("incompatible types")
    }
}

fn verify_table<R: 'static>(fields: &[Field<R>], record: &R) {
    for field in fields {
        assert_declared(field.name(), type_name::<R>(), field, field.get(record));
    }
}

fn assert_declared<R: 'static>(name: &str, record: &str, field: &Field<R>, value: &dyn Any) {
    if !field.tag().matches(value) {
        panic!(
            "precondition fault: field `{name}` of {record} is declared as {} but its accessor yields another type",
            field.tag().name()
        );
    }
}

fn fault_unless(ok: bool, name: &str) {
    if !ok {
        fault(name);
    }
}

fn fault(name: &str) -> ! {
    panic!("precondition fault: field `{name}` changed type during synchronization")
}
