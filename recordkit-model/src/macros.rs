/// Implements [`Record`](crate::Record) for a struct by listing its fields.
///
/// Each entry is a field name, optionally followed by a mode:
/// - `name`: a plain writable field
/// - `name: optional`: an `Option<T>` slot the synchronizer may bridge to `T`
/// - `name: embedded`: an anonymous sub-record whose fields are promoted
/// - `name: read_only`: a plain field that is never written through the table
/// - `name: anonymous`: enumerated with `anonymous = true` and never synchronized
///
/// Fields left out of the list are invisible to the record engine.
///
/// ```
/// use recordkit_model::{record_fields, enumerate_fields};
///
/// #[derive(Clone, Default)]
/// struct Audit {
///     created_by: String,
/// }
///
/// #[derive(Default)]
/// struct Member {
///     id: i64,
///     audit: Audit,
///     phone: Option<String>,
/// }
///
/// record_fields!(Audit { created_by });
/// record_fields!(Member { id: read_only, audit: embedded, phone: optional });
///
/// let names: Vec<_> = enumerate_fields::<Member>().iter().map(|f| f.name).collect();
/// assert_eq!(names, ["id", "created_by", "phone"]);
/// ```
#[macro_export]
macro_rules! record_fields {
    (@field $record:ident, $field:ident) => {
        $crate::Field::value(
            ::std::stringify!($field),
            |r: &$record| &r.$field,
            |r: &mut $record| &mut r.$field,
        )
    };
    (@field $record:ident, $field:ident, optional) => {
        $crate::Field::optional(
            ::std::stringify!($field),
            |r: &$record| &r.$field,
            |r: &mut $record| &mut r.$field,
        )
    };
    (@field $record:ident, $field:ident, embedded) => {
        $crate::Field::embedded(
            ::std::stringify!($field),
            |r: &$record| &r.$field,
            |r: &mut $record| &mut r.$field,
        )
    };
    (@field $record:ident, $field:ident, read_only) => {
        $crate::record_fields!(@field $record, $field).read_only()
    };
    (@field $record:ident, $field:ident, anonymous) => {
        $crate::record_fields!(@field $record, $field).anonymous()
    };
    ($record:ident { $($field:ident $(: $mode:ident)?),* $(,)? }) => {
        impl $crate::Record for $record {
            fn fields() -> ::std::vec::Vec<$crate::Field<Self>> {
                ::std::vec![
                    $($crate::record_fields!(@field $record, $field $(, $mode)?)),*
                ]
            }
        }
    };
}
