//! Record model for RecordKit.
//!
//! Records describe themselves through a static field table instead of
//! runtime reflection:
//! - [`Record`]: implemented by every structured record, returns its [`Field`] table
//! - [`TypeTag`]: runtime identity of a declared field type, aware of `Option<T>`
//! - [`enumerate_fields`]: the flattened, ordered field list of a record shape
//! - [`synchronize`]: best-effort, in-place merge of same-named fields
//! - [`deep_copy`]: a fully independent copy through a serialized round trip
//!
//! Tables are written by hand with the [`Field`] constructors or generated
//! with [`record_fields!`].
//!
//! # Example
//!
//! ```
//! use recordkit_model::{record_fields, synchronize};
//!
//! #[derive(Default)]
//! struct Inbound {
//!     name: String,
//!     age: Option<u32>,
//! }
//!
//! #[derive(Default)]
//! struct Stored {
//!     name: String,
//!     age: u32,
//!     nickname: Option<String>,
//! }
//!
//! record_fields!(Inbound { name, age: optional });
//! record_fields!(Stored { name, age, nickname: optional });
//!
//! let inbound = Inbound { name: "lin".into(), age: Some(31) };
//! let mut stored = Stored::default();
//! synchronize(&mut stored, &inbound);
//!
//! assert_eq!(stored.name, "lin");
//! assert_eq!(stored.age, 31);
//! ```

mod access;
mod copy;
mod error;
mod field;
mod macros;
mod shape;
mod sync;
mod tag;

pub use access::{field_mut, field_ref, field_value, set_field};
pub use copy::{deep_clone, deep_copy};
pub use error::{CopyError, CopyResult, FieldError, FieldResult};
pub use field::{Field, FieldDescriptor, Record};
pub use shape::{Shape, enumerate_fields, shape};
pub use sync::{SyncReport, synchronize, synchronize_report};
pub use tag::TypeTag;
