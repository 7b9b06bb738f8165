//! Deep copies through a serialized round trip.
//!
//! The source is encoded into a self-describing binary buffer (CBOR) and
//! decoded into a fresh value, so the copy shares no nested container or
//! optional with the source. Struct fields are keyed by name, so source and
//! destination types only need compatible serialized shapes, not the same
//! Rust type. Every float value survives the trip, infinities and NaN included.

use crate::error::{CopyError, CopyResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::any::type_name;
use tracing::debug;

/// Replaces `*dst` with an independent copy of `src`.
///
/// On error `dst` is left untouched.
pub fn deep_copy<D, S>(dst: &mut D, src: &S) -> CopyResult<()>
where
    D: DeserializeOwned,
    S: Serialize + ?Sized,
{
    *dst = deep_clone(src)?;
    Ok(())
}

/// Returns an independent copy of `src` decoded as a `D`.
pub fn deep_clone<D, S>(src: &S) -> CopyResult<D>
where
    D: DeserializeOwned,
    S: Serialize + ?Sized,
{
    let mut buf = Vec::new();
    ciborium::into_writer(src, &mut buf).map_err(CopyError::Encoding)?;
    debug!(
        source = type_name::<S>(),
        destination = type_name::<D>(),
        encoded_bytes = buf.len(),
        "deep copy encoded"
    );
    ciborium::from_reader(buf.as_slice()).map_err(CopyError::Decoding)
}
