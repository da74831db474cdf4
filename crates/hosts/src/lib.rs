//! Host records and the CSV file they live in.
//!
//! The CSV is the durable store: it is decoded into [`HostRecord`]s,
//! normalized into a canonical order and written back with [`encode`].

mod codec;
mod error;
mod normalize;
mod record;

pub use codec::{COLUMNS, Decoder, HEADER, NumericPolicy, decode, encode};
pub use error::CsvError;
pub use normalize::{Normalized, Sorted, dedupe, normalize, sort};
pub use record::HostRecord;
