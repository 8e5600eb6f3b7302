//! CSV parcel registry reading.

mod read;

pub use read::*;
