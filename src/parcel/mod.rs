mod parcel;
mod region;

pub use parcel::{OwnerId, Parcel, ParcelId};
pub use region::RegionLevel;
