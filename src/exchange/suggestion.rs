use serde::{Deserialize, Serialize};

use crate::parcel::{OwnerId, Parcel, ParcelId};

/// A proposed swap: `owner_a` hands `parcel_a` to `owner_b` and receives
/// `parcel_b`, which adjoins `owner_a`'s parcel `anchor_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub owner_a: OwnerId,
    pub owner_b: OwnerId,
    pub parcel_a: Parcel,
    pub parcel_b: Parcel,
    pub anchor_id: ParcelId,
    /// Sum of both owners' average-holding changes.
    pub area_improvement: f64,
    /// Change of `owner_a`'s average holding size after the swap.
    pub owner_a_improvement: f64,
    /// Change of `owner_b`'s average holding size after the swap.
    pub owner_b_improvement: f64,
    pub same_region: bool,
    pub both_touch: bool,
    pub total_score: f64,
}

impl Suggestion {
    /// True if `owner` is one of the two parties.
    #[inline]
    pub fn involves(&self, owner: OwnerId) -> bool {
        self.owner_a == owner || self.owner_b == owner
    }
}
