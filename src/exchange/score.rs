//! Arithmetic of the exchange heuristic.

/// Score of receiving a parcel of `neighbor_area` in exchange for one of
/// `candidate_area`.
///
/// Size mismatch is penalised by `2·|Δ|`, divided by the min/max area ratio so
/// that dissimilar parcels are penalised harder; the consolidation gain
/// `average_delta` is added with the given `weight`. A swap outside adjacent
/// territory that hands over less than it receives scores −∞.
pub(super) fn exchange_score(
    candidate_area: f64,
    neighbor_area: f64,
    average_delta: f64,
    weight: f64,
    both_touch: bool,
) -> f64 {
    if !both_touch && neighbor_area > candidate_area {
        return f64::NEG_INFINITY;
    }

    let (lo, hi) = (candidate_area.min(neighbor_area), candidate_area.max(neighbor_area));
    let similarity = if hi > 0.0 { lo / hi } else { 1.0 };

    -2.0 * (candidate_area - neighbor_area).abs() / similarity + average_delta * weight
}

/// Weight of the consolidation gain: adjacent territories count double, a
/// shared region counts once, anything else not at all.
#[inline]
pub(super) fn region_weight(both_touch: bool, same_region: bool) -> f64 {
    if both_touch { 2.0 } else if same_region { 1.0 } else { 0.0 }
}

/// Change in the two owners' combined average holding size when one of their
/// holdings is absorbed by a neighbor, i.e. the combined count drops by one.
pub(super) fn average_area_delta(total_area: f64, parcel_count: usize) -> f64 {
    if parcel_count < 2 { return 0.0 }
    let count = parcel_count as f64;
    total_area / (count - 1.0) - total_area / count
}

/// Change of an owner's average holding after giving away `given` and receiving
/// `received`, ending up with `new_count` holdings.
pub(super) fn holding_improvement(
    total_area: f64,
    average_area: f64,
    given: f64,
    received: f64,
    new_count: usize,
) -> f64 {
    if new_count == 0 { return 0.0 }
    (total_area - given + received) / new_count as f64 - average_area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_areas_score_only_the_weighted_gain() {
        assert_eq!(exchange_score(100.0, 100.0, 5.0, 2.0, true), 10.0);
        assert_eq!(exchange_score(100.0, 100.0, 5.0, 0.0, false), 0.0);
    }

    #[test]
    fn mismatch_is_amplified_by_area_ratio() {
        // |200 - 100| = 100, ratio 0.5 → -2·100 / 0.5 = -400
        assert_eq!(exchange_score(200.0, 100.0, 0.0, 1.0, false), -400.0);
        assert_eq!(exchange_score(100.0, 200.0, 0.0, 2.0, true), -400.0);
        assert_eq!(exchange_score(100.0, 200.0, 50.0, 2.0, true), -300.0);
    }

    #[test]
    fn larger_neighbor_without_shared_border_is_rejected() {
        assert_eq!(exchange_score(100.0, 150.0, 1e9, 1.0, false), f64::NEG_INFINITY);
    }

    #[test]
    fn zero_area_parcels() {
        assert_eq!(exchange_score(0.0, 0.0, 3.0, 1.0, false), 3.0);
        assert_eq!(exchange_score(10.0, 0.0, 3.0, 1.0, false), f64::NEG_INFINITY);
    }

    #[test]
    fn weights() {
        assert_eq!(region_weight(true, false), 2.0);
        assert_eq!(region_weight(true, true), 2.0);
        assert_eq!(region_weight(false, true), 1.0);
        assert_eq!(region_weight(false, false), 0.0);
    }

    #[test]
    fn average_delta_for_one_fewer_bucket() {
        // 600 over 3 holdings → 200, over 2 → 300
        assert_eq!(average_area_delta(600.0, 3), 100.0);
        assert_eq!(average_area_delta(600.0, 1), 0.0);
    }

    #[test]
    fn holding_improvement_tracks_new_average() {
        // owner holds 100 + 200 (avg 150), gives 100, receives 250, one holding absorbed
        assert_eq!(holding_improvement(300.0, 150.0, 100.0, 250.0, 1), 300.0);
        assert_eq!(holding_improvement(300.0, 150.0, 100.0, 100.0, 2), 0.0);
        assert_eq!(holding_improvement(300.0, 150.0, 100.0, 100.0, 0), 0.0);
    }
}
