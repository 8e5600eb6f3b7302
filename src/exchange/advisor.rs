use ahash::{AHashMap, AHashSet};
use tracing::debug;

use crate::{
    graph::AdjacencyGraph,
    metrics::{owner_metrics, OwnerMetrics},
    parcel::{OwnerId, Parcel, ParcelId, RegionLevel},
};
use super::{score, Suggestion};

/// Limits and grouping for `suggest_exchanges`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeOptions {
    /// Maximum number of suggestions returned.
    pub max_suggestions: usize,
    /// Maximum number of accepted suggestions involving any one owner (`None` = unlimited).
    pub max_suggestions_per_owner: Option<usize>,
    /// Region level used for the same-region bonus.
    pub region: RegionLevel,
}

impl Default for ExchangeOptions {
    fn default() -> Self {
        Self { max_suggestions: 10, max_suggestions_per_owner: None, region: RegionLevel::Parish }
    }
}

/// Per-owner acceptance counters, checked against the per-owner quota.
struct Quota {
    limit: Option<usize>,
    accepted: AHashMap<OwnerId, usize>,
}

impl Quota {
    fn new(limit: Option<usize>) -> Self { Self { limit, accepted: AHashMap::new() } }

    fn is_full(&self, owner: OwnerId) -> bool {
        self.limit.is_some_and(|limit| self.accepted.get(&owner).copied().unwrap_or(0) >= limit)
    }

    fn record(&mut self, a: OwnerId, b: OwnerId) {
        *self.accepted.entry(a).or_default() += 1;
        *self.accepted.entry(b).or_default() += 1;
    }
}

/// Propose parcel swaps between neighboring owners, best first.
///
/// For every adjacency edge between parcels `p` (owner A) and `q` (owner B),
/// the parcels A could hand over in exchange for `q` are scored. Candidates
/// that border B's territory are preferred ("both touch"); otherwise all of
/// A's other parcels are considered. When `owner_graph` is given, owners that
/// are not adjacent in it never produce "both touch" candidates.
///
/// This is a greedy local search over adjacency edges; it does not look for a
/// globally optimal set of exchanges.
pub fn suggest_exchanges(
    parcels: &[Parcel],
    parcel_graph: &AdjacencyGraph<ParcelId>,
    owner_graph: Option<&AdjacencyGraph<OwnerId>>,
    options: &ExchangeOptions,
) -> Vec<Suggestion> {
    let metrics = owner_metrics(parcels);
    let by_id: AHashMap<ParcelId, &Parcel> = parcels.iter().map(|p| (p.id, p)).collect();

    let mut visited: AHashSet<(ParcelId, ParcelId)> = AHashSet::new();
    let mut quota = Quota::new(options.max_suggestions_per_owner);
    let mut suggestions = Vec::new();

    for p in parcels {
        let Some(neighbors) = parcel_graph.neighbors(p.id) else { continue };

        for q in neighbors.iter().filter_map(|id| by_id.get(id).copied()) {
            if q.owner_id == p.owner_id { continue }
            if !visited.insert((p.id.min(q.id), p.id.max(q.id))) { continue }

            let (owner_a, owner_b) = (&metrics[&p.owner_id], &metrics[&q.owner_id]);
            if quota.is_full(owner_a.owner_id) || quota.is_full(owner_b.owner_id) { continue }

            let (candidates, both_touch) = exchange_candidates(p, owner_a, owner_b, parcel_graph, owner_graph, &by_id);

            let average_delta = score::average_area_delta(
                owner_a.total_area + owner_b.total_area,
                owner_a.parcel_count + owner_b.parcel_count,
            );

            let mut scored = candidates.into_iter()
                .map(|c| {
                    let same_region = c.same_region(q, options.region);
                    let weight = score::region_weight(both_touch, same_region);
                    let total = score::exchange_score(c.area, q.area, average_delta, weight, both_touch);
                    (total, same_region, c)
                })
                .collect::<Vec<_>>();
            scored.sort_by(|a, b| a.0.total_cmp(&b.0));

            for (total_score, same_region, c) in scored {
                if total_score == 0.0 || !total_score.is_finite() { continue }
                if quota.is_full(owner_a.owner_id) || quota.is_full(owner_b.owner_id) { break }

                suggestions.push(build_suggestion(p, q, c, owner_a, owner_b, same_region, both_touch, total_score));
                quota.record(owner_a.owner_id, owner_b.owner_id);
            }
        }
    }

    debug!(edges = visited.len(), accepted = suggestions.len(), "scored exchange candidates");

    suggestions.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    suggestions.truncate(options.max_suggestions);
    suggestions
}

/// Parcels owner A could give up in exchange for a parcel of owner B adjoining `p`.
fn exchange_candidates<'a>(
    p: &Parcel,
    owner_a: &OwnerMetrics<'a>,
    owner_b: &OwnerMetrics<'a>,
    parcel_graph: &AdjacencyGraph<ParcelId>,
    owner_graph: Option<&AdjacencyGraph<OwnerId>>,
    by_id: &AHashMap<ParcelId, &Parcel>,
) -> (Vec<&'a Parcel>, bool) {
    let others = owner_a.parcels.iter().copied()
        .filter(|c| c.id != p.id)
        .collect::<Vec<_>>();

    let owners_adjacent = owner_graph
        .is_none_or(|graph| graph.contains_edge(owner_a.owner_id, owner_b.owner_id));

    let touching = if owners_adjacent {
        others.iter().copied()
            .filter(|c| borders_owner(c, owner_b.owner_id, parcel_graph, by_id))
            .collect::<Vec<_>>()
    } else {
        Vec::new()
    };

    if touching.is_empty() { (others, false) } else { (touching, true) }
}

/// True if `parcel` has a neighbor held by `owner`.
fn borders_owner(
    parcel: &Parcel,
    owner: OwnerId,
    parcel_graph: &AdjacencyGraph<ParcelId>,
    by_id: &AHashMap<ParcelId, &Parcel>,
) -> bool {
    parcel_graph.neighbors(parcel.id).is_some_and(|nbrs| {
        nbrs.iter().any(|id| by_id.get(id).is_some_and(|n| n.owner_id == owner))
    })
}

#[allow(clippy::too_many_arguments)]
fn build_suggestion(
    p: &Parcel,
    q: &Parcel,
    c: &Parcel,
    owner_a: &OwnerMetrics<'_>,
    owner_b: &OwnerMetrics<'_>,
    same_region: bool,
    both_touch: bool,
    total_score: f64,
) -> Suggestion {
    // A's received parcel joins the holding of `p`; B only consolidates when `c` borders it.
    let count_a = owner_a.parcel_count.saturating_sub(1);
    let count_b = if both_touch && owner_b.parcel_count > 1 { owner_b.parcel_count - 1 } else { owner_b.parcel_count };

    let owner_a_improvement = score::holding_improvement(owner_a.total_area, owner_a.average_area, c.area, q.area, count_a);
    let owner_b_improvement = score::holding_improvement(owner_b.total_area, owner_b.average_area, q.area, c.area, count_b);

    Suggestion {
        owner_a: owner_a.owner_id,
        owner_b: owner_b.owner_id,
        parcel_a: c.clone(),
        parcel_b: q.clone(),
        anchor_id: p.id,
        area_improvement: owner_a_improvement + owner_b_improvement,
        owner_a_improvement,
        owner_b_improvement,
        same_region,
        both_touch,
        total_score,
    }
}
