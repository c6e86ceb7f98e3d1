use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use crate::error::{ClosestError, Result};
use crate::geo::{Coordinate, Metric};

/// Winner of a linear scan. `point` is a copy of `candidates[index]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Nearest {
    pub index: usize,
    pub point: Coordinate,
    pub distance: f32,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Match {
    pub query_index: usize,
    pub query: Coordinate,
    pub nearest: Nearest,
}

/// Linear scan for the candidate closest to `query`.
///
/// Ties keep the earliest candidate; a NaN score never beats a number.
pub fn closest_point(query: Coordinate, candidates: &[Coordinate], metric: Metric) -> Result<Nearest> {
    let (first, rest) = candidates.split_first().ok_or(ClosestError::EmptyReferenceSet)?;

    let mut best = Nearest {
        index: 0,
        point: *first,
        distance: metric.distance(query, *first),
    };
    for (offset, &candidate) in rest.iter().enumerate() {
        let distance = metric.distance(query, candidate);
        trace!(index = offset + 1, distance, "scored candidate");
        if OrderedFloat(distance) < OrderedFloat(best.distance) {
            best = Nearest {
                index: offset + 1,
                point: candidate,
                distance,
            };
        }
    }

    debug!(%query, index = best.index, distance = best.distance, "closest point found");
    Ok(best)
}

/// Matches every query against `candidates`, in query order.
pub fn closest_points(queries: &[Coordinate], candidates: &[Coordinate], metric: Metric) -> Result<Vec<Match>> {
    if candidates.is_empty() {
        return Err(ClosestError::EmptyReferenceSet);
    }
    queries
        .iter()
        .enumerate()
        .map(|(query_index, &query)| {
            Ok(Match {
                query_index,
                query,
                nearest: closest_point(query, candidates, metric)?,
            })
        })
        .collect()
}
