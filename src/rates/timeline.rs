//! Module `rates::timeline`.
//!
//! Builds a step-function rate timeline over an accrual window from sparse,
//! possibly-unsorted APY samples.
//!
//! The rate in force at time `T` is the value of the latest sample with
//! `timestamp <= T`; if no sample precedes `T`, the earliest sample's value
//! is carried backwards as the initial rate. The window is partitioned at
//! the union of its bounds and every sample timestamp strictly inside it,
//! yielding contiguous rate-constant segments with no gaps or overlaps.

/// A single observed annualized yield at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RatePoint {
    /// Observation time, unix seconds.
    pub timestamp: i64,
    /// Annual percentage yield as a decimal fraction.
    pub apy: f64,
}

/// A maximal interval `[start, end)` over which the rate curve is constant.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RateSegment {
    /// Segment start, unix seconds (inclusive).
    pub start: i64,
    /// Segment end, unix seconds (exclusive).
    pub end: i64,
    /// APY in force over the segment.
    pub apy: f64,
}

/// Drops samples with non-finite APYs and sorts the remainder ascending by
/// timestamp. The sort is stable, so later duplicates of a timestamp keep
/// their input order and the last one wins in step-function lookups.
pub fn sanitize_rate_points(points: &[RatePoint]) -> Vec<RatePoint> {
    let mut sanitized: Vec<RatePoint> = points
        .iter()
        .copied()
        .filter(|point| point.apy.is_finite())
        .collect();
    sanitized.sort_by_key(|point| point.timestamp);
    sanitized
}

/// Partitions `[start, end)` into contiguous rate-constant segments.
///
/// Edge cases:
/// - `end <= start` returns no segments (the engine rejects such windows
///   before ever building a timeline).
/// - No usable samples returns a single zero-APY segment spanning the whole
///   window: absence of data is a zero-rate assumption, not an error.
///
/// Guarantee: the returned segments satisfy
/// `segments[0].start == start`, `segments[last].end == end`, and
/// `segments[i].end == segments[i + 1].start` for every adjacent pair.
pub fn build_rate_segments(points: &[RatePoint], start: i64, end: i64) -> Vec<RateSegment> {
    if end <= start {
        return Vec::new();
    }

    let sanitized = sanitize_rate_points(points);
    if sanitized.is_empty() {
        return vec![RateSegment {
            start,
            end,
            apy: 0.0,
        }];
    }

    let mut boundaries = Vec::with_capacity(sanitized.len() + 2);
    boundaries.push(start);
    for point in &sanitized {
        if point.timestamp > start && point.timestamp < end {
            boundaries.push(point.timestamp);
        }
    }
    boundaries.push(end);
    boundaries.dedup();

    // Cursor over the sorted samples; advances monotonically across segments.
    let mut latest: Option<usize> = None;
    for (i, point) in sanitized.iter().enumerate() {
        if point.timestamp <= start {
            latest = Some(i);
        } else {
            break;
        }
    }

    let mut last_apy = match latest {
        Some(i) => sanitized[i].apy,
        None => sanitized[0].apy,
    };
    let mut next = latest.map_or(0, |i| i + 1);

    let mut segments = Vec::with_capacity(boundaries.len() - 1);
    for window in boundaries.windows(2) {
        let (seg_start, seg_end) = (window[0], window[1]);
        if seg_end <= seg_start {
            continue;
        }

        while next < sanitized.len() && sanitized[next].timestamp <= seg_start {
            last_apy = sanitized[next].apy;
            next += 1;
        }

        segments.push(RateSegment {
            start: seg_start,
            end: seg_end,
            apy: last_apy,
        });
    }

    segments
}
