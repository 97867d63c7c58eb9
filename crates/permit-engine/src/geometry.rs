//! Fill-zone area accumulation from CAD geometry
//!
//! Drawings mark embankment zones as hatches or closed polylines. The CAD
//! library already reports hatch boundary areas; polygon areas come from the
//! shoelace formula. Open polylines never bound a fill zone and malformed
//! entities are skipped one by one, so a single bad entity cannot abort the
//! whole computation.

use shared_types::{CadEntity, Point};
use tracing::warn;

/// One closed region contributing fill area
#[derive(Debug, Clone, PartialEq)]
pub enum ClosedRegion {
    /// Vertex polygon, arbitrary winding order
    Polygon(Vec<Point>),
    /// Hatch with a library-computed boundary area
    Hatch(f64),
}

impl ClosedRegion {
    pub fn area(&self) -> f64 {
        match self {
            ClosedRegion::Polygon(points) => shoelace_area(points),
            ClosedRegion::Hatch(area) => area.abs(),
        }
    }
}

/// How multiple closed regions combine into one fill area
///
/// Drawings either mark several separate fill zones (sum them) or draw one
/// bounded site plus construction lines (take the largest). The choice is a
/// policy parameter, never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AreaPolicy {
    /// Every qualifying region is a separate fill zone
    #[default]
    Sum,
    /// The drawing shows one bounded site; keep the largest region only
    Largest,
}

/// Polygon area via the shoelace formula
///
/// `|Σ (x_i·y_{i+1} − x_{i+1}·y_i)| / 2` with indices modulo the vertex
/// count. The absolute value makes winding order irrelevant. Fewer than
/// three vertices is degenerate and yields `0.0`.
pub fn shoelace_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut twice_area = 0.0;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        twice_area += a.x * b.y - b.x * a.y;
    }
    twice_area.abs() / 2.0
}

/// Collect the closed regions from a model-space entity list
///
/// Open polylines, polylines with fewer than three vertices, non-finite
/// coordinates and hatches without a computable boundary area are skipped
/// individually.
pub fn regions_from_entities(entities: &[CadEntity]) -> Vec<ClosedRegion> {
    let mut regions = Vec::new();
    for entity in entities {
        match entity {
            CadEntity::Hatch { area: Some(area) } if area.is_finite() => {
                regions.push(ClosedRegion::Hatch(*area));
            }
            CadEntity::Hatch { .. } => {
                warn!("skipping hatch without a computable boundary area");
            }
            CadEntity::LwPolyline { points, closed } | CadEntity::Polyline { points, closed } => {
                if !closed {
                    continue;
                }
                if points.len() < 3 {
                    warn!(vertices = points.len(), "skipping degenerate polyline");
                    continue;
                }
                if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
                    warn!("skipping polyline with non-finite coordinates");
                    continue;
                }
                regions.push(ClosedRegion::Polygon(points.clone()));
            }
            CadEntity::Text { .. } | CadEntity::MText { .. } => {}
        }
    }
    regions
}

/// Total fill area under the given accumulation policy
///
/// Returns `None` when no region contributes positive area, so callers keep
/// "no area found" distinct from "area is zero".
pub fn compute_area(regions: &[ClosedRegion], policy: AreaPolicy) -> Option<f64> {
    let positive = regions.iter().map(ClosedRegion::area).filter(|a| *a > 0.0);
    let total = match policy {
        AreaPolicy::Sum => positive.sum::<f64>(),
        AreaPolicy::Largest => positive.fold(0.0_f64, f64::max),
    };
    (total > 0.0).then_some(total)
}
