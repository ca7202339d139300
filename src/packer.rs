//! Grid tiling of net rectangles on a sheet.
//!
//! The packer lays copies of the net's bounding rectangle out in a plain
//! row/column grid, once as-is and once turned by 90 degrees, and keeps
//! whichever yields more nets. It does not try staggered rows, mixed
//! orientations on one sheet, or nesting crosses into each other's
//! concave corners, so the count is a lower bound on what a cutter could
//! achieve by hand.

use std::fmt;

use serde::Serialize;
use utoipa::ToSchema;

use crate::model::{NetRectangle, SheetDimensions};
use crate::types::{Extent2, Rectangular};

/// Placement of the net rectangle relative to the sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Net width runs along the sheet length.
    Unrotated,
    /// Net height runs along the sheet length.
    Rotated,
}

impl Orientation {
    pub const BOTH: [Orientation; 2] = [Orientation::Unrotated, Orientation::Rotated];

    /// Net extent as it lies on the sheet in this orientation.
    fn apply(&self, net: Extent2) -> Extent2 {
        match self {
            Orientation::Unrotated => net,
            Orientation::Rotated => net.rotated(),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Unrotated => write!(f, "as laid out"),
            Orientation::Rotated => write!(f, "rotated by 90°"),
        }
    }
}

/// Result of tiling the sheet in a single orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct GridTiling {
    pub orientation: Orientation,
    /// Nets side by side along the sheet length.
    pub nets_per_row: u64,
    /// Rows stacked along the sheet width.
    pub nets_per_col: u64,
    pub count: u64,
}

/// Both tilings of a sheet and the one chosen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackingPlan {
    pub unrotated: GridTiling,
    pub rotated: GridTiling,
    pub best: GridTiling,
}

impl PackingPlan {
    /// Number of nets that can be cut from the sheet.
    pub fn total_nets(&self) -> u64 {
        self.best.count
    }

    /// Returns `true` if not a single net fits.
    pub fn is_empty(&self) -> bool {
        self.best.count == 0
    }

    /// Both tilings, unrotated first.
    pub fn layouts(&self) -> [GridTiling; 2] {
        [self.unrotated, self.rotated]
    }

    /// Share of the sheet area covered by net bounding rectangles, in percent.
    ///
    /// Computed from per-axis ratios so that huge dimensions never overflow
    /// to `inf / inf`. Always within `0.0..=100.0`.
    pub fn utilization_percent(&self, sheet: &SheetDimensions, net: &NetRectangle) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let covered = self.total_nets() as f64
            * (net.width() / sheet.length)
            * (net.height() / sheet.width)
            * 100.0;
        if covered.is_nan() {
            return 0.0;
        }
        covered.clamp(0.0, 100.0)
    }
}

/// Tiles `sheet` with `net` placed in `orientation`.
pub fn tile(sheet: Extent2, net: Extent2, orientation: Orientation) -> GridTiling {
    let (nets_per_row, nets_per_col) = orientation.apply(net).grid_counts_in(&sheet);
    GridTiling {
        orientation,
        nets_per_row,
        nets_per_col,
        count: nets_per_row.saturating_mul(nets_per_col),
    }
}

/// Evaluates both orientations and selects the one with more nets.
///
/// Ties keep the unrotated layout.
pub fn pack_sheet(sheet: &SheetDimensions, net: &NetRectangle) -> PackingPlan {
    let sheet_extent = sheet.extent();
    let net_extent = net.extent();

    let unrotated = tile(sheet_extent, net_extent, Orientation::Unrotated);
    let rotated = tile(sheet_extent, net_extent, Orientation::Rotated);
    let best = if rotated.count > unrotated.count {
        rotated
    } else {
        unrotated
    };

    PackingPlan {
        unrotated,
        rotated,
        best,
    }
}

/// Maximum number of nets `net_width × net_height` that fit on a sheet
/// `sheet_length × sheet_width` in a row/column grid.
///
/// Expects validated positive inputs. Returns 0 when the net fits in
/// neither orientation.
///
/// # Examples
/// ```
/// use box_net_cutter::packer::compute_max_nets;
///
/// assert_eq!(compute_max_nets(100.0, 100.0, 25.0, 21.0), 16);
/// assert_eq!(compute_max_nets(20.0, 20.0, 25.0, 21.0), 0);
/// ```
pub fn compute_max_nets(
    sheet_length: f64,
    sheet_width: f64,
    net_width: f64,
    net_height: f64,
) -> u64 {
    let sheet = Extent2::new(sheet_length, sheet_width);
    let net = Extent2::new(net_width, net_height);

    Orientation::BOTH
        .iter()
        .map(|orientation| tile(sheet, net, *orientation).count)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::net::compute_net_dimensions;
    use test_case::test_case;

    fn sheet(length: f64, width: f64) -> SheetDimensions {
        SheetDimensions::new(length, width).expect("valid sheet")
    }

    #[test]
    fn reference_sheet_fits_sixteen_nets() {
        let net = compute_net_dimensions(10.0, 5.0, 8.0);
        let plan = pack_sheet(&sheet(100.0, 100.0), &net);

        assert_eq!(plan.unrotated.nets_per_row, 4);
        assert_eq!(plan.unrotated.nets_per_col, 4);
        assert_eq!(plan.rotated.count, 16);
        assert_eq!(plan.total_nets(), 16);
        assert_eq!(plan.best.orientation, Orientation::Unrotated);
    }

    #[test]
    fn small_sheet_fits_nothing() {
        let net = compute_net_dimensions(10.0, 5.0, 8.0);
        let plan = pack_sheet(&sheet(20.0, 20.0), &net);

        assert!(plan.is_empty());
        assert_eq!(plan.unrotated.nets_per_row, 0);
        assert_eq!(plan.rotated.nets_per_col, 0);
        assert_eq!(plan.utilization_percent(&sheet(20.0, 20.0), &net), 0.0);
    }

    #[test_case(100.0, 100.0, 25.0, 21.0, 16; "square sheet")]
    #[test_case(20.0, 20.0, 25.0, 21.0, 0; "net larger than sheet")]
    #[test_case(50.0, 21.0, 25.0, 21.0, 2; "exact fit one row")]
    #[test_case(21.0, 50.0, 25.0, 21.0, 2; "exact fit rotated")]
    #[test_case(24.0, 100.0, 25.0, 21.0, 4; "only rotated fits")]
    #[test_case(100.0, 24.0, 25.0, 21.0, 4; "only unrotated fits")]
    #[test_case(0.5, 0.5, 1.0, 1.0, 0; "sub unit sheet")]
    fn max_nets_matches_grid_count(sl: f64, sw: f64, nw: f64, nh: f64, expected: u64) {
        assert_eq!(compute_max_nets(sl, sw, nw, nh), expected);
    }

    #[test]
    fn rotation_wins_when_it_yields_more() {
        // Unrotated: floor(63/25)=2 × floor(25/21)=1
        // Rotated:   floor(63/21)=3 × floor(25/25)=1
        let net = compute_net_dimensions(10.0, 5.0, 8.0);
        let plan = pack_sheet(&sheet(63.0, 25.0), &net);

        assert_eq!(plan.unrotated.count, 2);
        assert_eq!(plan.rotated.count, 3);
        assert_eq!(plan.best.orientation, Orientation::Rotated);
        assert_eq!(plan.total_nets(), 3);
    }

    #[test]
    fn swapping_sheet_and_net_axes_is_symmetric() {
        let values = [0.7, 1.0, 3.5, 12.0, 25.0, 99.0];
        for &sl in &values {
            for &sw in &values {
                for &nw in &values {
                    for &nh in &values {
                        assert_eq!(
                            compute_max_nets(sl, sw, nw, nh),
                            compute_max_nets(sw, sl, nh, nw),
                            "asymmetric for sheet {sl}×{sw}, net {nw}×{nh}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn count_grows_with_sheet_and_shrinks_with_net() {
        let steps: Vec<f64> = (1..=40).map(|i| i as f64 * 2.5).collect();
        let (nw, nh) = (25.0, 21.0);

        for window in steps.windows(2) {
            let (small, large) = (window[0], window[1]);
            assert!(compute_max_nets(large, 100.0, nw, nh) >= compute_max_nets(small, 100.0, nw, nh));
            assert!(compute_max_nets(100.0, large, nw, nh) >= compute_max_nets(100.0, small, nw, nh));
            assert!(compute_max_nets(100.0, 80.0, large, nh) <= compute_max_nets(100.0, 80.0, small, nh));
            assert!(compute_max_nets(100.0, 80.0, nw, large) <= compute_max_nets(100.0, 80.0, nw, small));
        }
    }

    #[test]
    fn max_nets_agrees_with_plan() {
        let net = compute_net_dimensions(7.0, 3.0, 4.0);
        let sheet = sheet(120.0, 45.0);
        let plan = pack_sheet(&sheet, &net);
        assert_eq!(
            plan.total_nets(),
            compute_max_nets(sheet.length, sheet.width, net.width(), net.height())
        );
        assert_eq!(plan.layouts()[0], plan.unrotated);
        assert_eq!(plan.layouts()[1], plan.rotated);
    }

    #[test]
    fn utilization_reports_covered_area() {
        let net = compute_net_dimensions(10.0, 5.0, 8.0);
        let sheet = sheet(100.0, 100.0);
        let plan = pack_sheet(&sheet, &net);
        // 16 nets × 525 = 8400 of 10000
        assert!((plan.utilization_percent(&sheet, &net) - 84.0).abs() < 1e-9);
    }

    #[test]
    fn utilization_stays_finite_for_huge_dimensions() {
        let net = compute_net_dimensions(1e200, 1e200, 1e200);
        let sheet = sheet(1e300, 1e300);
        let plan = pack_sheet(&sheet, &net);
        let utilization = plan.utilization_percent(&sheet, &net);

        assert!(utilization.is_finite());
        assert!((0.0..=100.0).contains(&utilization));
    }

    #[test]
    fn huge_sheets_saturate_instead_of_overflowing() {
        assert_eq!(compute_max_nets(f64::MAX, f64::MAX, 1.0, 1.0), u64::MAX);
    }
}
