//! Common types and traits for 2D sheet geometry.
//!
//! Sheets and nets are both plain axis-aligned rectangles. This module
//! provides the shared extent type and the trait that lets the packer
//! treat them uniformly.

/// Extent of an axis-aligned rectangle.
///
/// `along` runs parallel to the sheet length, `across` parallel to the sheet
/// width. Nets use the same convention: `along` is the net width and
/// `across` the net height in their unrotated placement.
///
/// # Examples
/// ```
/// use box_net_cutter::types::Extent2;
///
/// let net = Extent2::new(25.0, 21.0);
/// assert_eq!(net.rotated(), Extent2::new(21.0, 25.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent2 {
    pub along: f64,
    pub across: f64,
}

impl Extent2 {
    /// Creates a new extent.
    #[inline]
    pub const fn new(along: f64, across: f64) -> Self {
        Self { along, across }
    }

    /// The same rectangle turned by 90 degrees.
    #[inline]
    pub const fn rotated(&self) -> Self {
        Self::new(self.across, self.along)
    }

    /// How many whole copies fit along each axis of `container`.
    ///
    /// Each count is `floor(container / self)` per axis. The float-to-int
    /// conversion saturates, so degenerate inputs never wrap.
    #[inline]
    pub fn grid_counts_in(&self, container: &Self) -> (u64, u64) {
        (
            (container.along / self.along).floor() as u64,
            (container.across / self.across).floor() as u64,
        )
    }
}

/// Trait for flat objects with a rectangular outline.
pub trait Rectangular {
    /// Returns the outline of the object.
    fn extent(&self) -> Extent2;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_rotation() {
        let extent = Extent2::new(25.0, 21.0);
        assert_eq!(extent.rotated(), Extent2::new(21.0, 25.0));
        assert_eq!(extent.rotated().rotated(), extent);
    }

    #[test]
    fn test_grid_counts_floor_each_axis() {
        let net = Extent2::new(25.0, 21.0);
        let sheet = Extent2::new(100.0, 100.0);
        assert_eq!(net.grid_counts_in(&sheet), (4, 4));

        let small_sheet = Extent2::new(20.0, 50.0);
        assert_eq!(net.grid_counts_in(&small_sheet), (0, 2));
    }
}
