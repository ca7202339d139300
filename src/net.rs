//! Bounding rectangle of a cross-shaped box net.
//!
//! The net is laid out as a plus sign:
//!
//! ```text
//!          [W x H]
//! [L x H]  [L x W]  [L x H]
//!          [W x H]
//! ```
//!
//! The horizontal bar spans `L + W + L`, the vertical bar `H + W + H`.

use crate::model::{BoxDimensions, NetRectangle};

/// Computes the bounding rectangle of the net for a box `length × width × height`.
///
/// Inputs are expected to be validated already. The result is plain `f64`
/// arithmetic without rounding.
///
/// # Examples
/// ```
/// use box_net_cutter::net::compute_net_dimensions;
///
/// let net = compute_net_dimensions(10.0, 5.0, 8.0);
/// assert_eq!(net.width(), 25.0);
/// assert_eq!(net.height(), 21.0);
/// ```
pub fn compute_net_dimensions(length: f64, width: f64, height: f64) -> NetRectangle {
    NetRectangle::from_parts(2.0 * length + width, 2.0 * height + width)
}

impl BoxDimensions {
    /// Net bounding rectangle of this box.
    #[inline]
    pub fn net(&self) -> NetRectangle {
        compute_net_dimensions(self.length, self.width, self.height)
    }
}
