//! Data models for the net cutting calculation.
//!
//! This module defines the value types that flow through a calculation:
//! - `BoxDimensions`: the box whose net is cut
//! - `SheetDimensions`: the material the nets are cut from
//! - `NetRectangle`: the bounding rectangle of one unfolded net
//! - `InvalidInput`: the single error raised while validating user input

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::types::{Extent2, Rectangular};

/// The five user-supplied values of a calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputField {
    SheetLength,
    SheetWidth,
    BoxLength,
    BoxWidth,
    BoxHeight,
}

impl InputField {
    /// All fields in the order they are collected.
    pub const ALL: [InputField; 5] = [
        InputField::SheetLength,
        InputField::SheetWidth,
        InputField::BoxLength,
        InputField::BoxWidth,
        InputField::BoxHeight,
    ];

    /// Stable machine-readable name, matching the JSON field names.
    pub fn key(&self) -> &'static str {
        match self {
            InputField::SheetLength => "sheet_length",
            InputField::SheetWidth => "sheet_width",
            InputField::BoxLength => "box_length",
            InputField::BoxWidth => "box_width",
            InputField::BoxHeight => "box_height",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InputField::SheetLength => "Sheet length",
            InputField::SheetWidth => "Sheet width",
            InputField::BoxLength => "Box length",
            InputField::BoxWidth => "Box width",
            InputField::BoxHeight => "Box height",
        };
        f.write_str(label)
    }
}

/// Validation error for user-supplied dimensions.
///
/// Raised before any calculation runs; the core functions never see it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("{field} must be a valid number, got: '{raw}'")]
    NotANumber { field: InputField, raw: String },
    #[error("{field} must be positive, got: {value}")]
    NotPositive { field: InputField, value: f64 },
}

impl InvalidInput {
    /// The field that failed validation.
    pub fn field(&self) -> InputField {
        match self {
            InvalidInput::NotANumber { field, .. } | InvalidInput::NotPositive { field, .. } => {
                *field
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            InvalidInput::NotANumber { .. } => "not_a_number",
            InvalidInput::NotPositive { .. } => "not_positive",
        }
    }
}

/// Checks that an already numeric value is usable as a dimension.
///
/// Non-finite values count as "not a number", anything `<= 0` as
/// non-positive.
pub fn validate_dimension(value: f64, field: InputField) -> Result<f64, InvalidInput> {
    if !value.is_finite() {
        return Err(InvalidInput::NotANumber {
            field,
            raw: value.to_string(),
        });
    }
    ensure_positive(value, field)
}

pub(crate) fn ensure_positive(value: f64, field: InputField) -> Result<f64, InvalidInput> {
    if value <= 0.0 {
        return Err(InvalidInput::NotPositive { field, value });
    }
    Ok(value)
}

/// Dimensions of the box to be cut.
///
/// # Examples
/// ```
/// use box_net_cutter::model::BoxDimensions;
///
/// let box_dims = BoxDimensions::new(10.0, 5.0, 8.0).unwrap();
/// let net = box_dims.net();
/// assert_eq!((net.width(), net.height()), (25.0, 21.0));
///
/// assert!(BoxDimensions::new(10.0, 0.0, 8.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl BoxDimensions {
    /// Creates validated box dimensions.
    pub fn new(length: f64, width: f64, height: f64) -> Result<Self, InvalidInput> {
        Ok(Self {
            length: validate_dimension(length, InputField::BoxLength)?,
            width: validate_dimension(width, InputField::BoxWidth)?,
            height: validate_dimension(height, InputField::BoxHeight)?,
        })
    }
}

/// Dimensions of the sheet the nets are cut from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetDimensions {
    pub length: f64,
    pub width: f64,
}

impl SheetDimensions {
    /// Creates validated sheet dimensions.
    pub fn new(length: f64, width: f64) -> Result<Self, InvalidInput> {
        Ok(Self {
            length: validate_dimension(length, InputField::SheetLength)?,
            width: validate_dimension(width, InputField::SheetWidth)?,
        })
    }
}

impl Rectangular for SheetDimensions {
    fn extent(&self) -> Extent2 {
        Extent2::new(self.length, self.width)
    }
}

/// Bounding rectangle of a cross-shaped box net.
///
/// Only produced by [`crate::net::compute_net_dimensions`]; the fields are
/// read through accessors so the `2L + W` / `2H + W` relation always holds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, ToSchema)]
pub struct NetRectangle {
    width: f64,
    height: f64,
}

impl NetRectangle {
    pub(crate) const fn from_parts(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Extent along the sheet length in the unrotated placement.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Extent along the sheet width in the unrotated placement.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Rectangular for NetRectangle {
    fn extent(&self) -> Extent2 {
        Extent2::new(self.width, self.height)
    }
}
