//! Input validation and orchestration of a calculation.
//!
//! Takes the five raw values a user types in, turns them into validated
//! dimensions and then runs the net and packing calculations in sequence.
//! Nothing here is cached; every call starts from scratch.

use log::debug;

use crate::model::{
    BoxDimensions, InputField, InvalidInput, NetRectangle, SheetDimensions, ensure_positive,
};
use crate::packer::{PackingPlan, pack_sheet};

/// The five raw text values of a calculation, exactly as entered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawDimensions {
    pub sheet_length: String,
    pub sheet_width: String,
    pub box_length: String,
    pub box_width: String,
    pub box_height: String,
}

impl RawDimensions {
    /// Pairs every raw value with the field it belongs to, in collection order.
    pub fn fields(&self) -> [(InputField, &str); 5] {
        [
            (InputField::SheetLength, self.sheet_length.as_str()),
            (InputField::SheetWidth, self.sheet_width.as_str()),
            (InputField::BoxLength, self.box_length.as_str()),
            (InputField::BoxWidth, self.box_width.as_str()),
            (InputField::BoxHeight, self.box_height.as_str()),
        ]
    }

    /// Parses and validates all five values.
    ///
    /// Every value is parsed before any is checked for positivity, so an
    /// unparsable field is reported ahead of a non-positive one.
    pub fn validate(&self) -> Result<ValidatedInput, InvalidInput> {
        let mut values = [0.0; 5];
        for (slot, (field, raw)) in values.iter_mut().zip(self.fields()) {
            *slot = parse_field(raw, field)?;
        }
        ValidatedInput::from_array(values)
    }
}

/// Parses one raw value as a finite `f64`, ignoring surrounding whitespace.
pub fn parse_field(raw: &str, field: InputField) -> Result<f64, InvalidInput> {
    let not_a_number = || InvalidInput::NotANumber {
        field,
        raw: raw.to_string(),
    };
    let value = raw.trim().parse::<f64>().map_err(|_| not_a_number())?;
    if !value.is_finite() {
        return Err(not_a_number());
    }
    Ok(value)
}

/// Sheet and box dimensions that passed validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidatedInput {
    pub sheet: SheetDimensions,
    pub box_dims: BoxDimensions,
}

impl ValidatedInput {
    /// Validates numeric inputs with the same rules as the text path.
    pub fn from_values(
        sheet_length: f64,
        sheet_width: f64,
        box_length: f64,
        box_width: f64,
        box_height: f64,
    ) -> Result<Self, InvalidInput> {
        let values = [sheet_length, sheet_width, box_length, box_width, box_height];
        for (value, field) in values.iter().zip(InputField::ALL) {
            if !value.is_finite() {
                return Err(InvalidInput::NotANumber {
                    field,
                    raw: value.to_string(),
                });
            }
        }
        Self::from_array(values)
    }

    /// Expects finite values in `InputField::ALL` order.
    fn from_array(values: [f64; 5]) -> Result<Self, InvalidInput> {
        for (value, field) in values.iter().zip(InputField::ALL) {
            ensure_positive(*value, field)?;
        }
        let [sheet_length, sheet_width, box_length, box_width, box_height] = values;
        Ok(Self {
            sheet: SheetDimensions {
                length: sheet_length,
                width: sheet_width,
            },
            box_dims: BoxDimensions {
                length: box_length,
                width: box_width,
                height: box_height,
            },
        })
    }
}

/// Advisory shown when not a single net fits on the sheet.
pub const SHEET_TOO_SMALL_NOTICE: &str =
    "The sheet is too small for even one net. Try a larger sheet or smaller box dimensions.";

/// Outcome of one calculation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Calculation {
    pub sheet: SheetDimensions,
    pub box_dims: BoxDimensions,
    pub net: NetRectangle,
    pub plan: PackingPlan,
}

impl Calculation {
    /// Number of nets that can be cut from the sheet.
    pub fn total_nets(&self) -> u64 {
        self.plan.total_nets()
    }

    /// Share of the sheet covered by net bounding rectangles, in percent.
    pub fn utilization_percent(&self) -> f64 {
        self.plan.utilization_percent(&self.sheet, &self.net)
    }

    /// Returns `true` if the net fits on the sheet in neither orientation.
    pub fn sheet_too_small(&self) -> bool {
        self.plan.is_empty()
    }

    /// Advisory for the user, if any.
    pub fn notice(&self) -> Option<&'static str> {
        self.sheet_too_small().then_some(SHEET_TOO_SMALL_NOTICE)
    }
}

/// Validates raw input and runs the calculation.
///
/// On invalid input the calculation is not attempted.
///
/// # Examples
/// ```
/// use box_net_cutter::calculator::{RawDimensions, calculate};
///
/// let raw = RawDimensions {
///     sheet_length: "100".into(),
///     sheet_width: "100".into(),
///     box_length: "10".into(),
///     box_width: "5".into(),
///     box_height: "8".into(),
/// };
/// assert_eq!(calculate(&raw).unwrap().total_nets(), 16);
/// ```
pub fn calculate(raw: &RawDimensions) -> Result<Calculation, InvalidInput> {
    let input = raw.validate()?;
    Ok(calculate_validated(input.sheet, input.box_dims))
}

/// Runs the net and packing calculations on already validated dimensions.
pub fn calculate_validated(sheet: SheetDimensions, box_dims: BoxDimensions) -> Calculation {
    let net = box_dims.net();
    let plan = pack_sheet(&sheet, &net);
    debug!(
        "net {}×{} on sheet {}×{}: {} unrotated, {} rotated",
        net.width(),
        net.height(),
        sheet.length,
        sheet.width,
        plan.unrotated.count,
        plan.rotated.count
    );
    Calculation {
        sheet,
        box_dims,
        net,
        plan,
    }
}
