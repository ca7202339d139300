//! Counts how many cross-shaped box nets can be cut from a rectangular sheet.
//!
//! The core is two pure functions: [`compute_net_dimensions`] derives the
//! bounding rectangle of a box's unfolded net, and [`compute_max_nets`]
//! tiles that rectangle over the sheet in both orientations. The
//! [`calculator`] module validates raw user input around them, and
//! [`api`] / [`cli`] expose the calculation over HTTP and the command line.

pub mod api;
pub mod calculator;
pub mod cli;
pub mod config;
pub mod model;
pub mod net;
pub mod packer;
pub mod types;

pub use calculator::{Calculation, RawDimensions, calculate};
pub use model::InvalidInput;
pub use net::compute_net_dimensions;
pub use packer::compute_max_nets;
