//! Maximum length sequences for acoustic diffuser panels.
//!
//! A [`ShiftRegisterConfig`] describes a linear feedback shift register, [`generate`] runs it for
//! one full period, and [`map_to_grid`] lays the resulting bits onto a panel's hole grid.

pub mod error;
pub mod grid;
pub mod lfsr;
pub mod request;

pub use error::{Error, Result};
pub use grid::{map_to_grid, Grid};
pub use lfsr::{generate, BitSequence, Lfsr, ShiftRegisterConfig, MAX_DEGREE};
pub use request::{parse_bits, parse_taps, GridShape, PanelOutput, PanelRequest};
