//! One user action: the typed inputs of a generate request and what it produces.

use log::debug;

use crate::error::{Error, Result};
use crate::grid::{map_to_grid, Grid};
use crate::lfsr::{generate, BitSequence, ShiftRegisterConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

/// Everything a caller supplies for one generation, already parsed into typed values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelRequest {
    pub degree: usize,
    pub seed: Vec<u8>,
    pub taps: Vec<usize>,
    pub grid: Option<GridShape>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelOutput {
    pub sequence: BitSequence,
    pub grid: Option<Grid>,
}

impl PanelRequest {
    /// Validates the register, generates the full sequence and, if a shape was requested,
    /// maps it onto a grid. Nothing is generated when validation fails.
    pub fn run(&self) -> Result<PanelOutput> {
        let config = ShiftRegisterConfig::new(self.degree, self.seed.clone(), self.taps.clone())?;
        let sequence = generate(&config);
        debug!(
            "Generated {} bits, {} ones, period {:?}",
            sequence.len(),
            sequence.ones(),
            sequence.period()
        );

        let grid = match self.grid {
            Some(GridShape { rows, cols }) => Some(map_to_grid(&sequence, rows, cols)?),
            None => None,
        };

        Ok(PanelOutput { sequence, grid })
    }
}

fn split_numbers(text: &str) -> impl Iterator<Item = Result<u64>> + '_ {
    let text = text.trim();
    let tokens = if text.is_empty() {
        None
    } else {
        Some(text.split(','))
    };

    tokens.into_iter().flatten().map(|token| {
        let token = token.trim();
        token
            .parse::<u64>()
            .map_err(|err| Error::invalid_number(token, err))
    })
}

/// Parses a comma separated bit list such as `1,0,0,1`.
pub fn parse_bits(text: &str) -> Result<Vec<u8>> {
    split_numbers(text)
        .enumerate()
        .map(|(index, value)| match value? {
            v @ (0 | 1) => Ok(v as u8),
            value => Err(Error::InvalidBit { index, value }),
        })
        .collect()
}

/// Parses a comma separated list of 0-indexed register positions such as `3,2`.
pub fn parse_taps(text: &str) -> Result<Vec<usize>> {
    split_numbers(text)
        .map(|value| value.map(|v| v as usize))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(degree: usize, seed: &str, taps: &str, grid: Option<GridShape>) -> PanelRequest {
        PanelRequest {
            degree,
            seed: parse_bits(seed).unwrap(),
            taps: parse_taps(taps).unwrap(),
            grid,
        }
    }

    #[test]
    fn parses_lists() {
        assert_eq!(parse_bits("1,0,0,1").unwrap(), vec![1, 0, 0, 1]);
        assert_eq!(parse_bits(" 1, 0 ,1 ").unwrap(), vec![1, 0, 1]);
        assert_eq!(parse_taps("3,2").unwrap(), vec![3, 2]);
        assert_eq!(parse_taps("").unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn rejects_bad_tokens() {
        assert_eq!(
            parse_bits("1,2,0"),
            Err(Error::InvalidBit { index: 1, value: 2 })
        );
        assert!(matches!(
            parse_bits("1,x"),
            Err(Error::InvalidNumber { ref token, .. }) if token == "x"
        ));
        assert!(matches!(
            parse_taps("3,,2"),
            Err(Error::InvalidNumber { ref token, .. }) if token.is_empty()
        ));
        assert!(matches!(parse_taps("-1"), Err(Error::InvalidNumber { .. })));
    }

    #[test]
    fn sequence_only() {
        let out = request(4, "1,0,0,1", "3,2", None).run().unwrap();

        assert_eq!(out.sequence.len(), 15);
        assert!(out.grid.is_none());
    }

    #[test]
    fn sequence_and_grid() {
        let shape = GridShape { rows: 4, cols: 4 };
        let out = request(4, "1,0,0,1", "3,2", Some(shape)).run().unwrap();
        let grid = out.grid.unwrap();

        assert_eq!((grid.rows(), grid.cols()), (4, 4));
        assert_eq!(grid.get(3, 3), Some(0));
    }

    #[test]
    fn mismatch_generates_nothing() {
        let err = request(4, "1,0", "3,2", None).run().unwrap_err();

        assert_eq!(
            err,
            Error::ConfigMismatch {
                seed_len: 2,
                degree: 4
            }
        );
    }

    #[test]
    fn bad_shape_is_reported() {
        let shape = GridShape { rows: 0, cols: 5 };
        let err = request(4, "1,0,0,1", "3,2", Some(shape)).run().unwrap_err();

        assert!(matches!(err, Error::InvalidDimensions { rows: 0, cols: 5 }));
    }
}
