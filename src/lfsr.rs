//! Maximum length sequence generation with a Fibonacci shift register.
//!
//! The register is stored front to back: index 0 receives the feedback bit and
//! index `degree - 1` is the trailing stage whose value is emitted on each step.

use std::fmt;

use log::{debug, warn};

use crate::error::{Error, Result};

/// Largest supported register. Keeps a full period at 65535 bits.
pub const MAX_DEGREE: usize = 16;

/// A validated shift register description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShiftRegisterConfig {
    degree: usize,
    seed: Vec<u8>,
    taps: Vec<usize>,
}

impl ShiftRegisterConfig {
    /// Checks the degree, then that the seed fills the register with 0/1 values, then that
    /// every tap addresses a stage of the register.
    pub fn new(degree: usize, seed: Vec<u8>, taps: Vec<usize>) -> Result<Self> {
        if degree == 0 || degree > MAX_DEGREE {
            return Err(Error::InvalidDegree {
                degree,
                max: MAX_DEGREE,
            });
        }
        if seed.len() != degree {
            return Err(Error::ConfigMismatch {
                seed_len: seed.len(),
                degree,
            });
        }
        if let Some(index) = seed.iter().position(|&b| b > 1) {
            return Err(Error::InvalidBit {
                index,
                value: seed[index] as u64,
            });
        }
        if let Some(&tap) = taps.iter().find(|&&t| t >= degree) {
            return Err(Error::InvalidTapIndex { tap, degree });
        }

        Ok(Self { degree, seed, taps })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn seed(&self) -> &[u8] {
        &self.seed
    }

    pub fn taps(&self) -> &[usize] {
        &self.taps
    }

    /// Number of bits in one full period, `2^degree - 1`.
    pub fn sequence_len(&self) -> usize {
        (1usize << self.degree) - 1
    }
}

/// Shift register state, stepped one output bit at a time.
#[derive(Debug)]
pub struct Lfsr {
    register: Vec<u8>,
    taps: Vec<usize>,
}

impl Lfsr {
    pub fn new(config: &ShiftRegisterConfig) -> Self {
        Self {
            register: config.seed.clone(),
            taps: config.taps.clone(),
        }
    }

    pub fn state(&self) -> &[u8] {
        &self.register
    }

    /// Emits the trailing bit, then shifts the XOR of the tapped stages in at the front.
    pub fn get(&mut self) -> u8 {
        let out = self.register[self.register.len() - 1];
        let bit = self
            .taps
            .iter()
            .fold(0, |acc, &tap| acc ^ self.register[tap]);

        self.register.rotate_right(1);
        self.register[0] = bit;

        out
    }
}

/// Output of one full run of the register.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitSequence {
    bits: Vec<u8>,
    period: Option<usize>,
}

impl BitSequence {
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Steps taken before the register first came back to its seed, if it ever did.
    pub fn period(&self) -> Option<usize> {
        self.period
    }

    /// True when the register only repeated its seed after the full `2^degree - 1` steps.
    pub fn is_maximal(&self) -> bool {
        self.period == Some(self.bits.len())
    }

    pub fn ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b == 1).count()
    }

    /// Renders the bits without separators, e.g. `100110101111000`.
    pub fn compact(&self) -> String {
        self.bits.iter().map(|&b| if b == 1 { '1' } else { '0' }).collect()
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, bit) in self.bits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", bit)?;
        }
        write!(f, "]")
    }
}

/// Runs the register for exactly `2^degree - 1` steps.
///
/// The run length does not depend on whether the taps are actually maximal; a short cycle
/// simply repeats inside the output and is reported through [`BitSequence::period`].
pub fn generate(config: &ShiftRegisterConfig) -> BitSequence {
    let n = config.sequence_len();
    let mut lfsr = Lfsr::new(config);
    let mut bits = Vec::with_capacity(n);
    let mut period = None;

    for step in 1..=n {
        let bit = lfsr.get();
        bits.push(bit);
        debug!("step {}: emitted {}, register {:?}", step, bit, lfsr.state());

        if period.is_none() && lfsr.state() == config.seed() {
            period = Some(step);
        }
    }

    let sequence = BitSequence { bits, period };
    if !sequence.is_maximal() {
        warn!(
            "Taps {:?} are not maximal for degree {}: period {:?}, expected {}",
            config.taps(),
            config.degree(),
            period,
            n
        );
    }

    sequence
}
