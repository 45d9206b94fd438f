use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

const MICROS_PER_CENT: i128 = 10_000;
const MICROS_PER_DOLLAR: f64 = 1_000_000.0;

/// A whole number of cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cents(i64);

impl Cents {
    pub const ZERO: Cents = Cents(0);

    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Dollar value for numeric spreadsheet cells.
    pub fn as_dollars(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl Add for Cents {
    type Output = Cents;

    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0 + rhs.0)
    }
}

impl AddAssign for Cents {
    fn add_assign(&mut self, rhs: Cents) {
        self.0 += rhs.0;
    }
}

impl Sum for Cents {
    fn sum<I: Iterator<Item = Cents>>(iter: I) -> Cents {
        iter.fold(Cents::ZERO, Add::add)
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

/// Per-character pay rate, stored as micro-dollars per character.
///
/// Config files spell rates in dollars (`0.0025`); they are snapped to the
/// nearest micro-dollar on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Rate(i64);

impl Rate {
    pub const ZERO: Rate = Rate(0);

    pub const fn from_micros(micros_per_char: i64) -> Self {
        Self(micros_per_char)
    }

    pub fn from_dollars(dollars_per_char: f64) -> Self {
        Self((dollars_per_char * MICROS_PER_DOLLAR).round() as i64)
    }

    pub const fn micros(self) -> i64 {
        self.0
    }

    pub fn as_dollars(self) -> f64 {
        self.0 as f64 / MICROS_PER_DOLLAR
    }

    /// Pay for `characters` at this rate, rounded half away from zero to the cent.
    pub fn pay_for(self, characters: u64) -> Cents {
        let micros = i128::from(characters) * i128::from(self.0);
        let cents = (micros.abs() + MICROS_PER_CENT / 2) / MICROS_PER_CENT;
        let signed = if micros < 0 { -cents } else { cents };
        Cents(i64::try_from(signed).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Rate {
    fn from(dollars: f64) -> Self {
        Rate::from_dollars(dollars)
    }
}

impl From<Rate> for f64 {
    fn from(rate: Rate) -> Self {
        rate.as_dollars()
    }
}
