use std::fmt::{Debug, Display, Formatter};

use serde::Deserialize;

/// Consumed energy in kilowatt-hours.
#[must_use]
#[derive(
    Clone,
    Copy,
    Deserialize,
    PartialEq,
    PartialOrd,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Into,
    derive_more::Sum,
)]
pub struct KilowattHours(pub f64);

impl Display for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} kWh", self.0)
    }
}

impl Debug for KilowattHours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}kWh", self.0)
    }
}
