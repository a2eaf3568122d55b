use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use serde::Deserialize;

use crate::quantity::{cost::Cents, energy::KilowattHours};

/// Price per kilowatt-hour, in New Zealand cents.
#[must_use]
#[derive(
    Clone,
    Copy,
    Deserialize,
    PartialEq,
    PartialOrd,
    derive_more::Add,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Into,
)]
pub struct CentsPerKilowattHour(pub f64);

impl Mul<KilowattHours> for CentsPerKilowattHour {
    type Output = Cents;

    fn mul(self, energy: KilowattHours) -> Self::Output {
        Cents(self.0 * energy.0)
    }
}

impl Display for CentsPerKilowattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} ¢/kWh", self.0)
    }
}

impl Debug for CentsPerKilowattHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}¢/kWh", self.0)
    }
}
