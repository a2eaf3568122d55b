use std::fmt::{Debug, Display, Formatter};

use serde::Deserialize;

/// Cost in New Zealand cents.
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
pub struct Cents(pub f64);

impl Display for Cents {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} ¢", self.0)
    }
}

impl Debug for Cents {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}¢", self.0)
    }
}
