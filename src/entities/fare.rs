use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A price rounded half-up to cents.
///
/// Ranking compares the numeric amount; the two-decimal text form only
/// exists at serialization time.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Fare(f64);

impl Fare {
    pub fn new(amount: f64) -> Self {
        match to_decimal(amount) {
            Some(exact) => Self::from_decimal(exact, amount),
            None => Self(amount),
        }
    }

    pub fn quote(rate_per_km: f64, distance_km: f64) -> Self {
        let product = to_decimal(rate_per_km)
            .zip(to_decimal(distance_km))
            .and_then(|(rate, distance)| rate.checked_mul(distance));

        match product {
            Some(exact) => Self::from_decimal(exact, rate_per_km * distance_km),
            None => Self::new(rate_per_km * distance_km),
        }
    }

    fn from_decimal(exact: Decimal, fallback: f64) -> Self {
        let rounded = exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        Self(rounded.to_f64().unwrap_or(fallback))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

/// Reads a float through its shortest decimal form, so 10.014 is 10.014
/// and not 10.01399999... Half-up rounding is then exact.
fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }

    Decimal::from_str(&value.to_string()).ok()
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Fare {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A client-supplied price, sent either as a JSON number or as the string
/// form returned by the estimate endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    pub fn parse(&self) -> Option<f64> {
        let amount = match self {
            Self::Number(amount) => *amount,
            Self::Text(text) => text.trim().parse::<f64>().ok()?,
        };

        amount.is_finite().then_some(amount)
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }
}

impl From<f64> for Amount {
    fn from(amount: f64) -> Self {
        Self::Number(amount)
    }
}

impl From<&str> for Amount {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}
