//! Donation Amount Policy
//!
//! The one constraint table for donation amounts. Both the checkout endpoint
//! and the browser form validate against [`AmountPolicy::DONATION`], so the
//! two checks cannot drift apart.

use std::fmt;

use serde::Serialize;

use crate::error::Result;

/// Inclusive yen bounds for a single donation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AmountPolicy {
    pub min: i64,
    pub max: i64,
}

impl AmountPolicy {
    /// ¥100 ..= ¥1,000,000
    pub const DONATION: Self = Self {
        min: 100,
        max: 1_000_000,
    };

    /// Validate a raw JSON number as received by the endpoint.
    ///
    /// Missing and zero amounts are reported as below the minimum, the same
    /// way an amount of 50 is.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn validate(&self, raw: Option<f64>) -> Result<DonationAmount> {
        let value = raw.unwrap_or(0.0);

        if value.is_nan() || value <= 0.0 || value < self.min as f64 {
            return Err(self.below_minimum());
        }
        if value > self.max as f64 {
            return Err(self.above_maximum());
        }
        if value.fract() != 0.0 {
            return Err(crate::AmountError::NotWholeYen);
        }

        Ok(DonationAmount(value as i64))
    }

    /// Validate an already-whole amount, as typed into the form.
    pub const fn check(&self, yen: i64) -> Result<DonationAmount> {
        if yen <= 0 || yen < self.min {
            Err(self.below_minimum())
        } else if yen > self.max {
            Err(self.above_maximum())
        } else {
            Ok(DonationAmount(yen))
        }
    }

    pub const fn contains(&self, yen: i64) -> bool {
        yen >= self.min && yen <= self.max
    }
}

/// A whole yen amount that passed [`AmountPolicy`] validation
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DonationAmount(i64);

impl DonationAmount {
    pub const fn yen(self) -> i64 {
        self.0
    }
}

impl fmt::Display for DonationAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
