//! Error Types

use thiserror::Error;

use crate::amount::AmountPolicy;
use crate::format::group_thousands;

/// Result type alias for amount validation
pub type Result<T> = std::result::Result<T, AmountError>;

/// Donation amount validation errors
///
/// Each variant carries the bound it was checked against so the rendered
/// messages always agree with the [`AmountPolicy`] that produced them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    /// Missing, zero, or under the minimum
    #[error("amount is below the minimum of {min} yen")]
    BelowMinimum { min: i64 },

    /// Over the maximum
    #[error("amount is above the maximum of {max} yen")]
    AboveMaximum { max: i64 },

    /// Inside the range but not a whole number of yen
    #[error("amount is not a whole number of yen")]
    NotWholeYen,
}

impl AmountError {
    /// Message returned by the checkout endpoint in `{ "error": ... }`
    pub fn server_message(&self) -> String {
        match self {
            Self::BelowMinimum { min } => {
                format!("金額は{}円以上で入力してください", group_thousands(*min))
            }
            Self::AboveMaximum { max } => {
                format!("金額は{}円以下で入力してください", group_thousands(*max))
            }
            Self::NotWholeYen => "金額は整数で入力してください".into(),
        }
    }

    /// Inline message shown under the donation form input
    pub fn form_message(&self) -> String {
        match self {
            Self::BelowMinimum { min } => format!("最低金額は{}円です", group_thousands(*min)),
            Self::AboveMaximum { max } => format!("最高金額は{}円です", group_thousands(*max)),
            Self::NotWholeYen => "金額は整数で入力してください".into(),
        }
    }
}

impl AmountPolicy {
    pub(crate) const fn below_minimum(&self) -> AmountError {
        AmountError::BelowMinimum { min: self.min }
    }

    pub(crate) const fn above_maximum(&self) -> AmountError {
        AmountError::AboveMaximum { max: self.max }
    }
}
