//! Money type for representing expense amounts
//!
//! Internally stores amounts in cents (i64) so category sums and totals are
//! exact. Provides checked addition, parsing of user input, and formatting for both
//! display and the CSV store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use my_wallet::models::Money;
    /// let amount = Money::from_cents(1250); // 12.50
    /// assert_eq!(amount.to_plain_string(), "12.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add two amounts, returning `None` on overflow
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Parse an amount typed by the user or read from the store
    ///
    /// Accepts `12`, `12.5`, `12.50`, `.5`, `-3.25`, `$12.50` and `-$3`.
    /// Fractional digits past the second are rounded half away from zero.
    /// Exponents, grouping separators and stray characters are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let (whole, frac) = rest.split_once('.').unwrap_or((rest, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(frac) {
            return Err(invalid());
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        let digits = frac.as_bytes();
        let mut cents: i64 = 0;
        for i in 0..2 {
            cents = cents * 10 + digits.get(i).map_or(0, |d| i64::from(d - b'0'));
        }
        if digits.get(2).is_some_and(|d| *d >= b'5') {
            cents += 1;
        }

        let total = dollars
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format as a plain decimal with two fractional digits (`12.50`)
    ///
    /// This is the representation written to the CSV store.
    pub fn to_plain_string(&self) -> String {
        self.format_with_symbol("")
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol("$"))
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
