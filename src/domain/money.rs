use rust_decimal::{Decimal, RoundingStrategy};

/// A balance rendered as en-US currency, e.g. `$11,550.00`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Money(pub f64);

impl Money {
    pub const SYMBOL: char = '$';
    pub const DECIMALS: u32 = 2;

    /// Rounds to whole cents, half away from zero. `None` for NaN and infinities.
    pub fn to_cents(&self) -> Option<Decimal> {
        Decimal::from_f64_retain(self.0).map(|value| {
            value.round_dp_with_strategy(Self::DECIMALS, RoundingStrategy::MidpointAwayFromZero)
        })
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let (neg, digits) = match self.to_cents() {
            Some(cents) => (
                cents.is_sign_negative() && !cents.is_zero(),
                format!("{:.2}", cents.abs()),
            ),
            // finite but past Decimal's range, so no sub-cent digits to round
            None if self.0.is_finite() => (self.0 < 0.0, format!("{:.2}", self.0.abs())),
            None => return write!(f, "{}{}", Self::SYMBOL, self.0),
        };
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
        if neg {
            write!(f, "-{}{}.{}", Self::SYMBOL, group_thousands(int_part), frac_part)
        } else {
            write!(f, "{}{}.{}", Self::SYMBOL, group_thousands(int_part), frac_part)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Money;

    #[test]
    fn formats_with_symbol_grouping_and_cents() {
        assert_eq!(Money(0.0).to_string(), "$0.00");
        assert_eq!(Money(998.5).to_string(), "$998.50");
        assert_eq!(Money(11550.0).to_string(), "$11,550.00");
        assert_eq!(Money(100.0).to_string(), "$100.00");
        assert_eq!(Money(1_234_567.891).to_string(), "$1,234,567.89");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 0.125 is exact in binary, so this is a true midpoint
        assert_eq!(Money(0.125).to_string(), "$0.13");
        assert_eq!(Money(4999.99).to_string(), "$4,999.99");
    }

    #[test]
    fn values_beyond_decimal_range_keep_grouping_and_cents() {
        let huge = (1u128 << 100) as f64;
        assert_eq!(
            Money(huge).to_string(),
            "$1,267,650,600,228,229,401,496,703,205,376.00"
        );
        assert_eq!(
            Money(-huge).to_string(),
            "-$1,267,650,600,228,229,401,496,703,205,376.00"
        );
    }

    #[test]
    fn negative_sign_precedes_symbol() {
        assert_eq!(Money(-1500.0).to_string(), "-$1,500.00");
        assert_eq!(Money(-0.001).to_string(), "$0.00");
    }
}
