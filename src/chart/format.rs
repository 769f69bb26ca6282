//! Currency formatting for chart tooltips and axis labels.

use serde::Serialize;

/// Locale-aware grouping rules for monetary values
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFormat {
    /// BCP 47 locale handed to the browser-side formatter
    pub locale: String,
    /// Symbol written before the amount
    pub symbol: String,
    pub thousands_separator: char,
    pub decimal_separator: char,
    pub fraction_digits: usize,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::rupiah()
    }
}

impl CurrencyFormat {
    /// Indonesian Rupiah: `Rp 1.500.000`
    pub fn rupiah() -> Self {
        Self {
            locale: "id-ID".to_string(),
            symbol: "Rp".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
            fraction_digits: 0,
        }
    }

    pub fn with_fraction_digits(mut self, digits: usize) -> Self {
        self.fraction_digits = digits;
        self
    }

    /// Format an amount, e.g. `1500000.0` as `Rp 1.500.000`.
    ///
    /// Non-finite amounts format as zero.
    pub fn format(&self, amount: f64) -> String {
        let amount = if amount.is_finite() { amount } else { 0.0 };
        let fixed = format!("{:.*}", self.fraction_digits, amount.abs());

        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (fixed.as_str(), None),
        };

        let mut number = self.group_thousands(int_part);
        if let Some(frac) = frac_part {
            number.push(self.decimal_separator);
            number.push_str(frac);
        }

        let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
        let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

        format!("{}{} {}", sign, self.symbol, number)
    }

    fn group_thousands(&self, digits: &str) -> String {
        let len = digits.len();
        let mut result = String::with_capacity(len + len / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                result.push(self.thousands_separator);
            }
            result.push(c);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupiah_grouping() {
        let fmt = CurrencyFormat::rupiah();
        assert_eq!(fmt.format(0.0), "Rp 0");
        assert_eq!(fmt.format(999.0), "Rp 999");
        assert_eq!(fmt.format(1000.0), "Rp 1.000");
        assert_eq!(fmt.format(15000.0), "Rp 15.000");
        assert_eq!(fmt.format(1_500_000.0), "Rp 1.500.000");
        assert_eq!(fmt.format(123_456_789.0), "Rp 123.456.789");
    }

    #[test]
    fn test_rupiah_rounds_to_whole_units() {
        let fmt = CurrencyFormat::rupiah();
        assert_eq!(fmt.format(15000.6), "Rp 15.001");
        assert_eq!(fmt.format(-0.4), "Rp 0");
    }

    #[test]
    fn test_negative_amounts() {
        let fmt = CurrencyFormat::rupiah();
        assert_eq!(fmt.format(-2500.0), "-Rp 2.500");
    }

    #[test]
    fn test_fraction_digits_use_decimal_comma() {
        let fmt = CurrencyFormat::rupiah().with_fraction_digits(2);
        assert_eq!(fmt.format(1234.5), "Rp 1.234,50");
    }

    #[test]
    fn test_non_finite_formats_as_zero() {
        let fmt = CurrencyFormat::rupiah();
        assert_eq!(fmt.format(f64::NAN), "Rp 0");
        assert_eq!(fmt.format(f64::INFINITY), "Rp 0");
    }
}
