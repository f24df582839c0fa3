use crate::f;

/// Extends `f64` with formatting and comparison helpers
pub trait FloatExt {
    /// Better scientific number formatting
    ///
    /// The default `{:e}` output drops the exponent sign and padding, which
    /// makes columns of numbers ragged. This always signs the exponent and
    /// pads it to `exp_pad` digits.
    ///
    /// ```rust
    /// # use pbtools_utils::FloatExt;
    /// assert_eq!((-1.0_f64).sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!(0.00125_f64.sci(3, 2), "1.250e-03".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;

    /// Closeness check with relative and absolute tolerances
    ///
    /// True when `|self - other| <= atol + rtol * |other|`. Note that this is
    /// not symmetric, `other` is the reference value.
    ///
    /// ```rust
    /// # use pbtools_utils::FloatExt;
    /// assert!(1.05_f64.is_close(1.0, 0.1, 0.0));
    /// assert!(!1.2_f64.is_close(1.0, 0.1, 0.0));
    /// assert!(1e-9_f64.is_close(0.0, 0.0, 1e-8));
    /// ```
    fn is_close(&self, other: f64, rtol: f64, atol: f64) -> bool;
}

impl FloatExt for f64 {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let mut num = f!("{:.precision$e}", self, precision = precision);
        // NaN and inf have no exponent
        let split = match num.find('e') {
            Some(idx) => idx,
            None => return num,
        };
        let exp = num.split_off(split);
        let (sign, exp) = match exp.strip_prefix("e-") {
            Some(exp) => ('-', exp),
            None => ('+', &exp[1..]),
        };
        num.push_str(&f!("e{}{:0>pad$}", sign, exp, pad = exp_pad));
        num
    }

    fn is_close(&self, other: f64, rtol: f64, atol: f64) -> bool {
        (self - other).abs() <= atol + rtol * other.abs()
    }
}

/// Extends Option for easy display formatting
pub trait OptionExt {
    /// Either the contained value in scientific format or "none"
    ///
    /// ```rust
    /// # use pbtools_utils::OptionExt;
    /// assert_eq!(Some(2.0_f64).display_sci(2), "2.00e+00");
    /// assert_eq!(None::<f64>.display_sci(2), "none");
    /// ```
    fn display_sci(&self, precision: usize) -> String;
}

impl OptionExt for Option<f64> {
    fn display_sci(&self, precision: usize) -> String {
        match self {
            Some(value) => value.sci(precision, 2),
            None => "none".to_string(),
        }
    }
}
