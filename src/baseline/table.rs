//! The parsed baseline table.

use std::collections::HashMap;

/// Mapping from parameter name to expected minimum version.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BaselineTable {
    versions: HashMap<String, f64>,
}

impl BaselineTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an expected version. A later insert for the same parameter wins.
    pub fn insert(&mut self, parameter: impl Into<String>, version: f64) {
        self.versions.insert(parameter.into(), version);
    }

    /// Expected version for a parameter, if any.
    pub fn get(&self, parameter: &str) -> Option<f64> {
        self.versions.get(parameter).copied()
    }

    /// Number of parameters with a baseline.
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Baseline cell text: the expected version, or `N/A`.
    pub fn display(&self, parameter: &str) -> String {
        self.get(parameter)
            .map(format_version)
            .unwrap_or_else(|| "N/A".to_string())
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for BaselineTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (parameter, version) in iter {
            table.insert(parameter, version);
        }
        table
    }
}

/// Format a version the way it is shown in the report.
///
/// Uses the shortest round-tripping digits. Whole numbers keep one decimal
/// place (`2` renders as `2.0`). Exponents outside `-4..16` switch to
/// scientific form with a signed two-digit exponent (`1e+16`, `1e-05`).
/// Non-finite values render as `nan`, `inf` and `-inf`.
pub fn format_version(version: f64) -> String {
    if version.is_nan() {
        return "nan".to_string();
    }
    if version.is_infinite() {
        return if version > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if version == 0.0 {
        return if version.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // `{:e}` yields the shortest digits, e.g. "-1.025e1".
    let scientific = format!("{:e}", version);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };

    if !(-4..16).contains(&exponent) {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}{}e{}{:02}", sign, mantissa, exp_sign, exponent.abs());
    }

    let digits = mantissa.replace('.', "");
    let fixed = if exponent >= 0 {
        let int_len = exponent as usize + 1;
        if digits.len() <= int_len {
            format!("{}{}.0", digits, "0".repeat(int_len - digits.len()))
        } else {
            format!("{}.{}", &digits[..int_len], &digits[int_len..])
        }
    } else {
        format!("0.{}{}", "0".repeat((-exponent - 1) as usize), digits)
    };

    format!("{}{}", sign, fixed)
}
