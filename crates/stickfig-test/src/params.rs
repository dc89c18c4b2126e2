//! Regression test parameters and operations

use crate::error::{TestError, TestResult};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare with expected values (default)
    #[default]
    Compare,
    /// Compare and print every vector that is checked
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the running check index, the mode, and every
/// recorded failure.
pub struct RegParams {
    /// Name of the test (e.g., "graph")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is read from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        match check_value(self.index, expected, actual, delta) {
            Ok(()) => true,
            Err(e) => {
                self.record(format!("Failure in {}_reg: {}", self.test_name, e));
                false
            }
        }
    }

    /// Compare two integer vectors for exact equality
    pub fn compare_ints(&mut self, expected: &[i32], actual: &[i32]) -> bool {
        self.index += 1;
        if self.display() {
            eprintln!("[{}] ints: {:?}", self.index, actual);
        }

        if expected.len() != actual.len() {
            let e = TestError::LengthMismatch {
                index: self.index,
                expected: expected.len(),
                actual: actual.len(),
            };
            self.record(format!("Failure in {}_reg: {}", self.test_name, e));
            return false;
        }

        match expected.iter().zip(actual).position(|(a, b)| a != b) {
            None => true,
            Some(pos) => {
                self.record(format!(
                    "Failure in {}_reg: int vector comparison for index {}\n\
                     first difference at position {}: expected {}, actual {}\n\
                     expected = {:?}\n\
                     actual   = {:?}",
                    self.test_name, self.index, pos, expected[pos], actual[pos], expected, actual
                ));
                false
            }
        }
    }

    /// Compare two real vectors element-wise within `delta`
    pub fn compare_vectors(&mut self, expected: &[f64], actual: &[f64], delta: f64) -> bool {
        self.index += 1;
        if self.display() {
            eprintln!("[{}] reals: {:?}", self.index, actual);
        }

        if expected.len() != actual.len() {
            let e = TestError::LengthMismatch {
                index: self.index,
                expected: expected.len(),
                actual: actual.len(),
            };
            self.record(format!("Failure in {}_reg: {}", self.test_name, e));
            return false;
        }

        for (pos, (&e, &a)) in expected.iter().zip(actual).enumerate() {
            if check_value(self.index, e, a, delta).is_err() {
                self.record(format!(
                    "Failure in {}_reg: real vector comparison for index {}\n\
                     position {}: expected {}, actual {}, allowed delta = {}",
                    self.test_name, self.index, pos, e, a, delta
                ));
                return false;
            }
        }
        true
    }

    /// Check a boolean condition, recording `what` on failure
    pub fn check(&mut self, condition: bool, what: &str) -> bool {
        self.index += 1;
        if !condition {
            self.record(format!(
                "Failure in {}_reg: check for index {} failed: {}",
                self.test_name, self.index, what
            ));
        }
        condition
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

fn check_value(index: usize, expected: f64, actual: f64, delta: f64) -> TestResult<()> {
    let diff = (expected - actual).abs();
    // NaN never compares as a match
    if diff <= delta {
        Ok(())
    } else {
        Err(TestError::ValueMismatch {
            index,
            expected,
            actual,
            delta,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!(RegTestMode::parse(""), RegTestMode::Compare);
        assert_eq!(RegTestMode::parse("DISPLAY"), RegTestMode::Display);
        assert_eq!(RegTestMode::parse("generate"), RegTestMode::Compare);
    }

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("selftest_values");
        assert!(rp.compare_values(1.0, 1.05, 0.1));
        assert!(!rp.compare_values(1.0, f64::NAN, 0.1));
        assert_eq!(rp.index(), 2);
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_vectors() {
        let mut rp = RegParams::new("selftest_vectors");
        assert!(rp.compare_ints(&[1, 2, 3], &[1, 2, 3]));
        assert!(rp.compare_vectors(&[0.5, 1.0], &[0.5, 1.0], 0.0));
        assert!(rp.cleanup());

        let mut rp = RegParams::new("selftest_vectors_fail");
        assert!(!rp.compare_ints(&[1, 2], &[1, 2, 3]));
        assert!(!rp.compare_ints(&[1, 2, 3], &[1, 9, 3]));
        assert!(!rp.compare_vectors(&[0.5], &[0.7], 0.1));
        assert!(!rp.check(false, "always fails"));
        assert!(!rp.cleanup());
    }
}
