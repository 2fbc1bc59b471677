//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use canvascopy_core::PixelBuffer;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Record failures and report them (default)
    #[default]
    Compare,
    /// Print failures without failing the test
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the running check index, the mode, and every
/// failure seen so far.
pub struct RegParams {
    /// Name of the test (e.g., "bicubic")
    pub test_name: String,
    /// Current check index (incremented before each check)
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
    /// The mode is taken from the `REGTEST_MODE` environment variable.
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

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record(&mut self, result: TestResult<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(err) => {
                let msg = format!("Failure in {}_reg: {}", self.test_name, err);
                eprintln!("{}", msg);
                self.failures.push(msg);
                self.success = false;
                false
            }
        }
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let index = self.index;
        let diff = (expected - actual).abs();
        let result = if diff > delta {
            Err(TestError::ValueMismatch {
                index,
                expected,
                actual,
                delta,
            })
        } else {
            Ok(())
        };
        self.record(result)
    }

    /// Compare two buffers for exact equality
    ///
    /// Reports the dimensions or the first differing pixel.
    pub fn compare_buffers(&mut self, expected: &PixelBuffer, actual: &PixelBuffer) -> bool {
        self.index += 1;
        let result = diff_buffers(self.index, expected, actual);
        self.record(result)
    }

    /// Compare one pixel of `buf` against an expected RGBA quad
    pub fn compare_rgba(&mut self, buf: &PixelBuffer, x: u32, y: u32, expected: [u8; 4]) -> bool {
        self.index += 1;
        let index = self.index;
        let result = match buf.get_rgba(x, y) {
            Some(actual) if actual == expected => Ok(()),
            Some(actual) => Err(TestError::PixelMismatch {
                index,
                x,
                y,
                expected,
                actual,
            }),
            None => Err(TestError::PixelCheck {
                index,
                message: format!(
                    "({}, {}) outside {}x{} buffer",
                    x, y, buf.width, buf.height
                ),
            }),
        };
        self.record(result)
    }

    /// Check that every pixel of `buf` equals `expected`
    pub fn compare_uniform(&mut self, buf: &PixelBuffer, expected: [u8; 4]) -> bool {
        self.index += 1;
        let index = self.index;
        let result = match buf.is_uniform() {
            Some(actual) if actual == expected => Ok(()),
            Some(actual) => Err(TestError::PixelCheck {
                index,
                message: format!("uniform {:?}, expected {:?}", actual, expected),
            }),
            None => Err(TestError::PixelCheck {
                index,
                message: format!("buffer not uniform, expected {:?}", expected),
            }),
        };
        self.record(result)
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed or the test runs in display mode.
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

        self.success || self.display()
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

/// Compare two buffers, reporting the first difference.
fn diff_buffers(index: usize, expected: &PixelBuffer, actual: &PixelBuffer) -> TestResult<()> {
    if expected.dimensions() != actual.dimensions() {
        return Err(TestError::DimensionMismatch {
            index,
            expected: expected.dimensions(),
            actual: actual.dimensions(),
        });
    }
    if expected.as_bytes() == actual.as_bytes() {
        return Ok(());
    }
    for y in 0..expected.height {
        for x in 0..expected.width {
            let e = expected.get_rgba(x, y);
            let a = actual.get_rgba(x, y);
            if e != a {
                return Err(TestError::PixelMismatch {
                    index,
                    x,
                    y,
                    expected: e.unwrap_or_default(),
                    actual: a.unwrap_or_default(),
                });
            }
        }
    }
    Ok(())
}
