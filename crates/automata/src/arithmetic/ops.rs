//! Derived arithmetic built only from the automaton primitives.
//!
//! The recursive definitions
//!
//! ```text
//! add(x, y)  = y                          if x is zero
//!            = S(add(pred(x), y))         otherwise
//! prod(x, y) = Z(x)                       if x is zero
//!            = add(y, prod(pred(x), y))   otherwise
//! exp(x, y)  = S(Z(x))                    if x is zero
//!            = prod(y, exp(pred(x), y))   otherwise
//! ```
//!
//! are unrolled into loops: the innermost value is the base case, and each
//! iteration peels one `pred` off the counter and wraps the accumulator once.
//! The counter is bounded by [`AutomatonPrimitives::iteration_limit`], so an
//! oversized operand is a [`RecursionDepthExceeded`](Error::RecursionDepthExceeded)
//! error instead of a blown stack.
//!
//! Widths follow the definitions: `add` keeps the width of `y`, `prod` the
//! width of `x`, and `exp` the width of `y` (of `x` when `x` is zero).
//! Overflow wraps like the successor rule does.

use alloc::string::String;

use tracing::debug;

use super::primitives::AutomatonPrimitives;
use crate::error::{Error, Result};

/// Zero test, guarded predecessor, and the three recursive operations.
pub trait PeanoOps: AutomatonPrimitives {
    /// True when `x` equals its own zero image.
    ///
    /// # Errors
    ///
    /// As [`AutomatonPrimitives::run`].
    #[inline]
    fn is_zero(&self, x: &str) -> Result<bool> {
        Ok(self.zero(x)? == x)
    }

    /// Predecessor; the predecessor of zero is zero.
    ///
    /// # Errors
    ///
    /// As [`AutomatonPrimitives::run`].
    fn pred(&self, x: &str) -> Result<String> {
        if self.is_zero(x)? {
            return Ok(String::from(x));
        }
        self.pred_step(x)
    }

    /// `x + y`, in the width of `y`.
    ///
    /// # Errors
    ///
    /// As [`AutomatonPrimitives::run`], plus `RecursionDepthExceeded` when
    /// `x` needs more iterations than the limit.
    fn add(&self, x: &str, y: &str) -> Result<String> {
        let sum = count_down(self, x, String::from(y), |acc| self.succ(&acc))?;
        debug!(op = "add", x, y, result = %sum);
        Ok(sum)
    }

    /// `x * y`, in the width of `x`.
    ///
    /// # Errors
    ///
    /// As [`add`](Self::add).
    fn prod(&self, x: &str, y: &str) -> Result<String> {
        let base = self.zero(x)?;
        let product = count_down(self, x, base, |acc| self.add(y, &acc))?;
        debug!(op = "prod", x, y, result = %product);
        Ok(product)
    }

    /// `y` raised to the power `x`.
    ///
    /// # Errors
    ///
    /// As [`add`](Self::add).
    fn exp(&self, x: &str, y: &str) -> Result<String> {
        let one = self.succ(&self.zero(x)?)?;
        let power = count_down(self, x, one, |acc| self.prod(y, &acc))?;
        debug!(op = "exp", x, y, result = %power);
        Ok(power)
    }
}

impl<T: AutomatonPrimitives + ?Sized> PeanoOps for T {}

/// Applies `step` to `acc` once per unit of `counter`, decrementing the
/// counter with the guarded predecessor until it reaches zero.
fn count_down<P, F>(ops: &P, counter: &str, mut acc: String, mut step: F) -> Result<String>
where
    P: PeanoOps + ?Sized,
    F: FnMut(String) -> Result<String>,
{
    let limit = ops.iteration_limit();
    let mut remaining = String::from(counter);
    let mut iterations = 0usize;
    while !ops.is_zero(&remaining)? {
        if iterations == limit {
            return Err(Error::RecursionDepthExceeded { limit });
        }
        remaining = ops.pred(&remaining)?;
        acc = step(acc)?;
        iterations += 1;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arithmetic::primitives::Automaton;
    use crate::config::{ArithmeticConfig, EvolutionConfig};

    fn automaton() -> Automaton {
        Automaton::default()
    }

    #[test]
    fn zero_test_compares_with_zero_image() {
        let a = automaton();
        assert!(a.is_zero("0").unwrap());
        assert!(a.is_zero("0000").unwrap());
        assert!(!a.is_zero("0010").unwrap());
    }

    #[test]
    fn predecessor_of_zero_is_zero() {
        let a = automaton();
        assert_eq!(a.pred("000").unwrap(), "000");
        assert_eq!(a.pred("100").unwrap(), "011");
    }

    #[test]
    fn small_operations() {
        let a = automaton();
        assert_eq!(a.add("0011", "0010").unwrap(), "0101");
        assert_eq!(a.prod("0011", "0010").unwrap(), "0110");
        assert_eq!(a.exp("0011", "0010").unwrap(), "1000");
        assert_eq!(a.exp("0010", "0011").unwrap(), "1001");
    }

    #[test]
    fn widths_follow_operands() {
        let a = automaton();
        // add keeps y's width, prod keeps x's width, exp keeps y's width
        assert_eq!(a.add("011", "0101").unwrap(), "1000");
        assert_eq!(a.prod("011", "0101").unwrap(), "111");
        assert_eq!(a.exp("011", "0101").unwrap(), "1101");
    }

    #[test]
    fn overflow_wraps() {
        let a = automaton();
        assert_eq!(a.add("11", "11").unwrap(), "10");
    }

    #[test]
    fn iteration_limit_is_enforced() {
        let a = Automaton::new(
            EvolutionConfig::default(),
            ArithmeticConfig { max_iterations: 2 },
        );
        assert_eq!(a.add("10", "00").unwrap(), "10");
        assert_eq!(
            a.add("11", "00"),
            Err(Error::RecursionDepthExceeded { limit: 2 })
        );
    }
}
