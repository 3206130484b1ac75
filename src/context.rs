// Copyright Materialize, Inc. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository, or online at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::decimal::{pow10, scale_coef, Decimal};
use crate::error::{DivideError, InvalidExponentError};

/// A context for performing decimal operations.
///
/// A context configures the rounding algorithm used by the operations that
/// cannot be exact: division and rescaling to a coarser exponent. The exact
/// operations (addition, subtraction, multiplication, comparison) do not
/// consult a context and live directly on [`Decimal`].
///
/// Contexts are plain values. Where the rounding mode does not matter, use
/// `Context::default()` at the call site; there is no process-wide mode.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Context {
    rounding: Rounding,
}

impl Context {
    /// Constructs a context that rounds with the given algorithm.
    pub fn with_rounding(rounding: Rounding) -> Context {
        Context { rounding }
    }

    /// Returns the context's rounding algorithm.
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Sets the context's rounding algorithm.
    pub fn set_rounding(&mut self, rounding: Rounding) {
        self.rounding = rounding;
    }

    /// Divides `x` by `y`, producing a result with the exponent of `x`.
    ///
    /// Equivalent to [`Context::div_to`] with `x.exponent()` as the output
    /// exponent.
    pub fn div(&self, x: &Decimal, y: &Decimal) -> Result<Decimal, DivideError> {
        self.div_to(x, y, x.exponent())
    }

    /// Divides `x` by `y`, producing a result with the requested exponent.
    ///
    /// Decimal division does not terminate in general, so the caller fixes
    /// the exponent of the result and the quotient's coefficient is rounded
    /// to it with the context's rounding algorithm.
    ///
    /// Errors if `y` is zero, if the output exponent would require rounding
    /// the dividend twice (`output_exponent + exp_y - exp_x > 0` once `y` has
    /// been refined to a non-positive exponent), or if the output exponent is
    /// out of range.
    pub fn div_to(
        &self,
        x: &Decimal,
        y: &Decimal,
        output_exponent: i64,
    ) -> Result<Decimal, DivideError> {
        if y.coefficient().is_zero() || !Decimal::exponent_in_range(output_exponent) {
            return Err(DivideError);
        }

        // A positive exponent on the divisor refines away exactly.
        let (coef_y, exp_y) = if y.exponent() > 0 {
            (y.coefficient() * pow10(y.exponent() as u64), 0)
        } else {
            (y.coefficient().clone(), y.exponent())
        };

        // The dividend must reach exponent `output_exponent + exp_y` before
        // the rounding division. That step is exact only when it is a
        // refinement; anything else would round twice.
        if output_exponent + exp_y - x.exponent() > 0 {
            return Err(DivideError);
        }

        let coef_x = x.coefficient() * pow10((x.exponent() - (output_exponent + exp_y)) as u64);
        let coef = self.rounding.round_quotient(&coef_x, &coef_y);
        Ok(Decimal::from_raw_parts(coef, output_exponent))
    }

    /// Returns a value numerically close to `x` with the requested exponent.
    ///
    /// Rescaling to a finer (smaller) exponent is exact. Rescaling to a
    /// coarser exponent rounds the coefficient with the context's rounding
    /// algorithm.
    ///
    /// Errors if the exponent is out of range.
    pub fn rescale(&self, x: &Decimal, exponent: i64) -> Result<Decimal, InvalidExponentError> {
        if !Decimal::exponent_in_range(exponent) {
            return Err(InvalidExponentError);
        }
        let coef = scale_coef(x.coefficient(), x.exponent(), exponent, self.rounding);
        Ok(Decimal::from_raw_parts(coef, exponent))
    }
}

/// Algorithms for rounding decimal numbers.
///
/// A rounding algorithm selects the representative integer quotient when an
/// exact division is impossible.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rounding {
    /// Round towards positive infinity.
    Ceiling,
    /// Round towards zero (truncation).
    Down,
    /// Round towards negative infinity.
    Floor,
    /// Round to nearest; if equidistant, round so that the final digit is
    /// even.
    HalfEven,
    /// Round to nearest; if equidistant, round away from zero.
    HalfUp,
    /// Round away from zero.
    Up,
}

impl Default for Rounding {
    fn default() -> Rounding {
        Rounding::HalfEven
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rounding::Ceiling => f.write_str("ceiling"),
            Rounding::Down => f.write_str("down"),
            Rounding::Floor => f.write_str("floor"),
            Rounding::HalfEven => f.write_str("half-even"),
            Rounding::HalfUp => f.write_str("half-up"),
            Rounding::Up => f.write_str("up"),
        }
    }
}

impl Rounding {
    /// Computes the integer quotient of `n` and `div` under this rounding
    /// algorithm. Either argument may be negative.
    ///
    /// # Panics
    ///
    /// Panics if `div` is zero. Callers that cannot rule out a zero divisor
    /// must reject it beforehand; the arithmetic entry points in this crate
    /// do so.
    pub fn round_quotient(&self, n: &BigInt, div: &BigInt) -> BigInt {
        assert!(!div.is_zero(), "round_quotient: zero divisor");

        let (q, r) = n.div_rem(div);
        if r.is_zero() {
            return q;
        }

        // Truncation moved toward zero. The true quotient is negative
        // exactly when the operand signs differ, which decides the
        // direction of the away-from-zero step.
        let negative = n.is_negative() != div.is_negative();

        let round_away = match self {
            Rounding::Down => false,
            Rounding::Up => true,
            Rounding::Floor => negative,
            Rounding::Ceiling => !negative,
            Rounding::HalfUp => {
                let twice_r = r.magnitude() * 2u32;
                twice_r >= *div.magnitude()
            }
            Rounding::HalfEven => {
                let twice_r = r.magnitude() * 2u32;
                twice_r > *div.magnitude() || (twice_r == *div.magnitude() && q.is_odd())
            }
        };

        if round_away {
            if negative {
                q - 1
            } else {
                q + 1
            }
        } else {
            q
        }
    }
}
