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

use std::error::Error;
use std::fmt;

/// An error indicating that a string is not a valid decimal number.
#[derive(Debug, Eq, PartialEq)]
pub struct ParseDecimalError;

impl fmt::Display for ParseDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("invalid decimal syntax")
    }
}

impl Error for ParseDecimalError {}

/// An error indicating that an exponent is outside the supported range.
///
/// Exponents must lie between [`Decimal::EXPONENT_MIN`] and
/// [`Decimal::EXPONENT_MAX`], inclusive.
///
/// [`Decimal::EXPONENT_MIN`]: crate::Decimal::EXPONENT_MIN
/// [`Decimal::EXPONENT_MAX`]: crate::Decimal::EXPONENT_MAX
#[derive(Debug, Eq, PartialEq)]
pub struct InvalidExponentError;

impl fmt::Display for InvalidExponentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("invalid decimal exponent")
    }
}

impl Error for InvalidExponentError {}

/// An error indicating a value cannot be precisely expressed with the
/// requested exponent.
///
/// Causes for this failure include:
/// - Retagging a value to a coarser exponent of which it is not an exact
///   multiple, e.g. retagging `0.25` to exponent `-1`.
/// - Requesting a target exponent outside the supported range.
#[derive(Debug, Eq, PartialEq)]
pub struct TryIntoDecimalError;

impl fmt::Display for TryIntoDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("value cannot be precisely expressed with the requested exponent")
    }
}

impl Error for TryIntoDecimalError {}

/// An error indicating that a division cannot be performed.
///
/// Causes for this failure include:
/// - A zero divisor.
/// - An output exponent that would require rounding the dividend twice,
///   i.e. one for which `output_exponent + exp_y - exp_x > 0`.
/// - An output exponent outside the supported range.
#[derive(Debug, Eq, PartialEq)]
pub struct DivideError;

impl fmt::Display for DivideError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("decimal division is undefined for these arguments")
    }
}

impl Error for DivideError {}

/// An error indicating that a formatting option combination is not supported.
///
/// Locale-aware formatting supports only standard notation, and every style
/// except percent.
#[derive(Debug, Eq, PartialEq)]
pub struct UnsupportedFormatError;

impl fmt::Display for UnsupportedFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("unsupported formatting options")
    }
}

impl Error for UnsupportedFormatError {}
