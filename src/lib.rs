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

//! decfmt is an exact decimal arithmetic and formatting library for Rust.
//!
//! # Introduction
//!
//! Binary floating-point numbers can only approximate common decimal
//! numbers: the value 0.1, for example, would need an infinitely recurring
//! binary fraction. decfmt instead represents every value exactly, as an
//! arbitrary-precision coefficient paired with a power-of-ten exponent.
//! Addition, subtraction, and multiplication are always exact; the
//! operations that cannot be (division and rescaling) take an explicit
//! rounding algorithm and a caller-chosen result exponent, so precision is
//! only ever lost where the caller asked for it.
//!
//! The main types exposed by this library are as follows:
//!
//!  * [`Decimal`], an immutable pair of an arbitrary-precision coefficient
//!    and a bounded exponent, denoting `coefficient * 10^exponent`, with
//!    exact arithmetic, parsing, and exact plain stringification.
//!
//!  * [`Context`], which hosts the inexact operations. A context configures
//!    the rounding algorithm those operations use; there is no process-wide
//!    rounding mode.
//!
//!  * [`HostFormat`], the seam to a locale-aware formatting facility, and
//!    [`Decimal::to_locale_string`], which renders a decimal with locale
//!    decoration from the host while guaranteeing the emitted digits are
//!    exact even beyond the host's native precision. [`BasicHost`] is a
//!    table-driven host implementation.
//!
//! # Examples
//!
//! The following example demonstrates the basic usage of the library:
//!
//! ```
//! # use std::error::Error;
//! use decfmt::{Context, Decimal};
//!
//! let x: Decimal = ".1".parse()?;
//! let y: Decimal = ".2".parse()?;
//! let z: Decimal = ".3".parse()?;
//!
//! assert_eq!(&x + &y, z);
//! assert_eq!((x + y).to_string(), "0.3");
//!
//! let cx = Context::default();
//! let q = cx.div_to(&Decimal::from(1), &Decimal::from(3), -4)?;
//! assert_eq!(q.to_string(), "0.3333");
//! # Ok::<_, Box<dyn Error>>(())
//! ```

#![deny(missing_debug_implementations, missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod context;
mod decimal;
mod error;
mod locale;

pub use context::{Context, Rounding};
pub use decimal::Decimal;
pub use error::{
    DivideError, InvalidExponentError, ParseDecimalError, TryIntoDecimalError,
    UnsupportedFormatError,
};
pub use locale::{
    BasicHost, FormatOptions, HostFormat, LocaleSettings, Notation, NumberPart, NumberPartKind,
    Style,
};
