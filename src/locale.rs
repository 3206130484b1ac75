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

//! Locale-aware rendering of decimals.
//!
//! Locale decoration (grouping, separators, currency and unit affixes,
//! plural selection) is delegated to a [`HostFormat`] implementation, which
//! operates on bounded floating-point values and arbitrary-precision
//! integers but cannot hold an arbitrary-precision fraction. The digits of
//! the output are nonetheless exact: the decimal is split into exact integer
//! and fraction texts, a bounded stand-in value is formatted to discover the
//! decoration, and the stand-in's digit runs are replaced by the exact
//! texts.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::decimal::{pow10, Decimal};
use crate::error::UnsupportedFormatError;

/// How many low-order digits of an oversized component survive into the
/// bounded stand-in value. Calibrated against [`BasicHost`]; audit before
/// pairing the substitution algorithm with a host that has different plural
/// or grouping boundaries.
const FRAGMENT_DIGITS: usize = 2;

/// The notation in which to render a number.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Notation {
    /// Plain decimal notation. The only notation supported by
    /// [`Decimal::to_locale_string`].
    Standard,
    /// Scientific notation, e.g. `1.2E3`.
    Scientific,
    /// Engineering notation, e.g. `12E3`.
    Engineering,
    /// Compact notation, e.g. `12K`.
    Compact,
}

/// The style in which to render a number.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Style {
    /// A plain number.
    Decimal,
    /// A currency amount, decorated with the given currency symbol.
    Currency(String),
    /// A measurement, decorated with the given unit name.
    Unit(String),
    /// A percentage. Not supported by [`Decimal::to_locale_string`].
    Percent,
}

/// Options controlling locale-aware formatting.
///
/// Options the engine does not interpret itself are passed through to the
/// host formatter.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FormatOptions {
    /// The notation to use. Only [`Notation::Standard`] is supported.
    pub notation: Notation,
    /// The style to use. Every style but [`Style::Percent`] is supported.
    pub style: Style,
    /// Whether to insert grouping separators in the integer part.
    pub use_grouping: bool,
    /// The minimum number of integer digits, left-padded with zeros.
    pub minimum_integer_digits: u32,
    /// The minimum number of fraction digits, right-padded with zeros.
    pub minimum_fraction_digits: u32,
    /// The maximum number of fraction digits the host formatter renders for
    /// bounded values. Never applied to the exact digit texts.
    pub maximum_fraction_digits: Option<u32>,
}

impl Default for FormatOptions {
    fn default() -> FormatOptions {
        FormatOptions {
            notation: Notation::Standard,
            style: Style::Decimal,
            use_grouping: true,
            minimum_integer_digits: 1,
            minimum_fraction_digits: 0,
            maximum_fraction_digits: None,
        }
    }
}

/// The kind of a formatted segment.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum NumberPartKind {
    /// A run of integer digits.
    Integer,
    /// A grouping separator between integer digit runs.
    Group,
    /// A run of fraction digits.
    Fraction,
    /// Anything else: sign, decimal separator, currency or unit symbols,
    /// spacing.
    Literal,
}

/// A typed segment of a formatted number.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct NumberPart {
    /// The kind of the segment.
    pub kind: NumberPartKind,
    /// The segment's text.
    pub text: String,
}

impl NumberPart {
    fn new(kind: NumberPartKind, text: impl Into<String>) -> NumberPart {
        NumberPart {
            kind,
            text: text.into(),
        }
    }
}

/// A host facility for locale-aware number formatting.
///
/// The host is consulted for decoration only, never for fractional digit
/// precision: big integers are formatted exactly, while fractional values
/// pass through `f64` and are precise only to its native range. Its internal
/// correctness is assumed.
pub trait HostFormat {
    /// Formats an arbitrary-precision integer. Exact.
    fn format_big_int(&self, n: &BigInt, options: &FormatOptions) -> String;

    /// Formats a bounded value into an ordered sequence of typed segments.
    fn format_to_parts(&self, value: f64, options: &FormatOptions) -> Vec<NumberPart>;
}

impl Decimal {
    /// Renders the decimal with locale decoration supplied by `host`.
    ///
    /// The emitted digits exactly match the decimal's digits even when the
    /// coefficient exceeds the host formatter's native precision; only the
    /// decoration (grouping, separators, affixes, plural selection) comes
    /// from the host.
    ///
    /// Errors if the options request a notation other than
    /// [`Notation::Standard`] or the [`Style::Percent`] style.
    pub fn to_locale_string<H>(
        &self,
        host: &H,
        options: &FormatOptions,
    ) -> Result<String, UnsupportedFormatError>
    where
        H: HostFormat + ?Sized,
    {
        if options.notation != Notation::Standard || options.style == Style::Percent {
            return Err(UnsupportedFormatError);
        }

        // Without fractional digits the value is a plain integer, which the
        // host accepts at full precision.
        if self.is_zero() || self.exponent() >= 0 {
            let n = if self.is_zero() {
                BigInt::from(0)
            } else {
                self.coefficient() * pow10(self.exponent() as u64)
            };
            return Ok(host.format_big_int(&n, options));
        }

        let frac_width = -self.exponent() as usize;
        let (int_part, frac_part) = self.coefficient().abs().div_rem(&pow10(frac_width as u64));
        let negative = self.is_negative();

        // Format a bounded stand-in to discover the decoration.
        let template_frac_width = frac_width.min(FRAGMENT_DIGITS);
        let template = template_value(&int_part, &frac_part, template_frac_width, negative);
        let mut template_opts = options.clone();
        template_opts.minimum_fraction_digits = template_frac_width as u32;
        template_opts.maximum_fraction_digits = Some(template_frac_width as u32);
        let parts = host.format_to_parts(template, &template_opts);

        // The exact texts: the integer part grouped per the caller's
        // options, the fraction part at fixed width with no grouping.
        let int_opts = FormatOptions {
            use_grouping: options.use_grouping,
            minimum_integer_digits: options.minimum_integer_digits,
            ..FormatOptions::default()
        };
        let int_text = host.format_big_int(&int_part, &int_opts);
        let frac_opts = FormatOptions {
            use_grouping: false,
            minimum_integer_digits: frac_width as u32,
            ..FormatOptions::default()
        };
        let mut frac_text = host.format_big_int(&frac_part, &frac_opts);
        if options.minimum_fraction_digits as usize > frac_width {
            let pad = options.minimum_fraction_digits as usize - frac_width;
            frac_text.push_str(&"0".repeat(pad));
        }

        // Substitute the exact texts into the stand-in's digit runs. The
        // grouped integer region of the stand-in (its integer runs and the
        // group separators between them) collapses into the single exact
        // integer text.
        let mut out = String::new();
        let mut int_done = false;
        let mut frac_done = false;
        for part in &parts {
            match part.kind {
                NumberPartKind::Integer => {
                    if !int_done {
                        out.push_str(&int_text);
                        int_done = true;
                    }
                }
                NumberPartKind::Group => {}
                NumberPartKind::Fraction => {
                    if !frac_done {
                        out.push_str(&frac_text);
                        frac_done = true;
                    }
                }
                NumberPartKind::Literal => out.push_str(&part.text),
            }
        }
        Ok(out)
    }
}

/// Builds the bounded stand-in for a split decimal.
///
/// The stand-in preserves the sign, whether the integer part is zero or one,
/// whether the fraction is nonzero, and the requested number of fraction
/// digits. Oversized components are condensed to small fragments that stay
/// away from plural and power-of-ten boundaries.
fn template_value(int_part: &BigInt, frac_part: &BigInt, frac_width: usize, negative: bool) -> f64 {
    let int_frag = condense(int_part);
    let frac_frag = condense_fraction(frac_part, frac_width);
    let mut t = int_frag as f64 + frac_frag as f64 / 10f64.powi(frac_width as i32);
    if negative {
        t = -t;
    }
    t
}

fn condense(n: &BigInt) -> u64 {
    let limit = 10u64.pow(FRAGMENT_DIGITS as u32);
    match n.to_u64() {
        Some(v) if v < limit => v,
        _ => {
            // Map oversized values into [10, 99]: the fragment keeps its
            // full width, cannot land in the zero or one plural buckets, and
            // cannot carry into the next power of ten under the host's
            // rounding.
            let frag = (n % limit).to_u64().unwrap_or(0);
            limit / 10 + frag % (limit - limit / 10)
        }
    }
}

fn condense_fraction(f: &BigInt, width: usize) -> u64 {
    if f.is_zero() {
        return 0;
    }
    let limit = 10u64.pow(width as u32);
    let frag = (f % limit).to_u64().unwrap_or(0);
    if frag == 0 {
        // A nonzero fraction must stay visibly nonzero.
        1
    } else {
        frag
    }
}

/// Locale tables for [`BasicHost`]: separators, grouping, and affix
/// placement.
///
/// The default settings match en-US conventions. Builder methods derive
/// other locales:
///
/// ```
/// use decfmt::LocaleSettings;
///
/// let de = LocaleSettings::default()
///     .with_decimal_separator(",")
///     .with_group_separator(".");
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LocaleSettings {
    decimal_separator: String,
    group_separator: String,
    group_size: usize,
    minus_sign: String,
    currency_before: bool,
}

impl Default for LocaleSettings {
    fn default() -> LocaleSettings {
        LocaleSettings {
            decimal_separator: ".".into(),
            group_separator: ",".into(),
            group_size: 3,
            minus_sign: "-".into(),
            currency_before: true,
        }
    }
}

impl LocaleSettings {
    /// Sets the decimal separator.
    pub fn with_decimal_separator(mut self, sep: impl Into<String>) -> LocaleSettings {
        self.decimal_separator = sep.into();
        self
    }

    /// Sets the grouping separator.
    pub fn with_group_separator(mut self, sep: impl Into<String>) -> LocaleSettings {
        self.group_separator = sep.into();
        self
    }

    /// Sets the number of integer digits per group.
    pub fn with_group_size(mut self, size: usize) -> LocaleSettings {
        self.group_size = size;
        self
    }

    /// Sets the minus sign.
    pub fn with_minus_sign(mut self, sign: impl Into<String>) -> LocaleSettings {
        self.minus_sign = sign.into();
        self
    }

    /// Sets whether the currency symbol precedes the number.
    pub fn with_currency_before(mut self, before: bool) -> LocaleSettings {
        self.currency_before = before;
        self
    }
}

/// A table-driven [`HostFormat`] implementation.
///
/// Suitable for tests and for deployments without a richer formatting
/// facility. Plural selection follows the English one/other rule: a value is
/// singular exactly when it renders as `1` with no visible fraction digits,
/// and plural unit names are formed by appending `s`.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct BasicHost {
    settings: LocaleSettings,
}

impl BasicHost {
    /// Constructs a host formatter over the given locale tables.
    pub fn new(settings: LocaleSettings) -> BasicHost {
        BasicHost { settings }
    }

    fn group(&self, digits: &str) -> Vec<String> {
        if digits.len() <= self.group_size() {
            return vec![digits.to_string()];
        }
        let bytes = digits.as_bytes();
        let head = digits.len() % self.group_size();
        let mut runs = Vec::new();
        if head > 0 {
            runs.push(digits[..head].to_string());
        }
        let mut i = head;
        while i < bytes.len() {
            runs.push(digits[i..i + self.group_size()].to_string());
            i += self.group_size();
        }
        runs
    }

    fn group_size(&self) -> usize {
        self.settings.group_size
    }

    /// Assembles the final string from digit runs and style decoration,
    /// shared by both trait methods.
    fn assemble(
        &self,
        parts: &mut Vec<NumberPart>,
        negative: bool,
        int_runs: Vec<String>,
        frac: &str,
        options: &FormatOptions,
        singular: bool,
    ) {
        let currency_prefix = match &options.style {
            Style::Currency(symbol) if self.settings.currency_before => Some(symbol.clone()),
            _ => None,
        };

        if negative {
            parts.push(NumberPart::new(
                NumberPartKind::Literal,
                self.settings.minus_sign.clone(),
            ));
        }
        if let Some(symbol) = currency_prefix {
            parts.push(NumberPart::new(NumberPartKind::Literal, symbol));
        }

        let mut first = true;
        for run in int_runs {
            if !first {
                parts.push(NumberPart::new(
                    NumberPartKind::Group,
                    self.settings.group_separator.clone(),
                ));
            }
            parts.push(NumberPart::new(NumberPartKind::Integer, run));
            first = false;
        }

        if !frac.is_empty() {
            parts.push(NumberPart::new(
                NumberPartKind::Literal,
                self.settings.decimal_separator.clone(),
            ));
            parts.push(NumberPart::new(NumberPartKind::Fraction, frac));
        }

        match &options.style {
            Style::Currency(symbol) if !self.settings.currency_before => {
                parts.push(NumberPart::new(NumberPartKind::Literal, " "));
                parts.push(NumberPart::new(NumberPartKind::Literal, symbol.clone()));
            }
            Style::Unit(unit) => {
                parts.push(NumberPart::new(NumberPartKind::Literal, " "));
                let name = if singular {
                    unit.clone()
                } else {
                    format!("{}s", unit)
                };
                parts.push(NumberPart::new(NumberPartKind::Literal, name));
            }
            Style::Percent => {
                parts.push(NumberPart::new(NumberPartKind::Literal, "%"));
            }
            _ => {}
        }
    }
}

impl HostFormat for BasicHost {
    fn format_big_int(&self, n: &BigInt, options: &FormatOptions) -> String {
        let mut digits = n.magnitude().to_string();
        let min_int = options.minimum_integer_digits as usize;
        if digits.len() < min_int {
            digits = format!("{}{}", "0".repeat(min_int - digits.len()), digits);
        }
        let int_runs = if options.use_grouping {
            self.group(&digits)
        } else {
            vec![digits.clone()]
        };
        let frac = "0".repeat(options.minimum_fraction_digits as usize);

        let singular = !n.is_negative() && digits == "1" && frac.is_empty();
        let mut parts = Vec::new();
        self.assemble(
            &mut parts,
            n.is_negative(),
            int_runs,
            &frac,
            options,
            singular,
        );
        parts.into_iter().map(|p| p.text).collect()
    }

    fn format_to_parts(&self, value: f64, options: &FormatOptions) -> Vec<NumberPart> {
        let negative = value.is_sign_negative();
        let magnitude = value.abs();

        let min_frac = options.minimum_fraction_digits as usize;
        let max_frac = options
            .maximum_fraction_digits
            .map(|d| d as usize)
            .unwrap_or_else(|| min_frac.max(3));

        let rendered = format!("{:.*}", max_frac, magnitude);
        let (int_digits, frac_digits) = match rendered.split_once('.') {
            Some((i, f)) => (i.to_string(), f.to_string()),
            None => (rendered, String::new()),
        };

        let mut frac = frac_digits;
        while frac.len() > min_frac && frac.ends_with('0') {
            frac.pop();
        }

        let mut int_digits = int_digits;
        let min_int = options.minimum_integer_digits as usize;
        if int_digits.len() < min_int {
            int_digits = format!("{}{}", "0".repeat(min_int - int_digits.len()), int_digits);
        }

        let int_runs = if options.use_grouping {
            self.group(&int_digits)
        } else {
            vec![int_digits.clone()]
        };

        let singular = !negative && int_digits == "1" && frac.is_empty();
        let mut parts = Vec::new();
        self.assemble(&mut parts, negative, int_runs, &frac, options, singular);
        parts
    }
}
