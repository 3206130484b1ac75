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

use num_bigint::BigInt;

use decfmt::{
    BasicHost, Decimal, FormatOptions, LocaleSettings, Notation, Style, UnsupportedFormatError,
};

fn host() -> BasicHost {
    BasicHost::default()
}

#[test]
fn test_integer_delegation() -> Result<(), Box<dyn Error>> {
    let host = host();
    let options = FormatOptions::default();

    let d = Decimal::from_parts(-7890, 3)?;
    assert_eq!(d.to_locale_string(&host, &options)?, "-7,890,000");

    let d = Decimal::from(42);
    assert_eq!(d.to_locale_string(&host, &options)?, "42");

    // Zero formats as zero no matter the exponent.
    let d = Decimal::from_parts(0, -5)?;
    assert_eq!(d.to_locale_string(&host, &options)?, "0");
    Ok(())
}

#[test]
fn test_fractional_substitution() -> Result<(), Box<dyn Error>> {
    let host = host();
    let options = FormatOptions::default();

    let d = Decimal::from_parts(1234567, -2)?;
    assert_eq!(d.to_locale_string(&host, &options)?, "12,345.67");

    let d = Decimal::from_parts(1234, -6)?;
    assert_eq!(d.to_locale_string(&host, &options)?, "0.001234");

    let d = Decimal::from_parts(-5, -1)?;
    assert_eq!(d.to_locale_string(&host, &options)?, "-0.5");
    Ok(())
}

#[test]
fn test_digit_exactness_beyond_f64() -> Result<(), Box<dyn Error>> {
    let host = host();
    let options = FormatOptions::default();

    // 27 significant digits, far past what an f64 can hold.
    let coef: BigInt = "123456789012345678901234567".parse()?;
    let d = Decimal::from_parts(coef, -4)?;
    assert_eq!(
        d.to_locale_string(&host, &options)?,
        "12,345,678,901,234,567,890,123.4567"
    );

    let coef: BigInt = "-123456789012345678901234567".parse()?;
    let d = Decimal::from_parts(coef, -4)?;
    assert_eq!(
        d.to_locale_string(&host, &options)?,
        "-12,345,678,901,234,567,890,123.4567"
    );
    Ok(())
}

#[test]
fn test_currency() -> Result<(), Box<dyn Error>> {
    let host = host();
    let options = FormatOptions {
        style: Style::Currency("$".into()),
        ..FormatOptions::default()
    };

    let d = Decimal::from_parts(199, -2)?;
    assert_eq!(d.to_locale_string(&host, &options)?, "$1.99");

    let d = Decimal::from_parts(-199, -2)?;
    assert_eq!(d.to_locale_string(&host, &options)?, "-$1.99");

    let d = Decimal::from_parts(123456789, -2)?;
    assert_eq!(d.to_locale_string(&host, &options)?, "$1,234,567.89");
    Ok(())
}

#[test]
fn test_unit_plurals() -> Result<(), Box<dyn Error>> {
    let host = host();
    let options = FormatOptions {
        style: Style::Unit("meter".into()),
        ..FormatOptions::default()
    };

    let d = Decimal::from(1);
    assert_eq!(d.to_locale_string(&host, &options)?, "1 meter");

    let d = Decimal::from(2);
    assert_eq!(d.to_locale_string(&host, &options)?, "2 meters");

    let d = Decimal::from_parts(15, -1)?;
    assert_eq!(d.to_locale_string(&host, &options)?, "1.5 meters");

    let d = Decimal::from_parts(1, -1)?;
    assert_eq!(d.to_locale_string(&host, &options)?, "0.1 meters");
    Ok(())
}

#[test]
fn test_plural_selection_survives_condensation() -> Result<(), Box<dyn Error>> {
    let host = host();
    let options = FormatOptions {
        style: Style::Unit("liter".into()),
        ..FormatOptions::default()
    };

    // The integer part ends in ...01: a naive bounded stand-in would format
    // as singular "1" and pick the wrong unit name.
    let coef: BigInt = "100000000000000000000150".parse()?;
    let d = Decimal::from_parts(coef, -2)?;
    assert_eq!(
        d.to_locale_string(&host, &options)?,
        "1,000,000,000,000,000,000,001.50 liters"
    );
    Ok(())
}

#[test]
fn test_minimum_fraction_digits() -> Result<(), Box<dyn Error>> {
    let host = host();
    let options = FormatOptions {
        minimum_fraction_digits: 3,
        ..FormatOptions::default()
    };

    // Padding beyond the decimal's own fractional width.
    let d = Decimal::from_parts(15, -1)?;
    assert_eq!(d.to_locale_string(&host, &options)?, "1.500");

    // Integers delegate entirely, including the fraction padding.
    let d = Decimal::from(5);
    assert_eq!(d.to_locale_string(&host, &options)?, "5.000");
    Ok(())
}

#[test]
fn test_grouping_disabled() -> Result<(), Box<dyn Error>> {
    let host = host();
    let options = FormatOptions {
        use_grouping: false,
        ..FormatOptions::default()
    };

    let d = Decimal::from_parts(1234567, -2)?;
    assert_eq!(d.to_locale_string(&host, &options)?, "12345.67");

    let d = Decimal::from(1234567);
    assert_eq!(d.to_locale_string(&host, &options)?, "1234567");
    Ok(())
}

#[test]
fn test_locale_tables() -> Result<(), Box<dyn Error>> {
    let host = BasicHost::new(
        LocaleSettings::default()
            .with_decimal_separator(",")
            .with_group_separator("."),
    );
    let options = FormatOptions::default();

    let d = Decimal::from_parts(1234567, -2)?;
    assert_eq!(d.to_locale_string(&host, &options)?, "12.345,67");
    Ok(())
}

#[test]
fn test_minimum_integer_digits() -> Result<(), Box<dyn Error>> {
    let host = host();
    let options = FormatOptions {
        minimum_integer_digits: 4,
        use_grouping: false,
        ..FormatOptions::default()
    };

    let d = Decimal::from_parts(55, -1)?;
    assert_eq!(d.to_locale_string(&host, &options)?, "0005.5");

    let d = Decimal::from(7);
    assert_eq!(d.to_locale_string(&host, &options)?, "0007");
    Ok(())
}

#[test]
fn test_unsupported_options() -> Result<(), Box<dyn Error>> {
    let host = host();
    let d = Decimal::from_parts(15, -1)?;

    for notation in [Notation::Scientific, Notation::Engineering, Notation::Compact] {
        let options = FormatOptions {
            notation,
            ..FormatOptions::default()
        };
        assert_eq!(
            d.to_locale_string(&host, &options),
            Err(UnsupportedFormatError)
        );
    }

    let options = FormatOptions {
        style: Style::Percent,
        ..FormatOptions::default()
    };
    assert_eq!(
        d.to_locale_string(&host, &options),
        Err(UnsupportedFormatError)
    );
    Ok(())
}
