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

use serde_test::{assert_tokens, Token};

use decfmt::{Decimal, Rounding};

#[test]
fn test_serde_decimal() -> Result<(), Box<dyn Error>> {
    let d: Decimal = "-12.34".parse()?;
    assert_tokens(&d, &[Token::Str("-12.34")]);

    let d: Decimal = "0.001234".parse()?;
    assert_tokens(&d, &[Token::Str("0.001234")]);

    let d = Decimal::from(0);
    assert_tokens(&d, &[Token::Str("0")]);
    Ok(())
}

#[test]
fn test_serde_decimal_json() -> Result<(), Box<dyn Error>> {
    let d: Decimal = "1.25".parse()?;
    assert_eq!(serde_json::to_string(&d)?, r#""1.25""#);

    let d: Decimal = serde_json::from_str(r#""1e3""#)?;
    assert_eq!(d, Decimal::from(1000));

    assert!(serde_json::from_str::<Decimal>(r#""bogus""#).is_err());
    Ok(())
}

#[test]
fn test_serde_rounding() {
    assert_tokens(
        &Rounding::HalfEven,
        &[Token::UnitVariant {
            name: "Rounding",
            variant: "HalfEven",
        }],
    );
    assert_tokens(
        &Rounding::Ceiling,
        &[Token::UnitVariant {
            name: "Rounding",
            variant: "Ceiling",
        }],
    );
}
