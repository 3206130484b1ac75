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

use criterion::{criterion_group, criterion_main, Criterion};
use rand::{thread_rng, Rng};

use decfmt::{BasicHost, Context, Decimal, FormatOptions};

pub fn bench_arithmetic(c: &mut Criterion) {
    let mut rng = thread_rng();
    let x = Decimal::from_parts(rng.gen::<i64>(), -6).unwrap();
    let y = Decimal::from_parts(rng.gen::<i64>(), -2).unwrap();
    let cx = Context::default();

    c.bench_function("add", |b| b.iter(|| &x + &y));
    c.bench_function("mul", |b| b.iter(|| &x * &y));
    c.bench_function("div", |b| b.iter(|| cx.div(&x, &y).unwrap()));
}

pub fn bench_strings(c: &mut Criterion) {
    let mut rng = thread_rng();
    let d = Decimal::from_parts(rng.gen::<i64>(), -6).unwrap();
    let host = BasicHost::default();
    let options = FormatOptions::default();

    c.bench_function("parse", |b| b.iter(|| Decimal::parse("-12345.006789")));
    c.bench_function("to_string", |b| b.iter(|| d.to_string()));
    c.bench_function("to_locale_string", |b| {
        b.iter(|| d.to_locale_string(&host, &options).unwrap())
    });
}

criterion_group!(benches, bench_arithmetic, bench_strings);
criterion_main!(benches);
