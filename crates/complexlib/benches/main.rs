// Use codspeed-criterion-compat when running on CodSpeed (CI), real criterion otherwise (for flamegraphs)
#[cfg(codspeed)]
use codspeed_criterion_compat::{Criterion, black_box, criterion_group, criterion_main};
use complexlib::{Complex, Evaluator, Function, NoopTracer, ops};
#[cfg(not(codspeed))]
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn arithmetic(c: &mut Criterion) {
    let a = Complex::new(1.0, 2.0);
    let b = Complex::new(3.0, 4.0);
    c.bench_function("multiply", |bench| {
        bench.iter(|| ops::multiply(black_box(a), black_box(b)));
    });
    c.bench_function("divide", |bench| {
        bench.iter(|| ops::divide(black_box(a), black_box(b)));
    });
}

fn inverse_functions(c: &mut Criterion) {
    let z = Complex::new(1.0, 1.0);
    c.bench_function("asin", |bench| bench.iter(|| ops::asin(black_box(z))));
    c.bench_function("acosh", |bench| bench.iter(|| ops::acosh(black_box(z))));
    c.bench_function("atanh", |bench| bench.iter(|| ops::atanh(black_box(z))));
}

fn text(c: &mut Criterion) {
    let z = Complex::new(-0.833_730_025_131_149, 0.988_897_705_762_865);
    let formatted = z.to_string();
    let repr = z.repr();
    c.bench_function("format", |bench| bench.iter(|| black_box(z).to_string()));
    c.bench_function("parse_formatted", |bench| {
        bench.iter(|| black_box(formatted.as_str()).parse::<Complex>());
    });
    c.bench_function("parse_repr", |bench| {
        bench.iter(|| black_box(repr.as_str()).parse::<Complex>());
    });
}

/// Dispatch through the evaluator should cost no more than the direct call
/// when the tracer is `NoopTracer`.
fn dispatch(c: &mut Criterion) {
    let z = [Complex::new(1.0, 1.0)];
    let mut evaluator = Evaluator::new(NoopTracer);
    c.bench_function("evaluator_sqrt", |bench| {
        bench.iter(|| evaluator.call(Function::Sqrt, black_box(&z)));
    });
    c.bench_function("direct_sqrt", |bench| bench.iter(|| ops::sqrt(black_box(z[0]))));
}

criterion_group!(benches, arithmetic, inverse_functions, text, dispatch);
criterion_main!(benches);
