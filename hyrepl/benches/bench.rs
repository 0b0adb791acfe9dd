use criterion::{Criterion, black_box, criterion_group, criterion_main};

use hyrepl::{ValueFormatter, format_value};
use hyvalue::{types::Type, value::Value};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn build_simple_value() -> Value {
    // { "name" = "bench", "ports" = tolist([80, 443]), "owner" = tostring(null) }
    Value::object([
        ("name", Value::string("bench")),
        (
            "ports",
            Value::list(Type::Number, [Value::number(80), Value::number(443)]).unwrap(),
        ),
        ("owner", Value::null(Type::String)),
    ])
    .unwrap()
}

fn build_complex_value() -> Value {
    // Build a medium-sized value by nesting tuples and objects. Use randomness seeded for
    // determinism.
    let mut rng = ChaCha20Rng::seed_from_u64(0x42);

    fn next_create(budget: usize, rng: &mut impl Rng) -> Value {
        if budget == 0 || rng.random_bool(0.2) {
            // Select a leaf randomly sampled uniformly
            return match rng.random_range(0..=4) {
                0 => Value::number(rng.random_range(-1_000_000i64..1_000_000)),
                1 => Value::string(format!("leaf \"{}\"\n", rng.next_u32())),
                2 => Value::bool(rng.random_bool(0.5)),
                3 => Value::null(Type::list_of(Type::String)),
                4 => Value::unknown(Type::Dynamic),
                _ => unreachable!(),
            };
        }

        let len = rng.random_range(1..6);
        if rng.random_bool(0.5) {
            Value::tuple((0..len).map(|_| next_create(budget - 1, rng)))
        } else {
            Value::object((0..len).map(|i| (format!("attr_{i}"), next_create(budget - 1, rng))))
                .unwrap()
        }
    }

    next_create(8, &mut rng)
}

fn bench_format(c: &mut Criterion) {
    let simple = build_simple_value();
    let complex = build_complex_value();
    let formatter = ValueFormatter::default();

    c.bench_function("format_simple", |b| {
        b.iter(|| format_value(black_box(&simple), 0))
    });
    c.bench_function("format_complex", |b| {
        b.iter(|| formatter.format(black_box(&complex), 0))
    });
    c.bench_function("format_complex_into_buffer", |b| {
        let mut out = String::with_capacity(1 << 16);
        b.iter(|| {
            out.clear();
            formatter.write(&mut out, black_box(&complex), 0).unwrap();
        })
    });
}

criterion_group!(benches, bench_format);
criterion_main!(benches);
