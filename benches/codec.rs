use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use toon_codec::{decode, encode, from_str, to_string, DecodeOptions, EncodeOptions};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn products(n: u32) -> Vec<Product> {
    (0..n)
        .map(|i| Product {
            sku: format!("SKU{}", i),
            name: format!("Product {}", i),
            price: 9.99 + f64::from(i),
            quantity: i,
        })
        .collect()
}

fn benchmark_encode_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("encode_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_decode_simple(c: &mut Criterion) {
    let toon = "id: 123\nname: Alice\nemail: \"alice@example.com\"\nactive: true";

    c.bench_function("decode_simple_struct", |b| {
        b.iter(|| from_str::<User>(black_box(toon)))
    });
}

fn benchmark_tabular_arrays(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabular");

    for size in [10, 100, 500].iter() {
        let data = products(*size);
        let text = to_string(&data).unwrap();

        group.bench_with_input(BenchmarkId::new("encode", size), &data, |b, data| {
            b.iter(|| to_string(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("decode", size), &text, |b, text| {
            b.iter(|| from_str::<Vec<Product>>(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_value_tree(c: &mut Criterion) {
    let data = products(100);
    let tree = toon_codec::to_value(&data).unwrap();
    let text = encode(&tree, &EncodeOptions::default()).unwrap();

    let mut group = c.benchmark_group("value_tree");
    group.bench_function("encode", |b| {
        b.iter(|| encode(black_box(&tree), &EncodeOptions::default()))
    });
    group.bench_function("decode", |b| {
        b.iter(|| decode(black_box(&text), &DecodeOptions::default()))
    });
    group.bench_function("decode_strict", |b| {
        let options = DecodeOptions::new().with_strict(true);
        b.iter(|| decode(black_box(&text), &options))
    });
    group.finish();
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let data = products(100);

    let mut group = c.benchmark_group("comparison");

    group.bench_function("toon_encode", |b| b.iter(|| to_string(black_box(&data))));
    group.bench_function("json_encode", |b| {
        b.iter(|| serde_json::to_string(black_box(&data)))
    });

    let toon_text = to_string(&data).unwrap();
    let json_text = serde_json::to_string(&data).unwrap();

    group.bench_function("toon_decode", |b| {
        b.iter(|| from_str::<Vec<Product>>(black_box(&toon_text)))
    });
    group.bench_function("json_decode", |b| {
        b.iter(|| serde_json::from_str::<Vec<Product>>(black_box(&json_text)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_encode_simple,
    benchmark_decode_simple,
    benchmark_tabular_arrays,
    benchmark_value_tree,
    benchmark_comparison_with_json
);
criterion_main!(benches);
