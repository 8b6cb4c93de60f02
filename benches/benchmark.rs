// Performance benchmarks for catalog normalization, fitting and querying
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use materia::{normalize, vectorize, FeatureVector, MaterialIndex, RawTable};
use rand::prelude::*;
use serde_json::{json, Value};

const COST: &[&str] = &["baixo", "baixo-médio", "médio", "médio-alto", "alto"];
const WEIGHT: &[&str] = &["leve", "médio", "pesado"];
const LEVEL: &[&str] = &["baixa", "média", "alta"];
const FLAG: &[&str] = &["sim", "não"];

fn pick<'a>(rng: &mut impl Rng, options: &[&'a str]) -> &'a str {
    options[rng.random_range(0..options.len())]
}

/// Legacy-style catalog with categorical columns and occasional gaps
fn generate_catalog(size: usize) -> RawTable {
    let mut rng = rand::rng();
    let rows: Vec<Value> = (0..size)
        .map(|i| {
            let mut row = json!({
                "id": i,
                "nome_material": format!("material {}", i),
                "custo": pick(&mut rng, COST),
                "peso": pick(&mut rng, WEIGHT),
                "resistencia": pick(&mut rng, LEVEL),
                "condutividade": pick(&mut rng, LEVEL),
                "reciclavel": pick(&mut rng, FLAG),
                "biodegradavel": pick(&mut rng, FLAG),
            });
            if rng.random_bool(0.8) {
                row["temperatura_max"] = json!(rng.random_range(80..1600));
            }
            row
        })
        .collect();
    RawTable::from_json(Value::Array(rows))
}

fn generate_vector(rng: &mut impl Rng) -> FeatureVector {
    FeatureVector::new([
        rng.random_range(0.0..6.0),
        rng.random_range(100.0..9000.0),
        rng.random_range(1.0..500.0),
        rng.random_range(0.05..400.0),
        f64::from(rng.random_range(0u8..2)),
        f64::from(rng.random_range(0u8..2)),
        rng.random_range(50.0..2000.0),
    ])
}

fn benchmark_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [100, 1000, 10000].iter() {
        let raw = generate_catalog(*size);
        group.bench_with_input(BenchmarkId::new("legacy_catalog", size), &raw, |b, raw| {
            b.iter(|| normalize(black_box(raw)));
        });
    }

    group.finish();
}

fn benchmark_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");

    for size in [100, 1000, 10000].iter() {
        let table = normalize(&generate_catalog(*size));
        group.bench_with_input(BenchmarkId::new("material_index", size), &table, |b, table| {
            b.iter(|| MaterialIndex::fit(black_box(table), 5).unwrap());
        });
    }

    group.finish();
}

fn benchmark_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    let mut rng = rand::rng();

    for size in [100, 1000, 10000].iter() {
        let points: Vec<FeatureVector> = (0..*size).map(|_| generate_vector(&mut rng)).collect();
        let index = MaterialIndex::fit_vectors(points, 5).unwrap();
        let query = generate_vector(&mut rng);

        for k in [3, 10].iter() {
            group.bench_with_input(
                BenchmarkId::new(format!("k{}", k), size),
                &(&index, *k),
                |b, &(index, k)| {
                    b.iter(|| index.query(black_box(query.as_slice()), k).unwrap());
                },
            );
        }
    }

    group.finish();
}

fn benchmark_vectorize(c: &mut Criterion) {
    let reference = normalize(&generate_catalog(1000));
    let texts = [
        "leve, barato, resistência alta, não biodegradável",
        "liga com densidade 2,7 g/cm3, 310 MPa, 205 W/m·K, reciclável, funde a 660 °C",
        "algo para uso geral",
    ];

    c.bench_function("vectorize_with_reference", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(vectorize(black_box(text), Some(&reference)));
            }
        });
    });
}

criterion_group!(
    benches,
    benchmark_normalize,
    benchmark_fit,
    benchmark_query,
    benchmark_vectorize
);
criterion_main!(benches);
