#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xmlforge::{
    mutate::{add_attribute_everywhere, rename_entities_everywhere},
    test_utils::{build_record, pretty_print, query, sample_plan, StudyPlan},
};

fn large_plan() -> StudyPlan {
    let units = sample_plan().units;
    StudyPlan {
        units: units.iter().cycle().take(500).cloned().collect(),
    }
}

fn bench_build(c: &mut Criterion) {
    let plan = large_plan();

    c.bench_function("build_plan", |b| {
        b.iter(|| build_record(black_box(&plan)).unwrap())
    });
}

fn bench_pretty_print(c: &mut Criterion) {
    let root = build_record(&large_plan()).unwrap();

    c.bench_function("pretty_print_plan", |b| {
        b.iter(|| pretty_print(black_box(&root)))
    });
}

fn bench_query(c: &mut Criterion) {
    let root = build_record(&large_plan()).unwrap();

    c.bench_function("query_components", |b| {
        b.iter(|| query(black_box(&root), "plano/FUC/componente").len())
    });
}

fn bench_mutate(c: &mut Criterion) {
    let root = build_record(&large_plan()).unwrap();

    c.bench_function("mutate_plan", |b| {
        b.iter(|| {
            let mut tree = root.clone();
            rename_entities_everywhere(&mut tree, "componente", "componenteAvaliacao");
            add_attribute_everywhere(&mut tree, "componenteAvaliacao", "valorMaximo", "20");
            tree
        })
    });
}

criterion_group!(benches, bench_build, bench_pretty_print, bench_query, bench_mutate);
criterion_main!(benches);
