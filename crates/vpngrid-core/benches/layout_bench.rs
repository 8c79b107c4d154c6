use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vpngrid_core::{build_grid, CountryRecord, GridConfig, InMemoryCatalog, ServerRecord};

fn catalog(size: usize) -> InMemoryCatalog {
    let countries = ["Germany", "Sweden", "USA", "Japan", "Brazil"];
    let mut catalog = InMemoryCatalog::new()
        .with_basic_servers((0..size).map(|i| format!("sv{}", i)));

    for i in 0..size {
        let server = ServerRecord::new(format!("sv{}", i), countries[i % countries.len()]);
        let server = if i % 2 == 0 { server.with_port("1194") } else { server };
        catalog.push_server(server);
    }
    for country in countries {
        catalog.push_country(CountryRecord::new(country, format!("{}.png", country.to_lowercase())));
    }
    catalog
}

fn bench_build_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_grid");
    for size in [12usize, 120, 1200] {
        let catalog = catalog(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| build_grid(black_box(catalog), &GridConfig::default()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_grid);
criterion_main!(benches);
