use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lansim::simulations::{default_example, reference_scenario};
use lansim_core::{Network, NetworkBuilder};

fn large_ring(size: usize) -> Network {
    let mut builder = NetworkBuilder::new().workstation("origin");
    for i in 0..size {
        builder = builder.relay(format!("n{i}"));
    }
    builder.printer("printer").build().unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    let network = large_ring(1000);
    let mut report = String::new();
    c.bench_function("broadcast on 1000 nodes", |b| {
        b.iter(|| {
            report.clear();
            network.request_broadcast(black_box(&mut report)).unwrap()
        })
    });
    c.bench_function("print across 1000 nodes", |b| {
        b.iter(|| {
            report.clear();
            network
                .request_workstation_prints_document(
                    "origin",
                    black_box("!PS author:Bench.title:Ring."),
                    "printer",
                    &mut report,
                )
                .unwrap()
        })
    });

    let example = default_example().unwrap();
    c.bench_function("reference scenario", |b| {
        b.iter(|| reference_scenario(black_box(&example)).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
