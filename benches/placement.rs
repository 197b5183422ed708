use border_atlas::config::Config;
use border_atlas::dataset::{Border, BorderDataset};
use border_atlas::labels::label_year;
use border_atlas::projection::Viewport;
use border_atlas::render::render_svg;
use border_atlas::scene::compute_scene;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// `cols * rows` rectangles tiling central Europe, all in one year.
fn grid_dataset(cols: usize, rows: usize, year: i32) -> BorderDataset {
    let mut borders = Vec::with_capacity(cols * rows);
    let (lat0, lng0) = (46.0, 5.0);
    let (dlat, dlng) = (12.0 / rows as f64, 24.0 / cols as f64);
    for r in 0..rows {
        for c in 0..cols {
            let lat = lat0 + r as f64 * dlat;
            let lng = lng0 + c as f64 * dlng;
            borders.push(Border::new(
                format!("Region {r}-{c}"),
                vec![
                    [lat, lng],
                    [lat + dlat, lng],
                    [lat + dlat, lng + dlng],
                    [lat, lng + dlng],
                ],
                year,
                "",
                "",
            ));
        }
    }
    BorderDataset::from_borders(borders)
}

/// Every border shares one footprint, so most candidates collide.
fn stacked_dataset(count: usize, year: i32) -> BorderDataset {
    let borders = (0..count)
        .map(|i| {
            Border::new(
                format!("Stack {i}"),
                vec![[50.0, 10.0], [54.0, 10.0], [54.0, 20.0], [50.0, 20.0]],
                year,
                "",
                "",
            )
        })
        .collect();
    BorderDataset::from_borders(borders)
}

fn bench_label_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("label_pass");
    let config = Config::default();
    let viewport = Viewport::from_map_config(&config.map, 1200.0, 800.0);
    for (name, dataset) in [
        ("grid_4x4", grid_dataset(4, 4, 1945)),
        ("grid_10x10", grid_dataset(10, 10, 1945)),
        ("grid_20x20", grid_dataset(20, 20, 1945)),
        ("stacked_16", stacked_dataset(16, 1945)),
        ("stacked_64", stacked_dataset(64, 1945)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &dataset, |b, data| {
            b.iter(|| {
                let pass = label_year(black_box(data), 1945, &config.labels, &viewport);
                black_box(pass.labels.len());
            });
        });
    }
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");
    let config = Config::default();
    let viewport = Viewport::from_map_config(&config.map, 1200.0, 800.0);
    for (name, dataset) in [
        ("grid_10x10", grid_dataset(10, 10, 1992)),
        ("stacked_64", stacked_dataset(64, 1992)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &dataset, |b, data| {
            b.iter(|| {
                let scene = compute_scene(black_box(data), 1992, &viewport, &config);
                let svg = render_svg(&scene, &config.theme);
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_label_pass, bench_end_to_end
);
criterion_main!(benches);
