use criterion::{black_box, criterion_group, criterion_main, Criterion};
use versa::{Components, Version};

fn bench_parse(c: &mut Criterion) {
    let versions = [
        "1.2.3",
        "v1.2.3",
        "3.2.1-prerelease.beta+metadata.otherdata",
        "10.20.30-rc.1",
        "1.0.0-alpha-1.0.x-y+001.0A",
        "1.0.0+20130313144700",
        "not-a-version",
    ];

    c.bench_function("parse_versions", |b| {
        b.iter(|| {
            for version in versions {
                black_box(Version::parse(black_box(version)).ok());
            }
        })
    });
}

fn bench_from_components(c: &mut Criterion) {
    c.bench_function("from_components", |b| {
        b.iter(|| {
            black_box(
                Version::from_components(black_box(
                    Components::new(3, 2, 1)
                        .with_prerelease(["prerelease", "beta"])
                        .with_metadata(["metadata", "otherdata"]),
                ))
                .ok(),
            );
        })
    });
}

fn bench_compare(c: &mut Criterion) {
    let pairs: Vec<(Version, Version)> = [
        ("1.2.3", "1.2.4"),
        ("2.4.0-alpha", "2.4.0"),
        ("1.2.3+build.1", "1.2.3+build.2"),
        ("5.1.3", "3.2.1"),
    ]
    .iter()
    .filter_map(|(a, b)| Some((Version::parse(a).ok()?, Version::parse(b).ok()?)))
    .collect();

    c.bench_function("compare_versions", |b| {
        b.iter(|| {
            for (left, right) in &pairs {
                black_box(left.is_less_than(black_box(right)));
                black_box(left.is_equal_or_greater_than(black_box(right), true));
            }
        })
    });
}

fn bench_bump(c: &mut Criterion) {
    c.bench_function("bump_and_render", |b| {
        b.iter(|| {
            let mut version = Version::new("1.2.3-beta+build").expect("valid version");
            version.increment_minor().ok();
            version.set_patch(black_box("0")).ok();
            black_box(version.to_string())
        })
    });
}

criterion_group!(benches, bench_parse, bench_from_components, bench_compare, bench_bump);
criterion_main!(benches);
