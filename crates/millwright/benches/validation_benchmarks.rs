//! Benchmarks for the validation hot path.
//!
//! The engine runs on every configurator edit, so validation and
//! constraint derivation both need to stay well under a millisecond.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use millwright::{
    Construction, EdgeFinish, LegMaterial, LegProfile, Millwright, PartialTableSpec, TableSpec,
    TopMaterial, TopShape,
};

fn valid_spec() -> TableSpec {
    TableSpec {
        material: TopMaterial::SinteredStone,
        construction: Construction::Solid,
        thickness_mm: 20.0,
        face_thickness_mm: None,
        shape: TopShape::Rectangle,
        length_mm: 1800.0,
        width_mm: 900.0,
        edge: EdgeFinish::Straight,
        leg_count: 4,
        leg_material: LegMaterial::Steel,
        leg_profile: LegProfile::Square,
        leg_profile_size_mm: 60.0,
        leg_profile_width_mm: None,
        leg_height_mm: 700.0,
        has_foot_base: false,
        halfcylinder_count: None,
        spread_radius_mm: None,
        total_height_mm: 720.0,
    }
}

fn invalid_spec() -> TableSpec {
    TableSpec {
        thickness_mm: 12.0,
        length_mm: 1600.0,
        leg_height_mm: 708.0,
        ..valid_spec()
    }
}

fn bench_validate(c: &mut Criterion) {
    let mill = Millwright::new();
    let valid = valid_spec();
    let invalid = invalid_spec();

    c.bench_function("validate_valid_spec", |b| {
        b.iter(|| mill.validate(black_box(&valid)))
    });

    c.bench_function("validate_invalid_spec_with_repair", |b| {
        b.iter(|| mill.validate(black_box(&invalid)))
    });
}

fn bench_constraints(c: &mut Criterion) {
    let mill = Millwright::new();
    let partial = PartialTableSpec::from(&valid_spec());

    c.bench_function("field_constraints_full_context", |b| {
        b.iter(|| mill.field_constraints(black_box(&partial)))
    });

    let sparse = PartialTableSpec {
        material: Some(TopMaterial::Quartz),
        ..Default::default()
    };
    c.bench_function("field_constraints_sparse_context", |b| {
        b.iter(|| mill.field_constraints(black_box(&sparse)))
    });
}

criterion_group!(benches, bench_validate, bench_constraints);
criterion_main!(benches);
