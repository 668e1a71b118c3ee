use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use g3_algebra::{Matrix4, Matrix4F32, Matrix4F64, Vector3};

fn sample<T: g3_algebra::Scalar>() -> Matrix4<T> {
    let axis = Vector3::new(T::from_f64(0.3), T::from_f64(-1.0), T::from_f64(0.8));
    Matrix4::from_scale(Vector3::new(T::from_f64(2.0), T::from_f64(3.0), T::from_f64(4.0)))
        * Matrix4::from_axis_angle(axis, T::from_f64(1.1))
        * Matrix4::from_translation(Vector3::splat(T::from_f64(1.5)))
}

fn bench_mat4(c: &mut Criterion) {
    let mut group = c.benchmark_group("Matrix4");

    let m64: Matrix4F64 = sample();
    let m32: Matrix4F32 = sample();

    group.bench_function("determinant_f64", |b| {
        b.iter(|| black_box(black_box(&m64).determinant()))
    });

    group.bench_function("inverse_f64", |b| {
        b.iter(|| black_box(black_box(&m64).inverse()))
    });

    group.bench_function("inverse_f32", |b| {
        b.iter(|| black_box(black_box(&m32).inverse()))
    });

    group.bench_function("inverse_glam_f64", |b| {
        let g = glam::DMat4::from(m64);
        b.iter(|| black_box(black_box(&g).inverse()))
    });

    group.bench_function("mul_f64", |b| {
        b.iter(|| black_box(black_box(m64) * black_box(m64)))
    });

    group.bench_function("extract_rotation_f64", |b| {
        b.iter(|| black_box(black_box(&m64).extract_rotation()))
    });

    group.finish();
}

criterion_group!(benches, bench_mat4);
criterion_main!(benches);
