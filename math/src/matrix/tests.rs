use {
    crate::{
        matrix::{
            MathError, Matrix2x2d, Matrix3x3d, Matrix3x3f, Matrix4x4d, Matrix4x4f, SquareMatrix,
        },
        vertex::{Vertex2d, Vertex3d, Vertex3f, Vertex4d, Vertex4f},
    },
    std::f64::consts::FRAC_PI_2,
};

fn sample4() -> Matrix4x4d {
    Matrix4x4d::from_rows([
        [2.0, 0.0, 1.0, 3.0],
        [1.0, 3.0, 0.0, -1.0],
        [0.0, 1.0, 4.0, 2.0],
        [1.0, 0.0, 0.0, 1.0],
    ])
}

#[test]
fn identity() {
    let v = Vertex4d::new(1.0, -2.0, 3.5, 1.0);
    assert_eq!(Matrix4x4d::identity() * v, v);
    assert_eq!(Matrix4x4d::identity() * sample4(), sample4());
    assert_eq!(Matrix4x4d::default(), Matrix4x4d::identity());
}

#[test]
fn row_column_access() {
    let m = sample4();
    assert_eq!(m.get(0, 3), 3.0);
    assert_eq!(m.get(3, 0), 1.0);
    assert_eq!(m.columns[3], [3.0, -1.0, 2.0, 1.0]);
    assert_eq!(m.transpose().get(3, 0), 3.0);
    assert_eq!(m.transpose().transpose(), m);
}

#[test]
fn determinant() {
    let m = Matrix2x2d::from_rows([[3.0, 8.0], [4.0, 6.0]]);
    assert!((m.determinant() + 14.0).abs() < 1e-12);
    let m = Matrix3x3d::from_rows([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
    assert!((m.determinant() + 306.0).abs() < 1e-9);
    assert!((sample4().determinant() - sample4().transpose().determinant()).abs() < 1e-9);
}

#[test]
fn inverse() {
    let m = sample4();
    let inv = m.inverse().unwrap();
    assert!((m * inv).approx_eq(&Matrix4x4d::identity(), 1e-9));
    assert!((inv * m).approx_eq(&Matrix4x4d::identity(), 1e-9));
    let m3 = Matrix3x3d::from_rows([[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 2.0]]);
    let inv3 = m3.inverse().unwrap();
    assert!((m3 * inv3).approx_eq(&Matrix3x3d::identity(), 1e-12));
}

#[test]
fn singular() {
    let m = Matrix3x3f::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [0.0, 1.0, 1.0]]);
    assert_eq!(m.inverse(), Err(MathError::Singular));
    assert_eq!(m.determinant(), 0.0);
    let zero = Matrix2x2d::from_columns([[0.0; 2]; 2]);
    assert_eq!(zero.inverse(), Err(MathError::Singular));
}

#[test]
fn singular_below_epsilon() {
    let tiny = Matrix4x4f::scaling(Vertex3f::splat(1e-3));
    assert!(tiny.determinant() > 0.0);
    assert!(tiny.determinant() < f32::EPSILON);
    assert_eq!(tiny.inverse(), Err(MathError::Singular));
    let small = Matrix4x4f::scaling(Vertex3f::splat(1e-2));
    assert!(small.determinant() > f32::EPSILON);
    let inv = small.inverse().unwrap();
    assert!((inv.get(0, 0) - 100.0).abs() < 1e-3);
}

#[test]
fn small_pivot_large_determinant() {
    let m = Matrix2x2d::from_rows([[1e-20, 0.0], [0.0, 1e20]]);
    assert!((m.determinant() - 1.0).abs() < 1e-12);
    let inv = m.inverse().unwrap();
    assert!((m * inv).approx_eq(&Matrix2x2d::identity(), 1e-9));
}

#[test]
fn transform() {
    let t = Matrix4x4d::translation(Vertex3d::new(1.0, 2.0, 3.0));
    let p = Vertex4d::from(Vertex3d::new(1.0, 1.0, 1.0));
    assert_eq!(t * p, Vertex4d::new(2.0, 3.0, 4.0, 1.0));
    let s = Matrix4x4d::scaling(Vertex3d::new(2.0, 3.0, 4.0));
    assert_eq!(s * p, Vertex4d::new(2.0, 3.0, 4.0, 1.0));
    assert_eq!((t * s) * p, Vertex4d::new(3.0, 5.0, 7.0, 1.0));
    let m2 = Matrix2x2d::from_rows([[0.0, -1.0], [1.0, 0.0]]);
    assert_eq!(m2 * Vertex2d::new(1.0, 0.0), Vertex2d::new(0.0, 1.0));
}

#[test]
fn rotations() {
    let x = Vertex4d::from(Vertex3d::UNIT_X);
    let y = Vertex4d::from(Vertex3d::UNIT_Y);
    let z = Vertex4d::from(Vertex3d::UNIT_Z);
    let rz = Matrix4x4d::rotation_z(FRAC_PI_2);
    assert!((rz * x).approx_eq(&y, 1e-12));
    let rx = Matrix4x4d::rotation_x(FRAC_PI_2);
    assert!((rx * y).approx_eq(&z, 1e-12));
    let ry = Matrix4x4d::rotation_y(FRAC_PI_2);
    assert!((ry * z).approx_eq(&x, 1e-12));
    let inv = rz.inverse().unwrap();
    assert!(inv.approx_eq(&rz.transpose(), 1e-12));
}

#[test]
fn projections() {
    let o = Matrix4x4f::ortho(-2.0, 2.0, -1.0, 1.0, 0.0, 10.0);
    let v = o * Vertex4f::new(2.0, 1.0, -10.0, 1.0);
    assert!(v.approx_eq(&Vertex4f::new(1.0, 1.0, 1.0, 1.0), 1e-6));
    let p = Matrix4x4d::perspective(FRAC_PI_2, 1.0, 1.0, 100.0);
    let near = (p * Vertex4d::new(0.0, 0.0, -1.0, 1.0)).to_cartesian();
    let far = (p * Vertex4d::new(0.0, 0.0, -100.0, 1.0)).to_cartesian();
    assert!((near.z + 1.0).abs() < 1e-12);
    assert!((far.z - 1.0).abs() < 1e-12);
}

#[test]
fn upper_left_and_slice() {
    let m = Matrix4x4f::translation(Vertex3f::new(5.0, 6.0, 7.0));
    assert_eq!(Matrix3x3f::from_upper_left(&m), Matrix3x3f::identity());
    let s = m.as_slice();
    assert_eq!(s.len(), 16);
    assert_eq!(&s[12..], &[5.0, 6.0, 7.0, 1.0]);
}
