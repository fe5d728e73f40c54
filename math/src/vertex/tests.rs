use crate::{
    half::Half,
    vertex::{
        Vertex2, Vertex2f, Vertex2hf, Vertex2s, Vertex3, Vertex3b, Vertex3d, Vertex3f, Vertex3hf, Vertex3i,
        Vertex3ub, Vertex4d, Vertex4f, Vertex4ub, Vertex4us,
    },
};

const SAMPLES: [Vertex3f; 5] = [
    Vertex3f::new(1.0, 2.0, 3.0),
    Vertex3f::new(-4.5, 0.25, 9.0),
    Vertex3f::new(0.0, -7.0, 0.5),
    Vertex3f::new(100.0, 3.0, -2.0),
    Vertex3f::new(-0.125, -0.125, 64.0),
];

#[test]
fn add() {
    assert_eq!(
        Vertex3f::new(1.0, 2.0, 3.0) + Vertex3f::new(4.0, 5.0, 6.0),
        Vertex3f::new(5.0, 7.0, 9.0),
    );
    let mut v = Vertex2s::new(3, -4);
    v += Vertex2s::new(1, 1);
    assert_eq!(v, Vertex2s::new(4, -3));
}

#[test]
fn identities() {
    for v in SAMPLES {
        assert_eq!(v + Vertex3f::ZERO, v);
        assert_eq!(v - v, Vertex3f::ZERO);
        assert_eq!(-(-v), v);
    }
    let v = Vertex3i::new(i32::MAX, -5, 17);
    assert_eq!(v + Vertex3i::ZERO, v);
    assert_eq!(v - v, Vertex3i::ZERO);
}

#[test]
fn scale_roundtrip() {
    for v in SAMPLES {
        for s in [0.5f32, 3.0, -7.25, 1e-3] {
            assert!(((v * s) / s).approx_eq(&v, 1e-4), "{} * {}", v, s);
        }
    }
    let mut v = Vertex3d::new(1.0, 2.0, 3.0);
    v *= 4.0;
    v /= 2.0;
    assert_eq!(v, Vertex3d::new(2.0, 4.0, 6.0));
}

#[test]
fn integer_wraparound() {
    let v = Vertex3ub::new(250, 1, 128);
    assert_eq!(v + Vertex3ub::new(10, 255, 128), Vertex3ub::new(4, 0, 0));
    assert_eq!(Vertex3ub::ZERO - Vertex3ub::ONE, Vertex3ub::splat(255));
    assert_eq!(Vertex3b::new(127, -128, 0) * 2, Vertex3b::new(-2, 0, 0));
    assert_eq!(-Vertex3b::new(-128, 1, 0), Vertex3b::new(-128, -1, 0));
}

#[test]
fn dot() {
    assert_eq!(
        Vertex3f::new(1.0, 2.0, 3.0).dot(Vertex3f::new(4.0, -5.0, 6.0)),
        12.0
    );
    assert_eq!(Vertex2s::new(2, 3).dot(Vertex2s::new(4, 5)), 23);
}

#[test]
fn cross() {
    assert_eq!(Vertex3f::UNIT_X ^ Vertex3f::UNIT_Y, Vertex3f::UNIT_Z);
    assert_eq!(Vertex3f::UNIT_Y ^ Vertex3f::UNIT_Z, Vertex3f::UNIT_X);
    assert_eq!(Vertex3f::UNIT_Z ^ Vertex3f::UNIT_X, Vertex3f::UNIT_Y);
    assert_eq!(Vertex3d::UNIT_Y ^ Vertex3d::UNIT_X, -Vertex3d::UNIT_Z);
    for a in SAMPLES {
        for b in SAMPLES {
            assert_eq!(a ^ b, -(b ^ a));
            assert_eq!(a.cross(b), a ^ b);
        }
    }
}

#[test]
fn cross_is_orthogonal() {
    let a = Vertex3d::new(1.0, 2.0, 3.0);
    let b = Vertex3d::new(-2.0, 0.5, 4.0);
    let c = a ^ b;
    assert!(c.dot(a).abs() < 1e-12);
    assert!(c.dot(b).abs() < 1e-12);
}

#[test]
fn normalize() {
    for v in SAMPLES {
        let n = v.normalized();
        assert!((n.module() - 1.0).abs() < 1e-6, "{}", n);
    }
    let mut v = Vertex3d::new(3.0, 0.0, 4.0);
    assert_eq!(v.module(), 5.0);
    v.normalize();
    assert_eq!(v, Vertex3d::new(0.6, 0.0, 0.8));
}

#[test]
fn normalize_near_zero_is_noop() {
    let tiny = Vertex3f::new(1e-9, -1e-9, 0.0);
    assert_eq!(tiny.normalized(), tiny);
    assert_eq!(Vertex3f::ZERO.normalized(), Vertex3f::ZERO);
    let mut z = Vertex2f::ZERO;
    z.normalize();
    assert_eq!(z, Vertex2f::ZERO);
}

#[test]
fn normalize_half() {
    let h = Half::from_f32;
    let v = Vertex3hf::new(h(3.0), h(0.0), h(4.0));
    assert_eq!(v.module(), h(5.0));
    assert_eq!(v.module_squared(), h(25.0));
    assert_eq!(v.normalized(), Vertex3hf::new(h(0.6), h(0.0), h(0.8)));
    let mut w = Vertex2hf::new(h(-2.0), h(0.0));
    w.normalize();
    assert_eq!(w, Vertex2hf::new(h(-1.0), h(0.0)));
}

#[test]
fn normalize_half_near_zero_is_noop() {
    let tiny = Vertex3hf::splat(Half::from_f32(1e-4));
    assert!(tiny.module() < Half::EPSILON);
    assert_eq!(tiny.normalized(), tiny);
    assert_eq!(Vertex3hf::ZERO.normalized(), Vertex3hf::ZERO);
}

#[test]
fn min_max() {
    let min = Vertex3f::min(&SAMPLES);
    let max = Vertex3f::max(&SAMPLES);
    for v in SAMPLES {
        assert!(min.x <= v.x && min.y <= v.y && min.z <= v.z);
        assert!(max.x >= v.x && max.y >= v.y && max.z >= v.z);
    }
    assert_eq!(min, Vertex3f::new(-4.5, -7.0, -2.0));
    assert_eq!(max, Vertex3f::new(100.0, 3.0, 64.0));
    assert_eq!(Vertex3f::min_max(&SAMPLES), (min, max));
}

#[test]
fn min_max_single_and_empty() {
    let one = [Vertex4us::new(1, 2, 3, 4)];
    assert_eq!(Vertex4us::min_max(&one), (one[0], one[0]));
    assert_eq!(Vertex4us::min(&[]), Vertex4us::MAX_VALUE);
    assert_eq!(Vertex4us::max(&[]), Vertex4us::MIN_VALUE);
    assert_eq!(Vertex4us::MAX_VALUE, Vertex4us::splat(u16::MAX));
}

#[test]
fn approx_eq() {
    let a = Vertex3f::new(1.0, 2.0, 3.0);
    let b = Vertex3f::new(1.05, 1.96, 3.0);
    assert!(a.approx_eq(&b, 0.1));
    assert!(!a.approx_eq(&b, 0.01));
    assert_ne!(a, b);
    assert!(Vertex3ub::new(10, 20, 30).approx_eq(&Vertex3ub::new(12, 18, 30), 2));
}

#[test]
fn implicit_conversions() {
    assert_eq!(
        Vertex4f::from(Vertex3f::new(1.0, 2.0, 3.0)),
        Vertex4f::new(1.0, 2.0, 3.0, 1.0),
    );
    assert_eq!(
        Vertex3f::from(Vertex2f::new(1.0, 2.0)),
        Vertex3f::new(1.0, 2.0, 0.0)
    );
    assert_eq!(
        Vertex4f::from(Vertex2f::new(1.0, 2.0)),
        Vertex4f::new(1.0, 2.0, 0.0, 1.0)
    );
    assert_eq!(
        Vertex3d::from(Vertex3f::new(0.5, 1.5, -2.0)),
        Vertex3d::new(0.5, 1.5, -2.0),
    );
    assert_eq!(
        Vertex3f::from(Vertex3ub::new(0, 128, 255)),
        Vertex3f::new(0.0, 128.0, 255.0),
    );
    assert_eq!(
        Vertex3f::from(Vertex3hf::new(Half::ONE, Half::from_f32(0.5), Half::MAX)),
        Vertex3f::new(1.0, 0.5, 65504.0),
    );
}

#[test]
fn explicit_conversions() {
    let v = Vertex3f::new(1.9, -2.5, 300.0);
    assert_eq!(v.cast::<i32>(), Vertex3i::new(1, -2, 300));
    assert_eq!(v.cast::<u8>(), Vertex3ub::new(1, 0, 255));
    assert_eq!(Vertex3i::new(300, -1, 7).cast::<u8>(), Vertex3ub::new(44, 255, 7));
    let h = Vertex3f::new(1.0, 0.5, 1e6).cast::<Half>();
    assert_eq!(h.x, Half::ONE);
    assert_eq!(h.z, Half::INFINITY);
    assert_eq!(
        Vertex4d::new(2.0, 4.0, 6.0, 2.0).to_cartesian(),
        Vertex3d::new(1.0, 2.0, 3.0)
    );
    assert_eq!(
        Vertex4d::new(2.0, 4.0, 6.0, 0.0).to_cartesian(),
        Vertex3d::new(2.0, 4.0, 6.0)
    );
    assert_eq!(Vertex4ub::new(1, 2, 3, 4).xyz(), Vertex3ub::new(1, 2, 3));
    assert_eq!(Vertex3::new(1, 2, 3).xy(), Vertex2::new(1, 2));
}

#[test]
fn memory_layout() {
    let vs = [Vertex3f::new(1.0, 2.0, 3.0), Vertex3f::new(4.0, 5.0, 6.0)];
    assert_eq!(Vertex3f::components(&vs), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(vs[1].as_array(), &[4.0, 5.0, 6.0]);
    assert_eq!(size_of::<Vertex4ub>(), 4);
    let a: [f32; 3] = vs[0].into();
    assert_eq!(Vertex3f::from(a), vs[0]);
}

#[test]
fn display() {
    assert_eq!(Vertex3f::new(1.0, 2.5, -3.0).to_string(), "[1, 2.5, -3]");
    assert_eq!(Vertex2s::new(7, 8).to_string(), "[7, 8]");
}
