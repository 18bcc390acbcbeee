use std::ops::{Neg, Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Div, DivAssign};
use std::io::{self, BufRead, Write};
use std::fmt;

use crate::bufio;
use crate::error::{QuatError, QuatResult};

/// A quaternion a + bi + cj + dk with real coefficients a, b, c, d.
#[derive(PartialEq, Clone, Copy, Default, Debug)]
pub struct Quaternion {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}
impl Quaternion {
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    pub fn len(&self) -> f64 {
        (self.a*self.a + self.b*self.b + self.c*self.c + self.d*self.d).sqrt()
    }

    /// Negates the imaginary coefficients.
    pub fn conjugate(&self) -> Self {
        Self::new(self.a, -self.b, -self.c, -self.d)
    }

    /// Scales the quaternion to unit length. A zero-length quaternion
    /// has no unit form and normalizes to NaN components.
    pub fn normalized(&self) -> Self {
        *self / self.len()
    }

    /// Multiplicative inverse under the Hamilton product.
    pub fn inverse(&self) -> Self {
        self.conjugate() * (1.0 / (self.len() * self.len()))
    }

    /// Writes the quaternion to the sink in its display form.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        write!(sink, "{}", self)
    }

    /// Reads four whitespace-separated real numbers from the source and
    /// assigns them to the coefficients in the order a, b, c, d.
    /// The receiver is unchanged if fewer than four numbers are available
    /// or a token does not parse.
    pub fn read_from<R: BufRead>(&mut self, source: &mut R) -> QuatResult<()> {
        let mut vals = [0f64; 4];
        for i in 0..4 {
            match bufio::next_token(source)? {
                Some(token) => {
                    if let Ok(val) = token.parse::<f64>() {
                        vals[i] = val;
                    }
                    else {
                        return Err(QuatError::InvalidCoefficient(token));
                    }
                }
                None => {
                    return Err(QuatError::MissingCoefficients(i));
                }
            }
        }
        *self = Self::new(vals[0], vals[1], vals[2], vals[3]);
        Ok(())
    }
}

/// Reads quaternions from a buffered input source.
pub trait ReadQuaternion {
    /// Reads the next quaternion, or None if the source held no further
    /// numbers.
    fn read_quaternion(&mut self) -> QuatResult<Option<Quaternion>>;
}
impl<R: BufRead> ReadQuaternion for R {
    fn read_quaternion(&mut self) -> QuatResult<Option<Quaternion>> {
        let mut quat = Quaternion::default();
        match quat.read_from(self) {
            Ok(()) => Ok(Some(quat)),
            Err(QuatError::MissingCoefficients(0)) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.a, -self.b, -self.c, -self.d)
    }
}

impl AddAssign for Quaternion {
    fn add_assign(&mut self, rhs: Self) {
        self.a += rhs.a;
        self.b += rhs.b;
        self.c += rhs.c;
        self.d += rhs.d;
    }
}

impl AddAssign<f64> for Quaternion {
    fn add_assign(&mut self, scalar: f64) {
        *self += Self::from(scalar);
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl Add<f64> for Quaternion {
    type Output = Self;

    fn add(mut self, scalar: f64) -> Self::Output {
        self += scalar;
        self
    }
}

impl Add<Quaternion> for f64 {
    type Output = Quaternion;

    fn add(self, rhs: Quaternion) -> Self::Output {
        Quaternion::from(self) + rhs
    }
}

impl SubAssign for Quaternion {
    fn sub_assign(&mut self, rhs: Self) {
        self.a -= rhs.a;
        self.b -= rhs.b;
        self.c -= rhs.c;
        self.d -= rhs.d;
    }
}

impl SubAssign<f64> for Quaternion {
    fn sub_assign(&mut self, scalar: f64) {
        *self -= Self::from(scalar);
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Sub<f64> for Quaternion {
    type Output = Self;

    fn sub(mut self, scalar: f64) -> Self::Output {
        self -= scalar;
        self
    }
}

impl Sub<Quaternion> for f64 {
    type Output = Quaternion;

    fn sub(self, rhs: Quaternion) -> Self::Output {
        Quaternion::from(self) - rhs
    }
}

impl MulAssign for Quaternion {
    /// The Hamilton product. Not commutative.
    fn mul_assign(&mut self, rhs: Self) {
        *self = Self::new(
            self.a*rhs.a - self.b*rhs.b - self.c*rhs.c - self.d*rhs.d,
            self.a*rhs.b + rhs.a*self.b + self.c*rhs.d - rhs.c*self.d,
            self.a*rhs.c + rhs.a*self.c + self.d*rhs.b - rhs.d*self.b,
            self.a*rhs.d + rhs.a*self.d + self.b*rhs.c - rhs.b*self.c,
        );
    }
}

impl MulAssign<f64> for Quaternion {
    fn mul_assign(&mut self, scalar: f64) {
        *self *= Self::from(scalar);
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self *= rhs;
        self
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(mut self, scalar: f64) -> Self::Output {
        self *= scalar;
        self
    }
}

impl Mul<Quaternion> for f64 {
    type Output = Quaternion;

    fn mul(self, rhs: Quaternion) -> Self::Output {
        Quaternion::from(self) * rhs
    }
}

impl DivAssign for Quaternion {
    /// Right-division, multiplication by the inverse of rhs.
    fn div_assign(&mut self, rhs: Self) {
        *self *= rhs.inverse();
    }
}

impl DivAssign<f64> for Quaternion {
    fn div_assign(&mut self, scalar: f64) {
        *self /= Self::from(scalar);
    }
}

impl Div for Quaternion {
    type Output = Self;

    fn div(mut self, rhs: Self) -> Self::Output {
        self /= rhs;
        self
    }
}

impl Div<f64> for Quaternion {
    type Output = Self;

    fn div(mut self, scalar: f64) -> Self::Output {
        self /= scalar;
        self
    }
}

impl Div<Quaternion> for f64 {
    type Output = Quaternion;

    fn div(self, rhs: Quaternion) -> Self::Output {
        Quaternion::from(self) / rhs
    }
}

impl From<f64> for Quaternion {
    fn from(scalar: f64) -> Quaternion {
        Quaternion::new(scalar, 0.0, 0.0, 0.0)
    }
}

impl fmt::Display for Quaternion {
    /// Fixed-point form with 3 decimal digits per coefficient,
    /// e.g. `5.000 - 6.000i + 7.000j - 8.000k`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} {} {:.3}i {} {:.3}j {} {:.3}k",
            self.a,
            sign(self.b), self.b.abs(),
            sign(self.c), self.c.abs(),
            sign(self.d), self.d.abs(),
        )
    }
}

fn sign(coeff: f64) -> char {
    if coeff >= 0.0 {
        '+'
    }
    else {
        '-'
    }
}


#[cfg(test)]
use crate::random::Randf64;

#[cfg(test)]
const EPS: f64 = 1e-4;

#[test]
fn negate_test() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert!(-q == Quaternion::new(-1.0, -2.0, -3.0, -4.0));
    assert!(-(-q) == q);
}

#[test]
fn conjugate_test() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert!(q.conjugate() == Quaternion::new(1.0, -2.0, -3.0, -4.0));
    assert!(q.conjugate().conjugate() == q);
}

#[test]
fn len_test() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert!(q.len() == (1.0f64 + 4.0 + 9.0 + 16.0).sqrt());
}

#[test]
fn norm_test() {
    let q = Quaternion::new(1.0, 4.0, 4.0, -4.0);
    assert!(q.normalized() == Quaternion::new(1.0/7.0, 4.0/7.0, 4.0/7.0, -4.0/7.0));
}

#[test]
fn add_test() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let r = Quaternion::new(5.0, 6.0, 7.0, 8.0);
    assert!(q + r == Quaternion::new(6.0, 8.0, 10.0, 12.0));
}

#[test]
fn sub_test() {
    let q = Quaternion::new(5.0, 6.0, 7.0, 8.0);
    let r = Quaternion::new(4.0, 3.0, 2.0, 1.0);
    assert!(q - r == Quaternion::new(1.0, 3.0, 5.0, 7.0));
}

#[test]
fn mul_test() {
    let q = Quaternion::new(0.0, 1.0, 2.0, 3.0);
    assert!(Quaternion::from(2.0) * q == Quaternion::new(0.0, 2.0, 4.0, 6.0));
    assert!(Quaternion::from(2.0) * Quaternion::from(3.0) == Quaternion::from(6.0));
    assert!(Quaternion::new(1.0, 2.0, 3.0, 4.0) * 2.0 == Quaternion::new(2.0, 4.0, 6.0, 8.0));
}

#[test]
fn mul_pure_imaginary_test() {
    let q = Quaternion::new(0.0, 1.0, 2.0, 3.0);
    let r = Quaternion::new(0.0, 4.0, 5.0, 6.0);
    let expected = Quaternion::new(
        -(1.0*4.0 + 2.0*5.0 + 3.0*6.0),
        2.0*6.0 - 3.0*5.0,
        3.0*4.0 - 1.0*6.0,
        1.0*5.0 - 2.0*4.0,
    );
    assert!(q * r == expected);
}

#[test]
fn mul_conjugate_test() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let r = Quaternion::new(5.0, 6.0, 7.0, 8.0);
    assert!((q * r).conjugate() == r.conjugate() * q.conjugate());
}

#[test]
fn div_test() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    let r = Quaternion::new(5.0, 6.0, 7.0, 8.0);
    assert!((q / r * r - q).len() < EPS);
    assert!(Quaternion::new(2.0, 4.0, 6.0, 8.0) / 2.0 == Quaternion::new(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn scalar_left_test() {
    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert!(2.0 + q == Quaternion::new(3.0, 2.0, 3.0, 4.0));
    assert!(2.0 - q == Quaternion::new(1.0, -2.0, -3.0, -4.0));
    assert!(2.0 * q == Quaternion::new(2.0, 4.0, 6.0, 8.0));
    assert!((2.0 / q * q - Quaternion::from(2.0)).len() < EPS);
}

#[test]
fn zero_len_test() {
    let norm = Quaternion::default().normalized();
    assert!(norm.a.is_nan() && norm.b.is_nan() && norm.c.is_nan() && norm.d.is_nan());

    let inv = Quaternion::default().inverse();
    assert!(inv.a.is_nan() && inv.b.is_nan() && inv.c.is_nan() && inv.d.is_nan());
}

#[test]
fn display_test() {
    let q = Quaternion::new(5.0, -6.0, 7.0, -8.0);
    assert!(q.to_string() == "5.000 - 6.000i + 7.000j - 8.000k");

    let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
    assert!(q.to_string() == "1.000 + 2.000i + 3.000j + 4.000k");
}

#[test]
fn write_to_test() {
    let q = Quaternion::new(5.0, -6.0, 7.0, -8.0);
    let mut sink = Vec::new();
    q.write_to(&mut sink).unwrap();
    assert!(sink == q.to_string().as_bytes());
}

#[test]
fn read_test() {
    let mut source = "-1.0 2.0 -3.0 4.0".as_bytes();
    let mut q = Quaternion::default();
    q.read_from(&mut source).unwrap();
    assert!(q == Quaternion::new(-1.0, 2.0, -3.0, 4.0));
}

#[test]
fn read_stream_test() {
    let mut source = "1 2 3 4\n5 6 7 8".as_bytes();
    let mut q = Quaternion::default();
    q.read_from(&mut source).unwrap();
    assert!(q == Quaternion::new(1.0, 2.0, 3.0, 4.0));
    q.read_from(&mut source).unwrap();
    assert!(q == Quaternion::new(5.0, 6.0, 7.0, 8.0));
    assert!(source.read_quaternion().unwrap().is_none());
}

#[test]
fn read_failure_test() {
    let q0 = Quaternion::new(9.0, 9.0, 9.0, 9.0);

    let mut source = "1.0 2.0".as_bytes();
    let mut q = q0;
    match q.read_from(&mut source) {
        Err(QuatError::MissingCoefficients(count)) => assert!(count == 2),
        _ => panic!("expected missing coefficients"),
    }
    assert!(q == q0);

    let mut source = "1.0 x 3.0 4.0".as_bytes();
    match q.read_from(&mut source) {
        Err(QuatError::InvalidCoefficient(token)) => assert!(token == "x"),
        _ => panic!("expected invalid coefficient"),
    }
    assert!(q == q0);
}

#[test]
fn involution_test() {
    let mut rand = Randf64::new();
    for _ in 0..100 {
        let q = rand.next_quat(-10.0..10.0);
        assert!(-(-q) == q);
        assert!(q.conjugate().conjugate() == q);
    }
}

#[test]
fn norm_len_test() {
    let mut rand = Randf64::new();
    for _ in 0..100 {
        let q = rand.next_quat(-10.0..10.0);
        assert!((q.normalized().len() - 1.0).abs() < EPS);
    }
}

#[test]
fn mul_conjugate_random_test() {
    let mut rand = Randf64::new();
    for _ in 0..100 {
        let q = rand.next_quat(-10.0..10.0);
        let r = rand.next_quat(-10.0..10.0);
        assert!(((q * r).conjugate() - r.conjugate() * q.conjugate()).len() < EPS);
    }
}

#[test]
fn div_roundtrip_test() {
    let mut rand = Randf64::new();
    for _ in 0..100 {
        let q = rand.next_quat(-10.0..10.0);
        let r = rand.next_quat(-10.0..10.0);
        assert!((q / r * r - q).len() < EPS);
    }
}
