//! STARK curve point operations

use crate::ec::stark::{
    constants::{
        STARK_FIELD_ELEMENT_SIZE, STARK_ORDER_BITS, STARK_POINT_COMPRESSED_SIZE,
        STARK_POINT_UNCOMPRESSED_SIZE,
    },
    field::FieldElement,
    scalar::Scalar,
};
use crate::error::{validate, Error, Result};
use once_cell::sync::Lazy;
use starksig_params::traditional::ecdsa::STARK_CURVE;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Curve coefficient α in Montgomery form
static ALPHA: Lazy<FieldElement> = Lazy::new(|| FieldElement::from_bytes_reduced(&STARK_CURVE.a));

/// Curve coefficient β in Montgomery form
static BETA: Lazy<FieldElement> = Lazy::new(|| FieldElement::from_bytes_reduced(&STARK_CURVE.b));

/// 3·β, used by the complete addition formulas
static BETA3: Lazy<FieldElement> = Lazy::new(|| BETA.add(&BETA).add(&BETA));

/// Format of a serialized elliptic‐curve point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFormat {
    /// Identity point (all zeros)
    Identity,
    /// Uncompressed: 0x04 ∥ x ∥ y
    Uncompressed,
    /// Compressed: 0x02/0x03 ∥ x
    Compressed,
}

/// Affine coordinates (x, y) or identity
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub(crate) is_identity: Choice,
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

/// Homogeneous projective coordinates (X:Y:Z) with x = X/Z, y = Y/Z.
/// The identity is (0:1:0).
#[derive(Clone, Copy, Debug)]
pub(crate) struct ProjectivePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        let a_id: bool = self.is_identity.into();
        let b_id: bool = other.is_identity.into();
        if a_id || b_id {
            return a_id == b_id;
        }
        self.x == other.x && self.y == other.y
    }
}

impl Eq for Point {}

impl Point {
    /// Create a new affine point from uncompressed byte coordinates
    pub fn new_uncompressed(
        x_bytes: &[u8; STARK_FIELD_ELEMENT_SIZE],
        y_bytes: &[u8; STARK_FIELD_ELEMENT_SIZE],
    ) -> Result<Self> {
        let x_fe = FieldElement::from_bytes(x_bytes)?;
        let y_fe = FieldElement::from_bytes(y_bytes)?;
        if !Self::is_on_curve(&x_fe, &y_fe) {
            return Err(Error::param("STARK Point", "Point not on curve"));
        }
        Ok(Point {
            is_identity: Choice::from(0),
            x: x_fe,
            y: y_fe,
        })
    }

    /// Recover a point from its x‐coordinate.
    ///
    /// Picks the root of x³ + αx + β whose parity matches `y_is_odd`.
    /// Fails if x ≥ p or x is not the abscissa of a curve point.
    pub fn from_x(x_bytes: &[u8; STARK_FIELD_ELEMENT_SIZE], y_is_odd: bool) -> Result<Self> {
        let x_fe = FieldElement::from_bytes(x_bytes)
            .map_err(|_| Error::param("STARK Point", "x not in field"))?;
        let y_candidate = Self::curve_rhs(&x_fe)
            .sqrt()
            .ok_or(Error::param("STARK Point", "x is not on the curve"))?;
        let flip = y_candidate.is_odd_choice() ^ Choice::from(y_is_odd as u8);
        let y_final = FieldElement::conditional_select(&y_candidate, &y_candidate.negate(), flip);
        Ok(Point {
            is_identity: Choice::from(0),
            x: x_fe,
            y: y_final,
        })
    }

    /// The identity (point at infinity)
    pub fn identity() -> Self {
        Point {
            is_identity: Choice::from(1),
            x: FieldElement::zero(),
            y: FieldElement::zero(),
        }
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        self.is_identity.into()
    }

    /// Extract x‐coordinate as big‐endian bytes
    pub fn x_coordinate_bytes(&self) -> [u8; STARK_FIELD_ELEMENT_SIZE] {
        self.x.to_bytes()
    }

    /// Extract y‐coordinate as big‐endian bytes
    pub fn y_coordinate_bytes(&self) -> [u8; STARK_FIELD_ELEMENT_SIZE] {
        self.y.to_bytes()
    }

    /// Detect serialized point format
    pub fn detect_format(bytes: &[u8]) -> Result<PointFormat> {
        if bytes.is_empty() {
            return Err(Error::param("STARK Point", "Empty encoding"));
        }
        match (bytes[0], bytes.len()) {
            (0x00, STARK_POINT_UNCOMPRESSED_SIZE) | (0x00, STARK_POINT_COMPRESSED_SIZE) => {
                // all‐zeros encoding = identity
                if bytes.iter().all(|&b| b == 0) {
                    Ok(PointFormat::Identity)
                } else {
                    Err(Error::param("STARK Point", "Invalid identity encoding"))
                }
            }
            (0x04, STARK_POINT_UNCOMPRESSED_SIZE) => Ok(PointFormat::Uncompressed),
            (0x02 | 0x03, STARK_POINT_COMPRESSED_SIZE) => Ok(PointFormat::Compressed),
            _ => Err(Error::param("STARK Point", "Unknown or malformed format")),
        }
    }

    /// Serialize this point as uncompressed: 0x04 ∥ x ∥ y
    pub fn serialize_uncompressed(&self) -> [u8; STARK_POINT_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; STARK_POINT_UNCOMPRESSED_SIZE];
        if self.is_identity() {
            return out;
        }
        out[0] = 0x04;
        out[1..1 + STARK_FIELD_ELEMENT_SIZE].copy_from_slice(&self.x.to_bytes());
        out[1 + STARK_FIELD_ELEMENT_SIZE..].copy_from_slice(&self.y.to_bytes());
        out
    }

    /// Deserialize from uncompressed bytes (0x04 ∥ x ∥ y), or all‐zeros for identity
    pub fn deserialize_uncompressed(bytes: &[u8]) -> Result<Self> {
        validate::length("STARK Point", bytes.len(), STARK_POINT_UNCOMPRESSED_SIZE)?;
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }
        if bytes[0] != 0x04 {
            return Err(Error::param("STARK Point", "Invalid prefix for uncompressed"));
        }
        let mut xb = [0u8; STARK_FIELD_ELEMENT_SIZE];
        let mut yb = [0u8; STARK_FIELD_ELEMENT_SIZE];
        xb.copy_from_slice(&bytes[1..1 + STARK_FIELD_ELEMENT_SIZE]);
        yb.copy_from_slice(&bytes[1 + STARK_FIELD_ELEMENT_SIZE..]);
        Self::new_uncompressed(&xb, &yb)
    }

    /// Serialize this point in compressed form: 0x02/0x03 ∥ x
    pub fn serialize_compressed(&self) -> [u8; STARK_POINT_COMPRESSED_SIZE] {
        let mut out = [0u8; STARK_POINT_COMPRESSED_SIZE];
        if self.is_identity() {
            return out;
        }
        out[0] = if self.y.is_odd() { 0x03 } else { 0x02 };
        out[1..].copy_from_slice(&self.x.to_bytes());
        out
    }

    /// Deserialize from compressed bytes (0x02/0x03 ∥ x) or all‐zeros for identity
    pub fn deserialize_compressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "STARK Compressed Point",
            bytes.len(),
            STARK_POINT_COMPRESSED_SIZE,
        )?;
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }
        let tag = bytes[0];
        if tag != 0x02 && tag != 0x03 {
            return Err(Error::param("STARK Point", "Invalid compressed prefix"));
        }
        let mut xb = [0u8; STARK_FIELD_ELEMENT_SIZE];
        xb.copy_from_slice(&bytes[1..]);
        Self::from_x(&xb, tag == 0x03)
    }

    /// Add two points (group law)
    pub fn add(&self, other: &Self) -> Self {
        self.to_projective().add(&other.to_projective()).to_affine()
    }

    /// Double this point: 2P
    pub fn double(&self) -> Self {
        self.to_projective().double().to_affine()
    }

    /// Negate this point: (x, −y)
    pub fn negate(&self) -> Self {
        Point {
            is_identity: self.is_identity,
            x: self.x,
            y: self.y.negate(),
        }
    }

    /// Scalar multiplication: P * scalar
    ///
    /// Montgomery ladder over a fixed 252 bits, so the sequence of field
    /// operations does not depend on the scalar.
    pub fn mul(&self, scalar: &Scalar) -> Self {
        let mut r0 = ProjectivePoint::identity();
        let mut r1 = self.to_projective();
        let mut swap = Choice::from(0);

        for i in (0..STARK_ORDER_BITS).rev() {
            let bit = scalar.bit(i);
            ProjectivePoint::conditional_swap(&mut r0, &mut r1, swap ^ bit);
            swap = bit;
            // invariant: r1 = r0 + P
            r1 = r0.add(&r1);
            r0 = r0.double();
        }
        ProjectivePoint::conditional_swap(&mut r0, &mut r1, swap);

        r0.to_affine()
    }

    /// Check that (x, y) satisfies y² = x³ + αx + β
    pub fn is_on_curve(x: &FieldElement, y: &FieldElement) -> bool {
        y.square() == Self::curve_rhs(x)
    }

    /// x³ + αx + β
    fn curve_rhs(x: &FieldElement) -> FieldElement {
        let x3 = x.square().mul(x);
        x3.add(&ALPHA.mul(x)).add(&BETA)
    }

    /// Convert affine to projective for intermediate computations
    pub(crate) fn to_projective(&self) -> ProjectivePoint {
        let finite = ProjectivePoint {
            x: self.x,
            y: self.y,
            z: FieldElement::one(),
        };
        ProjectivePoint::conditional_select(
            &finite,
            &ProjectivePoint::identity(),
            self.is_identity,
        )
    }
}

impl ProjectivePoint {
    /// Identity in homogeneous form: (0 : 1 : 0)
    pub fn identity() -> Self {
        ProjectivePoint {
            x: FieldElement::zero(),
            y: FieldElement::one(),
            z: FieldElement::zero(),
        }
    }

    /// Complete point addition (Renes–Costello–Batina 2015, Algorithm 1)
    ///
    /// Valid for every pair of inputs, including doubling, the identity and
    /// P + (−P), with no input‐dependent branches.
    pub fn add(&self, other: &Self) -> Self {
        let a = *ALPHA;
        let b3 = *BETA3;
        let (x1, y1, z1) = (&self.x, &self.y, &self.z);
        let (x2, y2, z2) = (&other.x, &other.y, &other.z);

        let mut t0 = x1.mul(x2);
        let mut t1 = y1.mul(y2);
        let mut t2 = z1.mul(z2);
        let mut t3 = x1.add(y1).mul(&x2.add(y2));
        let mut t4 = t0.add(&t1);
        t3 = t3.sub(&t4);
        t4 = x1.add(z1).mul(&x2.add(z2));
        let mut t5 = t0.add(&t2);
        t4 = t4.sub(&t5);
        t5 = y1.add(z1).mul(&y2.add(z2));
        let mut x3 = t1.add(&t2);
        t5 = t5.sub(&x3);
        let mut z3 = a.mul(&t4);
        x3 = b3.mul(&t2);
        z3 = x3.add(&z3);
        x3 = t1.sub(&z3);
        z3 = t1.add(&z3);
        let mut y3 = x3.mul(&z3);
        t1 = t0.add(&t0).add(&t0);
        t2 = a.mul(&t2);
        t4 = b3.mul(&t4);
        t1 = t1.add(&t2);
        t2 = t0.sub(&t2);
        t2 = a.mul(&t2);
        t4 = t4.add(&t2);
        t0 = t1.mul(&t4);
        y3 = y3.add(&t0);
        t0 = t5.mul(&t4);
        x3 = t3.mul(&x3);
        x3 = x3.sub(&t0);
        t0 = t3.mul(&t1);
        z3 = t5.mul(&z3);
        z3 = z3.add(&t0);

        ProjectivePoint {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Point doubling via the complete addition law
    pub fn double(&self) -> Self {
        self.add(self)
    }

    /// Convert back to affine coordinates
    pub fn to_affine(&self) -> Point {
        let is_identity = self.z.is_zero_choice();
        // 0⁻¹ evaluates to 0 here; the identity flag covers that case
        let z_inv = self.z.invert_or_zero();
        Point {
            is_identity,
            x: self.x.mul(&z_inv),
            y: self.y.mul(&z_inv),
        }
    }
}

impl ConditionallySelectable for ProjectivePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        ProjectivePoint {
            x: FieldElement::conditional_select(&a.x, &b.x, choice),
            y: FieldElement::conditional_select(&a.y, &b.y, choice),
            z: FieldElement::conditional_select(&a.z, &b.z, choice),
        }
    }
}

impl ConstantTimeEq for Point {
    fn ct_eq(&self, other: &Self) -> Choice {
        let both_identity = self.is_identity & other.is_identity;
        let both_finite = !self.is_identity & !other.is_identity;
        both_identity | (both_finite & self.x.ct_eq(&other.x) & self.y.ct_eq(&other.y))
    }
}
