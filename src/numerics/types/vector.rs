// src/numerics/types/vector.rs
// Vec3 generic implementation with default precision f32.
// Uses the Scalar / Integral traits from super::traits.

use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Rem, Sub, SubAssign,
};
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

use super::traits::{Integral, Scalar};
use crate::error::{Error, Result};

/// Vec3 is a plain 3-component value type over any integer or floating point
/// scalar. All arithmetic is elementwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vec3<T: Scalar = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

// Serialized as a plain (x, y, z) tuple
impl<T> Serialize for Vec3<T>
where
    T: Scalar + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vec3<T>
where
    T: Scalar + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(T, T, T)>::deserialize(deserializer)?;
        Ok(Vec3 { x, y, z })
    }
}

impl<T: Scalar> Vec3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Broadcast one value to all three components.
    pub fn splat(s: T) -> Self {
        Self { x: s, y: s, z: s }
    }

    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    pub fn one() -> Self {
        Self::splat(T::one())
    }

    /// Component-wise `as` conversion into another scalar type.
    ///
    /// Follows Rust's primitive cast rules: float to int truncates toward
    /// zero (saturating at the bounds), int to float rounds to nearest.
    pub fn cast<B>(self) -> Vec3<B>
    where
        B: Scalar,
        T: AsPrimitive<B>,
    {
        Vec3::new(self.x.as_(), self.y.as_(), self.z.as_())
    }

    /// Product of the three components.
    pub fn product(&self) -> T {
        self.x * self.y * self.z
    }

    /// Read the component at `i` (0 = x, 1 = y, 2 = z).
    pub fn get(&self, i: usize) -> Result<T> {
        self.slot(i).copied().ok_or(Error::InvalidIndex(i))
    }

    pub fn get_mut(&mut self, i: usize) -> Result<&mut T> {
        self.slot_mut(i).ok_or(Error::InvalidIndex(i))
    }

    pub fn set(&mut self, i: usize, value: T) -> Result<()> {
        *self.get_mut(i)? = value;
        Ok(())
    }

    fn slot(&self, i: usize) -> Option<&T> {
        match i {
            0 => Some(&self.x),
            1 => Some(&self.y),
            2 => Some(&self.z),
            _ => None,
        }
    }

    fn slot_mut(&mut self, i: usize) -> Option<&mut T> {
        match i {
            0 => Some(&mut self.x),
            1 => Some(&mut self.y),
            2 => Some(&mut self.z),
            _ => None,
        }
    }
}

impl<T: Scalar> Default for Vec3<T> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Panics on any index other than 0, 1 or 2. Use [`Vec3::get`] for a
/// checked read.
impl<T: Scalar> Index<usize> for Vec3<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        match self.slot(i) {
            Some(v) => v,
            None => panic!("{}", Error::InvalidIndex(i)),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Vec3<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        match self.slot_mut(i) {
            Some(v) => v,
            None => panic!("{}", Error::InvalidIndex(i)),
        }
    }
}

impl<T: Scalar> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vec3({}, {}, {})", self.x, self.y, self.z)
    }
}

// Elementwise Vec3 (op) Vec3, value and compound-assignment forms

macro_rules! impl_elementwise {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
        impl<T: Scalar> $op for Vec3<T> {
            type Output = Self;

            fn $method(self, other: Self) -> Self {
                Self::new(
                    self.x.$method(other.x),
                    self.y.$method(other.y),
                    self.z.$method(other.z),
                )
            }
        }

        impl<T: Scalar> $op_assign for Vec3<T> {
            fn $method_assign(&mut self, other: Self) {
                self.x.$method_assign(other.x);
                self.y.$method_assign(other.y);
                self.z.$method_assign(other.z);
            }
        }
    };
}

impl_elementwise!(Add, add, AddAssign, add_assign);
impl_elementwise!(Sub, sub, SubAssign, sub_assign);
impl_elementwise!(Mul, mul, MulAssign, mul_assign);
impl_elementwise!(Div, div, DivAssign, div_assign);

// Remainder exists for integer vectors only
impl<T: Integral> Rem for Vec3<T> {
    type Output = Self;

    fn rem(self, other: Self) -> Self {
        Self::new(self.x % other.x, self.y % other.y, self.z % other.z)
    }
}

// Scalar forms: v * s, s * v and v / s

impl<T: Scalar> Mul<T> for Vec3<T> {
    type Output = Self;

    fn mul(self, s: T) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl<T: Scalar> Div<T> for Vec3<T> {
    type Output = Self;

    fn div(self, s: T) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s)
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Vec3<$t>> for $t {
                type Output = Vec3<$t>;

                fn mul(self, v: Vec3<$t>) -> Vec3<$t> {
                    Vec3::new(v.x * self, v.y * self, v.z * self)
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

// Conversions between Vec3<T> and tuples / arrays

impl<T: Scalar> From<(T, T, T)> for Vec3<T> {
    fn from(tuple: (T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl<T: Scalar> From<[T; 3]> for Vec3<T> {
    fn from(array: [T; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl<T: Scalar> From<&(T, T, T)> for Vec3<T> {
    fn from(tuple: &(T, T, T)) -> Self {
        Self::from(*tuple)
    }
}

impl<T: Scalar> From<&[T; 3]> for Vec3<T> {
    fn from(array: &[T; 3]) -> Self {
        Self::from(*array)
    }
}

impl<T: Scalar> From<Vec3<T>> for (T, T, T) {
    fn from(v: Vec3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

impl<T: Scalar> From<Vec3<T>> for [T; 3] {
    fn from(v: Vec3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<T: Scalar> From<&Vec3<T>> for (T, T, T) {
    fn from(v: &Vec3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

impl<T: Scalar> From<&Vec3<T>> for [T; 3] {
    fn from(v: &Vec3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::hint::black_box;

    #[test]
    fn test_constructors() {
        assert_eq!(Vec3::splat(4), Vec3::new(4, 4, 4));
        assert_eq!(Vec3::<i32>::default(), Vec3::new(0, 0, 0));
        assert_eq!(Vec3::<f64>::one(), Vec3::new(1.0, 1.0, 1.0));

        // Default element type is f32
        let v: Vec3 = Vec3::zero();
        assert_eq!(v.z, 0.0_f32);
    }

    #[test]
    fn test_checked_access() {
        let mut v = Vec3::new(7, 8, 9);
        assert_eq!(v.get(0), Ok(7));
        assert_eq!(v.get(1), Ok(8));
        assert_eq!(v.get(2), Ok(9));
        assert_eq!(v.get(3), Err(Error::InvalidIndex(3)));
        assert_eq!(v.get(usize::MAX), Err(Error::InvalidIndex(usize::MAX)));

        v.set(1, 80).unwrap();
        *v.get_mut(2).unwrap() *= 10;
        assert_eq!(v, Vec3::new(7, 80, 90));
        assert_eq!(v.set(5, 1), Err(Error::InvalidIndex(5)));
        assert_eq!(v, Vec3::new(7, 80, 90));
    }

    #[test]
    fn test_index_operator() {
        let mut v = Vec3::new(1.5_f32, 2.5, 3.5);
        v[2] *= 2.0;
        assert_eq!(v[0], 1.5);
        assert_eq!(v[2], 7.0);
    }

    #[test]
    #[should_panic(expected = "Invalid index 3")]
    fn test_index_out_of_range_panics() {
        let v = Vec3::new(1, 2, 3);
        let _x = v[black_box(3)];
    }

    #[test]
    #[should_panic(expected = "Invalid index 4")]
    fn test_index_mut_out_of_range_panics() {
        let mut v = Vec3::new(1, 2, 3);
        v[black_box(4)] = 0;
    }

    #[test]
    fn test_elementwise_ops() {
        let a = Vec3::new(6, 9, 12);
        let b = Vec3::new(2, 3, 5);

        assert_eq!(a + b, Vec3::new(8, 12, 17));
        assert_eq!(a - b, Vec3::new(4, 6, 7));
        assert_eq!(a * b, Vec3::new(12, 27, 60));
        assert_eq!(a / b, Vec3::new(3, 3, 2));
        assert_eq!(a % b, Vec3::new(0, 0, 2));
        assert_eq!((a + b) - b, a);
    }

    #[test]
    fn test_compound_assign() {
        let mut v = Vec3::new(1.0_f64, 2.0, 3.0);
        v += Vec3::splat(1.0);
        assert_eq!(v, Vec3::new(2.0, 3.0, 4.0));
        v -= Vec3::new(0.5, 0.5, 0.5);
        assert_eq!(v, Vec3::new(1.5, 2.5, 3.5));
        v *= Vec3::splat(2.0);
        assert_eq!(v, Vec3::new(3.0, 5.0, 7.0));
        v /= Vec3::new(3.0, 5.0, 7.0);
        assert_eq!(v, Vec3::one());
    }

    #[test]
    fn test_scalar_ops() {
        let v = Vec3::new(2, 4, 6);
        assert_eq!(v * 3, Vec3::new(6, 12, 18));
        assert_eq!(3 * v, Vec3::new(6, 12, 18));
        assert_eq!(v / 2, Vec3::new(1, 2, 3));
        assert_eq!((v * 5) / 5, v);

        let f = Vec3::new(0.1_f32, 0.2, 0.3);
        let back = (f * 3.0) / 3.0;
        assert!((back.x - f.x).abs() < 1e-6);
        assert!((back.y - f.y).abs() < 1e-6);
        assert!((back.z - f.z).abs() < 1e-6);
        assert_eq!(2.0_f32 * f, f * 2.0);
    }

    #[test]
    fn test_float_division_by_zero_follows_ieee() {
        let v = Vec3::new(1.0_f64, -1.0, 0.0) / Vec3::<f64>::zero();
        assert_eq!(v.x, f64::INFINITY);
        assert_eq!(v.y, f64::NEG_INFINITY);
        assert!(v.z.is_nan());
    }

    #[test]
    #[should_panic]
    fn test_integer_division_by_zero_panics() {
        let _ = Vec3::new(1, 2, 3) / black_box(Vec3::new(1, 0, 1));
    }

    #[test]
    fn test_cast_matches_primitive_as() {
        let f = Vec3::new(1.9_f32, -1.9, 2.5);
        assert_eq!(f.cast::<i32>(), Vec3::new(1.9_f32 as i32, -1.9_f32 as i32, 2.5_f32 as i32));
        assert_eq!(f.cast::<i32>(), Vec3::new(1, -1, 2));

        let i = Vec3::new(3_i32, -4, 16_777_217);
        assert_eq!(i.cast::<f64>(), Vec3::new(3.0, -4.0, 16_777_217.0));
        assert_eq!(i.cast::<f32>().z, 16_777_217_i32 as f32);

        let wide = Vec3::new(300_i32, -1, 255);
        assert_eq!(wide.cast::<u8>(), Vec3::new(44, 255, 255));
    }

    #[test]
    fn test_product() {
        assert_eq!(Vec3::new(2, 3, 5).product(), 30);
        assert_eq!(Vec3::new(0.5_f32, 4.0, 2.0).product(), 4.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Vec3::new(1, -2, 3).to_string(), "vec3(1, -2, 3)");
        assert_eq!(Vec3::new(0.5_f32, 1.0, 2.25).to_string(), "vec3(0.5, 1, 2.25)");
    }

    #[test]
    fn test_tuple_and_array_conversions() {
        let v: Vec3<i32> = (1, 2, 3).into();
        assert_eq!(v, Vec3::new(1, 2, 3));
        let v2: Vec3<i32> = [1, 2, 3].into();
        assert_eq!(v, v2);
        assert_eq!(Vec3::from(&(4, 5, 6)), Vec3::new(4, 5, 6));
        assert_eq!(Vec3::from(&[4, 5, 6]), Vec3::new(4, 5, 6));

        let tup: (i32, i32, i32) = v.into();
        assert_eq!(tup, (1, 2, 3));
        let arr: [i32; 3] = (&v).into();
        assert_eq!(arr, [1, 2, 3]);
    }

    #[test]
    fn test_bincode_roundtrip() {
        let config = bincode::config::standard();
        let v = Vec3::new(1.0_f32, 2.0, 3.0);

        let encoded = bincode::serde::encode_to_vec(v, config).expect("serialize failed");
        assert!(!encoded.is_empty());

        let (decoded, _): (Vec3<f32>, usize) =
            bincode::serde::decode_from_slice(&encoded, config).expect("deserialize failed");
        assert_eq!(v, decoded);
    }

    #[test]
    fn test_json_is_a_tuple() {
        let v = Vec3::new(2, 2, 3);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[2,2,3]");
        let back: Vec3<i32> = serde_json::from_str("[2,2,3]").unwrap();
        assert_eq!(back, v);
    }
}
