// src/numerics/types/traits.rs
// Element traits for the numerics types.

/// Scalar is the element bound for `Vec3<T>`: any primitive integer or
/// floating point type.
///
/// We require Copy, PartialOrd, Display and the basic arithmetic ops on Self,
/// both in value and compound-assignment form.
pub trait Scalar:
Copy + PartialOrd + core::fmt::Debug + core::fmt::Display
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
+ core::ops::AddAssign
+ core::ops::SubAssign
+ core::ops::MulAssign
+ core::ops::DivAssign
+ 'static
{
    fn zero() -> Self;
    fn one() -> Self;
}

/// Integral marks the integer scalars. Only these get a remainder operator
/// on vectors.
///
/// ```
/// use vecgrid::Vec3;
///
/// assert_eq!(Vec3::new(7, 8, 9) % Vec3::splat(4), Vec3::new(3, 0, 1));
/// ```
///
/// Float vectors have no `%`:
///
/// ```compile_fail
/// use vecgrid::Vec3;
///
/// let _ = Vec3::new(1.0_f32, 2.0, 3.0) % Vec3::splat(2.0);
/// ```
pub trait Integral: Scalar + core::ops::Rem<Output = Self> {}

macro_rules! impl_scalar {
    ($zero:expr, $one:expr => $($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn zero() -> Self { $zero }
                fn one() -> Self { $one }
            }
        )*
    };
}

macro_rules! impl_integral {
    ($($t:ty),*) => {
        $( impl Integral for $t {} )*
    };
}

impl_scalar!(0, 1 => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_scalar!(0.0, 1.0 => f32, f64);
impl_integral!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
