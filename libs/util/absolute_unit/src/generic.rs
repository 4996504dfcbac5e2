// This file is part of Drizzle.
//
// Drizzle is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Drizzle is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Drizzle.  If not, see <http://www.gnu.org/licenses/>.

// Every quantity is a struct holding `v: OrderedFloat<f64>` in its own units, plus phantom
// markers for those units, and an inherent `from_ordered_float` constructor. The macros below
// build the shared operator surface on top of that shape. Generic parameters are passed as
// `Name: Bound` pairs so one arm serves quantities of any arity.

#[macro_export]
macro_rules! supports_value_type_conversion {
    ($TypeName:ty, $($T:ident: $Bound:path),+ $(,)?) => {
        $crate::impl_value_type_conversions!(f64, $TypeName, $($T: $Bound),+);
        $crate::impl_value_type_conversions!(f32, $TypeName, $($T: $Bound),+);
        $crate::impl_value_type_conversions!(isize, $TypeName, $($T: $Bound),+);
        $crate::impl_value_type_conversions!(i64, $TypeName, $($T: $Bound),+);
        $crate::impl_value_type_conversions!(i32, $TypeName, $($T: $Bound),+);
        $crate::impl_value_type_conversions!(i16, $TypeName, $($T: $Bound),+);
        $crate::impl_value_type_conversions!(i8, $TypeName, $($T: $Bound),+);
    };
}

#[macro_export]
macro_rules! impl_value_type_conversions {
    ($Num:ty, $TypeName:ty, $($T:ident: $Bound:path),+ $(,)?) => {
        impl<$($T),+> From<$Num> for $TypeName
        where
            $($T: $Bound),+
        {
            fn from(v: $Num) -> Self {
                <$TypeName>::from_ordered_float($crate::ordered_float::OrderedFloat(v as f64))
            }
        }

        impl<$($T),+> From<&$Num> for $TypeName
        where
            $($T: $Bound),+
        {
            fn from(v: &$Num) -> Self {
                <$TypeName>::from_ordered_float($crate::ordered_float::OrderedFloat(*v as f64))
            }
        }

        impl<$($T),+> From<$TypeName> for $Num
        where
            $($T: $Bound),+
        {
            fn from(v: $TypeName) -> $Num {
                v.ordered_float().0 as $Num
            }
        }
    };
}

#[macro_export]
macro_rules! supports_quantity_ops {
    ($TypeName:ty, $($T:ident: $Bound:path),+ $(,)?) => {
        impl<$($T),+> $TypeName
        where
            $($T: $Bound),+
        {
            pub fn f64(self) -> f64 {
                f64::from(self)
            }

            pub fn f32(self) -> f32 {
                f32::from(self)
            }

            pub fn ordered_float(&self) -> $crate::ordered_float::OrderedFloat<f64> {
                self.v
            }

            pub fn dimension(&self) -> $crate::Dimension {
                self.as_dyn().dimension()
            }

            pub fn abs(self) -> Self {
                <$TypeName>::from_ordered_float($crate::ordered_float::OrderedFloat(self.v.0.abs()))
            }
        }

        impl<$($T),+> From<$crate::DynamicUnits> for $TypeName
        where
            $($T: $Bound),+
        {
            fn from(v: $crate::DynamicUnits) -> Self {
                let f = v.ordered_float();
                let target = <$TypeName>::from_ordered_float(f).as_dyn();
                v.assert_units_equal(&target);
                <$TypeName>::from_ordered_float(f)
            }
        }

        impl<$($T),+> std::ops::Neg for $TypeName
        where
            $($T: $Bound),+
        {
            type Output = $TypeName;

            fn neg(self) -> Self::Output {
                <$TypeName>::from_ordered_float(-self.v)
            }
        }
    };
}

#[macro_export]
macro_rules! supports_absdiffeq {
    ($TypeName:ty, $($T:ident: $Bound:path),+ $(,)?) => {
        impl<$($T),+> $crate::approx::AbsDiffEq for $TypeName
        where
            $($T: $Bound),+
        {
            type Epsilon = f64;

            fn default_epsilon() -> Self::Epsilon {
                <f64 as $crate::approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                <f64 as $crate::approx::AbsDiffEq>::abs_diff_eq(&self.v.0, &other.v.0, epsilon)
            }
        }
    };
}

#[macro_export]
macro_rules! supports_scalar_ops {
    ($TypeName:ty, $($T:ident: $Bound:path),+ $(,)?) => {
        impl<$($T),+> std::ops::Mul<$crate::Scalar> for $TypeName
        where
            $($T: $Bound),+
        {
            type Output = $TypeName;

            fn mul(self, s: $crate::Scalar) -> Self {
                <$TypeName>::from_ordered_float(self.v * s.f64())
            }
        }

        impl<$($T),+> std::ops::Mul<$TypeName> for $crate::Scalar
        where
            $($T: $Bound),+
        {
            type Output = $TypeName;

            fn mul(self, other: $TypeName) -> Self::Output {
                <$TypeName>::from_ordered_float(other.v * self.f64())
            }
        }

        impl<$($T),+> std::ops::MulAssign<$crate::Scalar> for $TypeName
        where
            $($T: $Bound),+
        {
            fn mul_assign(&mut self, s: $crate::Scalar) {
                self.v *= s.f64();
            }
        }

        impl<$($T),+> std::ops::Div<$crate::Scalar> for $TypeName
        where
            $($T: $Bound),+
        {
            type Output = $TypeName;

            fn div(self, s: $crate::Scalar) -> Self {
                <$TypeName>::from_ordered_float(self.v / s.f64())
            }
        }

        impl<$($T),+> std::ops::DivAssign<$crate::Scalar> for $TypeName
        where
            $($T: $Bound),+
        {
            fn div_assign(&mut self, s: $crate::Scalar) {
                self.v /= s.f64();
            }
        }
    };
}

/// Addition and subtraction between two spellings of the same quantity. The right hand side is
/// converted into the units of the left hand side first.
#[macro_export]
macro_rules! supports_shift_ops {
    ($TypeNameSelf:ty, $TypeNameOther:ty, $($T:ident: $Bound:path),+ $(,)?) => {
        impl<$($T),+> std::ops::Add<$TypeNameOther> for $TypeNameSelf
        where
            $($T: $Bound),+
        {
            type Output = $TypeNameSelf;

            fn add(self, other: $TypeNameOther) -> Self {
                <$TypeNameSelf>::from_ordered_float(self.v + <$TypeNameSelf>::from(&other).v)
            }
        }

        impl<$($T),+> std::ops::AddAssign<$TypeNameOther> for $TypeNameSelf
        where
            $($T: $Bound),+
        {
            fn add_assign(&mut self, other: $TypeNameOther) {
                self.v += <$TypeNameSelf>::from(&other).v;
            }
        }

        impl<$($T),+> std::ops::Sub<$TypeNameOther> for $TypeNameSelf
        where
            $($T: $Bound),+
        {
            type Output = $TypeNameSelf;

            fn sub(self, other: $TypeNameOther) -> Self {
                <$TypeNameSelf>::from_ordered_float(self.v - <$TypeNameSelf>::from(&other).v)
            }
        }

        impl<$($T),+> std::ops::SubAssign<$TypeNameOther> for $TypeNameSelf
        where
            $($T: $Bound),+
        {
            fn sub_assign(&mut self, other: $TypeNameOther) {
                self.v -= <$TypeNameSelf>::from(&other).v;
            }
        }
    };
}

/// Dividing a quantity by the same quantity, in any units, leaves a bare number.
#[macro_export]
macro_rules! supports_cancellation {
    ($TypeNameSelf:ty, $TypeNameOther:ty, $($T:ident: $Bound:path),+ $(,)?) => {
        impl<$($T),+> std::ops::Div<$TypeNameOther> for $TypeNameSelf
        where
            $($T: $Bound),+
        {
            type Output = f64;

            fn div(self, other: $TypeNameOther) -> Self::Output {
                self.v.0 / <$TypeNameSelf>::from(&other).v.0
            }
        }
    };
}
