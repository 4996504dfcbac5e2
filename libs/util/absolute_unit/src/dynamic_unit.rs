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
use crate::{Dimension, Unit};
#[cfg(debug_assertions)]
use hashbag::HashBag;
use ordered_float::OrderedFloat;
#[cfg(debug_assertions)]
use std::any::TypeId;
use std::ops::{Add, Div, Mul, Sub};

/// A magnitude with its units tracked at runtime instead of in the type.
///
/// The dimension is tracked in every build. Debug builds additionally track the concrete unit
/// types so that mixing, e.g., grams and kilograms without a conversion is caught.
#[derive(Default, Debug, Clone)]
pub struct DynamicUnits {
    #[cfg(debug_assertions)]
    numerator: HashBag<TypeId>,
    #[cfg(debug_assertions)]
    denominator: HashBag<TypeId>,
    dimension: Dimension,
    v: OrderedFloat<f64>,
}

impl DynamicUnits {
    pub fn ordered_float(&self) -> OrderedFloat<f64> {
        self.v
    }

    pub fn f64(&self) -> f64 {
        self.v.0
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    #[allow(unused_mut)]
    pub fn assert_units_equal(mut self, other: &DynamicUnits) {
        assert_eq!(self.dimension, other.dimension, "dimension");
        #[cfg(debug_assertions)]
        {
            // Cancel out the target units, checking that there are units to cancel.
            for n in other.numerator.iter() {
                assert!(self.numerator.remove(n) > 0);
            }
            for d in other.denominator.iter() {
                assert!(self.denominator.remove(d) > 0);
            }
            // Any remainder must _also_ cancel out, exactly.
            assert_eq!(self.numerator, self.denominator);
        }
    }

    /// Multiply in one more unit.
    pub fn times<U>(mut self) -> Self
    where
        U: Unit,
    {
        #[cfg(debug_assertions)]
        self.numerator.insert(TypeId::of::<U>());
        self.dimension = self.dimension.times(U::DIMENSION);
        self
    }

    /// Divide out one more unit.
    pub fn per<U>(mut self) -> Self
    where
        U: Unit,
    {
        #[cfg(debug_assertions)]
        self.denominator.insert(TypeId::of::<U>());
        self.dimension = self.dimension.per(U::DIMENSION);
        self
    }

    pub fn new0o0(v: OrderedFloat<f64>) -> Self {
        Self {
            v,
            dimension: Dimension::NONE,
            #[cfg(debug_assertions)]
            numerator: HashBag::default(),
            #[cfg(debug_assertions)]
            denominator: HashBag::default(),
        }
    }

    pub fn new1o0<N0>(v: OrderedFloat<f64>) -> Self
    where
        N0: Unit,
    {
        Self::new0o0(v).times::<N0>()
    }

    pub fn new1o1<N0, D0>(v: OrderedFloat<f64>) -> Self
    where
        N0: Unit,
        D0: Unit,
    {
        Self::new1o0::<N0>(v).per::<D0>()
    }

    pub fn new1o2<N0, D0, D1>(v: OrderedFloat<f64>) -> Self
    where
        N0: Unit,
        D0: Unit,
        D1: Unit,
    {
        Self::new1o1::<N0, D0>(v).per::<D1>()
    }

    pub fn new1o3<N0, D0, D1, D2>(v: OrderedFloat<f64>) -> Self
    where
        N0: Unit,
        D0: Unit,
        D1: Unit,
        D2: Unit,
    {
        Self::new1o2::<N0, D0, D1>(v).per::<D2>()
    }

    pub fn new2o0<N0, N1>(v: OrderedFloat<f64>) -> Self
    where
        N0: Unit,
        N1: Unit,
    {
        Self::new1o0::<N0>(v).times::<N1>()
    }

    pub fn new2o1<N0, N1, D0>(v: OrderedFloat<f64>) -> Self
    where
        N0: Unit,
        N1: Unit,
        D0: Unit,
    {
        Self::new2o0::<N0, N1>(v).per::<D0>()
    }

    pub fn new2o2<N0, N1, D0, D1>(v: OrderedFloat<f64>) -> Self
    where
        N0: Unit,
        N1: Unit,
        D0: Unit,
        D1: Unit,
    {
        Self::new2o1::<N0, N1, D0>(v).per::<D1>()
    }

    pub fn new3o0<N0, N1, N2>(v: OrderedFloat<f64>) -> Self
    where
        N0: Unit,
        N1: Unit,
        N2: Unit,
    {
        Self::new2o0::<N0, N1>(v).times::<N2>()
    }

    pub fn new3o2<N0, N1, N2, D0, D1>(v: OrderedFloat<f64>) -> Self
    where
        N0: Unit,
        N1: Unit,
        N2: Unit,
        D0: Unit,
        D1: Unit,
    {
        Self::new3o0::<N0, N1, N2>(v).per::<D0>().per::<D1>()
    }
}

impl Add<DynamicUnits> for DynamicUnits {
    type Output = DynamicUnits;

    fn add(mut self, rhs: DynamicUnits) -> Self::Output {
        assert_eq!(self.dimension, rhs.dimension, "dimension");
        #[cfg(debug_assertions)]
        {
            debug_assert_eq!(self.numerator, rhs.numerator, "numerator");
            debug_assert_eq!(self.denominator, rhs.denominator, "denominator");
        }
        self.v += rhs.v;
        self
    }
}

impl Sub<DynamicUnits> for DynamicUnits {
    type Output = DynamicUnits;

    fn sub(mut self, rhs: DynamicUnits) -> Self::Output {
        assert_eq!(self.dimension, rhs.dimension, "dimension");
        #[cfg(debug_assertions)]
        {
            debug_assert_eq!(self.numerator, rhs.numerator, "numerator");
            debug_assert_eq!(self.denominator, rhs.denominator, "denominator");
        }
        self.v -= rhs.v;
        self
    }
}

impl Mul<DynamicUnits> for DynamicUnits {
    type Output = DynamicUnits;

    fn mul(mut self, rhs: DynamicUnits) -> Self::Output {
        #[cfg(debug_assertions)]
        {
            self.numerator.extend(rhs.numerator.iter());
            self.denominator.extend(rhs.denominator.iter());
        }
        self.dimension = self.dimension * rhs.dimension;
        self.v *= rhs.v;
        self
    }
}

impl Div<DynamicUnits> for DynamicUnits {
    type Output = DynamicUnits;

    fn div(mut self, rhs: DynamicUnits) -> Self::Output {
        #[cfg(debug_assertions)]
        {
            self.numerator.extend(rhs.denominator.iter());
            self.denominator.extend(rhs.numerator.iter());
        }
        self.dimension = self.dimension / rhs.dimension;
        self.v /= rhs.v;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        joules_per_mole_kelvin, kilograms_per_meter3, kilograms_per_meter_second,
        kilograms_per_mole, meters2_per_second, meters_per_second, scalar, Diffusivity, Joules,
        Kelvin, Kilograms, Meters, Moles, Seconds, SpecificGasConstant,
    };
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_dyn_mul() {
        let v = meters_per_second!(3.);
        let v2 = v.as_dyn() * v.as_dyn();
        assert_abs_diff_eq!(v2.f64(), 9.);
        assert_eq!(v2.dimension(), Dimension::VELOCITY.powi(2));
        v2.assert_units_equal(&DynamicUnits::new2o2::<Meters, Meters, Seconds, Seconds>(
            0.0.into(),
        ));
    }

    #[test]
    fn test_dyn_cancellation() {
        let eta = kilograms_per_meter_second!(1.8e-5).as_dyn();
        let rho = kilograms_per_meter3!(1.2).as_dyn();
        let nu: Diffusivity<Meters, Seconds> = (eta / rho).into();
        assert_abs_diff_eq!(nu, meters2_per_second!(1.5e-5), epsilon = 1e-12);
    }

    #[test]
    fn test_dyn_gas_constant() {
        let r = joules_per_mole_kelvin!(8.314).as_dyn();
        let m = kilograms_per_mole!(0.018).as_dyn();
        let r_v = r / m;
        assert_eq!(r_v.dimension(), Dimension::SPECIFIC_GAS_CONSTANT);
        let r_v: SpecificGasConstant<Joules, Kilograms, Kelvin> = r_v.into();
        assert_abs_diff_eq!(r_v.f64(), 461.888_888, epsilon = 1e-5);
    }

    #[test]
    fn test_dyn_scalar_is_dimensionless() {
        let s = scalar!(2) * scalar!(3);
        assert!(s.as_dyn().dimension().is_dimensionless());
        assert_abs_diff_eq!(s.as_dyn().f64(), 6.);
    }

    #[test]
    #[should_panic]
    fn test_dyn_add_mismatch() {
        let _ = DynamicUnits::new1o0::<Meters>(1.0.into())
            + DynamicUnits::new1o0::<Moles>(1.0.into());
    }
}
