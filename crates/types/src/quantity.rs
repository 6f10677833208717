use std::marker::PhantomData;

use typenum::{Diff, Integer, N1, N2, N3, P1, Z0};

use crate::dimension::Dimension;

/// 物理量の次元をコンパイル時に表す trait。
///
/// 各基本次元の指数を typenum の整数型で保持し、[`Quantity::dimension`] で
/// 実行時の [`Dimension`] に変換する。辞書から値を読み込む側は
/// 期待する物理量を型引数で指定し、読み込んだ次元をこれと照合する。
///
/// # compile_fail 例
///
/// `f64` は `Quantity` を実装しないため、以下はコンパイルエラーになる:
///
/// ```compile_fail
/// use multiphase_types::Quantity;
/// fn check<Q: Quantity>() {}
/// check::<f64>();
/// ```
pub trait Quantity {
    /// 質量
    type M: Integer;
    /// 長さ
    type L: Integer;
    /// 時間
    type T: Integer;
    /// 温度
    type Th: Integer;
    /// 物質量
    type N: Integer;
    /// 電流
    type I: Integer;
    /// 光度
    type J: Integer;

    fn dimension() -> Dimension {
        Dimension::new([
            <Self::M as Integer>::I8,
            <Self::L as Integer>::I8,
            <Self::T as Integer>::I8,
            <Self::Th as Integer>::I8,
            <Self::N as Integer>::I8,
            <Self::I as Integer>::I8,
            <Self::J as Integer>::I8,
        ])
    }
}

/// 指数を型引数で並べた次元マーカー。値を持たない。
#[derive(Debug, Clone, Copy, Default)]
pub struct Dim<M, L, T, Th, N, I, J>(PhantomData<(M, L, T, Th, N, I, J)>);

impl<M, L, T, Th, N, I, J> Quantity for Dim<M, L, T, Th, N, I, J>
where
    M: Integer,
    L: Integer,
    T: Integer,
    Th: Integer,
    N: Integer,
    I: Integer,
    J: Integer,
{
    type M = M;
    type L = L;
    type T = T;
    type Th = Th;
    type N = N;
    type I = I;
    type J = J;
}

/// `A / B` の次元。指数の差を型レベルで計算する。
pub type Quot<A, B> = Dim<
    Diff<<A as Quantity>::M, <B as Quantity>::M>,
    Diff<<A as Quantity>::L, <B as Quantity>::L>,
    Diff<<A as Quantity>::T, <B as Quantity>::T>,
    Diff<<A as Quantity>::Th, <B as Quantity>::Th>,
    Diff<<A as Quantity>::N, <B as Quantity>::N>,
    Diff<<A as Quantity>::I, <B as Quantity>::I>,
    Diff<<A as Quantity>::J, <B as Quantity>::J>,
>;

pub type Dimensionless = Dim<Z0, Z0, Z0, Z0, Z0, Z0, Z0>;

/// kg m^-3
pub type Density = Dim<P1, N3, Z0, Z0, Z0, Z0, Z0>;

/// kg m^-1 s^-1
pub type DynamicViscosity = Dim<P1, N1, N1, Z0, Z0, Z0, Z0>;

/// m^2 s^-1
pub type KinematicViscosity = Quot<DynamicViscosity, Density>;

/// 界面張力 kg s^-2
pub type SurfaceTension = Dim<P1, Z0, N2, Z0, Z0, Z0, Z0>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensionless() {
        assert!(Dimensionless::dimension().is_dimensionless());
    }

    #[test]
    fn test_density_exponents() {
        assert_eq!(Density::dimension().exponents(), [1, -3, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_kinematic_viscosity_is_type_level_quotient() {
        assert_eq!(
            KinematicViscosity::dimension().exponents(),
            [0, 2, -1, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_type_level_quotient_matches_runtime_quotient() {
        let runtime = DynamicViscosity::dimension() / Density::dimension();
        assert_eq!(KinematicViscosity::dimension(), runtime);
    }

    #[test]
    fn test_surface_tension_exponents() {
        assert_eq!(
            SurfaceTension::dimension().exponents(),
            [1, 0, -2, 0, 0, 0, 0]
        );
    }
}
