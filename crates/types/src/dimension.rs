/// 実行時に保持する物理次元。
use std::fmt;
use std::ops::{Div, Mul};

/// 基本次元の数。順序は `[質量, 長さ, 時間, 温度, 物質量, 電流, 光度]`。
pub const N_BASE_DIMENSIONS: usize = 7;

/// 7 つの基本次元の整数指数で表した物理次元。
///
/// 乗算で指数を加え、除算で指数を引く。値の大小や単位換算は扱わない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimension {
    exponents: [i8; N_BASE_DIMENSIONS],
}

impl Dimension {
    /// 無次元。
    pub const DIMENSIONLESS: Dimension = Dimension {
        exponents: [0; N_BASE_DIMENSIONS],
    };

    pub const fn new(exponents: [i8; N_BASE_DIMENSIONS]) -> Self {
        Self { exponents }
    }

    /// 指数列から次元を構築する。
    ///
    /// 7 要素ならそのまま、5 要素なら電流と光度を 0 として補う。
    /// それ以外の長さは `None`。
    pub fn from_exponents(exponents: &[i8]) -> Option<Self> {
        match exponents.len() {
            N_BASE_DIMENSIONS => {
                let mut e = [0; N_BASE_DIMENSIONS];
                e.copy_from_slice(exponents);
                Some(Self::new(e))
            }
            5 => {
                let mut e = [0; N_BASE_DIMENSIONS];
                e[..5].copy_from_slice(exponents);
                Some(Self::new(e))
            }
            _ => None,
        }
    }

    pub fn exponents(&self) -> [i8; N_BASE_DIMENSIONS] {
        self.exponents
    }

    pub fn is_dimensionless(&self) -> bool {
        *self == Self::DIMENSIONLESS
    }
}

impl Mul for Dimension {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let mut e = self.exponents;
        for (a, b) in e.iter_mut().zip(rhs.exponents) {
            *a += b;
        }
        Self::new(e)
    }
}

impl Div for Dimension {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        let mut e = self.exponents;
        for (a, b) in e.iter_mut().zip(rhs.exponents) {
            *a -= b;
        }
        Self::new(e)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, e) in self.exponents.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{e}")?;
        }
        write!(f, "]")
    }
}
