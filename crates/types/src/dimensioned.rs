use std::fmt;
use std::ops::Div;

use crate::dimension::Dimension;

/// 名前・物理次元・値の組で表した物理定数。
///
/// 構築後は変更できない。別名が必要な場合は [`DimensionedScalar::renamed`] で
/// 新しい値を作る。
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionedScalar {
    name: String,
    dimensions: Dimension,
    value: f64,
}

impl DimensionedScalar {
    pub fn new(name: impl Into<String>, dimensions: Dimension, value: f64) -> Self {
        Self {
            name: name.into(),
            dimensions,
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimensions(&self) -> Dimension {
        self.dimensions
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// 次元と値を保ったまま名前だけを差し替えた値を返す。
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }
}

impl Div for &DimensionedScalar {
    type Output = DimensionedScalar;

    /// `a / b`。次元は商をとり、名前は `(a|b)` とする。
    fn div(self, rhs: &DimensionedScalar) -> DimensionedScalar {
        DimensionedScalar {
            name: format!("({}|{})", self.name, rhs.name),
            dimensions: self.dimensions / rhs.dimensions,
            value: self.value / rhs.value,
        }
    }
}

impl fmt::Display for DimensionedScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.dimensions, self.value)
    }
}
