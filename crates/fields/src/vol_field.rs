use multiphase_mesh::Mesh;
use multiphase_types::{Dimension, DimensionedScalar, FieldValue};

use crate::error::FieldError;

/// セル中心に値を持つフィールド。
///
/// 名前・時刻インスタンス・物理次元とセルごとの値を所有する。
/// 値の書き換え手段は公開しない。
#[derive(Debug, Clone, PartialEq)]
pub struct VolField<T: FieldValue> {
    name: String,
    instance: String,
    dimensions: Dimension,
    internal: Vec<T>,
}

/// スカラー値のセルフィールド。
pub type VolScalarField = VolField<f64>;

impl<T: FieldValue> VolField<T> {
    /// 全セルに同じ値を持つフィールドを構築する。
    ///
    /// 時刻インスタンスは構築時点の `mesh.time_name()` をとる。
    pub fn uniform(mesh: &Mesh, name: impl Into<String>, value: T, dimensions: Dimension) -> Self {
        Self {
            name: name.into(),
            instance: mesh.time_name().to_string(),
            dimensions,
            internal: vec![value; mesh.n_cells()],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instance(&self) -> &str {
        &self.instance
    }

    pub fn dimensions(&self) -> Dimension {
        self.dimensions
    }

    pub fn values(&self) -> &[T] {
        &self.internal
    }

    pub fn len(&self) -> usize {
        self.internal.len()
    }

    pub fn is_empty(&self) -> bool {
        self.internal.is_empty()
    }

    /// セル `cell` の値。範囲外なら `None`。
    pub fn get(&self, cell: usize) -> Option<&T> {
        self.internal.get(cell)
    }

    /// 全セルの最大ノルム。空のフィールドでは 0。
    pub fn max_mag(&self) -> f64 {
        self.internal.iter().map(|v| v.mag()).fold(0.0, f64::max)
    }

    /// 全セルが同じ値ならその値を返す。空のフィールドでは `None`。
    pub fn uniform_value(&self) -> Option<T> {
        let (&first, rest) = self.internal.split_first()?;
        rest.iter().all(|&v| v == first).then_some(first)
    }
}

impl VolScalarField {
    /// 次元付きスカラーの値と次元で一様フィールドを構築する。
    pub fn from_dimensioned(mesh: &Mesh, name: impl Into<String>, value: &DimensionedScalar) -> Self {
        Self::uniform(mesh, name, value.value(), value.dimensions())
    }

    /// セルごとの商 `self / rhs` を新しいフィールドとして返す。次元も商をとる。
    ///
    /// # Errors
    ///
    /// セル数が異なる場合 [`FieldError::SizeMismatch`]。
    pub fn try_div(&self, rhs: &VolScalarField, name: impl Into<String>) -> Result<Self, FieldError> {
        if self.len() != rhs.len() {
            return Err(FieldError::SizeMismatch {
                lhs: self.name.clone(),
                lhs_len: self.len(),
                rhs: rhs.name.clone(),
                rhs_len: rhs.len(),
            });
        }

        Ok(Self {
            name: name.into(),
            instance: self.instance.clone(),
            dimensions: self.dimensions / rhs.dimensions,
            internal: self
                .internal
                .iter()
                .zip(&rhs.internal)
                .map(|(a, b)| a / b)
                .collect(),
        })
    }
}
