use multiphase_types::{Dimension, DimensionedScalar, Quantity};

use crate::dictionary::{Dictionary, Entry};
use crate::error::ConfigError;

/// 物性値の読み込み元となるキー・値ストア。
///
/// サブグループは一度だけ解決して呼び出し側に渡すことを想定する。
/// `lookup_scalar` が型引数をとるため静的ディスパッチ専用。
pub trait ConfigStore {
    /// 名前付きサブグループを返す。
    ///
    /// # Errors
    ///
    /// 存在しなければ [`ConfigError::MissingSection`]、
    /// サブグループ以外のエントリなら [`ConfigError::TypeMismatch`]。
    fn sub_dict(&self, name: &str) -> Result<&Self, ConfigError>;

    /// 物理量 `Q` としてスカラーを読み込む。返す値の名前はキーと同じ。
    ///
    /// 次元を持たない数値は `Q` の次元をとる。次元付きの値は `Q` の次元と
    /// 一致しなければならない。
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingKey`], [`ConfigError::TypeMismatch`],
    /// [`ConfigError::InvalidDimensions`], [`ConfigError::DimensionMismatch`]
    fn lookup_scalar<Q: Quantity>(&self, key: &str) -> Result<DimensionedScalar, ConfigError>;

    /// 非負整数を読み込む。
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingKey`]、整数でなければ [`ConfigError::TypeMismatch`]、
    /// 負数なら [`ConfigError::InvalidLabel`]。
    fn lookup_label(&self, key: &str) -> Result<usize, ConfigError>;
}

impl Dictionary {
    fn lookup_entry(&self, key: &str) -> Result<&Entry, ConfigError> {
        self.get(key).ok_or_else(|| ConfigError::MissingKey {
            dict: self.name().to_string(),
            key: key.to_string(),
        })
    }

    fn type_mismatch(&self, key: &str, expected: &'static str, found: &Entry) -> ConfigError {
        ConfigError::TypeMismatch {
            dict: self.name().to_string(),
            key: key.to_string(),
            expected,
            found: found.kind(),
        }
    }
}

impl ConfigStore for Dictionary {
    fn sub_dict(&self, name: &str) -> Result<&Self, ConfigError> {
        match self.get(name) {
            Some(Entry::Dict(sub)) => Ok(sub),
            Some(other) => Err(self.type_mismatch(name, "sub-dictionary", other)),
            None => Err(ConfigError::MissingSection {
                dict: self.name().to_string(),
                name: name.to_string(),
            }),
        }
    }

    fn lookup_scalar<Q: Quantity>(&self, key: &str) -> Result<DimensionedScalar, ConfigError> {
        let expected = Q::dimension();
        let entry = self.lookup_entry(key)?;
        let (dimensions, value) = match entry {
            Entry::Number(n) => match n.as_f64() {
                Some(v) => (expected, v),
                None => return Err(self.type_mismatch(key, "number", entry)),
            },
            Entry::Dimensioned(d) => {
                let dimensions = Dimension::from_exponents(&d.dimensions).ok_or_else(|| {
                    ConfigError::InvalidDimensions {
                        dict: self.name().to_string(),
                        key: key.to_string(),
                        len: d.dimensions.len(),
                    }
                })?;
                (dimensions, d.value)
            }
            other => return Err(self.type_mismatch(key, "number", other)),
        };

        if dimensions != expected {
            return Err(ConfigError::DimensionMismatch {
                dict: self.name().to_string(),
                key: key.to_string(),
                expected,
                found: dimensions,
            });
        }

        Ok(DimensionedScalar::new(key, dimensions, value))
    }

    fn lookup_label(&self, key: &str) -> Result<usize, ConfigError> {
        let entry = self.lookup_entry(key)?;
        let Entry::Number(n) = entry else {
            return Err(self.type_mismatch(key, "integer", entry));
        };
        if let Some(v) = n.as_u64() {
            return usize::try_from(v).map_err(|_| ConfigError::InvalidLabel {
                dict: self.name().to_string(),
                key: key.to_string(),
                value: n.to_string(),
            });
        }
        if n.is_i64() {
            return Err(ConfigError::InvalidLabel {
                dict: self.name().to_string(),
                key: key.to_string(),
                value: n.to_string(),
            });
        }
        Err(self.type_mismatch(key, "integer", entry))
    }
}
