use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// フィールド値として使用可能な型の共通インターフェース。
///
/// スーパートレイトバウンドとして加算・減算・スカラー倍・符号反転を要求し、
/// 零元（加法単位元）とノルムを定義する。
/// 静的ディスパッチ専用設計のため `dyn FieldValue` は意図的に非サポート。
pub trait FieldValue:
    Copy
    + Debug
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Neg<Output = Self>
{
    /// 加法単位元を返す。`Self::zero() + x == x` をすべての `x` について保証する。
    fn zero() -> Self;

    /// ノルムを返す。常に非負。
    fn mag(&self) -> f64;
}

impl FieldValue for f64 {
    fn zero() -> Self {
        0.0_f64
    }

    fn mag(&self) -> f64 {
        self.abs()
    }
}
