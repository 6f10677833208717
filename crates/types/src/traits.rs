/// フィールド演算の基盤となる trait 群。
///
/// - [`FieldValue`][]: フィールド値の統一インターフェース（零元・ノルム）
mod field_value;

pub use field_value::FieldValue;
