use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// ケースディレクトリの `constant/` に置く輸送物性辞書の名前。
pub const TRANSPORT_PROPERTIES: &str = "multiphaseTransportProperties";

/// 辞書の 1 エントリ。
///
/// JSON 上の表現:
///
/// | JSON                                       | エントリ        |
/// |--------------------------------------------|-----------------|
/// | `1000`, `0.5`, `3`                         | `Number`        |
/// | `"Newtonian"`                              | `Word`          |
/// | `{"dimensions": [1,-3,0,0,0], "value": 1}` | `Dimensioned`   |
/// | その他のオブジェクト                       | `Dict`          |
/// | 配列・真偽値・`null`                       | `Other`         |
///
/// キーがちょうど `dimensions` と `value` の 2 つだけのオブジェクトは、
/// 常に次元付きの値として扱い、サブ辞書にはならない。
///
/// `Other` は読み込み時には受け入れ、そのキーを数値やサブ辞書として
/// 参照したときにはじめて型不一致となる。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Number(serde_json::Number),
    Word(String),
    Dimensioned(DimensionedEntry),
    Dict(Dictionary),
    Other(serde_json::Value),
}

impl Entry {
    /// エラーメッセージ用の種別名。
    pub fn kind(&self) -> &'static str {
        match self {
            Entry::Number(n) if n.is_f64() => "floating-point number",
            Entry::Number(_) => "integer",
            Entry::Word(_) => "word",
            Entry::Dimensioned(_) => "dimensioned value",
            Entry::Dict(_) => "sub-dictionary",
            Entry::Other(serde_json::Value::Array(_)) => "list",
            Entry::Other(serde_json::Value::Bool(_)) => "boolean",
            Entry::Other(serde_json::Value::Null) => "null",
            Entry::Other(_) => "value",
        }
    }
}

/// 次元指数（5 または 7 個）と値の組。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DimensionedEntry {
    pub dimensions: Vec<i8>,
    pub value: f64,
}

/// JSON で記述されたキー・値辞書。
///
/// 入れ子の辞書はそれぞれスコープ付きの名前
/// （例: `multiphaseTransportProperties.dispersedPhase`）を持ち、
/// エラーメッセージでの位置特定に使う。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    #[serde(skip)]
    name: String,
    entries: BTreeMap<String, Entry>,
}

impl Dictionary {
    /// JSON 文字列から辞書を構築する。最上位は JSON オブジェクトでなければならない。
    ///
    /// # Errors
    ///
    /// JSON として不正な場合 [`ConfigError::Parse`]。
    pub fn from_json_str(name: impl Into<String>, text: &str) -> Result<Self, ConfigError> {
        let name = name.into();
        let mut dict: Dictionary = match serde_json::from_str(text) {
            Ok(dict) => dict,
            Err(source) => return Err(ConfigError::Parse { name, source }),
        };
        dict.assign_names(name);
        Ok(dict)
    }

    /// ファイルから辞書を読み込む。辞書名はファイル名の stem。
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dict = Self::from_json_str(name, &text)?;
        log::debug!(
            "read dictionary `{}` ({} entries) from {}",
            dict.name,
            dict.entries.len(),
            path.display()
        );
        Ok(dict)
    }

    /// ケースディレクトリから `constant/multiphaseTransportProperties.json` を読み込む。
    pub fn read_case(case_dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = case_dir
            .as_ref()
            .join("constant")
            .join(format!("{TRANSPORT_PROPERTIES}.json"));
        Self::read(path)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn assign_names(&mut self, name: String) {
        for (key, entry) in &mut self.entries {
            if let Entry::Dict(sub) = entry {
                sub.assign_names(format!("{name}.{key}"));
            }
        }
        self.name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = r#"{
        "dispersedPhases": 1,
        "model": "Newtonian",
        "continuousPhase": {
            "rho": {"dimensions": [1, -3, 0, 0, 0], "value": 1000},
            "mu": 0.001
        },
        "dispersedPhase": {
            "inner": {"x": 1}
        }
    }"#;

    #[test]
    fn parses_entry_kinds() {
        let dict = Dictionary::from_json_str("props", TEXT).unwrap();
        assert_eq!(dict.len(), 4);
        assert_eq!(dict.get("dispersedPhases").map(Entry::kind), Some("integer"));
        assert_eq!(dict.get("model").map(Entry::kind), Some("word"));
        assert_eq!(dict.get("continuousPhase").map(Entry::kind), Some("sub-dictionary"));
        assert!(dict.get("missing").is_none());
    }

    #[test]
    fn dimensioned_object_is_not_a_sub_dictionary() {
        let dict = Dictionary::from_json_str("props", TEXT).unwrap();
        let Some(Entry::Dict(cont)) = dict.get("continuousPhase") else {
            panic!("continuousPhase should be a sub-dictionary");
        };
        assert_eq!(
            cont.get("rho"),
            Some(&Entry::Dimensioned(DimensionedEntry {
                dimensions: vec![1, -3, 0, 0, 0],
                value: 1000.0,
            }))
        );
        assert_eq!(cont.get("mu").map(Entry::kind), Some("floating-point number"));
    }

    #[test]
    fn nested_dictionaries_get_scoped_names() {
        let dict = Dictionary::from_json_str("props", TEXT).unwrap();
        assert_eq!(dict.name(), "props");
        let Some(Entry::Dict(disp)) = dict.get("dispersedPhase") else {
            panic!("dispersedPhase should be a sub-dictionary");
        };
        assert_eq!(disp.name(), "props.dispersedPhase");
        let Some(Entry::Dict(inner)) = disp.get("inner") else {
            panic!("inner should be a sub-dictionary");
        };
        assert_eq!(inner.name(), "props.dispersedPhase.inner");
    }

    #[test]
    fn keys_are_sorted() {
        let dict = Dictionary::from_json_str("props", TEXT).unwrap();
        let keys: Vec<_> = dict.keys().collect();
        assert_eq!(
            keys,
            ["continuousPhase", "dispersedPhase", "dispersedPhases", "model"]
        );
    }

    #[test]
    fn unrelated_list_boolean_and_null_entries_still_load() {
        let dict = Dictionary::from_json_str(
            "props",
            r#"{
                "dispersedPhases": 0,
                "extra": [1, 2],
                "writeFields": true,
                "comment": null,
                "continuousPhase": {"rho": 1000, "mu": 0.001, "tags": ["water"]}
            }"#,
        )
        .unwrap();
        assert_eq!(dict.get("extra").map(Entry::kind), Some("list"));
        assert_eq!(dict.get("writeFields").map(Entry::kind), Some("boolean"));
        assert_eq!(dict.get("comment").map(Entry::kind), Some("null"));
        assert_eq!(dict.get("dispersedPhases").map(Entry::kind), Some("integer"));
        let Some(Entry::Dict(cont)) = dict.get("continuousPhase") else {
            panic!("continuousPhase should be a sub-dictionary");
        };
        assert_eq!(cont.get("tags").map(Entry::kind), Some("list"));
    }

    #[test]
    fn dimensions_and_value_only_object_is_dimensioned() {
        let dict = Dictionary::from_json_str(
            "props",
            r#"{
                "transportCoefficients": {"dimensions": [0, 0, 0, 0, 0], "value": 1},
                "other": {"dimensions": [0, 0, 0, 0, 0], "value": 1, "Cl": 0.5}
            }"#,
        )
        .unwrap();
        assert_eq!(
            dict.get("transportCoefficients").map(Entry::kind),
            Some("dimensioned value")
        );
        assert_eq!(dict.get("other").map(Entry::kind), Some("sub-dictionary"));
    }

    #[test]
    fn rejects_non_object_root() {
        let err = Dictionary::from_json_str("props", "[1, 2]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { ref name, .. } if name == "props"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = Dictionary::from_json_str("props", "{ \"rho\": ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn read_reports_missing_file() {
        let err = Dictionary::read_case("/nonexistent/case").unwrap_err();
        let ConfigError::Io { path, .. } = err else {
            panic!("expected Io error");
        };
        assert!(path.ends_with("constant/multiphaseTransportProperties.json"));
    }
}
