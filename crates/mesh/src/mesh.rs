/// フィールドを構築する対象となるセル領域。
///
/// セル数と、フィールドを登録する時刻インスタンス名だけを保持する。
/// 面の接続や幾何量（体積・中心）はこの層では扱わない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mesh {
    n_cells: usize,
    time_name: String,
}

impl Mesh {
    /// `n_cells` 個のセルからなるメッシュ。時刻インスタンスは `"0"`。
    pub fn new(n_cells: usize) -> Self {
        Self {
            n_cells,
            time_name: "0".to_string(),
        }
    }

    /// フィールドを登録する時刻インスタンス名を設定する。
    pub fn with_time_name(mut self, time_name: impl Into<String>) -> Self {
        self.time_name = time_name.into();
        self
    }

    pub fn n_cells(&self) -> usize {
        self.n_cells
    }

    pub fn time_name(&self) -> &str {
        &self.time_name
    }
}
