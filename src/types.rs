//! Types Module
//!
//! ローダーとレンダラーの間で受け渡すデータ型を定義するモジュール。

use serde::Serialize;

/// 本文の1行（行ラベルと期間ごとの値）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataRow {
    /// 行ラベル（例: 都道府県名）
    pub label: String,
    /// フォーマット済みの値（列順）
    pub values: Vec<String>,
}

/// 1シート分の抽出結果
///
/// 出力HTMLの1タブに対応します。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetData {
    /// シート名（タブのラベル）
    pub name: String,

    /// HTMLのフラグメント識別子として安全なID
    pub anchor: String,

    /// 期間ラベル（ヘッダー行の2列目以降の空でないセル）
    periods: Vec<String>,

    /// 本文の行（初出順、集計行を除く）
    rows: Vec<DataRow>,

    /// 集計行の値
    aggregate_row: Option<Vec<String>>,
}

impl SheetData {
    /// 空のシートを生成
    ///
    /// # 引数
    ///
    /// * `position` - ワークブック内のシート位置（0始まり）
    /// * `name` - シート名
    pub fn new(position: usize, name: &str) -> Self {
        Self {
            name: name.to_string(),
            anchor: sheet_anchor(position, name),
            periods: Vec::new(),
            rows: Vec::new(),
            aggregate_row: None,
        }
    }

    /// 行を追加する
    ///
    /// 同じラベルの行が既にある場合は、位置を保ったまま値を置き換えます。
    pub fn insert_row(&mut self, label: String, values: Vec<String>) {
        match self.rows.iter_mut().find(|row| row.label == label) {
            Some(existing) => existing.values = values,
            None => self.rows.push(DataRow { label, values }),
        }
    }

    /// 期間ラベル
    pub fn periods(&self) -> &[String] {
        &self.periods
    }

    /// 期間ラベルを設定
    pub fn set_periods(&mut self, periods: Vec<String>) {
        self.periods = periods;
    }

    /// 集計行の値
    pub fn aggregate_row(&self) -> Option<&[String]> {
        self.aggregate_row.as_deref()
    }

    /// 集計行を設定する（既にある場合は置き換え）
    pub fn set_aggregate_row(&mut self, values: Vec<String>) {
        self.aggregate_row = Some(values);
    }

    /// 本文の行
    pub fn rows(&self) -> &[DataRow] {
        &self.rows
    }

    /// ラベルで行の値を取得
    pub fn row(&self, label: &str) -> Option<&[String]> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.values.as_slice())
    }

    /// 抽出できたデータがないかどうか
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty() && self.rows.is_empty() && self.aggregate_row.is_none()
    }
}

/// シート名からフラグメント識別子を生成
///
/// `sheet-{n}`（1始まり）に、シート名のASCII英数字部分を小文字化した
/// スラッグを続けます。日本語のみのシート名ではスラッグは省略されます。
///
/// ```text
/// (0, "EV")        -> "sheet-1-ev"
/// (1, "充電設備")   -> "sheet-2"
/// (2, "V2H 設備")  -> "sheet-3-v2h"
/// ```
pub(crate) fn sheet_anchor(position: usize, name: &str) -> String {
    let mut slug = String::new();
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        format!("sheet-{}", position + 1)
    } else {
        format!("sheet-{}-{}", position + 1, slug)
    }
}
