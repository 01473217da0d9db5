//! Parser Module
//!
//! calamineを使用したワークブック解析の実装。
//! 各シートからヘッダー行（期間ラベル）と本文の行、集計行を抽出します。

mod workbook;

pub use workbook::{load, WorkbookParser};
