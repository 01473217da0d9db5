//! Error Types Module
//!
//! クレート全体で使用する構造化エラー型を定義するモジュール。
//! `thiserror`を使用して、エラーの自動変換とメッセージフォーマットを実現する。

use std::path::PathBuf;
use thiserror::Error;

/// xlsxtabsクレート全体で使用するエラー型
///
/// ワークブックの読み込み、HTMLレポートの書き出し中に発生する
/// すべてのエラーを統一的に扱うために使用されます。
/// どのエラーも変換処理全体を中断させ、リトライは行いません。
///
/// # エラーの種類
///
/// - `FileNotFound`: 入力ファイルが存在しない（抽出開始前に検出）
/// - `UnreadableWorkbook`: 入力ファイルがスプレッドシートとして解析できない
/// - `UnwritableDestination`: 出力先への書き込みに失敗した
/// - `Io`: その他のI/Oエラー
/// - `Json`: JSONシリアライズエラー
/// - `Config`: ビルダー設定の検証に失敗した
///
/// # 使用例
///
/// ```rust,no_run
/// use xlsxtabs::{load, ReportError};
///
/// match load("missing.xlsx") {
///     Err(ReportError::FileNotFound(path)) => {
///         println!("not found: {}", path.display());
///     }
///     _ => {}
/// }
/// ```
#[derive(Error, Debug)]
pub enum ReportError {
    /// 入力ファイルが存在しない
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// 入力ファイルをワークブックとして開けない、またはシートを読めない
    ///
    /// calamineクレートが返したエラーを保持します。ファイル形式が不正、
    /// 破損したファイル、未対応の拡張子などが原因となります。
    #[error("Failed to read workbook '{}': {source}", .path.display())]
    UnreadableWorkbook {
        /// 入力ファイルのパス
        path: PathBuf,
        /// calamine由来のエラー
        #[source]
        source: calamine::Error,
    },

    /// 出力ファイルの作成・書き込みに失敗した
    #[error("Failed to write '{}': {source}", .path.display())]
    UnwritableDestination {
        /// 出力ファイルのパス
        path: PathBuf,
        /// 書き込み時のI/Oエラー
        #[source]
        source: std::io::Error,
    },

    /// I/O操作中に発生したエラー
    ///
    /// `#[from]`属性により、`std::io::Error`から自動的に変換されます。
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSONシリアライズエラー
    ///
    /// 相互ナビゲーション表やシートデータのJSON出力に失敗した場合に発生します。
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// 設定の検証に失敗したエラー
    ///
    /// `ReportBuilder::build()`時に設定を検証し、無効な設定が検出された
    /// 場合に発生します（例: 空のタイトル）。
    #[error("Configuration error: {0}")]
    Config(String),
}
