//! xlsxtabs - Excel workbook to tabbed HTML report converter
//!
//! ワークブックの各シート（都道府県 × 年度の表）を読み込み、
//! シートごとのタブを持つ自己完結型のHTMLレポートを生成します。
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use xlsxtabs::ReportBuilder;
//!
//! fn main() -> Result<(), xlsxtabs::ReportError> {
//!     // 出力ファイル名からタイトル・サブタイトルを決定
//!     let report = ReportBuilder::new()
//!         .for_output_path("koufu2.html")
//!         .build()?;
//!
//!     // 読み込み → HTML生成 → 書き出し
//!     let sheets = report.convert("koufu2_data.xlsx", "koufu2.html")?;
//!     println!("{} sheets", sheets.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Load and Render Separately
//!
//! ```rust,no_run
//! use xlsxtabs::{load, HtmlRenderer, PageVariant, RenderContext};
//!
//! fn main() -> Result<(), xlsxtabs::ReportError> {
//!     let sheets = load("koufu_data.xlsx")?;
//!
//!     let today = chrono::Local::now().date_naive();
//!     let renderer = HtmlRenderer::new(RenderContext::for_variant(PageVariant::Vehicles, today));
//!     let html = renderer.render(&sheets)?;
//!     println!("{}", html);
//!
//!     Ok(())
//! }
//! ```
//!
//! # 入力ワークブックの形式
//!
//! - A列: 行ラベル（都道府県名）、2行目から
//! - 1行目のB列以降: 期間ラベル（年度）。最後の列は集計列（計）として強調
//! - 行ラベルに「総計」「合計」を含む行: 集計行
//! - シートごとに1タブ

mod api;
mod builder;
mod error;
pub mod formatter;
mod output;
mod parser;
mod types;

// 公開API
pub use api::{NavLink, PageVariant, PAGE_TITLE};
pub use builder::{Report, ReportBuilder};
pub use error::ReportError;
pub use formatter::PLACEHOLDER;
pub use output::{HtmlRenderer, RenderContext};
pub use parser::{load, WorkbookParser};
pub use types::{DataRow, SheetData};
