//! Builder Module
//!
//! Fluent Builder APIを提供し、`Report`インスタンスを段階的に構築する。

use chrono::{Local, NaiveDate};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::api::PageVariant;
use crate::error::ReportError;
use crate::output::{HtmlRenderer, RenderContext};
use crate::types::SheetData;

/// Fluent Builder APIを提供する構造体
///
/// すべての設定項目にデフォルト値が設定されており、必要な設定のみを
/// オーバーライドできます。タイトル・サブタイトルを個別に指定しない場合は
/// ページ種別（`PageVariant`）の固定文言を使用します。
///
/// # 使用例
///
/// ```rust
/// use xlsxtabs::{PageVariant, ReportBuilder};
///
/// # fn main() -> Result<(), xlsxtabs::ReportError> {
/// let report = ReportBuilder::new()
///     .for_output_path("public/koufu3.html")
///     .build()?;
/// assert_eq!(report.variant(), PageVariant::Chargers);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ReportBuilder {
    variant: PageVariant,
    title: Option<String>,
    subtitle: Option<String>,
    report_date: Option<NaiveDate>,
}

impl ReportBuilder {
    /// デフォルト設定でビルダーを生成
    ///
    /// - ページ種別: `PageVariant::Vehicles`
    /// - 集計日: 実行時のローカル日付
    pub fn new() -> Self {
        Self::default()
    }

    /// ページ種別を指定
    pub fn with_variant(mut self, variant: PageVariant) -> Self {
        self.variant = variant;
        self
    }

    /// 出力パスのファイル名からページ種別を判定して設定
    pub fn for_output_path<P: AsRef<Path>>(self, path: P) -> Self {
        let variant = PageVariant::from_output_path(path);
        self.with_variant(variant)
    }

    /// ページタイトルを上書き
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// サブタイトルを上書き
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// 説明欄に表示する集計日を指定
    pub fn with_report_date(mut self, date: NaiveDate) -> Self {
        self.report_date = Some(date);
        self
    }

    /// 設定を検証して`Report`を構築
    ///
    /// # 戻り値
    ///
    /// * `Ok(Report)` - 設定が有効な場合
    /// * `Err(ReportError::Config)` - タイトルが空の場合
    pub fn build(self) -> Result<Report, ReportError> {
        let title = self
            .title
            .unwrap_or_else(|| self.variant.title().to_string());
        if title.trim().is_empty() {
            return Err(ReportError::Config(
                "title must not be empty".to_string(),
            ));
        }

        let subtitle = self
            .subtitle
            .unwrap_or_else(|| self.variant.subtitle().to_string());
        let report_date = self
            .report_date
            .unwrap_or_else(|| Local::now().date_naive());

        Ok(Report {
            variant: self.variant,
            renderer: HtmlRenderer::new(RenderContext {
                title,
                subtitle,
                report_date,
            }),
        })
    }
}

/// ワークブックをHTMLレポートに変換する
///
/// `ReportBuilder`で構築します。読み込み → 描画 → 書き出しを順に行います。
#[derive(Debug, Clone)]
pub struct Report {
    variant: PageVariant,
    renderer: HtmlRenderer,
}

impl Report {
    /// ページ種別
    pub fn variant(&self) -> PageVariant {
        self.variant
    }

    /// 描画に使うタイトル・サブタイトル・集計日
    pub fn context(&self) -> &RenderContext {
        self.renderer.context()
    }

    /// 抽出済みのシートからHTML文書を生成
    pub fn render(&self, sheets: &[SheetData]) -> Result<String, ReportError> {
        self.renderer.render(sheets)
    }

    /// 抽出済みのシートをJSONとして出力（確認・デバッグ用）
    pub fn to_json(&self, sheets: &[SheetData]) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(sheets)?)
    }

    /// 入力ワークブックを読み込み、HTMLを出力先に書き出す
    ///
    /// 文書全体をメモリ上で組み立ててから書き出すため、読み込みや描画に
    /// 失敗した場合は出力先に何も書き込みません。既存のファイルは上書きします。
    ///
    /// # 戻り値
    ///
    /// * `Ok(Vec<SheetData>)` - 変換したシート（ワークブック内の順序）
    /// * `Err(ReportError)` - 読み込み・書き出しに失敗した場合
    pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        source: P,
        destination: Q,
    ) -> Result<Vec<SheetData>, ReportError> {
        let sheets = crate::parser::load(source)?;
        self.render_to_file(&sheets, destination)?;
        Ok(sheets)
    }

    /// 抽出済みのシートからHTMLを生成し、出力先に書き出す
    ///
    /// 文書全体を生成し終えてから出力先を開きます。
    pub fn render_to_file<P: AsRef<Path>>(
        &self,
        sheets: &[SheetData],
        destination: P,
    ) -> Result<(), ReportError> {
        let html = self.render(sheets)?;
        write_document(destination.as_ref(), &html)
    }
}

/// 文書を出力先に書き出す（作成・書き込み・フラッシュを1回の操作で行う）
pub(crate) fn write_document(path: &Path, html: &str) -> Result<(), ReportError> {
    let to_error = |source| ReportError::UnwritableDestination {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(html.as_bytes()).map_err(to_error)?;
    writer.flush().map_err(to_error)?;

    info!(path = %path.display(), bytes = html.len(), "wrote html report");
    Ok(())
}
