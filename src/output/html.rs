//! HTML Renderer
//!
//! 抽出済みのシートからタブ付きHTMLレポートを生成します。

use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

use super::assets::{MAIN_NAV, SCRIPT, STYLESHEET};
use crate::api::{NavLink, PageVariant};
use crate::error::ReportError;
use crate::formatter::{fiscal_year_label, format_japanese_date};
use crate::types::SheetData;

/// 集計行の行ラベル
const TOTAL_ROW_LABEL: &str = "総計";

/// 行ラベル列のヘッダー
const LABEL_HEADER: &str = "都道府県";

/// タブ切り替え後、計列までスクロールするまでの待ち時間（ミリ秒）
const SCROLL_DELAY_MS: u32 = 100;

/// 集計行のクラス
const TOTAL_ROW_CLASS: &str = "total-row";

/// レンダリング時に埋め込む文書情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// ページタイトル（`<title>`と`<h1>`）
    pub title: String,
    /// サブタイトル
    pub subtitle: String,
    /// 説明欄に表示する集計日
    pub report_date: NaiveDate,
}

impl RenderContext {
    /// ページ種別からコンテキストを生成
    pub fn for_variant(variant: PageVariant, report_date: NaiveDate) -> Self {
        Self {
            title: variant.title().to_string(),
            subtitle: variant.subtitle().to_string(),
            report_date,
        }
    }
}

/// 相互ナビゲーションの判定表の1エントリ
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CrossNavEntry {
    /// 現在のパスに含まれていれば一致とみなすファイル名
    fragment: &'static str,
    /// パスが`/`で終わる場合にも一致とみなすか
    directory_index: bool,
    /// 表示する他ページへのリンク
    links: Vec<NavLink>,
}

/// 相互ナビゲーションの判定表をJSONで生成
///
/// `</`はスクリプト要素を閉じないようエスケープします。
fn cross_nav_json() -> Result<String, ReportError> {
    let entries: Vec<CrossNavEntry> = PageVariant::ALL
        .iter()
        .map(|variant| CrossNavEntry {
            fragment: variant.file_name(),
            directory_index: *variant == PageVariant::default(),
            links: variant.sibling_links(),
        })
        .collect();

    Ok(serde_json::to_string(&entries)?.replace("</", "<\\/"))
}

/// HTMLの特殊文字をエスケープ
pub(crate) fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 列位置に応じたクラス属性（最後の列だけ集計列）
fn column_class(index: usize, len: usize) -> &'static str {
    if index + 1 == len {
        " class=\"total-col\""
    } else {
        ""
    }
}

/// HTMLレンダラー
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    context: RenderContext,
}

impl HtmlRenderer {
    /// 新しいレンダラーを生成
    pub fn new(context: RenderContext) -> Self {
        Self { context }
    }

    /// レンダリングに使うコンテキスト
    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    /// HTML文書全体を文字列として生成
    pub fn render(&self, sheets: &[SheetData]) -> Result<String, ReportError> {
        let mut buffer = Vec::new();
        self.render_to_writer(sheets, &mut buffer)?;

        String::from_utf8(buffer).map_err(|e| {
            ReportError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }

    /// HTML文書全体をライターに出力
    ///
    /// # 出力順
    ///
    /// 1. 文書ヘッダー（スタイルシート）
    /// 2. トップナビゲーション・タイトル・サブタイトル・相互ナビゲーション枠
    /// 3. 説明欄
    /// 4. タブボタン（先頭がactive）
    /// 5. シートごとのパネル（先頭がactive）
    /// 6. スクリプト
    pub fn render_to_writer<W: Write>(
        &self,
        sheets: &[SheetData],
        writer: &mut W,
    ) -> Result<(), ReportError> {
        self.write_head(writer)?;
        self.write_info_section(writer)?;
        self.write_tabs(sheets, writer)?;

        for (index, sheet) in sheets.iter().enumerate() {
            self.write_panel(sheet, index == 0, writer)?;
        }

        self.write_script(writer)?;

        writeln!(writer, "    </div>")?;
        writeln!(writer, "</body>")?;
        writeln!(writer, "</html>")?;
        writer.flush()?;
        Ok(())
    }

    fn write_head<W: Write>(&self, writer: &mut W) -> Result<(), ReportError> {
        let title = escape_html(&self.context.title);
        let subtitle = escape_html(&self.context.subtitle);

        writeln!(writer, "<!DOCTYPE html>")?;
        writeln!(writer, "<html lang=\"ja\">")?;
        writeln!(writer, "<head>")?;
        writeln!(writer, "    <meta charset=\"UTF-8\">")?;
        writeln!(
            writer,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(writer, "    <title>{}</title>", title)?;
        writeln!(writer, "    <style>")?;
        write!(writer, "{}", STYLESHEET)?;
        writeln!(writer, "    </style>")?;
        writeln!(writer, "</head>")?;
        writeln!(writer, "<body>")?;
        writeln!(writer, "    <div class=\"container\">")?;
        write!(writer, "{}", MAIN_NAV)?;
        writeln!(writer)?;
        writeln!(writer, "        <h1>{}</h1>", title)?;
        writeln!(writer, "        <div class=\"subtitle\">{}</div>", subtitle)?;
        writeln!(writer)?;
        writeln!(writer, "        <div class=\"cross-nav\" id=\"cross-nav\"></div>")?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_info_section<W: Write>(&self, writer: &mut W) -> Result<(), ReportError> {
        let date = format_japanese_date(self.context.report_date);
        let fiscal_year = fiscal_year_label(self.context.report_date);

        let lines = [
            format!("○ {} 次世代自動車振興センター", date),
            format!("○ {}は {} までの集計です", fiscal_year, date),
            format!(
                "※{}の補助金交付台数等については、現在審査中のものもあるため、{}現在の数値であり、第6次公募締切（予定）までの最終的な数値ではありません。",
                fiscal_year, date
            ),
            "※ここで使用されている数字について".to_string(),
            "※※FCV（燃料電池自動車）の交付台数は2014年からの集計です".to_string(),
            "※※外部給電器と原付EVの交付台数は2020年からの集計です".to_string(),
            "※※V2H充放電設備の交付基数は2020年からの集計です".to_string(),
        ];

        writeln!(writer, "        <div class=\"info-section\">")?;
        for line in &lines {
            writeln!(writer, "            <p>{}</p>", line)?;
        }
        writeln!(writer, "        </div>")?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_tabs<W: Write>(&self, sheets: &[SheetData], writer: &mut W) -> Result<(), ReportError> {
        writeln!(writer, "        <div class=\"tabs\">")?;
        for (index, sheet) in sheets.iter().enumerate() {
            let class = if index == 0 { "tab active" } else { "tab" };
            writeln!(
                writer,
                "            <button class=\"{}\" onclick=\"showTab(event, '{}')\">{}</button>",
                class,
                sheet.anchor,
                escape_html(&sheet.name)
            )?;
        }
        writeln!(writer, "        </div>")?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_panel<W: Write>(
        &self,
        sheet: &SheetData,
        active: bool,
        writer: &mut W,
    ) -> Result<(), ReportError> {
        let class = if active {
            "tab-content active"
        } else {
            "tab-content"
        };
        let name = escape_html(&sheet.name);

        writeln!(writer, "        <div id=\"{}\" class=\"{}\">", sheet.anchor, class)?;
        match (sheet.periods().first(), sheet.periods().last()) {
            (Some(first), Some(last)) => writeln!(
                writer,
                "            <h2>{} 都道府県別補助金交付台数一覧表（{}～{}年度）</h2>",
                name,
                escape_html(first),
                escape_html(last)
            )?,
            _ => writeln!(writer, "            <h2>{} 都道府県別補助金交付台数一覧表</h2>", name)?,
        }
        writeln!(writer, "            <div class=\"table-wrapper\">")?;
        writeln!(writer, "                <table>")?;

        // ヘッダー行
        writeln!(writer, "                    <thead>")?;
        writeln!(writer, "                        <tr>")?;
        writeln!(writer, "                            <th>{}</th>", LABEL_HEADER)?;
        for (index, period) in sheet.periods().iter().enumerate() {
            writeln!(
                writer,
                "                            <th{}>{}</th>",
                column_class(index, sheet.periods().len()),
                escape_html(period)
            )?;
        }
        writeln!(writer, "                        </tr>")?;
        writeln!(writer, "                    </thead>")?;

        // 本文
        writeln!(writer, "                    <tbody>")?;
        for row in sheet.rows() {
            Self::write_row(writer, None, &row.label, &row.values)?;
        }
        if let Some(total) = sheet.aggregate_row() {
            Self::write_row(writer, Some(TOTAL_ROW_CLASS), TOTAL_ROW_LABEL, total)?;
        }
        writeln!(writer, "                    </tbody>")?;

        writeln!(writer, "                </table>")?;
        writeln!(writer, "            </div>")?;
        writeln!(writer, "        </div>")?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_row<W: Write>(
        writer: &mut W,
        row_class: Option<&str>,
        label: &str,
        values: &[String],
    ) -> Result<(), ReportError> {
        match row_class {
            Some(class) => writeln!(writer, "                        <tr class=\"{}\">", class)?,
            None => writeln!(writer, "                        <tr>")?,
        }
        writeln!(writer, "                            <td>{}</td>", escape_html(label))?;
        for (index, value) in values.iter().enumerate() {
            writeln!(
                writer,
                "                            <td{}>{}</td>",
                column_class(index, values.len()),
                escape_html(value)
            )?;
        }
        writeln!(writer, "                        </tr>")?;
        Ok(())
    }

    fn write_script<W: Write>(&self, writer: &mut W) -> Result<(), ReportError> {
        writeln!(writer, "        <script>")?;
        writeln!(writer, "            var CROSS_NAV = {};", cross_nav_json()?)?;
        writeln!(writer, "            var SCROLL_DELAY_MS = {};", SCROLL_DELAY_MS)?;
        write!(writer, "{}", SCRIPT)?;
        writeln!(writer, "        </script>")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> RenderContext {
        RenderContext::for_variant(
            PageVariant::Vehicles,
            NaiveDate::from_ymd_opt(2025, 11, 21).unwrap(),
        )
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn hokkaido_sheet() -> SheetData {
        let mut sheet = SheetData::new(0, "EV");
        sheet.set_periods(strings(&["2009", "2010", "計"]));
        sheet.insert_row("北海道".to_string(), strings(&["596", "654", "1,250"]));
        sheet.set_aggregate_row(strings(&["596", "654", "1,250"]));
        sheet
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("北海道"), "北海道");
        assert_eq!(
            escape_html("<a href=\"x\">'&'</a>"),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_column_class() {
        assert_eq!(column_class(0, 3), "");
        assert_eq!(column_class(2, 3), " class=\"total-col\"");
        assert_eq!(column_class(0, 1), " class=\"total-col\"");
    }

    #[test]
    fn test_render_total_row_and_column() {
        let html = HtmlRenderer::new(context())
            .render(&[hokkaido_sheet()])
            .unwrap();

        assert!(html.contains("<th class=\"total-col\">計</th>"));
        assert!(html.contains("<th>2009</th>"));
        assert!(html.contains("<td>北海道</td>"));
        assert!(html.contains("<td class=\"total-col\">1,250</td>"));
        assert!(html.contains("<tr class=\"total-row\">"));
        assert!(html.contains("<td>総計</td>"));
        assert!(html.contains("tr.total-row td.total-col"));
        // 集計列は行ごとに1つずつ（本文1行 + 総計行）
        assert_eq!(html.matches("<td class=\"total-col\">").count(), 2);
    }

    #[test]
    fn test_total_column_is_positional() {
        let mut sheet = SheetData::new(0, "PHEV");
        sheet.set_periods(strings(&["2019", "2020"]));
        sheet.insert_row("青森県".to_string(), strings(&["1", "2"]));

        let html = HtmlRenderer::new(context()).render(&[sheet]).unwrap();
        assert!(html.contains("<th class=\"total-col\">2020</th>"));
        assert!(html.contains("<td class=\"total-col\">2</td>"));
        assert!(!html.contains("<tr class=\"total-row\">"));
    }

    #[test]
    fn test_render_tabs_in_order_first_active() {
        let mut second = hokkaido_sheet();
        second.name = "FCV".to_string();
        second.anchor = "sheet-2-fcv".to_string();

        let html = HtmlRenderer::new(context())
            .render(&[hokkaido_sheet(), second])
            .unwrap();

        assert!(html.contains(
            "<button class=\"tab active\" onclick=\"showTab(event, 'sheet-1-ev')\">EV</button>"
        ));
        assert!(html.contains(
            "<button class=\"tab\" onclick=\"showTab(event, 'sheet-2-fcv')\">FCV</button>"
        ));
        assert!(html.contains("<div id=\"sheet-1-ev\" class=\"tab-content active\">"));
        assert!(html.contains("<div id=\"sheet-2-fcv\" class=\"tab-content\">"));

        let first = html.find("id=\"sheet-1-ev\"").unwrap();
        let second = html.find("id=\"sheet-2-fcv\"").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("tab-content active").count(), 1);
    }

    #[test]
    fn test_render_heading_with_period_range() {
        let html = HtmlRenderer::new(context())
            .render(&[hokkaido_sheet()])
            .unwrap();
        assert!(html.contains("<h2>EV 都道府県別補助金交付台数一覧表（2009～計年度）</h2>"));
    }

    #[test]
    fn test_render_empty_sheet() {
        let sheet = SheetData::new(0, "空");
        let html = HtmlRenderer::new(context()).render(&[sheet]).unwrap();

        assert!(html.contains("<h2>空 都道府県別補助金交付台数一覧表</h2>"));
        assert!(html.contains("<tbody>"));
    }

    #[test]
    fn test_render_info_section_dates() {
        let html = HtmlRenderer::new(context()).render(&[]).unwrap();

        assert!(html.contains("<p>○ 2025年11月21日 次世代自動車振興センター</p>"));
        assert!(html.contains("<p>○ 2025年度は 2025年11月21日 までの集計です</p>"));
        assert!(html.contains("※2025年度の補助金交付台数等については"));
    }

    #[test]
    fn test_render_document_shell() {
        let html = HtmlRenderer::new(context()).render(&[]).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>都道府県別補助金交付状況</title>"));
        assert!(html.contains("<div class=\"subtitle\">EV・PHEV・FCV・原付EV</div>"));
        assert!(html.contains("<div class=\"cross-nav\" id=\"cross-nav\"></div>"));
        assert!(html.contains("@media (max-width: 768px)"));
        assert!(html.contains("@media (max-width: 480px)"));
        assert!(html.contains("position: sticky"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_render_escapes_sheet_content() {
        let mut sheet = SheetData::new(0, "<b>EV</b>");
        sheet.set_periods(strings(&["2009"]));
        sheet.insert_row("A&B".to_string(), strings(&["<1>"]));

        let html = HtmlRenderer::new(context()).render(&[sheet]).unwrap();
        assert!(html.contains("&lt;b&gt;EV&lt;/b&gt;</button>"));
        assert!(html.contains("<td>A&amp;B</td>"));
        assert!(html.contains("<td class=\"total-col\">&lt;1&gt;</td>"));
        assert!(!html.contains("<b>EV</b>"));
    }

    #[test]
    fn test_cross_nav_json() {
        let json = cross_nav_json().unwrap();
        let entries: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entries = entries.as_array().unwrap();

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0]["fragment"], "koufu.html");
        assert_eq!(entries[0]["directoryIndex"], true);
        assert_eq!(entries[1]["fragment"], "koufu2.html");
        assert_eq!(entries[1]["directoryIndex"], false);
        assert_eq!(entries[1]["links"][0]["href"], "koufu.html");
        assert_eq!(entries[1]["links"][1]["href"], "koufu3.html");
        assert_eq!(entries[2]["links"][1]["label"], "外部給電器（V2L）･V2H充放電設備");
    }

    #[test]
    fn test_render_script() {
        let html = HtmlRenderer::new(context()).render(&[]).unwrap();

        assert!(html.contains("var CROSS_NAV = [{"));
        assert!(html.contains("var SCROLL_DELAY_MS = 100;"));
        assert!(html.contains("function showTab(evt, tabId)"));
        assert!(html.contains("window.addEventListener('load'"));
    }
}
