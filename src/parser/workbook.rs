//! Workbook Parser
//!
//! calamineのワークブックを開き、シートごとに`SheetData`を構築します。

use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::ReportError;
use crate::formatter::{cell_text, format_cell};
use crate::types::SheetData;

/// 集計行を示す行ラベル中の文字列
const TOTAL_MARKERS: [&str; 2] = ["総計", "合計"];

/// 行ラベルが集計行を示すかどうか
pub(crate) fn is_total_label(label: &str) -> bool {
    TOTAL_MARKERS.iter().any(|marker| label.contains(marker))
}

/// ワークブックパーサー
///
/// calamineのワークブックを保持します。パーサーがドロップされると
/// ファイルハンドルも解放されます。
pub struct WorkbookParser {
    /// 入力ファイルのパス（エラーメッセージ用）
    path: PathBuf,
    /// calamineのワークブック（xlsx/xlsm/xls/ods）
    workbook: Sheets<BufReader<File>>,
}

impl WorkbookParser {
    /// ワークブックを開く
    ///
    /// # 戻り値
    ///
    /// * `Ok(WorkbookParser)` - ワークブックの読み込みに成功した場合
    /// * `Err(ReportError::FileNotFound)` - ファイルが存在しない場合
    /// * `Err(ReportError::UnreadableWorkbook)` - スプレッドシートとして開けない場合
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ReportError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ReportError::FileNotFound(path.to_path_buf()));
        }

        let workbook =
            open_workbook_auto(path).map_err(|source| ReportError::UnreadableWorkbook {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            workbook,
        })
    }

    /// すべてのシート名を取得（ワークブック内の順序）
    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names().to_vec()
    }

    /// すべてのシートを順にパース
    pub fn parse_all(&mut self) -> Result<Vec<SheetData>, ReportError> {
        let names = self.sheet_names();
        let mut sheets = Vec::with_capacity(names.len());

        for (position, name) in names.iter().enumerate() {
            sheets.push(self.parse_sheet(position, name)?);
        }

        Ok(sheets)
    }

    /// シートをパースして`SheetData`を構築
    ///
    /// # 引数
    ///
    /// * `position` - シート位置（0始まり、アンカー生成用）
    /// * `sheet_name` - パースするシート名
    pub fn parse_sheet(
        &mut self,
        position: usize,
        sheet_name: &str,
    ) -> Result<SheetData, ReportError> {
        let range = self
            .workbook
            .worksheet_range(sheet_name)
            .map_err(|source| ReportError::UnreadableWorkbook {
                path: self.path.clone(),
                source,
            })?;

        let sheet = extract_sheet(position, sheet_name, &range);

        if sheet.periods().is_empty() || sheet.rows().is_empty() {
            warn!(
                sheet = sheet_name,
                periods = sheet.periods().len(),
                rows = sheet.rows().len(),
                "sheet has no periods or no data rows"
            );
        }

        Ok(sheet)
    }
}

/// セル範囲から`SheetData`を抽出
///
/// 座標はシートの絶対座標（0始まり）で扱います。範囲がA1から始まらない場合、
/// 範囲外のセルは空セルとみなします。
///
/// - ヘッダー: 1行目の2列目以降の空でないセル（空セルで打ち切らない）
/// - 本文: 2行目以降、1列目が空の行はスキップ
/// - 集計行: 行ラベルに「総計」「合計」を含む行（複数ある場合は最後の行）
pub(crate) fn extract_sheet(position: usize, sheet_name: &str, range: &Range<Data>) -> SheetData {
    let mut sheet = SheetData::new(position, sheet_name);

    let (last_row, last_col) = match range.end() {
        Some(end) if !range.is_empty() => end,
        _ => return sheet,
    };

    let cell = |row: u32, col: u32| range.get_value((row, col)).unwrap_or(&Data::Empty);

    // 1. ヘッダー行（期間ラベル）
    sheet.set_periods(
        (1..=last_col)
            .filter_map(|col| cell_text(cell(0, col)))
            .collect(),
    );

    // 2. 本文の行
    for row in 1..=last_row {
        let label = match cell_text(cell(row, 0)) {
            Some(label) => label,
            None => continue,
        };

        let values: Vec<String> = (1..=last_col).map(|col| format_cell(cell(row, col))).collect();

        // 3. 集計行の判定
        if is_total_label(&label) {
            if sheet.aggregate_row().is_some() {
                warn!(
                    sheet = sheet_name,
                    row = row + 1,
                    label = %label,
                    "multiple total rows found; the last one is used"
                );
            }
            sheet.set_aggregate_row(values);
        } else {
            sheet.insert_row(label, values);
        }
    }

    debug!(
        sheet = sheet_name,
        anchor = %sheet.anchor,
        periods = sheet.periods().len(),
        rows = sheet.rows().len(),
        has_total = sheet.aggregate_row().is_some(),
        "extracted sheet"
    );

    sheet
}

/// ワークブックを読み込み、全シートを抽出する
///
/// ワークブックのハンドルは、成功・失敗にかかわらず関数の終了時に解放されます。
///
/// ```rust,no_run
/// let sheets = xlsxtabs::load("koufu_data.xlsx")?;
/// for sheet in &sheets {
///     println!("{}: {} rows", sheet.name, sheet.rows().len());
/// }
/// # Ok::<(), xlsxtabs::ReportError>(())
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<SheetData>, ReportError> {
    let mut parser = WorkbookParser::open(path)?;
    parser.parse_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::PLACEHOLDER;

    fn range_from(rows: Vec<Vec<Data>>) -> Range<Data> {
        let height = rows.len() as u32;
        let width = rows.iter().map(Vec::len).max().unwrap_or(0) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in rows.into_iter().enumerate() {
            for (c, value) in row.into_iter().enumerate() {
                range.set_value((r as u32, c as u32), value);
            }
        }
        range
    }

    fn s(text: &str) -> Data {
        Data::String(text.to_string())
    }

    #[test]
    fn test_is_total_label() {
        assert!(is_total_label("総計"));
        assert!(is_total_label("合計"));
        assert!(is_total_label("全国合計"));
        assert!(!is_total_label("北海道"));
        assert!(!is_total_label("計"));
    }

    #[test]
    fn test_extract_sheet_basic() {
        let range = range_from(vec![
            vec![s("都道府県"), Data::Float(2009.0), Data::Float(2010.0), s("計")],
            vec![s("北海道"), Data::Float(596.0), Data::Float(654.0), Data::Float(1250.0)],
            vec![s("青森県"), Data::Empty, Data::Float(1234.56), Data::Float(1234.56)],
            vec![s("総計"), Data::Float(596.0), Data::Float(1888.56), Data::Float(2484.56)],
        ]);

        let sheet = extract_sheet(0, "EV", &range);

        assert_eq!(sheet.periods(), vec!["2009", "2010", "計"]);
        assert_eq!(sheet.rows().len(), 2);
        assert_eq!(
            sheet.row("北海道").unwrap(),
            &["596".to_string(), "654".to_string(), "1,250".to_string()]
        );
        assert_eq!(
            sheet.row("青森県").unwrap(),
            &[PLACEHOLDER.to_string(), "1,234.6".to_string(), "1,234.6".to_string()]
        );
        assert_eq!(
            sheet.aggregate_row().unwrap(),
            &["596".to_string(), "1,888.6".to_string(), "2,484.6".to_string()]
        );
        assert!(sheet.row("総計").is_none());
    }

    #[test]
    fn test_extract_sheet_skips_rows_without_label() {
        let range = range_from(vec![
            vec![s("都道府県"), Data::Float(2009.0)],
            vec![Data::Empty, Data::Float(1.0)],
            vec![s(""), Data::Float(2.0)],
            vec![s("岩手県"), Data::Float(3.0)],
        ]);

        let sheet = extract_sheet(0, "EV", &range);
        let labels: Vec<&str> = sheet.rows().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["岩手県"]);
    }

    #[test]
    fn test_extract_sheet_keeps_whitespace_label() {
        let range = range_from(vec![
            vec![s("都道府県"), Data::Float(2009.0)],
            vec![s(" "), Data::Float(5.0)],
            vec![s("岩手県"), Data::Float(3.0)],
        ]);

        let sheet = extract_sheet(0, "EV", &range);
        let labels: Vec<&str> = sheet.rows().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec![" ", "岩手県"]);
        assert_eq!(sheet.row(" ").unwrap(), &["5".to_string()]);
    }

    #[test]
    fn test_extract_sheet_header_does_not_stop_at_blank() {
        let range = range_from(vec![
            vec![s("都道府県"), Data::Float(2009.0), Data::Empty, s("計")],
            vec![s("北海道"), Data::Float(1.0), Data::Float(2.0), Data::Float(3.0)],
        ]);

        let sheet = extract_sheet(0, "EV", &range);
        assert_eq!(sheet.periods(), vec!["2009", "計"]);
        // 本文は列範囲全体を読む
        assert_eq!(sheet.row("北海道").unwrap().len(), 3);
    }

    #[test]
    fn test_extract_sheet_last_total_row_wins() {
        let range = range_from(vec![
            vec![s("都道府県"), Data::Float(2009.0)],
            vec![s("合計"), Data::Float(10.0)],
            vec![s("北海道"), Data::Float(3.0)],
            vec![s("総計"), Data::Float(20.0)],
        ]);

        let sheet = extract_sheet(0, "EV", &range);
        assert_eq!(sheet.aggregate_row().unwrap(), &["20".to_string()]);
        assert_eq!(sheet.rows().len(), 1);
    }

    #[test]
    fn test_extract_sheet_with_offset_range() {
        // B2から始まる範囲（A列・1行目は空）
        let mut range = Range::new((1, 1), (2, 2));
        range.set_value((1, 1), Data::Float(5.0));
        range.set_value((2, 2), Data::Float(6.0));

        let sheet = extract_sheet(0, "Offset", &range);
        assert!(sheet.periods().is_empty());
        assert!(sheet.rows().is_empty());
    }

    #[test]
    fn test_extract_sheet_empty_range() {
        let range: Range<Data> = Range::empty();
        let sheet = extract_sheet(2, "空", &range);

        assert!(sheet.is_empty());
        assert_eq!(sheet.anchor, "sheet-3");
    }

    #[test]
    fn test_open_missing_file() {
        let result = WorkbookParser::open("definitely/missing/koufu_data.xlsx");
        assert!(matches!(result, Err(ReportError::FileNotFound(_))));
    }
}
