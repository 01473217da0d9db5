//! Formatter Module
//!
//! セル値・日付のフォーマット処理を提供するモジュール。

use calamine::Data;
use chrono::{Datelike, Duration, NaiveDate};

/// 空セル・欠損値の代わりに表示するプレースホルダー
pub const PLACEHOLDER: &str = "－";

/// 本文セルの値をフォーマット
///
/// 空セルはプレースホルダーに、数値は3桁区切りに変換します。
/// 文字列は数値として解釈できる場合のみ数値と同様にフォーマットし、
/// それ以外はそのまま返します。
pub fn format_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => PLACEHOLDER.to_string(),
        Data::Int(i) => format_number(*i as f64),
        Data::Float(f) => format_number(*f),
        Data::String(s) if s.is_empty() => PLACEHOLDER.to_string(),
        Data::String(s) => format_number_text(s),
        Data::Bool(b) => bool_text(*b),
        Data::DateTime(dt) => format_serial_date(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}

/// ヘッダー・行ラベル用のテキストを取得
///
/// 空セル（空文字列を含む）の場合は`None`を返します。
/// 数値は区切りなしで出力します（`2009.0` -> `"2009"`）。
pub fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty => return None,
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.is_finite() && f.fract() == 0.0 => format!("{:.0}", f),
        Data::Float(f) => f.to_string(),
        Data::String(s) => s.clone(),
        Data::Bool(b) => bool_text(*b),
        Data::DateTime(dt) => format_serial_date(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// 数値文字列をフォーマット
///
/// 既存の桁区切り（`,`）を取り除いてから実数として解釈します。
/// 解釈できない文字列とプレースホルダーはそのまま返します。
///
/// ```rust
/// use xlsxtabs::formatter::format_number_text;
///
/// assert_eq!(format_number_text("1234567"), "1,234,567");
/// assert_eq!(format_number_text("1,234.56"), "1,234.6");
/// assert_eq!(format_number_text("対象外"), "対象外");
/// ```
pub fn format_number_text(text: &str) -> String {
    if text.is_empty() || text == PLACEHOLDER {
        return PLACEHOLDER.to_string();
    }

    match text.replace(',', "").trim().parse::<f64>() {
        Ok(value) if value.is_finite() => format_number(value),
        _ => text.to_string(),
    }
}

/// 数値を3桁区切りでフォーマット
///
/// 整数値は小数点なし、それ以外は小数第1位までで出力します。
/// 丸めは2進表現の値に対して行い、ちょうど中間の値は偶数側に丸めます
/// （`0.25` -> `"0.2"`、`0.75` -> `"0.8"`）。
/// 有限でない値は`to_string()`にフォールバックします。
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let digits = if value.fract() == 0.0 {
        // -0.0 を "0" にする
        format!("{:.0}", value + 0.0)
    } else {
        format!("{:.1}", value)
    };

    group_digits(&digits)
}

/// 整数部に3桁ごとのカンマを挿入する
fn group_digits(digits: &str) -> String {
    let (sign, unsigned) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(pos) => unsigned.split_at(pos),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}{}", sign, grouped, frac_part)
}

fn bool_text(value: bool) -> String {
    if value { "True" } else { "False" }.to_string()
}

/// Excelのシリアル日付値を`YYYY-MM-DD HH:MM:SS`形式に変換（1900年エポック）
///
/// 時刻は秒単位に丸めます。変換できない値はシリアル値をそのまま文字列化します。
fn format_serial_date(serial_value: f64) -> String {
    let seconds = (serial_value * SECONDS_PER_DAY).round();
    if !seconds.is_finite() {
        return serial_value.to_string();
    }

    // 1899-12-30起算（Excelの1900年うるう年バグを吸収する基準日）
    let datetime = NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|epoch| epoch.and_hms_opt(0, 0, 0))
        .and_then(|epoch| {
            Duration::try_seconds(seconds as i64).and_then(|d| epoch.checked_add_signed(d))
        });

    match datetime {
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => serial_value.to_string(),
    }
}

const SECONDS_PER_DAY: f64 = 86_400.0;

/// 日付を日本語形式でフォーマット（月・日はゼロ埋めなし）
///
/// 例: `2025年11月21日`
pub fn format_japanese_date(date: NaiveDate) -> String {
    date.format("%Y年%-m月%-d日").to_string()
}

/// 年度ラベル
///
/// 例: `2025年度`
pub fn fiscal_year_label(date: NaiveDate) -> String {
    format!("{}年度", date.year())
}
