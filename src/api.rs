//! Public API Types
//!
//! 公開APIで使用する列挙型を定義するモジュール。

use serde::Serialize;
use std::path::Path;

/// 全ページ共通のページタイトル
pub const PAGE_TITLE: &str = "都道府県別補助金交付状況";

/// 出力ページの種類
///
/// 出力ファイル名に含まれる断片によって決まる3種類のページです。
/// ページごとにサブタイトルと、相互ナビゲーションで他の2ページへ張る
/// リンクが固定されています。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[non_exhaustive]
pub enum PageVariant {
    /// EV・PHEV・FCV・原付EV（デフォルト、`koufu.html`）
    #[default]
    Vehicles,

    /// 外部給電器（V2L）･V2H充放電設備（`koufu2.html`）
    PowerSupply,

    /// 充電設備（`koufu3.html`）
    Chargers,
}

/// 相互ナビゲーションのリンク
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// リンク先ファイル名
    pub href: &'static str,
    /// 表示テキスト
    pub label: &'static str,
}

impl PageVariant {
    /// 全ページ（相互ナビゲーションの表示順）
    pub const ALL: [PageVariant; 3] = [
        PageVariant::Vehicles,
        PageVariant::PowerSupply,
        PageVariant::Chargers,
    ];

    /// 出力ファイル名の断片とページの対応表
    ///
    /// 先頭から順に照合し、最初に一致したものを採用します。
    /// どれにも一致しない場合は`Vehicles`になります。
    const OUTPUT_FRAGMENTS: [(&'static str, PageVariant); 2] = [
        ("koufu2", PageVariant::PowerSupply),
        ("koufu3", PageVariant::Chargers),
    ];

    /// 出力パスのファイル名部分からページを判定
    ///
    /// # 使用例
    ///
    /// ```rust
    /// use xlsxtabs::PageVariant;
    ///
    /// assert_eq!(PageVariant::from_output_path("out/koufu2.html"), PageVariant::PowerSupply);
    /// assert_eq!(PageVariant::from_output_path("report.html"), PageVariant::Vehicles);
    /// ```
    pub fn from_output_path<P: AsRef<Path>>(path: P) -> Self {
        let file_name = path
            .as_ref()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::OUTPUT_FRAGMENTS
            .iter()
            .find(|(fragment, _)| file_name.contains(fragment))
            .map(|(_, variant)| *variant)
            .unwrap_or_default()
    }

    /// ページタイトル
    pub fn title(&self) -> &'static str {
        PAGE_TITLE
    }

    /// ページのサブタイトル（対象品目）
    pub fn subtitle(&self) -> &'static str {
        self.link().label
    }

    /// 公開時のファイル名
    pub fn file_name(&self) -> &'static str {
        self.link().href
    }

    /// このページへのリンク
    pub fn link(&self) -> NavLink {
        match self {
            PageVariant::Vehicles => NavLink {
                href: "koufu.html",
                label: "EV・PHEV・FCV・原付EV",
            },
            PageVariant::PowerSupply => NavLink {
                href: "koufu2.html",
                label: "外部給電器（V2L）･V2H充放電設備",
            },
            PageVariant::Chargers => NavLink {
                href: "koufu3.html",
                label: "充電設備",
            },
        }
    }

    /// 相互ナビゲーションで表示する他の2ページへのリンク
    pub fn sibling_links(&self) -> Vec<NavLink> {
        let order: [PageVariant; 2] = match self {
            PageVariant::Vehicles => [PageVariant::Chargers, PageVariant::PowerSupply],
            PageVariant::PowerSupply => [PageVariant::Vehicles, PageVariant::Chargers],
            PageVariant::Chargers => [PageVariant::Vehicles, PageVariant::PowerSupply],
        };
        order.iter().map(PageVariant::link).collect()
    }
}
