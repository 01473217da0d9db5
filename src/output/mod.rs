//! Output Module
//!
//! タブ付きHTMLレポートの生成を提供するモジュール。
//! スタイルシートとスクリプトは文書に直接埋め込み、外部アセットには依存しません。

mod assets;
mod html;

pub use html::{HtmlRenderer, RenderContext};
