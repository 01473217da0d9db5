//! xlsxtabs CLI
//!
//! 使い方:
//!
//! ```text
//! xlsxtabs <excel_file> <output_file>
//! ```

use std::path::Path;
use std::process;
use tracing_subscriber::{fmt, EnvFilter};
use xlsxtabs::{load, ReportBuilder, ReportError};

const PROGRAM: &str = "xlsxtabs";

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        print_usage();
        process::exit(1);
    }

    let source = Path::new(&args[1]);
    let destination = Path::new(&args[2]);

    // ファイル存在チェック（抽出前）
    if !source.exists() {
        println!("❌ エラー: ファイルが見つかりません: {}", source.display());
        println!("   Error: File not found: {}", source.display());
        process::exit(1);
    }

    if let Err(e) = run(source, destination) {
        handle_error(e);
        process::exit(1);
    }
}

/// ログはstderrへ（`RUST_LOG`で調整、既定は`warn`）
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_usage() {
    println!("使い方 (Usage):");
    println!("  {} <excel_file> <output_file>", PROGRAM);
    println!("\n例 (Examples):");
    println!("  {} koufu_data.xlsx koufu.html", PROGRAM);
    println!("  {} koufu2_data.xlsx koufu2.html", PROGRAM);
    println!("  {} koufu3_data.xlsx koufu3.html", PROGRAM);
}

fn run(source: &Path, destination: &Path) -> Result<(), ReportError> {
    // 出力ファイル名からページタイトルを決定
    let report = ReportBuilder::new().for_output_path(destination).build()?;

    println!("📖 エクセルファイルを読み込んでいます: {}", source.display());
    println!("   Reading Excel file: {}", source.display());

    let sheets = load(source)?;

    println!("📊 {}個のシートを読み込みました", sheets.len());
    println!("   Loaded {} sheets", sheets.len());
    for sheet in &sheets {
        println!("   - {}", sheet.name);
    }

    println!("\n🔨 HTMLを生成しています...");
    println!("   Generating HTML...");
    report.render_to_file(&sheets, destination)?;

    println!("✅ HTMLファイルを生成しました: {}", destination.display());
    println!("   Generated HTML file: {}", destination.display());
    println!("\n✨ 完了しました!");
    println!("   Done!");
    Ok(())
}

fn handle_error(error: ReportError) {
    match error {
        ReportError::FileNotFound(path) => {
            println!("❌ エラー: ファイルが見つかりません: {}", path.display());
            println!("   Error: File not found: {}", path.display());
        }
        ReportError::UnreadableWorkbook { path, source } => {
            println!("❌ エラー: エクセルファイルを読み込めません: {}", path.display());
            println!("   Error: Failed to read workbook: {} ({})", path.display(), source);
        }
        ReportError::UnwritableDestination { path, source } => {
            println!("❌ エラー: HTMLファイルを書き込めません: {}", path.display());
            println!("   Error: Failed to write: {} ({})", path.display(), source);
        }
        other => {
            println!("❌ エラー: {}", other);
            println!("   Error: {}", other);
        }
    }
}
