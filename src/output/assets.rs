//! Static Assets
//!
//! 出力HTMLに埋め込むスタイルシートとスクリプト。

/// 埋め込みスタイルシート
///
/// 固定ヘッダー行・固定1列目・縞模様・ホバー・集計行/集計列の強調と、
/// 768px / 480pxのブレークポイントを含みます。
pub(crate) const STYLESHEET: &str = r#"        * {
            margin: 0;
            padding: 0;
            box-sizing: border-box;
        }

        body {
            font-family: 'Hiragino Sans', 'Hiragino Kaku Gothic ProN', 'Noto Sans JP', 'Yu Gothic', 'Meiryo', sans-serif;
            line-height: 1.6;
            color: #333;
            background-color: #f5f5f5;
            padding: 20px;
            scroll-behavior: smooth;
        }

        .container {
            max-width: 1400px;
            margin: 0 auto;
            background-color: white;
            padding: 30px;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }

        .main-nav {
            text-align: center;
            padding: 5px 0;
            margin-bottom: 15px;
            font-size: 11px;
            color: #666;
        }

        .main-nav a {
            color: #666;
            text-decoration: none;
            margin: 0 10px;
        }

        .main-nav a:hover {
            color: #0066cc;
            text-decoration: underline;
        }

        h1 {
            color: #0066cc;
            margin-bottom: 10px;
            font-size: 28px;
            text-align: left;
        }

        .subtitle {
            text-align: left;
            color: #666;
            margin-bottom: 20px;
            font-size: 16px;
        }

        .cross-nav {
            text-align: left;
            padding: 10px;
            background-color: #f0f0f0;
            margin-bottom: 20px;
            border-radius: 4px;
        }

        .cross-nav a {
            color: #0066cc;
            text-decoration: none;
            margin: 0 15px;
            font-size: 14px;
        }

        .cross-nav a:hover {
            text-decoration: underline;
        }

        .info-section {
            background-color: #e8f4f8;
            padding: 15px;
            margin-bottom: 20px;
            border-left: 4px solid #0066cc;
            font-size: 14px;
        }

        .info-section p {
            margin: 5px 0;
        }

        .tabs {
            display: flex;
            gap: 5px;
            margin-bottom: 20px;
            border-bottom: 2px solid #0066cc;
        }

        .tab {
            padding: 10px 20px;
            background-color: #f0f0f0;
            border: none;
            cursor: pointer;
            font-size: 16px;
            transition: all 0.3s;
            border-radius: 4px 4px 0 0;
        }

        .tab:hover {
            background-color: #e0e0e0;
        }

        .tab.active {
            background-color: #0066cc;
            color: white;
        }

        .tab-content {
            display: none;
        }

        .tab-content.active {
            display: block;
        }

        .table-wrapper {
            overflow-x: auto;
            overflow-y: auto;
            max-height: 600px;
            margin-top: 20px;
            border: 1px solid #ddd;
            border-radius: 4px;
        }

        table {
            width: 100%;
            border-collapse: collapse;
            font-size: 14px;
        }

        th, td {
            padding: 12px 8px;
            text-align: right;
            border: 1px solid #ddd;
        }

        th {
            background-color: #0066cc;
            color: white;
            font-weight: bold;
            position: sticky;
            top: 0;
            z-index: 10;
            text-align: center;
        }

        th:first-child, td:first-child {
            text-align: left;
            position: sticky;
            left: 0;
            background-color: white;
            z-index: 5;
        }

        th:first-child {
            z-index: 15;
            background-color: #0066cc;
        }

        tr:nth-child(even) {
            background-color: #f9f9f9;
        }

        tr:hover {
            background-color: #f0f8ff;
        }

        /* 総計行 */
        tr.total-row {
            background-color: #d4edda !important;
            font-weight: bold;
            border-top: 2px solid #28a745;
            border-bottom: 2px solid #28a745;
        }

        tr.total-row td {
            color: #000;
        }

        /* 計列 */
        th.total-col {
            background-color: #0066cc;
            color: white;
            border-left: 2px solid #0066cc;
            border-right: 2px solid #0066cc;
        }

        td.total-col {
            background-color: #cce5ff;
            font-weight: bold;
            border-left: 2px solid #0066cc;
            border-right: 2px solid #0066cc;
        }

        /* 総計行と計列の交差セル */
        tr.total-row td.total-col {
            background-color: #0066cc;
            color: white;
        }

        @media (max-width: 768px) {
            body {
                padding: 10px;
            }

            .container {
                padding: 15px;
            }

            h1 {
                font-size: 22px;
            }

            table {
                font-size: 12px;
            }

            th, td {
                padding: 8px 4px;
            }
        }

        @media (max-width: 480px) {
            table {
                font-size: 11px;
            }

            th, td {
                padding: 6px 3px;
            }
        }
"#;

/// 固定のトップナビゲーション
pub(crate) const MAIN_NAV: &str = r#"        <div class="main-nav">
            <a href="https://www.cev-pc.or.jp/">HOME</a> |
            <a href="/tokei/hoyuudaisu.html">EV等 保有台数統計</a> |
            <a href="/tokei/hanbaidaisu.html">EV等 販売台数統計</a>
        </div>
"#;

/// タブ切り替え・集計列へのスクロール・相互ナビゲーションのスクリプト
///
/// `CROSS_NAV`（ページ判定表）はこの直前にJSONとして出力されます。
pub(crate) const SCRIPT: &str = r##"
            // タブ切り替え
            function showTab(evt, tabId) {
                var i, tabcontent, tabbuttons;

                tabcontent = document.getElementsByClassName("tab-content");
                for (i = 0; i < tabcontent.length; i++) {
                    tabcontent[i].classList.remove("active");
                }

                tabbuttons = document.getElementsByClassName("tab");
                for (i = 0; i < tabbuttons.length; i++) {
                    tabbuttons[i].classList.remove("active");
                }

                document.getElementById(tabId).classList.add("active");
                evt.currentTarget.classList.add("active");

                // 計列が見えるよう右端までスクロール
                setTimeout(function() {
                    var tableWrapper = document.querySelector("#" + tabId + " .table-wrapper");
                    if (tableWrapper) {
                        tableWrapper.scrollLeft = tableWrapper.scrollWidth;
                    }
                }, SCROLL_DELAY_MS);
            }

            window.addEventListener('load', function() {
                var firstTabContent = document.querySelector('.tab-content.active .table-wrapper');
                if (firstTabContent) {
                    firstTabContent.scrollLeft = firstTabContent.scrollWidth;
                }
            });

            // 相互ナビゲーション
            (function() {
                var currentPage = window.location.pathname;
                var crossNav = document.getElementById('cross-nav');
                if (!crossNav) {
                    return;
                }
                for (var i = 0; i < CROSS_NAV.length; i++) {
                    var entry = CROSS_NAV[i];
                    var matched = currentPage.indexOf(entry.fragment) !== -1 ||
                        (entry.directoryIndex && currentPage.slice(-1) === '/');
                    if (matched) {
                        crossNav.innerHTML = entry.links.map(function(link) {
                            return '<a href="' + link.href + '">' + link.label + '</a>';
                        }).join(' | ');
                        break;
                    }
                }
            })();
"##;
