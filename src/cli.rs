use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "garoo-admin")]
#[command(about = "Administración de Garoo: galería y reclutamiento", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// ワーカーデータファイル（省略時は設定の data_file）
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 取得元からワーカー一覧を取得してデータファイルを置き換える
    Fetch {
        /// 取得元（URL / JSON / xlsx・ods）。省略時は設定のWebhook
        #[arg(short, long)]
        source: Option<String>,

        /// 保存先（省略時はデータファイル）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// ワーカー一覧を表示
    List {
        /// 検索語（氏名・職種・国籍など）
        #[arg(short, long)]
        search: Option<String>,

        /// サーバー応答（生JSON）を表示
        #[arg(long)]
        raw: bool,
    },

    /// ワーカー1件の詳細を表示
    Show {
        /// 行番号（1始まり）・id・氏名
        #[arg(required = true)]
        selector: String,

        /// 行番号を数える前に絞り込む検索語
        #[arg(short, long)]
        search: Option<String>,
    },

    /// 履歴書PDFを出力
    Export {
        /// 行番号（1始まり）・id・氏名
        #[arg(required_unless_present = "all")]
        selector: Option<String>,

        /// 絞り込み結果すべてを出力
        #[arg(long, conflicts_with = "selector")]
        all: bool,

        /// 検索語
        #[arg(short, long)]
        search: Option<String>,

        /// 出力ディレクトリ（省略時は設定の output_dir）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 対話式で検索・詳細表示・PDF出力
    Browse {
        /// 出力ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 画像ギャラリーを表示
    Gallery {
        /// 指定番号（1始まり）の画像を開く
        #[arg(long)]
        open: Option<usize>,
    },

    /// 設定
    Config {
        /// Webhook URLを設定
        #[arg(long)]
        set_webhook_url: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
