//! Garoo 管理ツール（CLI）
//!
//! ワーカー一覧の取得・検索・詳細表示・履歴書PDF出力と、画像ギャラリー。

pub mod browse;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod provider;
pub mod store;
pub mod view;
