// テストユーティリティとモック実装
// 統合テスト間で共有するフィクスチャ

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;
