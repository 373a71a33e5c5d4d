// テスト用のエンジンモック実装

use super::config::DEFAULT_FIXED_GEAR;
use crate::core::EngineBackend;

/// 呼び出しを記録するだけのテストダブル
///
/// `current_gear` は固定値で、シフト操作では変化しない。
/// テストはフラグを見て「操作が転送されたか」を確認する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockEngine {
    current_gear: i64,
    pub did_shift_up: bool,
    pub did_shift_down: bool,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::with_gear(DEFAULT_FIXED_GEAR)
    }

    /// 任意の固定ギアを返すモックを作成
    pub fn with_gear(current_gear: i64) -> Self {
        Self {
            current_gear,
            did_shift_up: false,
            did_shift_down: false,
        }
    }
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineBackend for MockEngine {
    fn current_gear(&self) -> i64 {
        self.current_gear
    }

    fn shift_up(&mut self) {
        self.did_shift_up = true;
    }

    fn shift_down(&mut self) {
        self.did_shift_down = true;
    }
}
