use super::config::EngineConfig;
use crate::core::EngineBackend;

/// ギアカウンタを持つ実エンジン
///
/// 上限・下限は設けない。0 未満へのシフトダウンも許容し、
/// `i64` の端を越えた場合はラップアラウンドする。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardEngine {
    current_gear: i64,
}

impl StandardEngine {
    /// ギア 1 から始まるエンジンを作成
    pub fn new() -> Self {
        Self::from_config(&EngineConfig::default())
    }

    /// 設定の初期ギアから始まるエンジンを作成
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            current_gear: config.initial_gear(),
        }
    }
}

impl Default for StandardEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineBackend for StandardEngine {
    fn current_gear(&self) -> i64 {
        self.current_gear
    }

    fn shift_up(&mut self) {
        self.current_gear = self.current_gear.wrapping_add(1);
        tracing::debug!(gear = self.current_gear, "shifted up");
    }

    fn shift_down(&mut self) {
        self.current_gear = self.current_gear.wrapping_sub(1);
        tracing::debug!(gear = self.current_gear, "shifted down");
    }
}
