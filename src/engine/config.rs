// エンジン構築パラメータ

/// 標準エンジンの初期ギア
pub const DEFAULT_INITIAL_GEAR: i64 = 1;

/// ダミーエンジンが返す固定ギア
pub const DEFAULT_FIXED_GEAR: i64 = 300;

/// エンジン生成時の設定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    initial_gear: i64,
    fixed_gear: i64,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_gear(mut self, initial_gear: i64) -> Self {
        self.initial_gear = initial_gear;
        self
    }

    pub fn with_fixed_gear(mut self, fixed_gear: i64) -> Self {
        self.fixed_gear = fixed_gear;
        self
    }

    /// `StandardEngine` の開始ギア
    pub fn initial_gear(&self) -> i64 {
        self.initial_gear
    }

    /// `MockEngine` が観測値として返すギア
    pub fn fixed_gear(&self) -> i64 {
        self.fixed_gear
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_gear: DEFAULT_INITIAL_GEAR,
            fixed_gear: DEFAULT_FIXED_GEAR,
        }
    }
}
