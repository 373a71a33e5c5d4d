// 統合テスト用のモック実装とヘルパー

use motorcycle_di::{EngineBackend, MockEngine, Motorcycle, ShiftCommand};

/// 毎回新しいモックと対象を作る（テスト間で状態を共有しない）
pub fn fresh_subject() -> Motorcycle<MockEngine> {
    Motorcycle::new(MockEngine::new())
}

/// 受け取った操作を順番に記録するエンジン
#[derive(Debug, Default)]
pub struct RecordingEngine {
    pub gear: i64,
    pub calls: Vec<ShiftCommand>,
}

impl EngineBackend for RecordingEngine {
    fn current_gear(&self) -> i64 {
        self.gear
    }

    fn shift_up(&mut self) {
        self.calls.push(ShiftCommand::Up);
    }

    fn shift_down(&mut self) {
        self.calls.push(ShiftCommand::Down);
    }
}
