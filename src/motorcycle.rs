//! エンジンを注入されるバイク本体
//!
//! `Motorcycle` は `EngineBackend` の具象型を知らない。
//! エンジンはコンストラクタで受け取り、以後差し替えない。

use crate::core::{EngineBackend, ShiftCommand};

/// エンジンへ操作を転送するだけの乗り物
///
/// 型パラメータで注入すれば静的ディスパッチ、
/// `Box<dyn EngineBackend>` を渡せば動的ディスパッチになる。
#[derive(Debug)]
pub struct Motorcycle<E: EngineBackend> {
    engine: E,
}

impl<E: EngineBackend> Motorcycle<E> {
    /// 新しいMotorcycleを作成（コンストラクタインジェクション）
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// ダッシュボード表示
    pub fn dashboard(&self) -> String {
        format!("Current gear {}", self.engine.current_gear())
    }

    /// シフトアップボタンが押された
    pub fn on_shift_up_requested(&mut self) {
        tracing::trace!("shift up requested");
        self.engine.shift_up();
    }

    /// シフトダウンボタンが押された
    pub fn on_shift_down_requested(&mut self) {
        tracing::trace!("shift down requested");
        self.engine.shift_down();
    }

    /// コマンドに対応する操作を転送
    pub fn apply(&mut self, command: ShiftCommand) {
        match command {
            ShiftCommand::Up => self.on_shift_up_requested(),
            ShiftCommand::Down => self.on_shift_down_requested(),
        }
    }

    /// 注入されたエンジンへの参照（検証用）
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// エンジンを取り出す
    pub fn into_engine(self) -> E {
        self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MockEngineBackend;
    use crate::engine::{MockEngine, StandardEngine};

    // 各テストで新しいモックと対象を作る
    fn subject() -> Motorcycle<MockEngine> {
        Motorcycle::new(MockEngine::new())
    }

    #[test]
    fn test_has_a_working_dashboard() {
        let subject = subject();
        assert_eq!(subject.dashboard(), "Current gear 300");
    }

    #[test]
    fn test_dashboard_reflects_injected_gear() {
        let subject = Motorcycle::new(MockEngine::with_gear(-4));
        assert_eq!(subject.dashboard(), "Current gear -4");
    }

    #[test]
    fn test_handle_an_up_shift() {
        let mut subject = subject();

        subject.on_shift_up_requested();

        assert!(subject.engine().did_shift_up);
        assert!(!subject.engine().did_shift_down);
    }

    #[test]
    fn test_handle_a_down_shift() {
        let mut subject = subject();

        subject.on_shift_down_requested();

        assert!(subject.engine().did_shift_down);
        assert!(!subject.engine().did_shift_up);
    }

    #[test]
    fn test_standard_engine_shift_sequence() {
        let mut subject = Motorcycle::new(StandardEngine::new());

        subject.on_shift_up_requested();
        subject.on_shift_up_requested();
        subject.on_shift_up_requested();
        subject.on_shift_down_requested();

        assert_eq!(subject.engine().current_gear(), 3);
        assert_eq!(subject.dashboard(), "Current gear 3");
    }

    #[test]
    fn test_apply_forwards_commands() {
        let mut subject = Motorcycle::new(StandardEngine::new());

        for command in [ShiftCommand::Down, ShiftCommand::Down, ShiftCommand::Up] {
            subject.apply(command);
        }

        assert_eq!(subject.into_engine().current_gear(), 0);
    }

    #[test]
    fn test_borrowed_engine_injection() {
        let mut engine = MockEngine::new();

        {
            let mut subject = Motorcycle::new(&mut engine);
            subject.on_shift_up_requested();
        }

        assert!(engine.did_shift_up);
        assert!(!engine.did_shift_down);
    }

    #[test]
    fn test_boxed_engine_injection() {
        let engine: Box<dyn EngineBackend> = Box::new(StandardEngine::new());
        let mut subject = Motorcycle::new(engine);

        subject.on_shift_up_requested();

        assert_eq!(subject.dashboard(), "Current gear 2");
    }

    #[test]
    fn test_shift_up_forwards_exactly_once() {
        let mut mock_engine = MockEngineBackend::new();
        mock_engine.expect_shift_up().times(1).return_const(());
        mock_engine.expect_shift_down().never();

        let mut subject = Motorcycle::new(mock_engine);
        subject.on_shift_up_requested();
    }

    #[test]
    fn test_shift_down_forwards_exactly_once() {
        let mut mock_engine = MockEngineBackend::new();
        mock_engine.expect_shift_down().times(1).return_const(());
        mock_engine.expect_shift_up().never();

        let mut subject = Motorcycle::new(mock_engine);
        subject.on_shift_down_requested();
    }

    #[test]
    fn test_dashboard_reads_gear_without_shifting() {
        let mut mock_engine = MockEngineBackend::new();
        mock_engine.expect_current_gear().times(2).return_const(12i64);
        mock_engine.expect_shift_up().never();
        mock_engine.expect_shift_down().never();

        let subject = Motorcycle::new(mock_engine);
        assert_eq!(subject.dashboard(), "Current gear 12");
        assert_eq!(subject.dashboard(), "Current gear 12");
    }
}
