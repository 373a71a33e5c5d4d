// エンジン能力のトレイト定義

use mockall::automock;

/// ギアを上げ下げできる装置の契約
///
/// `Motorcycle` はこのトレイトだけを知っていればよく、
/// 実エンジンかテストダブルかを区別しない。
/// ギアの範囲制約は定義しない（各実装が自分で決める）。
#[automock]
pub trait EngineBackend {
    /// 現在のギアを取得
    fn current_gear(&self) -> i64;

    /// ギアを一段上げる
    fn shift_up(&mut self);

    /// ギアを一段下げる
    fn shift_down(&mut self);
}

// 借用したエンジンをそのまま注入できるようにする
impl<E: EngineBackend + ?Sized> EngineBackend for &mut E {
    fn current_gear(&self) -> i64 {
        (**self).current_gear()
    }

    fn shift_up(&mut self) {
        (**self).shift_up()
    }

    fn shift_down(&mut self) {
        (**self).shift_down()
    }
}

// EngineBackend for Box<dyn EngineBackend>
impl<E: EngineBackend + ?Sized> EngineBackend for Box<E> {
    fn current_gear(&self) -> i64 {
        self.as_ref().current_gear()
    }

    fn shift_up(&mut self) {
        self.as_mut().shift_up()
    }

    fn shift_down(&mut self) {
        self.as_mut().shift_down()
    }
}
