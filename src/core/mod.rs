// コアレイヤー - 基盤となるトレイト、型、エラー定義
// 他のレイヤーから参照される基本的な抽象化を提供

pub mod error;
pub mod static_di;
pub mod traits;
pub mod types;

// 公開API
pub use error::{MotorcycleError, MotorcycleResult};
pub use static_di::{
    DummyEngineProvider, EngineProvider, StandardEngineProvider, StaticMotorcycleFactory,
};
pub use traits::{EngineBackend, MockEngineBackend};
pub use types::ShiftCommand;
