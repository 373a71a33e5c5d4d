// エンジン層 - EngineBackend の具象実装と構築パラメータ

pub mod config;
pub mod standard;
pub mod test_mocks;

// 公開API
pub use config::EngineConfig;
pub use standard::StandardEngine;
pub use test_mocks::MockEngine;
