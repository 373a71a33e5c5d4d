//! ファクトリーモジュール - 実行時にエンジン実装を選ぶ
//!
//! コンパイル時に型を固定する場合は `core::static_di` を使う。

pub mod engine_factory;

pub use engine_factory::{EngineFactory, AVAILABLE_ENGINES};
