//! EngineFactory - エンジン実装名から Box<dyn EngineBackend> を生成する Factory Pattern 実装

use crate::core::{EngineBackend, MotorcycleError, MotorcycleResult};
use crate::engine::{EngineConfig, MockEngine, StandardEngine};

/// 利用可能なエンジン実装名
pub const AVAILABLE_ENGINES: [&str; 2] = ["standard", "dummy"];

pub struct EngineFactory;

impl EngineFactory {
    pub fn new() -> Self {
        Self
    }

    /// 実装名に対応するエンジンを作成（動的ディスパッチ）
    pub fn create(
        &self,
        implementation: &str,
        config: &EngineConfig,
    ) -> MotorcycleResult<Box<dyn EngineBackend>> {
        match implementation {
            "standard" => Ok(Box::new(StandardEngine::from_config(config))),
            "dummy" => Ok(Box::new(MockEngine::with_gear(config.fixed_gear()))),
            _ => Err(MotorcycleError::unsupported_engine(
                implementation,
                &AVAILABLE_ENGINES,
            )),
        }
    }

    pub fn available_implementations(&self) -> Vec<String> {
        AVAILABLE_ENGINES.iter().map(|name| name.to_string()).collect()
    }

    pub fn get_description(&self, implementation: &str) -> Option<String> {
        match implementation {
            "standard" => Some("シフト操作でギアが増減する標準エンジン".to_string()),
            "dummy" => Some("固定ギアを返し、シフト操作を記録するだけのダミーエンジン".to_string()),
            _ => None,
        }
    }
}

impl Default for EngineFactory {
    fn default() -> Self {
        Self::new()
    }
}
