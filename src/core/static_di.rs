//! 静的ディスパッチ中心の依存関係注入
//!
//! エンジンの具象型を型パラメータで指定し、
//! コンパイル時に `Motorcycle<E>` の `E` を確定させる。

use super::traits::EngineBackend;
use crate::engine::{EngineConfig, MockEngine, StandardEngine};
use crate::motorcycle::Motorcycle;
use std::marker::PhantomData;

/// 型レベルのエンジン提供者
pub trait EngineProvider: Sized + 'static {
    type Engine: EngineBackend + 'static;

    /// 依存関係の説明（デバッグ用）
    const DESCRIPTION: &'static str = "Static engine provider";

    /// Engineインスタンスを作成
    fn create_engine() -> Self::Engine;
}

/// 実エンジンを提供
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEngineProvider;

impl EngineProvider for StandardEngineProvider {
    type Engine = StandardEngine;

    const DESCRIPTION: &'static str = "ギア1から始まる標準エンジン";

    fn create_engine() -> Self::Engine {
        StandardEngine::from_config(&EngineConfig::default())
    }
}

/// 固定ギアのダミーエンジンを提供（テスト用）
#[derive(Debug, Clone, Copy, Default)]
pub struct DummyEngineProvider;

impl EngineProvider for DummyEngineProvider {
    type Engine = MockEngine;

    const DESCRIPTION: &'static str = "固定ギアを返し呼び出しを記録するダミーエンジン";

    fn create_engine() -> Self::Engine {
        MockEngine::with_gear(EngineConfig::default().fixed_gear())
    }
}

/// 静的Motorcycleファクトリー
///
/// PhantomDataで提供者の型だけを保持する。実行時の状態は持たない。
#[derive(Debug)]
pub struct StaticMotorcycleFactory<P: EngineProvider> {
    _provider: PhantomData<P>,
}

impl<P: EngineProvider> StaticMotorcycleFactory<P> {
    pub const fn new() -> Self {
        Self {
            _provider: PhantomData,
        }
    }

    /// 依存関係の説明を取得
    pub const fn description() -> &'static str {
        P::DESCRIPTION
    }

    /// Motorcycleを作成（静的ディスパッチ）
    pub fn create_motorcycle(&self) -> Motorcycle<P::Engine> {
        Motorcycle::new(P::create_engine())
    }

    /// エンジンの型名（デバッグ用）
    pub fn engine_type_name() -> &'static str {
        std::any::type_name::<P::Engine>()
    }
}

impl<P: EngineProvider> Default for StaticMotorcycleFactory<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: EngineProvider> Clone for StaticMotorcycleFactory<P> {
    fn clone(&self) -> Self {
        Self::new()
    }
}
