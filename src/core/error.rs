// 入力境界のエラー型定義
// エンジン操作そのものは全域関数なので、ここに現れるのは文字列を受け取る箇所のみ

use thiserror::Error;

/// ファクトリーやCLIが返すエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MotorcycleError {
    #[error("未サポートのEngine実装: {name}. 利用可能: {available}")]
    UnsupportedEngine { name: String, available: String },

    #[error("不正なシフトコマンド: '{input}' (up または down を指定)")]
    InvalidShiftCommand { input: String },
}

impl MotorcycleError {
    /// 未サポートエンジンエラーの作成
    pub fn unsupported_engine(name: impl Into<String>, available: &[&str]) -> Self {
        Self::UnsupportedEngine {
            name: name.into(),
            available: available.join(", "),
        }
    }

    /// 不正シフトコマンドエラーの作成
    pub fn invalid_shift_command(input: impl Into<String>) -> Self {
        Self::InvalidShiftCommand {
            input: input.into(),
        }
    }
}

/// 結果型のエイリアス
pub type MotorcycleResult<T> = Result<T, MotorcycleError>;
