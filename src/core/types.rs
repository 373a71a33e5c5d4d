// 共有データ型の定義

use super::error::{MotorcycleError, MotorcycleResult};
use std::fmt;
use std::str::FromStr;

/// ユーザーが要求するシフト操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftCommand {
    Up,
    Down,
}

impl ShiftCommand {
    /// 文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftCommand::Up => "up",
            ShiftCommand::Down => "down",
        }
    }
}

impl fmt::Display for ShiftCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftCommand {
    type Err = MotorcycleError;

    fn from_str(input: &str) -> MotorcycleResult<Self> {
        match input.trim().to_lowercase().as_str() {
            "up" => Ok(ShiftCommand::Up),
            "down" => Ok(ShiftCommand::Down),
            _ => Err(MotorcycleError::invalid_shift_command(input)),
        }
    }
}
