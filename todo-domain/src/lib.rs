//! Todo ドメインモデル
//!
//! HTTP 層から独立した型とバリデーションのみを提供します。
//! ストレージや I/O には依存しません。

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// ドメインエラー（バリデーション違反）
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("id must be an integer")]
    IdNotInteger,
    #[error("id must be a positive integer")]
    IdNotPositive,
    #[error("todo: cannot be blank")]
    BlankTodo,
}

/// Todo の識別子
///
/// ストレージが採番する正の整数です。パス引数からの構築は
/// `FromStr` を通し、整数でない値・0 以下の値を拒否します。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// 採番済みの値から構築します（ストレージ側の信頼境界内で使用）。
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl FromStr for TodoId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.trim().parse().map_err(|_| DomainError::IdNotInteger)?;
        if value <= 0 {
            return Err(DomainError::IdNotPositive);
        }
        Ok(Self(value))
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Todo アイテム本体
///
/// 作成時にハンドラが `created_on` へ現在時刻（UTC）を設定します。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub todo: String,
    pub created_on: DateTime<Utc>,
}

/// POST /todo リクエストボディ
#[derive(Debug, Clone, Deserialize)]
pub struct TodoPostRequest {
    pub todo: String,
}

impl TodoPostRequest {
    /// 必須フィールドの検証。空白のみのタイトルは拒否します。
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.todo.trim().is_empty() {
            return Err(DomainError::BlankTodo);
        }
        Ok(())
    }
}

/// POST /todo レスポンスボディ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPostResponse {
    pub id: TodoId,
}
