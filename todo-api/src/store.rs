//! ストレージ抽象
//!
//! ハンドラは `TodoStore` トレイトにのみ依存します。
//! 本番バックエンドは外部コラボレータであり、ここでは
//! 開発・テスト用の InMemory 実装のみを提供します。

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;
use todo_domain::{TodoId, TodoItem};

/// ストア層のエラー
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unexpected store error")]
    Unexpected,
}

/// Todo ストレージの最小抽象
pub trait TodoStore: Send + Sync {
    /// ID でアイテムを取得。存在しなければ `None`。
    fn get(&self, id: TodoId) -> Result<Option<TodoItem>, StoreError>;
    /// ID でアイテムを削除し、影響行数を返す。
    fn delete(&self, id: TodoId) -> Result<u64, StoreError>;
    /// アイテムを挿入し、採番された ID を返す。
    fn insert(&self, item: TodoItem) -> Result<TodoId, StoreError>;
}

#[derive(Debug)]
struct Inner {
    next_id: i64,
    items: HashMap<i64, TodoItem>,
}

/// 簡易な InMemory 実装（開発/テスト用）
#[derive(Debug)]
pub struct MemoryTodoStore {
    inner: Mutex<Inner>,
}

impl Default for MemoryTodoStore {
    fn default() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                items: HashMap::new(),
            }),
        }
    }
}

impl TodoStore for MemoryTodoStore {
    fn get(&self, id: TodoId) -> Result<Option<TodoItem>, StoreError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.items.get(&id.value()).cloned())
    }

    fn delete(&self, id: TodoId) -> Result<u64, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.items.remove(&id.value()) {
            Some(_) => Ok(1),
            None => Ok(0),
        }
    }

    fn insert(&self, item: TodoItem) -> Result<TodoId, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.items.insert(id, item);
        Ok(TodoId::new(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn item(todo: &str) -> TodoItem {
        TodoItem {
            todo: todo.to_string(),
            created_on: Utc::now(),
        }
    }

    #[test]
    fn insert_assigns_sequential_positive_ids() {
        let store = MemoryTodoStore::default();

        let first = store.insert(item("a")).unwrap();
        let second = store.insert(item("b")).unwrap();

        assert_eq!(first.value(), 1);
        assert_eq!(second.value(), 2);
    }

    #[test]
    fn get_returns_inserted_item() {
        let store = MemoryTodoStore::default();
        let id = store.insert(item("water plants")).unwrap();

        let found = store.get(id).unwrap().unwrap();
        assert_eq!(found.todo, "water plants");
    }

    #[test]
    fn get_missing_id_returns_none() {
        let store = MemoryTodoStore::default();
        assert!(store.get(TodoId::new(99)).unwrap().is_none());
    }

    #[test]
    fn delete_reports_affected_rows() {
        let store = MemoryTodoStore::default();
        let id = store.insert(item("a")).unwrap();

        // 1回目は 1 行、2回目は 0 行
        assert_eq!(store.delete(id).unwrap(), 1);
        assert_eq!(store.delete(id).unwrap(), 0);
    }
}
