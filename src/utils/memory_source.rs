//! In-memory record source for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;

/// In-memory record source for tests, demos and development
#[derive(Debug, Clone)]
pub struct MemoryRecordSource {
    statements: Arc<RwLock<HashMap<String, StatementRecord>>>,
    receipts: Arc<RwLock<HashMap<String, ReceiptRecord>>>,
}

impl MemoryRecordSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self {
            statements: Arc::new(RwLock::new(HashMap::new())),
            receipts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Add or replace a statement
    pub fn insert_statement(&self, statement: StatementRecord) -> FiguresResult<()> {
        self.statements
            .write()
            .map_err(poisoned)?
            .insert(statement.id.clone(), statement);
        Ok(())
    }

    /// Add or replace a receipt
    pub fn insert_receipt(&self, receipt: ReceiptRecord) -> FiguresResult<()> {
        self.receipts
            .write()
            .map_err(poisoned)?
            .insert(receipt.id.clone(), receipt);
        Ok(())
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) -> FiguresResult<()> {
        self.statements.write().map_err(poisoned)?.clear();
        self.receipts.write().map_err(poisoned)?.clear();
        Ok(())
    }
}

impl Default for MemoryRecordSource {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> FiguresError {
    FiguresError::Source("record store lock poisoned".to_string())
}

#[async_trait]
impl RecordSource for MemoryRecordSource {
    async fn get_statement(&self, statement_id: &str) -> FiguresResult<Option<StatementRecord>> {
        Ok(self
            .statements
            .read()
            .map_err(poisoned)?
            .get(statement_id)
            .cloned())
    }

    async fn get_receipt(&self, receipt_id: &str) -> FiguresResult<Option<ReceiptRecord>> {
        Ok(self.receipts.read().map_err(poisoned)?.get(receipt_id).cloned())
    }

    async fn list_statements(&self, merchant_id: Option<&str>) -> FiguresResult<Vec<StatementRecord>> {
        let statements = self.statements.read().map_err(poisoned)?;
        let mut filtered: Vec<StatementRecord> = statements
            .values()
            .filter(|statement| merchant_id.is_none_or(|id| statement.merchant.id == id))
            .cloned()
            .collect();
        filtered.sort_by(|a, b| b.issue_date.cmp(&a.issue_date).then_with(|| a.id.cmp(&b.id)));
        Ok(filtered)
    }
}
