//! Payload for the exported transaction document
//!
//! One canonical header shape is used by every rendering path: the on-screen
//! print view, the full statement document and the transactions-only export.

use serde::Serialize;

use crate::figures::LedgerRow;
use crate::types::StatementRecord;

/// Document title printed in the header
pub const DOCUMENT_TITLE: &str = "ÜYE İŞYERİ EKSTRESİ";

/// Header framing every exported page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHeader {
    pub title: &'static str,
    pub period: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
}

impl DocumentHeader {
    pub fn new(period: impl Into<String>) -> Self {
        Self {
            title: DOCUMENT_TITLE,
            period: period.into(),
            statement_id: None,
            merchant_name: None,
        }
    }

    pub fn statement_id(mut self, statement_id: impl Into<String>) -> Self {
        self.statement_id = Some(statement_id.into());
        self
    }

    pub fn merchant_name(mut self, merchant_name: impl Into<String>) -> Self {
        self.merchant_name = Some(merchant_name.into());
        self
    }

    pub fn for_statement(record: &StatementRecord) -> Self {
        Self::new(record.period.clone())
            .statement_id(record.id.clone())
            .merchant_name(record.merchant.name.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFooter {
    pub statement_id: String,
}

/// One page of exported ledger rows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportPage<'a> {
    /// 1-based page number
    pub number: usize,
    pub rows: Vec<LedgerRow<'a>>,
}

/// Filtered ledger rows split into pages, framed by header and footer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LedgerExport<'a> {
    pub header: DocumentHeader,
    pub pages: Vec<ExportPage<'a>>,
    pub footer: DocumentFooter,
}

impl<'a> LedgerExport<'a> {
    /// Split rows into pages of `rows_per_page`. An empty ledger still
    /// produces one empty page so the header and footer are rendered.
    pub fn paginate(
        record: &StatementRecord,
        rows: impl Iterator<Item = LedgerRow<'a>>,
        rows_per_page: usize,
    ) -> Self {
        let rows_per_page = rows_per_page.max(1);
        let mut pages: Vec<ExportPage<'a>> = Vec::new();

        for row in rows {
            let page_full = pages
                .last()
                .is_none_or(|page| page.rows.len() >= rows_per_page);
            if page_full {
                let number = pages.len() + 1;
                pages.push(ExportPage {
                    number,
                    rows: Vec::with_capacity(rows_per_page),
                });
            }
            if let Some(page) = pages.last_mut() {
                page.rows.push(row);
            }
        }

        if pages.is_empty() {
            pages.push(ExportPage {
                number: 1,
                rows: Vec::new(),
            });
        }

        Self {
            header: DocumentHeader::for_statement(record),
            pages,
            footer: DocumentFooter {
                statement_id: record.id.clone(),
            },
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn row_count(&self) -> usize {
        self.pages.iter().map(|page| page.rows.len()).sum()
    }

    pub fn rows(&self) -> impl Iterator<Item = &LedgerRow<'a>> {
        self.pages.iter().flat_map(|page| page.rows.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_builder() {
        let header = DocumentHeader::new("Mart 2024").statement_id("EKS-1");
        assert_eq!(header.period, "Mart 2024");
        assert_eq!(header.statement_id.as_deref(), Some("EKS-1"));
        assert_eq!(header.merchant_name, None);
        assert_eq!(header.title, DOCUMENT_TITLE);
    }
}
