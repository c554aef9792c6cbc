//! Search query builder utilities.
//!
//! Helps construct search queries with plain terms and a `filetype:` operator.

use crate::models::EquipmentQuery;

/// Builder for constructing search queries.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    /// Search terms.
    terms: Vec<String>,
    /// File type filter.
    filetype: Option<String>,
}

impl QueryBuilder {
    /// Create a new query builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a search term. Blank terms are ignored.
    pub fn term(mut self, term: &str) -> Self {
        let term = term.trim();
        if !term.is_empty() {
            self.terms.push(term.to_string());
        }
        self
    }

    /// Add a term only when present.
    pub fn maybe_term(self, term: Option<&str>) -> Self {
        match term {
            Some(t) => self.term(t),
            None => self,
        }
    }

    /// Filter by file type.
    pub fn filetype(mut self, ext: &str) -> Self {
        self.filetype = Some(ext.to_string());
        self
    }

    /// Build the final query string. The filetype operator goes last.
    pub fn build(&self) -> String {
        let mut parts = self.terms.clone();

        if let Some(ref ft) = self.filetype {
            parts.push(format!("filetype:{}", ft));
        }

        parts.join(" ")
    }
}

/// Query for a product photo: `manufacturer model type voltageV`.
pub fn image_query(query: &EquipmentQuery) -> String {
    identity_terms(query)
        .maybe_term(query.voltage_term().as_deref())
        .build()
}

/// Query for a PDF data sheet.
pub fn spec_sheet_query(query: &EquipmentQuery) -> String {
    identity_terms(query)
        .maybe_term(query.voltage_term().as_deref())
        .term("specifications sheet")
        .filetype("pdf")
        .build()
}

fn identity_terms(query: &EquipmentQuery) -> QueryBuilder {
    QueryBuilder::new()
        .term(&query.manufacturer)
        .term(&query.model_no)
        .term(&query.equipment_type)
}
