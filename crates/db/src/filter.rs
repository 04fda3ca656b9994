//! Dynamic WHERE-clause construction for document queries.
//!
//! Filter values are accumulated as `(condition, value)` pairs and emitted
//! as positional placeholders; values are only ever passed as bind
//! parameters, never interpolated into the statement text.

/// Accumulates optional equality filters into a parameterized predicate.
#[derive(Debug, Default)]
pub struct SqlFilter {
    conditions: Vec<String>,
    values: Vec<String>,
}

impl SqlFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `column = $n` if `value` is present and non-empty.
    ///
    /// `column` must be a trusted identifier (a column name chosen by the
    /// caller, never client input).
    pub fn eq(&mut self, column: &str, value: Option<&str>) {
        if let Some(v) = value {
            if !v.is_empty() {
                self.values.push(v.to_string());
                self.conditions.push(format!("{column} = ${}", self.values.len()));
            }
        }
    }

    /// The `WHERE ...` fragment (with a leading space), or an empty string
    /// when no filters were added so the predicate matches all rows.
    pub fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }

    /// Bind values, in placeholder order.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}
