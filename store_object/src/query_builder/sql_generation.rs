//! Query builder utilities
//!
//! Placeholder numbering and full-statement assembly. Every `$n` in a
//! statement comes from a [`Placeholders`] counter so ordinals always match
//! the order in which values were pushed.

/// Sequential `$n` placeholder issuer
#[derive(Debug, Clone, Default)]
pub struct Placeholders {
    issued: usize,
}

impl Placeholders {
    /// Start numbering at `$1`
    pub fn new() -> Self {
        Self::default()
    }

    /// Start numbering after `offset`, so the first placeholder is `$offset+1`
    pub fn with_offset(offset: usize) -> Self {
        Self { issued: offset }
    }

    /// Issue the next placeholder
    pub fn next_placeholder(&mut self) -> String {
        self.issued += 1;
        format!("${}", self.issued)
    }
}

pub struct SqlGenerator;

impl SqlGenerator {
    /// `SELECT <columns> FROM <table> [WHERE <clause>] [ORDER BY <order>]`
    pub fn select(columns: &str, table: &str, where_clause: &str, order_by: Option<&str>) -> String {
        let mut sql = String::with_capacity(32 + columns.len() + table.len() + where_clause.len());
        sql.push_str("SELECT ");
        sql.push_str(columns);
        sql.push_str(" FROM ");
        sql.push_str(table);
        if !where_clause.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(where_clause);
        }
        if let Some(order) = order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(order);
        }
        sql
    }

    /// `INSERT INTO <table> (<columns>) VALUES (<placeholders>) RETURNING <returning>`
    pub fn insert(table: &str, columns: &str, placeholders: &str, returning: &str) -> String {
        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            table, columns, placeholders, returning
        )
    }

    /// `UPDATE <table> SET <set_cols> WHERE <key> = $<n> RETURNING <returning>`
    ///
    /// `bound` is the number of values already bound by the SET fragment;
    /// the key takes the next ordinal.
    pub fn update(table: &str, set_cols: &str, key: &str, bound: usize, returning: &str) -> String {
        let key_placeholder = Placeholders::with_offset(bound).next_placeholder();
        format!(
            "UPDATE {} SET {} WHERE {} = {} RETURNING {}",
            table, set_cols, key, key_placeholder, returning
        )
    }

    /// `DELETE FROM <table> WHERE <key> = $1 RETURNING <key>`
    pub fn delete(table: &str, key: &str) -> String {
        format!("DELETE FROM {} WHERE {} = $1 RETURNING {}", table, key, key)
    }

    /// Equality-only WHERE fragment for `(column, value)` pairs, numbered from `$1`
    pub fn equality_clause<'a, I>(columns: I) -> String
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut placeholders = Placeholders::new();
        columns
            .into_iter()
            .map(|column| format!("{} = {}", column, placeholders.next_placeholder()))
            .collect::<Vec<_>>()
            .join(" AND ")
    }
}
