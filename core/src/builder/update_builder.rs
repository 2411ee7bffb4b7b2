//! Update Builder - 链式指定新值、WHERE 条件和 JOIN

use crate::field::{FieldWithValue, JoinField};
use crate::query::make_update_query;
use crate::value::SqlValue;

/// Update Builder
#[derive(Debug, Clone, Default)]
pub struct UpdateBuilder {
    table: String,
    new_values: Vec<FieldWithValue>, // SET 子句
    filters: Vec<FieldWithValue>,    // WHERE 子句
    joins: Vec<JoinField>,
}

impl UpdateBuilder {
    /// 创建 UpdateBuilder
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Default::default()
        }
    }

    /// 设置字段的新值（可链式调用多次）
    pub fn set(mut self, field: &str, value: impl Into<SqlValue>) -> Self {
        self.new_values.push(FieldWithValue::new(field, value));
        self
    }

    /// 添加等值条件，条件之间为 AND
    pub fn and_eq(mut self, field: &str, value: impl Into<SqlValue>) -> Self {
        self.filters.push(FieldWithValue::new(field, value));
        self
    }

    pub fn join(mut self, join: JoinField) -> Self {
        self.joins.push(join);
        self
    }

    pub fn build(&self) -> String {
        make_update_query(&self.table, &self.new_values, &self.filters, &self.joins)
    }
}
