//! Delete Builder - 链式指定 WHERE 条件

use crate::field::FieldWithValue;
use crate::query::make_delete_query;
use crate::value::SqlValue;

/// Delete Builder
///
/// 不添加条件时生成删除全表的语句，由调用方自行把关
#[derive(Debug, Clone, Default)]
pub struct DeleteBuilder {
    table: String,
    filters: Vec<FieldWithValue>,
}

impl DeleteBuilder {
    /// 创建 DeleteBuilder
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            filters: Vec::new(),
        }
    }

    /// 添加等值条件，条件之间为 AND
    pub fn and_eq(mut self, field: &str, value: impl Into<SqlValue>) -> Self {
        self.filters.push(FieldWithValue::new(field, value));
        self
    }

    pub fn build(&self) -> String {
        make_delete_query(&self.table, &self.filters)
    }
}
