//! Insert Builder - 链式指定插入的列值

use crate::field::FieldWithValue;
use crate::query::make_insert_query;
use crate::record::{project_record, Record};
use crate::value::SqlValue;

/// Insert Builder
///
/// 值被省略（空值、空字符串、复合类型）的列不会出现在语句中
#[derive(Debug, Clone, Default)]
pub struct InsertBuilder {
    table: String,
    values: Vec<FieldWithValue>,
}

impl InsertBuilder {
    /// 创建 InsertBuilder
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            values: Vec::new(),
        }
    }

    /// 添加一列（可链式调用多次）
    pub fn value(mut self, field: &str, value: impl Into<SqlValue>) -> Self {
        self.values.push(FieldWithValue::new(field, value));
        self
    }

    /// 追加一条记录投影出的全部字段
    pub fn record<R: Record + ?Sized>(mut self, record: &R) -> Self {
        self.values.extend(project_record(record));
        self
    }

    pub fn build(&self) -> String {
        make_insert_query(&self.table, &self.values)
    }
}
