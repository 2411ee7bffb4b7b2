//! Select Builder - 链式指定列、条件、排序和 JOIN

use crate::field::{FieldName, FieldWithSorting, FieldWithValue, JoinField};
use crate::query::make_select_query;
use crate::value::SqlValue;

/// Select Builder
///
/// 生成的语句与 [`make_select_query`] 完全一致
#[derive(Debug, Clone, Default)]
pub struct SelectBuilder {
    table: String,
    fields: Vec<FieldName>,
    filters: Vec<FieldWithValue>,
    sorting: Vec<FieldWithSorting>,
    joins: Vec<JoinField>,
}

impl SelectBuilder {
    /// 创建 SelectBuilder
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Default::default()
        }
    }

    /// 指定要查询的列（可链式调用多次，不指定则为 `*`）
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(FieldName::new(name));
        self
    }

    /// 指定多个要查询的列
    pub fn fields(mut self, names: &[&str]) -> Self {
        self.fields.extend(names.iter().map(|&n| FieldName::from(n)));
        self
    }

    /// 添加等值条件，条件之间为 AND
    pub fn and_eq(mut self, field: &str, value: impl Into<SqlValue>) -> Self {
        self.filters.push(FieldWithValue::new(field, value));
        self
    }

    pub fn order_by(mut self, field: &str, ascending: bool) -> Self {
        self.sorting.push(FieldWithSorting::new(field, ascending));
        self
    }

    pub fn join(mut self, join: JoinField) -> Self {
        self.joins.push(join);
        self
    }

    pub fn build(&self) -> String {
        make_select_query(
            &self.fields,
            &self.table,
            &self.filters,
            &self.sorting,
            &self.joins,
        )
    }
}
