//! MultiInsert Builder - 按行构建多行 INSERT
//!
//! 与 `merge_insert_statements` 生成相同的文本，但直接由行数据拼接，
//! 不需要从已生成的语句中反向截取，并且能校验每行的列是否一致。

use crate::clause::split_fields_and_values;
use crate::error::{Result, StrikeError};
use crate::field::FieldWithValue;
use crate::record::{project_record, Record};
use crate::utils::{trace_merge_error, trace_sql};

/// MultiInsert Builder
///
/// 列清单由第一行决定，之后每一行渲染出的列清单必须与之相同
#[derive(Debug, Clone, Default)]
pub struct MultiInsertBuilder {
    table: String,
    rows: Vec<Vec<FieldWithValue>>,
}

impl MultiInsertBuilder {
    /// 创建 MultiInsertBuilder
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            rows: Vec::new(),
        }
    }

    /// 追加一行
    pub fn row(mut self, values: &[FieldWithValue]) -> Self {
        self.rows.push(values.to_vec());
        self
    }

    /// 追加一条记录作为一行
    pub fn record<R: Record + ?Sized>(mut self, record: &R) -> Self {
        self.rows.push(project_record(record));
        self
    }

    pub fn build(&self) -> Result<String> {
        let result = self.render();
        match &result {
            Ok(sql) => trace_sql("multi insert", sql),
            Err(err) => trace_merge_error(err),
        }
        result
    }

    fn render(&self) -> Result<String> {
        let mut rows = self.rows.iter().map(|r| split_fields_and_values(r));
        let (columns, first_values) = rows.next().ok_or(StrikeError::NoStatements)?;

        let mut sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table, columns, first_values
        );
        for (offset, (found, values)) in rows.enumerate() {
            if found != columns {
                return Err(StrikeError::ColumnMismatch {
                    row: offset + 1,
                    expected: columns,
                    found,
                });
            }
            sql.push_str(&format!(" ({})", values));
        }
        sql.push(';');
        Ok(sql)
    }
}
