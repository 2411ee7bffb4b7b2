//! 合并多条单行 INSERT
//!
//! 按文本拼接：保留第一条语句（去掉分号），再依次追加后续语句
//! `VALUES` 之后的值元组。不校验表名和列清单是否一致。

use crate::error::{Result, StrikeError};
use crate::utils::{trace_merge_error, trace_sql};

const VALUES_KEYWORD: &str = "VALUES";

/// 将多条同表同列的 INSERT 合并为一条
///
/// 例：
/// ```ignore
/// merge_insert_statements(&[
///     "INSERT INTO nicknames (id, nickname) VALUES (1, 'Black Mamba');",
///     "INSERT INTO nicknames (id, nickname) VALUES (1, 'KB24');",
/// ])?;
/// // INSERT INTO nicknames (id, nickname) VALUES (1, 'Black Mamba') (1, 'KB24');
/// ```
pub fn merge_insert_statements<S: AsRef<str>>(statements: &[S]) -> Result<String> {
    let result = merge(statements);
    match &result {
        Ok(sql) => trace_sql("merged insert", sql),
        Err(err) => trace_merge_error(err),
    }
    result
}

fn merge<S: AsRef<str>>(statements: &[S]) -> Result<String> {
    let (first, rest) = statements.split_first().ok_or(StrikeError::NoStatements)?;
    let mut merged = until_semicolon(first.as_ref()).to_string();

    for (offset, statement) in rest.iter().enumerate() {
        // 取第一个和第二个 VALUES 之间的部分
        let tuple = statement
            .as_ref()
            .split(VALUES_KEYWORD)
            .nth(1)
            .ok_or(StrikeError::MissingValues { index: offset + 1 })?;
        merged.push_str(until_semicolon(tuple));
    }

    merged.push(';');
    Ok(merged)
}

fn until_semicolon(s: &str) -> &str {
    s.split(';').next().unwrap_or(s)
}
