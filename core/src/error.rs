use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrikeError {
    /// 合并时没有任何 INSERT 语句
    #[error("At least one INSERT statement is required")]
    NoStatements,
    /// 第 index 条语句中找不到 VALUES 关键字
    #[error("Statement {index} has no VALUES keyword")]
    MissingValues { index: usize },
    /// 多行 INSERT 中某一行的列与第一行不一致
    #[error("Row {row} has columns ({found}), expected ({expected})")]
    ColumnMismatch {
        row: usize,
        expected: String,
        found: String,
    },
}

pub type Result<T> = std::result::Result<T, StrikeError>;
