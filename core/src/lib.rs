//! 由字段描述符生成 MySQL 风格的 SELECT / INSERT / UPDATE / DELETE 语句

pub mod builder;
pub mod clause;
pub mod error;
pub mod field;
pub mod merge;
pub mod query;
pub mod record;
mod utils;
pub mod value;

pub use builder::{DeleteBuilder, InsertBuilder, MultiInsertBuilder, SelectBuilder, UpdateBuilder};
pub use field::{FieldName, FieldWithSorting, FieldWithValue, JoinField};
pub use merge::merge_insert_statements;
pub use query::{
    make_delete_query, make_insert_query, make_insert_query_with_record, make_select_query,
    make_update_query,
};
pub use record::{project_record, ProjectedField, Record};
pub use value::{SqlValue, ToSqlValue};

// 重新导出 derive 的所有公共 API（宏）
pub use error::{Result, StrikeError};
pub use strikeql_derive::*;
