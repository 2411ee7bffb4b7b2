//! Builder 模块
//!
//! 提供 SelectBuilder、UpdateBuilder、DeleteBuilder、InsertBuilder 链式构建语句，
//! 以及按行构建多行 INSERT 的 MultiInsertBuilder

pub mod delete_builder;
pub mod insert_builder;
pub mod multi_insert_builder;
pub mod select_builder;
pub mod update_builder;

pub use delete_builder::DeleteBuilder;
pub use insert_builder::InsertBuilder;
pub use multi_insert_builder::MultiInsertBuilder;
pub use select_builder::SelectBuilder;
pub use update_builder::UpdateBuilder;
