//! SQL 语句模板
//!
//! 各子句之间固定用一个空格分隔，子句为空时会留下连续空格，
//! 这是输出格式的一部分，不做清理。

use crate::clause::{
    assignment_clause, filter_clause, join_clause, projection_clause, sort_clause,
    split_fields_and_values,
};
use crate::field::{FieldName, FieldWithSorting, FieldWithValue, JoinField};
use crate::record::{project_record, Record};
use crate::utils::trace_sql;

/// 生成 DELETE 语句
///
/// 例：`make_delete_query("barcelona_players", &[FieldWithValue::new("name", "Luis")])`
/// 返回 `DELETE FROM barcelona_players WHERE name = 'Luis';`
pub fn make_delete_query(table: &str, filters: &[FieldWithValue]) -> String {
    let sql = format!("DELETE FROM {} {};", table, filter_clause(filters, None));
    trace_sql("delete", &sql);
    sql
}

/// 生成 SELECT 语句
///
/// 列清单为空时选择全部列；过滤条件按表名加前缀（字段名已含 `.` 的除外）。
/// 例：`SELECT name, surname FROM players JOIN golden_boots ON players.id = golden_boots.player_id WHERE players.height = 1.70 ORDER BY name ASC;`
pub fn make_select_query(
    fields: &[FieldName],
    table: &str,
    filters: &[FieldWithValue],
    sorting: &[FieldWithSorting],
    joins: &[JoinField],
) -> String {
    let sql = format!(
        "SELECT {} FROM {} {} {} {};",
        projection_clause(fields),
        table,
        join_clause(joins),
        filter_clause(filters, Some(table)),
        sort_clause(sorting)
    );
    trace_sql("select", &sql);
    sql
}

/// 生成 UPDATE 语句
///
/// JOIN 子句位于 WHERE 之后。
/// 例：`UPDATE all_time_scorers SET name = 'Cristiano', surname = 'Ronaldo' WHERE name = 'Pele' ;`
pub fn make_update_query(
    table: &str,
    new_values: &[FieldWithValue],
    filters: &[FieldWithValue],
    joins: &[JoinField],
) -> String {
    let sql = format!(
        "UPDATE {} SET {} {} {};",
        table,
        assignment_clause(new_values),
        filter_clause(filters, None),
        join_clause(joins)
    );
    trace_sql("update", &sql);
    sql
}

/// 生成 INSERT 语句，值被省略的字段不出现在列清单中
///
/// 例：`INSERT INTO goats (name, surname) VALUES ('Kylian', 'Mbappe');`
pub fn make_insert_query(table: &str, values: &[FieldWithValue]) -> String {
    let (names, literals) = split_fields_and_values(values);
    let sql = format!("INSERT INTO {} ({}) VALUES ({});", table, names, literals);
    trace_sql("insert", &sql);
    sql
}

/// 按记录的字段声明顺序生成 INSERT 语句
pub fn make_insert_query_with_record<R: Record + ?Sized>(table: &str, record: &R) -> String {
    make_insert_query(table, &project_record(record))
}
