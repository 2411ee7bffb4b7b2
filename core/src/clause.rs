//! 子句拼接
//!
//! 每个函数把一组描述符渲染成一个子句。空输入返回空字符串，
//! 唯一的例外是列清单，空输入返回 `*`。

use crate::field::{FieldName, FieldWithSorting, FieldWithValue, JoinField};

/// WHERE 子句，条件之间用 AND 连接
///
/// 例：`WHERE name = 'John' AND surname = 'Lennon'`
pub fn filter_clause(fields: &[FieldWithValue], table: Option<&str>) -> String {
    if fields.is_empty() {
        return String::new();
    }
    let conditions: Vec<String> = fields.iter().map(|f| f.render(table)).collect();
    format!("WHERE {}", conditions.join(" AND "))
}

/// SELECT 的列清单，为空时选择全部列
pub fn projection_clause(fields: &[FieldName]) -> String {
    if fields.is_empty() {
        return "*".to_string();
    }
    fields
        .iter()
        .map(FieldName::render)
        .collect::<Vec<_>>()
        .join(", ")
}

/// UPDATE 的 SET 赋值列表，不加表名前缀
///
/// 例：`name = 'John', surname = 'Lennon'`
pub fn assignment_clause(fields: &[FieldWithValue]) -> String {
    fields
        .iter()
        .map(|f| f.render(None))
        .collect::<Vec<_>>()
        .join(", ")
}

/// ORDER BY 子句
pub fn sort_clause(fields: &[FieldWithSorting]) -> String {
    if fields.is_empty() {
        return String::new();
    }
    let orders: Vec<String> = fields.iter().map(FieldWithSorting::render).collect();
    format!("ORDER BY {}", orders.join(", "))
}

/// JOIN 链，按给定顺序用单个空格连接
pub fn join_clause(joins: &[JoinField]) -> String {
    joins
        .iter()
        .map(JoinField::render)
        .collect::<Vec<_>>()
        .join(" ")
}

/// 拆分 INSERT 的列名列表和值列表
///
/// 字面量被省略的字段（空值、空字符串、复合类型）同时从两个列表中跳过，
/// 两个列表按位置一一对应。
pub fn split_fields_and_values(fields: &[FieldWithValue]) -> (String, String) {
    let mut names = Vec::with_capacity(fields.len());
    let mut values = Vec::with_capacity(fields.len());
    for field in fields {
        if let Some(literal) = field.literal() {
            names.push(field.name.as_str());
            values.push(literal);
        }
    }
    (names.join(", "), values.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::SqlValue;

    #[test]
    fn test_filter_clause() {
        let fields = vec![
            FieldWithValue::new("name", "John"),
            FieldWithValue::new("surname", "Lennon"),
        ];
        assert_eq!(
            filter_clause(&fields, None),
            "WHERE name = 'John' AND surname = 'Lennon'"
        );
        assert_eq!(
            filter_clause(&fields, Some("beatles")),
            "WHERE beatles.name = 'John' AND beatles.surname = 'Lennon'"
        );
    }

    #[test]
    fn test_empty_clauses() {
        assert_eq!(filter_clause(&[], Some("players")), "");
        assert_eq!(projection_clause(&[]), "*");
        assert_eq!(assignment_clause(&[]), "");
        assert_eq!(sort_clause(&[]), "");
        assert_eq!(join_clause(&[]), "");
        assert_eq!(split_fields_and_values(&[]), (String::new(), String::new()));
    }

    #[test]
    fn test_projection_clause() {
        let fields = vec![FieldName::from("name"), FieldName::from("surname")];
        assert_eq!(projection_clause(&fields), "name, surname");
    }

    #[test]
    fn test_assignment_clause() {
        let fields = vec![
            FieldWithValue::new("name", "Cristiano"),
            FieldWithValue::new("goals", 800),
        ];
        assert_eq!(assignment_clause(&fields), "name = 'Cristiano', goals = 800");
    }

    #[test]
    fn test_sort_clause() {
        let fields = vec![FieldWithSorting::asc("name"), FieldWithSorting::desc("age")];
        assert_eq!(sort_clause(&fields), "ORDER BY name ASC, age DESC");
    }

    #[test]
    fn test_join_clause() {
        let joins = vec![
            JoinField::new("players", "id", "golden_boots", "player_id"),
            JoinField::new("players", "club_id", "clubs", "id"),
        ];
        assert_eq!(
            join_clause(&joins),
            "JOIN golden_boots ON players.id = golden_boots.player_id JOIN clubs ON players.club_id = clubs.id"
        );
    }

    #[test]
    fn test_split_fields_and_values_skips_omitted() {
        let fields = vec![
            FieldWithValue::new("empty", ""),
            FieldWithValue::new("name", "Leo"),
            FieldWithValue::new("nil", SqlValue::Null),
            FieldWithValue::new("nicknames", SqlValue::Unsupported),
            FieldWithValue::new("is_left", true),
        ];
        assert_eq!(
            split_fields_and_values(&fields),
            ("name, is_left".to_string(), "'Leo', true".to_string())
        );
    }
}
