//! 字段描述符
//!
//! 每种描述符只负责渲染自己的片段，拼接由 `clause` 模块完成。

use crate::value::SqlValue;
use serde::{Deserialize, Serialize};

/// 带值的字段，用于 WHERE 条件、SET 赋值和 INSERT 列值
///
/// 例：`FieldWithValue::new("name", "Jhon")`、`FieldWithValue::new("age", 12)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldWithValue {
    pub name: String,
    #[serde(default)]
    pub value: SqlValue,
}

impl FieldWithValue {
    pub fn new(name: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// 字段值的字面量，`None` 表示省略
    pub fn literal(&self) -> Option<String> {
        self.value.to_literal()
    }

    /// 渲染为 `name = literal`
    ///
    /// 给定表名且字段名中不含 `.` 时加表名前缀。
    /// 值被省略时等号右侧留空，这里不做校验。
    pub fn render(&self, table: Option<&str>) -> String {
        let literal = self.literal().unwrap_or_default();
        match table {
            Some(table) if !table.is_empty() && !self.name.contains('.') => {
                format!("{}.{} = {}", table, self.name, literal)
            }
            _ => format!("{} = {}", self.name, literal),
        }
    }
}

/// 只有名字的字段，用于 SELECT 的列清单
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(pub String);

impl FieldName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn render(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FieldName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// 带排序方向的字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldWithSorting {
    pub name: String,
    pub ascending: bool,
}

impl FieldWithSorting {
    pub fn new(name: impl Into<String>, ascending: bool) -> Self {
        Self {
            name: name.into(),
            ascending,
        }
    }

    pub fn asc(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    pub fn desc(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    pub fn render(&self) -> String {
        if self.ascending {
            format!("{} ASC", self.name)
        } else {
            format!("{} DESC", self.name)
        }
    }
}

/// 两张表之间的 JOIN
///
/// 例：`JoinField::new("users", "user_reviews", "reviews", "id")`
/// 渲染为 `JOIN reviews ON users.user_reviews = reviews.id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinField {
    pub from_table: String,
    pub from_attribute: String,
    pub to_table: String,
    pub to_attribute: String,
}

impl JoinField {
    pub fn new(
        from_table: impl Into<String>,
        from_attribute: impl Into<String>,
        to_table: impl Into<String>,
        to_attribute: impl Into<String>,
    ) -> Self {
        Self {
            from_table: from_table.into(),
            from_attribute: from_attribute.into(),
            to_table: to_table.into(),
            to_attribute: to_attribute.into(),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "JOIN {} ON {}.{} = {}.{}",
            self.to_table, self.from_table, self.from_attribute, self.to_table, self.to_attribute
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_unqualified() {
        let f = FieldWithValue::new("height", 1.64);
        assert_eq!(f.render(None), "height = 1.64");
        assert_eq!(f.render(Some("")), "height = 1.64");
    }

    #[test]
    fn test_render_qualified() {
        let f = FieldWithValue::new("height", "1.64");
        assert_eq!(f.render(Some("players")), "players.height = 1.64");
    }

    #[test]
    fn test_render_already_qualified_name() {
        let f = FieldWithValue::new("goats.name", "Leo");
        assert_eq!(f.render(Some("players")), "goats.name = 'Leo'");
    }

    #[test]
    fn test_render_omitted_value_leaves_empty_literal() {
        let f = FieldWithValue::new("nickname", SqlValue::Null);
        assert_eq!(f.render(None), "nickname = ");
        assert_eq!(f.literal(), None);
    }

    #[test]
    fn test_render_negative_and_boolean() {
        assert_eq!(FieldWithValue::new("goals", -5).render(None), "goals = '-5'");
        assert_eq!(FieldWithValue::new("is_left", true).render(None), "is_left = true");
    }

    #[test]
    fn test_sorting() {
        assert_eq!(FieldWithSorting::asc("name").render(), "name ASC");
        assert_eq!(FieldWithSorting::desc("age").render(), "age DESC");
    }

    #[test]
    fn test_join() {
        let j = JoinField::new("users", "user_reviews", "reviews", "id");
        assert_eq!(j.render(), "JOIN reviews ON users.user_reviews = reviews.id");
    }

    #[test]
    fn test_descriptors_from_json() {
        let filters: Vec<FieldWithValue> = serde_json::from_str(
            r#"[{"name": "name", "value": {"Text": "Leo"}}, {"name": "retired"}]"#,
        )
        .unwrap();
        assert_eq!(filters[0], FieldWithValue::new("name", "Leo"));
        assert_eq!(filters[1].value, SqlValue::Null);

        let fields: Vec<FieldName> = serde_json::from_str(r#"["name", "surname"]"#).unwrap();
        assert_eq!(fields[1].render(), "surname");
    }
}
