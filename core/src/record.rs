//! 记录投影，供 `#[derive(Record)]` 生成的代码使用
//!
//! 把一条记录按字段声明顺序展开为 (列名, 值) 列表。
//! 复合类型的字段也会出现在投影中，到生成 INSERT 时才被省略。

use crate::field::FieldWithValue;
use crate::value::SqlValue;

/// 投影出的单个字段
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedField {
    pub name: String,
    pub value: SqlValue,
}

impl ProjectedField {
    pub fn new(name: impl Into<String>, value: impl Into<SqlValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl From<ProjectedField> for FieldWithValue {
    fn from(p: ProjectedField) -> Self {
        FieldWithValue {
            name: p.name,
            value: p.value,
        }
    }
}

/// 可投影为字段列表的记录
///
/// 通常由 `#[derive(Record)]` 实现：
/// ```ignore
/// #[derive(Record)]
/// struct BasketPlayer {
///     id: i64,
///     #[column(name = "full_name", omit_empty)]
///     name: String,
///     nicknames: Vec<String>,
/// }
/// ```
/// 列名取 `column(name = ...)`，未设置、为空或为 `"-"` 时取小写的字段名。
/// 标记 `omit_empty` 的文本字段为空字符串时不参与投影。
///
/// 也可以直接传入 `Vec<ProjectedField>` 作为显式的字段描述列表。
///
/// 元组结构体、枚举以及未知的 `column` 键都无法派生：
/// ```compile_fail
/// use strikeql::Record;
///
/// #[derive(Record)]
/// struct Pair(i64, String);
/// ```
/// ```compile_fail
/// use strikeql::Record;
///
/// #[derive(Record)]
/// enum Side {
///     Left,
///     Right,
/// }
/// ```
/// ```compile_fail
/// use strikeql::Record;
///
/// #[derive(Record)]
/// struct Player {
///     #[column(rename = "full_name")]
///     name: String,
/// }
/// ```
/// ```compile_fail
/// use strikeql::Record;
///
/// #[derive(Record)]
/// struct Player {
///     #[column(name = 42)]
///     name: String,
/// }
/// ```
/// 对照，合法的定义可以正常编译：
/// ```
/// use strikeql::{make_insert_query_with_record, Record};
///
/// #[derive(Record)]
/// struct Player {
///     #[column(name = "full_name", omit_empty)]
///     name: String,
/// }
///
/// let player = Player { name: "Leo".to_string() };
/// assert_eq!(
///     make_insert_query_with_record("players", &player),
///     "INSERT INTO players (full_name) VALUES ('Leo');"
/// );
/// ```
pub trait Record {
    fn project(&self) -> Vec<ProjectedField>;
}

impl Record for [ProjectedField] {
    fn project(&self) -> Vec<ProjectedField> {
        self.to_vec()
    }
}

impl Record for Vec<ProjectedField> {
    fn project(&self) -> Vec<ProjectedField> {
        self.clone()
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn project(&self) -> Vec<ProjectedField> {
        (**self).project()
    }
}

/// 将记录转换为 INSERT 使用的字段列表
pub fn project_record<R: Record + ?Sized>(record: &R) -> Vec<FieldWithValue> {
    record.project().into_iter().map(FieldWithValue::from).collect()
}
