//! 值格式化模块
//!
//! 将单个值转换为 MySQL 字面量文本。数字和布尔值原样输出，
//! 时间统一转为 UTC 的 `YYYY-MM-DD HH:MM:SS`，其余一律加单引号。
//! 空值、空字符串和复合类型（列表、映射等）不产生字面量。

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::OnceLock;

/// MySQL DATETIME 字面量格式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 无符号整数或小数；负数不匹配，会被当作字符串加引号
fn numeric_regex() -> &'static regex::Regex {
    static NUMERIC_RE: OnceLock<regex::Regex> = OnceLock::new();
    NUMERIC_RE.get_or_init(|| {
        regex::Regex::new(r"^[0-9]+(\.[0-9]+)?$").expect("invalid built-in numeric regex")
    })
}

fn is_numeric_text(text: &str) -> bool {
    numeric_regex().is_match(text)
}

fn is_boolean_text(text: &str) -> bool {
    text == "true" || text == "false"
}

/// 浮点数的文本形式
///
/// 使用最短的可还原位数；指数小于 -4 或不小于 21 时改用科学计数法，
/// 指数至少两位并带符号（`1e-05`、`1.5e+21`）。无穷写作 `+Inf`/`-Inf`。
fn float_text<F>(f: F) -> String
where
    F: fmt::Display + fmt::LowerExp + Into<f64> + Copy,
{
    let v: f64 = f.into();
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let sci = format!("{:e}", f);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return f.to_string();
    };
    match exp.parse::<i32>() {
        Ok(exp) if exp < -4 || exp >= 21 => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        _ => f.to_string(),
    }
}

/// 字段值
///
/// 取值集合是封闭的：`Unsupported` 代表列表、映射等复合值，
/// 和 `Null` 一样在格式化时被省略。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    #[default]
    Null,
    Int(i64),
    UInt(u64),
    Float32(f32),
    Float64(f64),
    Decimal(BigDecimal),
    Text(String),
    Bool(bool),
    Timestamp(DateTime<Utc>),
    Unsupported,
}

impl SqlValue {
    /// 值的自然文本形式，Null 与 Unsupported 没有文本
    fn natural_text(&self) -> Option<String> {
        match self {
            SqlValue::Null | SqlValue::Unsupported => None,
            SqlValue::Int(i) => Some(i.to_string()),
            SqlValue::UInt(u) => Some(u.to_string()),
            SqlValue::Float32(f) => Some(float_text(*f)),
            SqlValue::Float64(f) => Some(float_text(*f)),
            SqlValue::Decimal(d) => Some(d.to_string()),
            SqlValue::Text(s) => Some(s.clone()),
            SqlValue::Bool(b) => Some(b.to_string()),
            SqlValue::Timestamp(t) => Some(t.format(TIMESTAMP_FORMAT).to_string()),
        }
    }

    /// 转换为 SQL 字面量，返回 `None` 表示该字段应被省略
    ///
    /// 字符串中的单引号不做转义，由调用方负责。
    pub fn to_literal(&self) -> Option<String> {
        let text = self.natural_text()?;
        if text.is_empty() {
            return None;
        }
        if is_numeric_text(&text) || is_boolean_text(&text) {
            return Some(text);
        }
        Some(format!("'{}'", text))
    }
}

macro_rules! impl_integer {
    ($variant:ident, $target:ty; $($t:ty),*) => {
        $(
            impl From<$t> for SqlValue {
                fn from(v: $t) -> Self {
                    SqlValue::$variant(v as $target)
                }
            }

            impl ToSqlValue for $t {
                fn to_sql_value(&self) -> SqlValue {
                    SqlValue::from(*self)
                }
            }
        )*
    };
}

impl_integer!(Int, i64; i8, i16, i32, i64, isize);
impl_integer!(UInt, u64; u8, u16, u32, u64, usize);

impl From<f32> for SqlValue {
    fn from(f: f32) -> Self {
        SqlValue::Float32(f)
    }
}

impl From<f64> for SqlValue {
    fn from(f: f64) -> Self {
        SqlValue::Float64(f)
    }
}

impl From<bool> for SqlValue {
    fn from(b: bool) -> Self {
        SqlValue::Bool(b)
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        SqlValue::Text(s)
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::Text(s.to_string())
    }
}

impl From<Cow<'_, str>> for SqlValue {
    fn from(s: Cow<'_, str>) -> Self {
        SqlValue::Text(s.into_owned())
    }
}

impl From<BigDecimal> for SqlValue {
    fn from(d: BigDecimal) -> Self {
        SqlValue::Decimal(d)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for SqlValue {
    fn from(t: DateTime<Tz>) -> Self {
        SqlValue::Timestamp(t.with_timezone(&Utc))
    }
}

/// 不带时区的时间按 UTC 处理
impl From<NaiveDateTime> for SqlValue {
    fn from(t: NaiveDateTime) -> Self {
        SqlValue::Timestamp(t.and_utc())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(SqlValue::Null, Into::into)
    }
}

impl From<serde_json::Value> for SqlValue {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value;
        match v {
            Value::Null => SqlValue::Null,
            Value::Bool(b) => SqlValue::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    SqlValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    SqlValue::UInt(u)
                } else {
                    n.as_f64().map_or(SqlValue::Unsupported, SqlValue::Float64)
                }
            }
            Value::String(s) => SqlValue::Text(s),
            Value::Array(_) | Value::Object(_) => SqlValue::Unsupported,
        }
    }
}

/// 按引用转换为 SqlValue，`#[derive(Record)]` 生成的代码通过它读取字段
pub trait ToSqlValue {
    fn to_sql_value(&self) -> SqlValue;

    /// 是否为空字符串；只有文本类型可能返回 true
    fn is_empty_text(&self) -> bool {
        false
    }
}

impl<T: ToSqlValue + ?Sized> ToSqlValue for &T {
    fn to_sql_value(&self) -> SqlValue {
        (**self).to_sql_value()
    }

    fn is_empty_text(&self) -> bool {
        (**self).is_empty_text()
    }
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(&self) -> SqlValue {
        self.clone()
    }

    fn is_empty_text(&self) -> bool {
        matches!(self, SqlValue::Text(s) if s.is_empty())
    }
}

impl ToSqlValue for str {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Text(self.to_string())
    }

    fn is_empty_text(&self) -> bool {
        self.is_empty()
    }
}

impl ToSqlValue for String {
    fn to_sql_value(&self) -> SqlValue {
        self.as_str().to_sql_value()
    }

    fn is_empty_text(&self) -> bool {
        self.is_empty()
    }
}

impl ToSqlValue for Cow<'_, str> {
    fn to_sql_value(&self) -> SqlValue {
        str::to_sql_value(self)
    }

    fn is_empty_text(&self) -> bool {
        self.is_empty()
    }
}

impl ToSqlValue for f32 {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Float32(*self)
    }
}

impl ToSqlValue for f64 {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Float64(*self)
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Bool(*self)
    }
}

impl ToSqlValue for BigDecimal {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Decimal(self.clone())
    }
}

impl<Tz: TimeZone> ToSqlValue for DateTime<Tz> {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Timestamp(self.with_timezone(&Utc))
    }
}

impl ToSqlValue for NaiveDateTime {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Timestamp(self.and_utc())
    }
}

impl ToSqlValue for serde_json::Value {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::from(self.clone())
    }

    fn is_empty_text(&self) -> bool {
        matches!(self, serde_json::Value::String(s) if s.is_empty())
    }
}

/// Option 字段不视为文本类型，`omit_empty` 对它无效
impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(&self) -> SqlValue {
        match self {
            Some(v) => v.to_sql_value(),
            None => SqlValue::Null,
        }
    }
}

// 复合类型一律视为不支持，格式化时省略
impl<T> ToSqlValue for Vec<T> {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Unsupported
    }
}

impl<T> ToSqlValue for [T] {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Unsupported
    }
}

impl<K, V, S> ToSqlValue for HashMap<K, V, S> {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Unsupported
    }
}

impl<K, V> ToSqlValue for BTreeMap<K, V> {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Unsupported
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate};
    use std::str::FromStr;

    fn literal(v: impl Into<SqlValue>) -> Option<String> {
        v.into().to_literal()
    }

    #[test]
    fn test_numbers_are_unquoted() {
        assert_eq!(literal(8), Some("8".to_string()));
        assert_eq!(literal(1.64), Some("1.64".to_string()));
        assert_eq!(literal(33.643f32), Some("33.643".to_string()));
        assert_eq!(literal(42u64), Some("42".to_string()));
    }

    #[test]
    fn test_float_exponent_form_is_quoted() {
        assert_eq!(literal(0.00001), Some("'1e-05'".to_string()));
        assert_eq!(literal(1e21), Some("'1e+21'".to_string()));
        assert_eq!(literal(1.5e300), Some("'1.5e+300'".to_string()));
        assert_eq!(literal(1e-7f32), Some("'1e-07'".to_string()));
        // 指数在 [-4, 21) 内仍是普通小数
        assert_eq!(literal(0.0001), Some("0.0001".to_string()));
        assert_eq!(literal(1e20), Some("100000000000000000000".to_string()));
        assert_eq!(literal(0.0), Some("0".to_string()));
    }

    #[test]
    fn test_float_special_values() {
        assert_eq!(literal(f64::INFINITY), Some("'+Inf'".to_string()));
        assert_eq!(literal(f64::NEG_INFINITY), Some("'-Inf'".to_string()));
        assert_eq!(literal(f32::NAN), Some("'NaN'".to_string()));
    }

    #[test]
    fn test_negative_numbers_are_quoted() {
        assert_eq!(literal(-5), Some("'-5'".to_string()));
        assert_eq!(literal(-1.5), Some("'-1.5'".to_string()));
    }

    #[test]
    fn test_booleans_are_unquoted() {
        assert_eq!(literal(true), Some("true".to_string()));
        assert_eq!(literal(false), Some("false".to_string()));
    }

    #[test]
    fn test_text_that_looks_numeric_or_boolean() {
        assert_eq!(literal("1.64"), Some("1.64".to_string()));
        assert_eq!(literal("23"), Some("23".to_string()));
        assert_eq!(literal("true"), Some("true".to_string()));
        assert_eq!(literal("1."), Some("'1.'".to_string()));
    }

    #[test]
    fn test_text_is_quoted_without_escaping() {
        assert_eq!(literal("Leo"), Some("'Leo'".to_string()));
        assert_eq!(literal("O'Neal"), Some("'O'Neal'".to_string()));
    }

    #[test]
    fn test_omitted_values() {
        assert_eq!(SqlValue::Null.to_literal(), None);
        assert_eq!(SqlValue::Unsupported.to_literal(), None);
        assert_eq!(literal(""), None);
        assert_eq!(literal(None::<i32>), None);
    }

    #[test]
    fn test_timestamp_is_converted_to_utc() {
        let offset = FixedOffset::west_opt(3 * 3600).unwrap();
        let birth = offset
            .with_ymd_and_hms(1978, 8, 23, 0, 0, 0)
            .single()
            .unwrap();
        assert_eq!(literal(birth), Some("'1978-08-23 03:00:00'".to_string()));
    }

    #[test]
    fn test_naive_timestamp_is_taken_as_utc() {
        let t = NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(7, 8, 9)
            .unwrap();
        assert_eq!(literal(t), Some("'2024-01-05 07:08:09'".to_string()));
    }

    #[test]
    fn test_decimal() {
        let d = BigDecimal::from_str("1.50").unwrap();
        assert_eq!(literal(d), Some("1.50".to_string()));
    }

    #[test]
    fn test_from_json() {
        assert_eq!(SqlValue::from(serde_json::json!(-3)), SqlValue::Int(-3));
        assert_eq!(SqlValue::from(serde_json::json!("x")), SqlValue::Text("x".into()));
        assert_eq!(SqlValue::from(serde_json::json!(null)), SqlValue::Null);
        assert_eq!(
            SqlValue::from(serde_json::json!(["a", "b"])),
            SqlValue::Unsupported
        );
        assert_eq!(
            SqlValue::from(serde_json::json!({"a": 1})),
            SqlValue::Unsupported
        );
    }

    #[test]
    fn test_to_sql_value_by_reference() {
        let nicknames = vec!["Black Mamba".to_string()];
        assert_eq!(nicknames.to_sql_value(), SqlValue::Unsupported);
        assert_eq!(Some(3i32).to_sql_value(), SqlValue::Int(3));
        assert!(String::new().is_empty_text());
        assert!("".is_empty_text());
        assert!(!Some(String::new()).is_empty_text());
        assert!(!0i64.is_empty_text());
    }
}
