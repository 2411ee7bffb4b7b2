//! 工具函数模块

/// 记录生成的 SQL（需要开启 `tracing` feature）
#[cfg(feature = "tracing")]
pub(crate) fn trace_sql(kind: &'static str, sql: &str) {
    tracing::debug!(target: "strikeql::sql", kind, sql, "generated statement");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_sql(_kind: &'static str, _sql: &str) {}

/// 记录合并失败的原因（需要开启 `tracing` feature）
#[cfg(feature = "tracing")]
pub(crate) fn trace_merge_error(err: &crate::error::StrikeError) {
    tracing::warn!(target: "strikeql::sql", error = %err, "failed to merge insert statements");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn trace_merge_error(_err: &crate::error::StrikeError) {}
