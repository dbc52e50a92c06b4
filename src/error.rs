//! 库内统一错误类型。
//!
//! 所有校验都在组件入口完成，出错时不会返回部分结果。

/// 库内使用的 Result 别名
pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// 两两比较的两条序列长度不同
    #[error("sequence lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    /// 等长序列集合中某条记录与第一条记录长度不一致
    #[error("record #{index} ('{id}') has length {got}, expected {expected}")]
    ShapeMismatch {
        index: usize,
        id: String,
        expected: usize,
        got: usize,
    },

    /// 序列条数不足以执行该操作
    #[error("{operation} requires at least {required} sequence(s), got {got}")]
    InputArity {
        operation: &'static str,
        required: usize,
        got: usize,
    },

    /// 无法解析的输入（没有 FASTA 记录、未知密码子等）
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// 参数超出允许范围
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
