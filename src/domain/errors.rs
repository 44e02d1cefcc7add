use thiserror::Error;

/// 会員名のバリデーションエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMemberName {
    /// 空文字または空白のみ
    #[error("Member name must not be blank")]
    Empty,

    /// 制御文字（NULなど）を含む
    #[error("Member name must not contain control characters")]
    ControlCharacter,

    /// 最大文字数を超えた
    #[error("Member name is too long ({actual} characters, max {max})")]
    TooLong { max: usize, actual: usize },
}
