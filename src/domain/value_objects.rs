use std::fmt;

use super::errors::InvalidMemberName;

/// 会員名の最大文字数（`member.name` カラム幅と一致）
pub const MAX_MEMBER_NAME_CHARS: usize = 255;

/// 会員ID - 保存時にリポジトリが採番する生成キー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberId(i64);

impl MemberId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 会員名
///
/// 不変条件：空白のみでなく、制御文字を含まず、`MAX_MEMBER_NAME_CHARS` 文字以内。
/// 生成時に前後の空白を除去するため、`" spring "` と `"spring"` は
/// 重複判定上同じ名前になる。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberName(String);

impl MemberName {
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, InvalidMemberName> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(InvalidMemberName::Empty);
        }

        // NULはPostgreSQLのtext型に保存できない
        if trimmed.chars().any(char::is_control) {
            return Err(InvalidMemberName::ControlCharacter);
        }

        let chars = trimmed.chars().count();
        if chars > MAX_MEMBER_NAME_CHARS {
            return Err(InvalidMemberName::TooLong {
                max: MAX_MEMBER_NAME_CHARS,
                actual: chars,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for MemberName {
    type Error = InvalidMemberName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for MemberName {
    type Error = InvalidMemberName;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<str> for MemberName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // MemberName のテスト
    #[test]
    fn test_member_name_parse_success() {
        let name = MemberName::parse("spring").unwrap();
        assert_eq!(name.as_str(), "spring");
    }

    #[test]
    fn test_member_name_is_trimmed() {
        let name = MemberName::parse("  spring \n").unwrap();
        assert_eq!(name, MemberName::parse("spring").unwrap());
    }

    #[test]
    fn test_member_name_rejects_blank() {
        assert_eq!(MemberName::parse(""), Err(InvalidMemberName::Empty));
        assert_eq!(MemberName::parse("   \t"), Err(InvalidMemberName::Empty));
    }

    #[test]
    fn test_member_name_rejects_nul() {
        assert_eq!(
            MemberName::parse("spr\0ing"),
            Err(InvalidMemberName::ControlCharacter)
        );
    }

    #[test]
    fn test_member_name_rejects_inner_control_characters() {
        assert_eq!(
            MemberName::parse("spr\ning"),
            Err(InvalidMemberName::ControlCharacter)
        );
        assert_eq!(
            MemberName::parse("spring\u{7f}"),
            Err(InvalidMemberName::ControlCharacter)
        );
    }

    #[test]
    fn test_member_name_length_limit_counts_chars() {
        // マルチバイト文字はバイト数ではなく文字数で数える
        let at_limit = "회".repeat(MAX_MEMBER_NAME_CHARS);
        assert!(MemberName::parse(&at_limit).is_ok());

        let over_limit = "a".repeat(MAX_MEMBER_NAME_CHARS + 1);
        assert_eq!(
            MemberName::parse(&over_limit),
            Err(InvalidMemberName::TooLong {
                max: MAX_MEMBER_NAME_CHARS,
                actual: MAX_MEMBER_NAME_CHARS + 1,
            })
        );
    }

    // MemberId のテスト
    #[test]
    fn test_member_id_ordering_and_value() {
        let first = MemberId::new(1);
        let second = MemberId::new(2);
        assert!(first < second);
        assert_eq!(second.value(), 2);
        assert_eq!(first.to_string(), "1");
    }
}
