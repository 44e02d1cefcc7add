/// コマンド：会員を登録する
///
/// 名前は未検証の入力のまま受け取り、アプリケーション層で `MemberName` に変換する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinMember {
    pub name: String,
}

impl JoinMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
