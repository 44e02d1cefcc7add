use super::{MemberId, MemberName};

/// 未保存の会員
///
/// IDを持たない。リポジトリが保存時にIDを採番し [`Member`] を返す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: MemberName,
}

impl NewMember {
    pub fn new(name: MemberName) -> Self {
        Self { name }
    }

    /// ストレージが採番したIDを付与する
    pub fn into_member(self, id: MemberId) -> Member {
        Member {
            id,
            name: self.name,
        }
    }
}

/// 保存済みの会員
///
/// 保存後に変更されることはない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub name: MemberName,
}
