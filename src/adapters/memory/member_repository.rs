use crate::domain::{Member, MemberId, MemberName, NewMember};
use crate::ports::member_repository::{MemberRepository as MemberRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

struct Store {
    members: BTreeMap<MemberId, Member>,
    sequence: i64,
}

/// MemberRepositoryのインメモリ実装
///
/// 会員をIDをキーとするマップに保持する。IDは1から始まる連番で、
/// `clear_store` でもリセットされない。
/// 名前の一意性は強制しない（会員サービスの責務）。
pub struct MemberRepository {
    store: Mutex<Store>,
}

impl MemberRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store {
                members: BTreeMap::new(),
                sequence: 0,
            }),
        }
    }

    /// 保存済みの会員をすべて削除する（テストの独立性のため）
    pub fn clear_store(&self) {
        self.lock().members.clear();
    }

    pub fn len(&self) -> usize {
        self.lock().members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        // 単純なデータのみ保持しているため、poisonされても状態は壊れない
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MemberRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberRepositoryTrait for MemberRepository {
    async fn save(&self, member: NewMember) -> Result<Member> {
        let mut store = self.lock();
        store.sequence += 1;
        let saved = member.into_member(MemberId::new(store.sequence));
        store.members.insert(saved.id, saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: MemberId) -> Result<Option<Member>> {
        Ok(self.lock().members.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &MemberName) -> Result<Option<Member>> {
        Ok(self
            .lock()
            .members
            .values()
            .find(|member| &member.name == name)
            .cloned())
    }

    /// ID順で返す
    async fn find_all(&self) -> Result<Vec<Member>> {
        Ok(self.lock().members.values().cloned().collect())
    }
}
