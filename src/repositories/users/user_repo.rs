//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션 기반의 [`UserStore`] 구현입니다.
//!
//! ## 인덱스
//!
//! | 이름 | 필드 | 속성 |
//! |------|------|------|
//! | `username_unique` | `username` | UNIQUE, partial (`$exists`) |
//! | `google_id_unique` | `googleId` | UNIQUE, partial (`$exists`) |
//! | `facebook_id_unique` | `facebookId` | UNIQUE, partial (`$exists`) |
//! | `secret_partial` | `secret` | partial (`$exists`) |
//!
//! partial 인덱스이므로 해당 필드가 없는 레코드끼리는 충돌하지 않습니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info};
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime, Document},
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    config::IdentityProvider,
    db::Database,
    domain::entities::users::User,
    errors::{AppError, AppResult},
};
use super::UserStore;

const COLLECTION_NAME: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB 사용자 리포지토리
#[derive(Clone)]
pub struct MongoUserRepository {
    db: Database,
}

impl MongoUserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn collection<T: Send + Sync>(&self) -> Collection<T> {
        self.db.get_database().collection::<T>(COLLECTION_NAME)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 시작 시 한 번 호출합니다. 이미 존재하는 인덱스는 그대로 둡니다.
    /// 기존 데이터에 중복 값이 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let collection = self.collection::<User>();

        let indexes = vec![
            unique_partial_index("username", "username_unique"),
            unique_partial_index(IdentityProvider::Google.id_field(), "google_id_unique"),
            unique_partial_index(IdentityProvider::Facebook.id_field(), "facebook_id_unique"),
            IndexModel::builder()
                .keys(doc! { "secret": 1 })
                .options(IndexOptions::builder()
                    .name("secret_partial".to_string())
                    .partial_filter_expression(doc! { "secret": { "$exists": true } })
                    .build())
                .build(),
        ];

        collection.create_indexes(indexes).await?;

        info!("✅ users 컬렉션 인덱스 준비 완료");
        Ok(())
    }
}

fn unique_partial_index(field: &str, name: &str) -> IndexModel {
    let mut keys = Document::new();
    keys.insert(field, 1);

    let mut partial = Document::new();
    partial.insert(field, doc! { "$exists": true });

    IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder()
            .unique(true)
            .name(name.to_string())
            .partial_filter_expression(partial)
            .build())
        .build()
}

fn provider_filter(provider: IdentityProvider, provider_id: &str) -> Document {
    let mut filter = Document::new();
    filter.insert(provider.id_field(), provider_id);
    filter
}

/// 유니크 인덱스 충돌(E11000) 여부
///
/// `insert_one`은 WriteError로, `find_one_and_update` upsert는 CommandError로 보고됩니다.
fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(e) => e.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = self.collection::<User>()
            .find_one(doc! { "username": username })
            .await?;

        Ok(user)
    }

    async fn create(&self, user: User) -> AppResult<User> {
        match self.collection::<User>().insert_one(&user).await {
            Ok(_) => Ok(user),
            Err(e) if is_duplicate_key(&e) => Err(AppError::DuplicateUsername),
            Err(e) => Err(e.into()),
        }
    }

    async fn find_or_create_by_provider(
        &self,
        provider: IdentityProvider,
        provider_id: &str,
    ) -> AppResult<User> {
        let filter = provider_filter(provider, provider_id);
        let now = DateTime::now();

        // 필터의 동등 조건 필드는 upsert 시 자동으로 문서에 포함됩니다.
        let update = doc! {
            "$setOnInsert": {
                "created_at": now,
                "updated_at": now,
            }
        };

        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let result = self.collection::<User>()
            .find_one_and_update(filter.clone(), update)
            .with_options(options)
            .await;

        match result {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(AppError::InternalError(format!(
                "upsert returned no document for {}",
                provider.as_str()
            ))),
            Err(e) if is_duplicate_key(&e) => {
                // 동시 upsert 경합에서 진 쪽은 승자가 만든 레코드를 다시 읽습니다.
                debug!("{} upsert 경합 발생, 기존 레코드 재조회", provider.as_str());
                self.collection::<User>()
                    .find_one(filter)
                    .await?
                    .ok_or_else(|| AppError::InternalError(format!(
                        "{} record vanished after duplicate key",
                        provider.as_str()
                    )))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn set_secret(&self, id: &str, secret: &str) -> AppResult<bool> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(false);
        };

        let result = self.collection::<User>()
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": { "secret": secret, "updated_at": DateTime::now() } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn list_secrets(&self) -> AppResult<Vec<String>> {
        let cursor = self.collection::<Document>()
            .find(doc! { "secret": { "$exists": true, "$ne": null } })
            .projection(doc! { "_id": 0, "secret": 1 })
            .sort(doc! { "_id": 1 })
            .await?;

        let documents: Vec<Document> = cursor.try_collect().await?;

        Ok(documents
            .into_iter()
            .filter_map(|d| d.get_str("secret").ok().map(str::to_string))
            .collect())
    }
}
