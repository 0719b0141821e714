//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 정보는 [`DatabaseConfig`]에서 전달받습니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Database::connect(&config.database).await?;
//! let users = database.get_database().collection::<User>("users");
//! ```

use mongodb::{Client, options::ClientOptions};

use crate::config::DatabaseConfig;
use crate::errors::AppResult;

/// MongoDB 데이터베이스 연결 래퍼
///
/// `mongodb::Client`는 내부적으로 연결 풀을 공유하므로 복제 비용이 낮습니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// MongoDB에 연결하고 `ping`으로 연결 상태를 검증합니다.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.mongodb_uri).await?;
        client_options.app_name = Some("secrets_auth".to_string());

        let client = Client::with_options(client_options)?;

        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// 리포지토리에서 컬렉션에 접근할 때 사용하는 데이터베이스 핸들
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
