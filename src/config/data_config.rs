//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 세션 저장소, 서버, 환경 및 비밀번호 해싱 관련 설정을 관리합니다.

use super::{var_or, EnvLookup};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 값으로 환경을 결정합니다. 알 수 없는 값은 Production으로 취급합니다.
    pub fn from_lookup(lookup: &EnvLookup) -> Self {
        Self::from_str(&var_or(lookup, "ENVIRONMENT", "production"))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// bcrypt 비용 설정
///
/// `BCRYPT_COST`가 4-15 범위이면 그 값을, 아니면 환경별 기본값을 사용합니다.
pub struct PasswordConfig;

impl PasswordConfig {
    pub fn bcrypt_cost(lookup: &EnvLookup, env: &Environment) -> u32 {
        if let Some(cost) = lookup("BCRYPT_COST").and_then(|v| v.parse::<u32>().ok()) {
            if (4..=15).contains(&cost) {
                return cost;
            }
            log::warn!("BCRYPT_COST={} 범위 밖(4-15), 환경 기본값 사용", cost);
        }

        Self::bcrypt_cost_for_env(env)
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// HTTP 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_lookup(lookup: &EnvLookup) -> Self {
        let port = var_or(lookup, "PORT", "3000").parse().unwrap_or_else(|e| {
            log::error!("PORT 파싱 실패: {}. 기본값 3000 사용", e);
            3000
        });

        Self {
            host: var_or(lookup, "HOST", "127.0.0.1"),
            port,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MongoDB 및 Redis 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// MongoDB 연결 URI
    pub mongodb_uri: String,
    /// 사용할 데이터베이스 이름
    pub database_name: String,
    /// 세션 저장소로 사용하는 Redis URL
    pub redis_url: String,
}

impl DatabaseConfig {
    pub fn from_lookup(lookup: &EnvLookup) -> Self {
        Self {
            mongodb_uri: var_or(lookup, "MONGODB_URI", "mongodb://localhost:27017"),
            database_name: var_or(lookup, "DATABASE_NAME", "userDB"),
            redis_url: var_or(lookup, "REDIS_URL", "redis://localhost:6379"),
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_lookup(lookup: &EnvLookup) -> Self {
        let per_second = var_or(lookup, "RATE_LIMIT_PER_SECOND", "100")
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = var_or(lookup, "RATE_LIMIT_BURST_SIZE", "200")
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self { per_second, burst_size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> Box<EnvLookup> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Box::new(move |key| map.get(key).cloned())
    }

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_bcrypt_cost_override_is_bounded() {
        let valid = lookup_from(&[("BCRYPT_COST", "6")]);
        assert_eq!(PasswordConfig::bcrypt_cost(&valid, &Environment::Production), 6);

        let too_high = lookup_from(&[("BCRYPT_COST", "31")]);
        assert_eq!(PasswordConfig::bcrypt_cost(&too_high, &Environment::Staging), 10);
    }

    #[test]
    fn test_server_and_database_defaults() {
        let empty = lookup_from(&[]);

        let server = ServerConfig::from_lookup(&empty);
        assert_eq!(server.bind_address(), "127.0.0.1:3000");

        let db = DatabaseConfig::from_lookup(&empty);
        assert_eq!(db.mongodb_uri, "mongodb://localhost:27017");
        assert_eq!(db.database_name, "userDB");
        assert_eq!(db.redis_url, "redis://localhost:6379");
    }

    #[test]
    fn test_bad_port_falls_back_to_default() {
        let lookup = lookup_from(&[("PORT", "not-a-port")]);
        assert_eq!(ServerConfig::from_lookup(&lookup).port, 3000);
    }
}
