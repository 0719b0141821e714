//! # Application Context
//!
//! 프로세스 전체에서 공유하는 상태(설정, 저장소, 서비스, 쿠키 키, OAuth 클라이언트)를
//! 한곳에 모은 객체입니다. `main`에서 한 번 구성하고 `web::Data`로 모든 핸들러와
//! 미들웨어에 전달합니다.
//!
//! ```text
//! AppConfig ─┐
//! UserStore ─┼─► AppContext ─► web::Data<AppContext> ─► handlers / AuthMiddleware
//! SessionStore┘
//! ```

use std::sync::Arc;

use crate::config::{AppConfig, IdentityProvider};
use crate::repositories::sessions::SessionStore;
use crate::repositories::users::UserStore;
use crate::services::auth::{
    CookieSigner, FacebookAuthService, GoogleAuthService, IdentityReconciler, OAuthProvider,
    SessionService,
};
use crate::services::users::{CredentialService, SecretService};

pub struct AppContext {
    pub config: AppConfig,
    pub credentials: CredentialService,
    pub secrets: SecretService,
    pub reconciler: IdentityReconciler,
    pub sessions: SessionService,
    pub cookies: CookieSigner,
    google: Arc<dyn OAuthProvider>,
    facebook: Arc<dyn OAuthProvider>,
}

impl AppContext {
    /// 운영 구성: 설정값으로 Google, Facebook 클라이언트를 만듭니다.
    pub fn new(
        config: AppConfig,
        users: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        let http = reqwest::Client::new();
        let google = Arc::new(GoogleAuthService::new(config.google.clone(), http.clone()));
        let facebook = Arc::new(FacebookAuthService::new(config.facebook.clone(), http));

        Self::with_providers(config, users, sessions, google, facebook)
    }

    pub fn with_providers(
        config: AppConfig,
        users: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionStore>,
        google: Arc<dyn OAuthProvider>,
        facebook: Arc<dyn OAuthProvider>,
    ) -> Self {
        Self {
            credentials: CredentialService::new(users.clone(), config.bcrypt_cost),
            secrets: SecretService::new(users.clone()),
            reconciler: IdentityReconciler::new(users),
            sessions: SessionService::new(sessions, config.session.ttl_seconds),
            cookies: CookieSigner::new(&config.session.secret, config.session.secure_cookies),
            google,
            facebook,
            config,
        }
    }

    pub fn oauth_provider(&self, provider: IdentityProvider) -> &dyn OAuthProvider {
        match provider {
            IdentityProvider::Google => self.google.as_ref(),
            IdentityProvider::Facebook => self.facebook.as_ref(),
        }
    }
}
