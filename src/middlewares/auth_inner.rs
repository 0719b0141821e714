use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, HttpResponse, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::core::AppContext;
use crate::domain::models::auth::SessionUser;
use crate::errors::{AppError, AppResult};
use crate::middlewares::auth_middleware::session_from_request;

pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            match resolve_session(&req).await {
                Ok(Some(user)) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                Ok(None) => {
                    log::debug!("세션 없음, /login 으로 리다이렉트: {}", req.path());
                    let response = HttpResponse::Found()
                        .insert_header((header::LOCATION, "/login"))
                        .finish();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
                Err(err) => {
                    // 저장소 장애는 익명으로 취급하지 않습니다.
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

async fn resolve_session(req: &ServiceRequest) -> AppResult<Option<SessionUser>> {
    let context = req
        .app_data::<web::Data<AppContext>>()
        .cloned()
        .ok_or_else(|| AppError::InternalError("AppContext is not registered".to_string()))?;

    session_from_request(req.request(), &context).await
}
