//! Catch-all failure boundary.
//!
//! Wraps the application so that no failure reaches the client unmapped.
//! Responses whose body was produced from an error are rewritten into an
//! [`ErrorEnvelope`](crate::inbound::http::ErrorEnvelope). Errors returned
//! by inner middleware never became responses; they are replaced by a
//! [`RenderedFailure`](crate::inbound::http::RenderedFailure) that the
//! framework renders as the envelope. The rewritten response keeps the
//! original framework error so outer middleware can still inspect it.

use std::rc::Rc;
use std::task::{Context, Poll};

use actix_web::Error;
use actix_web::body::{BoxBody, EitherBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use futures_util::future::{LocalBoxFuture, Ready, ready};

use crate::inbound::http::{ErrorTranslator, Failure};

/// Middleware factory installing the [`ErrorTranslator`] boundary.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::App;
/// use mockable::DefaultClock;
/// use user_registry::CatchAll;
/// use user_registry::inbound::http::ErrorTranslator;
///
/// let translator = ErrorTranslator::new(Arc::new(DefaultClock));
/// let app = App::new().wrap(CatchAll::new(translator));
/// ```
#[derive(Clone)]
pub struct CatchAll {
    translator: ErrorTranslator,
}

impl CatchAll {
    /// Create the boundary around `translator`.
    pub fn new(translator: ErrorTranslator) -> Self {
        Self { translator }
    }
}

impl<S, B> Transform<S, ServiceRequest> for CatchAll
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B, BoxBody>>;
    type Error = Error;
    type InitError = ();
    type Transform = CatchAllMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CatchAllMiddleware {
            service,
            translator: Rc::new(self.translator.clone()),
        }))
    }
}

/// Service wrapper produced by [`CatchAll`].
pub struct CatchAllMiddleware<S> {
    service: S,
    translator: Rc<ErrorTranslator>,
}

impl<S, B> Service<ServiceRequest> for CatchAllMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B, BoxBody>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request_path = req
            .uri()
            .path_and_query()
            .map_or_else(|| req.path().to_owned(), ToString::to_string);
        let translator = Rc::clone(&self.translator);
        // No copy of the request may outlive this call: routing needs
        // exclusive access to it.
        let fut = self.service.call(req);

        Box::pin(async move {
            match fut.await {
                Ok(res) => {
                    let Some(failure) = res.response().error().map(Failure::from_actix) else {
                        return Ok(res.map_into_left_body());
                    };
                    let (request, response) = res.into_parts();
                    let rewritten = translator.rewrite(response, failure, &request_path);
                    Ok(ServiceResponse::new(request, rewritten).map_into_right_body())
                }
                Err(error) => Err(translator.reject(Failure::from_actix(&error), &request_path)),
            }
        })
    }
}
