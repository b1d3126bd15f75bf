//! Request extractors shared by HTTP handlers.

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::Error;
use crate::inbound::http::sanitiser::{SanitisedInput, sanitise_ingredient_input};

/// JSON body extractor that sanitises text fields before decoding `T`.
///
/// The body must be a JSON object. It is logged at `debug`, cleaned with
/// [`sanitise_ingredient_input`], then deserialised into `T`; decoding failures become
/// `400 Bad Request` responses.
///
/// # Examples
/// ```
/// use actix_web::{post, HttpResponse};
/// use food_orders::inbound::http::extractors::SanitisedJson;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Body {
///     name: String,
/// }
///
/// #[post("/echo")]
/// async fn echo(SanitisedJson(body): SanitisedJson<Body>) -> HttpResponse {
///     HttpResponse::Ok().body(body.name)
/// }
/// ```
#[derive(Debug)]
pub struct SanitisedJson<T>(pub T);

impl<T> SanitisedJson<T> {
    /// Consume the extractor, returning the decoded body.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for SanitisedJson<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = web::Json::<Value>::from_request(req, payload);
        let path = req.path().to_owned();

        Box::pin(async move {
            let value = body.await?.into_inner();
            debug!(%path, body = %value, "incoming request body");

            let Value::Object(raw) = value else {
                return Err(Error::invalid_request("Request body must be a JSON object").into());
            };

            let SanitisedInput {
                sanitised,
                was_sanitised,
            } = sanitise_ingredient_input(raw);
            if was_sanitised {
                warn!(%path, "markup stripped from request body");
            }

            let decoded = serde_json::from_value(Value::Object(sanitised))
                .map_err(|err| Error::invalid_request(format!("Invalid request body: {err}")))?;
            Ok(Self(decoded))
        })
    }
}
