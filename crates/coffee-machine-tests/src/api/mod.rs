use std::sync::Arc;

use coffee_machine_core::{CoffeeReady, RequestKind};
use eyre::Result;
use flume::Sender;
use thiserror::Error;
use tokio::sync::oneshot;
use uuid::Uuid;

pub mod mock;

/// Error response from the coffee machine (status 500)
#[derive(Debug, Error)]
#[error("Error 500: {0}")]
pub struct ApiError(pub String);

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Decoded outcome of one brew request
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Brew {
    /// 200 with a JSON body
    Ready(CoffeeReady),
    /// 418 with an empty body
    Teapot,
    /// 503 with an empty body
    Unavailable,
}

#[derive(Debug)]
enum Response {
    /// 200; the body is carried as wire-level JSON, exactly as the real
    /// transport would send it
    Coffee { json: String, request_id: Uuid },
    Teapot { request_id: Uuid },
    Unavailable { request_id: Uuid },
}

impl Response {
    fn into_api_response(self) -> ApiResponse<Brew> {
        match self {
            Response::Coffee { json, request_id } => ApiResponse {
                request_id,
                result: serde_json::from_str::<CoffeeReady>(&json)
                    .map(Brew::Ready)
                    .map_err(|err| ApiError(format!("invalid coffee body: {err}"))),
            },
            Response::Teapot { request_id } => ApiResponse {
                request_id,
                result: Ok(Brew::Teapot),
            },
            Response::Unavailable { request_id } => ApiResponse {
                request_id,
                result: Ok(Brew::Unavailable),
            },
        }
    }
}

/// Response from the coffee machine together with its correlation id
#[derive(Debug)]
pub struct ApiResponse<T> {
    /// Correlation id echoed by the machine
    pub request_id: Uuid,
    /// Decoded result
    pub result: ApiResult<T>,
}

struct RequestMsg {
    kind: RequestKind,
    request_id: Uuid,
    response_channel: oneshot::Sender<Response>,
}

pub struct Api {
    /// One channel per handler thread
    channels: Arc<Vec<Sender<RequestMsg>>>,

    my_channel: Sender<RequestMsg>,
    my_index: usize,
}

impl Api {
    fn new(channels: Vec<Sender<RequestMsg>>) -> Self {
        let my_channel = channels[0].clone();
        Self {
            channels: Arc::new(channels),
            my_channel,
            my_index: 0,
        }
    }

    async fn make_request(&self, kind: RequestKind, request_id: Uuid) -> Result<Response> {
        let (sender, receiver) = oneshot::channel();
        let msg = RequestMsg {
            kind,
            request_id,
            response_channel: sender,
        };
        self.my_channel.send_async(msg).await?;
        Ok(receiver.await?)
    }

    /// Request one cup of coffee
    pub async fn brew_coffee(&self) -> Result<ApiResponse<Brew>> {
        let response = self.make_request(RequestKind::BrewCoffee, Uuid::new_v4());
        Ok(response.await?.into_api_response())
    }

    /// Request one cup of coffee with an explicit correlation id
    pub async fn brew_coffee_with_id(&self, request_id: Uuid) -> Result<ApiResponse<Brew>> {
        let response = self.make_request(RequestKind::BrewCoffee, request_id);
        Ok(response.await?.into_api_response())
    }
}

impl Clone for Api {
    fn clone(&self) -> Self {
        let my_index = (self.my_index + 1) % self.channels.len();
        Self {
            channels: self.channels.clone(),
            my_channel: self.channels[my_index].clone(),
            my_index,
        }
    }
}
