//! Mock API implementation directly using the `coffee-machine-barista` crate
//!
//! Requests are fed to the barista through per-thread channels, so the
//! concurrency profile matches the real server: N blocking handler threads
//! driving one shared handler.

use std::sync::Arc;

use coffee_machine_barista::{Barista, CallCounter};
use coffee_machine_core::{CoffeeReady, RawRequest, Request, RequestHandler};
use tokio::sync::oneshot;
use tokio::task::{self, JoinHandle};
use uuid::Uuid;

use super::{Api, RequestMsg, Response};
use crate::FakeClock;

pub struct MockMachine {
    barista: Arc<Barista>,
    join_handles: Vec<JoinHandle<()>>,
}

struct MockRawRequest {
    response_channel: oneshot::Sender<Response>,
}

pub async fn start(
    threads: u16,
    config: coffee_machine_core::Config,
    clock: FakeClock,
) -> (MockMachine, Api) {
    let barista = Arc::new(Barista::new(
        Box::new(clock),
        Box::new(CallCounter::new()),
        &config,
    ));

    let it = (0..threads).map(|_| {
        let (sender, receiver) = flume::bounded::<RequestMsg>(65536);
        let barista = barista.clone();
        let handle = task::spawn_blocking(move || {
            let barista = &*barista;
            for msg in receiver.into_iter() {
                let raw = Box::new(MockRawRequest {
                    response_channel: msg.response_channel,
                });
                barista.handle(Request::from_raw(msg.kind, msg.request_id, raw));
            }
        });
        (sender, handle)
    });
    let (senders, join_handles) = it.unzip();

    let mock_machine = MockMachine {
        barista,
        join_handles,
    };
    (mock_machine, Api::new(senders))
}

impl MockMachine {
    /// Reset the call counter, as an operator would
    pub fn reset_counter(&self) {
        self.barista.reset_counter();
    }

    pub async fn shutdown(self) {
        for handle in self.join_handles {
            handle.await.unwrap()
        }
        drop(self.barista);
    }
}

impl RawRequest for MockRawRequest {
    fn respond_with_coffee(self: Box<Self>, body: CoffeeReady, request_id: Uuid) {
        // the real transport sends the body as JSON; mirror it here
        let json = serde_json::to_string(&body).unwrap();
        let response = Response::Coffee { json, request_id };
        self.response_channel.send(response).unwrap()
    }

    fn respond_with_teapot(self: Box<Self>, request_id: Uuid) {
        self.response_channel
            .send(Response::Teapot { request_id })
            .unwrap()
    }

    fn respond_with_unavailable(self: Box<Self>, request_id: Uuid) {
        self.response_channel
            .send(Response::Unavailable { request_id })
            .unwrap()
    }
}
