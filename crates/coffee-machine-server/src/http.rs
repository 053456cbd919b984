//! 🏗 HTTP request implementation

use std::io::{Read, Write};

use coffee_machine_core::{CoffeeReady, RequestKind};
use tiny_http::{Header, Response};
use tracing::error;
use uuid::Uuid;

/// Length of any hyphenated UUID
const UUID_LEN: usize = b"a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8".len();

struct HTTPRequest(tiny_http::Request);

impl coffee_machine_core::RawRequest for HTTPRequest {
    fn respond_with_coffee(self: Box<Self>, body: CoffeeReady, request_id: Uuid) {
        match serde_json::to_string(&body) {
            Ok(json) => {
                let mut res = Response::from_string(json).with_status_code(200);
                res.add_header(
                    Header::from_bytes(b"Content-Type", b"application/json").unwrap(),
                );
                self.respond(res, request_id);
            }
            Err(err) => {
                error!(%request_id, %err, "failed to serialize brew response");
                self.respond(Response::empty(500), request_id);
            }
        }
    }

    fn respond_with_teapot(self: Box<Self>, request_id: Uuid) {
        self.respond(Response::empty(418), request_id);
    }

    fn respond_with_unavailable(self: Box<Self>, request_id: Uuid) {
        self.respond(Response::empty(503), request_id);
    }
}

impl HTTPRequest {
    /// Add HTTP headers (CORS, X-Request-Id) to `res` and send it
    fn respond<R: Read>(self, mut res: Response<R>, request_id: Uuid) {
        add_response_cors_headers(&mut res);

        let mut rid = Vec::<u8>::with_capacity(UUID_LEN);
        write!(&mut rid, "{}", request_id.hyphenated()).unwrap();
        res.add_header(Header::from_bytes(b"X-Request-Id", rid).unwrap());

        self.0.respond(res).expect("HTTP response failed");
    }
}

/// Parse the given HTTP request
///
/// If [`None`] is returned, the request was already answered with a
/// corresponding error message.
pub fn parse(rq: tiny_http::Request) -> Option<coffee_machine_core::Request> {
    use tiny_http::Method::*;

    let kind = match (rq.method(), rq.url()) {
        (Options, _) => {
            let mut res = Response::empty(204);
            add_response_cors_headers(&mut res);
            rq.respond(res).expect("HTTP response failed");
            return None;
        }
        (Get, "/brew-coffee") => RequestKind::BrewCoffee,
        (_, "/brew-coffee") => {
            let mut res = Response::empty(405);
            add_response_cors_headers(&mut res);
            rq.respond(res).expect("HTTP response failed");
            return None;
        }
        _ => {
            let mut res = Response::from_string(
                "could not find the service you are looking for!

Valid requests are:
  GET  /brew-coffee",
            )
            .with_status_code(404);
            add_response_cors_headers(&mut res);
            rq.respond(res).expect("HTTP response failed");
            return None;
        }
    };

    let mut rid = None;
    for hdr in rq.headers() {
        if hdr.field.equiv("x-request-id") {
            if let Ok(id) = Uuid::parse_str(hdr.value.as_str()) {
                rid = Some(id);
            }
        }
    }

    Some(coffee_machine_core::Request::from_raw(
        kind,
        rid.unwrap_or_else(Uuid::new_v4),
        Box::new(HTTPRequest(rq)),
    ))
}

fn add_response_cors_headers<R: Read>(res: &mut Response<R>) {
    res.add_header(Header::from_bytes(b"Access-Control-Request-Method", b"*").unwrap());
    res.add_header(Header::from_bytes(b"Access-Control-Allow-Origin", b"*").unwrap());
    res.add_header(Header::from_bytes(b"Access-Control-Allow-Headers", b"*").unwrap());
    res.add_header(Header::from_bytes(b"Access-Control-Expose-Headers", b"*").unwrap());
}
