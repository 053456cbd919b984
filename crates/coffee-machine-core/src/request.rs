use uuid::Uuid;

use crate::CoffeeReady;

/// Kind of the request
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum RequestKind {
    /// Brew a cup of coffee
    BrewCoffee,
}

/// Request sent by an HTTP client
///
/// The transport parses the wire request into this type and hands it to the
/// [`RequestHandler`]; the handler answers it through exactly one of the
/// `respond_with_*` methods, which consume the request.
pub struct Request {
    kind: RequestKind,
    id: Uuid,
    raw: Box<dyn RawRequest + Send>,
}

impl std::fmt::Debug for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Request")
            .field("kind", &self.kind)
            .field("id", &self.id)
            .field("raw", &format_args!(".."))
            .finish()
    }
}

/// Interface for handling requests from HTTP clients
pub trait RequestHandler {
    /// Handle a single request
    ///
    /// This method may be called concurrently from different threads.
    fn handle(&self, request: Request);
}

/// A raw request, implemented by the HTTP server
///
/// Each `respond_with_*` method maps one decision outcome to the wire and
/// blocks until the response has been sent.
pub trait RawRequest {
    /// Respond with 200 and the given JSON body
    fn respond_with_coffee(self: Box<Self>, body: CoffeeReady, request_id: Uuid);
    /// Respond with 418 and an empty body
    fn respond_with_teapot(self: Box<Self>, request_id: Uuid);
    /// Respond with 503 and an empty body
    fn respond_with_unavailable(self: Box<Self>, request_id: Uuid);
}

impl Request {
    /// Get the request's kind
    #[inline]
    pub fn kind(&self) -> &RequestKind {
        &self.kind
    }

    /// Get the request's correlation id
    ///
    /// If the client did not send the corresponding HTTP header, it is
    /// randomly generated.
    #[inline]
    pub fn request_id(&self) -> Uuid {
        self.id
    }

    /// Respond with freshly brewed coffee
    #[inline]
    pub fn respond_with_coffee(self, body: CoffeeReady) {
        self.raw.respond_with_coffee(body, self.id);
    }

    /// Respond that the machine is a teapot today
    #[inline]
    pub fn respond_with_teapot(self) {
        self.raw.respond_with_teapot(self.id);
    }

    /// Respond that the machine is out of coffee
    #[inline]
    pub fn respond_with_unavailable(self) {
        self.raw.respond_with_unavailable(self.id);
    }

    /// Create a new request from a [`RawRequest`]
    #[inline]
    pub fn from_raw(kind: RequestKind, id: Uuid, raw: Box<dyn RawRequest + Send>) -> Self {
        Self { kind, id, raw }
    }
}
