//! Request descriptions and target validation.

use http::{HeaderMap, Method};
use url::Url;

/// Reserved host name denoting a local domain socket.
const UNIX_SENTINEL: &str = "unix";

/// Errors produced while turning caller input into a [`RequestTarget`].
///
/// All of these are raised synchronously, before any DNS query or transport
/// dispatch takes place.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TargetError {
    /// Neither `uri` nor `url` was supplied.
    #[error("a request uri is a required argument")]
    MissingTarget,
    /// The target names a unix domain socket, which this library does not
    /// support.
    #[error("unix sockets are not supported")]
    UnsupportedTarget,
    /// A raw target string failed to parse as a URL.
    #[error("parsing request uri: {0}")]
    InvalidUri(#[from] url::ParseError),
    /// The target URL has no host to resolve.
    #[error("request uri has no host")]
    MissingHost,
}

/// A target supplied by the caller, either already parsed or as a raw string.
#[derive(Debug, Clone)]
pub enum TargetSpec {
    /// A pre-parsed URL, accepted as-is.
    Parsed(Url),
    /// A raw string, parsed during validation.
    Raw(String),
}

impl From<Url> for TargetSpec {
    fn from(url: Url) -> Self {
        Self::Parsed(url)
    }
}

impl From<String> for TargetSpec {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl From<&str> for TargetSpec {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_owned())
    }
}

impl TargetSpec {
    fn into_url(self) -> Result<Url, TargetError> {
        match self {
            Self::Parsed(url) => Ok(url),
            Self::Raw(raw) => Ok(Url::parse(&raw)?),
        }
    }
}

/// Hint describing how the caller intends to consume the response body.
///
/// Carried to the transport untouched; the resolution layer never interprets
/// it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseMode {
    /// Hand the body back as raw bytes.
    #[default]
    Bytes,
    /// The caller expects a JSON body.
    Json,
}

/// Caller-supplied description of an outbound request.
///
/// The target can be set through [`uri`](Self::uri) or through its alias
/// [`url`](Self::url); people use both names interchangeably, and `uri` wins
/// when both are present. Method, headers, body, and the response mode ride
/// along to the transport unmodified.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    uri: Option<TargetSpec>,
    url: Option<TargetSpec>,
    method: Method,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    response_mode: ResponseMode,
}

impl RequestOptions {
    /// Creates an empty request description. A target must still be supplied
    /// via [`uri`](Self::uri) or [`url`](Self::url).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request target.
    pub fn uri(self, uri: impl Into<TargetSpec>) -> Self {
        Self {
            uri: Some(uri.into()),
            ..self
        }
    }

    /// Sets the request target under its alias name. Ignored when
    /// [`uri`](Self::uri) is also set.
    pub fn url(self, url: impl Into<TargetSpec>) -> Self {
        Self {
            url: Some(url.into()),
            ..self
        }
    }

    /// Sets the request method.
    pub fn method(self, method: Method) -> Self {
        Self { method, ..self }
    }

    /// Sets the request headers.
    pub fn headers(self, headers: HeaderMap) -> Self {
        Self { headers, ..self }
    }

    /// Sets the request body.
    pub fn body(self, body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: Some(body.into()),
            ..self
        }
    }

    /// Sets the response handling hint.
    pub fn response_mode(self, response_mode: ResponseMode) -> Self {
        Self {
            response_mode,
            ..self
        }
    }

    /// Validates the description into a dispatchable [`RequestTarget`].
    ///
    /// Fails when no target was supplied, when a raw target string does not
    /// parse, or when the target is one this library refuses to serve.
    pub fn into_target(self) -> Result<RequestTarget, TargetError> {
        let spec = self.uri.or(self.url).ok_or(TargetError::MissingTarget)?;
        let target = RequestTarget::new(spec.into_url()?)?;
        Ok(RequestTarget {
            method: self.method,
            headers: self.headers,
            body: self.body,
            response_mode: self.response_mode,
            ..target
        })
    }
}

/// A validated request target plus the transport options riding along with
/// it.
///
/// Constructing one establishes the invariant the resolution layer relies
/// on: the URL has a non-empty host, and the host is not the reserved `unix`
/// sentinel.
#[derive(Debug, Clone)]
pub struct RequestTarget {
    url: Url,
    method: Method,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
    response_mode: ResponseMode,
}

impl RequestTarget {
    /// Validates `url` into a target carrying default transport options.
    pub fn new(url: Url) -> Result<Self, TargetError> {
        match url.host_str() {
            None | Some("") => return Err(TargetError::MissingHost),
            Some(UNIX_SENTINEL) => return Err(TargetError::UnsupportedTarget),
            Some(_) => {}
        }
        Ok(Self {
            url,
            method: Method::default(),
            headers: HeaderMap::new(),
            body: None,
            response_mode: ResponseMode::default(),
        })
    }

    /// The target URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The host the request will be sent to.
    pub fn host(&self) -> &str {
        self.url
            .host_str()
            .expect("targets are validated to have a host at construction")
    }

    /// The explicit port, when the URL carries one.
    pub fn port(&self) -> Option<u16> {
        self.url.port()
    }

    /// The port the transport should connect to, falling back to the default
    /// for the URL's scheme.
    pub fn port_or_known_default(&self) -> Option<u16> {
        self.url.port_or_known_default()
    }

    /// The request method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The request body, when one was supplied.
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// The response handling hint.
    pub fn response_mode(&self) -> ResponseMode {
        self.response_mode
    }

    /// Points the target at `host:port`, leaving scheme, path, query, and
    /// the transport options as they were.
    ///
    /// Goes through `set_host`/`set_port` so each field gets parsed on its
    /// own. Formatting a replacement URL in one shot would let a host of the
    /// form `foo.com:123/bar` smuggle in a port and a path.
    pub(crate) fn rewrite(&mut self, host: &str, port: u16) -> Result<(), url::ParseError> {
        self.url.set_host(Some(host))?;
        self.url
            .set_port(Some(port))
            .map_err(|_| url::ParseError::SetHostOnCannotBeABaseUrl)?;
        Ok(())
    }
}
