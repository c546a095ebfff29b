#![deny(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

/*!
SRV-aware target resolution for outbound HTTP requests.

# Introduction

SRV Records, as defined in [RFC 2782](https://tools.ietf.org/html/rfc2782),
are DNS records of the form

`_Service._Proto.Name TTL Class SRV Priority Weight Port Target`

For instance, a DNS server might respond with the following SRV records for
`service.example`:

```text
service.example. 60 IN SRV 10 5 9000 backend-1.example.
service.example. 60 IN SRV 10 5 9000 backend-2.example.
```

`srv-request` slots service discovery in front of request dispatch. Before a
request goes out, its host is queried for SRV records; when the query
produces records, the request is transparently redirected to the host and
port of one of them, chosen uniformly at random. When the query fails or
comes back empty, the request proceeds to its original target, and the
caller cannot tell the difference: discovery never introduces request errors
of its own. Records are neither cached between calls nor retried within one;
a request means exactly one lookup and exactly one dispatch.

[`SrvClient::execute`] takes a request description ([`RequestOptions`]),
validates it, resolves it, and hands the effective target to the client's
transport, returning the transport's response or error verbatim:

```
use srv_request::{RequestOptions, SrvClient};

let client = SrvClient::new(resolver, transport);
let response = client
    .execute(RequestOptions::new().uri("http://service.example/"))
    .await?;
```

Requests naming the reserved `unix` host are rejected up front; this library
does not support local domain-socket targets.

# Resolvers and Transports

SRV lookup is performed through the [`SrvResolver`] trait and request
execution through the [`Transport`] trait; [`SrvClient`] is generic over
both, and [`SrvClient::resolve`] exposes the resolution step on its own for
transports that want to compose it differently.

The provided resolver backend is enabled by the following feature:

- `hickory-dns` (via [`hickory_resolver::Resolver`])

[`SrvResolver`]: resolver::SrvResolver
*/

mod client;
pub use client::{Error, Resolution, SrvClient};

mod record;
pub use record::SrvRecord;

mod request;
pub use request::{RequestOptions, RequestTarget, ResponseMode, TargetError, TargetSpec};

pub mod resolver;

mod transport;
pub use transport::{Transport, TransportFn};
