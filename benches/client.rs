use async_trait::async_trait;
use criterion::{criterion_group, criterion_main, Criterion};
use srv_request::{
    resolver::SrvResolver, RequestOptions, RequestTarget, SrvClient, SrvRecord, Transport,
};

#[derive(Debug, Clone)]
struct BenchRecord {
    name: &'static str,
    port: u16,
}

impl SrvRecord for BenchRecord {
    type Target = str;

    fn target(&self) -> &str {
        self.name
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn priority(&self) -> u16 {
        10
    }

    fn weight(&self) -> u16 {
        5
    }
}

#[derive(Debug, thiserror::Error)]
#[error("lookup refused")]
struct LookupRefused;

struct FixedResolver {
    records: Vec<BenchRecord>,
}

#[async_trait]
impl SrvResolver for FixedResolver {
    type Record = BenchRecord;
    type Error = LookupRefused;

    async fn resolve_srv(&self, _host: &str) -> Result<Vec<BenchRecord>, LookupRefused> {
        Ok(self.records.clone())
    }
}

struct FailingResolver;

#[async_trait]
impl SrvResolver for FailingResolver {
    type Record = BenchRecord;
    type Error = LookupRefused;

    async fn resolve_srv(&self, _host: &str) -> Result<Vec<BenchRecord>, LookupRefused> {
        Err(LookupRefused)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("dispatch refused")]
struct DispatchRefused;

struct NullTransport;

#[async_trait]
impl Transport for NullTransport {
    type Response = ();
    type Error = DispatchRefused;

    async fn dispatch(&self, _target: RequestTarget) -> Result<(), DispatchRefused> {
        Ok(())
    }
}

fn options() -> RequestOptions {
    RequestOptions::new().uri("http://service.example/v1/items?page=2")
}

fn execute_rewritten(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    let records = (0..4)
        .map(|i| BenchRecord {
            name: "backend.example",
            port: 9000 + i,
        })
        .collect();
    let client = SrvClient::new(FixedResolver { records }, NullTransport);

    c.bench_function("execute_rewritten", |b| {
        b.iter(|| rt.block_on(client.execute(options())).unwrap())
    });
}

fn execute_fallback(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    let client = SrvClient::new(FailingResolver, NullTransport);

    c.bench_function("execute_fallback", |b| {
        b.iter(|| rt.block_on(client.execute(options())).unwrap())
    });
}

criterion_group!(benches, execute_rewritten, execute_fallback);
criterion_main!(benches);
