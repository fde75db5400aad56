//! Local stand-in for the accounts and Web API hosts, served by Rocket on a
//! free port so `SpotifyCatalog` can be exercised over real HTTP.

use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use rocket::fairing::AdHoc;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::tokio::sync::oneshot;
use rocket::{get, post, routes, Shutdown, State};
use serde_json::{json, Value};

use crate::endpoints::Endpoints;

pub struct FakeSpotify {
    token_status: Status,
    token_body: Value,
    search_status: Status,
    artists: Vec<Value>,
    token_hits: AtomicUsize,
    search_hits: AtomicUsize,
    last_query: Mutex<Option<(String, Option<u32>)>>,
}

impl Default for FakeSpotify {
    fn default() -> Self {
        FakeSpotify {
            token_status: Status::Ok,
            token_body: json!({
                "access_token": "fake-access-token",
                "token_type": "Bearer",
                "expires_in": 3600
            }),
            search_status: Status::Ok,
            artists: vec![],
            token_hits: AtomicUsize::new(0),
            search_hits: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }
}

impl FakeSpotify {
    pub fn with_token(mut self, status: Status, body: Value) -> Self {
        self.token_status = status;
        self.token_body = body;
        self
    }

    pub fn with_search_status(mut self, status: Status) -> Self {
        self.search_status = status;
        self
    }

    pub fn with_artists(mut self, artists: Vec<Value>) -> Self {
        self.artists = artists;
        self
    }

    pub fn token_hits(&self) -> usize {
        self.token_hits.load(Ordering::SeqCst)
    }

    pub fn search_hits(&self) -> usize {
        self.search_hits.load(Ordering::SeqCst)
    }

    /// `q` and `limit` of the most recent search.
    pub fn last_query(&self) -> Option<(String, Option<u32>)> {
        self.last_query.lock().unwrap().clone()
    }
}

#[post("/api/token")]
fn token(fake: &State<Arc<FakeSpotify>>) -> (Status, Json<Value>) {
    fake.token_hits.fetch_add(1, Ordering::SeqCst);
    (fake.token_status, Json(fake.token_body.clone()))
}

#[get("/v1/search?<q>&<limit>")]
fn search(fake: &State<Arc<FakeSpotify>>, q: String, limit: Option<u32>) -> (Status, Json<Value>) {
    fake.search_hits.fetch_add(1, Ordering::SeqCst);
    *fake.last_query.lock().unwrap() = Some((q, limit));
    if fake.search_status != Status::Ok {
        let body = json!({ "error": { "status": fake.search_status.code, "message": "fake failure" } });
        return (fake.search_status, Json(body));
    }
    let items: Vec<Value> = fake.artists.iter().take(1).cloned().collect();
    let body = json!({
        "artists": {
            "href": "http://127.0.0.1/v1/search",
            "items": items,
            "limit": 1,
            "next": null,
            "offset": 0,
            "previous": null,
            "total": fake.artists.len()
        }
    });
    (Status::Ok, Json(body))
}

pub struct RunningFake {
    pub fake: Arc<FakeSpotify>,
    pub endpoints: Endpoints,
    shutdown: Shutdown,
}

impl Drop for RunningFake {
    fn drop(&mut self) {
        self.shutdown.clone().notify();
    }
}

pub async fn start(fake: FakeSpotify) -> RunningFake {
    let port = TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .map(|addr| addr.port())
        .expect("free local port");
    let fake = Arc::new(fake);
    let (ready_tx, ready_rx) = oneshot::channel::<()>();
    let ready_tx = Mutex::new(Some(ready_tx));

    let figment = rocket::Config::figment()
        .merge(("address", "127.0.0.1"))
        .merge(("port", port))
        .merge(("log_level", "off"));
    let rocket = rocket::custom(figment)
        .manage(fake.clone())
        .mount("/", routes![token, search])
        .attach(AdHoc::on_liftoff("Ready", move |_| {
            if let Some(ready_tx) = ready_tx.lock().unwrap().take() {
                let _ = ready_tx.send(());
            }
            Box::pin(async {})
        }))
        .ignite()
        .await
        .expect("fake spotify ignites");
    let shutdown = rocket.shutdown();
    rocket::tokio::spawn(async move {
        let _ = rocket.launch().await;
    });
    ready_rx.await.expect("fake spotify lifts off");

    let base = format!("http://127.0.0.1:{port}");
    RunningFake {
        fake,
        endpoints: Endpoints::new(&base, &format!("{base}/v1")),
        shutdown,
    }
}
