use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use cms_site::cms::{CmsApi, CmsError};
use cms_site::config::{CmsConfig, SiteConfig};
use cms_site::Site;
use percent_encoding::percent_decode_str;
use serde_json::{json, Value};

/// One request as seen by the stub
#[derive(Debug, Clone)]
struct Recorded {
    path: String,
    query: Vec<(String, String)>,
    authorization: Option<String>,
}

impl Recorded {
    fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Minimal CMS delivery API answering every request with one canned response
struct CmsStub {
    base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl CmsStub {
    fn spawn(status: u16, body: Value) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start cms stub server");
        let addr = server.server_addr();
        let base_url = format!("http://{addr}");

        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            let request = match server.recv_timeout(Duration::from_millis(50)) {
                Ok(Some(req)) => req,
                Ok(None) => continue,
                Err(_) => break,
            };

            let url = request.url().to_string();
            let (path, query) = url.split_once('?').unwrap_or((&url, ""));
            let query = query
                .split('&')
                .filter(|pair| !pair.is_empty())
                .map(|pair| {
                    let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
                    (decode(k), decode(v))
                })
                .collect();
            let authorization = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Authorization"))
                .map(|h| h.value.as_str().to_string());

            recorded.lock().unwrap().push(Recorded {
                path: path.to_string(),
                query,
                authorization,
            });

            let header =
                tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                    .expect("build header");
            let response = tiny_http::Response::from_string(body.to_string())
                .with_status_code(status)
                .with_header(header);
            let _ = request.respond(response);
        });

        Self {
            base_url,
            requests,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    fn config(&self) -> CmsConfig {
        CmsConfig {
            space_id: Some("space1".to_string()),
            access_token: Some("secret-token".to_string()),
            host: self.base_url.clone(),
            ..CmsConfig::default()
        }
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for CmsStub {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn decode(s: &str) -> String {
    percent_decode_str(&s.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}

fn blog_response() -> Value {
    json!({
        "total": 1, "skip": 0, "limit": 100,
        "items": [{
            "sys": { "id": "post-1", "type": "Entry", "createdAt": "2020-05-14T00:00:00Z" },
            "fields": {
                "title": "Hello World",
                "slug": "hello-world",
                "publishedDate": "2020-05-14T00:00+10:00",
                "body": "Hello **there**",
                "tags": [
                    { "sys": { "type": "Link", "linkType": "Entry", "id": "tag-privacy" } },
                    { "sys": { "type": "Link", "linkType": "Entry", "id": "tag-missing" } }
                ],
                "author": { "sys": { "type": "Link", "linkType": "Entry", "id": "author-1" } },
                "featureImage": { "sys": { "type": "Link", "linkType": "Asset", "id": "img-1" } }
            }
        }],
        "includes": {
            "Entry": [
                { "sys": { "id": "tag-privacy" }, "fields": { "label": "privacy" } },
                {
                    "sys": { "id": "author-1" },
                    "fields": {
                        "name": "Jane",
                        "avatar": { "sys": { "type": "Link", "linkType": "Asset", "id": "avatar-1" } }
                    }
                }
            ],
            "Asset": [
                { "sys": { "id": "img-1" }, "fields": { "title": "Cover", "file": { "url": "//images.example.com/cover.png" } } },
                { "sys": { "id": "avatar-1" }, "fields": { "file": { "url": "//images.example.com/jane.png" } } }
            ]
        }
    })
}

#[tokio::test]
async fn fetches_blog_entries_with_auth_and_resolved_links() {
    let stub = CmsStub::spawn(200, blog_response());
    let api = CmsApi::new(&stub.config()).unwrap();

    let posts = api.fetch_blog_entries().await.unwrap();

    assert_eq!(posts.len(), 1);
    let post = &posts[0];
    assert_eq!(post.title, "Hello World");
    assert_eq!(post.slug, "hello-world");
    assert_eq!(post.published_date.as_deref(), Some("14 May 2020"));
    assert_eq!(post.tags, vec!["privacy".to_string()]);
    assert_eq!(
        post.feature_image.as_ref().map(|i| i.image_url.as_str()),
        Some("http://images.example.com/cover.png")
    );
    let author = post.author.as_ref().unwrap();
    assert_eq!(author.name.as_deref(), Some("Jane"));
    assert_eq!(
        author.avatar.as_ref().map(|i| i.image_url.as_str()),
        Some("http://images.example.com/jane.png")
    );

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.path, "/spaces/space1/environments/master/entries");
    assert_eq!(request.authorization.as_deref(), Some("Bearer secret-token"));
    assert_eq!(request.param("content_type"), Some("post"));
    assert_eq!(request.param("order"), Some("sys.createdAt"));
    assert_eq!(request.param("include"), Some("2"));
}

#[tokio::test]
async fn fetches_blog_by_slug_with_slug_filter() {
    let stub = CmsStub::spawn(200, blog_response());
    let api = CmsApi::new(&stub.config()).unwrap();

    let post = api.fetch_blog_by_slug("hello-world").await.unwrap();
    assert_eq!(post.map(|p| p.title), Some("Hello World".to_string()));

    let requests = stub.requests();
    assert_eq!(requests[0].param("fields.slug[in]"), Some("hello-world"));
    assert_eq!(requests[0].param("content_type"), Some("post"));
}

#[tokio::test]
async fn blog_by_id_propagates_not_found() {
    let stub = CmsStub::spawn(
        404,
        json!({
            "sys": { "type": "Error", "id": "NotFound" },
            "message": "The resource could not be found."
        }),
    );
    let api = CmsApi::new(&stub.config()).unwrap();

    let err = api.fetch_blog_by_id("missing").await.unwrap_err();
    assert!(err.is_not_found());
    match err {
        CmsError::Api { status, id, message } => {
            assert_eq!(status, 404);
            assert_eq!(id, "NotFound");
            assert_eq!(message, "The resource could not be found.");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(stub.requests()[0].param("sys.id"), Some("missing"));
}

#[tokio::test]
async fn blog_entries_propagate_server_errors() {
    let stub = CmsStub::spawn(500, json!({ "message": "boom" }));
    let api = CmsApi::new(&stub.config()).unwrap();

    let err = api.fetch_blog_entries().await.unwrap_err();
    assert!(matches!(err, CmsError::Api { status: 500, .. }));
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn page_entries_fail_soft() {
    let stub = CmsStub::spawn(500, json!({ "message": "boom" }));
    let api = CmsApi::new(&stub.config()).unwrap();

    let pages = api.fetch_page_entries().await;
    assert!(pages.is_empty());

    let requests = stub.requests();
    assert_eq!(requests[0].param("content_type"), Some("splitPage"));
}

#[tokio::test]
async fn page_entries_keyed_by_id() {
    let stub = CmsStub::spawn(
        200,
        json!({
            "items": [
                { "sys": { "id": "p1" }, "fields": { "id": "WHO_ARE_WE", "label": "Who are we" } },
                { "sys": { "id": "p2" }, "fields": { "label": "No id" } },
                { "sys": { "id": "p3" }, "fields": { "id": "PRIVACY_POLICY", "label": "Privacy" } }
            ]
        }),
    );
    let api = CmsApi::new(&stub.config()).unwrap();

    let pages = api.fetch_page_entries().await;
    let ids: Vec<&str> = pages.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["WHO_ARE_WE", "PRIVACY_POLICY"]);
    assert_eq!(pages["PRIVACY_POLICY"].label.as_deref(), Some("Privacy"));
}

#[tokio::test]
async fn connect_rejects_bad_token() {
    let stub = CmsStub::spawn(
        401,
        json!({
            "sys": { "type": "Error", "id": "AccessTokenInvalid" },
            "message": "The access token you sent could not be found or is invalid."
        }),
    );

    let err = CmsApi::connect(&stub.config()).await.err().unwrap();
    assert!(matches!(err, CmsError::Api { status: 401, ref id, .. } if id == "AccessTokenInvalid"));

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/spaces/space1");
}

#[tokio::test]
async fn site_client_fails_before_fetching_with_bad_token() {
    let stub = CmsStub::spawn(401, json!({ "sys": { "id": "AccessTokenInvalid" } }));
    let dir = tempfile::tempdir().unwrap();
    let mut config = SiteConfig::default();
    config.cms = stub.config();
    let site = Site {
        config,
        base_dir: dir.path().to_path_buf(),
        public_dir: dir.path().join("public"),
    };

    let err = site.generate().await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CmsError>(),
        Some(CmsError::Api { status: 401, .. })
    ));
    // only the space check went out, no entry fetches
    assert_eq!(stub.requests().len(), 1);
    assert!(!site.public_dir.exists());
}

#[tokio::test]
async fn connect_then_fetch() {
    let stub = CmsStub::spawn(200, blog_response());

    let api = CmsApi::connect(&stub.config()).await.unwrap();
    let posts = api.fetch_blog_entries().await.unwrap();
    assert_eq!(posts.len(), 1);

    let paths: Vec<String> = stub.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec![
            "/spaces/space1".to_string(),
            "/spaces/space1/environments/master/entries".to_string()
        ]
    );
}

#[test]
fn missing_credentials_are_rejected() {
    let config = CmsConfig::default();
    assert!(matches!(
        CmsApi::new(&config),
        Err(CmsError::MissingCredential("space_id"))
    ));
}
