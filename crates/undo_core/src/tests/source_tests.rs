use super::*;
use axum::{http::StatusCode, routing::get, Json, Router};
use tokio::net::TcpListener;

async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve");
    });
    format!("http://{addr}")
}

struct FailingSource;

#[async_trait]
impl ListSource for FailingSource {
    async fn fetch(&self) -> Result<Vec<ListItem>, FetchError> {
        Err(FetchError::InvalidBaseUrl {
            url: "nowhere".to_string(),
            source: url::ParseError::RelativeUrlWithoutBase,
        })
    }
}

#[test]
fn joins_fixed_path_onto_base_url() {
    let source = HttpListSource::new("http://127.0.0.1:3000").expect("source");
    assert_eq!(
        source.url().as_str(),
        "http://127.0.0.1:3000/mock/undoList.json"
    );
}

#[test]
fn rejects_unparseable_base_url() {
    let err = HttpListSource::new("not a url").expect_err("should fail");
    assert!(matches!(err, FetchError::InvalidBaseUrl { .. }));
}

#[tokio::test]
async fn fetches_items_from_server() {
    let router = Router::new().route(
        UNDO_LIST_PATH,
        get(|| async {
            Json(UndoListResponse::new(vec![
                ListItem::new("listItem_one"),
                ListItem::new("listItem_two"),
            ]))
        }),
    );
    let base = serve(router).await;

    let source = HttpListSource::new(&base).expect("source");
    let items = source.fetch().await.expect("fetch");
    assert_eq!(
        items,
        vec![ListItem::new("listItem_one"), ListItem::new("listItem_two")]
    );
}

#[tokio::test]
async fn error_status_is_reported() {
    let router = Router::new().route(
        UNDO_LIST_PATH,
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = serve(router).await;

    let source = HttpListSource::new(&base).expect("source");
    let err = source.fetch().await.expect_err("should fail");
    assert!(matches!(err, FetchError::Status { .. }));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let router = Router::new().route(UNDO_LIST_PATH, get(|| async { "not json" }));
    let base = serve(router).await;

    let source = HttpListSource::new(&base).expect("source");
    let err = source.fetch().await.expect_err("should fail");
    assert!(matches!(err, FetchError::Decode { .. }));
}

#[tokio::test]
async fn load_failure_yields_empty_list() {
    assert!(load_initial_items(&FailingSource).await.is_empty());
}

#[tokio::test]
async fn load_passes_through_static_items() {
    let source = StaticListSource(vec![ListItem::new("a")]);
    assert_eq!(load_initial_items(&source).await, vec![ListItem::new("a")]);
}
