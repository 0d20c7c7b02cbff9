use std::fs;

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("aether-routes-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

async fn status_of(router: Router, uri: &str) -> StatusCode {
    router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
        .status()
}

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn healthz_route_is_mounted() {
    let dir = scratch_dir("healthz");
    let router = static_routes(&dir, &dir);
    assert_eq!(status_of(router, "/healthz").await, StatusCode::OK);
}

#[tokio::test]
async fn public_files_are_served_as_fallback() {
    let public = scratch_dir("public");
    fs::write(public.join("robots.txt"), "User-agent: *\n").unwrap();
    let router = static_routes(&scratch_dir("site"), &public);
    assert_eq!(status_of(router.clone(), "/robots.txt").await, StatusCode::OK);
    assert_eq!(status_of(router, "/missing.png").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn pkg_assets_come_from_site_root() {
    let site = scratch_dir("pkg-site");
    fs::create_dir_all(site.join("pkg")).unwrap();
    fs::write(site.join("pkg/aether.css"), "body{}").unwrap();
    let router = static_routes(&site, &scratch_dir("pkg-public"));
    assert_eq!(status_of(router, "/pkg/aether.css").await, StatusCode::OK);
}
