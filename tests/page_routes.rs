//! End-to-end tests for the page routes.

use axum::http::StatusCode;
use site_server::http::X_REQUEST_ID;
use site_server::pages;

mod common;

#[tokio::test]
async fn every_registered_page_renders() {
    let site = common::start_site().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    for page in pages::pages() {
        let res = client.get(site.url(page.path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::OK, "GET {}", page.path);

        let body = res.text().await.unwrap();
        assert!(
            body.contains(&format!("id=\"{}\"", page.id)),
            "GET {} body missing page id {:?}",
            page.path,
            page.id
        );
        if let Some(title) = page.title {
            assert!(
                body.contains(title),
                "GET {} body missing title {:?}",
                page.path,
                title
            );
        }
    }

    site.shutdown.trigger();
}

#[tokio::test]
async fn scenario_from_the_front_door() {
    let site = common::start_site().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client.get(site.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("id=\"home\""));

    let res = client.get(site.url("/contact")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("Contact Me"));

    let res = client.get(site.url("/toys/fractals")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("Fractals"));

    let res = client.get(site.url("/nope")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    site.shutdown.trigger();
}

#[tokio::test]
async fn unknown_path_is_a_404() {
    let site = common::start_site().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client
        .get(site.url("/does-not-exist"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(res.text().await.unwrap().contains("Not Found"));

    site.shutdown.trigger();
}

#[tokio::test]
async fn non_get_methods_are_rejected() {
    let site = common::start_site().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client.post(site.url("/contact")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

    let res = client.delete(site.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);

    site.shutdown.trigger();
}

#[tokio::test]
async fn static_assets_are_served_under_the_prefix() {
    let site = common::start_site().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client
        .get(site.url("/static/styles/main.css"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await.unwrap().contains("color"));

    let res = client
        .get(site.url("/static/no-such-file.css"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    site.shutdown.trigger();
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let site = common::start_site().await;
    let client = reqwest::Client::builder().no_proxy().build().unwrap();

    let res = client.get(site.url("/")).send().await.unwrap();
    let id = res
        .headers()
        .get(X_REQUEST_ID)
        .expect("response missing x-request-id");
    assert!(!id.to_str().unwrap().is_empty());

    site.shutdown.trigger();
}
