//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use site_server::config::SiteConfig;
use site_server::lifecycle::Shutdown;
use site_server::pages;
use site_server::HttpServer;
use uuid::Uuid;

/// A running server over a throwaway site directory.
pub struct TestSite {
    pub addr: SocketAddr,
    #[allow(dead_code)]
    pub root: PathBuf,
    pub shutdown: Shutdown,
}

impl TestSite {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    #[allow(dead_code)]
    pub fn template_path(&self, template: &str) -> PathBuf {
        self.root.join("templates").join(template)
    }
}

/// Write a minimal template for every page-table entry, plus one static
/// asset, under `root`.
pub fn write_site_fixture(root: &Path) {
    for page in pages::pages() {
        let path = root.join("templates").join(page.template);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            &path,
            "<!DOCTYPE html>\n<html><body id=\"{{ id }}\"><h1>{{ title }}</h1><p>fixture page</p></body></html>\n",
        )
        .unwrap();
    }

    let css = root.join("static").join("styles").join("main.css");
    std::fs::create_dir_all(css.parent().unwrap()).unwrap();
    std::fs::write(&css, "body { color: #222; }\n").unwrap();
}

/// Start a server on an ephemeral port over a fresh fixture site.
pub async fn start_site() -> TestSite {
    let root = std::env::temp_dir().join(format!("site-server-test-{}", Uuid::new_v4()));
    write_site_fixture(&root);

    let mut config = SiteConfig::default();
    config.content.template_dir = root.join("templates").to_string_lossy().into_owned();
    config.content.static_dir = root.join("static").to_string_lossy().into_owned();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestSite {
        addr,
        root,
        shutdown,
    }
}
