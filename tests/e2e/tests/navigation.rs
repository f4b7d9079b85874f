use e2e::test_server::TestServer;

#[tokio::test]
#[ignore = "builds and starts the full server"]
async fn test_homepage_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage");

    assert_eq!(response.status(), 200, "Homepage should return 200 OK");

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("id=\"mainNav\""), "navbar should render");
    assert!(body.contains("data-i18n=\"nav.home\""), "text bindings should render");
    for id in ["langEs", "langEn", "langEsMobile", "langEnMobile"] {
        assert!(body.contains(&format!("id=\"{id}\"")), "missing toggle {id}");
    }
}

#[tokio::test]
#[ignore = "builds and starts the full server"]
async fn test_menu_and_animation_scripts_are_loaded() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let body = reqwest::get(server.url())
        .await
        .expect("Failed to fetch homepage")
        .text()
        .await
        .expect("Failed to read body");

    assert!(body.contains("data-bs-toggle=\"collapse\""));
    assert!(
        body.contains("bootstrap.bundle.min.js"),
        "collapse toggler needs the Bootstrap bundle"
    );
    assert!(body.contains("aos.js"), "data-aos markup needs AOS");
}

#[tokio::test]
#[ignore = "builds and starts the full server"]
async fn test_sico_page_loads() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    let response = reqwest::get(server.path("/sico"))
        .await
        .expect("Failed to fetch SICO page");
    assert_eq!(response.status(), 200);

    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("data-i18n=\"nav.features\""));
}

#[tokio::test]
#[ignore = "builds and starts the full server"]
async fn test_translation_tables_are_served() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");

    for table in ["es", "en", "sico-es", "sico-en"] {
        let response = reqwest::get(server.path(&format!("/i18n/{table}.json")))
            .await
            .expect("Failed to fetch table");
        assert_eq!(response.status(), 200, "{table}.json should be served");

        let body = response.text().await.expect("Failed to read body");
        let value: serde_json::Value = serde_json::from_str(&body).expect("table is JSON");
        assert!(value.get("nav").is_some(), "{table}.json has no nav section");
    }
}
