use std::time::Duration;

use e2e::browser::Browser;
use e2e::test_server::TestServer;

const WAIT: Duration = Duration::from_secs(10);

#[tokio::test]
#[ignore = "needs Chrome and the full server"]
async fn test_toggle_switches_and_persists_language() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to open tab");

    page.goto(server.url()).expect("Failed to load homepage");
    assert_eq!(page.text("[data-i18n=\"nav.home\"]").unwrap(), "Inicio");
    assert!(page.has_class("#langEs", "active").unwrap());

    page.click("#langEn").expect("Failed to click toggle");
    page.wait_for_text("[data-i18n=\"nav.home\"]", "Home", WAIT)
        .expect("page never switched to English");
    assert!(page.has_class("#langEn", "active").unwrap());
    assert!(page.has_class("#langEnMobile", "active").unwrap());
    assert_eq!(
        page.eval("document.documentElement.lang").unwrap(),
        serde_json::json!("en")
    );

    // The choice survives a reload.
    page.goto(server.url()).expect("Failed to reload");
    page.wait_for_text("[data-i18n=\"nav.home\"]", "Home", WAIT)
        .expect("stored language was not applied");
    assert_eq!(
        page.eval("localStorage.getItem('advansys-lang')").unwrap(),
        serde_json::json!("en")
    );
}

#[tokio::test]
#[ignore = "needs Chrome and the full server"]
async fn test_menu_and_scroll_handlers() {
    let server = TestServer::start()
        .await
        .expect("Failed to start test server");
    let browser = Browser::launch().expect("Failed to launch browser");
    let page = browser.new_page().expect("Failed to open tab");

    page.goto(server.url()).expect("Failed to load homepage");
    assert!(!page.has_class("#mainNav", "scrolled").unwrap());
    assert!(page
        .eval("document.body.firstElementChild.classList.contains('scroll-progress')")
        .unwrap()
        .as_bool()
        .unwrap_or(false));

    // With the Bootstrap bundle loaded the toggler opens the menu.
    page.eval("document.querySelector('.navbar-toggler').click()").unwrap();
    std::thread::sleep(Duration::from_millis(500));
    assert!(page.has_class(".navbar-collapse", "show").unwrap());

    // An in-page link closes it before jumping.
    page.click(".nav-link[href=\"#contacto\"]").unwrap();
    std::thread::sleep(Duration::from_millis(200));
    assert!(!page.has_class(".navbar-collapse", "show").unwrap());

    page.eval("window.scrollTo(0, 400)").unwrap();
    std::thread::sleep(Duration::from_millis(200));
    assert!(page.has_class("#mainNav", "scrolled").unwrap());
}
