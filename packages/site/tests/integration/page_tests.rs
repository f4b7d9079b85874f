use site::config::PageConfig;
use site::dom::{Document, Element, MemoryDocument, MemoryElement, ScrollBehavior, Selector};
use site::interactions::LazyMode;
use site::{InitSummary, PageController};

fn landing_page() -> MemoryDocument {
    let doc = MemoryDocument::new("/");
    doc.set_viewport(800.0, 2800.0);

    doc.append(
        MemoryElement::new("a")
            .with_class("skip-link")
            .with_attr("href", "#main"),
    );
    doc.append(
        MemoryElement::new("nav")
            .with_id("mainNav")
            .with_bounds(0.0, 80.0)
            .with_child(
                MemoryElement::new("div")
                    .with_class("navbar-collapse")
                    .with_child(
                        MemoryElement::new("a")
                            .with_class("nav-link")
                            .with_attr("href", "#inicio"),
                    )
                    .with_child(
                        MemoryElement::new("a")
                            .with_class("nav-link")
                            .with_attr("href", "#servicios"),
                    )
                    .with_child(
                        MemoryElement::new("a")
                            .with_class("nav-link")
                            .with_attr("href", "/sico"),
                    ),
            ),
    );
    doc.append(
        MemoryElement::new("main").with_id("main").with_child(
            MemoryElement::new("section")
                .with_id("inicio")
                .with_bounds(0.0, 900.0),
        ),
    );
    doc.append(
        MemoryElement::new("section")
            .with_id("servicios")
            .with_bounds(900.0, 1200.0)
            .with_child(
                MemoryElement::new("div")
                    .with_class("service-card")
                    .with_child(MemoryElement::new("a").with_attr("href", "/sico")),
            )
            .with_child(MemoryElement::new("img").with_attr("data-src", "/img/cloud.webp")),
    );
    doc.append(
        MemoryElement::new("form")
            .with_class("needs-validation")
            .invalid(),
    );
    doc.append(MemoryElement::new("a").with_attr("href", "#page-top"));
    doc
}

#[test]
fn init_binds_everything_it_finds() {
    let doc = landing_page();
    let summary = PageController::init(&doc, &PageConfig::default());

    assert_eq!(
        summary,
        InitSummary {
            animations: false,
            navbar: true,
            section_highlight: true,
            smooth_scroll_links: 2,
            progress_bar: true,
            lazy_mode: LazyMode::Observed,
            lazy_images: 1,
            back_to_top: true,
            forms: 1,
            skip_link: true,
            cards: 1,
        }
    );
}

#[test]
fn empty_page_binds_nothing_but_the_progress_bar() {
    let doc = MemoryDocument::new("/");
    let summary = PageController::init(&doc, &PageConfig::default());

    assert!(!summary.navbar);
    assert!(!summary.section_highlight);
    assert_eq!(summary.smooth_scroll_links, 0);
    assert!(summary.progress_bar);
    assert_eq!(summary.lazy_images, 0);
    assert_eq!(doc.observed_count(), 0);
}

#[test]
fn one_scroll_burst_updates_every_scroll_handler_once_per_frame() {
    let doc = landing_page();
    PageController::init(&doc, &PageConfig::default());

    for y in [100.0, 400.0, 1000.0] {
        doc.scroll(y);
    }
    // navbar, section highlight and progress bar each queue one frame
    assert_eq!(doc.pending_frames(), 3);
    doc.run_frames();

    let navbar = doc.element_by_id("mainNav").unwrap();
    assert!(navbar.has_class("scrolled"));

    let links = doc.query_all(&Selector::class("nav-link"));
    assert!(!links[0].has_class("active"));
    assert!(links[1].has_class("active"));

    let bar = doc.query_first(&Selector::class("scroll-progress")).unwrap();
    assert_eq!(bar.style("width").as_deref(), Some("50%"));
}

#[test]
fn nav_click_then_back_to_top() {
    let doc = landing_page();
    PageController::init(&doc, &PageConfig::default());

    let links = doc.query_all(&Selector::class("nav-link"));
    doc.click(&links[1]);
    let top = doc
        .query_first(&Selector::TagAttrEq("a".into(), "href".into(), "#page-top".into()))
        .unwrap();
    doc.click(&top);

    assert_eq!(
        doc.scroll_history(),
        vec![(820.0, ScrollBehavior::Instant), (0.0, ScrollBehavior::Smooth)]
    );
}

#[test]
fn external_nav_links_are_left_to_the_browser() {
    let doc = landing_page();
    PageController::init(&doc, &PageConfig::default());

    let links = doc.query_all(&Selector::class("nav-link"));
    let ctx = doc.click(&links[2]);
    assert!(!ctx.default_prevented);
    assert!(doc.scroll_history().is_empty());
}
