use blogroll::controller::{ViewController, ViewPhase};
use blogroll::error::BlogError;
use blogroll::filter::visible;
use blogroll::model::Post;
use blogroll::provider::memory::StaticProvider;
use blogroll::validation::{FormField, PostForm};
use chrono::NaiveDate;

fn post(title: &str, category: &str) -> Post {
    Post::new(
        title.to_string(),
        "Writer".to_string(),
        category.to_string(),
        format!("All about {}", title),
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
    )
}

async fn empty_session() -> ViewController {
    let mut controller = ViewController::default();
    controller
        .load(&StaticProvider::new(Vec::new(), Vec::new()))
        .await
        .unwrap();
    controller
}

#[tokio::test]
async fn append_then_filter_from_empty_store() {
    let mut controller = empty_session().await;

    controller
        .submit_post(PostForm::new("Hi", "A", "News", "Hello world"))
        .unwrap();

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.visible_posts.len(), 1);
    assert_eq!(snapshot.visible_posts[0].slug, "hi");
    assert_eq!(snapshot.visible_posts[0].excerpt, "Hello world...");
    assert!(snapshot.categories.contains(&"News".to_string()));
}

#[tokio::test]
async fn partial_input_is_rejected_for_title_only() {
    let mut controller = ViewController::default();
    controller
        .load(&StaticProvider::new(
            vec![post("Existing", "News")],
            vec!["News".to_string()],
        ))
        .await
        .unwrap();

    let err = controller
        .submit_post(PostForm::new("", "A", "News", "x"))
        .unwrap_err();
    match err {
        BlogError::Validation(errors) => {
            assert_eq!(errors.len(), 1);
            assert!(errors.contains(FormField::Title));
        }
        other => panic!("Expected Validation error, got {:?}", other),
    }

    assert_eq!(controller.store().len(), 1);
    assert_eq!(controller.visible_posts().len(), 1);
}

#[tokio::test]
async fn category_exactness_ignores_search_term() {
    let mut controller = ViewController::default();
    controller
        .load(&StaticProvider::new(
            vec![
                post("Rust tips", "Tech"),
                post("Rust on bikes", "Life"),
                post("Gardening", "Life"),
            ],
            vec!["Tech".to_string(), "Life".to_string()],
        ))
        .await
        .unwrap();

    controller.change_category("Tech").unwrap();
    for term in ["", "rust", "bikes", "zzz"] {
        controller.search(term).unwrap();
        assert!(controller
            .visible_posts()
            .iter()
            .all(|p| p.category == "Tech"));
    }
}

#[tokio::test]
async fn compound_filter_scenario() {
    let posts = vec![post("Intro to Tech", "Tech"), post("Intro to Life", "Life")];
    let mut controller = ViewController::default();
    controller
        .load(&StaticProvider::new(posts.clone(), Vec::new()))
        .await
        .unwrap();

    controller.change_category("Tech").unwrap();
    controller.search("intro").unwrap();

    let snapshot = controller.snapshot();
    assert_eq!(snapshot.visible_posts, vec![posts[0].clone()]);
    assert_eq!(snapshot.visible_posts, visible(&posts, "Tech", "intro"));
}

#[tokio::test]
async fn repeated_changes_do_not_compound() {
    let posts = vec![
        post("Alpha", "Tech"),
        post("Beta", "Life"),
        post("Gamma", "Tech"),
    ];
    let mut controller = ViewController::default();
    controller
        .load(&StaticProvider::new(posts.clone(), Vec::new()))
        .await
        .unwrap();

    controller.search("beta").unwrap();
    controller.change_category("Tech").unwrap();
    assert!(controller.visible_posts().is_empty());

    controller.search("").unwrap();
    controller.change_category("All").unwrap();
    assert_eq!(controller.visible_posts(), posts.as_slice());
}

#[tokio::test]
async fn failed_load_then_authoring() {
    let mut controller = ViewController::default();
    assert!(controller
        .load(&StaticProvider::failing("timeout"))
        .await
        .is_err());
    assert_eq!(controller.phase(), ViewPhase::Error);

    controller
        .submit_post(PostForm::new("Offline post", "A", "Notes", "Still works"))
        .unwrap();
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.visible_posts.len(), 1);
    assert_eq!(snapshot.categories, vec!["All", "Notes"]);
}
