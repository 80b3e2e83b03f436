use inventory_client::api::mock::{ApiCall, ApiCallKind, MockProductApi};
use inventory_client::api::ApiError;
use inventory_client::controller::{Collaborators, ControllerHandle, InventoryController};
use inventory_client::model::{Product, ProductDraft, ProductId, SortKey};
use inventory_client::session::{EditMode, FormField, FormFields, EDIT_TITLE};
use inventory_client::state::{ADDED_MESSAGE, DELETED_MESSAGE, UPDATED_MESSAGE};
use inventory_client::store::{FilterKind, FilterMode, SortDirection};
use inventory_client::ui::{AutoConfirm, Notification, RecordingNotifier, Severity};
use std::sync::Arc;
use std::time::Duration;

fn catalog() -> Vec<Product> {
    vec![
        Product::new(1, "Widget", "Tools", 9.99, 5),
        Product::new(2, "gadget", "Toys", 19.0, 2),
        Product::new(3, "Sprocket", "Tools", 4.5, 40),
        Product::new(4, "Widget Pro", "Gadgets", 19.0, 0),
    ]
}

struct Page {
    handle: ControllerHandle,
    notifier: RecordingNotifier,
    confirm: AutoConfirm,
}

fn open_page(api: &MockProductApi, confirm: AutoConfirm, mode: FilterMode) -> Page {
    let notifier = RecordingNotifier::default();
    let (controller, handle) = InventoryController::new(16, mode);
    tokio::spawn(controller.run(Collaborators {
        api: Arc::new(api.clone()),
        notifier: Arc::new(notifier.clone()),
        confirm: Arc::new(confirm.clone()),
    }));
    Page {
        handle,
        notifier,
        confirm,
    }
}

/// Opens the page and waits for the initial load of `catalog()`.
async fn loaded_page(api: &MockProductApi, confirm: AutoConfirm) -> Page {
    api.expect_list().return_ok(catalog());
    let page = open_page(api, confirm, FilterMode::Latest);
    page.handle.load_all().await.unwrap();
    page.handle.settle().await.unwrap();
    page
}

async fn fill_form(handle: &ControllerHandle, name: &str, category: &str, price: &str, stock: &str) {
    for (field, value) in [
        (FormField::Name, name),
        (FormField::Category, category),
        (FormField::Price, price),
        (FormField::Stock, stock),
    ] {
        handle.edit_field(field, value).await.unwrap();
    }
}

fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

#[tokio::test]
async fn test_load_shows_every_product() {
    let api = MockProductApi::new();
    let page = loaded_page(&api, AutoConfirm::yes()).await;

    let state = page.handle.snapshot().await.unwrap();
    assert_eq!(state.store.master(), catalog().as_slice());
    assert_eq!(state.store.display(), state.store.master());
    api.verify();
}

#[tokio::test]
async fn test_failed_load_is_silent() {
    let api = MockProductApi::new();
    api.expect_list()
        .return_err(ApiError::Unreachable("connection refused".into()));
    let page = open_page(&api, AutoConfirm::yes(), FilterMode::Latest);

    page.handle.load_all().await.unwrap();
    let state = page.handle.settle().await.unwrap();

    assert!(state.store.master().is_empty());
    assert!(page.notifier.notifications().is_empty());
    api.verify();
}

#[tokio::test]
async fn test_create_refreshes_once_and_clears_form() {
    let api = MockProductApi::new();
    let page = loaded_page(&api, AutoConfirm::yes()).await;
    api.expect_create().return_ok();
    api.expect_list().return_ok(catalog());

    page.handle.begin_create().await.unwrap();
    fill_form(&page.handle, "Widget", "Tools", "9.99", "5").await;
    page.handle.submit().await.unwrap();
    let state = page.handle.settle().await.unwrap();

    assert_eq!(
        api.calls()[1],
        ApiCall::Create(ProductDraft {
            name: "Widget".into(),
            category: "Tools".into(),
            price: 9.99,
            stock: 5.0,
        })
    );
    // One for the initial load, one for the refresh.
    assert_eq!(api.count(ApiCallKind::List), 2);
    assert_eq!(
        page.notifier.notifications(),
        vec![Notification::success(ADDED_MESSAGE)]
    );
    assert_eq!(state.session.fields(), &FormFields::default());
    assert_eq!(state.session.title(), "");
    api.verify();
}

#[tokio::test]
async fn test_unparseable_price_is_still_sent() {
    let api = MockProductApi::new();
    let page = loaded_page(&api, AutoConfirm::yes()).await;
    api.expect_create().return_ok();
    api.expect_list().return_ok(catalog());

    page.handle.begin_create().await.unwrap();
    fill_form(&page.handle, "Widget", "Tools", "abc", "5").await;
    page.handle.submit().await.unwrap();
    page.handle.settle().await.unwrap();

    let ApiCall::Create(draft) = &api.calls()[1] else {
        panic!("Expected a create call, got {:?}", api.calls());
    };
    assert!(draft.price.is_nan());
    assert_eq!(draft.stock, 5.0);
    api.verify();
}

#[tokio::test]
async fn test_failed_create_keeps_form_and_skips_refresh() {
    let api = MockProductApi::new();
    let page = loaded_page(&api, AutoConfirm::yes()).await;
    api.expect_create().return_err(ApiError::Rejected {
        status: 500,
        body: "boom".into(),
    });

    page.handle.begin_create().await.unwrap();
    fill_form(&page.handle, "Widget", "Tools", "9.99", "5").await;
    page.handle.submit().await.unwrap();
    let state = page.handle.settle().await.unwrap();

    let notifications = page.notifier.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].severity, Severity::Error);
    assert!(!notifications[0].message.contains("boom"));
    assert_eq!(state.session.fields().name, "Widget");
    assert_eq!(api.count(ApiCallKind::List), 1);
    api.verify();
}

#[tokio::test]
async fn test_edit_updates_the_selected_product() {
    let api = MockProductApi::new();
    let page = loaded_page(&api, AutoConfirm::yes()).await;
    api.expect_update().return_ok();
    api.expect_list().return_ok(catalog());

    page.handle.begin_edit(ProductId(3)).await.unwrap();
    let state = page.handle.snapshot().await.unwrap();
    assert_eq!(state.session.title(), EDIT_TITLE);
    assert_eq!(state.session.mode(), EditMode::Edit { target: ProductId(3) });
    assert_eq!(state.session.fields().price, "4.5");

    page.handle.edit_field(FormField::Stock, "41").await.unwrap();
    page.handle.submit().await.unwrap();
    page.handle.settle().await.unwrap();

    assert_eq!(
        api.calls()[1],
        ApiCall::Update(
            ProductId(3),
            ProductDraft {
                name: "Sprocket".into(),
                category: "Tools".into(),
                price: 4.5,
                stock: 41.0,
            }
        )
    );
    assert_eq!(
        page.notifier.notifications(),
        vec![Notification::success(UPDATED_MESSAGE)]
    );
    api.verify();
}

#[tokio::test]
async fn test_discard_sends_nothing() {
    let api = MockProductApi::new();
    let page = loaded_page(&api, AutoConfirm::yes()).await;

    page.handle.begin_edit(ProductId(1)).await.unwrap();
    page.handle.edit_field(FormField::Name, "Changed").await.unwrap();
    page.handle.discard().await.unwrap();
    let state = page.handle.settle().await.unwrap();

    assert_eq!(state.session.fields(), &FormFields::default());
    assert_eq!(api.calls().len(), 1);
    api.verify();
}

#[tokio::test]
async fn test_confirmed_delete_refreshes() {
    let api = MockProductApi::new();
    let page = loaded_page(&api, AutoConfirm::yes()).await;
    let remaining: Vec<Product> = catalog().into_iter().filter(|p| p.id != ProductId(2)).collect();
    api.expect_delete().return_ok();
    api.expect_list().return_ok(remaining.clone());

    page.handle.remove(ProductId(2)).await.unwrap();
    let state = page.handle.settle().await.unwrap();

    assert_eq!(page.confirm.asked(), 1);
    assert_eq!(api.calls()[1], ApiCall::Delete(ProductId(2)));
    assert_eq!(state.store.master(), remaining.as_slice());
    assert_eq!(
        page.notifier.notifications(),
        vec![Notification::success(DELETED_MESSAGE)]
    );
    api.verify();
}

#[tokio::test]
async fn test_declined_delete_changes_nothing() {
    let api = MockProductApi::new();
    let page = loaded_page(&api, AutoConfirm::no()).await;

    page.handle.remove(ProductId(2)).await.unwrap();
    let state = page.handle.settle().await.unwrap();

    assert_eq!(page.confirm.asked(), 1);
    assert_eq!(api.count(ApiCallKind::Delete), 0);
    assert_eq!(api.calls().len(), 1);
    assert_eq!(state.store.master(), catalog().as_slice());
    assert_eq!(state.store.display(), catalog().as_slice());
    assert!(page.notifier.notifications().is_empty());
    api.verify();
}

#[tokio::test]
async fn test_delete_with_unexpected_status_reports_error() {
    let api = MockProductApi::new();
    let page = loaded_page(&api, AutoConfirm::yes()).await;
    api.expect_delete().return_err(ApiError::UnexpectedStatus(204));

    page.handle.remove(ProductId(1)).await.unwrap();
    let state = page.handle.settle().await.unwrap();

    let notifications = page.notifier.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].severity, Severity::Error);
    assert_eq!(state.store.master(), catalog().as_slice());
    api.verify();
}

#[tokio::test]
async fn test_stale_load_is_dropped() {
    let api = MockProductApi::new();
    let old = vec![Product::new(1, "Old", "Tools", 1.0, 1)];
    api.expect_list()
        .after(Duration::from_millis(100))
        .return_ok(old);
    api.expect_list().return_ok(catalog());
    let page = open_page(&api, AutoConfirm::yes(), FilterMode::Latest);

    page.handle.load_all().await.unwrap();
    page.handle.load_all().await.unwrap();
    let state = page.handle.settle().await.unwrap();

    assert_eq!(state.store.master(), catalog().as_slice());
    api.verify();
}

#[tokio::test]
async fn test_name_filter_ignores_earlier_category_filter() {
    let api = MockProductApi::new();
    let page = loaded_page(&api, AutoConfirm::yes()).await;

    page.handle
        .apply_filter(FilterKind::Category, "toys")
        .await
        .unwrap();
    page.handle.apply_filter(FilterKind::Name, "WIDGET").await.unwrap();
    let state = page.handle.snapshot().await.unwrap();
    assert_eq!(names(state.store.display()), vec!["Widget", "Widget Pro"]);

    page.handle.apply_filter(FilterKind::Name, "").await.unwrap();
    page.handle.apply_filter(FilterKind::Category, "").await.unwrap();
    let state = page.handle.snapshot().await.unwrap();
    assert_eq!(state.store.display(), state.store.master());
}

#[tokio::test]
async fn test_composed_filters_intersect() {
    let api = MockProductApi::new();
    api.expect_list().return_ok(catalog());
    let page = open_page(&api, AutoConfirm::yes(), FilterMode::Intersect);
    page.handle.load_all().await.unwrap();
    page.handle.settle().await.unwrap();

    page.handle
        .apply_filter(FilterKind::Category, "tools")
        .await
        .unwrap();
    page.handle.apply_filter(FilterKind::Name, "widget").await.unwrap();
    let state = page.handle.snapshot().await.unwrap();

    assert_eq!(names(state.store.display()), vec!["Widget"]);
}

#[tokio::test]
async fn test_sort_directions() {
    let api = MockProductApi::new();
    let page = loaded_page(&api, AutoConfirm::yes()).await;

    page.handle
        .sort(SortKey::Price, SortDirection::Ascending)
        .await
        .unwrap();
    let ascending = page.handle.snapshot().await.unwrap();
    let prices: Vec<f64> = ascending.store.display().iter().map(|p| p.price).collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
    // Stable: the two 19.0 products keep their master order.
    assert_eq!(names(&ascending.store.display()[2..]), vec!["gadget", "Widget Pro"]);

    page.handle
        .sort(SortKey::Price, SortDirection::Ascending)
        .await
        .unwrap();
    let again = page.handle.snapshot().await.unwrap();
    assert_eq!(again.store.display(), ascending.store.display());

    page.handle
        .sort(SortKey::Stock, SortDirection::Descending)
        .await
        .unwrap();
    let descending = page.handle.snapshot().await.unwrap();
    let stock: Vec<i64> = descending.store.display().iter().map(|p| p.stock).collect();
    assert!(stock.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(descending.store.master(), catalog().as_slice());
}

#[tokio::test]
async fn test_failed_update_keeps_form_and_skips_refresh() {
    let api = MockProductApi::new();
    let page = loaded_page(&api, AutoConfirm::yes()).await;
    api.expect_update()
        .return_err(ApiError::Rejected {
            status: 400,
            body: "stock must be an integer".into(),
        });

    page.handle.begin_edit(ProductId(2)).await.unwrap();
    page.handle.edit_field(FormField::Stock, "3").await.unwrap();
    page.handle.submit().await.unwrap();
    let state = page.handle.settle().await.unwrap();

    assert_eq!(
        page.notifier.notifications(),
        vec![Notification::error(
            "Could not update product: the product service rejected the request (HTTP 400)"
        )]
    );
    assert_eq!(state.session.mode(), EditMode::Edit { target: ProductId(2) });
    assert_eq!(state.session.title(), EDIT_TITLE);
    assert_eq!(state.session.fields().stock, "3");
    assert_eq!(api.count(ApiCallKind::List), 1);
    assert_eq!(state.store.master(), catalog().as_slice());
    api.verify();
}

#[tokio::test]
async fn test_sort_puts_unpriced_products_last() {
    let api = MockProductApi::new();
    let mut products = catalog();
    products.insert(1, Product::new(5, "Gizmo", "Toys", f64::NAN, 1));
    api.expect_list().return_ok(products);
    let page = open_page(&api, AutoConfirm::yes(), FilterMode::Latest);
    page.handle.load_all().await.unwrap();
    page.handle.settle().await.unwrap();

    page.handle
        .sort(SortKey::Price, SortDirection::Ascending)
        .await
        .unwrap();
    let ascending = page.handle.snapshot().await.unwrap();
    assert_eq!(
        names(ascending.store.display()),
        vec!["Sprocket", "Widget", "gadget", "Widget Pro", "Gizmo"]
    );

    page.handle
        .sort(SortKey::Price, SortDirection::Descending)
        .await
        .unwrap();
    let descending = page.handle.snapshot().await.unwrap();
    assert_eq!(descending.store.display()[0].name, "Gizmo");
    assert_eq!(descending.store.master()[1].name, "Gizmo");
}
