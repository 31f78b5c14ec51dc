//! Browser tests for the copy-button binder.
//!
//! Run with `wasm-pack test --headless --chrome --features hydrate`.
//! Each test mounts its own fixture markup with a test-specific trigger
//! class and injects a fake clipboard writer, so the real clipboard (and
//! its permission prompt) is never touched.

#![cfg(all(target_arch = "wasm32", feature = "hydrate"))]

use std::cell::RefCell;
use std::rc::Rc;

use clipbind_core::{BinderConfig, CopyError};
use clipbind_web::binder::CopyBinder;
use clipbind_web::clipboard::ClipboardWriter;
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Clipboard fake: records payloads, or rejects every write.
#[derive(Default)]
struct FakeClipboard {
    writes: Rc<RefCell<Vec<String>>>,
    reject: bool,
}

impl ClipboardWriter for FakeClipboard {
    fn write_text(&self, payload: String) -> LocalBoxFuture<'static, Result<(), CopyError>> {
        let writes = Rc::clone(&self.writes);
        let reject = self.reject;
        async move {
            if reject {
                Err(CopyError::WriteRejected("permission denied".into()))
            } else {
                writes.borrow_mut().push(payload);
                Ok(())
            }
        }
        .boxed_local()
    }
}

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Mount fixture markup under a fresh root element appended to the body.
fn mount_fixture(html: &str) -> HtmlElement {
    let root = document().create_element("div").unwrap();
    root.set_inner_html(html);
    document().body().unwrap().append_child(&root).unwrap();
    root.dyn_into().unwrap()
}

fn config_for(selector: &str) -> BinderConfig {
    BinderConfig {
        trigger_selector: selector.to_string(),
        ..BinderConfig::default()
    }
}

fn button_in(root: &HtmlElement, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

#[wasm_bindgen_test]
fn test_zero_triggers_binds_without_error() {
    let root = mount_fixture("<p>nothing to copy here</p>");
    let binder = CopyBinder::bind(&document(), config_for(".t-none"));
    assert!(binder.is_empty());
    drop(binder);
    root.remove();
}

#[wasm_bindgen_test]
fn test_rebind_is_idempotent() {
    let root = mount_fixture(
        r#"<button class="t-idem" data-clipboard-text="a">Copy</button>
           <button class="t-idem" data-clipboard-text="b">Copy</button>"#,
    );
    let writer: Rc<dyn ClipboardWriter> = Rc::new(FakeClipboard::default());

    let first = CopyBinder::with_writer(&document(), config_for(".t-idem"), Rc::clone(&writer));
    assert_eq!(first.len(), 2);

    // Binding again over the same markup must not double-bind anything.
    let second = CopyBinder::with_writer(&document(), config_for(".t-idem"), Rc::clone(&writer));
    assert_eq!(second.len(), 0);

    // Once both handles are gone the markup is bindable again.
    drop(second);
    drop(first);
    let rebound = CopyBinder::with_writer(&document(), config_for(".t-idem"), writer);
    assert_eq!(rebound.len(), 2);

    drop(rebound);
    root.remove();
}

#[wasm_bindgen_test]
async fn test_click_confirms_then_reverts() {
    let root =
        mount_fixture(r#"<button class="t-flow" data-clipboard-text="hello">Copy</button>"#);
    let fake = FakeClipboard::default();
    let writes = Rc::clone(&fake.writes);
    let binder = CopyBinder::with_writer(&document(), config_for(".t-flow"), Rc::new(fake));
    assert_eq!(binder.len(), 1);

    let button = button_in(&root, "button");
    button.click();
    TimeoutFuture::new(50).await; // let the async write settle

    assert_eq!(writes.borrow().as_slice(), ["hello".to_string()]);
    assert_eq!(button.text_content().unwrap(), "Copied!");

    TimeoutFuture::new(2100).await;
    assert_eq!(button.text_content().unwrap(), "Copy");

    drop(binder);
    root.remove();
}

#[wasm_bindgen_test]
async fn test_second_click_supersedes_revert_timer() {
    let root =
        mount_fixture(r#"<button class="t-race" data-clipboard-text="hello">Copy</button>"#);
    let binder = CopyBinder::with_writer(
        &document(),
        config_for(".t-race"),
        Rc::new(FakeClipboard::default()),
    );

    let button = button_in(&root, "button");
    button.click();
    TimeoutFuture::new(1000).await;
    button.click();
    TimeoutFuture::new(50).await;

    // t ~ 2100ms: past the first click's delay, before the second's. The
    // superseded timer must not have restored the label.
    TimeoutFuture::new(1050).await;
    assert_eq!(button.text_content().unwrap(), "Copied!");

    // t ~ 3300ms: 2000ms past the second success.
    TimeoutFuture::new(1200).await;
    assert_eq!(button.text_content().unwrap(), "Copy");

    drop(binder);
    root.remove();
}

#[wasm_bindgen_test]
async fn test_triggers_confirm_and_revert_independently() {
    let root = mount_fixture(
        r#"<button id="t-a" class="t-pair" data-clipboard-text="foo">Copy</button>
           <button id="t-b" class="t-pair" data-clipboard-text="bar">Copy</button>"#,
    );
    let fake = FakeClipboard::default();
    let writes = Rc::clone(&fake.writes);
    let binder = CopyBinder::with_writer(&document(), config_for(".t-pair"), Rc::new(fake));
    assert_eq!(binder.len(), 2);

    let a = button_in(&root, "#t-a");
    let b = button_in(&root, "#t-b");
    a.click();
    b.click();
    TimeoutFuture::new(50).await;

    assert_eq!(
        writes.borrow().as_slice(),
        ["foo".to_string(), "bar".to_string()]
    );
    assert_eq!(a.text_content().unwrap(), "Copied!");
    assert_eq!(b.text_content().unwrap(), "Copied!");

    TimeoutFuture::new(2100).await;
    assert_eq!(a.text_content().unwrap(), "Copy");
    assert_eq!(b.text_content().unwrap(), "Copy");

    drop(binder);
    root.remove();
}

#[wasm_bindgen_test]
async fn test_successful_copy_clears_selection() {
    let root = mount_fixture(
        r##"<pre id="t-sel-src">selectable text</pre>
           <button class="t-sel" data-clipboard-target="#t-sel-src">Copy</button>"##,
    );
    let binder = CopyBinder::with_writer(
        &document(),
        config_for(".t-sel"),
        Rc::new(FakeClipboard::default()),
    );

    // Select the snippet's contents before copying.
    let source = root.query_selector("#t-sel-src").unwrap().unwrap();
    let range = document().create_range().unwrap();
    range.select_node_contents(&source).unwrap();
    let selection = web_sys::window().unwrap().get_selection().unwrap().unwrap();
    selection.remove_all_ranges().unwrap();
    selection.add_range(&range).unwrap();
    assert_eq!(selection.range_count(), 1);

    button_in(&root, "button").click();
    TimeoutFuture::new(50).await;
    assert_eq!(selection.range_count(), 0);

    drop(binder);
    root.remove();
}

#[wasm_bindgen_test]
async fn test_target_payload_resolved_at_click_time() {
    let root = mount_fixture(
        r#"<pre id="t-live-src">old content</pre>
           <button class="t-live" data-clipboard-target="t-live-src">Copy</button>"#,
    );
    let fake = FakeClipboard::default();
    let writes = Rc::clone(&fake.writes);
    let binder = CopyBinder::with_writer(&document(), config_for(".t-live"), Rc::new(fake));

    // Mutate the target after binding; the click must pick up the new text.
    root.query_selector("#t-live-src")
        .unwrap()
        .unwrap()
        .set_text_content(Some("new content"));

    button_in(&root, "button").click();
    TimeoutFuture::new(50).await;
    assert_eq!(writes.borrow().as_slice(), ["new content".to_string()]);

    drop(binder);
    root.remove();
}

#[wasm_bindgen_test]
async fn test_rejected_write_leaves_label_untouched() {
    let root =
        mount_fixture(r#"<button class="t-fail" data-clipboard-text="hello">Copy</button>"#);
    let fake = FakeClipboard {
        writes: Rc::default(),
        reject: true,
    };
    let writes = Rc::clone(&fake.writes);
    let binder = CopyBinder::with_writer(&document(), config_for(".t-fail"), Rc::new(fake));

    let button = button_in(&root, "button");
    button.click();
    TimeoutFuture::new(50).await;

    assert!(writes.borrow().is_empty());
    assert_eq!(button.text_content().unwrap(), "Copy");

    drop(binder);
    root.remove();
}
