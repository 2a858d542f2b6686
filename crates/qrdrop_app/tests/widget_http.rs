mod support;

use qrdrop_app::constants::*;
use qrdrop_app::{UiEvent, Widget, WidgetSettings};
use qrdrop_core::ViewState;
use qrdrop_engine::UploadSettings;
use support::{file, pump_until, RecordingSurface};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn mount_against(server: &MockServer) -> Widget<RecordingSurface> {
    qrdrop_logging::initialize_for_tests();
    let settings = WidgetSettings {
        upload: UploadSettings {
            endpoint: format!("{}/upload", server.uri()),
            ..UploadSettings::default()
        },
        ..WidgetSettings::default()
    };
    Widget::mount(RecordingSurface::default(), settings)
}

fn choose_and_submit(widget: &mut Widget<RecordingSurface>, name: &str) {
    widget.handle_event(UiEvent::FilesChosen {
        element: FILE_INPUT,
        files: vec![file(name, 64)],
    });
    widget.handle_event(UiEvent::Click {
        element: GENERATE_BTN,
    });
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn success_response_ends_in_result_ready() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(body_string_contains("filename=\"report.txt\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "qr_code": "data:image/png;base64,QR",
            "download_url": "https://x/abc",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut widget = mount_against(&server);
    choose_and_submit(&mut widget, "report.txt");
    assert!(pump_until(&mut widget, |w| {
        w.view().view_state == ViewState::ResultReady
    }));

    let surface = widget.surface();
    assert_eq!(surface.value_of(SHARE_LINK), "https://x/abc");
    assert_eq!(surface.image_of(QR_CODE), Some("data:image/png;base64,QR"));
    assert_eq!(surface.visible_panels(), vec![RESULT_SECTION]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn failure_response_returns_to_file_chosen() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"success": false, "error": "too large"})),
        )
        .mount(&server)
        .await;

    let mut widget = mount_against(&server);
    choose_and_submit(&mut widget, "movie.mkv");
    assert!(pump_until(&mut widget, |w| {
        !w.surface().notifications.is_empty()
    }));

    assert_eq!(widget.view().view_state, ViewState::FileChosen);
    assert_eq!(
        widget.state().selected_file().map(|f| f.name.as_str()),
        Some("movie.mkv")
    );
    assert!(widget.surface().notifications[0].contains("too large"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn malformed_response_is_surfaced_like_any_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let mut widget = mount_against(&server);
    choose_and_submit(&mut widget, "a.txt");
    assert!(pump_until(&mut widget, |w| {
        !w.surface().notifications.is_empty()
    }));

    assert_eq!(widget.view().view_state, ViewState::FileChosen);
    assert_eq!(
        widget.surface().notifications,
        vec![qrdrop_app::GENERIC_UPLOAD_FAILURE.to_string()]
    );
}
