//! Webcam capture for photo-based check-in/out.
//!
//! Streams the camera into a `<video>` element and snapshots a frame to a
//! hidden canvas on capture, yielding a `data:image/jpeg;base64,...` URL in
//! the `captured` signal. Callers strip the data-URL prefix before upload
//! (`util::format::data_url_payload`). Requires a browser; outside one the
//! component renders a static placeholder.

use leptos::prelude::*;

/// Live camera preview with capture/retake controls.
///
/// `captured` holds the snapshot as a data URL, or `None` while the preview
/// is live.
#[component]
pub fn PhotoCapture(captured: RwSignal<Option<String>>) -> impl IntoView {
    let video_ref = NodeRef::<leptos::html::Video>::new();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    start_stream(video_ref);
    #[cfg(not(feature = "hydrate"))]
    let _ = video_ref;

    let capture = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(data_url) = snapshot(video_ref, canvas_ref) {
                captured.set(Some(data_url));
            } else {
                leptos::logging::warn!("photo capture failed; camera not ready?");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = canvas_ref;
    };

    let retake = move |_| captured.set(None);

    view! {
        <div class="photo-capture">
            <Show
                when=move || captured.get().is_none()
                fallback=move || {
                    view! {
                        <img
                            class="photo-capture__preview"
                            src=move || captured.get().unwrap_or_default()
                            alt="Captured"
                        />
                        <button class="btn" on:click=retake data-testid="retake-button">
                            "Retake"
                        </button>
                    }
                }
            >
                <video
                    class="photo-capture__video"
                    node_ref=video_ref
                    autoplay=true
                    playsinline=true
                ></video>
                <button
                    class="btn btn--primary"
                    on:click=capture
                    data-testid="capture-button"
                >
                    "Capture Photo"
                </button>
            </Show>
            <canvas class="photo-capture__canvas" node_ref=canvas_ref hidden=true></canvas>
        </div>
    }
}

/// Request the camera and pipe it into the video element once mounted.
#[cfg(feature = "hydrate")]
fn start_stream(video_ref: NodeRef<leptos::html::Video>) {
    use wasm_bindgen::JsCast;

    Effect::new(move || {
        let Some(video) = video_ref.get() else {
            return;
        };

        leptos::task::spawn_local(async move {
            let Some(devices) = web_sys::window()
                .map(|w| w.navigator())
                .and_then(|n| n.media_devices().ok())
            else {
                leptos::logging::warn!("media devices unavailable");
                return;
            };

            let constraints = web_sys::MediaStreamConstraints::new();
            constraints.set_video(&wasm_bindgen::JsValue::TRUE);

            let Ok(promise) = devices.get_user_media_with_constraints(&constraints) else {
                leptos::logging::warn!("camera request rejected");
                return;
            };

            match wasm_bindgen_futures::JsFuture::from(promise).await {
                Ok(stream) => {
                    if let Ok(stream) = stream.dyn_into::<web_sys::MediaStream>() {
                        video.set_src_object(Some(&stream));
                        let _ = video.play();
                    }
                }
                Err(_) => leptos::logging::warn!("camera permission denied"),
            }
        });
    });
}

/// Draw the current video frame onto the hidden canvas and encode it.
#[cfg(feature = "hydrate")]
fn snapshot(
    video_ref: NodeRef<leptos::html::Video>,
    canvas_ref: NodeRef<leptos::html::Canvas>,
) -> Option<String> {
    use wasm_bindgen::JsCast;

    let video = video_ref.get()?;
    let canvas = canvas_ref.get()?;

    canvas.set_width(video.video_width());
    canvas.set_height(video.video_height());

    let ctx = canvas
        .get_context("2d")
        .ok()??
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .ok()?;
    ctx.draw_image_with_html_video_element(&video, 0.0, 0.0)
        .ok()?;

    canvas.to_data_url_with_type("image/jpeg").ok()
}
