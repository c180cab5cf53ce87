#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = sticker_sketchpad::SketchConfig::default();
    let window_size = config.canvas_size + egui::vec2(280.0, 80.0);
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Sticker Sketchpad")
            .with_inner_size(window_size)
            .with_min_inner_size(window_size),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Sticker Sketchpad",
        native_options,
        Box::new(|cc| Ok(Box::new(sticker_sketchpad::SketchpadApp::new(cc)))),
    );
    if let Err(err) = &result {
        // Usually means no rendering context could be created.
        log::error!("failed to start: {err}");
    }
    result
}

// When compiling to web using trunk:
#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("no document to attach the sketchpad to");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("the_canvas_id")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("missing <canvas id=\"the_canvas_id\">");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(sticker_sketchpad::SketchpadApp::new(cc)))),
            )
            .await;

        if let Err(err) = start_result {
            log::error!("failed to start eframe: {err:?}");
        }
    });
}
