use bus_quiz::QuizApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use eframe::egui;

    pretty_env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([760.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Minnesota School Bus (S) Endorsement Training 2026",
        options,
        Box::new(|_cc| Ok(Box::new(QuizApp::with_default_store()))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async move {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("no document on window");
        let canvas = document
            .get_element_by_id("quiz_canvas")
            .expect("no element with id quiz_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("quiz_canvas is not a canvas");

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(QuizApp::with_default_store()))),
            )
            .await
            .expect("failed to start the quiz app");
    });
}
