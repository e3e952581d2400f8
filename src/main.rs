use eframe::egui;
use versemood::gui::VersemoodApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("VerseMood")
            .with_inner_size([1080.0, 760.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native("VerseMood", options, Box::new(|cc| Ok(Box::new(VersemoodApp::new(cc)?))))
}
