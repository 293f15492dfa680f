//! Springlab - interactive damped spring-mass oscillator.

use eframe::egui;

use springlab::SpringLabApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1020.0, 680.0])
            .with_title("Springlab"),
        ..Default::default()
    };

    eframe::run_native(
        "Springlab",
        options,
        Box::new(|cc| Ok(Box::new(SpringLabApp::new(cc)))),
    )
}
