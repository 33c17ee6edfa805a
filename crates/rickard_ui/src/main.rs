//! Interactive form front-end for the Rickard fault classifier.
//!
//! Collects dip, pitch and convention, shows the classification result and
//! paints the diagram live; the rendered diagram can be exported as a PNG
//! through the core's raster path.

use anyhow::Result;
use eframe::egui;
use std::f64::consts::TAU;
use std::path::PathBuf;

use rickard::{
    boundary_radius, classify_fault, Classification, Convention, DiagramOptions, SECTOR_COUNT,
};

/// Fraction of the painted area's half-extent kept as margin around the
/// plotting area, matching the raster renderer.
const MARGIN: f32 = 1.15;

struct RickardApp {
    dip: f64,
    pitch: f64,
    convention: Convention,
    show_numbers: bool,
    show_sector_lines: bool,
    last_saved: Option<PathBuf>,
    error_message: Option<String>,
}

impl RickardApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            dip: 30.0,
            pitch: 60.0,
            convention: Convention::Rickard,
            show_numbers: true,
            show_sector_lines: true,
            last_saved: None,
            error_message: None,
        }
    }

    fn save_png(&mut self, result: &Classification) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name("rickard_diamond.png")
            .save_file()
        else {
            return;
        };

        let options = DiagramOptions {
            show_numbers: self.show_numbers,
            show_sector_lines: self.show_sector_lines,
            ..Default::default()
        };

        match rickard::save_diagram_png(result, &options, &path) {
            Ok(()) => {
                self.last_saved = Some(path);
                self.error_message = None;
            }
            Err(e) => {
                log::error!("Failed to save diagram: {}", e);
                self.error_message = Some(format!("Failed to save diagram: {}", e));
            }
        }
    }

    fn paint_diagram(&self, painter: &egui::Painter, rect: egui::Rect, result: &Classification) {
        painter.rect_filled(rect, 0.0, egui::Color32::WHITE);

        let apex = result.convention.apex_height() as f32;
        let scale =
            (rect.width() / (2.0 * MARGIN)).min(rect.height() / (2.0 * MARGIN * apex));
        let center = rect.center();
        let to_screen =
            |x: f64, y: f64| egui::pos2(center.x + x as f32 * scale, center.y - y as f32 * scale);

        let origin = to_screen(0.0, 0.0);

        if self.show_sector_lines {
            let stroke = egui::Stroke::new(0.8, egui::Color32::GRAY);
            for i in 0..SECTOR_COUNT {
                let theta = i as f64 / SECTOR_COUNT as f64 * TAU;
                let r = boundary_radius(result.convention, theta);
                painter.line_segment(
                    [origin, to_screen(r * theta.cos(), r * theta.sin())],
                    stroke,
                );
            }
        }

        let outline = egui::Stroke::new(1.6, egui::Color32::BLACK);
        let apexes = [
            to_screen(0.0, apex as f64),
            to_screen(1.0, 0.0),
            to_screen(0.0, -(apex as f64)),
            to_screen(-1.0, 0.0),
            to_screen(0.0, apex as f64),
        ];
        for pair in apexes.windows(2) {
            painter.line_segment([pair[0], pair[1]], outline);
        }

        if self.show_numbers {
            for i in 0..SECTOR_COUNT {
                let theta = i as f64 / SECTOR_COUNT as f64 * TAU;
                let r = 0.9 * boundary_radius(result.convention, theta);
                painter.text(
                    to_screen(r * theta.cos(), r * theta.sin()),
                    egui::Align2::CENTER_CENTER,
                    (i + 1).to_string(),
                    egui::FontId::proportional(12.0),
                    egui::Color32::DARK_GRAY,
                );
            }
        }

        let point = to_screen(result.point.x, result.point.y);
        painter.circle_filled(point, 6.0, egui::Color32::RED);

        // Label offset radially so it doesn't cover the marker; the origin
        // has no direction of its own, so its label sits to the right.
        let theta_p = if result.point.x == 0.0 && result.point.y == 0.0 {
            0.0
        } else {
            result.point.y.atan2(result.point.x)
        };
        let label_pos = to_screen(
            result.point.x + 0.06 * theta_p.cos(),
            result.point.y + 0.06 * theta_p.sin(),
        );
        painter.text(
            label_pos,
            egui::Align2::LEFT_BOTTOM,
            format!("{} (S{})", result.fault_name, result.sector),
            egui::FontId::proportional(13.0),
            egui::Color32::BLACK,
        );
    }
}

impl eframe::App for RickardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let result = classify_fault(self.dip, self.pitch, self.convention);

        egui::SidePanel::left("controls")
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading("Rickard Fault Classification");
                ui.separator();

                ui.label("Input");
                ui.horizontal(|ui| {
                    ui.label("Dip (°):");
                    ui.add(
                        egui::DragValue::new(&mut self.dip)
                            .speed(1.0)
                            .range(-180.0..=180.0),
                    );
                });
                ui.horizontal(|ui| {
                    ui.label("Pitch/rake (°):");
                    ui.add(
                        egui::DragValue::new(&mut self.pitch)
                            .speed(1.0)
                            .range(0.0..=90.0),
                    );
                });

                ui.separator();
                ui.label("Convention");
                for convention in Convention::all() {
                    ui.radio_value(&mut self.convention, convention, convention.label());
                }

                ui.separator();
                ui.checkbox(&mut self.show_numbers, "Show sector numbers");
                ui.checkbox(&mut self.show_sector_lines, "Show sector lines");

                ui.separator();
                ui.label("Result");
                ui.label(format!("Sector: {}", result.sector));
                ui.label(format!("Fault name: {}", result.fault_name));
                ui.label(format!(
                    "Coordinates: ({:.4}, {:.4})",
                    result.point.x, result.point.y
                ));

                ui.separator();
                ui.label("Export");
                if ui.button("Save PNG…").clicked() {
                    self.save_png(&result);
                }
                if let Some(ref path) = self.last_saved {
                    ui.weak(format!("Saved to {}", path.display()));
                }

                if let Some(ref error) = self.error_message {
                    ui.separator();
                    ui.colored_label(egui::Color32::RED, error);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::hover());
            self.paint_diagram(&painter, response.rect, &result);
        });
    }
}

fn main() -> Result<()> {
    env_logger::init();

    println!("Rickard Fault Classification (eframe/egui)");
    println!("==========================================");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_title("Rickard Fault Classification"),
        ..Default::default()
    };

    eframe::run_native(
        "Rickard Fault Classification",
        options,
        Box::new(|cc| Ok(Box::new(RickardApp::new(cc)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run eframe: {}", e))?;

    Ok(())
}
