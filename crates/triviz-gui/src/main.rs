use eframe::egui;
use tracing::info;
use triviz_core::geom::{Vec2, Viewport};
use triviz_core::model::Rgba;
use triviz_core::params::{Params, HEIGHT_MAX, WIDTH_MAX};
use triviz_core::report::CalculatedValues;
use triviz_core::scene::{self, DrawCmd};

fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    info!("starting triviz");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "triviz",
        native_options,
        Box::new(|cc| Ok(Box::new(TrivizApp::new(cc)))),
    )
}

/// The explicit parameter/value context the panel and the canvas share.
/// `params` is mutated by the widgets, `values` is overwritten by the engine
/// every frame and read back by the panel for display.
struct TrivizApp {
    params: Params,
    values: CalculatedValues,
    canvas: Viewport,
    placed: bool,
}

impl TrivizApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            params: Params::default(),
            values: CalculatedValues::default(),
            canvas: Viewport::new(800.0, 600.0),
            placed: false,
        }
    }

    fn show_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Parameters");
        ui.add(egui::Slider::new(&mut self.params.width, 0.0..=WIDTH_MAX).text("width"));
        ui.add(egui::Slider::new(&mut self.params.height, 0.0..=HEIGHT_MAX).text("height"));
        ui.add(egui::Slider::new(&mut self.params.pos_x, 0.0..=self.canvas.width).text("posX"));
        ui.add(egui::Slider::new(&mut self.params.pos_y, 0.0..=self.canvas.height).text("posY"));

        ui.separator();
        color_row(ui, "background", &mut self.params.background_color);
        color_row(ui, "triangle", &mut self.params.triangle_color);
        color_row(ui, "circle", &mut self.params.circle_color);

        ui.separator();
        ui.heading("Calculated values");
        let v = &self.values;
        ui.monospace(format!("angleA: {}", v.angle_a));
        ui.monospace(format!("angleB: {}", v.angle_b));
        ui.monospace(format!("angleC: {}", v.angle_c));
        ui.monospace(format!("abcArea: {:.2}", v.abc_area));
        ui.monospace(format!("circleArea: {:.2}", v.circle_area));
        ui.monospace(format!("aycArea: {}", v.ayc_area));
        ui.monospace(format!(
            "abcIntersectionCircleArea: {:.2}",
            v.abc_intersection_circle_area
        ));
        ui.monospace(format!("ayAngles: {}", v.ay_angles));
    }

    fn show_canvas(&mut self, ui: &mut egui::Ui) {
        let (rect, _response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
        let painter = ui.painter_at(rect);

        self.canvas = Viewport::new(rect.width() as f64, rect.height() as f64);
        if !self.placed {
            // First frame: drop the triangle at the canvas center, like the
            // panel defaults track the window center.
            let center = self.canvas.center();
            self.params.pos_x = center.x;
            self.params.pos_y = center.y;
            self.placed = true;
        }

        let frame = scene::compose_frame(&self.params, self.canvas);
        for cmd in &frame.commands {
            paint_cmd(&painter, rect, cmd);
        }
        self.values = frame.values;
    }
}

impl eframe::App for TrivizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("parameters")
            .default_width(260.0)
            .show(ctx, |ui| self.show_panel(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.show_canvas(ui));

        // Continuous animation: recompute and redraw every frame.
        ctx.request_repaint();
    }
}

fn color_row(ui: &mut egui::Ui, label: &str, rgba: &mut Rgba) {
    let mut c = color32(*rgba);
    ui.horizontal(|ui| {
        if ui.color_edit_button_srgba(&mut c).changed() {
            let [r, g, b, a] = c.to_srgba_unmultiplied();
            *rgba = Rgba::new(r, g, b, a);
        }
        ui.label(label);
    });
}

fn paint_cmd(painter: &egui::Painter, rect: egui::Rect, cmd: &DrawCmd) {
    match cmd {
        DrawCmd::Clear { color } => {
            painter.rect_filled(rect, egui::CornerRadius::ZERO, color32(*color));
        }
        DrawCmd::Line { a, b, width, color } => {
            painter.line_segment(
                [at(rect, *a), at(rect, *b)],
                egui::Stroke::new(*width, color32(*color)),
            );
        }
        DrawCmd::Polygon {
            points,
            fill,
            stroke,
        } => {
            let pts: Vec<egui::Pos2> = points.iter().map(|p| at(rect, *p)).collect();
            painter.add(egui::Shape::convex_polygon(
                pts,
                color32(*fill),
                egui::Stroke::new(stroke.width, color32(stroke.color)),
            ));
        }
        DrawCmd::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            painter.circle(
                at(rect, *center),
                *radius as f32,
                color32(*fill),
                egui::Stroke::new(stroke.width, color32(stroke.color)),
            );
        }
        DrawCmd::Text {
            at: pos,
            text,
            size,
            color,
        } => {
            painter.text(
                at(rect, *pos),
                egui::Align2::LEFT_BOTTOM,
                text,
                egui::FontId::proportional(*size),
                color32(*color),
            );
        }
    }
}

fn at(rect: egui::Rect, p: Vec2) -> egui::Pos2 {
    rect.min + egui::vec2(p.x as f32, p.y as f32)
}

fn color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}
