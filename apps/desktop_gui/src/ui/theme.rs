use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(201, 169, 110);
pub const MUTED_TEXT: egui::Color32 = egui::Color32::from_rgb(150, 150, 150);
pub const SUCCESS_TEXT: egui::Color32 = egui::Color32::from_rgb(120, 190, 130);
pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(225, 110, 100);
pub const FRAME_FILL: egui::Color32 = egui::Color32::from_rgb(32, 30, 28);

pub fn apply_prelaunch_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = egui::Color32::from_rgb(18, 17, 16);
    visuals.selection.bg_fill = ACCENT.gamma_multiply(0.6);
    visuals.widgets.hovered.bg_fill = ACCENT.gamma_multiply(0.85);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, ACCENT);
    visuals.hyperlink_color = ACCENT;
    ctx.set_visuals(visuals);
}
