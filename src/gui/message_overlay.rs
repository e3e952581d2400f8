use eframe::egui;

use crate::gui::theme::Theme;

/// Dims the whole window and shows a spinner while an analysis runs.
/// Starts inactive; the app raises it when it spawns a task.
pub struct MessageOverlay {
    pub active: bool,
    pub message: Option<String>,
}

impl MessageOverlay {
    pub fn new() -> Self {
        Self { active: false, message: None }
    }

    pub fn set_message(&mut self, message: String) {
        self.message = Some(message);
        self.active = true;
    }

    pub fn clear_message(&mut self) {
        self.message = None;
        self.active = false;
    }

    pub fn show(&self, ctx: &egui::Context, theme: &Theme) {
        if !self.active {
            return;
        }

        // Dim everything behind the message box
        egui::Area::new(egui::Id::new("busy_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::Pos2::new(0.0, 0.0))
            .show(ctx, |ui| {
                let screen_size = ui.ctx().screen_rect().size();
                ui.allocate_space(screen_size);
                ui.painter().rect_filled(
                    ui.ctx().screen_rect(),
                    0.0,
                    egui::Color32::from_black_alpha(120),
                );
            });

        let message = match &self.message {
            None => "Working...".to_string(),
            Some(value) => value.to_string(),
        };

        egui::Window::new("busy_message_box")
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .fixed_size(egui::Vec2::new(220.0, 100.0))
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::new(0.0, 0.0))
            .show(ctx, |ui| {
                ui.style_mut().visuals.window_stroke =
                    egui::Stroke::new(2.0, theme.purple(ui.ctx()));

                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.add(egui::Spinner::new().size(28.0));
                    ui.add_space(6.0);
                    ui.label(message);
                    ui.add_space(8.0);
                });
            });

        // Keep the spinner turning while the task runs
        ctx.request_repaint();
    }
}

impl Default for MessageOverlay {
    fn default() -> Self {
        Self::new()
    }
}
