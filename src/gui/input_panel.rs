use eframe::egui;
use rfd::FileDialog;

use crate::{
    core::{
        input::{
            self,
            load_text_file,
        },
        VersemoodError,
    },
    gui::{
        settings::InputMode,
        theme::Theme,
    },
};

/// A file picked through the dialog, loaded eagerly so analysis and
/// preview work on the same content.
#[derive(Clone)]
pub struct LoadedFile {
    pub name: String,
    pub content: String,
}

pub enum InputEvent {
    AnalyzeRequested,
    FileLoadFailed(VersemoodError),
}

/// Left-hand panel: mode selection, text entry or file picking, and the
/// analyze button.
pub struct InputPanel;

impl InputPanel {
    pub fn show(
        ctx: &egui::Context,
        theme: &Theme,
        input_mode: &mut InputMode,
        input_text: &mut String,
        loaded_file: &mut Option<LoadedFile>,
        input_warning: &Option<String>,
        analysis_running: bool,
    ) -> Option<InputEvent> {
        let mut event = None;

        egui::SidePanel::left("input_panel").default_width(360.0).show(ctx, |ui| {
            ui.add_space(6.0);
            ui.label(theme.heading(ui.ctx(), "Input"));
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.selectable_value(input_mode, InputMode::Direct, "Write text");
                ui.selectable_value(input_mode, InputMode::File, "Upload file");
            });

            ui.separator();

            match input_mode {
                InputMode::Direct => {
                    Self::show_direct_input(ui, input_text, analysis_running, &mut event);
                }
                InputMode::File => {
                    Self::show_file_input(ui, theme, loaded_file, analysis_running, &mut event);
                }
            }

            if let Some(warning) = input_warning {
                ui.add_space(6.0);
                ui.colored_label(theme.orange(ui.ctx()), warning);
            }
        });

        event
    }

    fn show_direct_input(
        ui: &mut egui::Ui,
        input_text: &mut String,
        analysis_running: bool,
        event: &mut Option<InputEvent>,
    ) {
        ui.label("Paste lyrics or any text:");
        ui.add_space(4.0);
        ui.add(
            egui::TextEdit::multiline(input_text)
                .desired_width(f32::INFINITY)
                .desired_rows(14)
                .hint_text("We were both young when I first saw you..."),
        );

        ui.add_space(8.0);
        if ui.add_enabled(!analysis_running, egui::Button::new("Analyze text")).clicked() {
            *event = Some(InputEvent::AnalyzeRequested);
        }
    }

    fn show_file_input(
        ui: &mut egui::Ui,
        theme: &Theme,
        loaded_file: &mut Option<LoadedFile>,
        analysis_running: bool,
        event: &mut Option<InputEvent>,
    ) {
        ui.label("Upload a .txt, .csv or .md file:");
        ui.add_space(4.0);

        if ui.add_enabled(!analysis_running, egui::Button::new("Choose File...")).clicked() {
            let picked = FileDialog::new()
                .add_filter("Text Files", &["txt", "csv", "md"])
                .set_title("Choose a text file")
                .pick_file();

            if let Some(path) = picked {
                match load_text_file(&path) {
                    Ok(content) => {
                        let name = path
                            .file_name()
                            .map(|n| n.to_string_lossy().to_string())
                            .unwrap_or_else(|| path.display().to_string());
                        *loaded_file = Some(LoadedFile { name, content });
                    }
                    Err(e) => {
                        *event = Some(InputEvent::FileLoadFailed(e));
                    }
                }
            }
        }

        if let Some(file) = loaded_file {
            ui.add_space(6.0);
            ui.label(theme.muted(ui.ctx(), &format!("Loaded: {}", file.name)));

            ui.add_space(4.0);
            egui::CollapsingHeader::new("File preview").default_open(true).show(ui, |ui| {
                egui::ScrollArea::vertical().max_height(220.0).show(ui, |ui| {
                    ui.label(input::preview_snippet(&file.content));
                });
            });

            ui.add_space(8.0);
            if ui.add_enabled(!analysis_running, egui::Button::new("Analyze file")).clicked() {
                *event = Some(InputEvent::AnalyzeRequested);
            }
        }
    }
}
