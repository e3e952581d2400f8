use std::sync::Arc;

use eframe::egui;

use super::{
    error_modal::ErrorModal,
    input_panel::{
        InputEvent,
        InputPanel,
        LoadedFile,
    },
    message_overlay::MessageOverlay,
    results::ResultsView,
    settings::{
        InputMode,
        SettingsData,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    analysis::SentimentAnalyzer,
    core::{
        pipeline::AnalysisTools,
        tasks::{
            TaskManager,
            TaskResult,
        },
        AnalysisOutcome,
        VersemoodError,
    },
    translation::GoogleTranslator,
};

pub struct VersemoodApp {
    // Input state
    input_text: String,
    loaded_file: Option<LoadedFile>,
    input_warning: Option<String>,

    // Results
    outcome: Option<AnalysisOutcome>,
    analysis_running: bool,

    // Configuration
    settings_data: SettingsData,

    // UI State
    theme: Theme,
    message_overlay: MessageOverlay,
    error_modal: ErrorModal,

    task_manager: TaskManager,
    tools: AnalysisTools,
}

impl VersemoodApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, VersemoodError> {
        let settings_data = SettingsData::load();
        let theme = Theme::dracula();

        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = if settings_data.dark_mode {
                egui::ThemePreference::Dark
            } else {
                egui::ThemePreference::Light
            };
        });

        let tools = AnalysisTools {
            translator: Arc::new(GoogleTranslator::new()?),
            sentiment: Arc::new(SentimentAnalyzer::new()),
        };

        Ok(Self {
            input_text: String::new(),
            loaded_file: None,
            input_warning: None,
            outcome: None,
            analysis_running: false,
            settings_data,
            theme,
            message_overlay: MessageOverlay::new(),
            error_modal: ErrorModal::new(),
            task_manager: TaskManager::new(),
            tools,
        })
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::LoadingMessage(message) => {
                self.message_overlay.set_message(message);
            }
            TaskResult::Analysis(Ok(outcome)) => {
                self.outcome = Some(outcome);
                self.analysis_running = false;
                self.message_overlay.clear_message();
            }
            TaskResult::Analysis(Err(e)) => {
                self.analysis_running = false;
                self.message_overlay.clear_message();
                self.error_modal.show_error(
                    "Analysis Failed",
                    "Something went wrong while analyzing the text.",
                    Some(e),
                );
            }
        }
    }

    fn request_analysis(&mut self) {
        let text = match self.settings_data.input_mode {
            InputMode::Direct => self.input_text.clone(),
            InputMode::File => match &self.loaded_file {
                Some(file) => file.content.clone(),
                None => {
                    self.input_warning = Some("Please choose a file first.".to_string());
                    return;
                }
            },
        };

        if text.trim().is_empty() {
            self.input_warning = Some("Please enter some text to analyze.".to_string());
            return;
        }

        self.input_warning = None;
        self.analysis_running = true;
        self.task_manager.run_analysis(text, self.tools.clone());
    }

    /// The theme switch in the top bar flips the context's visuals
    /// directly, so the persisted preference follows it.
    fn sync_dark_mode(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.style().visuals.dark_mode;
        if dark_mode != self.settings_data.dark_mode {
            self.settings_data.dark_mode = dark_mode;
            self.settings_data.save();
        }
    }
}

impl eframe::App for VersemoodApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        TopBar::show(ctx);
        self.sync_dark_mode(ctx);

        let input_mode_before = self.settings_data.input_mode;
        let event = InputPanel::show(
            ctx,
            &self.theme,
            &mut self.settings_data.input_mode,
            &mut self.input_text,
            &mut self.loaded_file,
            &self.input_warning,
            self.analysis_running,
        );

        if self.settings_data.input_mode != input_mode_before {
            self.input_warning = None;
            self.settings_data.save();
        }

        match event {
            Some(InputEvent::AnalyzeRequested) => self.request_analysis(),
            Some(InputEvent::FileLoadFailed(e)) => {
                self.loaded_file = None;
                self.error_modal.show_error(
                    "Could Not Load File",
                    "The file could not be read as text.",
                    Some(e.to_string()),
                );
            }
            None => {}
        }

        ResultsView::show(ctx, &self.theme, self.outcome.as_ref());

        self.message_overlay.show(ctx, &self.theme);
        self.error_modal.show(ctx, &self.theme);
    }
}
