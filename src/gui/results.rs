use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    analysis::{
        PolarityLabel,
        SubjectivityLabel,
    },
    core::AnalysisOutcome,
    gui::theme::{
        blend_colors,
        Theme,
    },
};

/// How many of the most frequent words the chart shows.
const TOP_WORDS: usize = 10;
/// How many sentence pairs the breakdown lists.
const SENTENCE_DISPLAY_LIMIT: usize = 8;

const WORD_LABEL_WIDTH: f32 = 110.0;
const BAR_HEIGHT: f32 = 16.0;

/// Central panel: overall mood gauges, word chart, full translation and
/// the per-sentence breakdown.
pub struct ResultsView;

impl ResultsView {
    pub fn show(ctx: &egui::Context, theme: &Theme, outcome: Option<&AnalysisOutcome>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(outcome) = outcome else {
                ui.add_space(12.0);
                ui.vertical_centered(|ui| {
                    ui.label(theme.heading(ui.ctx(), "VerseMood"));
                    ui.add_space(4.0);
                    ui.label(theme.muted(
                        ui.ctx(),
                        "Enter some text or upload a file, then hit Analyze.",
                    ));
                });
                ui.add_space(12.0);
                Self::show_about(ui);
                return;
            };

            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some(warning) = &outcome.translation_warning {
                    Self::warning_banner(ui, theme, warning);
                    ui.add_space(8.0);
                }

                Self::show_mood_section(ui, theme, outcome);
                ui.add_space(12.0);
                Self::show_word_chart(ui, theme, &outcome.result.word_frequencies);
                ui.add_space(12.0);
                Self::show_full_translation(ui, theme, outcome);
                ui.add_space(12.0);
                Self::show_sentences(ui, theme, outcome);
                ui.add_space(12.0);
                Self::show_about(ui);
                ui.add_space(12.0);
            });
        });
    }

    fn show_about(ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("About the analysis").show(ui, |ui| {
            ui.label(
                "Sentiment runs from -1 (very negative) to +1 (very positive); \
                 scores between -0.05 and +0.05 count as neutral.",
            );
            ui.label(
                "Subjectivity runs from 0 (factual) to 1 (personal opinion); \
                 above 0.5 the text reads as a personal voice.",
            );
            ui.label(
                "Word frequencies count the translated text after dropping \
                 common function words and tokens shorter than three letters.",
            );
        });
    }

    fn warning_banner(ui: &mut egui::Ui, theme: &Theme, warning: &str) {
        let orange = theme.orange(ui.ctx());
        egui::Frame::new()
            .fill(theme.surface(ui.ctx()))
            .stroke(egui::Stroke::new(1.0, orange))
            .corner_radius(6.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.colored_label(orange, warning);
            });
    }

    fn show_mood_section(ui: &mut egui::Ui, theme: &Theme, outcome: &AnalysisOutcome) {
        ui.label(theme.heading(ui.ctx(), "Overall mood"));
        ui.add_space(6.0);

        let polarity = outcome.result.overall_polarity;
        let subjectivity = outcome.result.overall_subjectivity;
        let polarity_label = PolarityLabel::from_score(polarity);
        let subjectivity_label = SubjectivityLabel::from_score(subjectivity);

        ui.columns(2, |columns| {
            let ui = &mut columns[0];
            let color = Self::polarity_color(ui.ctx(), theme, polarity_label);
            ui.label("Sentiment");
            ui.add(
                egui::ProgressBar::new((polarity + 1.0) / 2.0)
                    .fill(color)
                    .text(format!("{:+.2}", polarity)),
            );
            ui.add_space(4.0);
            Self::callout(
                ui,
                theme,
                color,
                &format!("{} {}", polarity_label.emoji(), polarity_label.text()),
                Self::polarity_blurb(polarity_label),
            );

            let ui = &mut columns[1];
            let color = theme.cyan(ui.ctx());
            ui.label("Subjectivity");
            ui.add(
                egui::ProgressBar::new(subjectivity)
                    .fill(color)
                    .text(format!("{:.2}", subjectivity)),
            );
            ui.add_space(4.0);
            Self::callout(
                ui,
                theme,
                color,
                subjectivity_label.text(),
                Self::subjectivity_blurb(subjectivity_label),
            );
        });
    }

    fn polarity_color(ctx: &egui::Context, theme: &Theme, label: PolarityLabel) -> egui::Color32 {
        match label {
            PolarityLabel::Positive => theme.green(ctx),
            PolarityLabel::Neutral => theme.cyan(ctx),
            PolarityLabel::Negative => theme.red(ctx),
        }
    }

    fn polarity_blurb(label: PolarityLabel) -> &'static str {
        match label {
            PolarityLabel::Positive => "This text radiates positive feelings.",
            PolarityLabel::Neutral => "This text reads as emotionally balanced.",
            PolarityLabel::Negative => "This text carries negative feelings.",
        }
    }

    fn subjectivity_blurb(label: SubjectivityLabel) -> &'static str {
        match label {
            SubjectivityLabel::Subjective => "Reads like a personal, opinionated voice.",
            SubjectivityLabel::Objective => "Reads factual and detached.",
        }
    }

    fn callout(ui: &mut egui::Ui, theme: &Theme, color: egui::Color32, title: &str, body: &str) {
        egui::Frame::new()
            .fill(theme.surface(ui.ctx()))
            .stroke(egui::Stroke::new(1.0, color))
            .corner_radius(6.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.colored_label(color, egui::RichText::new(title).strong());
                ui.label(body);
            });
    }

    fn show_word_chart(ui: &mut egui::Ui, theme: &Theme, word_frequencies: &[(String, u32)]) {
        ui.label(theme.heading(ui.ctx(), "Most frequent words"));
        ui.add_space(6.0);

        if word_frequencies.is_empty() {
            ui.label(theme.muted(ui.ctx(), "No words left after filtering."));
            return;
        }

        // Frequencies arrive sorted descending, so the first entry sets
        // the scale.
        let max_count = word_frequencies[0].1.max(1) as f32;
        let row_count = word_frequencies.len().min(TOP_WORDS);

        let cyan = theme.cyan(ui.ctx());
        let purple = theme.purple(ui.ctx());

        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::exact(WORD_LABEL_WIDTH))
            .column(Column::remainder())
            .column(Column::exact(48.0))
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Word");
                });
                header.col(|_ui| {});
                header.col(|ui| {
                    ui.strong("Count");
                });
            })
            .body(|mut body| {
                for (i, (word, count)) in
                    word_frequencies.iter().take(TOP_WORDS).enumerate()
                {
                    body.row(BAR_HEIGHT + 4.0, |mut row| {
                        row.col(|ui| {
                            ui.add(egui::Label::new(word).truncate());
                        });
                        row.col(|ui| {
                            let fraction = *count as f32 / max_count;
                            let bar_width = (ui.available_width() * fraction).max(4.0);
                            let (rect, _) = ui.allocate_exact_size(
                                egui::vec2(bar_width, BAR_HEIGHT),
                                egui::Sense::hover(),
                            );

                            let t = i as f32 / (row_count.saturating_sub(1)).max(1) as f32;
                            ui.painter().rect_filled(rect, 3.0, blend_colors(cyan, purple, t));
                        });
                        row.col(|ui| {
                            ui.label(count.to_string());
                        });
                    });
                }
            });
    }

    fn show_full_translation(ui: &mut egui::Ui, theme: &Theme, outcome: &AnalysisOutcome) {
        egui::CollapsingHeader::new("Full translation").show(ui, |ui| {
            ui.columns(2, |columns| {
                let ui = &mut columns[0];
                ui.label(theme.muted(ui.ctx(), "Original"));
                ui.label(&outcome.result.original_text);

                let ui = &mut columns[1];
                ui.label(theme.muted(ui.ctx(), "English"));
                ui.label(&outcome.result.translated_text);
            });
        });
    }

    fn show_sentences(ui: &mut egui::Ui, theme: &Theme, outcome: &AnalysisOutcome) {
        let pairs = &outcome.result.sentence_pairs;

        ui.label(theme.heading(ui.ctx(), "Sentence by sentence"));
        ui.add_space(6.0);

        if pairs.is_empty() {
            ui.label(theme.muted(ui.ctx(), "No sentences found."));
            return;
        }

        for pair in pairs.iter().take(SENTENCE_DISPLAY_LIMIT) {
            let label = PolarityLabel::from_score(pair.polarity);
            let color = Self::polarity_color(ui.ctx(), theme, label);

            egui::Frame::new()
                .fill(theme.surface(ui.ctx()))
                .corner_radius(6.0)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(label.emoji());
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(&pair.translated).strong());
                            if pair.translated != pair.original {
                                ui.label(theme.muted(ui.ctx(), &pair.original));
                            }
                        });
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.colored_label(color, format!("{:+.2}", pair.polarity));
                            },
                        );
                    });
                });
            ui.add_space(4.0);
        }

        if pairs.len() > SENTENCE_DISPLAY_LIMIT {
            ui.label(theme.muted(
                ui.ctx(),
                &format!(
                    "Showing the first {} of {} sentences.",
                    SENTENCE_DISPLAY_LIMIT,
                    pairs.len()
                ),
            ));
        }
    }
}
