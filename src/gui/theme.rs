use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

/// Dracula-derived palette with a dark and a light variant. Accessors
/// pick the variant matching the visuals currently active on the
/// context, so widgets stay readable after a theme switch.
#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl Theme {
    pub fn dracula() -> Self {
        Theme { dark: Palette::dracula(), light: Palette::dracula_light() }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).purple).strong()
    }

    pub fn muted(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).comment)
    }

    pub fn red(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).red
    }

    pub fn orange(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).orange
    }

    pub fn green(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).green
    }

    pub fn purple(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).purple
    }

    pub fn cyan(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).cyan
    }

    pub fn surface(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).background_light
    }
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    foreground: Color32,
    selection: Color32,
    comment: Color32,
    red: Color32,
    orange: Color32,
    green: Color32,
    purple: Color32,
    cyan: Color32,
    background_darker: Color32,
    background_dark: Color32,
    background_light: Color32,
    background_lighter: Color32,
}

impl Palette {
    fn dracula() -> Self {
        Self {
            background: Color32::from_rgb(0x28, 0x2a, 0x36),
            foreground: Color32::from_rgb(0xf8, 0xf8, 0xf2),
            selection: Color32::from_rgb(0x44, 0x47, 0x5a),
            comment: Color32::from_rgb(0x62, 0x72, 0xa4),
            red: Color32::from_rgb(0xff, 0x55, 0x55),
            orange: Color32::from_rgb(0xff, 0xb8, 0x6c),
            green: Color32::from_rgb(0x50, 0xfa, 0x7b),
            purple: Color32::from_rgb(189, 147, 249),
            cyan: Color32::from_rgb(139, 233, 253),
            background_darker: Color32::from_rgb(25, 26, 33),
            background_dark: Color32::from_rgb(33, 35, 53),
            background_light: Color32::from_rgb(52, 54, 66),
            background_lighter: Color32::from_rgb(66, 69, 80),
        }
    }

    fn dracula_light() -> Self {
        Self {
            background: Color32::from_rgb(248, 248, 242),
            foreground: Color32::from_rgb(40, 42, 54),
            selection: Color32::from_rgb(200, 200, 220),
            comment: Color32::from_rgb(120, 130, 160),
            red: Color32::from_rgb(200, 80, 80),
            orange: Color32::from_rgb(220, 150, 90),
            green: Color32::from_rgb(60, 160, 100),
            purple: Color32::from_rgb(150, 120, 220),
            cyan: Color32::from_rgb(60, 150, 200),
            background_darker: Color32::from_rgb(235, 235, 230),
            background_dark: Color32::from_rgb(245, 245, 240),
            background_light: Color32::from_rgb(255, 255, 250),
            background_lighter: Color32::from_rgb(255, 255, 255),
        }
    }
}

/// Installs both palette variants on the context. The active variant
/// follows the context's theme preference.
pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

/// Linear blend between two colors, `t` in 0..1.
pub fn blend_colors(color_a: Color32, color_b: Color32, t: f32) -> Color32 {
    let blend_channel = |a: u8, b: u8| ((1.0 - t) * (a as f32) + t * (b as f32)).round() as u8;
    Color32::from_rgba_unmultiplied(
        blend_channel(color_a.r(), color_b.r()),
        blend_channel(color_a.g(), color_b.g()),
        blend_channel(color_a.b(), color_b.b()),
        blend_channel(color_a.a(), color_b.a()),
    )
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: palette.background,
                    weak_bg_fill: palette.background_lighter,
                    bg_stroke: Stroke {
                        color: palette.background_dark,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: palette.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: palette.background_light,
                    weak_bg_fill: palette.background_lighter,
                    bg_stroke: Stroke {
                        color: palette.background_dark,
                        ..default.widgets.inactive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: palette.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: palette.selection,
                    weak_bg_fill: palette.background_lighter,
                    bg_stroke: Stroke { color: palette.cyan, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke {
                        color: palette.foreground,
                        ..default.widgets.hovered.fg_stroke
                    },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: palette.selection,
                    weak_bg_fill: palette.background_light,
                    bg_stroke: Stroke { color: palette.cyan, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke {
                        color: palette.foreground,
                        ..default.widgets.active.fg_stroke
                    },
                    ..default.widgets.active
                },
                open: WidgetVisuals {
                    bg_fill: palette.background_dark,
                    weak_bg_fill: palette.background_lighter,
                    bg_stroke: Stroke { color: palette.purple, ..default.widgets.open.bg_stroke },
                    fg_stroke: Stroke {
                        color: palette.foreground,
                        ..default.widgets.open.fg_stroke
                    },
                    ..default.widgets.open
                },
            },
            selection: Selection {
                bg_fill: palette.selection,
                stroke: Stroke { color: palette.foreground, ..default.selection.stroke },
            },
            hyperlink_color: palette.cyan,
            faint_bg_color: match is_dark {
                true => palette.background_darker,
                false => palette.background_light,
            },
            extreme_bg_color: palette.background_darker,
            code_bg_color: palette.background_dark,
            error_fg_color: palette.red,
            warn_fg_color: palette.orange,
            window_shadow: Shadow { color: palette.background_darker, ..default.window_shadow },
            window_fill: palette.background,
            window_stroke: Stroke { color: palette.background_light, ..default.window_stroke },
            panel_fill: palette.background_dark,
            popup_shadow: Shadow { color: palette.background_dark, ..default.popup_shadow },
            collapsing_header_frame: true,
            ..default
        },
    );

    ctx.all_styles_mut(|style| {
        style.interaction.tooltip_delay = 0.0;
        style.interaction.show_tooltips_only_when_still = false;
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints_return_inputs() {
        let a = Color32::from_rgb(10, 20, 30);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(blend_colors(a, b, 0.0), a);
        assert_eq!(blend_colors(a, b, 1.0), b);
    }

    #[test]
    fn blend_midpoint_averages_channels() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(100, 200, 50);
        let mid = blend_colors(a, b, 0.5);
        assert_eq!((mid.r(), mid.g(), mid.b()), (50, 100, 25));
    }
}
