// Reusable UI components
// Provides common UI elements for the application

use eframe::egui;

use crate::state::{AccentColor, Icon, Theme, Toast, ToastLevel};

/// Brand color used for icon tiles, primary buttons and avatars
pub const PRIMARY: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);

/// Glyph drawn for an icon reference
pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Dashboard => "🏠",
        Icon::Users => "👥",
        Icon::File => "📄",
        Icon::Chart => "📊",
        Icon::Calendar => "📅",
        Icon::Message => "💬",
        Icon::Cart => "🛒",
        Icon::Settings => "⚙",
    }
}

/// Tint of an app card's color theme
pub fn accent_color(color: AccentColor) -> egui::Color32 {
    match color {
        AccentColor::Blue => egui::Color32::from_rgb(59, 130, 246),
        AccentColor::Purple => egui::Color32::from_rgb(168, 85, 247),
        AccentColor::Amber => egui::Color32::from_rgb(245, 158, 11),
        AccentColor::Emerald => egui::Color32::from_rgb(16, 185, 129),
        AccentColor::Rose => egui::Color32::from_rgb(244, 63, 94),
        AccentColor::Cyan => egui::Color32::from_rgb(6, 182, 212),
        AccentColor::Indigo => egui::Color32::from_rgb(99, 102, 241),
        AccentColor::Slate => egui::Color32::from_rgb(100, 116, 139),
    }
}

/// Rounded square with a centered glyph
/// `tint` colors the glyph; the background is a faded version of it
pub fn icon_tile(ui: &mut egui::Ui, glyph: &str, tint: egui::Color32, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, egui::Rounding::same(size * 0.25), tint.gamma_multiply(0.2));
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            glyph,
            egui::FontId::proportional(size * 0.5),
            tint,
        );
    }
    response
}

/// Round avatar showing the user's initials
pub fn avatar(ui: &mut egui::Ui, initials: &str, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.circle_filled(rect.center(), size / 2.0, PRIMARY);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            initials,
            egui::FontId::proportional(size * 0.38),
            egui::Color32::WHITE,
        );
    }
    response
}

/// Moon/sun button; shows the theme a click switches to
pub fn theme_toggle(ui: &mut egui::Ui, theme: Theme) -> egui::Response {
    let (glyph, hint) = if theme.is_dark() {
        ("☀", "Modo claro")
    } else {
        ("🌙", "Modo oscuro")
    };
    ui.add(egui::Button::new(egui::RichText::new(glyph).size(18.0)).frame(false))
        .on_hover_text(hint)
}

/// Render a primary action button
pub fn primary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(text).strong().color(egui::Color32::WHITE))
            .fill(PRIMARY)
            .min_size(egui::vec2(0.0, 32.0)),
    )
}

/// Render a secondary button
pub fn secondary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add(egui::Button::new(text).min_size(egui::vec2(0.0, 32.0)))
}

/// Bordered card with padding
pub fn card<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    egui::Frame::group(ui.style())
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(16.0))
        .fill(ui.visuals().extreme_bg_color)
        .show(ui, add_contents)
}

/// Card title followed by a muted description
pub fn card_header(ui: &mut egui::Ui, title: &str, description: &str) {
    ui.label(egui::RichText::new(title).strong().size(16.0));
    ui.add_space(2.0);
    ui.label(egui::RichText::new(description).weak().size(13.0));
}

/// Labeled single-line text input
pub fn labeled_input(ui: &mut egui::Ui, label: &str, value: &mut String) -> egui::Response {
    ui.label(egui::RichText::new(label).strong());
    ui.add_space(2.0);
    ui.add(egui::TextEdit::singleline(value).desired_width(f32::INFINITY))
}

/// Stacked notices in the bottom-right corner
pub fn render_toasts(ctx: &egui::Context, toasts: &[Toast]) {
    if toasts.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("toasts"))
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
        .order(egui::Order::Foreground)
        .interactable(false)
        .show(ctx, |ui| {
            for toast in toasts {
                let (glyph, color) = match toast.level {
                    ToastLevel::Success => ("✔", egui::Color32::from_rgb(0, 170, 80)),
                    ToastLevel::Error => ("✖", egui::Color32::from_rgb(220, 0, 0)),
                };
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_min_width(240.0);
                    ui.horizontal(|ui| {
                        ui.colored_label(color, glyph);
                        ui.label(&toast.message);
                    });
                });
                ui.add_space(6.0);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_a_glyph() {
        let icons = [
            Icon::Dashboard,
            Icon::Users,
            Icon::File,
            Icon::Chart,
            Icon::Calendar,
            Icon::Message,
            Icon::Cart,
            Icon::Settings,
        ];
        for icon in icons {
            assert!(!icon_glyph(icon).is_empty());
        }
    }

    #[test]
    fn test_accent_colors_are_distinct() {
        let colors = [
            AccentColor::Blue,
            AccentColor::Purple,
            AccentColor::Amber,
            AccentColor::Emerald,
            AccentColor::Rose,
            AccentColor::Cyan,
            AccentColor::Indigo,
            AccentColor::Slate,
        ]
        .map(accent_color);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
