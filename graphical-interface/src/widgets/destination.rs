use api_client::models::Review;
use chrono::DateTime;
use egui::{Color32, RichText};

use crate::destination::{DestinationPhase, DestinationState};

/// What the destination page asked the application to do this frame.
#[derive(Debug, Clone, PartialEq)]
pub enum DestinationAction {
    None,
    Back,
    Submit,
}

/// Full-page destination view: summary, external links, reviews and the
/// review form. All state lives in `DestinationState`; the widget only
/// renders it and reports actions back.
pub struct WidgetDestination;

impl WidgetDestination {
    pub fn ui(ui: &mut egui::Ui, state: &mut DestinationState) -> DestinationAction {
        let mut action = DestinationAction::None;

        if ui.button("← Back").clicked() {
            action = DestinationAction::Back;
        }
        ui.add_space(10.0);

        match state.phase.clone() {
            DestinationPhase::Loading => {
                ui.vertical_centered(|ui| {
                    ui.add_space(80.0);
                    ui.add(egui::Spinner::new());
                    ui.label("Loading…");
                });
            }
            DestinationPhase::NotFound => {
                ui.vertical_centered(|ui| {
                    ui.add_space(80.0);
                    ui.colored_label(Color32::LIGHT_RED, "Not found");
                });
            }
            DestinationPhase::Failed(message) => {
                ui.vertical_centered(|ui| {
                    ui.add_space(80.0);
                    ui.colored_label(Color32::LIGHT_RED, message);
                });
            }
            DestinationPhase::Ready => {
                if Self::summary(ui, state) == DestinationAction::Submit {
                    action = DestinationAction::Submit;
                }
            }
        }

        action
    }

    fn summary(ui: &mut egui::Ui, state: &mut DestinationState) -> DestinationAction {
        let Some(summary) = state.summary.clone() else {
            return DestinationAction::None;
        };

        ui.heading(format!("{} ({})", summary.airport.city, summary.airport.iata));
        ui.label(format!("{}, {}", summary.airport.name, summary.airport.country));
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            if let Some(flight_url) = state.flight_url() {
                ui.hyperlink_to("Search flights", flight_url);
            }
            ui.hyperlink_to("Find accommodation", &summary.links.hotels);
            ui.hyperlink_to("Wikipedia", &summary.links.wikipedia);
        });

        ui.add_space(15.0);
        ui.separator();
        ui.label(RichText::new("Reviews").size(18.0).strong());
        ui.add_space(5.0);

        if state.reviews.is_empty() {
            ui.label("No reviews yet. Be the first to share your tips!");
        } else {
            Self::review_list(ui, &state.reviews);
        }

        Self::form(ui, state)
    }

    fn review_list(ui: &mut egui::Ui, reviews: &[Review]) {
        for review in reviews {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&review.name).strong());
                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            ui.colored_label(Color32::GOLD, stars(review.rating));
                        },
                    );
                });
                if let Some(comment) = &review.comment {
                    ui.label(comment);
                }
                if let Some(created_at) = &review.created_at {
                    ui.label(RichText::new(format_timestamp(created_at)).size(11.0).weak());
                }
            });
        }
    }

    fn form(ui: &mut egui::Ui, state: &mut DestinationState) -> DestinationAction {
        let mut action = DestinationAction::None;

        ui.add_space(15.0);
        ui.separator();
        ui.label(RichText::new("Add your review").size(16.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut state.draft.name);
        });

        ui.horizontal(|ui| {
            ui.label("Rating:");
            egui::ComboBox::from_id_salt("rating_combo")
                .selected_text(state.draft.rating.to_string())
                .show_ui(ui, |ui| {
                    for rating in (1u8..=5).rev() {
                        ui.selectable_value(&mut state.draft.rating, rating, rating.to_string());
                    }
                });
        });

        ui.label("Comment:");
        ui.add(
            egui::TextEdit::multiline(&mut state.draft.comment)
                .desired_rows(4)
                .hint_text("Share tips about the airport, transportation, must-see places..."),
        );

        if let Some(error) = &state.post_error {
            ui.colored_label(Color32::RED, error);
        }

        ui.add_space(5.0);
        // The name is required; the rating is constrained by the combo box.
        let can_submit = !state.posting && !state.draft.name.trim().is_empty();
        let label = if state.posting {
            "Posting…"
        } else {
            "Publish review"
        };
        if ui
            .add_enabled(can_submit, egui::Button::new(label))
            .clicked()
        {
            action = DestinationAction::Submit;
        }

        action
    }
}

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|timestamp| timestamp.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_rendering_clamps_to_five() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(7), "★★★★★");
    }

    #[test]
    fn test_unparseable_timestamps_are_shown_raw() {
        assert_eq!(
            format_timestamp("2026-08-01T09:30:00Z"),
            "2026-08-01 09:30"
        );
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
