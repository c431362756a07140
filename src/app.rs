use eframe::{App, Frame, egui};
use egui::{Color32, RichText};
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::charset::CharacterClass;
use crate::form::{FormAction, FormState, Screen, generation_error_message, reduce};
use crate::settings::AppSettings;

/// The main eframe app struct
pub struct PassFormApp {
    pub form: FormState,
    pub settings: AppSettings,

    pub clipboard_copy_time: Option<Instant>,
}

impl Default for PassFormApp {
    fn default() -> Self {
        Self::new(AppSettings::default())
    }
}

impl PassFormApp {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            form: FormState::new(settings.length_validator()),
            settings,
            clipboard_copy_time: None,
        }
    }

    /// Runs an action through the reducer and keeps the result.
    pub fn dispatch(&mut self, action: FormAction) {
        debug!(?action, "form action");
        let mut rng = rand::rng();
        let next = reduce(&self.form, action, || rand::Rng::random::<f64>(&mut rng));
        if next.screen() == Screen::PasswordDisplayed && self.form.password() != next.password() {
            info!(length = next.password().map_or(0, str::len), "password generated");
        }
        self.form = next;
    }

    fn submit(&mut self) {
        if self.form.can_generate() {
            self.dispatch(FormAction::Submit);
        }
    }

    /// Copy text to clipboard with auto-clear timer
    fn copy_to_clipboard(&mut self, ctx: &egui::Context, now: Instant) {
        if let Some(text) = self.form.copy_text() {
            // egui takes ownership of the clipboard text
            ctx.copy_text(text.to_owned());
            self.clipboard_copy_time = Some(now);
            debug!("password copied to clipboard");
        }
    }

    /// Seconds until the copied password is cleared, `None` when no copy is pending.
    pub fn clipboard_remaining(&self, now: Instant) -> Option<u64> {
        self.clipboard_copy_time.map(|copy_time| {
            self.settings
                .clipboard_timeout_u64()
                .saturating_sub(now.saturating_duration_since(copy_time).as_secs())
        })
    }

    pub fn clipboard_expired(&self, now: Instant) -> bool {
        self.clipboard_remaining(now) == Some(0)
    }

    /// Clears the clipboard once the timeout has passed. Returns true if it did.
    fn clear_clipboard_if_expired(&mut self, ctx: &egui::Context, now: Instant) -> bool {
        if !self.clipboard_expired(now) {
            return false;
        }
        ctx.copy_text(String::new());
        self.clipboard_copy_time = None;
        debug!("clipboard cleared");
        true
    }

    fn show_password(&mut self, ui: &mut egui::Ui) {
        let (Some(password), Some(bits)) = (self.form.password(), self.form.password_entropy())
        else {
            return;
        };

        let copy_enabled = self.form.copy_text().is_some();
        let copy_clicked = ui
            .horizontal(|ui| {
                ui.label(RichText::new(password).monospace().size(20.0));
                ui.add_enabled(copy_enabled, egui::Button::new("Copy")).clicked()
            })
            .inner;
        if copy_clicked {
            self.copy_to_clipboard(ui.ctx(), Instant::now());
        }

        let strength_label = if bits < 60.0 {
            ("Weak", Color32::RED)
        } else if bits <= 100.0 {
            ("Okay", Color32::YELLOW)
        } else {
            ("Strong", Color32::GREEN)
        };
        ui.colored_label(
            strength_label.1,
            format!("Entropy: ~{:.1} bits ({})", bits, strength_label.0),
        );
    }

    fn show_options(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Password Options").size(16.0));

        let selection = self.form.selection();
        for class in CharacterClass::ALL {
            let mut enabled = selection.is_enabled(class);
            if ui.checkbox(&mut enabled, class.label()).changed() {
                self.dispatch(FormAction::SetClass(class, enabled));
            }
        }

        if let Some(err) = self.form.generation_error() {
            ui.colored_label(Color32::RED, format!("* {}", generation_error_message(err)));
        }

        let mut raw = self.form.length_input().to_owned();
        let input = ui.add(egui::TextEdit::singleline(&mut raw).hint_text("Ex. 8"));
        if input.changed() {
            self.dispatch(FormAction::SetLength(raw));
        }
        if input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.submit();
        }

        if let Some(err) = self.form.length_error() {
            ui.colored_label(Color32::RED, format!("* {}", err));
        }

        ui.horizontal(|ui| {
            let generate = ui.add_enabled(self.form.can_generate(), egui::Button::new("Generate"));
            if generate.clicked() {
                self.submit();
            }
            if ui.button("Reset").clicked() {
                self.dispatch(FormAction::Reset);
            }
        });
    }
}

impl App for PassFormApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // Check clipboard auto-clear (using settings)
        let now = Instant::now();
        if !self.clear_clipboard_if_expired(ctx, now) && self.clipboard_copy_time.is_some() {
            ctx.request_repaint_after(Duration::from_secs(1));
        }

        // Ctrl+G: Generate password
        if ctx.input(|i| i.modifiers.ctrl && i.key_pressed(egui::Key::G)) {
            self.submit();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.heading(RichText::new("Password Generator").size(20.0).strong());
                    ui.label(
                        RichText::new("Generate a random password with just a click.")
                            .color(Color32::GRAY),
                    );

                    if let Some(remaining) = self.clipboard_remaining(now) {
                        ui.colored_label(
                            Color32::YELLOW,
                            format!("Password copied - clipboard clears in {}s", remaining),
                        );
                    }

                    if self.form.screen() == Screen::PasswordDisplayed {
                        self.show_password(ui);
                    }

                    ui.separator();
                    self.show_options(ui);
                });
        });
    }
}
