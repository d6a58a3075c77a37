//! Main window
//!
//! Text area in the middle, voice list on the right, buttons at the bottom.
//! Widgets only record which event happened; the event is dispatched to
//! its handler after the frame is laid out.

use crate::actions::{self, UiEvent};
use crate::state::AppContext;
use crate::{Result, StasyanError};
use eframe::egui;
use log::info;

/// Window title
pub const WINDOW_TITLE: &str = "Stasyan";

/// eframe application wrapping the handler context
pub struct StasyanApp {
    ctx: AppContext,
}

impl StasyanApp {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    fn voice_list(&self, ui: &mut egui::Ui) -> Option<UiEvent> {
        let mut event = None;
        let active = self.ctx.active_voice.as_ref().map(|v| v.name.as_str());

        ui.heading("Voices");
        egui::ScrollArea::vertical().show(ui, |ui| {
            for voice in self.ctx.catalog.iter() {
                let label = ui.selectable_label(active == Some(voice.name.as_str()), &voice.name);
                if label.clicked() {
                    event = Some(UiEvent::VoiceClicked(voice.name.clone()));
                }
            }
        });

        event
    }

    fn buttons(ui: &mut egui::Ui) -> Option<UiEvent> {
        let mut event = None;
        ui.horizontal(|ui| {
            if ui.button("Listen").clicked() {
                event = Some(UiEvent::Listen);
            }
            if ui.button("Save").clicked() {
                event = Some(UiEvent::Save);
            }
            if ui.button("Load Text").clicked() {
                event = Some(UiEvent::LoadText);
            }
        });
        event
    }
}

impl eframe::App for StasyanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut event = None;

        egui::SidePanel::right("voices")
            .resizable(true)
            .default_width(200.0)
            .show(ctx, |ui| {
                event = self.voice_list(ui);
            });

        egui::TopBottomPanel::bottom("actions").show(ctx, |ui| {
            ui.add_space(4.0);
            if let Some(clicked) = Self::buttons(ui) {
                event = Some(clicked);
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_sized(
                    ui.available_size(),
                    egui::TextEdit::multiline(self.ctx.text.as_mut_string())
                        .hint_text("Type or load text to read"),
                );
            });
        });

        if let Some(event) = event {
            actions::dispatch(&mut self.ctx, event);
        }
    }
}

/// Open the window and run until it is closed
pub fn run(ctx: AppContext) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    info!("Opening main window");
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(StasyanApp::new(ctx)))),
    )
    .map_err(|e| StasyanError::Other(format!("Window failed: {}", e)))
}
