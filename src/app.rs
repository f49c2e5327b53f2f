use std::path::PathBuf;

use log::{error, info, warn};

use crate::command::{Command, CommandOutcome};
use crate::config::PaintConfig;
use crate::engine::PaintEngine;
use crate::error::PaintResult;
use crate::input::InputHandler;
use crate::panels;
use crate::style::{format_hex_color, parse_hex_color};
use crate::texture::CanvasTexture;
use crate::tools::Tool;

/// User choices restored when restarting the app.
/// We derive Deserialize/Serialize so we can persist them on shutdown.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Settings {
    pub tool: Tool,
    /// `#RRGGBB`
    pub color: String,
    pub stroke_width: u32,
    pub export_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        let config = PaintConfig::default();
        Self {
            tool: config.default_tool,
            color: config.default_color,
            stroke_width: config.default_stroke_width,
            export_path: config.export_path,
        }
    }
}

/// Version line shown in the About window
pub const ABOUT_VERSION: &str = "Version 1.0";

pub struct PaintApp {
    config: PaintConfig,
    engine: PaintEngine,
    input: InputHandler,
    texture: CanvasTexture,
    export_path: PathBuf,
    /// Destructive command waiting for the user to confirm
    pending_confirmation: Option<Command>,
    /// Text of the Save As dialog while it is open
    pub(crate) save_as_path: Option<String>,
    notification: Option<String>,
    pub(crate) show_help: bool,
    pub(crate) show_about: bool,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: PaintConfig) -> PaintResult<Self> {
        let mut app = Self::with_config(config)?;

        if let Some(storage) = cc.storage {
            if let Some(settings) = eframe::get_value::<Settings>(storage, eframe::APP_KEY) {
                app.apply_settings(&settings);
            }
        }
        Ok(app)
    }

    pub fn with_config(config: PaintConfig) -> PaintResult<Self> {
        let engine = PaintEngine::from_config(&config)?;
        info!(
            "Created {}x{} canvas",
            engine.surface().width(),
            engine.surface().height()
        );

        Ok(Self {
            export_path: config.export_path.clone(),
            config,
            engine,
            input: InputHandler::new(),
            texture: CanvasTexture::new(),
            pending_confirmation: None,
            save_as_path: None,
            notification: None,
            show_help: false,
            show_about: false,
        })
    }

    pub fn settings(&self) -> Settings {
        let style = self.engine.style();
        Settings {
            tool: self.engine.active_tool().unwrap_or(self.config.default_tool),
            color: format_hex_color(style.color()),
            stroke_width: style.width(),
            export_path: self.export_path.clone(),
        }
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.engine.select_tool(settings.tool);
        match parse_hex_color(&settings.color) {
            Ok(color) => self.engine.set_color(color),
            Err(err) => warn!("Ignoring stored color: {err}"),
        }
        if let Err(err) = self.engine.set_width(settings.stroke_width) {
            warn!("Ignoring stored stroke width: {err}");
        }
        self.export_path = settings.export_path.clone();
    }

    pub fn config(&self) -> &PaintConfig {
        &self.config
    }

    pub fn engine(&self) -> &PaintEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut PaintEngine {
        &mut self.engine
    }

    pub(crate) fn canvas_parts(&mut self) -> (&mut PaintEngine, &mut InputHandler, &mut CanvasTexture) {
        (&mut self.engine, &mut self.input, &mut self.texture)
    }

    pub fn export_path(&self) -> &std::path::Path {
        &self.export_path
    }

    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    pub fn notify(&mut self, message: impl Into<String>) {
        self.notification = Some(message.into());
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn pending_confirmation(&self) -> Option<&Command> {
        self.pending_confirmation.as_ref()
    }

    /// Run a menu command, asking for confirmation first where needed
    pub fn request_command(&mut self, command: Command) {
        if command.needs_confirmation() {
            self.pending_confirmation = Some(command);
        } else {
            self.execute_command(command);
        }
    }

    pub fn confirm_pending(&mut self) {
        if let Some(command) = self.pending_confirmation.take() {
            self.execute_command(command);
        }
    }

    pub fn cancel_pending(&mut self) {
        self.pending_confirmation = None;
    }

    pub fn execute_command(&mut self, command: Command) {
        match command.execute(&mut self.engine, &self.export_path) {
            Ok(CommandOutcome::Saved(path)) => self.notify(format!("Saved to {}", path.display())),
            Ok(CommandOutcome::Cleared | CommandOutcome::Unchanged) => {}
            Err(err) => {
                error!("{command:?} failed: {err}");
                self.notify(err.to_string());
            }
        }
    }

    pub fn open_save_as(&mut self) {
        self.save_as_path = Some(self.export_path.display().to_string());
    }

    pub fn finish_save_as(&mut self) {
        if let Some(path) = self.save_as_path.take() {
            let path = PathBuf::from(path.trim());
            self.export_path = path.clone();
            self.execute_command(Command::SaveAs(path));
        }
    }

    fn dialogs(&mut self, ctx: &egui::Context) {
        if let Some(prompt) = self.pending_confirmation.as_ref().and_then(Command::confirmation_prompt) {
            let mut answer = None;
            egui::Window::new("Paint")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(prompt);
                    ui.horizontal(|ui| {
                        if ui.button("OK").clicked() {
                            answer = Some(true);
                        }
                        if ui.button("Cancel").clicked() {
                            answer = Some(false);
                        }
                    });
                });
            match answer {
                Some(true) => self.confirm_pending(),
                Some(false) => self.cancel_pending(),
                None => {}
            }
        }

        if let Some(path) = &mut self.save_as_path {
            let mut action = None;
            egui::Window::new("Save As")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.label("File name:");
                        ui.text_edit_singleline(path);
                    });
                    ui.horizontal(|ui| {
                        if ui.button("Save").clicked() {
                            action = Some(true);
                        }
                        if ui.button("Cancel").clicked() {
                            action = Some(false);
                        }
                    });
                });
            match action {
                Some(true) => self.finish_save_as(),
                Some(false) => self.save_as_path = None,
                None => {}
            }
        }

        if let Some(message) = self.notification.clone() {
            egui::Window::new("Notice")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(message);
                    if ui.button("OK").clicked() {
                        self.dismiss_notification();
                    }
                });
        }

        if self.show_help {
            egui::Window::new("Paint Help")
                .open(&mut self.show_help)
                .show(ctx, |ui| {
                    ui.heading("Tools");
                    for tool in Tool::ALL {
                        ui.label(format!("{} {}: {}", tool.icon(), tool.label(), tool.description()));
                    }
                    ui.heading("Tips");
                    ui.label("Use the color picker to choose colors");
                    ui.label("Adjust brush size for different line thicknesses");
                    ui.label("Save your work regularly!");
                });
        }

        if self.show_about {
            egui::Window::new("About Paint")
                .open(&mut self.show_about)
                .collapsible(false)
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Paint");
                        ui.label(ABOUT_VERSION);
                    });
                });
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::menu_bar(self, ctx);
        panels::tools_panel(self, ctx);
        panels::status_bar(self, ctx);
        panels::central_panel(self, ctx);
        self.dialogs(ctx);
    }
}
