use crate::config::SketchConfig;
use crate::event::SketchEvent;
use crate::export::{self, Exporter};
use crate::input::{InputHandler, PointerSnapshot};
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::shortcuts::{self, Action};
use crate::state::Sketchpad;
use crate::tools::Tool;

/// The eframe shell around a [`Sketchpad`].
pub struct SketchpadApp {
    config: SketchConfig,
    sketchpad: Sketchpad,
    input: InputHandler,
    renderer: Renderer,
    exporter: Exporter,
    /// Text typed into the custom sticker field
    custom_glyph: String,
    /// Last export or input problem, shown under the buttons
    status: Option<String>,
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_config(&cc.egui_ctx, SketchConfig::default())
    }

    pub fn with_config(ctx: &egui::Context, config: SketchConfig) -> Self {
        let sketchpad = Sketchpad::new(Tool::pen(config.thin_pen));

        // Every change to the history or tools repaints on the next frame.
        let repaint = ctx.clone();
        sketchpad.subscribe(move |event: &SketchEvent| {
            log::trace!("repaint for {event:?}");
            repaint.request_repaint();
        });

        Self {
            renderer: Renderer::new(config.background),
            exporter: Exporter::from_config(&config),
            sketchpad,
            input: InputHandler::new(),
            custom_glyph: String::new(),
            status: None,
            config,
        }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn sketchpad(&self) -> &Sketchpad {
        &self.sketchpad
    }

    pub fn sketchpad_mut(&mut self) -> &mut Sketchpad {
        &mut self.sketchpad
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn custom_glyph_mut(&mut self) -> &mut String {
        &mut self.custom_glyph
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Feed one frame of pointer state to the sketchpad.
    pub fn handle_pointer(&mut self, snapshot: PointerSnapshot) {
        for event in self.input.process(snapshot) {
            self.sketchpad.handle(event);
        }
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.sketchpad.select_tool(tool);
    }

    /// Use the typed text as a sticker. Bad input keeps the current tool.
    pub fn apply_custom_glyph(&mut self) {
        match self.sketchpad.select_custom_sticker(&self.custom_glyph) {
            Ok(()) => self.status = None,
            Err(err) => {
                log::warn!("{err}");
                self.status = Some(err.to_string());
            }
        }
    }

    pub fn undo(&mut self) {
        self.sketchpad.undo();
    }

    pub fn redo(&mut self) {
        self.sketchpad.redo();
    }

    pub fn clear_all(&mut self) {
        self.sketchpad.clear_all();
    }

    /// Render the committed drawing at export scale and save it.
    pub fn export(&mut self) {
        let file_name = self.config.export_file_name;
        let result = self
            .exporter
            .to_png(self.sketchpad.history())
            .and_then(|bytes| export::save_png(&bytes, file_name));
        self.status = Some(match result {
            Ok(()) => format!("Saved {file_name}"),
            Err(err) => {
                log::error!("export failed: {err}");
                format!("Export failed: {err}")
            }
        });
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        match shortcuts::pressed_action(ctx) {
            Some(Action::Undo) => self.undo(),
            Some(Action::Redo) => self.redo(),
            Some(Action::Export) => self.export(),
            None => {}
        }
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
