use egui::{Align2, Color32, Context};
use egui_winit::State as EguiWinitState;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::events::input::{InputEvent, UiCommand};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::app::window_input::WindowInputState;

const HUD_MARGIN: f32 = 10.0;
const HUD_BACKGROUND_ALPHA: u8 = 120;

pub struct GuiApp<T: GuiPresenterPort> {
    pub scale_factor: f64,
    presenter: T,
    controller: InteractiveController,
    input: WindowInputState,
    frame_stale: bool,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        controller: InteractiveController,
    ) -> Self {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            scale_factor,
            presenter,
            controller,
            input: WindowInputState::default(),
            frame_stale: true,
            egui_ctx,
            egui_state,
        }
    }

    /// Renders the fractal if the state changed, then composites egui on top.
    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), pixels::Error> {
        if self.frame_stale {
            self.controller.redraw_into(&mut self.presenter);
            self.frame_stale = false;
        }

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.presenter.resize(width, height);
        self.apply(InputEvent::Resize {
            layout_width: width,
        });
    }

    /// Feeds an event to the controller; returns whether a repaint is due.
    pub fn apply(&mut self, event: InputEvent) -> bool {
        let needed = self.controller.handle(event).is_needed();
        self.frame_stale |= needed;
        needed
    }

    /// Translates a window event egui did not consume into controller input.
    pub fn handle_canvas_event(&mut self, event: &WindowEvent) -> bool {
        let input = match event {
            WindowEvent::CursorMoved { position, .. } => {
                let canvas_position = self
                    .presenter
                    .window_pos_to_canvas((position.x as f32, position.y as f32));
                Some(self.input.handle_cursor_moved(canvas_position))
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.input.handle_mouse_button(*button, *state)
            }
            WindowEvent::MouseWheel { delta, .. } => Some(self.input.handle_wheel(*delta)),
            WindowEvent::KeyboardInput { event, .. } => {
                self.input.handle_key(&event.logical_key, event.state)
            }
            _ => None,
        };

        input.is_some_and(|event| self.apply(event))
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let hud_lines = self.controller.hud_lines();
        let mut clicked: Vec<UiCommand> = Vec::new();

        let output = self.egui_ctx.run(raw_input, |ctx| {
            egui::TopBottomPanel::top("controls").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for &command in UiCommand::ALL {
                        if ui.button(command.label()).clicked() {
                            clicked.push(command);
                        }
                    }
                });
            });

            egui::Area::new("hud")
                .anchor(Align2::LEFT_BOTTOM, [HUD_MARGIN, -HUD_MARGIN])
                .interactable(false)
                .show(ctx, |ui| {
                    egui::Frame::none()
                        .fill(Color32::from_black_alpha(HUD_BACKGROUND_ALPHA))
                        .rounding(6.0)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            for line in &hud_lines {
                                ui.colored_label(Color32::WHITE, line);
                            }
                        });
                });
        });

        for command in clicked {
            self.apply(InputEvent::Command(command));
        }

        output
    }

    /// Returns `(consumed, repaint)` as reported by egui.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}
