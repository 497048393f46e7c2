use egui::Context as EguiContext;

use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::point::ScreenPoint;

/// A window-backed presenter: receives frames from the controller and
/// composites them with the egui overlay.
pub trait GuiPresenterPort: InteractiveControllerPresenterPort {
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32);
    /// Maps a physical window position onto the canvas, clamping positions
    /// that fall outside it.
    fn window_pos_to_canvas(&self, position: (f32, f32)) -> ScreenPoint;
}
