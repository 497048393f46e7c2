use winit::window::Window;

use crate::core::data::canvas::CanvasSize;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(&self, window: &'static Window, canvas: CanvasSize) -> T;
}
