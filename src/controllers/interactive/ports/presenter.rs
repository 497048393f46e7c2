use crate::controllers::interactive::events::render::RenderEvent;

pub trait InteractiveControllerPresenterPort {
    fn present(&mut self, event: RenderEvent);
}
