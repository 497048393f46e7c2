use crate::controllers::interactive::state::ExplorerState;
use crate::core::palette::Palette;

/// The three status lines drawn over the canvas.
#[must_use]
pub fn hud_lines(state: &ExplorerState) -> [String; 3] {
    [
        format!(
            "Mode: {} ({})",
            state.mode.display_name(),
            state.mode.control_hint()
        ),
        format!(
            "Depth: {} | Iterations: {}",
            state.depth, state.view.max_iterations
        ),
        format!(
            "Palette: {}/{}  ·  R to reset",
            state.palette.index() + 1,
            Palette::COUNT
        ),
    ]
}
