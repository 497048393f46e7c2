fn main() {
    fractal_canvas::init_tracing();

    let presenter_factory = fractal_canvas::PixelsPresenterFactory::new();
    let command = fractal_canvas::RunGuiCommand::new(presenter_factory);

    command.execute();
}
