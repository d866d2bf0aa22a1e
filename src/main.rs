use tracing::Level;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // fixed level; no environment variables are consulted
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .try_init();

    let presenter = fractal_sets::TextSummaryPresenter::stdout();
    let mut controller = fractal_sets::CliGalleryController::new(presenter);

    controller.generate_all(&mut rand::thread_rng())?;

    Ok(())
}
