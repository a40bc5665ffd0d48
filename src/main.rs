use geomaps;

fn main() -> Result<(), eframe::Error> {
    // Set up logging; filter with RUST_LOG (e.g. RUST_LOG=geomaps=debug)
    env_logger::init();

    // Run the map labeling application
    geomaps::run_app()
}
