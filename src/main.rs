use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::Receiver;

use log::info;
use mandelbrot_explorer::{
    ChannelObserver, ColourScheme, EngineConfig, PixelPosition, PpmFilePresenter, RenderEvent,
    ResultBuffer, ViewportController, WorkerPool, ZOOM_IN_FACTOR,
};

const OUTPUT_DIR: &str = "output";

/// Usage: `mandelbrot_explorer [config.json] [ramp|binary]`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };
    let scheme: ColourScheme = match args.next() {
        Some(name) => name.parse()?,
        None => ColourScheme::default(),
    };

    let initial = config.initial_viewport()?;
    let (observer, events) = ChannelObserver::channel();
    let pool = WorkerPool::from_config(&config, Arc::new(observer))?;
    let mut controller = ViewportController::new(pool, initial);
    let presenter = PpmFilePresenter::new();

    let generation = controller.start()?.generation();
    let frame = wait_for_frame(&events, generation)?;
    write_frame(&presenter, scheme, &frame, initial.max_iter(), "mandelbrot.ppm")?;

    // one wheel notch in, anchored a quarter of the way across the frame
    let anchor = PixelPosition::new(
        f64::from(initial.width_px()) * 0.25,
        f64::from(initial.height_px()) * 0.5,
    );
    let generation = controller.on_zoom(ZOOM_IN_FACTOR, anchor)?.generation();
    let frame = wait_for_frame(&events, generation)?;
    write_frame(&presenter, scheme, &frame, initial.max_iter(), "mandelbrot_zoomed.ppm")?;

    Ok(())
}

fn wait_for_frame(
    events: &Receiver<RenderEvent>,
    generation: u64,
) -> Result<Arc<ResultBuffer>, std::sync::mpsc::RecvError> {
    loop {
        match events.recv()? {
            RenderEvent::JobCompleted(frame) if frame.generation == generation => {
                info!(
                    "frame {} ready after {:?} ({} chunks)",
                    frame.generation, frame.render_duration, frame.chunk_count
                );
                return Ok(frame.buffer);
            }
            _ => {}
        }
    }
}

fn write_frame(
    presenter: &PpmFilePresenter,
    scheme: ColourScheme,
    frame: &ResultBuffer,
    max_iter: u32,
    filename: &str,
) -> std::io::Result<()> {
    let image = scheme.colourize(&frame.snapshot(), max_iter);
    let path: PathBuf = [OUTPUT_DIR, filename].iter().collect();
    presenter.present(&image, &path)?;
    info!("wrote {}", path.display());
    Ok(())
}
