use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;
use tracing::info;

use carousel::carousel::engine::CarouselEngine;
use carousel::cli::Args;
use carousel::constants::FPS;
use carousel::engine::Engine;
use carousel::logging;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level);

    let config = args.carousel_config()?;
    let source = args.slide_source();
    info!(?source, interval = ?config.slide_interval, "starting carousel");

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut engine = CarouselEngine::initialize(&mut rl, &thread, config, source)?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        engine.update(&rl);

        let mut d = rl.begin_drawing(&thread);
        engine.render_frame(&mut d);
    }

    Ok(())
}
