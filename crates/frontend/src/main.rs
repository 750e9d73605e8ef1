mod app;
mod auth_guard;
mod pages;

use app::App;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    // No timer: std time is unavailable in the browser
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(level))
        .init();
}

fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    yew::Renderer::<App>::new().render();
}
