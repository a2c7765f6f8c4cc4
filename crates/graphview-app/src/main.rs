//! Main application entry point (native).

mod cli;

#[cfg(feature = "native")]
mod file_ops {
    use graphview_core::ShapeFormat;
    use std::path::PathBuf;

    /// Ask the user for a shape file using the native file dialog.
    pub fn pick_shape_file() -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new().set_title("Open File");
        for format in ShapeFormat::ALL {
            dialog = dialog.add_filter(format.label(), &[format.extension()]);
        }
        dialog.pick_file()
    }
}

#[cfg(feature = "native")]
fn main() -> std::process::ExitCode {
    use graphview_core::{ShapeReader, ViewerConfig};
    use graphview_render::{RenderDriver, SvgViewport, ViewerCommand};
    use std::process::ExitCode;
    use std::sync::mpsc;

    env_logger::init();
    log::info!("Starting GraphView");

    let args = match cli::CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", cli::USAGE);
            return ExitCode::from(2);
        }
    };
    if args.help {
        println!("{}", cli::USAGE);
        return ExitCode::SUCCESS;
    }

    let config = args.apply(ViewerConfig::new().with_env_overrides());
    let Some(path) = args.file.clone().or_else(file_ops::pick_shape_file) else {
        log::info!("No file selected");
        return ExitCode::SUCCESS;
    };

    let (tx, rx) = mpsc::channel();
    for command in [ViewerCommand::Resize(config.canvas_size), ViewerCommand::OpenFile(path)] {
        if let Err(e) = tx.send(command) {
            log::error!("Failed to queue command: {}", e);
            return ExitCode::FAILURE;
        }
    }
    drop(tx);

    let mut driver = RenderDriver::new(ShapeReader::new(), SvgViewport::new(), &config);
    if let Err(e) = driver.drain(rx.try_iter()) {
        log::error!("{}", e.user_message());
        return ExitCode::FAILURE;
    }

    let svg = driver.viewport().document();
    match &args.svg {
        Some(out) => {
            if let Err(e) = std::fs::write(out, svg) {
                log::error!("Failed to write SVG: {}", e);
                return ExitCode::FAILURE;
            }
            log::info!("Exported SVG to: {:?}", out);
        }
        None => print!("{}", svg),
    }
    ExitCode::SUCCESS
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
