use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use spikeconv::animation::Animation;
use spikeconv::error::DemoError;
use spikeconv::kernel::{Kernel, KernelKind};
use spikeconv::spike_train::SpikeTrain;
use spikeconv::{ui, FRAME_INTERVAL_MS};

/// Demonstrate convolution with different kernel types.
#[derive(Parser, Debug)]
#[command(name = "spikeconv")]
struct Args {
    /// Kernel type to use (boxcar, gaussian, or exponential)
    #[arg(short, long, value_parser = KernelKind::from_str)]
    kernel: KernelKind,
    /// The animation tick interval, in milliseconds
    #[arg(long, default_value_t = FRAME_INTERVAL_MS)]
    interval: u64,
    /// Write logs to this file (the terminal itself is busy drawing)
    #[arg(long)]
    log_file: Option<String>,
}

fn main() -> Result<(), DemoError> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{l} - {m}\n")))
            .build(path)
            .map_err(|e| DemoError::IOError(e.to_string()))?;

        let config = Config::builder()
            .appender(Appender::builder().build("logfile", Box::new(logfile)))
            .build(Root::builder().appender("logfile").build(LevelFilter::Debug))
            .map_err(|e| DemoError::IOError(e.to_string()))?;

        log4rs::init_config(config).map_err(|e| DemoError::IOError(e.to_string()))?;
    }

    log::info!("{:?}", args);

    let signal = SpikeTrain::demo();
    let kernel = Kernel::new(args.kernel);
    log::info!(
        "Animating convolution of {} spikes with the {} kernel",
        signal.spike_indices().len(),
        kernel.kind().label()
    );

    let animation = Animation::new(signal, kernel);
    ui::run(&animation, Duration::from_millis(args.interval))
}
