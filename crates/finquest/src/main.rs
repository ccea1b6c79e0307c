use clap::Parser;
use finquest::{Args, DataDirectory, commands, init_logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = DataDirectory::new(
        args.data_dir
            .clone()
            .unwrap_or_else(DataDirectory::default_path),
    );
    data_dir.init()?;
    let config = data_dir.load_config()?;

    let log_level = args
        .log_level
        .clone()
        .or_else(|| config.log_level.clone())
        .unwrap_or_else(|| "info".to_string());
    init_logging(data_dir.root(), &log_level)?;

    let result = commands::run(&args, data_dir, config);

    tracing::info!("finquest exiting");
    result
}
