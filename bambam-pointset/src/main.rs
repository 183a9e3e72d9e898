use bambam_pointset::app::PointSetCliArguments;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = PointSetCliArguments::parse();
    match args.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running bambam_pointset: {e}");
            std::process::exit(1);
        }
    }
}
