use std::{env, error::Error, path::Path, process};

use avlbench::{
    analyzer::Analyzer,
    config::{Config, LOG_CONFIG},
    dataset,
};
use log::{error, info, LevelFilter};
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
};

fn init_logging() {
    if Path::new(LOG_CONFIG).exists() {
        if let Err(e) = log4rs::init_file(LOG_CONFIG, Default::default()) {
            eprintln!("cannot load {}: {}", LOG_CONFIG, e);
        }
        return;
    }

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S%.3f)} {h({l})} - {m}{n}",
        )))
        .build();

    let config = log4rs::config::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info));

    match config {
        Ok(config) => {
            if let Err(e) = log4rs::init_config(config) {
                eprintln!("cannot initialize logging: {}", e);
            }
        }
        Err(e) => eprintln!("invalid logging config: {}", e),
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = Config::from_args(env::args().skip(1))?;
    info!("input args {:?}", config);

    let dataset = dataset::load(&config.dataset)?;
    if let Some(student) = dataset.students.first() {
        info!("first student: {}", student);
    }

    let mut analyzer = Analyzer::new(dataset.students, config.seed);
    let report = analyzer.run(config.searches, config.removals);

    println!("{}", report);
    Ok(())
}

fn main() {
    init_logging();

    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
