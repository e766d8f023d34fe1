use fractal_duet::MinifbWindowSystem;
use fractal_duet::cli;
use fractal_duet::coordinator;
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let (width, height) = match cli::parse_dimensions(&args) {
        Ok(dimensions) => dimensions,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!("{}", cli::USAGE);
            process::exit(1);
        }
    };

    println!("Info: opening two {}x{} fractal windows", width, height);

    if let Err(err) = coordinator::run(width, height, MinifbWindowSystem) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }

    println!("Info: done");
}
