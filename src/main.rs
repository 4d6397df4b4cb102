use clap::Parser;

use url_strip::strip;

/// Strip tracking parameters and bloat from a url.
#[derive(Parser)]
#[command(name = "url-strip", version, about)]
struct Cli {
    /// The url to strip.
    #[arg(short, long, value_name = "URL")]
    strip: String,
}

fn main() {
    let cli = Cli::parse();

    match strip(&cli.strip) {
        Ok(url) => println!("Stripped url: {}", url),
        Err(err) => {
            eprintln!("Err: {}", err);
            std::process::exit(1);
        }
    }
}
