use clap::Parser;

pub fn args_checks() -> Args {
    Args::parse()
}

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address the HTTP server listens on
    #[arg(short = 'b', long, value_name = "ADDR", default_value = "0.0.0.0:8081")]
    pub bind: String,
}
