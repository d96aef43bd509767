use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Capacity of both the circular queue and the priority queue.
    #[arg(short, long, default_value_t = 100)]
    pub capacity: usize,

    /// Read commands from stdin instead of replaying the built-in demo.
    #[arg(short, long)]
    pub interactive: bool,

    /// Print the final contents of both queues as JSON.
    #[arg(short, long)]
    pub json: bool,
}
