use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Send one message to the model and print its reply
    Chat { message: String },

    /// List recent chat exchanges, newest first
    History {
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Print one stored exchange in full
    Show { id: i64 },
}
