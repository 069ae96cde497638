//! inflow-tail – tail a Kafka topic through the ingestion bridge.
//
//  $ inflow-tail --servers localhost:9092 --group g1 --topic chat
//  $ inflow-tail --config inflow.toml --count 10
use inflow::{load_options, Consumer, ConsumerOptions};

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "inflow-tail", version, about = "Tail a topic via the inflow bridge")]
struct Cli {
    /// Path to options TOML; flags below override nothing when set.
    #[arg(long, conflicts_with_all = ["servers", "group", "topic"])]
    config: Option<String>,

    /// Broker endpoints (host:port[,host:port...])
    #[arg(long, default_value = "localhost:9092")]
    servers: String,

    /// Consumer group identifier
    #[arg(long, default_value = "inflow-tail")]
    group: String,

    /// Topic to subscribe to (repeatable)
    #[arg(long)]
    topic: Vec<String>,

    /// Stop after this many messages (default: run until killed)
    #[arg(long)]
    count: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    inflow::logging::init_logging();
    let cli = Cli::parse();

    let options = match cli.config {
        Some(path) => load_options(&path)?,
        None => {
            let mut options = ConsumerOptions::new(cli.servers, cli.group);
            options.topics = cli.topic;
            options
        }
    };

    let consumer = Consumer::connect(options)?;
    let mut seen: u64 = 0;
    loop {
        let msg = consumer.receive()?;
        println!(
            "{}/{}@{} [{}b] {}",
            msg.topic,
            msg.partition,
            msg.offset,
            msg.payload.len(),
            String::from_utf8_lossy(&msg.payload)
        );
        seen += 1;
        if cli.count.is_some_and(|n| seen >= n) {
            break;
        }
    }
    Ok(())
}
