use founder_check::{EdgeSet, ParseStats};

use gbwt::GBZ;

use getopts::Options;

use log::{LevelFilter, info};

use sha2::Sha256;

use simple_sds::serialize;

use std::fs::OpenOptions;
use std::io::BufReader;
use std::time::Instant;
use std::{env, process};

//-----------------------------------------------------------------------------

fn main() -> Result<(), String> {
    let config = Config::new()?;
    init_logger(&config);

    let graph_edges = if config.gbz_input {
        read_gbz(&config.graph_file)?
    } else {
        read_gfa(&config.graph_file)?
    };
    let founder_edges = read_founders(&config.founder_file)?;

    if config.digest {
        info!("Graph edge set SHA-256:   {}", graph_edges.digest::<Sha256>());
        info!("Founder edge set SHA-256: {}", founder_edges.digest::<Sha256>());
    }

    let same = graph_edges.is_same(&founder_edges);
    println!("{}", if same { "True" } else { "False" });

    Ok(())
}

//-----------------------------------------------------------------------------

struct Config {
    graph_file: String,
    founder_file: String,
    gbz_input: bool,
    digest: bool,
    verbose: bool,
}

impl Config {
    fn new() -> Result<Self, String> {
        let args: Vec<String> = env::args().collect();
        let program = args[0].clone();
        let header = format!("Usage: {} [options] graph.[gfa|gbz] founders.txt", &program);

        let mut opts = Options::new();
        opts.optflag("g", "gbz", "graph is a GBZ graph (default: GFA)");
        opts.optflag("d", "digest", "log SHA-256 digests of both edge sets");
        opts.optflag("v", "verbose", "log progress and statistics");
        opts.optflag("h", "help", "print this help");
        let matches = opts.parse(&args[1..]).map_err(|e| e.to_string())?;

        if matches.opt_present("h") {
            println!("{}", opts.usage(&header));
            process::exit(0);
        }

        let (graph_file, founder_file) = match (matches.free.first(), matches.free.get(1)) {
            (Some(graph), Some(founders)) => (graph.clone(), founders.clone()),
            _ => return Err(opts.usage(&header)),
        };
        let gbz_input = matches.opt_present("g");
        let digest = matches.opt_present("d");
        let verbose = matches.opt_present("v");

        Ok(Config { graph_file, founder_file, gbz_input, digest, verbose })
    }
}

fn init_logger(config: &Config) {
    let level = if config.verbose || config.digest {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}

//-----------------------------------------------------------------------------

fn print_statistics(kind: &str, edges: &EdgeSet, stats: &ParseStats) {
    info!("{} statistics:", kind);
    info!("  Lines:     {}", stats.lines);
    info!("  Records:   {}", stats.records);
    info!("  Raw edges: {}", stats.raw_edges);
    info!("  Edges:     {}", edges.len());
}

fn read_gfa(filename: &str) -> Result<EdgeSet, String> {
    let start_time = Instant::now();
    info!("Reading graph links from {}", filename);

    let mut options = OpenOptions::new();
    let gfa_file = options.read(true).open(filename)
        .map_err(|e| format!("Error opening GFA file {}: {}", filename, e))?;
    let reader = BufReader::new(gfa_file);
    let (edges, stats) = founder_check::parse_gfa_links(reader)?;

    let seconds = start_time.elapsed().as_secs_f64();
    info!("Parsed the graph in {:.3} seconds", seconds);
    print_statistics("Graph", &edges, &stats);

    Ok(edges)
}

fn read_gbz(filename: &str) -> Result<EdgeSet, String> {
    let start_time = Instant::now();
    info!("Loading GBZ graph from {}", filename);

    let graph: GBZ = serialize::load_from(filename)
        .map_err(|e| format!("Error loading GBZ file {}: {}", filename, e))?;
    let (edges, stats) = founder_check::gbz_edges(&graph);

    let seconds = start_time.elapsed().as_secs_f64();
    info!("Loaded the graph in {:.3} seconds", seconds);
    print_statistics("Graph", &edges, &stats);

    Ok(edges)
}

fn read_founders(filename: &str) -> Result<EdgeSet, String> {
    let start_time = Instant::now();
    info!("Reading founder paths from {}", filename);

    let mut options = OpenOptions::new();
    let founder_file = options.read(true).open(filename)
        .map_err(|e| format!("Error opening founder file {}: {}", filename, e))?;
    let reader = BufReader::new(founder_file);
    let (edges, stats) = founder_check::parse_founders(reader)?;

    let seconds = start_time.elapsed().as_secs_f64();
    info!("Parsed the founders in {:.3} seconds", seconds);
    print_statistics("Founder", &edges, &stats);

    Ok(edges)
}

//-----------------------------------------------------------------------------
